//! Qualification form model: field definitions, live values, and the
//! submitted/not-submitted status.
//!
//! DESIGN
//! ======
//! The field list is `'static` data. `LeadForm` owns the value map and the
//! status flag; the landing page keeps one inside an `RwSignal` and routes
//! every input event through [`LeadForm::edit`] and every submit through
//! [`LeadForm::submit`]. Events are handled one at a time on the UI thread,
//! so a plain mutable map is enough.
//!
//! The status is one-way: once `Thanked`, the form is no longer rendered and
//! further submits are ignored.

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use serde::Serialize;
use serde::ser::Serializer;

use crate::net::lead_sink::{LeadSink, LeadSinkError};

/// Message shown to the visitor when a required field is missing.
pub const VALIDATION_ALERT: &str = "Por favor, preencha todos os campos obrigatórios corretamente.";

// =============================================================================
// FIELD DEFINITIONS
// =============================================================================

/// Input kind of a form field. Selects carry their option list; `options[0]`
/// is the "nothing chosen yet" placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Select { options: &'static [&'static str] },
}

impl FieldKind {
    /// Native `<input type=...>` for non-select kinds.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Select { .. } => None,
        }
    }

    /// Placeholder sentinel of a select, if any.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Select { options } => options.first().copied(),
            Self::Text | Self::Email => None,
        }
    }
}

/// Static descriptor of one form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default_value: Option<&'static str>,
}

impl FieldDefinition {
    /// Value used to seed form state.
    pub fn initial_value(&self) -> &'static str {
        self.default_value.unwrap_or("")
    }

    /// Whether `value` satisfies this field. Optional fields always pass.
    pub fn accepts(&self, value: &str) -> bool {
        if !self.required {
            return true;
        }
        if value.is_empty() {
            return false;
        }
        self.kind.placeholder() != Some(value)
    }
}

// =============================================================================
// FORM STATE
// =============================================================================

/// Current value of every defined field, in definition order.
///
/// Always holds exactly one entry per field; keys never change after
/// [`FormState::initial`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    entries: Vec<(&'static str, String)>,
}

impl FormState {
    /// Seed one entry per field from its default (or the empty string).
    pub fn initial(fields: &[FieldDefinition]) -> Self {
        let entries = fields
            .iter()
            .map(|field| (field.name, field.initial_value().to_owned()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the value at `name`. Returns `false` (and changes nothing) for
    /// names that are not part of the form.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// Which view the qualification section shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Form,
    Thanked,
}

impl SubmissionStatus {
    pub fn is_submitted(self) -> bool {
        matches!(self, Self::Thanked)
    }
}

/// Raised when one or more required fields are empty or still on their
/// placeholder. `fields` lists every failing field in definition order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", VALIDATION_ALERT)]
pub struct ValidationFailure {
    pub fields: Vec<&'static str>,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Valid data handed to the sink; the form moved to `Thanked`.
    Accepted,
    /// Validation failed; nothing changed.
    Rejected(ValidationFailure),
    /// Data was valid but the sink refused it; nothing changed.
    SinkFailed(LeadSinkError),
    /// The form was already submitted.
    Ignored,
}

// =============================================================================
// LEAD FORM
// =============================================================================

/// Form definitions, live values, and submission status for one page mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadForm {
    fields: &'static [FieldDefinition],
    values: FormState,
    status: SubmissionStatus,
}

impl LeadForm {
    pub fn new(fields: &'static [FieldDefinition]) -> Self {
        Self { fields, values: FormState::initial(fields), status: SubmissionStatus::Form }
    }

    pub fn fields(&self) -> &'static [FieldDefinition] {
        self.fields
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).unwrap_or_default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Store a new value for `name`. No validation happens here.
    pub fn edit(&mut self, name: &str, value: String) -> bool {
        self.values.set(name, value)
    }

    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Evaluate every required field and report all that fail.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure`] naming each required field that is empty
    /// or, for selects, still set to its placeholder.
    pub fn check(&self) -> Result<(), ValidationFailure> {
        let failing: Vec<&'static str> = self
            .fields
            .iter()
            .filter(|field| !field.accepts(self.value(field.name)))
            .map(|field| field.name)
            .collect();
        if failing.is_empty() { Ok(()) } else { Err(ValidationFailure { fields: failing }) }
    }

    /// Validated copy of the values, ready to hand to a sink.
    ///
    /// # Errors
    ///
    /// Returns the outcome to report instead: `Ignored` once the form is
    /// already `Thanked`, `Rejected` when validation fails.
    pub fn pending_lead(&self) -> Result<FormState, SubmitOutcome> {
        if self.status.is_submitted() {
            return Err(SubmitOutcome::Ignored);
        }
        self.check().map_err(SubmitOutcome::Rejected)?;
        Ok(self.values.clone())
    }

    /// Switch to the thank-you view. There is no way back.
    pub fn mark_submitted(&mut self) {
        self.status = SubmissionStatus::Thanked;
    }

    /// Validate, hand the values to `sink`, and switch to `Thanked`.
    ///
    /// The state only changes when both validation and the sink succeed.
    pub fn submit(&mut self, sink: &dyn LeadSink) -> SubmitOutcome {
        let lead = match self.pending_lead() {
            Ok(lead) => lead,
            Err(outcome) => return outcome,
        };
        if let Err(err) = sink.submit_lead(&lead) {
            return SubmitOutcome::SinkFailed(err);
        }
        self.mark_submitted();
        SubmitOutcome::Accepted
    }
}
