//! Injected capability that receives validated leads.
//!
//! The page looks up a [`LeadSinkHandle`] in Leptos context and falls back to
//! [`LogLeadSink`] when none was provided. A deployment that forwards leads
//! to a CRM or form endpoint supplies its own implementation from `App`.
//!
//! ERROR HANDLING
//! ==============
//! Sinks report failure with [`LeadSinkError`]. The form stays in its editable
//! state so the visitor can try again.

#[cfg(test)]
#[path = "lead_sink_test.rs"]
mod lead_sink_test;

use std::sync::Arc;

use crate::state::lead_form::FormState;

/// Failure reported by a lead sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadSinkError {
    #[error("lead rejected: {0}")]
    Rejected(String),
    #[error("lead sink unavailable: {0}")]
    Unavailable(String),
}

/// Receives the form values after validation succeeds.
pub trait LeadSink: Send + Sync {
    /// Record one submitted lead.
    ///
    /// # Errors
    ///
    /// Returns [`LeadSinkError`] when the lead could not be recorded.
    fn submit_lead(&self, lead: &FormState) -> Result<(), LeadSinkError>;
}

/// Writes each lead to the diagnostic log and always succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogLeadSink;

impl LeadSink for LogLeadSink {
    fn submit_lead(&self, lead: &FormState) -> Result<(), LeadSinkError> {
        leptos::logging::log!("Form Data Submitted: {}", lead_log_line(lead));
        Ok(())
    }
}

/// Shared sink handle stored in Leptos context.
#[derive(Clone)]
pub struct LeadSinkHandle(pub Arc<dyn LeadSink>);

impl LeadSinkHandle {
    pub fn new(sink: impl LeadSink + 'static) -> Self {
        Self(Arc::new(sink))
    }

    pub fn sink(&self) -> &dyn LeadSink {
        self.0.as_ref()
    }
}

impl Default for LeadSinkHandle {
    fn default() -> Self {
        Self::new(LogLeadSink)
    }
}

impl std::fmt::Debug for LeadSinkHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadSinkHandle").finish_non_exhaustive()
    }
}

/// JSON rendering of a lead for log output.
fn lead_log_line(lead: &FormState) -> String {
    serde_json::to_string(lead).unwrap_or_else(|e| format!("<unserializable lead: {e}>"))
}
