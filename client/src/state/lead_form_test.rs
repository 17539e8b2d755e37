use std::sync::Mutex;

use super::*;
use crate::content::QUALIFICATION_FIELDS;

static MIXED_FIELDS: &[FieldDefinition] = &[
    FieldDefinition { name: "name", label: "Nome", kind: FieldKind::Text, required: true, default_value: None },
    FieldDefinition { name: "company", label: "Empresa", kind: FieldKind::Text, required: false, default_value: None },
    FieldDefinition {
        name: "size",
        label: "Tamanho",
        kind: FieldKind::Select { options: &["Escolha", "Pequena", "Grande"] },
        required: false,
        default_value: Some("Escolha"),
    },
    FieldDefinition {
        name: "channel",
        label: "Canal",
        kind: FieldKind::Select { options: &["Escolha", "Anúncios"] },
        required: true,
        default_value: Some("Escolha"),
    },
];

#[derive(Default)]
struct RecordingSink {
    leads: Mutex<Vec<FormState>>,
}

impl LeadSink for RecordingSink {
    fn submit_lead(&self, lead: &FormState) -> Result<(), LeadSinkError> {
        if let Ok(mut leads) = self.leads.lock() {
            leads.push(lead.clone());
        }
        Ok(())
    }
}

impl RecordingSink {
    fn count(&self) -> usize {
        self.leads.lock().map(|leads| leads.len()).unwrap_or_default()
    }
}

struct FailingSink;

impl LeadSink for FailingSink {
    fn submit_lead(&self, _lead: &FormState) -> Result<(), LeadSinkError> {
        Err(LeadSinkError::Unavailable("offline".into()))
    }
}

fn filled_qualification_form() -> LeadForm {
    let mut form = LeadForm::new(QUALIFICATION_FIELDS);
    form.edit("name", "Ana".to_owned());
    form.edit("email", "a@b.com".to_owned());
    form.edit("service", "Consultoria".to_owned());
    form.edit("revenue", "Até R$ 5.000".to_owned());
    form
}

// =============================================================
// FieldKind / FieldDefinition
// =============================================================

#[test]
fn field_kind_input_type_matches_native_kind() {
    assert_eq!(FieldKind::Text.input_type(), Some("text"));
    assert_eq!(FieldKind::Email.input_type(), Some("email"));
    assert_eq!(FieldKind::Select { options: &["a"] }.input_type(), None);
}

#[test]
fn field_kind_placeholder_is_first_option() {
    assert_eq!(FieldKind::Select { options: &["Escolha", "Sim"] }.placeholder(), Some("Escolha"));
    assert_eq!(FieldKind::Select { options: &[] }.placeholder(), None);
    assert_eq!(FieldKind::Email.placeholder(), None);
}

#[test]
fn optional_field_accepts_anything() {
    let field = MIXED_FIELDS[2];
    assert!(field.accepts(""));
    assert!(field.accepts("Escolha"));
}

#[test]
fn required_field_accepts_whitespace_as_non_empty() {
    assert!(MIXED_FIELDS[0].accepts("  "));
}

// =============================================================
// Initialize
// =============================================================

#[test]
fn initial_state_has_one_entry_per_field_with_defaults() {
    let state = FormState::initial(MIXED_FIELDS);
    assert_eq!(state.len(), MIXED_FIELDS.len());
    let entries: Vec<_> = state.iter().collect();
    assert_eq!(
        entries,
        vec![("name", ""), ("company", ""), ("size", "Escolha"), ("channel", "Escolha")]
    );
}

#[test]
fn initial_state_of_empty_field_list_is_empty() {
    assert!(FormState::initial(&[]).is_empty());
}

#[test]
fn new_form_starts_in_form_status() {
    let form = LeadForm::new(QUALIFICATION_FIELDS);
    assert_eq!(form.status(), SubmissionStatus::Form);
    assert!(!form.status().is_submitted());
    assert_eq!(form.value("revenue"), "Selecione uma opção");
    assert_eq!(form.value("name"), "");
}

// =============================================================
// Edit
// =============================================================

#[test]
fn edit_changes_only_the_named_entry() {
    let mut form = LeadForm::new(MIXED_FIELDS);
    let before = form.values().clone();
    assert!(form.edit("company", "ACME".to_owned()));
    for (name, value) in form.values().iter() {
        if name == "company" {
            assert_eq!(value, "ACME");
        } else {
            assert_eq!(Some(value), before.get(name));
        }
    }
}

#[test]
fn edit_unknown_field_is_ignored() {
    let mut form = LeadForm::new(MIXED_FIELDS);
    let before = form.clone();
    assert!(!form.edit("phone", "123".to_owned()));
    assert_eq!(form, before);
}

// =============================================================
// Validate
// =============================================================

#[test]
fn validate_accepts_complete_scenario() {
    assert!(filled_qualification_form().validate());
}

#[test]
fn validate_rejects_select_left_on_placeholder() {
    let mut form = filled_qualification_form();
    form.edit("revenue", "Selecione uma opção".to_owned());
    assert!(!form.validate());
}

#[test]
fn validate_rejects_empty_required_text() {
    let mut form = filled_qualification_form();
    form.edit("name", String::new());
    assert!(!form.validate());
}

#[test]
fn validate_ignores_optional_fields() {
    let mut form = LeadForm::new(MIXED_FIELDS);
    form.edit("name", "Ana".to_owned());
    form.edit("channel", "Anúncios".to_owned());
    assert!(form.validate());
}

#[test]
fn check_reports_every_failing_required_field() {
    let form = LeadForm::new(QUALIFICATION_FIELDS);
    let failure = form.check().unwrap_err();
    assert_eq!(failure.fields, vec!["name", "email", "service", "revenue"]);
    assert_eq!(failure.to_string(), VALIDATION_ALERT);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_with_invalid_data_leaves_state_untouched() {
    let sink = RecordingSink::default();
    let mut form = LeadForm::new(QUALIFICATION_FIELDS);
    form.edit("name", "Ana".to_owned());
    let before = form.clone();

    let outcome = form.submit(&sink);

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(form, before);
    assert_eq!(sink.count(), 0);
}

#[test]
fn submit_with_valid_data_thanks_once() {
    let sink = RecordingSink::default();
    let mut form = filled_qualification_form();

    assert_eq!(form.submit(&sink), SubmitOutcome::Accepted);
    assert_eq!(form.status(), SubmissionStatus::Thanked);
    assert_eq!(sink.count(), 1);

    assert_eq!(form.submit(&sink), SubmitOutcome::Ignored);
    assert_eq!(form.status(), SubmissionStatus::Thanked);
    assert_eq!(sink.count(), 1);
}

#[test]
fn submit_hands_current_values_to_sink() {
    let sink = RecordingSink::default();
    let mut form = filled_qualification_form();
    form.submit(&sink);

    let leads = sink.leads.lock().unwrap();
    assert_eq!(leads[0].get("email"), Some("a@b.com"));
    assert_eq!(leads[0].get("revenue"), Some("Até R$ 5.000"));
}

#[test]
fn submit_sink_failure_keeps_form_editable() {
    let mut form = filled_qualification_form();
    let outcome = form.submit(&FailingSink);
    assert_eq!(outcome, SubmitOutcome::SinkFailed(LeadSinkError::Unavailable("offline".into())));
    assert_eq!(form.status(), SubmissionStatus::Form);
}

#[test]
fn pending_lead_copies_values_of_valid_form() {
    let form = filled_qualification_form();
    let lead = form.pending_lead().unwrap();
    assert_eq!(&lead, form.values());
}

#[test]
fn pending_lead_reports_rejection_and_ignore() {
    let mut form = LeadForm::new(QUALIFICATION_FIELDS);
    assert!(matches!(form.pending_lead(), Err(SubmitOutcome::Rejected(_))));

    form.mark_submitted();
    assert_eq!(form.pending_lead(), Err(SubmitOutcome::Ignored));
}
