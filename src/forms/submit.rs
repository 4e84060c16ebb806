//! # Submission Service
//!
//! The abstract endpoint behind the form flows. The kiosk ships with a
//! local simulation; a real backend would implement the same trait and
//! drop in without touching validation or the UI state machine.

use std::time::Duration;

use thiserror::Error;

use crate::forms::{validate, FormId, FormSpec, ValidationError};

/// What an accepted submission comes back with: the confirmation text and
/// how long the round trip takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub message: String,
    pub latency: Duration,
}

/// Why a submission was refused.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A backend turned the request down. The local simulation never
    /// produces this.
    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// A submission endpoint: checks the values and answers with a receipt.
pub trait SubmissionService {
    fn submit(&mut self, spec: &FormSpec, values: &[String]) -> Result<Receipt, SubmitError>;
}

/// The no-backend endpoint: validates locally and answers with the
/// templated confirmation after the spec's simulated latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSubmission;

impl SubmissionService for SimulatedSubmission {
    fn submit(&mut self, spec: &FormSpec, values: &[String]) -> Result<Receipt, SubmitError> {
        validate(spec, values)?;
        Ok(Receipt {
            message: confirmation_message(spec, values),
            latency: spec.latency,
        })
    }
}

/// Trimmed value of the named field. Validation has already run by the
/// time templates are filled in, so a missing field only happens on a
/// spec mismatch and renders as an empty slot.
fn field_value<'a>(spec: &FormSpec, values: &'a [String], name: &str) -> &'a str {
    spec.fields
        .iter()
        .position(|field| field.name == name)
        .and_then(|idx| values.get(idx))
        .map(|value| value.trim())
        .unwrap_or("")
}

/// Interpolate the per-form confirmation template.
fn confirmation_message(spec: &FormSpec, values: &[String]) -> String {
    match spec.id {
        FormId::Contact => format!(
            "Thanks {}! Your message has been received. We will reply to {} shortly.",
            field_value(spec, values, "name"),
            field_value(spec, values, "email"),
        ),
        FormId::Order => format!(
            "Thanks {}! Your order has been received. We will contact you shortly on the number provided.",
            field_value(spec, values, "first name"),
        ),
        FormId::Enquiry => format!(
            "Thank you {}! Your enquiry about \"{}\" has been received. We will reply to {}.",
            field_value(spec, values, "name"),
            field_value(spec, values, "service"),
            field_value(spec, values, "email"),
        ),
    }
}
