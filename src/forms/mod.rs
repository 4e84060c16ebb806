//! # Form Flows
//!
//! The site's three forms (contact, order, enquiry) used to be
//! near-duplicate handlers; here they are one parameterized flow. A
//! [`FormSpec`] names the required fields, the simulated round-trip
//! latency and how long the confirmation stays up; the UI drives editing
//! and hands the values to a [`SubmissionService`].
//!
//! Validation policy is the same for every form: each field is required,
//! and message fields must reach their minimum length.

pub mod submit;

pub use submit::{Receipt, SimulatedSubmission, SubmissionService, SubmitError};

use std::time::Duration;

use thiserror::Error;

/// Services offered on the enquiry form, matching the accordion sections
/// on the same page.
pub const SERVICE_OPTIONS: &[&str] = &[
    "Custom Celebration Cakes",
    "Wedding Cakes",
    "Cupcake & Treat Trays",
    "Baking Classes",
];

/// Which form a spec describes. Decides the confirmation template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormId {
    Contact,
    Order,
    Enquiry,
}

/// How a field is edited and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, single line.
    Text,
    /// Free text rendered tall, e.g. the message body.
    Message,
    /// One option out of a fixed list, cycled with the arrow keys.
    Select(&'static [&'static str]),
}

/// One required field of a form.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Lowercase human name used in validation notices and templates.
    pub name: &'static str,
    /// Label rendered next to the input.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Minimum trimmed length in characters. Zero means "non-empty is
    /// enough".
    pub min_len: usize,
}

impl FieldSpec {
    fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            min_len: 0,
        }
    }

    fn message(name: &'static str, label: &'static str, min_len: usize) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Message,
            min_len,
        }
    }

    fn select(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select(options),
            min_len: 0,
        }
    }
}

/// A complete form definition: the fields plus flow timing and labels.
#[derive(Debug, Clone)]
pub struct FormSpec {
    pub id: FormId,
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
    pub submit_label: &'static str,
    /// Simulated round-trip before the confirmation appears.
    pub latency: Duration,
    /// How long the confirmation stays up before hiding itself.
    pub confirmation_visible: Duration,
}

/// The contact page form.
pub fn contact_form() -> FormSpec {
    FormSpec {
        id: FormId::Contact,
        title: "Send us a message",
        fields: vec![
            FieldSpec::text("name", "Name"),
            FieldSpec::text("email", "Email"),
            FieldSpec::message("message", "Message", 10),
        ],
        submit_label: "Send message",
        latency: Duration::from_millis(500),
        confirmation_visible: Duration::from_secs(7),
    }
}

/// The order page form.
pub fn order_form() -> FormSpec {
    FormSpec {
        id: FormId::Order,
        title: "Place your order",
        fields: vec![
            FieldSpec::text("first name", "First name"),
            FieldSpec::text("last name", "Last name"),
            FieldSpec::text("phone number", "Phone number"),
        ],
        submit_label: "Place order",
        latency: Duration::from_millis(500),
        confirmation_visible: Duration::from_secs(8),
    }
}

/// The enquiry form on the services page.
pub fn enquiry_form() -> FormSpec {
    FormSpec {
        id: FormId::Enquiry,
        title: "Ask about a service",
        fields: vec![
            FieldSpec::text("name", "Name"),
            FieldSpec::text("email", "Email"),
            FieldSpec::select("service", "Service", SERVICE_OPTIONS),
            FieldSpec::message("message", "Message", 10),
        ],
        submit_label: "Send enquiry",
        latency: Duration::from_millis(600),
        confirmation_visible: Duration::from_secs(7),
    }
}

/// A submission that failed the validation policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the {field} field.")]
    EmptyField { field: &'static str },
    #[error("The {field} must be at least {min} characters.")]
    TooShort { field: &'static str, min: usize },
}

/// Check values against a spec. Every field is required; fields with a
/// minimum length must reach it after trimming.
pub fn validate(spec: &FormSpec, values: &[String]) -> Result<(), ValidationError> {
    for (field, value) in spec.fields.iter().zip(values) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField { field: field.name });
        }
        if trimmed.chars().count() < field.min_len {
            return Err(ValidationError::TooShort {
                field: field.name,
                min: field.min_len,
            });
        }
    }
    Ok(())
}
