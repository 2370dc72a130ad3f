//! Draft validation: the gate between an open draft and a finalized record.
//!
//! Validation is side-effect free and repeatable — a failed pass leaves the
//! session open and editable. Only the required anagraphic fields are
//! checked; quantities and vehicle entries never are, so zero-quantity roles
//! and empty plates pass through untouched.

use jiff::civil::Date;

use crate::session::Draft;

/// Summary banner shown when required fields are missing or invalid.
pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Compila tutti i campi obbligatori per salvare il servizio.";

/// A required form field, named for per-field error highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Code,
    Location,
    Date,
}

/// A rejected save attempt: the failing fields, in form order.
///
/// The `Display` form is the fixed summary banner; callers highlight the
/// individual fields from `fields`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", REQUIRED_FIELDS_MESSAGE)]
pub struct ValidationFailure {
    pub fields: Vec<Field>,
}

/// Check the draft's required fields, returning the parsed service date on
/// success so finalization does not parse it a second time.
///
/// Required: `code` trimmed non-empty, `location` trimmed non-empty, `date`
/// non-empty and a real calendar date.
pub fn validate(draft: &Draft) -> Result<Date, ValidationFailure> {
    let mut fields = Vec::new();

    if draft.code.trim().is_empty() {
        fields.push(Field::Code);
    }
    if draft.location.trim().is_empty() {
        fields.push(Field::Location);
    }

    let date = draft.date.trim().parse::<Date>();
    if date.is_err() {
        fields.push(Field::Date);
    }

    match date {
        Ok(date) if fields.is_empty() => Ok(date),
        _ => Err(ValidationFailure { fields }),
    }
}
