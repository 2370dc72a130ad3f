//! Editing session: the single open draft and its lifecycle.
//!
//! An [`EditSession`] is opened for a new record or seeded from an existing
//! one, mutated through the operations below, and closed exactly one of two
//! ways: a successful [`EditSession::save`] hands back a finalized immutable
//! record, or [`EditSession::cancel`] discards everything. A failed save
//! leaves the session open and editable — there is no autosave and no
//! partial persistence.
//!
//! The session is the sole owner of the draft. The roster and ledger are
//! reached only through it, and the record being edited (if any) is held
//! here untouched until save-time reconciliation.

mod ledger;
mod roster;

use jiff::civil::{Date, Time, time};
use uuid::Uuid;

use crate::model::{
    EventStatus, OperationalEvent, PersonnelRequirement, Role, VehicleType, VigilanceType,
};
use crate::reconcile::reconcile;
use crate::validate::{self, Field, ValidationFailure};

pub use ledger::{RequirementLedger, RoleCount};
pub use roster::VehicleRoster;

/// Form defaults for the service time window.
const DEFAULT_START: Time = time(8, 0, 0, 0);
const DEFAULT_END: Time = time(16, 0, 0, 0);

/// The mutable working state of one editing session.
///
/// `code`, `location`, and `date` hold raw form input; they are checked and
/// normalized only at save. `date` is ISO `YYYY-MM-DD` once picked.
#[derive(Debug, Clone)]
pub struct Draft {
    pub code: String,
    pub location: String,
    pub date: String,
    pub start: Time,
    pub end: Time,
    pub vigilance: VigilanceType,
    pub roster: VehicleRoster,
    pub ledger: RequirementLedger,
}

/// One editing session over a single draft.
#[derive(Debug)]
pub struct EditSession {
    draft: Draft,
    previous: Option<OperationalEvent>,
    errors: Vec<Field>,
    summary: Option<String>,
}

impl EditSession {
    /// Open a session for a new record.
    ///
    /// The date is seeded from the dashboard's currently selected date;
    /// everything else starts at the form defaults.
    pub fn create(default_date: Date) -> Self {
        Self {
            draft: Draft {
                code: String::new(),
                location: String::new(),
                date: default_date.to_string(),
                start: DEFAULT_START,
                end: DEFAULT_END,
                vigilance: VigilanceType::Standard,
                roster: VehicleRoster::new(),
                ledger: RequirementLedger::baseline(),
            },
            previous: None,
            errors: Vec::new(),
            summary: None,
        }
    }

    /// Open a session seeded from an existing record.
    ///
    /// The ledger is a quantity-only projection: assignment slots stay on
    /// the retained record and are reconciled at save. A malformed half of
    /// the stored time window falls back to the form default.
    pub fn edit(event: OperationalEvent) -> Self {
        let (start, end) = parse_time_window(&event.time_window);
        Self {
            draft: Draft {
                code: event.code.clone(),
                location: event.location.clone(),
                date: event.date.to_string(),
                start,
                end,
                vigilance: event.vigilance_type,
                roster: VehicleRoster::from_entries(event.vehicles.clone()),
                ledger: RequirementLedger::from_event(&event),
            },
            previous: Some(event),
            errors: Vec::new(),
            summary: None,
        }
    }

    /// The current draft, for rendering.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The record being edited, if this session is an edit.
    pub fn editing(&self) -> Option<&OperationalEvent> {
        self.previous.as_ref()
    }

    // ── Form fields ──

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.draft.code = code.into();
        self.clear_error(Field::Code);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.draft.location = location.into();
        self.clear_error(Field::Location);
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
        self.clear_error(Field::Date);
    }

    pub fn set_start(&mut self, start: Time) {
        self.draft.start = start;
        self.summary = None;
    }

    pub fn set_end(&mut self, end: Time) {
        self.draft.end = end;
        self.summary = None;
    }

    pub fn set_vigilance(&mut self, vigilance: VigilanceType) {
        self.draft.vigilance = vigilance;
        self.summary = None;
    }

    // ── Vehicle roster ──

    pub fn add_vehicle(&mut self, vehicle_type: VehicleType) {
        self.draft.roster.add(vehicle_type);
    }

    pub fn remove_vehicle_at(&mut self, index: usize) {
        self.draft.roster.remove_at(index);
    }

    pub fn set_plate(&mut self, index: usize, plate: &str) {
        self.draft.roster.set_plate(index, plate);
    }

    // ── Requirement ledger ──

    pub fn increment(&mut self, role: Role) {
        self.draft.ledger.increment(role);
    }

    pub fn decrement(&mut self, role: Role) {
        self.draft.ledger.decrement(role);
    }

    // ── Lifecycle ──

    /// Validate the draft and finalize it into an immutable record.
    ///
    /// On failure the failing fields and summary banner are recorded on the
    /// session, no record is constructed, and the session stays open. On
    /// success each ledger entry is reconciled against the matching
    /// requirement of the record being edited; identity and status carry
    /// over from that record, or are freshly assigned for a new one.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationFailure`] when a required field is missing
    /// or the date does not parse.
    pub fn save(&mut self) -> Result<OperationalEvent, ValidationFailure> {
        let date = match validate::validate(&self.draft) {
            Ok(date) => date,
            Err(failure) => {
                self.errors = failure.fields.clone();
                self.summary = Some(failure.to_string());
                return Err(failure);
            }
        };

        let requirements: Vec<PersonnelRequirement> = self
            .draft
            .ledger
            .counts()
            .iter()
            .map(|count| {
                reconcile(
                    count.role,
                    count.qty,
                    self.previous_requirement(count.role),
                )
            })
            .collect();

        let (id, status) = match &self.previous {
            Some(previous) => (previous.id, previous.status),
            None => (Uuid::new_v4(), EventStatus::InCompilazione),
        };

        Ok(OperationalEvent {
            id,
            code: self.draft.code.to_uppercase(),
            location: self.draft.location.to_uppercase(),
            date,
            time_window: format_time_window(self.draft.start, self.draft.end),
            status,
            vigilance_type: self.draft.vigilance,
            is_olympic: self.draft.vigilance.is_olympic(),
            requirements,
            vehicles: self.draft.roster.entries().to_vec(),
        })
    }

    /// Discard the session. Nothing is emitted and the draft is gone.
    #[allow(clippy::unused_self)] // Consuming the session is the whole point.
    pub fn cancel(self) {}

    // ── Error state ──

    /// Fields marked failing by the last rejected save.
    pub fn field_errors(&self) -> &[Field] {
        &self.errors
    }

    /// The summary banner from the last rejected save, until the next edit.
    pub fn error_summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Any form change dismisses the banner; changing a required field also
    /// clears that field's own mark, while other marks persist.
    fn clear_error(&mut self, field: Field) {
        self.errors.retain(|f| *f != field);
        self.summary = None;
    }

    fn previous_requirement(&self, role: Role) -> Option<&PersonnelRequirement> {
        self.previous
            .as_ref()
            .and_then(|event| event.requirements.iter().find(|r| r.role == role))
    }
}

/// Split a stored `"HH:MM - HH:MM"` window back into its halves.
fn parse_time_window(window: &str) -> (Time, Time) {
    let mut halves = window.splitn(2, " - ");
    let start = halves
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_START);
    let end = halves
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_END);
    (start, end)
}

fn format_time_window(start: Time, end: Time) -> String {
    format!(
        "{:02}:{:02} - {:02}:{:02}",
        start.hour(),
        start.minute(),
        end.hour(),
        end.minute()
    )
}
