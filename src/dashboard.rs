//! Dashboard hand-off: where finalized records land.
//!
//! The dashboard owns the published list and the currently selected date.
//! The editing session only hands a finalized record over; deciding between
//! insert and replace, and moving the selected date, happen here. When two
//! sessions were opened from the same record, the last save wins — there is
//! no merge at this boundary.

use jiff::civil::Date;
use uuid::Uuid;

use crate::model::OperationalEvent;

/// The in-memory published list, newest first.
#[derive(Debug, Clone)]
pub struct Dashboard {
    events: Vec<OperationalEvent>,
    selected_date: Date,
}

impl Dashboard {
    /// An empty dashboard focused on the given date.
    pub fn new(selected_date: Date) -> Self {
        Self {
            events: Vec::new(),
            selected_date,
        }
    }

    /// A dashboard seeded with existing records.
    pub fn with_events(events: Vec<OperationalEvent>, selected_date: Date) -> Self {
        Self {
            events,
            selected_date,
        }
    }

    /// Accept a finalized record.
    ///
    /// A record with a known id replaces the existing entry in place; a new
    /// one is prepended. Either way the selected date follows the record.
    pub fn on_save(&mut self, event: OperationalEvent) {
        self.selected_date = event.date;
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.insert(0, event),
        }
    }

    /// All records, newest first.
    pub fn events(&self) -> &[OperationalEvent] {
        &self.events
    }

    /// The date the listing is focused on.
    pub fn selected_date(&self) -> Date {
        self.selected_date
    }

    /// Look up a record by id — the entry point for re-editing one.
    pub fn find(&self, id: Uuid) -> Option<&OperationalEvent> {
        self.events.iter().find(|e| e.id == id)
    }
}
