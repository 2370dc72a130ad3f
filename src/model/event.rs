//! Operational event types: the deployment record at the heart of planning.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PersonnelRequirement, VehicleEntry};

/// One scheduled service: date, time window, location, personnel and
/// vehicle needs.
///
/// A finalized record is immutable. Re-editing one opens a new editing
/// session seeded from it; the session hands back a fresh record carrying
/// the same `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalEvent {
    /// Stable identifier, generated once at creation, never reassigned.
    pub id: Uuid,

    /// Service name, stored upper-cased.
    pub code: String,

    /// Service location, stored upper-cased.
    pub location: String,

    /// Calendar date of the service.
    pub date: Date,

    /// Local time window, formatted as `"HH:MM - HH:MM"`.
    pub time_window: String,

    /// Lifecycle state. New records start in compilation; whatever state a
    /// record has reached is preserved unchanged across edits.
    pub status: EventStatus,

    /// Vigilance category of the service.
    pub vigilance_type: VigilanceType,

    /// Whether this is an Olympic presidio service.
    ///
    /// Derived from `vigilance_type` at finalization, never set on its own.
    pub is_olympic: bool,

    /// Per-role personnel requirements, one entry per role present.
    pub requirements: Vec<PersonnelRequirement>,

    /// Assigned vehicles, in display order.
    pub vehicles: Vec<VehicleEntry>,
}

/// Where a record stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Draft: still being compiled.
    InCompilazione,

    /// Published to the dashboard.
    Pubblicato,
}

/// The vigilance category of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VigilanceType {
    /// Ordinary vigilance service.
    Standard,

    /// Reinforcement of fire-brigade sites.
    Rinforzi,

    /// Olympic presidio: specialist team (SAF/NBCR).
    OlympicSpec,

    /// Olympic presidio: general personnel team.
    OlympicGeneric,
}

impl VigilanceType {
    /// All categories, in form display order.
    pub const ALL: [Self; 4] = [
        Self::Standard,
        Self::Rinforzi,
        Self::OlympicSpec,
        Self::OlympicGeneric,
    ];

    /// True for the Olympic presidio categories.
    pub fn is_olympic(self) -> bool {
        matches!(self, Self::OlympicSpec | Self::OlympicGeneric)
    }

    /// Human-readable caption, as shown by the planning form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Vigilanza Standard",
            Self::Rinforzi => "Rinforzi Sedi VVF",
            Self::OlympicSpec => "Presidio olimpico: squadra specialistici (SAF/NBCR)",
            Self::OlympicGeneric => "Presidio olimpico: squadra personale generico",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn olympic_categories_and_only_those() {
        assert!(!VigilanceType::Standard.is_olympic());
        assert!(!VigilanceType::Rinforzi.is_olympic());
        assert!(VigilanceType::OlympicSpec.is_olympic());
        assert!(VigilanceType::OlympicGeneric.is_olympic());
    }

    #[test]
    fn vigilance_wire_spelling() {
        let json = serde_json::to_string(&VigilanceType::OlympicSpec).unwrap();
        assert_eq!(json, "\"OLYMPIC_SPEC\"");

        let parsed: VigilanceType = serde_json::from_str("\"RINFORZI\"").unwrap();
        assert_eq!(parsed, VigilanceType::Rinforzi);
    }

    #[test]
    fn status_wire_spelling() {
        let json = serde_json::to_string(&EventStatus::InCompilazione).unwrap();
        assert_eq!(json, "\"IN_COMPILAZIONE\"");
    }
}
