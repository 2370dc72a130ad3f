//! Assetto: composition core for operational deployment records.
//!
//! A deployment record ("servizio") specifies a date, a time window, a
//! location, a vigilance category, per-role personnel requirements, and a
//! roster of assigned vehicles. This crate owns the logic behind the
//! planning form: draft state for one editing session, requirement and
//! roster mutation, required-field validation, and the positional
//! reconciliation of assignment slots when an existing record is re-edited
//! with changed quantities.
//!
//! The surrounding screens — dashboard listing, staff roster, the Olympic
//! generator, login — are external collaborators. They feed opaque person
//! references in and receive finalized records out; persistence and
//! scheduling are theirs, not ours.

pub mod dashboard;
pub mod model;
pub mod reconcile;
pub mod session;
pub mod validate;

pub use dashboard::Dashboard;
pub use model::{
    EventStatus, OperationalEvent, PersonnelRequirement, Role, VehicleEntry, VehicleType,
    VigilanceType,
};
pub use session::{Draft, EditSession, RequirementLedger, VehicleRoster};
pub use validate::{Field, ValidationFailure};
