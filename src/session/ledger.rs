//! Requirement ledger: per-role working quantities while a draft is open.
//!
//! The ledger only tracks counts. Assignment slots are deliberately left
//! out of the working view — they are reconciled against the previous
//! record at save time, so that quantity edits never touch slot data until
//! the one finalization step.

use crate::model::{OperationalEvent, Role};

/// A role's working quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCount {
    pub role: Role,
    pub qty: usize,
}

/// The draft's per-role quantities, in display order.
///
/// The set of roles is fixed for the lifetime of the ledger: a role whose
/// quantity reaches zero is retained, never removed, so reconciliation
/// always has a defined target for every role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementLedger {
    counts: Vec<RoleCount>,
}

impl RequirementLedger {
    /// The baseline for a new record: one functionary, one post chief, one
    /// firefighter, no extras.
    pub fn baseline() -> Self {
        Self {
            counts: vec![
                RoleCount { role: Role::Dir, qty: 1 },
                RoleCount { role: Role::Cp, qty: 1 },
                RoleCount { role: Role::Vig, qty: 1 },
                RoleCount { role: Role::Altro, qty: 0 },
            ],
        }
    }

    /// Project an existing record's requirements down to `{role, qty}`.
    pub fn from_event(event: &OperationalEvent) -> Self {
        Self {
            counts: event
                .requirements
                .iter()
                .map(|r| RoleCount { role: r.role, qty: r.qty })
                .collect(),
        }
    }

    /// Raise a role's quantity by one.
    pub fn increment(&mut self, role: Role) {
        if let Some(count) = self.count_mut(role) {
            count.qty += 1;
        }
    }

    /// Lower a role's quantity by one, clamped at zero.
    pub fn decrement(&mut self, role: Role) {
        if let Some(count) = self.count_mut(role) {
            count.qty = count.qty.saturating_sub(1);
        }
    }

    /// A role's current quantity; zero for a role the ledger does not track.
    pub fn qty(&self, role: Role) -> usize {
        self.counts
            .iter()
            .find(|c| c.role == role)
            .map_or(0, |c| c.qty)
    }

    /// All counts, in display order.
    pub fn counts(&self) -> &[RoleCount] {
        &self.counts
    }

    fn count_mut(&mut self, role: Role) -> Option<&mut RoleCount> {
        self.counts.iter_mut().find(|c| c.role == role)
    }
}
