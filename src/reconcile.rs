//! Positional reconciliation of assignment slots across quantity changes.
//!
//! When an existing record is re-edited and a role's required quantity
//! changes, index position is the only correlation between the old and new
//! slot arrays — slots carry no stable identifier of their own. The merge is
//! therefore strictly positional: the earliest slots survive, growth adds
//! empty slots at the end, and shrink drops the highest indices without
//! warning.

use crate::model::{PersonnelRequirement, Role};

/// Build a role's requirement for a record being finalized.
///
/// Copies assignment slots (and entrusted-group values, when the previous
/// requirement tracked them) from `previous` by position, lowest index
/// first, up to the smaller of the two quantities. Slots past the previous
/// quantity stay empty; previous slots past `qty` are discarded.
///
/// With no previous requirement — a new record, or a role the record never
/// had — every slot starts empty.
pub fn reconcile(
    role: Role,
    qty: usize,
    previous: Option<&PersonnelRequirement>,
) -> PersonnelRequirement {
    let mut requirement = PersonnelRequirement::empty(role, qty);

    let Some(previous) = previous else {
        return requirement;
    };

    for (slot, kept) in requirement.assigned_ids.iter_mut().zip(&previous.assigned_ids) {
        slot.clone_from(kept);
    }

    if let Some(groups) = &previous.entrusted_groups {
        let mut carried = vec![None; qty];
        for (slot, kept) in carried.iter_mut().zip(groups) {
            slot.clone_from(kept);
        }
        requirement.entrusted_groups = Some(carried);
    }

    requirement
}
