//! Personnel requirements: per-role headcount and assignment slots.

use serde::{Deserialize, Serialize};

/// A role category's needed headcount plus its per-slot assignment state.
///
/// `assigned_ids` always holds exactly `qty` slots. Each slot carries an
/// opaque person reference from the staff roster, or `None` while unfilled.
/// References are never dereferenced or checked here — the roster owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelRequirement {
    pub role: Role,

    /// Required headcount for this role.
    pub qty: usize,

    /// Assignment slots, one per required head.
    pub assigned_ids: Vec<Option<String>>,

    /// Per-slot entrusted-group metadata, parallel to `assigned_ids`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrusted_groups: Option<Vec<Option<String>>>,
}

impl PersonnelRequirement {
    /// An unfilled requirement: `qty` empty slots, no group metadata.
    pub fn empty(role: Role, qty: usize) -> Self {
        Self {
            role,
            qty,
            assigned_ids: vec![None; qty],
            entrusted_groups: None,
        }
    }
}

/// Personnel role categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Functionary in charge of the service.
    Dir,

    /// Post chief.
    Cp,

    /// Firefighter.
    Vig,

    /// Anything outside the three operational roles.
    Altro,
}

impl Role {
    /// All roles, in ledger order.
    pub const ALL: [Self; 4] = [Self::Dir, Self::Cp, Self::Vig, Self::Altro];

    /// Human-readable label, as shown by the planning form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dir => "Funzionario",
            Self::Cp => "Capo Posto",
            Self::Vig => "Vigile del Fuoco",
            Self::Altro => "Altro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_requirement_has_qty_slots() {
        let req = PersonnelRequirement::empty(Role::Vig, 3);
        assert_eq!(req.qty, 3);
        assert_eq!(req.assigned_ids, vec![None, None, None]);
        assert!(req.entrusted_groups.is_none());
    }

    #[test]
    fn role_wire_spelling() {
        let json = serde_json::to_string(&Role::Altro).unwrap();
        assert_eq!(json, "\"ALTRO\"");

        let parsed: Role = serde_json::from_str("\"DIR\"").unwrap();
        assert_eq!(parsed, Role::Dir);
    }

    #[test]
    fn requirement_wire_shape() {
        let req = PersonnelRequirement {
            role: Role::Dir,
            qty: 2,
            assigned_ids: vec![Some("P1".into()), None],
            entrusted_groups: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["assignedIds"][0], "P1");
        // Absent group metadata is omitted, not serialized as null.
        assert!(json.get("entrustedGroups").is_none());
    }
}
