//! Vehicle types: the closed catalogue and the roster rows built from it.

use serde::{Deserialize, Serialize};

/// One vehicle on a service's roster.
///
/// Multiple vehicles of the same type are separate entries in display
/// order; `qty` stays at 1 per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleEntry {
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,

    /// Plate, free text, stored upper-cased. May stay empty until assigned.
    pub plate: String,

    pub qty: u32,
}

/// The closed vehicle catalogue offered by the planning form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleType {
    /// Staff car.
    Auto,

    /// Autoscala — ladder truck.
    As,

    /// Autopompa serbatoio — pumper.
    Aps,

    /// Autobotte pompa — water tender.
    Abp,

    Bus,

    Furgone,

    #[serde(rename = "MEZZO PESANTE")]
    MezzoPesante,
}

impl VehicleType {
    /// The full catalogue, in form display order.
    pub const ALL: [Self; 7] = [
        Self::Auto,
        Self::As,
        Self::Aps,
        Self::Abp,
        Self::Bus,
        Self::Furgone,
        Self::MezzoPesante,
    ];

    /// Catalogue label, as printed on the add buttons and the roster rows.
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::As => "AS",
            Self::Aps => "APS",
            Self::Abp => "ABP",
            Self::Bus => "BUS",
            Self::Furgone => "FURGONE",
            Self::MezzoPesante => "MEZZO PESANTE",
        }
    }
}
