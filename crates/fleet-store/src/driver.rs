//! Driver registry record.

use fleet_core::DriverId;

/// A driver known to the organization.
///
/// Read-only from the engine's perspective; rosters and delegations decide
/// who actually works a given day.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Driver {
    pub id:   DriverId,
    pub name: String,
    /// `true` for drivers who may stand in for others via delegation.
    pub is_agent: bool,
}

impl Driver {
    /// Display name, tagged when the driver serves as a delegate.
    pub fn tagged_name(&self, substituted: bool) -> String {
        if substituted {
            format!("{} (substitute)", self.name)
        } else {
            self.name.clone()
        }
    }
}
