//! Vehicle registry record.

use fleet_core::VehicleId;

/// Administrative availability of a vehicle.
///
/// `Unavailable` covers maintenance, write-off, or any out-of-service state;
/// the allocator never considers such vehicles regardless of time windows.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleStatus {
    #[default]
    Available,
    Unavailable,
}

impl VehicleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fleet vehicle.
///
/// `odometer_km` is the only field of the registry the engine ever mutates —
/// ratcheted upward when a trip completes.  Cumulative usage distance is
/// *derived* from completed assignments, never stored here, so the fairness
/// ranking cannot drift from the assignment ledger.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id:          VehicleId,
    pub plate:       String,
    pub capacity:    u32,
    pub status:      VehicleStatus,
    pub odometer_km: f64,
}

impl Vehicle {
    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }
}
