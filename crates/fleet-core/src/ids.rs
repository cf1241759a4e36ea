//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  IDs are assigned by the intake
//! systems that create drivers, vehicles, and ride requests; the engine only
//! mints `AssignmentId`s (monotonically, inside the store).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            ///
            /// Only used at serialization boundaries; inside the engine a
            /// missing ID is always `Option<$name>`, never this sentinel.
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for $inner {
            #[inline(always)]
            fn from(id: $name) -> $inner {
                id.0
            }
        }
    };
}

typed_id! {
    /// A driver known to the duty roster and driver registry.
    pub struct DriverId(u32);
}

typed_id! {
    /// A vehicle in the fleet registry.
    pub struct VehicleId(u32);
}

typed_id! {
    /// A ride request created by the external intake process.
    pub struct RequestId(u32);
}

typed_id! {
    /// An assignment (dispatch) record.  Minted by the store, one per ride
    /// request, never reused.
    pub struct AssignmentId(u32);
}
