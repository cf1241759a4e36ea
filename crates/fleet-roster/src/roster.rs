//! The duty roster: which driver holds which shift on which day.

use std::collections::BTreeMap;

use fleet_core::{DriverId, DutyDay};

use crate::{RosterError, ShiftCode};

/// Immutable reference data mapping `(day, shift)` to the scheduled driver.
///
/// At most one driver per slot; a second insert for the same slot is a
/// data-integrity error, not an overwrite.  Delegation overlays are applied
/// at resolve time and never mutate the roster itself.
#[derive(Clone, Debug, Default)]
pub struct DutyRoster {
    slots: BTreeMap<(DutyDay, ShiftCode), DriverId>,
}

impl DutyRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `driver` for `shift` on `day`.
    ///
    /// # Errors
    ///
    /// [`RosterError::DuplicateSlot`] if the slot is already staffed.
    pub fn insert(
        &mut self,
        day: DutyDay,
        shift: ShiftCode,
        driver: DriverId,
    ) -> Result<(), RosterError> {
        if let Some(&existing) = self.slots.get(&(day, shift)) {
            return Err(RosterError::DuplicateSlot { day, shift, existing });
        }
        self.slots.insert((day, shift), driver);
        Ok(())
    }

    /// The driver scheduled for `shift` on `day`, if the slot is staffed.
    #[inline]
    pub fn on_duty(&self, day: DutyDay, shift: ShiftCode) -> Option<DriverId> {
        self.slots.get(&(day, shift)).copied()
    }

    /// All staffed slots in `(day, shift)` order.
    pub fn iter(&self) -> impl Iterator<Item = (DutyDay, ShiftCode, DriverId)> + '_ {
        self.slots.iter().map(|(&(day, shift), &driver)| (day, shift, driver))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
