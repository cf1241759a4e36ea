//! Delegations: time-bounded substitute arrangements between drivers.

use rustc_hash::FxHashMap;

use fleet_core::{DriverId, DutyDay};

use crate::RosterError;

/// "If `principal` is absent on a date in `[first_day, last_day]`, `agent`
/// substitutes."
///
/// The `absent` flag records whether the principal is actually marked absent
/// for the covered period; a delegation on file for a present principal is
/// inert.  Looked up, never mutated, by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delegation {
    pub principal: DriverId,
    pub agent:     DriverId,
    pub first_day: DutyDay,
    /// Inclusive — a one-day delegation has `first_day == last_day`.
    pub last_day:  DutyDay,
    pub absent:    bool,
}

impl Delegation {
    /// `true` when `day` falls inside the delegation's date range.
    #[inline]
    pub fn covers(&self, day: DutyDay) -> bool {
        self.first_day <= day && day <= self.last_day
    }

    /// `true` when the agent actually substitutes on `day`: the range covers
    /// the day AND the principal is marked absent.
    #[inline]
    pub fn substitutes_on(&self, day: DutyDay) -> bool {
        self.absent && self.covers(day)
    }
}

/// All delegation rows on file.
#[derive(Clone, Debug, Default)]
pub struct DelegationBook {
    rows: Vec<Delegation>,
}

impl DelegationBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Delegation>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: Delegation) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Delegation] {
        &self.rows
    }

    /// The substitution map `{principal → agent}` effective on `day`.
    ///
    /// # Errors
    ///
    /// [`RosterError::ConflictingDelegations`] when two rows would
    /// substitute for the same principal on the same day.  At most one
    /// active delegation per principal per date is a data-entry invariant;
    /// the engine refuses to guess between violators.
    pub fn substitutions_for(
        &self,
        day: DutyDay,
    ) -> Result<FxHashMap<DriverId, DriverId>, RosterError> {
        let mut map = FxHashMap::default();
        for row in self.rows.iter().filter(|r| r.substitutes_on(day)) {
            if map.insert(row.principal, row.agent).is_some() {
                return Err(RosterError::ConflictingDelegations {
                    principal: row.principal,
                    day,
                });
            }
        }
        Ok(map)
    }
}
