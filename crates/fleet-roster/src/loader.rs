//! CSV loaders for duty-roster and delegation reference data.
//!
//! # Roster CSV format
//!
//! One row per staffed slot:
//!
//! ```csv
//! day,shift,driver_id
//! 0,AM,11
//! 0,PM,12
//! 0,G1,13
//! 1,AM,11
//! ```
//!
//! `shift` must be one of the closed set `AM, PM, G1, G2, G3`; a duplicate
//! `(day, shift)` slot is rejected.
//!
//! # Delegation CSV format
//!
//! One row per delegation, `last_day` inclusive:
//!
//! ```csv
//! principal_id,agent_id,first_day,last_day,absent
//! 11,21,0,4,true
//! 12,22,2,2,false
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fleet_core::{DriverId, DutyDay};

use crate::{Delegation, DelegationBook, DutyRoster, RosterError, ShiftCode};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    day:       i32,
    shift:     String,
    driver_id: u32,
}

#[derive(Deserialize)]
struct DelegationRecord {
    principal_id: u32,
    agent_id:     u32,
    first_day:    i32,
    last_day:     i32,
    absent:       bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`DutyRoster`] from a CSV file.
pub fn load_roster_csv(path: &Path) -> Result<DutyRoster, RosterError> {
    let file = std::fs::File::open(path).map_err(RosterError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_roster_reader<R: Read>(reader: R) -> Result<DutyRoster, RosterError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut roster = DutyRoster::new();

    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| RosterError::Parse(e.to_string()))?;
        let shift = ShiftCode::from_code(&row.shift)
            .ok_or_else(|| RosterError::Parse(format!("unknown shift code `{}`", row.shift)))?;
        roster.insert(DutyDay(row.day), shift, DriverId(row.driver_id))?;
    }
    Ok(roster)
}

/// Load a [`DelegationBook`] from a CSV file.
pub fn load_delegations_csv(path: &Path) -> Result<DelegationBook, RosterError> {
    let file = std::fs::File::open(path).map_err(RosterError::Io)?;
    load_delegations_reader(file)
}

/// Like [`load_delegations_csv`] but accepts any `Read` source.
pub fn load_delegations_reader<R: Read>(reader: R) -> Result<DelegationBook, RosterError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut book = DelegationBook::new();

    for result in csv_reader.deserialize::<DelegationRecord>() {
        let row = result.map_err(|e| RosterError::Parse(e.to_string()))?;
        if row.last_day < row.first_day {
            return Err(RosterError::Parse(format!(
                "delegation for principal {} ends (day {}) before it starts (day {})",
                row.principal_id, row.last_day, row.first_day
            )));
        }
        book.push(Delegation {
            principal: DriverId(row.principal_id),
            agent:     DriverId(row.agent_id),
            first_day: DutyDay(row.first_day),
            last_day:  DutyDay(row.last_day),
            absent:    row.absent,
        });
    }
    Ok(book)
}
