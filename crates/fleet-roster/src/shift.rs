//! Shift codes, day-part classification, and shift-chain construction.
//!
//! # Chain rules
//!
//! Long trips try the general-priority slots first (`G3`, then `G2`) so they
//! do not starve the short-trip capacity held by the AM/PM slots; short
//! trips try their day-part slots first and fall back to `G3` only as a
//! backstop.  Every chain ends with the full fallback list, so a request can
//! always find a candidate if *any* driver is on duty that day.
//!
//! Chains are built as pure values — ordered, de-duplicated, first
//! occurrence wins.  No call site ever mutates a chain after construction.

use fleet_core::{DispatchConfig, TimePoint};

// ── ShiftCode ─────────────────────────────────────────────────────────────────

/// A duty slot on the daily roster.  The set is closed; reference data with
/// any other code is rejected at load time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShiftCode {
    /// Early-duty slot.
    Am,
    /// Afternoon-duty slot.
    Pm,
    /// General-priority slots, in increasing long-trip preference.
    G1,
    G2,
    G3,
}

/// The complete shift list in fallback order.
pub const ALL_SHIFTS: [ShiftCode; 5] = [
    ShiftCode::Am,
    ShiftCode::Pm,
    ShiftCode::G1,
    ShiftCode::G2,
    ShiftCode::G3,
];

impl ShiftCode {
    /// Roster-file spelling of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftCode::Am => "AM",
            ShiftCode::Pm => "PM",
            ShiftCode::G1 => "G1",
            ShiftCode::G2 => "G2",
            ShiftCode::G3 => "G3",
        }
    }

    /// Parse the roster-file spelling.  Returns `None` for anything outside
    /// the closed set.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AM" => Some(ShiftCode::Am),
            "PM" => Some(ShiftCode::Pm),
            "G1" => Some(ShiftCode::G1),
            "G2" => Some(ShiftCode::G2),
            "G3" => Some(ShiftCode::G3),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DayPart ───────────────────────────────────────────────────────────────────

/// Time-of-day band of a request's start, used to pick the shift chain.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DayPart {
    /// Before [`DispatchConfig::early_end_min`] (default 11:30).
    Early,
    /// `[afternoon_start_min, afternoon_end_min)` (default 13:30–17:00).
    Afternoon,
    /// The midday gap and the evening.
    Other,
}

impl DayPart {
    /// Classify a start time against the configured band boundaries.
    pub fn classify(start: TimePoint, config: &DispatchConfig) -> Self {
        let m = start.minute_of_day();
        if m < config.early_end_min {
            DayPart::Early
        } else if m >= config.afternoon_start_min && m < config.afternoon_end_min {
            DayPart::Afternoon
        } else {
            DayPart::Other
        }
    }
}

// ── Chain construction ────────────────────────────────────────────────────────

/// Build the ordered, de-duplicated priority chain of shifts to try.
///
/// - long trip:  `[G3, G2]` ++ day-part slots ++ full fallback
/// - short trip: day-part slots ++ `[G3]` ++ full fallback
///
/// Every code appears at most once (first occurrence wins) and the result
/// always contains all five codes.
pub fn shift_chain(part: DayPart, long_trip: bool) -> Vec<ShiftCode> {
    let part_slots: &[ShiftCode] = if long_trip {
        match part {
            DayPart::Early => &[ShiftCode::Am],
            DayPart::Afternoon => &[ShiftCode::Pm],
            DayPart::Other => &[ShiftCode::Am, ShiftCode::Pm, ShiftCode::G1],
        }
    } else {
        match part {
            DayPart::Early => &[ShiftCode::Am, ShiftCode::G1],
            DayPart::Afternoon => &[ShiftCode::Pm, ShiftCode::G2],
            DayPart::Other => &[ShiftCode::Am, ShiftCode::Pm, ShiftCode::G1, ShiftCode::G2],
        }
    };

    let segments: [&[ShiftCode]; 3] = if long_trip {
        [&[ShiftCode::G3, ShiftCode::G2], part_slots, &ALL_SHIFTS]
    } else {
        [part_slots, &[ShiftCode::G3], &ALL_SHIFTS]
    };

    let mut chain = Vec::with_capacity(ALL_SHIFTS.len());
    for &code in segments.iter().flat_map(|s| s.iter()) {
        if !chain.contains(&code) {
            chain.push(code);
        }
    }
    chain
}
