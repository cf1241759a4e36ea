//! Engine time model.
//!
//! # Design
//!
//! Time is represented as a minute counter since the deployment's epoch
//! (midnight of day 0, local time).  Roster days are the integer quotient:
//!
//! ```text
//! day           = minutes.div_euclid(1440)
//! minute_of_day = minutes.rem_euclid(1440)
//! ```
//!
//! Using an integer minute as the canonical time unit means all window
//! overlap and rest-period arithmetic is exact (no timezone or DST
//! machinery, no floating-point drift) and comparisons are O(1).  Mapping
//! day 0 to a calendar date is the hosting application's concern; the
//! engine never needs it.

use std::fmt;

/// Minutes in one roster day.
pub const MINUTES_PER_DAY: i64 = 1_440;

// ── TimePoint ─────────────────────────────────────────────────────────────────

/// An absolute point in time, in minutes since the epoch.
///
/// Stored as `i64` so that subtraction (`rest-window` arithmetic) can never
/// underflow near the epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimePoint(pub i64);

impl TimePoint {
    /// Build a point from a roster day and a wall-clock hour/minute.
    #[inline]
    pub fn from_day_hm(day: i32, hour: u32, minute: u32) -> Self {
        TimePoint(day as i64 * MINUTES_PER_DAY + hour as i64 * 60 + minute as i64)
    }

    /// The roster day this point falls on.
    #[inline]
    pub fn day(self) -> DutyDay {
        DutyDay(self.0.div_euclid(MINUTES_PER_DAY) as i32)
    }

    /// Minutes past midnight on the point's day, in `0..1440`.
    #[inline]
    pub fn minute_of_day(self) -> u32 {
        self.0.rem_euclid(MINUTES_PER_DAY) as u32
    }
}

impl std::ops::Add<i64> for TimePoint {
    type Output = TimePoint;
    #[inline]
    fn add(self, minutes: i64) -> TimePoint {
        TimePoint(self.0 + minutes)
    }
}

impl std::ops::Sub<i64> for TimePoint {
    type Output = TimePoint;
    #[inline]
    fn sub(self, minutes: i64) -> TimePoint {
        TimePoint(self.0 - minutes)
    }
}

impl std::ops::Sub for TimePoint {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: TimePoint) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.minute_of_day();
        write!(f, "{} {:02}:{:02}", self.day(), m / 60, m % 60)
    }
}

// ── DutyDay ───────────────────────────────────────────────────────────────────

/// A roster day index (day 0 = the deployment epoch).
///
/// Duty rosters and delegations are keyed by `DutyDay`; `i32` allows
/// reference data dated before the epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutyDay(pub i32);

impl DutyDay {
    /// The day `n` days after `self`.
    #[inline]
    pub fn offset(self, n: i32) -> DutyDay {
        DutyDay(self.0 + n)
    }
}

impl fmt::Display for DutyDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

// ── TimeWindow ────────────────────────────────────────────────────────────────

/// A half-open time interval `[start, end)`.
///
/// Half-open semantics everywhere: a window ending at 10:00 does NOT
/// conflict with one starting at 10:00.  Every overlap test in the engine
/// goes through [`TimeWindow::overlaps`] so the boundary rule cannot drift
/// between call sites.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    pub start: TimePoint,
    pub end:   TimePoint,
}

impl TimeWindow {
    #[inline]
    pub fn new(start: TimePoint, end: TimePoint) -> Self {
        Self { start, end }
    }

    /// `true` when the window is non-empty (`end > start`).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.end > self.start
    }

    /// Half-open overlap test: `start < other.end && other.start < end`.
    #[inline]
    pub fn overlaps(self, other: TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// `true` when `t` lies inside `[start, end)`.
    #[inline]
    pub fn contains(self, t: TimePoint) -> bool {
        self.start <= t && t < self.end
    }

    /// Window length in minutes.  Negative for invalid windows.
    #[inline]
    pub fn duration_min(self) -> i64 {
        self.end - self.start
    }

    /// The roster day the window starts on — the day whose roster is
    /// consulted when assigning a driver.
    #[inline]
    pub fn day(self) -> DutyDay {
        self.start.day()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {})", self.start, self.end)
    }
}
