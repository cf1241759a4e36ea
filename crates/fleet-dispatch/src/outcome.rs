//! Structured operation results.
//!
//! Everything here is an *expected* operational condition — a dispatcher
//! seeing "no eligible driver" or a driver typing an odometer reading lower
//! than the last trip's.  They are values with user-facing `Display`
//! messages, never errors: callers branch on them uniformly instead of
//! unwinding.

use std::fmt;

use fleet_core::{AssignmentId, DriverId, TimePoint, TimeWindow, VehicleId};
use fleet_roster::ShiftCode;
use fleet_store::AssignmentStatus;

// ── Driver selection ──────────────────────────────────────────────────────────

/// The driver an assignment landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignedDriver {
    pub driver: DriverId,
    /// Display name, tagged "(substitute)" when a delegate stood in.
    pub name: String,
    /// The chain position that produced the driver.
    pub shift: ShiftCode,
    pub substituted: bool,
}

/// Why one chain candidate was passed over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// An existing assignment overlaps the requested window.
    Overlap {
        with:   AssignmentId,
        window: TimeWindow,
    },
    /// A long trip ended less than the rest period before the requested
    /// start.
    RestNotMet { long_trip_end: TimePoint },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Overlap { with, window } => {
                write!(f, "already dispatched ({with}, {window})")
            }
            RejectReason::RestNotMet { long_trip_end } => {
                write!(f, "resting after a long trip that ended {long_trip_end}")
            }
        }
    }
}

/// One excluded candidate, in chain order, with the human-readable reason
/// the dispatcher sees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub shift:  ShiftCode,
    pub driver: DriverId,
    pub name:   String,
    pub reason: RejectReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.shift, self.name, self.reason)
    }
}

// ── Vehicle selection ─────────────────────────────────────────────────────────

/// The vehicle an assignment landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocatedVehicle {
    pub vehicle: VehicleId,
    pub plate:   String,
}

/// Why a caller-specified preferred vehicle was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreferredIssue {
    NotFound,
    Unavailable,
    CapacityTooSmall { capacity: u32, passengers: u32 },
    TimeConflict,
}

impl fmt::Display for PreferredIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferredIssue::NotFound => write!(f, "not on the vehicle register"),
            PreferredIssue::Unavailable => write!(f, "marked unavailable"),
            PreferredIssue::CapacityTooSmall { capacity, passengers } => {
                write!(f, "seats {capacity}, request needs {passengers}")
            }
            PreferredIssue::TimeConflict => write!(f, "booked for an overlapping window"),
        }
    }
}

// ── Assign ────────────────────────────────────────────────────────────────────

/// Result of [`DispatchEngine::assign`][crate::DispatchEngine::assign].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssignOutcome {
    /// A driver (and, unless driver-only, a vehicle) was committed.
    /// `skipped` reports the chain candidates excluded before the winner,
    /// so a dispatcher always sees why the obvious driver was passed over.
    Assigned {
        assignment: AssignmentId,
        driver:     AssignedDriver,
        vehicle:    Option<AllocatedVehicle>,
        skipped:    Vec<Rejection>,
    },
    /// The request already has an assignment; nothing was created.
    AlreadyAssigned { assignment: AssignmentId },
    /// Empty or inverted window — nothing was attempted.
    InvalidWindow { window: TimeWindow },
    /// Every candidate in the resolved chain was excluded.  `rejections`
    /// holds one entry per candidate, in chain order.
    NoEligibleDriver {
        chain:      Vec<ShiftCode>,
        rejections: Vec<Rejection>,
    },
    /// Driver found, but no vehicle fits the window/capacity (combined
    /// driver+vehicle mode only).  Nothing was committed.
    NoEligibleVehicle { passengers: u32 },
    /// Lost the commit race to a concurrent operation.  Retry from scratch.
    Contended,
}

impl AssignOutcome {
    /// `true` only for [`AssignOutcome::Assigned`].
    pub fn is_success(&self) -> bool {
        matches!(self, AssignOutcome::Assigned { .. })
    }
}

impl fmt::Display for AssignOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignOutcome::Assigned { driver, vehicle, skipped, .. } => {
                match vehicle {
                    Some(v) => write!(f, "assigned to {} with vehicle {}", driver.name, v.plate)?,
                    None => write!(f, "assigned to {}", driver.name)?,
                }
                for rejection in skipped {
                    write!(f, "; {rejection}")?;
                }
                Ok(())
            }
            AssignOutcome::AlreadyAssigned { assignment } => {
                write!(f, "request already dispatched as {assignment}")
            }
            AssignOutcome::InvalidWindow { window } => {
                write!(f, "invalid time window {window}")
            }
            AssignOutcome::NoEligibleDriver { chain, rejections } => {
                write!(f, "no eligible driver (tried ")?;
                for (i, shift) in chain.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{shift}")?;
                }
                write!(f, ")")?;
                for rejection in rejections {
                    write!(f, "; {rejection}")?;
                }
                Ok(())
            }
            AssignOutcome::NoEligibleVehicle { passengers } => {
                write!(f, "no vehicle fits the window for {passengers} passengers")
            }
            AssignOutcome::Contended => {
                write!(f, "concurrent update detected, retry the request")
            }
        }
    }
}

// ── Allocate ──────────────────────────────────────────────────────────────────

/// Result of [`DispatchEngine::allocate_vehicle`][crate::DispatchEngine::allocate_vehicle].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocOutcome {
    Allocated {
        assignment: AssignmentId,
        vehicle:    AllocatedVehicle,
    },
    /// The caller-specified vehicle failed validation; no fallback to the
    /// fairness ranking is attempted.
    PreferredUnavailable {
        vehicle: VehicleId,
        reason:  PreferredIssue,
    },
    /// No available vehicle satisfies capacity and window.
    NoEligibleVehicle { passengers: u32 },
    /// The assignment is not waiting for a vehicle (no driver yet, vehicle
    /// already allocated, or trip already underway).
    InvalidState { status: AssignmentStatus },
    /// Lost the commit race.  Retry from scratch.
    Contended,
}

impl AllocOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AllocOutcome::Allocated { .. })
    }
}

impl fmt::Display for AllocOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocOutcome::Allocated { vehicle, .. } => {
                write!(f, "vehicle {} allocated", vehicle.plate)
            }
            AllocOutcome::PreferredUnavailable { vehicle, reason } => {
                write!(f, "preferred vehicle {vehicle} unavailable: {reason}")
            }
            AllocOutcome::NoEligibleVehicle { passengers } => {
                write!(f, "no vehicle fits the window for {passengers} passengers")
            }
            AllocOutcome::InvalidState { status } => {
                write!(f, "assignment is {status}, not awaiting a vehicle")
            }
            AllocOutcome::Contended => {
                write!(f, "concurrent update detected, retry the request")
            }
        }
    }
}

// ── Trip transitions ──────────────────────────────────────────────────────────

/// Why a trip transition was refused.  These are everyday operational
/// conditions (mistyped odometer, double tap on "start"), phrased for the
/// driver's screen.
#[derive(Clone, Debug, PartialEq)]
pub enum TripDenial {
    /// The caller is not the assignment's driver.
    NotOwner { driver: DriverId },
    /// No vehicle has been allocated yet.
    VehicleNotAllocated,
    AlreadyStarted,
    NotStarted,
    AlreadyEnded,
    OdometerNotPositive { reading: f64 },
    /// Reading is behind the vehicle's recorded odometer.
    OdometerBehindVehicle { reading: f64, vehicle_odometer: f64 },
    /// End reading is behind the trip's start reading.
    OdometerBeforeStart { reading: f64, start: f64 },
}

impl fmt::Display for TripDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripDenial::NotOwner { driver } => {
                write!(f, "assignment belongs to another driver ({driver})")
            }
            TripDenial::VehicleNotAllocated => write!(f, "no vehicle allocated yet"),
            TripDenial::AlreadyStarted => write!(f, "trip already started"),
            TripDenial::NotStarted => write!(f, "trip has not been started"),
            TripDenial::AlreadyEnded => write!(f, "trip already ended"),
            TripDenial::OdometerNotPositive { reading } => {
                write!(f, "odometer reading {reading} km must be positive")
            }
            TripDenial::OdometerBehindVehicle { reading, vehicle_odometer } => {
                write!(
                    f,
                    "odometer reading {reading} km is behind the vehicle's {vehicle_odometer} km"
                )
            }
            TripDenial::OdometerBeforeStart { reading, start } => {
                write!(f, "end reading {reading} km is behind the start reading {start} km")
            }
        }
    }
}

/// Result of `start_trip` / `end_trip`.
#[derive(Clone, Debug, PartialEq)]
pub enum TripOutcome {
    Started {
        assignment: AssignmentId,
        at:         TimePoint,
    },
    Ended {
        assignment:  AssignmentId,
        at:          TimePoint,
        distance_km: f64,
    },
    Denied(TripDenial),
    /// Lost the commit race.  Retry from scratch.
    Contended,
}

impl TripOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TripOutcome::Started { .. } | TripOutcome::Ended { .. })
    }
}

impl fmt::Display for TripOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripOutcome::Started { at, .. } => write!(f, "trip started at {at}"),
            TripOutcome::Ended { at, distance_km, .. } => {
                write!(f, "trip ended at {at} ({distance_km} km driven)")
            }
            TripOutcome::Denied(denial) => denial.fmt(f),
            TripOutcome::Contended => write!(f, "concurrent update detected, retry the request"),
        }
    }
}
