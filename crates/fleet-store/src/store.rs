//! `FleetState` — the whole world as one value — and `FleetStore`, the
//! versioned snapshot/commit boundary around it.
//!
//! # Why optimistic versioning
//!
//! Driver and vehicle selection must not race: two callers both reading "no
//! conflict for driver 7 at 08:00–09:00" and both committing would corrupt
//! the never-overlap invariant.  Instead of holding a lock across the whole
//! decision, the store hands out immutable snapshots tagged with a version
//! and rejects any commit whose snapshot is stale.  The loser gets
//! [`StoreError::Contended`] and retries from scratch — behaviorally a
//! serialization failure under serializable isolation, surfaced without
//! blocking readers.
//!
//! Reference data (roster, delegations, driver/vehicle registries) rides in
//! the same snapshot so one operation sees one consistent world.

use std::collections::BTreeMap;
use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock};

use fleet_core::{AssignmentId, DriverId, RequestId, VehicleId};
use fleet_roster::{DelegationBook, DutyRoster};

use crate::{Assignment, Driver, RequestStatus, RideRequest, StoreError, Vehicle};

// ── FleetState ────────────────────────────────────────────────────────────────

/// Every entity the engine reads or writes, as one cloneable value.
///
/// `BTreeMap`s keep iteration deterministic — fairness ties and test output
/// never depend on hash ordering.
#[derive(Clone, Debug, Default)]
pub struct FleetState {
    drivers:     BTreeMap<DriverId, Driver>,
    vehicles:    BTreeMap<VehicleId, Vehicle>,
    requests:    BTreeMap<RequestId, RideRequest>,
    assignments: BTreeMap<AssignmentId, Assignment>,

    roster:      DutyRoster,
    delegations: DelegationBook,

    /// Next assignment id to mint.  Bumped by `PutAssignment` so ids stay
    /// unique across optimistic retries.
    next_assignment: u32,
}

impl FleetState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Seeding (pre-store construction and intake writes) ────────────────

    pub fn add_driver(&mut self, driver: Driver) -> Result<(), StoreError> {
        if self.drivers.contains_key(&driver.id) {
            return Err(StoreError::DuplicateDriver(driver.id));
        }
        self.drivers.insert(driver.id, driver);
        Ok(())
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), StoreError> {
        if self.vehicles.contains_key(&vehicle.id) {
            return Err(StoreError::DuplicateVehicle(vehicle.id));
        }
        self.vehicles.insert(vehicle.id, vehicle);
        Ok(())
    }

    pub fn add_request(&mut self, request: RideRequest) -> Result<(), StoreError> {
        if self.requests.contains_key(&request.id) {
            return Err(StoreError::DuplicateRequest(request.id));
        }
        self.requests.insert(request.id, request);
        Ok(())
    }

    /// Seed a historical assignment (completed trips carried over from a
    /// previous period feed the fairness ledger).
    pub fn add_assignment(&mut self, assignment: Assignment) -> Result<(), StoreError> {
        if self.assignments.contains_key(&assignment.id) {
            return Err(StoreError::DuplicateAssignment(assignment.id));
        }
        if !self.requests.contains_key(&assignment.request) {
            return Err(StoreError::DanglingRequest(assignment.id, assignment.request));
        }
        self.next_assignment = self.next_assignment.max(assignment.id.0 + 1);
        self.assignments.insert(assignment.id, assignment);
        Ok(())
    }

    pub fn set_roster(&mut self, roster: DutyRoster) {
        self.roster = roster;
    }

    pub fn set_delegations(&mut self, delegations: DelegationBook) {
        self.delegations = delegations;
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.get(&id)
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn request(&self, id: RequestId) -> Option<&RideRequest> {
        self.requests.get(&id)
    }

    pub fn assignment(&self, id: AssignmentId) -> Option<&Assignment> {
        self.assignments.get(&id)
    }

    pub fn roster(&self) -> &DutyRoster {
        &self.roster
    }

    pub fn delegations(&self) -> &DelegationBook {
        &self.delegations
    }

    /// All vehicles in id order.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    /// All assignments in id order.
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.values()
    }

    /// Assignments currently holding `driver`.
    pub fn assignments_for_driver(&self, driver: DriverId) -> impl Iterator<Item = &Assignment> {
        self.assignments
            .values()
            .filter(move |a| a.driver == Some(driver))
    }

    /// Assignments currently holding `vehicle`.
    pub fn assignments_for_vehicle(&self, vehicle: VehicleId) -> impl Iterator<Item = &Assignment> {
        self.assignments
            .values()
            .filter(move |a| a.vehicle == Some(vehicle))
    }

    /// The assignment created for `request`, if any.  One per request —
    /// the assigner checks this before ever minting a second.
    pub fn assignment_for_request(&self, request: RequestId) -> Option<&Assignment> {
        self.assignments.values().find(|a| a.request == request)
    }

    /// The id the next `PutAssignment` of a fresh record should carry.
    ///
    /// Peeking is safe under optimistic concurrency: two snapshots may peek
    /// the same id, but at most one of their commits survives the version
    /// check.
    pub fn next_assignment_id(&self) -> AssignmentId {
        AssignmentId(self.next_assignment)
    }

    // ── Write application ─────────────────────────────────────────────────

    fn apply(&mut self, write: Write) -> Result<(), StoreError> {
        match write {
            Write::PutAssignment(assignment) => {
                if !self.requests.contains_key(&assignment.request) {
                    return Err(StoreError::DanglingRequest(assignment.id, assignment.request));
                }
                self.next_assignment = self.next_assignment.max(assignment.id.0 + 1);
                self.assignments.insert(assignment.id, assignment);
                Ok(())
            }
            Write::SetRequestStatus(id, status) => {
                let request = self
                    .requests
                    .get_mut(&id)
                    .ok_or(StoreError::UnknownRequest(id))?;
                request.status = status;
                Ok(())
            }
            Write::RatchetVehicleOdometer { vehicle, odometer_km } => {
                let record = self
                    .vehicles
                    .get_mut(&vehicle)
                    .ok_or(StoreError::UnknownVehicle(vehicle))?;
                if odometer_km < record.odometer_km {
                    return Err(StoreError::OdometerRegression {
                        vehicle,
                        current: record.odometer_km,
                        proposed: odometer_km,
                    });
                }
                record.odometer_km = odometer_km;
                Ok(())
            }
        }
    }
}

// ── Writes ────────────────────────────────────────────────────────────────────

/// One mutation in a commit's write-set.
///
/// The set is deliberately tiny: the engine owns assignments outright,
/// flips request status alongside, and ratchets vehicle odometers — nothing
/// else in the world is writable from here (spec'd shared-resource policy).
#[derive(Clone, Debug)]
pub enum Write {
    /// Insert or replace an assignment record.
    PutAssignment(Assignment),
    /// Flip a ride request's status.
    SetRequestStatus(RequestId, RequestStatus),
    /// Move a vehicle's odometer forward.  Backward movement fails the
    /// whole commit.
    RatchetVehicleOdometer { vehicle: VehicleId, odometer_km: f64 },
}

/// The ordered mutations of one commit.
pub type WriteSet = Vec<Write>;

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// An immutable, versioned view of the whole state.
///
/// Cheap to take (one `Arc` clone) and valid forever — it just stops being
/// committable once any later commit lands.
#[derive(Clone)]
pub struct Snapshot {
    version: u64,
    state:   Arc<FleetState>,
}

impl Snapshot {
    /// The store version this snapshot was taken at; passed back to
    /// [`FleetStore::commit`].
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl Deref for Snapshot {
    type Target = FleetState;

    fn deref(&self) -> &FleetState {
        &self.state
    }
}

// ── FleetStore ────────────────────────────────────────────────────────────────

struct Inner {
    version: u64,
    state:   Arc<FleetState>,
}

/// Shared, versioned store.  `Clone` hands out another handle to the same
/// underlying state (`Arc` inside), so concurrent callers — one per
/// request-handling task — all contend on the same version counter.
#[derive(Clone)]
pub struct FleetStore {
    inner: Arc<RwLock<Inner>>,
}

impl FleetStore {
    /// Wrap an initial state (registries, reference data, any historical
    /// assignments) at version 0.
    pub fn new(state: FleetState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                version: 0,
                state: Arc::new(state),
            })),
        }
    }

    /// A consistent point-in-time view.  Never blocks writers for longer
    /// than the `Arc` clone.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Snapshot {
            version: inner.version,
            state: Arc::clone(&inner.state),
        }
    }

    /// The current store version.
    pub fn version(&self) -> u64 {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .version
    }

    /// Atomically apply `writes`, provided no commit landed since the
    /// snapshot at `based_on`.
    ///
    /// All-or-nothing: the writes are applied to a private clone first, so
    /// a failing write (unknown id, odometer regression) leaves the store
    /// untouched at its old version.
    pub fn commit(&self, based_on: u64, writes: WriteSet) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.version != based_on {
            return Err(StoreError::Contended {
                snapshot: based_on,
                current: inner.version,
            });
        }

        let mut next = FleetState::clone(&inner.state);
        for write in writes {
            next.apply(write)?;
        }

        inner.state = Arc::new(next);
        inner.version += 1;
        Ok(())
    }
}
