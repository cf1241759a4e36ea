//! The `DispatchEngine` facade: the four public entry points, each one
//! snapshot → decision → optimistic commit round.

use log::{debug, info};

use fleet_core::{
    AssignmentId, DispatchConfig, DriverId, FleetError, RequestId, TimePoint, TimeWindow,
    VehicleId,
};
use fleet_store::{
    Assignment, AssignmentStatus, FleetStore, RequestStatus, Snapshot, StoreError, Vehicle, Write,
    WriteSet,
};

use crate::assign::{DriverChoice, select_driver};
use crate::error::DispatchResult;
use crate::fairness::{check_preferred, select_vehicle};
use crate::outcome::{AllocOutcome, AllocatedVehicle, AssignOutcome, TripDenial, TripOutcome};
use crate::trip::{check_end, check_start};

/// The engine: a store handle plus the policy configuration.
///
/// Cheap to clone (the store is a shared handle); hand one to each
/// request-handling task.  Every method is one complete operation — there
/// is no session state between calls, so a `Contended` result is always
/// safe to retry from scratch.
#[derive(Clone)]
pub struct DispatchEngine {
    store:  FleetStore,
    config: DispatchConfig,
}

impl DispatchEngine {
    pub fn new(store: FleetStore, config: DispatchConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &FleetStore {
        &self.store
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    // ── Assign ────────────────────────────────────────────────────────────

    /// Pick a driver (and, unless `driver_only`, a vehicle) for a ride
    /// request and commit the assignment.
    ///
    /// Walks the shift chain for the window's day part, applying delegate
    /// substitution and the conflict/rest checks; the first eligible driver
    /// wins.  When nothing fits, the outcome names every excluded candidate
    /// — callers can always show *why* dispatch failed.
    pub fn assign(
        &self,
        request_id: RequestId,
        window: TimeWindow,
        passengers: u32,
        driver_only: bool,
    ) -> DispatchResult<AssignOutcome> {
        if !window.is_valid() {
            return Ok(AssignOutcome::InvalidWindow { window });
        }

        let snap = self.store.snapshot();
        let request = snap
            .request(request_id)
            .ok_or(FleetError::RequestNotFound(request_id))?;

        // Idempotence: one assignment per request, ever.
        if let Some(existing) = snap.assignment_for_request(request_id) {
            debug!("assign {request_id}: already dispatched as {}", existing.id);
            return Ok(AssignOutcome::AlreadyAssigned { assignment: existing.id });
        }

        let long_trip = self.config.is_long_trip(request.one_way_km);
        let (chain, choice) = select_driver(&snap, &self.config, window, long_trip)?;

        let (driver, rejections) = match choice {
            DriverChoice::Selected { driver, rejections } => (driver, rejections),
            DriverChoice::Exhausted { rejections } => {
                info!(
                    "assign {request_id}: no eligible driver ({} candidates excluded)",
                    rejections.len()
                );
                return Ok(AssignOutcome::NoEligibleDriver { chain, rejections });
            }
        };
        for rejection in &rejections {
            debug!("assign {request_id}: passed over {rejection}");
        }

        let mut assignment =
            Assignment::new(snap.next_assignment_id(), request_id, window, long_trip);
        assignment.driver = Some(driver.driver);
        assignment.status = AssignmentStatus::DriverAssigned;

        // Combined mode: the vehicle rides in the same commit, so a refusal
        // here leaves the driver uncommitted too.
        let mut vehicle = None;
        if !driver_only {
            match select_vehicle(&snap, window, passengers, Some(assignment.id)) {
                Some(chosen) => {
                    let record = snap
                        .vehicle(chosen)
                        .ok_or(FleetError::VehicleNotFound(chosen))?;
                    assignment.vehicle = Some(chosen);
                    assignment.status = AssignmentStatus::VehicleAssigned;
                    vehicle = Some(AllocatedVehicle { vehicle: chosen, plate: record.plate.clone() });
                }
                None => {
                    info!("assign {request_id}: driver found but no vehicle fits");
                    return Ok(AssignOutcome::NoEligibleVehicle { passengers });
                }
            }
        }

        let assignment_id = assignment.id;
        let writes = vec![
            Write::PutAssignment(assignment),
            Write::SetRequestStatus(request_id, RequestStatus::Dispatched),
        ];
        if !self.commit(snap.version(), writes)? {
            return Ok(AssignOutcome::Contended);
        }

        info!(
            "assign {request_id}: committed {assignment_id} to {} via {}",
            driver.name, driver.shift
        );
        Ok(AssignOutcome::Assigned {
            assignment: assignment_id,
            driver,
            vehicle,
            skipped: rejections,
        })
    }

    // ── Allocate vehicle ──────────────────────────────────────────────────

    /// Allocate a vehicle to a driver-assigned dispatch, by fairness
    /// ranking or by validating a caller-preferred vehicle.
    pub fn allocate_vehicle(
        &self,
        assignment_id: AssignmentId,
        passengers: u32,
        preferred: Option<VehicleId>,
    ) -> DispatchResult<AllocOutcome> {
        let snap = self.store.snapshot();
        let assignment = snap
            .assignment(assignment_id)
            .ok_or(FleetError::AssignmentNotFound(assignment_id))?;

        if assignment.status != AssignmentStatus::DriverAssigned {
            return Ok(AllocOutcome::InvalidState { status: assignment.status });
        }
        let window = assignment.window;

        let chosen = match preferred {
            Some(vehicle) => {
                if let Err(reason) =
                    check_preferred(&snap, vehicle, window, passengers, Some(assignment_id))
                {
                    info!("allocate {assignment_id}: preferred {vehicle} refused: {reason}");
                    return Ok(AllocOutcome::PreferredUnavailable { vehicle, reason });
                }
                vehicle
            }
            None => match select_vehicle(&snap, window, passengers, Some(assignment_id)) {
                Some(vehicle) => vehicle,
                None => {
                    info!("allocate {assignment_id}: no vehicle fits");
                    return Ok(AllocOutcome::NoEligibleVehicle { passengers });
                }
            },
        };

        let record = snap
            .vehicle(chosen)
            .ok_or(FleetError::VehicleNotFound(chosen))?;
        let allocated = AllocatedVehicle { vehicle: chosen, plate: record.plate.clone() };

        let mut updated = assignment.clone();
        updated.vehicle = Some(chosen);
        updated.status = AssignmentStatus::VehicleAssigned;

        if !self.commit(snap.version(), vec![Write::PutAssignment(updated)])? {
            return Ok(AllocOutcome::Contended);
        }

        info!("allocate {assignment_id}: committed vehicle {} ({})", chosen, allocated.plate);
        Ok(AllocOutcome::Allocated { assignment: assignment_id, vehicle: allocated })
    }

    // ── Trip lifecycle ────────────────────────────────────────────────────

    /// Begin the trip: record the start odometer reading and the actual
    /// start time.
    pub fn start_trip(
        &self,
        assignment_id: AssignmentId,
        driver: DriverId,
        odometer_km: f64,
        now: TimePoint,
    ) -> DispatchResult<TripOutcome> {
        let snap = self.store.snapshot();
        let assignment = snap
            .assignment(assignment_id)
            .ok_or(FleetError::AssignmentNotFound(assignment_id))?;
        let vehicle = self.allocated_vehicle(&snap, assignment)?;

        if let Err(denial) = check_start(assignment, vehicle, driver, odometer_km) {
            debug!("start {assignment_id}: denied: {denial}");
            return Ok(TripOutcome::Denied(denial));
        }

        let mut updated = assignment.clone();
        updated.actual_start = Some(now);
        updated.start_odometer_km = Some(odometer_km);
        updated.status = AssignmentStatus::InProgress;

        if !self.commit(snap.version(), vec![Write::PutAssignment(updated)])? {
            return Ok(TripOutcome::Contended);
        }

        info!("start {assignment_id}: trip under way at {now}, odometer {odometer_km} km");
        Ok(TripOutcome::Started { assignment: assignment_id, at: now })
    }

    /// End the trip: record the end reading and time, complete the
    /// assignment, and ratchet the vehicle's odometer in the same commit.
    pub fn end_trip(
        &self,
        assignment_id: AssignmentId,
        driver: DriverId,
        odometer_km: f64,
        now: TimePoint,
    ) -> DispatchResult<TripOutcome> {
        let snap = self.store.snapshot();
        let assignment = snap
            .assignment(assignment_id)
            .ok_or(FleetError::AssignmentNotFound(assignment_id))?;
        let vehicle = self.allocated_vehicle(&snap, assignment)?;

        let start = match check_end(assignment, vehicle, driver, odometer_km) {
            Ok(start) => start,
            Err(denial) => {
                debug!("end {assignment_id}: denied: {denial}");
                return Ok(TripOutcome::Denied(denial));
            }
        };
        // check_end only approves with a vehicle present.
        let Some(vehicle) = vehicle else {
            return Ok(TripOutcome::Denied(TripDenial::VehicleNotAllocated));
        };

        let mut updated = assignment.clone();
        updated.actual_end = Some(now);
        updated.end_odometer_km = Some(odometer_km);
        updated.status = AssignmentStatus::Completed;

        let writes: WriteSet = vec![
            Write::PutAssignment(updated),
            Write::RatchetVehicleOdometer { vehicle: vehicle.id, odometer_km },
        ];
        if !self.commit(snap.version(), writes)? {
            return Ok(TripOutcome::Contended);
        }

        let distance_km = odometer_km - start;
        info!("end {assignment_id}: completed at {now}, {distance_km} km driven");
        Ok(TripOutcome::Ended { assignment: assignment_id, at: now, distance_km })
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Resolve the assignment's allocated vehicle to its registry record.
    ///
    /// `None` when no vehicle is allocated; an allocated id missing from
    /// the registry is corrupt data, not an operational denial.
    fn allocated_vehicle<'a>(
        &self,
        snap: &'a Snapshot,
        assignment: &Assignment,
    ) -> DispatchResult<Option<&'a Vehicle>> {
        match assignment.vehicle {
            None => Ok(None),
            Some(id) => snap
                .vehicle(id)
                .map(Some)
                .ok_or(FleetError::VehicleNotFound(id).into()),
        }
    }

    /// Commit, translating a lost version race into `Ok(false)`.
    fn commit(&self, based_on: u64, writes: WriteSet) -> DispatchResult<bool> {
        match self.store.commit(based_on, writes) {
            Ok(()) => Ok(true),
            Err(StoreError::Contended { snapshot, current }) => {
                debug!("commit lost version race (snapshot {snapshot}, store {current})");
                Ok(false)
            }
            Err(other) => Err(other.into()),
        }
    }
}
