use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};

use log::{debug, info};

use crate::config::EstimatorConfig;
use crate::error::{EstimateError, Result};
use crate::estimate::EstimationResult;
use crate::partition::partition;
use crate::sampler::{in_circle, PointSampler, SamplerSource};
use crate::workers::run_workers;

/// A hit counter shared by every worker, updated one writer at a time.
///
/// Entering the update requires both the lock and the turn flag. The flag
/// goes down inside the lock and only comes back up after the lock has been
/// released, so a worker that grabs the lock in that window must wait on
/// the condition variable for the hand-off signal.
#[derive(Debug)]
pub struct SharedCounter {
    in_circle: Mutex<u64>,
    turn_available: AtomicBool,
    turn: Condvar,
}

impl Default for SharedCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedCounter {
    pub fn new() -> Self {
        SharedCounter {
            in_circle: Mutex::new(0),
            turn_available: AtomicBool::new(true),
            turn: Condvar::new(),
        }
    }

    /// Records one in-circle point and returns the running total.
    pub fn add_point(&self, worker_id: usize, verbose: bool) -> Result<u64> {
        let mut count = self
            .in_circle
            .lock()
            .map_err(|_| EstimateError::CounterPoisoned)?;

        while !self.turn_available.load(Ordering::Acquire) {
            if verbose {
                info!("worker {} waiting", worker_id);
            }
            count = self
                .turn
                .wait(count)
                .map_err(|_| EstimateError::CounterPoisoned)?;
        }

        self.turn_available.store(false, Ordering::Release);
        *count += 1;
        let total = *count;
        if verbose {
            info!("worker {} added, total in circle = {}", worker_id, total);
        }
        drop(count);

        self.hand_off();
        Ok(total)
    }

    /// Raises the turn flag and wakes one waiter. Called after unlocking.
    fn hand_off(&self) {
        self.turn_available.store(true, Ordering::Release);
        // A worker that saw the flag down keeps the lock until it is parked
        // on the condvar; passing through the lock here orders the signal
        // after that wait. Poisoning does not matter for the pass-through.
        if self.in_circle.lock().is_err() {
            debug!("shared counter poisoned during hand-off");
        }
        self.turn.notify_one();
    }

    pub fn total(&self) -> Result<u64> {
        self.in_circle
            .lock()
            .map(|count| *count)
            .map_err(|_| EstimateError::CounterPoisoned)
    }

    pub fn into_total(self) -> Result<u64> {
        self.in_circle
            .into_inner()
            .map_err(|_| EstimateError::CounterPoisoned)
    }
}

/// Estimate where every hit is published live into one `SharedCounter`.
///
/// Work is split exactly as in the partitioned strategy. Random number
/// generation stays private to each worker; only the increment contends.
pub fn estimate<S: SamplerSource>(config: &EstimatorConfig, source: &S) -> Result<EstimationResult> {
    let config = config.validate()?;
    let radius = config.radius;
    let verbose = config.verbose;
    let tasks = partition(config.sample_count, config.worker_count, config.base_seed);
    let counter = SharedCounter::new();

    let outcomes = run_workers("synchronized", &tasks, |task| -> Result<()> {
        let mut sampler = source.sampler_for(task);
        for _ in 0..task.sample_count {
            let (x, y) = sampler.sample_point();
            if in_circle(radius, x, y) {
                counter.add_point(task.worker_id, verbose)?;
            }
        }
        Ok(())
    })?;
    outcomes.into_iter().collect::<Result<()>>()?;

    let inside = counter.into_total()?;
    Ok(EstimationResult::new(inside, config.sample_count, radius))
}
