use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::error::{EstimateError, Result};

/// Immutable input to a single estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    pub radius: f64,
    pub sample_count: u64,
    pub worker_count: usize,
    /// Trace every shared-counter update (synchronized strategy only).
    pub verbose: bool,
    /// Read by the driver; estimators ignore it.
    pub timed: bool,
    pub base_seed: u64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            radius: 1.0,
            sample_count: 100_000,
            worker_count: 10,
            verbose: false,
            timed: false,
            base_seed: clock_seed(),
        }
    }
}

impl EstimatorConfig {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_samples(mut self, sample_count: u64) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_workers(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_timed(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }

    pub fn with_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    /// Returns a copy that every estimator can run without faulting.
    ///
    /// A zero worker count is bumped to one; a radius that is negative or
    /// not finite is rejected.
    pub fn validate(&self) -> Result<EstimatorConfig> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(EstimateError::InvalidRadius(self.radius));
        }

        let mut config = self.clone();
        if config.worker_count == 0 {
            warn!("worker count of 0 requested, using 1 worker");
            config.worker_count = 1;
        }
        Ok(config)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_driver() {
        let config = EstimatorConfig::default();
        assert_eq!(config.radius, 1.0);
        assert_eq!(config.sample_count, 100_000);
        assert_eq!(config.worker_count, 10);
        assert!(!config.verbose);
        assert!(!config.timed);
    }

    #[test]
    fn zero_workers_normalized() {
        let config = EstimatorConfig::default().with_workers(0).validate().unwrap();
        assert_eq!(config.worker_count, 1);
    }

    #[test]
    fn zero_radius_accepted() {
        assert!(EstimatorConfig::default().with_radius(0.0).validate().is_ok());
    }

    #[test]
    fn bad_radius_rejected() {
        for radius in [-1.0, f64::NAN, f64::INFINITY] {
            let err = EstimatorConfig::default().with_radius(radius).validate();
            assert!(matches!(err, Err(EstimateError::InvalidRadius(_))));
        }
    }
}
