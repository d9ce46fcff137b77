use std::fmt;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::sampler::{SamplerSource, StdRngSource};
use crate::{partitioned, sequential, synchronized};

/// Outcome of one estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationResult {
    pub area: f64,
    pub in_circle: u64,
    pub sample_count: u64,
}

impl EstimationResult {
    pub fn new(in_circle: u64, sample_count: u64, radius: f64) -> Self {
        EstimationResult {
            area: scale_area(in_circle, sample_count, radius),
            in_circle,
            sample_count,
        }
    }
}

/// Scales the hit ratio by the area of the bounding square, `(2r)^2`.
///
/// Zero samples give an area of zero.
pub fn scale_area(in_circle: u64, sample_count: u64, radius: f64) -> f64 {
    if sample_count == 0 {
        return 0.0;
    }
    (in_circle as f64 / sample_count as f64) * 4.0 * radius * radius
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Sequential,
    PartitionedReducer,
    SynchronizedAccumulator,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Sequential,
        Strategy::PartitionedReducer,
        Strategy::SynchronizedAccumulator,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Sequential => "sequential",
            Strategy::PartitionedReducer => "partitioned",
            Strategy::SynchronizedAccumulator => "synchronized",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
#[error("unknown strategy '{0}', expected sequential, partitioned or synchronized")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Strategy::Sequential),
            "partitioned" | "reducer" => Ok(Strategy::PartitionedReducer),
            "synchronized" | "sync" => Ok(Strategy::SynchronizedAccumulator),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Estimates the circle's area with `strategy`, sampling from `StdRng`.
pub fn estimate_area(strategy: Strategy, config: &EstimatorConfig) -> Result<EstimationResult> {
    estimate_area_with(strategy, config, &StdRngSource)
}

pub fn estimate_area_with<S: SamplerSource>(
    strategy: Strategy,
    config: &EstimatorConfig,
    source: &S,
) -> Result<EstimationResult> {
    debug!(
        "estimating with {}: samples={} workers={} radius={}",
        strategy, config.sample_count, config.worker_count, config.radius
    );

    match strategy {
        Strategy::Sequential => sequential::estimate(config, source),
        Strategy::PartitionedReducer => partitioned::estimate(config, source),
        Strategy::SynchronizedAccumulator => synchronized::estimate(config, source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_samples_zero_area() {
        assert_eq!(scale_area(0, 0, 2.0), 0.0);
        assert_eq!(scale_area(5, 0, 1.0), 0.0);
    }

    #[test]
    fn half_hits_on_unit_circle() {
        assert_eq!(scale_area(2, 4, 1.0), 2.0);
        assert_eq!(scale_area(1, 4, 2.0), 4.0);
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
        assert_eq!("SYNC".parse::<Strategy>().unwrap(), Strategy::SynchronizedAccumulator);
        assert!("mailbox".parse::<Strategy>().is_err());
    }
}
