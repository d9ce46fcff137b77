use log::debug;

use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::estimate::EstimationResult;
use crate::partition::SampleTask;
use crate::sampler::{count_hits, SamplerSource};

/// Draws every sample on the calling thread.
///
/// The single stream is seeded with `base_seed`, the same seed worker 0
/// gets in the parallel strategies.
pub fn estimate<S: SamplerSource>(config: &EstimatorConfig, source: &S) -> Result<EstimationResult> {
    let config = config.validate()?;
    let task = SampleTask {
        worker_id: 0,
        sample_count: config.sample_count,
        seed: config.base_seed,
    };

    let mut sampler = source.sampler_for(&task);
    let inside = count_hits(&mut sampler, config.radius, task.sample_count);
    debug!("sequential: {} of {} points inside", inside, task.sample_count);

    Ok(EstimationResult::new(inside, config.sample_count, config.radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{LcgSource, StdRngSource};

    #[test]
    fn zero_samples() {
        let config = EstimatorConfig::default().with_samples(0);
        let result = estimate(&config, &StdRngSource).unwrap();
        assert_eq!(result.area, 0.0);
        assert_eq!(result.in_circle, 0);
    }

    #[test]
    fn zero_radius() {
        let config = EstimatorConfig::default().with_radius(0.0).with_samples(1_000);
        assert_eq!(estimate(&config, &LcgSource).unwrap().area, 0.0);
    }

    #[test]
    fn radius_covering_square_counts_everything() {
        // Corners sit at distance sqrt(2), so radius 2 contains the square.
        let config = EstimatorConfig::default().with_radius(2.0).with_samples(1_000);
        let result = estimate(&config, &StdRngSource).unwrap();
        assert_eq!(result.in_circle, 1_000);
        assert_eq!(result.area, 16.0);
    }
}
