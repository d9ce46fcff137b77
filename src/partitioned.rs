use log::debug;

use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::estimate::EstimationResult;
use crate::partition::partition;
use crate::sampler::{count_hits, SamplerSource};
use crate::workers::run_workers;

/// Fork-join estimate: every worker keeps a private tally, summed after join.
///
/// Nothing mutable is shared while sampling. Tallies are added in
/// worker-index order once all threads have finished.
pub fn estimate<S: SamplerSource>(config: &EstimatorConfig, source: &S) -> Result<EstimationResult> {
    let config = config.validate()?;
    let radius = config.radius;
    let tasks = partition(config.sample_count, config.worker_count, config.base_seed);

    let tallies = run_workers("reducer", &tasks, |task| {
        let mut sampler = source.sampler_for(task);
        count_hits(&mut sampler, radius, task.sample_count)
    })?;

    let mut total_inside = 0;
    for (worker_id, inside) in tallies.iter().enumerate() {
        debug!("reducer worker {} tallied {}", worker_id, inside);
        total_inside += inside;
    }

    Ok(EstimationResult::new(total_inside, config.sample_count, radius))
}
