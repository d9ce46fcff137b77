/// One worker's immutable assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleTask {
    pub worker_id: usize,
    pub sample_count: u64,
    pub seed: u64,
}

/// Splits `sample_count` into `worker_count` shares.
///
/// The first `sample_count % worker_count` workers take one extra sample,
/// so the shares always add up to `sample_count`. Each worker seeds its
/// generator with `base_seed + worker_id`.
pub fn partition(sample_count: u64, worker_count: usize, base_seed: u64) -> Vec<SampleTask> {
    if worker_count == 0 {
        return Vec::new();
    }

    let samples_per_worker = sample_count / worker_count as u64;
    let remainder = sample_count % worker_count as u64;

    (0..worker_count)
        .map(|worker_id| {
            let extra = u64::from((worker_id as u64) < remainder);
            SampleTask {
                worker_id,
                sample_count: samples_per_worker + extra,
                seed: base_seed.wrapping_add(worker_id as u64),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn uneven_split_front_loads_remainder() {
        let shares: Vec<u64> = partition(17, 5, 0).iter().map(|t| t.sample_count).collect();
        assert_eq!(shares, vec![4, 4, 3, 3, 3]);
    }

    #[test]
    fn fewer_samples_than_workers() {
        let shares: Vec<u64> = partition(2, 4, 0).iter().map(|t| t.sample_count).collect();
        assert_eq!(shares, vec![1, 1, 0, 0]);
    }

    #[test]
    fn seeds_follow_worker_index() {
        let tasks = partition(10, 3, u64::MAX);
        let seeds: Vec<u64> = tasks.iter().map(|t| t.seed).collect();
        assert_eq!(seeds, vec![u64::MAX, 0, 1]);
        assert!(tasks.iter().enumerate().all(|(i, t)| t.worker_id == i));
    }

    #[test]
    fn no_workers_no_tasks() {
        assert!(partition(100, 0, 7).is_empty());
    }

    proptest! {
        #[test]
        fn shares_sum_to_total(samples in 0u64..1_000_000, workers in 1usize..128) {
            let tasks = partition(samples, workers, 0);
            prop_assert_eq!(tasks.len(), workers);
            prop_assert_eq!(tasks.iter().map(|t| t.sample_count).sum::<u64>(), samples);
        }

        #[test]
        fn shares_are_balanced(samples in 0u64..1_000_000, workers in 1usize..128) {
            let tasks = partition(samples, workers, 0);
            let max = tasks.iter().map(|t| t.sample_count).max().unwrap_or(0);
            let min = tasks.iter().map(|t| t.sample_count).min().unwrap_or(0);
            prop_assert!(max - min <= 1);
            prop_assert!(tasks.windows(2).all(|w| w[0].sample_count >= w[1].sample_count));
        }
    }
}
