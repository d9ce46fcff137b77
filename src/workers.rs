use std::thread;

use log::{debug, error};

use crate::error::{EstimateError, Result};
use crate::partition::SampleTask;

/// Runs `work` once per task, each on its own scoped OS thread.
///
/// Results come back in worker-index order. If a thread cannot be spawned
/// no further workers are started; every worker already running is still
/// joined before the error is returned.
pub(crate) fn run_workers<T, F>(name: &str, tasks: &[SampleTask], work: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&SampleTask) -> T + Sync,
{
    let work = &work;

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(tasks.len());
        let mut failure = None;

        for task in tasks {
            let spawned = thread::Builder::new()
                .name(format!("{}-{}", name, task.worker_id))
                .spawn_scoped(scope, move || work(task));

            match spawned {
                Ok(handle) => handles.push((task.worker_id, handle)),
                Err(source) => {
                    error!("failed to spawn worker {}: {}", task.worker_id, source);
                    failure = Some(EstimateError::WorkerSpawn {
                        worker_id: task.worker_id,
                        source,
                    });
                    break;
                }
            }
        }

        let mut results = Vec::with_capacity(handles.len());
        for (worker_id, handle) in handles {
            match handle.join() {
                Ok(value) => {
                    debug!("{} worker {} joined", name, worker_id);
                    results.push(value);
                }
                Err(_) => {
                    error!("{} worker {} panicked", name, worker_id);
                    if failure.is_none() {
                        failure = Some(EstimateError::WorkerPanicked { worker_id });
                    }
                }
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(results),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;

    #[test]
    fn results_in_worker_order() {
        let tasks = partition(10, 4, 0);
        let ids = run_workers("test", &tasks, |task| task.worker_id).unwrap();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn panic_reported_after_join() {
        let tasks = partition(10, 3, 0);
        let result = run_workers("test", &tasks, |task| {
            if task.worker_id == 1 {
                panic!("boom");
            }
            task.sample_count
        });
        assert!(matches!(result, Err(EstimateError::WorkerPanicked { worker_id: 1 })));
    }
}
