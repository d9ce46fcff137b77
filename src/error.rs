use thiserror::Error;

/// All errors that can occur while estimating an area.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Radius was negative, NaN or infinite.
    #[error("invalid radius: {0}")]
    InvalidRadius(f64),

    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker {worker_id}: {source}")]
    WorkerSpawn {
        worker_id: usize,
        #[source]
        source: std::io::Error,
    },

    /// A worker panicked before reporting its share.
    #[error("worker {worker_id} panicked")]
    WorkerPanicked { worker_id: usize },

    #[error("shared counter lock poisoned")]
    CounterPoisoned,
}

pub type Result<T> = std::result::Result<T, EstimateError>;
