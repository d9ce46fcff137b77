//! Monte Carlo estimation of a circle's area.
//!
//! Points are drawn uniformly from the square `[-1, 1] x [-1, 1]`; the
//! fraction landing strictly inside the circle, scaled by `4 * r^2`, is the
//! estimate. Three strategies distribute the sampling:
//!
//! - [`Strategy::Sequential`] draws everything on the calling thread.
//! - [`Strategy::PartitionedReducer`] gives each worker a private tally and
//!   sums the tallies after joining.
//! - [`Strategy::SynchronizedAccumulator`] has every worker publish each hit
//!   into one [`SharedCounter`] under a lock plus a condvar hand-off.
//!
//! Each call spawns fresh OS threads and joins them before returning.

pub mod config;
pub mod error;
pub mod estimate;
pub mod partition;
pub mod partitioned;
pub mod sampler;
pub mod sequential;
pub mod synchronized;
mod workers;

pub use config::EstimatorConfig;
pub use error::{EstimateError, Result};
pub use estimate::{estimate_area, estimate_area_with, scale_area, EstimationResult, Strategy};
pub use partition::{partition, SampleTask};
pub use sampler::{in_circle, LcgSource, PointSampler, SamplerSource, StdRngSource};
pub use synchronized::SharedCounter;
