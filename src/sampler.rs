use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::partition::SampleTask;

/// Produces points in the `[-1, 1] x [-1, 1]` square.
///
/// Each worker owns its sampler outright; nothing here is shared.
pub trait PointSampler {
    fn sample_point(&mut self) -> (f64, f64);
}

/// Hands every worker its own sampler, seeded from its task.
pub trait SamplerSource: Sync {
    type Sampler: PointSampler;

    fn sampler_for(&self, task: &SampleTask) -> Self::Sampler;
}

/// True iff `(x, y)` lies strictly inside the circle of `radius`.
#[inline]
pub fn in_circle(radius: f64, x: f64, y: f64) -> bool {
    x * x + y * y < radius * radius
}

/// Draws `samples` points from `sampler` and counts the hits.
pub(crate) fn count_hits<S: PointSampler>(sampler: &mut S, radius: f64, samples: u64) -> u64 {
    let mut inside = 0;
    for _ in 0..samples {
        let (x, y) = sampler.sample_point();
        if in_circle(radius, x, y) {
            inside += 1;
        }
    }
    inside
}

/// `StdRng` stream mapped uniformly onto `[-1, 1]`.
pub struct UniformSampler {
    rng: StdRng,
    range: Uniform<f64>,
}

impl UniformSampler {
    pub fn new(seed: u64) -> Self {
        UniformSampler {
            rng: StdRng::seed_from_u64(seed),
            range: Uniform::new_inclusive(-1.0, 1.0),
        }
    }
}

impl PointSampler for UniformSampler {
    fn sample_point(&mut self) -> (f64, f64) {
        let x = self.range.sample(&mut self.rng);
        let y = self.range.sample(&mut self.rng);
        (x, y)
    }
}

/// Default source backed by `rand`'s `StdRng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdRngSource;

impl SamplerSource for StdRngSource {
    type Sampler = UniformSampler;

    fn sampler_for(&self, task: &SampleTask) -> UniformSampler {
        UniformSampler::new(task.seed)
    }
}

/// Linear Congruential Generator - same stream on every platform.
pub struct LcgSampler {
    state: u32,
}

impl LcgSampler {
    /// Only the low 32 bits of `seed` are used.
    pub fn new(seed: u64) -> Self {
        LcgSampler { state: seed as u32 }
    }

    fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.state & 0x7FFFFFFF) as f64 / 0x7FFFFFFF as f64
    }
}

impl PointSampler for LcgSampler {
    fn sample_point(&mut self) -> (f64, f64) {
        let x = self.next_unit() * 2.0 - 1.0;
        let y = self.next_unit() * 2.0 - 1.0;
        (x, y)
    }
}

/// Portable source, reproducible regardless of the `rand` version.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcgSource;

impl SamplerSource for LcgSource {
    type Sampler = LcgSampler;

    fn sampler_for(&self, task: &SampleTask) -> LcgSampler {
        LcgSampler::new(task.seed)
    }
}
