//! Driftless Gaussian random walk

use super::SpreadModel;
use crate::error::{Error, Result};
use rand::Rng;
use rand_distr::StandardNormal;

/// `x[t+1] = x[t] + sigma * N(0, 1)`
#[derive(Debug, Clone)]
pub struct RandomWalk {
    initial: f64,
    sigma: f64,
}

impl RandomWalk {
    /// Create a walk starting at `initial` with step scale `sigma`
    pub fn new(initial: f64, sigma: f64) -> Result<Self> {
        if !initial.is_finite() || !sigma.is_finite() || sigma < 0.0 {
            return Err(Error::invalid(format!(
                "random walk needs finite initial and sigma >= 0, got {initial}, {sigma}"
            )));
        }
        Ok(Self { initial, sigma })
    }
}

impl SpreadModel for RandomWalk {
    fn generate<R: Rng + ?Sized>(&self, steps: usize, rng: &mut R) -> Vec<f64> {
        let mut values = Vec::with_capacity(steps);
        let mut x = self.initial;
        for _ in 0..steps {
            values.push(x);
            let step: f64 = rng.sample(StandardNormal);
            x += self.sigma * step;
        }
        values
    }
}
