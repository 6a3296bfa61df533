//! Ornstein-Uhlenbeck spread model
//!
//! Euler step: `x[t+1] = x[t] + theta * (mu - x[t]) + sigma * N(0, 1)`

use super::SpreadModel;
use crate::error::{Error, Result};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Parameters of a mean-reverting OU process
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OuParams {
    /// Long-run mean
    pub mu: f64,
    /// Reversion speed per step
    pub theta: f64,
    /// Noise scale per step
    pub sigma: f64,
    /// Starting level
    pub initial: f64,
}

impl Default for OuParams {
    fn default() -> Self {
        Self {
            mu: 1.50,
            theta: 0.1,
            sigma: 0.05,
            initial: 1.50,
        }
    }
}

/// Discretised Ornstein-Uhlenbeck process
#[derive(Debug, Clone)]
pub struct OrnsteinUhlenbeck {
    params: OuParams,
}

impl OrnsteinUhlenbeck {
    /// Create a model, rejecting non-finite parameters or negative sigma
    pub fn new(params: OuParams) -> Result<Self> {
        let OuParams {
            mu,
            theta,
            sigma,
            initial,
        } = params;
        if ![mu, theta, sigma, initial].iter().all(|v| v.is_finite()) {
            return Err(Error::invalid("OU parameters must be finite"));
        }
        if sigma < 0.0 {
            return Err(Error::invalid(format!("OU sigma must be >= 0, got {sigma}")));
        }
        Ok(Self { params })
    }

    /// Model parameters
    pub fn params(&self) -> &OuParams {
        &self.params
    }
}

impl SpreadModel for OrnsteinUhlenbeck {
    fn generate<R: Rng + ?Sized>(&self, steps: usize, rng: &mut R) -> Vec<f64> {
        let OuParams {
            mu,
            theta,
            sigma,
            initial,
        } = self.params;

        let mut values = Vec::with_capacity(steps);
        let mut x = initial;
        for _ in 0..steps {
            values.push(x);
            let shock: f64 = rng.sample(StandardNormal);
            x += theta * (mu - x) + sigma * shock;
        }
        values
    }
}
