// src/models/gbm.rs
//! Geometric Brownian motion with a fixed per-step return
//!
//! Each step applies
//! ```text
//! r_i = μ + σ Z_i,   Z_i ~ N(0,1)
//! S_i = S_{i-1} * exp(r_i)
//! ```
//! where μ and σ are already expressed per step (typically per trading day),
//! so there is no `dt` scaling and no Itô correction.

use super::model::ReturnModel;
use crate::error::{validation::validate_finite, SimResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyGbm {
    pub mean_return: f64,
    pub volatility: f64,
}

impl DailyGbm {
    pub fn new(mean_return: f64, volatility: f64) -> SimResult<Self> {
        validate_finite("mean_return", mean_return)?;
        validate_finite("volatility", volatility)?;
        Ok(DailyGbm {
            mean_return,
            volatility,
        })
    }
}

impl ReturnModel for DailyGbm {
    #[inline]
    fn step_return(&self, z: f64) -> f64 {
        self.mean_return + self.volatility * z
    }
}
