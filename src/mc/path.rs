// src/mc/path.rs
//! Output containers for generated price paths

use crate::error::{validation::*, SimError, SimResult};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One simulated price path
///
/// Always holds at least two strictly positive prices; element 0 is the
/// initial price the path was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PricePath {
    prices: Vec<f64>,
}

impl PricePath {
    /// Wrap prices produced by the engine, which upholds the invariants itself
    pub(crate) fn from_engine(prices: Vec<f64>) -> Self {
        debug_assert!(prices.len() >= 2);
        PricePath { prices }
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn initial_price(&self) -> f64 {
        self.prices[0]
    }

    pub fn terminal_price(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    /// Realised log return of each step, `ln(S_i / S_{i-1})`
    pub fn log_returns(&self) -> Vec<f64> {
        self.prices
            .windows(2)
            .map(|w| (w[1] / w[0]).ln())
            .collect()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.prices
    }
}

impl Deref for PricePath {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.prices
    }
}

impl TryFrom<Vec<f64>> for PricePath {
    type Error = SimError;

    fn try_from(prices: Vec<f64>) -> SimResult<Self> {
        validate_min_count("step_count", prices.len(), 2)?;
        for &p in &prices {
            validate_positive("price", p)?;
            validate_finite("price", p)?;
        }
        Ok(PricePath { prices })
    }
}

impl From<PricePath> for Vec<f64> {
    fn from(path: PricePath) -> Self {
        path.prices
    }
}

/// Ordered collection of independently generated paths, in generation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PricePath>", into = "Vec<PricePath>")]
pub struct PathBatch {
    paths: Vec<PricePath>,
}

impl PathBatch {
    pub(crate) fn from_engine(paths: Vec<PricePath>) -> Self {
        debug_assert!(!paths.is_empty());
        PathBatch { paths }
    }

    pub fn paths(&self) -> &[PricePath] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PricePath> {
        self.paths.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePath> {
        self.paths.iter()
    }

    /// Number of prices in each path
    pub fn step_count(&self) -> usize {
        self.paths.first().map_or(0, |p| p.len())
    }

    pub fn terminal_prices(&self) -> Vec<f64> {
        self.paths.iter().map(PricePath::terminal_price).collect()
    }

    /// Global `(min, max)` over every price of every path
    pub fn price_range(&self) -> (f64, f64) {
        self.paths
            .iter()
            .flat_map(|p| p.iter().copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            })
    }

    /// Dense `simulation_count × step_count` matrix, one row per path
    pub fn to_array2(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.len(), self.step_count()), |(i, j)| {
            self.paths[i].prices[j]
        })
    }

    pub fn into_inner(self) -> Vec<PricePath> {
        self.paths
    }
}

impl<'a> IntoIterator for &'a PathBatch {
    type Item = &'a PricePath;
    type IntoIter = std::slice::Iter<'a, PricePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl TryFrom<Vec<PricePath>> for PathBatch {
    type Error = SimError;

    fn try_from(paths: Vec<PricePath>) -> SimResult<Self> {
        validate_min_count("simulation_count", paths.len(), 1)?;
        let steps = paths[0].len();
        if let Some(bad) = paths.iter().find(|p| p.len() != steps) {
            return Err(SimError::OutOfRange {
                parameter: "step_count".to_string(),
                value: bad.len() as f64,
                constraint: format!("every path in a batch must have {} prices", steps),
            });
        }
        Ok(PathBatch { paths })
    }
}

impl From<PathBatch> for Vec<PricePath> {
    fn from(batch: PathBatch) -> Self {
        batch.paths
    }
}
