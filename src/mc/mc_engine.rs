// src/mc/mc_engine.rs
use crate::error::{validation::*, SimResult};
use crate::mc::path::{PathBatch, PricePath};
use crate::models::{DailyGbm, ReturnModel};
use crate::rng::{self, SplitMix64};
use rand::{Rng, RngCore};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Inputs for one simulation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Per-step standard deviation of the log return (σ)
    pub volatility: f64,
    /// Per-step drift of the log return (μ)
    pub mean_return: f64,
    pub initial_price: f64,
    /// Number of prices per path, including the initial price
    pub step_count: usize,
    pub simulation_count: usize,
    /// `None` draws the random source from OS entropy
    pub seed: Option<u64>,
}

impl SimulationParameters {
    /// Validate every field used by batch generation
    pub fn validate(&self) -> SimResult<()> {
        validate_path_inputs(self.volatility, self.mean_return, self.initial_price, self.step_count)?;
        validate_min_count("simulation_count", self.simulation_count, 1)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_steps(mut self, step_count: usize) -> Self {
        self.step_count = step_count;
        self
    }

    pub fn with_simulations(mut self, simulation_count: usize) -> Self {
        self.simulation_count = simulation_count;
        self
    }

    /// Generate a single path; `simulation_count` is ignored
    pub fn path(&self) -> SimResult<PricePath> {
        generate_path(
            self.volatility,
            self.mean_return,
            self.initial_price,
            self.step_count,
            self.seed,
        )
    }

    pub fn batch(&self) -> SimResult<PathBatch> {
        generate_batch(
            self.volatility,
            self.mean_return,
            self.initial_price,
            self.step_count,
            self.simulation_count,
            self.seed,
        )
    }

    pub fn batch_parallel(&self) -> SimResult<PathBatch> {
        generate_batch_parallel(
            self.volatility,
            self.mean_return,
            self.initial_price,
            self.step_count,
            self.simulation_count,
            self.seed,
        )
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            volatility: 0.20,
            mean_return: 0.01,
            initial_price: 100.0,
            step_count: 252,
            simulation_count: 1,
            seed: None,
        }
    }
}

// Range checks come first so an invalid price or step count is reported
// ahead of a non-finite model parameter.
fn validate_path_inputs(
    sigma: f64,
    mu: f64,
    initial_price: f64,
    step_count: usize,
) -> SimResult<DailyGbm> {
    validate_positive("initial_price", initial_price)?;
    validate_finite("initial_price", initial_price)?;
    validate_min_count("step_count", step_count, 2)?;
    DailyGbm::new(mu, sigma)
}

/// Generate one price path under the daily-return GBM model
///
/// # Model
///
/// ```text
/// S_0 = initial_price
/// S_i = S_{i-1} * exp(μ + σ Z_i),   i = 1 .. step_count-1
/// Z_i = √(-2 ln U₁) cos(2π U₂),     U = 1 - Uniform[0,1)
/// ```
///
/// # Errors
///
/// `SimError::OutOfRange` naming the parameter when `initial_price <= 0`,
/// `step_count < 2`, or σ/μ are not finite. Validation happens before the
/// random source is created.
///
/// # Determinism
///
/// With `seed = Some(s)` the result is a pure function of the arguments.
pub fn generate_path(
    sigma: f64,
    mu: f64,
    initial_price: f64,
    step_count: usize,
    seed: Option<u64>,
) -> SimResult<PricePath> {
    let model = validate_path_inputs(sigma, mu, initial_price, step_count)?;
    let mut source = rng::source_from_seed(seed);
    Ok(simulate(&model, initial_price, step_count, &mut source))
}

/// Generate a batch of independent paths
///
/// One parent source is created from `seed`; each path receives a fresh
/// `u64` sub-seed drawn from it in order, so the whole batch is reproducible
/// from the parent seed while every path uses its own stream.
pub fn generate_batch(
    sigma: f64,
    mu: f64,
    initial_price: f64,
    step_count: usize,
    simulation_count: usize,
    seed: Option<u64>,
) -> SimResult<PathBatch> {
    let model = validate_path_inputs(sigma, mu, initial_price, step_count)?;
    validate_min_count("simulation_count", simulation_count, 1)?;

    debug!(simulation_count, step_count, seeded = seed.is_some(), "generating path batch");

    let mut parent = rng::source_from_seed(seed);
    let paths = (0..simulation_count)
        .map(|i| {
            let sub_seed = parent.next_u64();
            trace!(path = i, sub_seed, "generating path");
            simulate_seeded(&model, initial_price, step_count, sub_seed)
        })
        .collect();

    Ok(PathBatch::from_engine(paths))
}

/// Parallel variant of [`generate_batch`] with identical output
///
/// Sub-seeds are drawn sequentially from the parent source, then the paths
/// are generated on the rayon pool and collected in sub-seed order.
pub fn generate_batch_parallel(
    sigma: f64,
    mu: f64,
    initial_price: f64,
    step_count: usize,
    simulation_count: usize,
    seed: Option<u64>,
) -> SimResult<PathBatch> {
    let model = validate_path_inputs(sigma, mu, initial_price, step_count)?;
    validate_min_count("simulation_count", simulation_count, 1)?;

    debug!(
        simulation_count,
        step_count,
        seeded = seed.is_some(),
        threads = rayon::current_num_threads(),
        "generating path batch in parallel"
    );

    let mut parent = rng::source_from_seed(seed);
    let sub_seeds: Vec<u64> = (0..simulation_count).map(|_| parent.next_u64()).collect();

    let paths = sub_seeds
        .into_par_iter()
        .map(|sub_seed| simulate_seeded(&model, initial_price, step_count, sub_seed))
        .collect();

    Ok(PathBatch::from_engine(paths))
}

/// Generate a path from any return model and random source
///
/// Applies the same range checks on `initial_price` and `step_count` as
/// [`generate_path`]; the model's own parameters are the caller's concern.
pub fn generate_path_with<M: ReturnModel, R: Rng + ?Sized>(
    model: &M,
    initial_price: f64,
    step_count: usize,
    rng: &mut R,
) -> SimResult<PricePath> {
    validate_positive("initial_price", initial_price)?;
    validate_finite("initial_price", initial_price)?;
    validate_min_count("step_count", step_count, 2)?;
    Ok(simulate(model, initial_price, step_count, rng))
}

fn simulate_seeded<M: ReturnModel>(
    model: &M,
    initial_price: f64,
    step_count: usize,
    sub_seed: u64,
) -> PricePath {
    let mut source = SplitMix64::new(sub_seed);
    simulate(model, initial_price, step_count, &mut source)
}

fn simulate<M: ReturnModel, R: Rng + ?Sized>(
    model: &M,
    initial_price: f64,
    step_count: usize,
    rng: &mut R,
) -> PricePath {
    let mut prices = Vec::with_capacity(step_count);
    prices.push(initial_price);

    let mut current = initial_price;
    for _ in 1..step_count {
        let z = rng::get_normal_draw(rng);
        current = model.step(current, z);
        prices.push(current);
    }

    PricePath::from_engine(prices)
}
