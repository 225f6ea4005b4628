//! # gbm-paths: Seedable Monte Carlo Price Paths
//!
//! A small Rust library that simulates asset price paths with a
//! geometric Brownian motion using a fixed per-step (daily) return model.
//!
//! ## Key Features
//!
//! - **Reproducible**: the same seed gives bit-identical paths and batches
//! - **Batch generation**: independent paths derived from one parent seed
//! - **Parallel batches**: Rayon-backed variant with output identical to the sequential one
//! - **Analytics**: closed-form log-normal moments and quantiles, batch summaries
//! - **Validation**: out-of-range inputs are rejected before any randomness is consumed
//!
//! ## Quick Start
//!
//! ```rust
//! use gbm_paths::mc::{generate_batch, generate_path};
//!
//! // σ = 20% and μ = 1% per step, 252 prices starting at 100
//! let path = generate_path(0.2, 0.01, 100.0, 252, Some(42)).expect("Valid parameters");
//! assert_eq!(path.len(), 252);
//! assert_eq!(path[0], 100.0);
//!
//! let batch = generate_batch(0.2, 0.01, 100.0, 252, 10, Some(42)).expect("Valid parameters");
//! assert_eq!(batch.len(), 10);
//! ```
//!
//! ## Model
//!
//! Each step draws `Z ~ N(0,1)` by Box-Muller and applies
//! ```text
//! S_i = S_{i-1} * exp(μ + σ Z)
//! ```
//! so every price stays strictly positive.

// Module declarations
pub mod analytics;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod output;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{SimError, SimResult};
pub use mc::{
    generate_batch, generate_batch_parallel, generate_path, PathBatch, PricePath,
    SimulationParameters,
};
