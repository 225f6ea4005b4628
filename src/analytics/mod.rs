pub mod gbm_analytic;
pub mod summary;

pub use summary::BatchSummary;
