// src/analytics/gbm_analytic.rs
//! Closed-form distribution of the daily-return GBM model
//!
//! # Mathematical Foundation
//!
//! After `k` steps of `S_i = S_{i-1} exp(μ + σ Z_i)` the log return is a sum
//! of `k` i.i.d. normals:
//! ```text
//! ln(S_k / S_0) ~ N(kμ, kσ²)
//! ```
//! so `S_k` is log-normal and its moments and quantiles are available
//! without simulation. These serve as reference values for batch output.

use crate::error::{validation::*, SimError, SimResult};
use crate::math_utils::norm_inv_cdf;

fn finite_or_instability(method: &str, value: f64) -> SimResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::NumericalInstability {
            method: method.to_string(),
            reason: format!("result {} is not finite", value),
        })
    }
}

fn validate_model(s0: f64, mu: f64, sigma: f64) -> SimResult<()> {
    validate_positive("initial_price", s0)?;
    validate_finite("mean_return", mu)?;
    validate_finite("volatility", sigma)
}

/// Expected price after `k` steps
///
/// # Formula
/// ```text
/// E[S_k] = S_0 * exp(k(μ + σ²/2))
/// ```
pub fn expected_price(s0: f64, mu: f64, sigma: f64, k: usize) -> SimResult<f64> {
    validate_model(s0, mu, sigma)?;
    let k = k as f64;
    finite_or_instability(
        "expected_price",
        s0 * (k * (mu + 0.5 * sigma * sigma)).exp(),
    )
}

/// Median price after `k` steps, `S_0 * exp(kμ)`
pub fn median_price(s0: f64, mu: f64, sigma: f64, k: usize) -> SimResult<f64> {
    validate_model(s0, mu, sigma)?;
    finite_or_instability("median_price", s0 * (k as f64 * mu).exp())
}

/// Standard deviation of the cumulative log return after `k` steps, `|σ|√k`
pub fn log_return_std(sigma: f64, k: usize) -> SimResult<f64> {
    validate_finite("volatility", sigma)?;
    Ok(sigma.abs() * (k as f64).sqrt())
}

/// Price level below which a fraction `p` of paths end after `k` steps
///
/// # Formula
/// ```text
/// q_p = S_0 * exp(kμ + |σ|√k * Φ⁻¹(p))
/// ```
pub fn price_quantile(s0: f64, mu: f64, sigma: f64, k: usize, p: f64) -> SimResult<f64> {
    validate_model(s0, mu, sigma)?;
    validate_probability("probability", p)?;
    let k_f = k as f64;
    let spread = log_return_std(sigma, k)?;
    finite_or_instability(
        "price_quantile",
        s0 * (k_f * mu + spread * norm_inv_cdf(p)).exp(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_steps_is_initial_price() {
        assert_relative_eq!(expected_price(100.0, 0.01, 0.2, 0).unwrap(), 100.0);
        assert_relative_eq!(median_price(100.0, 0.01, 0.2, 0).unwrap(), 100.0);
        assert_relative_eq!(price_quantile(100.0, 0.01, 0.2, 0, 0.9).unwrap(), 100.0);
    }

    #[test]
    fn test_expected_exceeds_median() {
        let mean = expected_price(100.0, 0.0, 0.1, 10).unwrap();
        let median = median_price(100.0, 0.0, 0.1, 10).unwrap();
        assert_relative_eq!(median, 100.0);
        assert_relative_eq!(mean, 100.0 * 0.05f64.exp(), max_relative = 1e-12);
        assert!(mean > median);
    }

    #[test]
    fn test_quantile_median_and_ordering() {
        let q50 = price_quantile(100.0, 0.01, 0.2, 9, 0.5).unwrap();
        assert_relative_eq!(q50, 100.0 * 0.09f64.exp(), max_relative = 1e-9);

        let q05 = price_quantile(100.0, 0.01, 0.2, 9, 0.05).unwrap();
        let q95 = price_quantile(100.0, 0.01, 0.2, 9, 0.95).unwrap();
        assert!(q05 < q50 && q50 < q95);
        // Symmetric in log space
        assert_relative_eq!(q05 * q95, q50 * q50, max_relative = 1e-9);
    }

    #[test]
    fn test_negative_volatility_uses_magnitude() {
        assert_relative_eq!(log_return_std(-0.2, 4).unwrap(), 0.4);
        assert_relative_eq!(
            price_quantile(100.0, 0.0, -0.2, 4, 0.8).unwrap(),
            price_quantile(100.0, 0.0, 0.2, 4, 0.8).unwrap()
        );
    }

    #[test]
    fn test_errors() {
        let err = price_quantile(100.0, 0.0, 0.2, 4, 1.0).unwrap_err();
        assert_eq!(err.parameter(), Some("probability"));

        let err = expected_price(-1.0, 0.0, 0.2, 4).unwrap_err();
        assert_eq!(err.parameter(), Some("initial_price"));

        let err = expected_price(100.0, 10.0, 0.2, 1_000).unwrap_err();
        assert!(matches!(err, SimError::NumericalInstability { .. }));
    }
}
