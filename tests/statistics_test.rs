// tests/statistics_test.rs
use gbm_paths::analytics::{gbm_analytic, BatchSummary};
use gbm_paths::mc::generate_batch_parallel;

#[test]
fn test_log_returns_match_model_parameters() {
    let sigma = 0.02;
    let mu = 0.0005;
    let batch = generate_batch_parallel(sigma, mu, 100.0, 253, 400, Some(42)).expect("Valid parameters");

    let returns: Vec<f64> = batch.iter().flat_map(|p| p.log_returns()).collect();
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    println!("Sample mean return: {:.6}, sample std: {:.6}", mean, variance.sqrt());

    // 100,800 draws: standard error of the mean is ~6e-5
    assert!((mean - mu).abs() < 4e-4, "mean return {} far from {}", mean, mu);
    assert!(
        (variance.sqrt() - sigma).abs() / sigma < 0.02,
        "return std {} far from {}",
        variance.sqrt(),
        sigma
    );
}

#[test]
fn test_terminal_distribution_matches_analytic() {
    let (s0, sigma, mu, steps) = (100.0, 0.01, 0.001, 101);
    let k = steps - 1;
    let batch = generate_batch_parallel(sigma, mu, s0, steps, 20_000, Some(7)).expect("Valid parameters");
    let summary = BatchSummary::from_batch(&batch);

    let expected = gbm_analytic::expected_price(s0, mu, sigma, k).unwrap();
    let median = gbm_analytic::median_price(s0, mu, sigma, k).unwrap();
    let q05 = gbm_analytic::price_quantile(s0, mu, sigma, k, 0.05).unwrap();
    let q95 = gbm_analytic::price_quantile(s0, mu, sigma, k, 0.95).unwrap();

    println!("mean {:.4} vs {:.4}", summary.mean_terminal, expected);
    println!("median {:.4} vs {:.4}", summary.median_terminal, median);
    println!("q05 {:.4} vs {:.4}, q95 {:.4} vs {:.4}", summary.q05_terminal, q05, summary.q95_terminal, q95);

    let rel = |a: f64, b: f64| (a - b).abs() / b;
    assert!(rel(summary.mean_terminal, expected) < 0.01);
    assert!(rel(summary.median_terminal, median) < 0.01);
    assert!(rel(summary.q05_terminal, q05) < 0.01);
    assert!(rel(summary.q95_terminal, q95) < 0.01);
}
