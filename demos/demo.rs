// demos/demo.rs
use gbm_paths::analytics::{gbm_analytic, BatchSummary};
use gbm_paths::math_utils::Timer;
use gbm_paths::output;
use gbm_paths::{SimResult, SimulationParameters};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Usage: demo [steps] [simulations] [seed]
fn parse_args() -> SimulationParameters {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut params = SimulationParameters::default().with_simulations(20);

    if let Some(steps) = args.first().and_then(|s| s.parse().ok()) {
        params = params.with_steps(steps);
    }
    if let Some(sims) = args.get(1).and_then(|s| s.parse().ok()) {
        params = params.with_simulations(sims);
    }
    if let Some(seed) = args.get(2).and_then(|s| s.parse().ok()) {
        params = params.with_seed(seed);
    }
    params
}

fn run(params: &SimulationParameters) -> SimResult<()> {
    info!(?params, "simulating");

    let mut timer = Timer::new();
    timer.start();
    let batch = params.batch_parallel()?;
    println!(
        "Generated {} paths x {} prices in {:.2} ms",
        batch.len(),
        batch.step_count(),
        timer.elapsed_ms()
    );

    let summary = BatchSummary::from_batch(&batch);
    let k = params.step_count - 1;
    let expected = gbm_analytic::expected_price(params.initial_price, params.mean_return, params.volatility, k)?;
    let median = gbm_analytic::median_price(params.initial_price, params.mean_return, params.volatility, k)?;

    println!("\nTerminal price after {} steps", k);
    println!("  Simulated mean:   {:.4}", summary.mean_terminal);
    println!("  Analytic mean:    {:.4}", expected);
    println!("  Simulated median: {:.4}", summary.median_terminal);
    println!("  Analytic median:  {:.4}", median);
    println!("  Price range:      [{:.4}, {:.4}]", summary.min_price, summary.max_price);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("\nSummary JSON:\n{}", json),
        Err(e) => error!(%e, "could not serialise summary"),
    }

    let dir = std::env::current_dir().unwrap_or_default().join("results");
    if let Err(e) = std::fs::create_dir_all(&dir)
        .and_then(|_| output::write_batch_to_csv(dir.join("paths.csv"), &batch))
        .and_then(|_| output::write_summary_to_csv(dir.join("summary.csv"), &summary))
    {
        error!(%e, "could not write results");
    } else {
        println!("\nPaths and summary written to {}", dir.display());
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let params = parse_args();
    if let Err(e) = run(&params) {
        error!(%e, "simulation failed");
        std::process::exit(1);
    }
}
