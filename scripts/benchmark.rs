// scripts/benchmark.rs
use gbm_paths::analytics::{gbm_analytic, BatchSummary};
use gbm_paths::math_utils::Timer;
use gbm_paths::mc::{generate_batch, generate_batch_parallel, PathBatch};
use gbm_paths::SimResult;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    paths: usize,
    steps: usize,
    time_ms: f64,
    throughput_paths_per_sec: f64,
    mean_terminal: f64,
    analytic_mean: f64,
}

impl BenchmarkResult {
    fn relative_error(&self) -> f64 {
        (self.mean_terminal - self.analytic_mean).abs() / self.analytic_mean
    }
}

const SIGMA: f64 = 0.02;
const MU: f64 = 0.0003;
const S0: f64 = 100.0;
const STEPS: usize = 252;
const SEED: u64 = 42;

type BatchFn = fn(f64, f64, f64, usize, usize, Option<u64>) -> SimResult<PathBatch>;

fn time_batch(name: &str, generate: BatchFn, paths: usize) -> SimResult<BenchmarkResult> {
    let mut timer = Timer::new();
    timer.start();
    let batch = generate(SIGMA, MU, S0, STEPS, paths, Some(SEED))?;
    let time_ms = timer.elapsed_ms();

    let summary = BatchSummary::from_batch(&batch);
    let analytic_mean = gbm_analytic::expected_price(S0, MU, SIGMA, STEPS - 1)?;

    Ok(BenchmarkResult {
        name: format!("{} ({}k paths)", name, paths / 1000),
        paths,
        steps: STEPS,
        time_ms,
        throughput_paths_per_sec: paths as f64 / (time_ms / 1000.0),
        mean_terminal: summary.mean_terminal,
        analytic_mean,
    })
}

fn run_batch_benchmarks() -> SimResult<Vec<BenchmarkResult>> {
    let mut results = Vec::new();

    for &paths in &[1_000, 10_000, 100_000] {
        info!(paths, "running batch benchmarks");
        results.push(time_batch("Sequential batch", generate_batch, paths)?);
        results.push(time_batch("Parallel batch", generate_batch_parallel, paths)?);
    }

    Ok(results)
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU: {}", system_info.cpu_model)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(
        file,
        "Benchmark,Paths,Steps,Time_ms,Throughput_paths_per_sec,Mean_Terminal,Analytic_Mean,Relative_Error"
    )?;

    for result in results {
        writeln!(
            file,
            "{},{},{},{:.2},{:.0},{:.6},{:.6},{:.6}",
            result.name,
            result.paths,
            result.steps,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.mean_terminal,
            result.analytic_mean,
            result.relative_error()
        )?;
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("gbm-paths Benchmark Suite");
    println!("=========================\n");

    let system_info = SystemInfo::gather();

    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = match run_batch_benchmarks() {
        Ok(results) => results,
        Err(e) => {
            error!(%e, "benchmark failed");
            std::process::exit(1);
        }
    };

    println!("\n{:=<96}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<96}", "");
    println!(
        "{:<32} {:>8} {:>12} {:>15} {:>10} {:>10} {:>10}",
        "Benchmark", "Paths", "Time (ms)", "Throughput", "Mean S_T", "E[S_T]", "Rel Error"
    );
    println!("{:-<96}", "");

    for result in &results {
        println!(
            "{:<32} {:>8} {:>12.2} {:>15.0} {:>10.4} {:>10.4} {:>9.2}%",
            result.name,
            result.paths,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.mean_terminal,
            result.analytic_mean,
            result.relative_error() * 100.0
        );
    }

    println!("{:=<96}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    if let Err(e) = write_results_to_csv(&results, &system_info, &filename) {
        error!(%e, file = %filename, "could not write benchmark results");
        std::process::exit(1);
    }

    println!("\nResults saved to: {}", filename);
    println!("Run again with: cargo run --bin benchmark --release");
}
