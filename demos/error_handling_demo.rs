// demos/error_handling_demo.rs
use gbm_paths::analytics::gbm_analytic;
use gbm_paths::{generate_batch, generate_path, SimError};

fn report<T>(label: &str, result: Result<T, SimError>) {
    match result {
        Ok(_) => println!("   Unexpected: {} should have failed!", label),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }
}

fn main() {
    println!("Error Handling Demo for gbm-paths");
    println!("=================================\n");

    println!("1. Non-positive initial price...");
    report("initial_price = 0", generate_path(0.2, 0.01, 0.0, 10, Some(1)));

    println!("\n2. Too few steps...");
    report("step_count = 1", generate_path(0.2, 0.01, 100.0, 1, Some(1)));

    println!("\n3. Empty batch...");
    report("simulation_count = 0", generate_batch(0.2, 0.01, 100.0, 10, 0, Some(1)));

    println!("\n4. Non-finite volatility...");
    report("volatility = NaN", generate_path(f64::NAN, 0.01, 100.0, 10, Some(1)));

    println!("\n5. Analytic overflow...");
    report(
        "expected_price with huge drift",
        gbm_analytic::expected_price(100.0, 50.0, 0.2, 10_000),
    );

    println!("\n6. Valid request...");
    match generate_path(0.2, 0.01, 100.0, 5, Some(42)) {
        Ok(path) => println!("   ✓ Success: {:?}", path.prices()),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\n7. Error type matching...");
    match generate_path(0.2, 0.01, -5.0, 10, None) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(SimError::OutOfRange {
            parameter,
            value,
            constraint,
        }) => {
            println!("   ✓ Caught OutOfRange: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
}
