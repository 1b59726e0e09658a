//! Snapshot Export
//!
//! This example builds a calculator from a JSON configuration and exports
//! the render snapshot as JSON after a short keypad session.
//!
//! Key concepts:
//! - Configuration is validated before a calculator is built
//! - Keypad labels and key presses map to the same commands
//! - Snapshots are plain serializable values for any renderer
//!
//! Run with: cargo run --example snapshot_export

use reckon::input::keypad;
use reckon::{CalculatorBuilder, CalculatorConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Snapshot Export Example ===\n");

    let config = CalculatorConfig::from_json(
        r#"{ "history_capacity": 3, "display_max_len": 8, "fraction_digits": 2 }"#,
    )?;
    let mut calculator = CalculatorBuilder::new().config(config).build()?;

    for row in keypad::KEYPAD {
        let labels: Vec<&str> = row.iter().map(|button| button.label).collect();
        println!("  {}", labels.join("  "));
    }
    println!();

    for label in ["1", "0", "÷", "3", "=", "×", "7", "−"] {
        calculator.click(label);
    }

    println!("{}", calculator.snapshot().to_json()?);

    // Invalid configurations report every violation at once
    let invalid = CalculatorConfig::from_json(r#"{ "history_capacity": 0, "display_max_len": 0 }"#);
    if let Err(error) = invalid {
        println!("\nRejected configuration: {error}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
