//! Keyboard Session
//!
//! This example drives the calculator the way a host application would:
//! every key press is normalized, applied, and followed by a fresh snapshot.
//!
//! Key concepts:
//! - Key names normalize to a closed set of commands
//! - Unrecognized keys are ignored without touching state
//! - Binary operations evaluate left to right, with no precedence
//! - Long results are projected for display, full precision is kept
//!
//! Run with: cargo run --example keyboard_session

use reckon::input::keypad::SHORTCUT_LEGEND;
use reckon::input::KeyInput;
use reckon::Calculator;

fn main() {
    println!("=== Keyboard Session Example ===\n");
    println!("{SHORTCUT_LEGEND}\n");

    let mut calculator = Calculator::new();

    // 2 + 3 × 4 evaluates as (2 + 3) × 4
    let keys = ["2", "+", "3", "*", "4", "Enter", "Shift", "/", "0", "Enter"];
    for key in keys {
        let handled = calculator.press(KeyInput::from_key_name(key));
        let snapshot = calculator.snapshot();
        match handled {
            Some(input) => println!(
                "{key:>9} -> {:<9} display: {:<12} {}",
                input.command.name(),
                snapshot.display,
                snapshot.pending_expression.unwrap_or_default()
            ),
            None => println!("{key:>9} -> ignored"),
        }
    }

    println!("\nLong results are projected:");
    calculator.type_keys("12345678900+1=");
    let snapshot = calculator.snapshot();
    println!("  raw:       {}", snapshot.raw_display);
    println!("  projected: {}", snapshot.display);

    println!("\nHistory (most recent first):");
    for line in calculator.snapshot().history {
        println!("  {line}");
    }

    println!("\n=== Example Complete ===");
}
