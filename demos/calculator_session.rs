//! Calculator Session
//!
//! This example walks a single calculator session through every operation:
//! forward arithmetic, a rejected division by zero, undo/redo traversal,
//! and a final reset.
//!
//! Run with: cargo run --example calculator_session

use tally::{Calculator, Decimal, OperationLabels, OperationType, RoundingStrategy};

fn main() {
    println!("=== Calculator Session Example ===\n");

    let labels = OperationLabels::default();
    let mut calc = Calculator::new();
    println!("start: {}", calc.result());

    calc.add(Decimal::from(5)).unwrap();
    calc.add(Decimal::from(1)).unwrap();
    println!("after {} 5, {} 1: {}",
        labels.label(OperationType::Add),
        labels.label(OperationType::Add),
        calc.result()
    );

    calc.subtract(Decimal::from(1)).unwrap();
    println!("after {} 1: {}", labels.label(OperationType::Subtract), calc.result());

    calc.multiply(Decimal::from(2)).unwrap();
    println!("after {} 2: {}", labels.label(OperationType::Multiply), calc.result());

    calc.divide_with(Decimal::from(2), 0, RoundingStrategy::MidpointAwayFromZero)
        .unwrap();
    println!("after {} 2 (scale 0): {}", labels.label(OperationType::Divide), calc.result());

    // rejected operations leave the session untouched
    if let Err(err) = calc.divide(Decimal::ZERO) {
        println!("divide by zero rejected: {err}");
    }

    calc.undo();
    println!("after undo: {}", calc.result());

    calc.redo();
    println!("after redo: {}", calc.result());

    calc.reset();
    println!("after reset: {}", calc.result());

    println!("\n=== Example Complete ===");
}
