// ============================================================================
// Basic Usage Example
// ============================================================================

use math_utils::prelude::*;
use math_utils::utils::init_logging;

fn main() {
    // Only installs a subscriber with the `logging` feature enabled
    init_logging(tracing::Level::TRACE);

    println!("=== Math Utils Example ===\n");

    println!("add(2, 3)       = {}", add(2, 3));
    println!("subtract(5, 3)  = {}", subtract(5, 3));
    println!("multiply(4, 3)  = {}", multiply(4, 3));
    println!("divide(10, 2)   = {}", divide(10, 2));
    println!("divide(-9, 3)   = {}", divide(-9, 3));
    println!("divide(7, 0)    = {}  (zero divisor falls back to 0.0)", divide(7, 0));

    println!("\nWrapping overflow:");
    println!("add(i32::MAX, 1) = {}", add(i32::MAX, 1));

    println!("\nRuntime dispatch:");
    for op in Operation::ALL {
        println!("  12 {} 4 = {}", op, op.apply(12, 4));
    }

    println!("\nExpressions:");
    for expression in ["2 + 3", "-9 / 3", "7 / 0", "6 x 7", "2 % 3", "2+3"] {
        match evaluate(expression) {
            Ok(outcome) => println!("  {:<8} => {}", expression, outcome),
            Err(e) => println!("  {:<8} => error: {}", expression, e),
        }
    }
}
