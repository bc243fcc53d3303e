// ============================================================================
// Numeric Module
// Elementary integer arithmetic and runtime operation dispatch
// ============================================================================
//
// This module provides:
// - add/subtract/multiply/divide: Pure two-operand functions over i32
// - Operation/Outcome: Runtime selection of an operation by symbol or name
// - NumericError: Error types for parsing operators and expressions
//
// Design principles:
// - Arithmetic never panics (wrapping integer overflow)
// - Division by zero yields 0.0, not an error
// - No state between calls

mod arithmetic;
mod errors;
mod operation;

pub use arithmetic::{add, divide, multiply, subtract};
pub use errors::{NumericError, NumericResult};
pub use operation::{evaluate, Operation, Outcome};
