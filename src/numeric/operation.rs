// ============================================================================
// Operation Dispatch
// Runtime selection of an arithmetic operation by symbol or name
// ============================================================================

use super::arithmetic::{add, divide, multiply, subtract};
use super::errors::{NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Infix symbol (`+`, `-`, `*`, `/`).
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Lowercase name of the operation.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    #[inline]
    pub const fn is_commutative(self) -> bool {
        matches!(self, Operation::Add | Operation::Multiply)
    }

    /// Apply the operation to two operands.
    ///
    /// Division follows the same zero-fallback policy as [`divide`]:
    /// a zero divisor yields `Outcome::Float(0.0)`.
    #[inline]
    pub fn apply(self, a: i32, b: i32) -> Outcome {
        match self {
            Operation::Add => Outcome::Integer(add(a, b)),
            Operation::Subtract => Outcome::Integer(subtract(a, b)),
            Operation::Multiply => Outcome::Integer(multiply(a, b)),
            Operation::Divide => Outcome::Float(divide(a, b)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operation {
    type Err = NumericError;

    /// Parse from a symbol or a name.
    ///
    /// # Examples
    /// - "+" or "add" -> Add
    /// - "x", "×" or "Multiply" -> Multiply
    /// - "÷" or "/" -> Divide
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        match s.to_lowercase().as_str() {
            "+" | "add" => Ok(Operation::Add),
            "-" | "subtract" => Ok(Operation::Subtract),
            "*" | "x" | "×" | "multiply" => Ok(Operation::Multiply),
            "/" | "÷" | "divide" => Ok(Operation::Divide),
            _ => Err(NumericError::UnknownOperator),
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a dynamically dispatched operation.
///
/// Add, subtract and multiply stay integral; divide always produces a float.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Integer(i32),
    Float(f64),
}

impl Outcome {
    /// Widen to `f64` regardless of variant.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Integer(v) => f64::from(v),
            Outcome::Float(v) => v,
        }
    }

    /// Integer value, or `None` for a float outcome.
    #[inline]
    pub const fn as_integer(self) -> Option<i32> {
        match self {
            Outcome::Integer(v) => Some(v),
            Outcome::Float(_) => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Integer(v) => write!(f, "{}", v),
            Outcome::Float(v) => write!(f, "{}", v),
        }
    }
}

// ============================================================================
// Expression Evaluation
// ============================================================================

/// Evaluate a single binary expression of the form `"<int> <op> <int>"`.
///
/// Tokens must be separated by whitespace so that a leading `-` on an
/// operand is never confused with the subtraction operator.
///
/// # Errors
/// - `InvalidInput` if there are not exactly three tokens or an operand
///   is not a valid `i32`
/// - `UnknownOperator` if the middle token is not a recognized operator
///
/// # Example
/// ```
/// use math_utils::numeric::{evaluate, Outcome};
///
/// assert_eq!(evaluate("4 * 3"), Ok(Outcome::Integer(12)));
/// assert_eq!(evaluate("7 / 0"), Ok(Outcome::Float(0.0)));
/// ```
pub fn evaluate(expression: &str) -> NumericResult<Outcome> {
    let mut tokens = expression.split_whitespace();
    let (lhs, op, rhs) = match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(lhs), Some(op), Some(rhs), None) => (lhs, op, rhs),
        _ => return Err(NumericError::InvalidInput),
    };

    let a = parse_operand(lhs)?;
    let operation: Operation = op.parse()?;
    let b = parse_operand(rhs)?;

    let outcome = operation.apply(a, b);
    tracing::trace!(%operation, a, b, %outcome, "evaluated expression");
    Ok(outcome)
}

fn parse_operand(token: &str) -> NumericResult<i32> {
    token.parse().map_err(|_| NumericError::InvalidInput)
}

// ============================================================================
// Tests
// ============================================================================
