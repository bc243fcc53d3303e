// ============================================================================
// Integer Arithmetic
// Pure two-operand operations over i32 with a zero-fallback division
// ============================================================================

/// Add two integers.
///
/// Overflow wraps (two's complement), identically in debug and release builds.
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Subtract `b` from `a`. Overflow wraps.
#[inline]
pub const fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Multiply two integers. Overflow wraps.
#[inline]
pub const fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Divide `a` by `b` in floating point.
///
/// Both operands are widened to `f64` before dividing, so the quotient is
/// never truncated. A zero divisor is not an error: the result is `0.0`.
///
/// # Example
/// ```
/// use math_utils::numeric::divide;
///
/// assert_eq!(divide(10, 4), 2.5);
/// assert_eq!(divide(7, 0), 0.0);
/// ```
#[inline]
pub fn divide(a: i32, b: i32) -> f64 {
    if b == 0 {
        tracing::trace!(dividend = a, "zero divisor, returning 0.0");
        return 0.0;
    }

    f64::from(a) / f64::from(b)
}

// ============================================================================
// Tests
// ============================================================================
