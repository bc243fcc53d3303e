// ============================================================================
// Logging Setup
// Optional global tracing subscriber for binaries, demos and benchmarks
// ============================================================================
//
// The library only emits events through the `tracing` facade. Installing a
// subscriber is left to the application; this helper covers the common case.
//
// # Usage
//
// ```ignore
// use math_utils::utils::init_logging;
//
// init_logging(tracing::Level::TRACE);
// math_utils::divide(7, 0); // emits "zero divisor, returning 0.0"
// ```
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber filtered at `level`.
///
/// # Returns
/// * `true` if the subscriber was installed
/// * `false` if a global subscriber was already set
#[cfg(feature = "logging")]
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}

// ============================================================================
// Stub implementation when logging feature is disabled
// ============================================================================

/// Install a global `fmt` subscriber filtered at `level`.
///
/// **Note:** This is a no-op stub. Enable the `logging` feature to install a subscriber.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_level: Level) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "logging")]
    #[test]
    fn test_init_logging_only_once() {
        // The first call may lose to another test that already installed one
        let _ = init_logging(Level::DEBUG);
        assert!(!init_logging(Level::DEBUG));
    }

    #[cfg(not(feature = "logging"))]
    #[test]
    fn test_init_logging_stub() {
        assert!(!init_logging(Level::INFO));
    }
}
