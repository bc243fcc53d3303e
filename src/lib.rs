// ============================================================================
// Math Utils Library
// Elementary integer arithmetic with a zero-fallback division policy
// ============================================================================

//! # Math Utils
//!
//! Four pure, stateless arithmetic operations over `i32`.
//!
//! ## Features
//!
//! - **`add` / `subtract` / `multiply`** with wrapping overflow (never panic)
//! - **`divide`** widens to `f64` and returns `0.0` for a zero divisor
//! - **Runtime dispatch** through [`Operation`](numeric::Operation) and
//!   single-expression [`evaluate`](numeric::evaluate)
//! - Optional `serde` and `logging` cargo features
//!
//! ## Example
//!
//! ```rust
//! use math_utils::prelude::*;
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(subtract(5, 3), 2);
//! assert_eq!(multiply(4, 3), 12);
//! assert_eq!(divide(10, 2), 5.0);
//!
//! // Division by zero is a defined result, not an error
//! assert_eq!(divide(7, 0), 0.0);
//!
//! let op: Operation = "/".parse().unwrap();
//! assert_eq!(op.apply(-9, 3), Outcome::Float(-3.0));
//! ```

pub mod numeric;
pub mod utils;

pub use numeric::{add, divide, multiply, subtract};

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        add, divide, evaluate, multiply, subtract, NumericError, NumericResult, Operation,
        Outcome,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(subtract(5, 3), 2);
        assert_eq!(multiply(4, 3), 12);
        assert_eq!(divide(10, 2), 5.0);
        assert_eq!(divide(7, 0), 0.0);
        assert_eq!(divide(-9, 3), -3.0);
    }

    #[test]
    fn test_root_reexports() {
        assert_eq!(crate::add(1, 1), 2);
        assert_eq!(crate::subtract(1, 1), 0);
        assert_eq!(crate::multiply(2, 2), 4);
        assert_eq!(crate::divide(1, 2), 0.5);
    }

    #[test]
    fn test_dispatch_agrees_with_expressions() {
        for op in Operation::ALL {
            let expression = format!("12 {} 4", op.symbol());
            assert_eq!(evaluate(&expression), Ok(op.apply(12, 4)));
        }
    }

    #[test]
    fn test_concurrent_callers() {
        let results = crossbeam::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|t| {
                    s.spawn(move |_| {
                        (0..1_000)
                            .map(|i| {
                                let a = t * 1_000 + i;
                                add(a, 1) == a + 1
                                    && subtract(a, 1) == a - 1
                                    && multiply(a, 2) == a * 2
                                    && divide(a, 0) == 0.0
                                    && divide(a, 2) == a as f64 / 2.0
                            })
                            .all(|ok| ok)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        })
        .unwrap();

        assert_eq!(results.len(), 8);
        assert!(results.into_iter().all(|ok| ok));
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Operation>();
        assert_send_sync::<Outcome>();
        assert_send_sync::<NumericError>();
    }
}
