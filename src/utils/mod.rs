// ============================================================================
// Utilities Module
// Helper functions for applications embedding the crate
// ============================================================================

mod logging;

pub use logging::init_logging;
