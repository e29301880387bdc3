pub mod log_builders;

// Re-export main utilities for use by test files
pub use log_builders::GameLogBuilder;
