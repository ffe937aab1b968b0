// API-facing error types
pub mod bugs;

// Re-exports for convenience
pub use bugs::BugError;
