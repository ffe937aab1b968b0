// Stores layer - Data access and repository pattern
pub mod bug_store;

pub use bug_store::{BugFilter, BugStore, NewBug};
