// Services layer - Input rules applied before persistence
pub mod bug_patch;
pub mod bug_validator;
pub mod sanitizer;

pub use bug_patch::{BugChanges, BugPatch};
pub use bug_validator::{validate_bug_data, ValidationResult};
pub use sanitizer::{sanitize, sanitize_value};
