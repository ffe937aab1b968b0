// API request/response models
pub mod bugs;
pub mod common;
