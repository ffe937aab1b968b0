// Domain values shared by services and stores
pub mod bug_fields;
