// Database entities - SeaORM models
pub mod bug;
