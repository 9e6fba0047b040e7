pub mod analyze;
pub mod sources;
