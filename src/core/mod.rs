pub mod dashboard;
pub mod metrics;
pub mod save;
pub mod summary;
