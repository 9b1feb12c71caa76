pub mod executor;
pub mod observability;
pub mod persistence;
