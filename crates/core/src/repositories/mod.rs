pub mod traits;

// In-memory implementations
pub mod deal_repository;
pub mod reference_repository;
pub mod store;
