pub mod calendar_service;
pub mod filter_service;
pub mod stats_service;
pub mod validation_service;
