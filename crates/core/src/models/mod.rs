pub mod category;
pub mod config;
pub mod date;
pub mod deal;
pub mod filter;
pub mod platform;
pub mod stats;
