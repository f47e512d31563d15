pub mod config;
pub mod dataset;
pub mod export;
pub mod format;
pub mod store;
