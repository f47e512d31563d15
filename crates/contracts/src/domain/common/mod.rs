//! Common traits for all stored records

pub mod aggregate_root;

pub use aggregate_root::AggregateRoot;
