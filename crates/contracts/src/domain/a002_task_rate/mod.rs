pub mod aggregate;

pub use aggregate::TaskRate;
