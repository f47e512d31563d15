pub mod aggregate;

pub use aggregate::Worker;
