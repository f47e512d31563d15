pub mod aggregate;

pub use aggregate::Advance;
