pub mod aggregate;

pub use aggregate::ProjectTp;
