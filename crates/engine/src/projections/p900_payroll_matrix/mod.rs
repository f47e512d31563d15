pub mod matrix_builder;

pub use matrix_builder::build_export_matrix;
