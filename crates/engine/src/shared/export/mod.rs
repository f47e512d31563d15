//! Serializers for the payroll export matrix.

pub mod csv;
pub mod xlsx;

use thiserror::Error;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub use self::csv::write_csv;
pub use self::xlsx::write_xlsx;
