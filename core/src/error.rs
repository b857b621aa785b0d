use thiserror::Error;

/// Result type for hangsel operations
pub type Result<T> = std::result::Result<T, HangselError>;

/// Error types for hangsel operations
#[derive(Error, Debug)]
pub enum HangselError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Input is not a hanging protocol document
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Invalid attribute value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Unparseable tag expression
    #[error("Invalid tag expression: {0}")]
    InvalidTagExpression(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for HangselError {
    fn from(s: String) -> Self {
        HangselError::InvalidDocument(s)
    }
}

impl From<&str> for HangselError {
    fn from(s: &str) -> Self {
        HangselError::InvalidDocument(s.to_string())
    }
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for HangselError {
    fn from(e: dicom_object::ReadError) -> Self {
        HangselError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for HangselError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        HangselError::InvalidValue(format!("{}", e))
    }
}
