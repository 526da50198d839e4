//! Structured error types for xltimeline.
//!
//! Only whole-run failures live here. Row-level problems in the events sheet
//! (blank titles, unparseable years) are skipped by the extractor and never
//! surface as errors.

/// All errors that can abort an export.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// XML parsing error from quick-xml.
    #[error("XML parsing: {0}")]
    Xml(#[from] quick_xml::Error),

    /// ZIP archive error.
    #[error("ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested worksheet is not in the workbook.
    #[error("Sheet \"{sheet}\" not found in workbook")]
    NotFound { sheet: String },

    /// Required header columns are missing.
    #[error("Schema error: {0}")]
    Schema(String),

    /// General parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimelineError>;
