use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Error opening file: {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read source: {0}")]
    Read(#[from] std::io::Error),

    #[error("One of the courses is missing a course number (line {line})")]
    MissingCourseNumber { line: usize },

    #[error("One of the courses is missing a course title (line {line})")]
    MissingTitle { line: usize },

    #[error("Invalid prerequisite: {number}")]
    InvalidPrerequisite { number: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CatalogError {
    /// Map the error onto a sysexits-style exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            CatalogError::FileOpen { .. } => crate::exitcode::NOINPUT,
            CatalogError::Read(_) => crate::exitcode::IOERR,
            CatalogError::MissingCourseNumber { .. }
            | CatalogError::MissingTitle { .. }
            | CatalogError::InvalidPrerequisite { .. } => crate::exitcode::DATAERR,
            CatalogError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
