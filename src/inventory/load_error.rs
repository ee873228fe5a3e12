use std::error::Error;
use std::fmt;

/// Fatal inventory-load failure. Raised once at startup; the server never
/// starts on a partial inventory.
#[derive(Debug)]
pub enum LoadError {
    Read { file: String, message: String },
    Malformed { file: String, message: String },
    MissingColumn { file: String, column: &'static str },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { file, message } => {
                write!(f, "Cannot read {file}: {message}")
            }
            LoadError::Malformed { file, message } => {
                write!(f, "Malformed row in {file}: {message}")
            }
            LoadError::MissingColumn { file, column } => {
                write!(f, "Missing required column '{column}' in {file}")
            }
        }
    }
}

impl Error for LoadError {}
