//! Error types for wordforge operations.

use thiserror::Error;

/// The main error type for wordforge operations.
///
/// This enum covers all major error categories that can occur while
/// collecting a target profile, generating candidates, and persisting
/// the resulting wordlist.
#[derive(Error, Debug)]
pub enum WordforgeError {
    /// Target profile error
    #[error("Profile error: {0}")]
    Profile(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Wordlist persistence error
    #[error("Output error: {0}")]
    Output(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for wordforge operations.
pub type Result<T> = std::result::Result<T, WordforgeError>;

/// Helper macro to bail out with a WordforgeError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if !valid {
///     bail!(Validation, "Invalid output name: {}", name);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::WordforgeError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::WordforgeError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::WordforgeError::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::WordforgeError::Other(format!($fmt, $($arg)*)))
    };
}
