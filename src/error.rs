//! Error types for the icon generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rendering and generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons
#[derive(Error, Debug)]
pub enum Error {
    /// Requested edge length is outside the supported range
    #[error(
        "Invalid icon size {0}: expected {min}..={max} pixels",
        min = crate::rendering::MIN_ICON_SIZE,
        max = crate::rendering::MAX_ICON_SIZE
    )]
    InvalidSize(u32),

    /// Failed to encode a rendered canvas
    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    /// Failed to write an icon file
    #[error("Failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::EncodeError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_error_reports_cause_once() {
        let err = Error::Io {
            path: PathBuf::from("icons/icon16.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such dir"),
        };
        assert_eq!(err.to_string(), "Failed to write icons/icon16.png");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("no such dir"));
    }
}
