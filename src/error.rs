//! Error types for the logo-overlay crate.

use std::path::PathBuf;

/// Errors that can occur while loading, compositing, or saving images.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input image could not be read or decoded.
    #[error("failed to load image {}: {source}", path.display())]
    Decode {
        /// Path of the image that failed to load.
        path: PathBuf,
        /// Underlying decoder error.
        source: image::ImageError,
    },

    /// The logo position is not one of the four corners.
    #[error("logo position not defined properly: {0:?} (expected topleft, topright, bottomleft or bottomright)")]
    InvalidPlacement(String),

    /// The background name is neither light nor dark.
    #[error("background not defined properly: {0:?} (expected black or white)")]
    InvalidBackground(String),

    /// A numeric background level other than 0 or 255 was given.
    #[error("background not defined properly: level {0} (expected 0 or 255)")]
    InvalidBackgroundLevel(u8),

    /// The logo does not fit inside the base image.
    #[error(
        "logo ({logo_width}x{logo_height}) is larger than the base image ({base_width}x{base_height})"
    )]
    LogoTooLarge {
        /// Logo width in pixels.
        logo_width: u32,
        /// Logo height in pixels.
        logo_height: u32,
        /// Base image width in pixels.
        base_width: u32,
        /// Base image height in pixels.
        base_height: u32,
    },

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output image format is not supported.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// An error occurred while encoding the output image.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let io_err = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io_err.to_string().contains("gone"));

        let unsupported = Error::UnsupportedFormat("gif".to_string());
        assert!(unsupported.to_string().contains("gif"));

        let placement = Error::InvalidPlacement("center".to_string());
        assert!(placement.to_string().contains("logo position not defined properly"));
        assert!(placement.to_string().contains("center"));

        let background = Error::InvalidBackground("grey".to_string());
        assert!(background.to_string().contains("background not defined properly"));

        let level = Error::InvalidBackgroundLevel(128);
        assert!(level.to_string().contains("128"));

        let too_large = Error::LogoTooLarge {
            logo_width: 120,
            logo_height: 40,
            base_width: 100,
            base_height: 100,
        };
        let msg = too_large.to_string();
        assert!(msg.contains("120x40"));
        assert!(msg.contains("100x100"));
    }
}
