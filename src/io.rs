//! Loading, saving, and the one-shot file pipeline.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing::{debug, info};

use crate::compositor::{composite, OverlayOptions};
use crate::error::{Error, Result};

/// Output file used when none is given.
pub const DEFAULT_OUTPUT: &str = "output.png";

/// JPEG quality used for `.jpg`/`.jpeg` output.
const JPEG_QUALITY: u8 = 95;

/// Load and decode an image as 8-bit RGB.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file cannot be opened or decoded.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = img.to_rgb8();
    debug!(
        path = %path.display(),
        width = rgb.width(),
        height = rgb.height(),
        "loaded image"
    );
    Ok(rgb)
}

/// Save an RGB image in the format named by the file extension.
///
/// JPEG is written at a fixed quality; every other format goes through the
/// `image` crate's default encoder. Missing parent directories are created.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if the extension names no known
/// format, or an encoder/I/O error if writing fails.
pub fn save_image(img: &RgbImage, path: &Path) -> Result<()> {
    let format =
        ImageFormat::from_path(path).map_err(|e| Error::UnsupportedFormat(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    if format == ImageFormat::Jpeg {
        let file = std::fs::File::create(path)?;
        let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(file, JPEG_QUALITY);
        encoder.encode_image(img)?;
    } else {
        img.save_with_format(path, format)?;
    }

    Ok(())
}

/// Load `input` and `logo`, composite, and write the result to `output`.
///
/// Returns the image that was written.
///
/// # Errors
///
/// Propagates load, geometry, and save errors.
pub fn overlay_file(
    input: &Path,
    logo: &Path,
    output: &Path,
    options: &OverlayOptions,
) -> Result<RgbImage> {
    let base = load_image(input)?;
    let logo_img = load_image(logo)?;

    info!(
        input = %input.display(),
        logo = %logo.display(),
        placement = %options.placement,
        background = %options.background,
        "inserting logo"
    );

    let result = composite(&base, &logo_img, options)?;
    save_image(&result, output)?;

    info!(output = %output.display(), "wrote image");
    Ok(result)
}
