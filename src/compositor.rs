//! Masked logo compositing.
//!
//! The ROI of the base image is rebuilt from two disjoint parts: base pixels
//! where the logo background was masked out, and logo pixels where the logo
//! foreground was kept. The parts are summed with per-channel saturation.

use image::{Rgb, RgbImage};
use tracing::debug;

use crate::error::Result;
use crate::mask::{LogoMask, MASK_ON};
use crate::placement::{Background, Placement, Roi};

/// Options controlling where and how the logo is burned in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayOptions {
    /// Corner of the base image that receives the logo.
    pub placement: Placement,
    /// Backdrop the logo was drawn on.
    pub background: Background,
}

/// Composite `logo` into a corner of `base`, returning a new image.
///
/// Neither input is modified. Pixels outside the logo's region are copied
/// from `base` unchanged.
///
/// # Errors
///
/// Returns [`Error::LogoTooLarge`](crate::Error::LogoTooLarge) if the logo does
/// not fit inside `base`.
pub fn composite(base: &RgbImage, logo: &RgbImage, options: &OverlayOptions) -> Result<RgbImage> {
    let roi = options
        .placement
        .roi(base.width(), base.height(), logo.width(), logo.height())?;

    debug!(
        placement = %options.placement,
        x = roi.x,
        y = roi.y,
        width = roi.width,
        height = roi.height,
        "resolved logo region"
    );

    let mask = LogoMask::compute(logo, options.background);
    let blended = blend_roi(base, logo, &mask, roi);

    let mut output = base.clone();
    for (dx, dy, px) in blended.enumerate_pixels() {
        output.put_pixel(roi.x + dx, roi.y + dy, *px);
    }

    Ok(output)
}

/// Build the ROI-sized blend of base background and logo foreground.
fn blend_roi(base: &RgbImage, logo: &RgbImage, mask: &LogoMask, roi: Roi) -> RgbImage {
    RgbImage::from_fn(roi.width, roi.height, |dx, dy| {
        let under = masked(
            base.get_pixel(roi.x + dx, roi.y + dy),
            mask.preserve.get_pixel(dx, dy)[0],
        );
        let over = masked(logo.get_pixel(dx, dy), mask.foreground.get_pixel(dx, dy)[0]);
        saturating_add(under, over)
    })
}

fn masked(px: &Rgb<u8>, mask: u8) -> Rgb<u8> {
    if mask == MASK_ON {
        *px
    } else {
        Rgb([0, 0, 0])
    }
}

fn saturating_add(a: Rgb<u8>, b: Rgb<u8>) -> Rgb<u8> {
    Rgb([
        a[0].saturating_add(b[0]),
        a[1].saturating_add(b[1]),
        a[2].saturating_add(b[2]),
    ])
}
