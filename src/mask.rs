//! Binary logo masks via Otsu thresholding.
//!
//! The logo is reduced to luminance, split into two intensity classes at the
//! Otsu level, and the [`Background`] decides which class is logo content.

use image::{GrayImage, Luma, RgbImage};
use tracing::debug;

use crate::placement::Background;

/// Mask value for "set" pixels.
pub const MASK_ON: u8 = 255;

/// Mask value for "unset" pixels.
pub const MASK_OFF: u8 = 0;

/// Convert an RGB image to 8-bit luminance.
///
/// Uses `Y = 0.299*R + 0.587*G + 0.114*B` in 14-bit fixed point with
/// round-to-nearest, so pure white maps to 255 and pure black to 0.
#[must_use]
pub fn luminance(img: &RgbImage) -> GrayImage {
    const R: u32 = 4899;
    const G: u32 = 9617;
    const B: u32 = 1868;
    const SHIFT: u32 = 14;

    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let px = img.get_pixel(x, y);
        let weighted = R * u32::from(px[0]) + G * u32::from(px[1]) + B * u32::from(px[2]);
        let lum = (weighted + (1 << (SHIFT - 1))) >> SHIFT;
        Luma([u8::try_from(lum).unwrap_or(u8::MAX)])
    })
}

/// Compute the Otsu threshold of a grayscale image.
///
/// Returns the level `t` that maximises the between-class variance of the
/// classes `<= t` and `> t`. The first maximum wins. An image with a single
/// populated intensity (or no pixels) yields 0.
#[must_use]
pub fn otsu_level(gray: &GrayImage) -> u8 {
    let mut histogram = [0u64; 256];
    for pixel in gray.pixels() {
        histogram[usize::from(pixel[0])] += 1;
    }

    let total = u64::from(gray.width()) * u64::from(gray.height());
    if total == 0 {
        return 0;
    }

    #[allow(clippy::cast_precision_loss)]
    let sum_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &count)| i as f64 * count as f64)
        .sum();

    let mut sum_low = 0.0_f64;
    let mut weight_low = 0u64;
    let mut max_variance = 0.0_f64;
    let mut best = 0u8;

    for (t, &count) in histogram.iter().enumerate() {
        weight_low += count;
        if weight_low == 0 {
            continue;
        }
        let weight_high = total - weight_low;
        if weight_high == 0 {
            break;
        }

        #[allow(clippy::cast_precision_loss)]
        {
            sum_low += t as f64 * count as f64;
            let mean_low = sum_low / weight_low as f64;
            let mean_high = (sum_total - sum_low) / weight_high as f64;
            let variance = weight_low as f64 * weight_high as f64 * (mean_low - mean_high).powi(2);

            if variance > max_variance {
                max_variance = variance;
                #[allow(clippy::cast_possible_truncation)]
                {
                    best = t as u8;
                }
            }
        }
    }

    best
}

/// Binary mask that is set wherever `gray` is strictly above `level`.
#[must_use]
pub fn threshold_mask(gray: &GrayImage, level: u8) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] > level {
            Luma([MASK_ON])
        } else {
            Luma([MASK_OFF])
        }
    })
}

/// Logical complement of a binary mask.
#[must_use]
pub fn invert(mask: &GrayImage) -> GrayImage {
    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        Luma([!mask.get_pixel(x, y)[0]])
    })
}

/// The two complementary masks used to composite a logo.
#[derive(Debug, Clone)]
pub struct LogoMask {
    /// Otsu level the logo luminance was split at.
    pub level: u8,
    /// Set where the logo's own pixels are kept.
    pub foreground: GrayImage,
    /// Set where the base image shows through.
    pub preserve: GrayImage,
}

impl LogoMask {
    /// Classify the pixels of `logo` into foreground and background.
    ///
    /// On a dark background the bright class is the logo; on a light
    /// background the dark class is.
    #[must_use]
    pub fn compute(logo: &RgbImage, background: Background) -> Self {
        let gray = luminance(logo);
        let level = otsu_level(&gray);
        let above = threshold_mask(&gray, level);
        let below = invert(&above);

        debug!(level, ?background, "computed logo mask");

        let (foreground, preserve) = match background {
            Background::Dark => (above, below),
            Background::Light => (below, above),
        };

        Self {
            level,
            foreground,
            preserve,
        }
    }

    /// Whether the logo pixel at `(x, y)` is foreground.
    #[must_use]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.foreground.get_pixel(x, y)[0] == MASK_ON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn luminance_maps_extremes_exactly() {
        let mut img = RgbImage::new(3, 1);
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        img.put_pixel(1, 0, Rgb([0, 0, 0]));
        img.put_pixel(2, 0, Rgb([255, 0, 0]));
        let gray = luminance(&img);
        assert_eq!(gray.get_pixel(0, 0)[0], 255);
        assert_eq!(gray.get_pixel(1, 0)[0], 0);
        // 0.299 * 255 = 76.2
        assert_eq!(gray.get_pixel(2, 0)[0], 76);
    }

    #[test]
    fn otsu_splits_between_modes_of_bimodal_image() {
        let mut img = GrayImage::new(16, 1);
        for x in 0..8 {
            img.put_pixel(x, 0, Luma([30]));
        }
        for x in 8..16 {
            img.put_pixel(x, 0, Luma([220]));
        }

        let level = otsu_level(&img);
        assert!((30..220).contains(&level), "level {level}");

        let mask = threshold_mask(&img, level);
        assert_eq!(mask.get_pixel(0, 0)[0], MASK_OFF);
        assert_eq!(mask.get_pixel(15, 0)[0], MASK_ON);
    }

    #[test]
    fn otsu_first_maximum_wins_for_two_levels() {
        let mut img = GrayImage::new(4, 1);
        img.put_pixel(0, 0, Luma([0]));
        img.put_pixel(1, 0, Luma([0]));
        img.put_pixel(2, 0, Luma([255]));
        img.put_pixel(3, 0, Luma([255]));
        assert_eq!(otsu_level(&img), 0);
    }

    #[test]
    fn otsu_of_uniform_or_empty_image_is_zero() {
        let uniform = GrayImage::from_pixel(5, 5, Luma([200]));
        assert_eq!(otsu_level(&uniform), 0);
        assert_eq!(otsu_level(&GrayImage::new(0, 0)), 0);
    }

    #[test]
    fn invert_complements_every_pixel() {
        let gray = GrayImage::from_fn(8, 8, |x, y| Luma([u8::try_from((x + y) * 16).unwrap()]));
        let mask = threshold_mask(&gray, 100);
        let inv = invert(&mask);
        for (a, b) in mask.pixels().zip(inv.pixels()) {
            assert!(a[0] == MASK_ON || a[0] == MASK_OFF);
            assert_eq!(a[0] ^ b[0], MASK_ON);
        }
    }

    #[test]
    fn background_selects_which_class_is_foreground() {
        let mut logo = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        logo.put_pixel(1, 1, Rgb([0, 0, 0]));

        let light = LogoMask::compute(&logo, Background::Light);
        assert!(light.is_foreground(1, 1));
        assert!(!light.is_foreground(0, 0));

        let dark = LogoMask::compute(&logo, Background::Dark);
        assert!(!dark.is_foreground(1, 1));
        assert!(dark.is_foreground(0, 0));

        assert_eq!(light.foreground, dark.preserve);
        assert_eq!(light.preserve, dark.foreground);
    }
}
