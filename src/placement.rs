//! Logo placement and background configuration.
//!
//! A [`Placement`] names the corner of the base image that receives the logo,
//! and [`Placement::roi`] turns it into a concrete [`Roi`] rectangle. A
//! [`Background`] states whether the logo sits on a light or a dark backdrop,
//! which decides which side of the Otsu split counts as logo content.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Corner of the base image that receives the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Top-left corner.
    #[default]
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl Placement {
    /// All four placements, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Name accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "topleft",
            Self::TopRight => "topright",
            Self::BottomLeft => "bottomleft",
            Self::BottomRight => "bottomright",
        }
    }

    /// Region of a `base_width` x `base_height` image covered by a logo of the
    /// given size at this corner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LogoTooLarge`] if the logo exceeds the base image along
    /// either axis.
    pub fn roi(
        self,
        base_width: u32,
        base_height: u32,
        logo_width: u32,
        logo_height: u32,
    ) -> Result<Roi> {
        if logo_width > base_width || logo_height > base_height {
            return Err(Error::LogoTooLarge {
                logo_width,
                logo_height,
                base_width,
                base_height,
            });
        }

        let right = base_width - logo_width;
        let bottom = base_height - logo_height;
        let (x, y) = match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (right, 0),
            Self::BottomLeft => (0, bottom),
            Self::BottomRight => (right, bottom),
        };

        Ok(Roi {
            x,
            y,
            width: logo_width,
            height: logo_height,
        })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "topleft" => Ok(Self::TopLeft),
            "topright" => Ok(Self::TopRight),
            "bottomleft" => Ok(Self::BottomLeft),
            "bottomright" => Ok(Self::BottomRight),
            _ => Err(Error::InvalidPlacement(s.to_string())),
        }
    }
}

/// Rectangle inside the base image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roi {
    /// Left column.
    pub x: u32,
    /// Top row.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Roi {
    /// Whether pixel `(px, py)` lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Brightness of the backdrop the logo was drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Background {
    /// White or bright backdrop (class level 255).
    #[default]
    Light,
    /// Black or dark backdrop (class level 0).
    Dark,
}

impl Background {
    /// Intensity class this background corresponds to.
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Self::Light => 255,
            Self::Dark => 0,
        }
    }

    /// Map an intensity class back to a background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBackgroundLevel`] for anything but 0 or 255.
    pub fn from_level(level: u8) -> Result<Self> {
        match level {
            255 => Ok(Self::Light),
            0 => Ok(Self::Dark),
            other => Err(Error::InvalidBackgroundLevel(other)),
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "white",
            Self::Dark => "black",
        })
    }
}

impl FromStr for Background {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "light" => Ok(Self::Light),
            "black" | "dark" => Ok(Self::Dark),
            other => match other.parse::<u8>() {
                Ok(level) => Self::from_level(level),
                Err(_) => Err(Error::InvalidBackground(s.to_string())),
            },
        }
    }
}
