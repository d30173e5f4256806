//! Burn a logo into a corner of an image.
//!
//! The logo's background is removed with a binary mask: logo luminance is split
//! into two classes at the Otsu threshold, and the caller states whether the
//! logo was drawn on a light or a dark backdrop. Base pixels show through where
//! the backdrop was, logo pixels are kept everywhere else.
//!
//! # Quick Start
//!
//! ```no_run
//! use logo_overlay::{composite, Background, OverlayOptions, Placement};
//!
//! let base = image::open("photo.jpg").unwrap().to_rgb8();
//! let logo = image::open("logo.png").unwrap().to_rgb8();
//! let opts = OverlayOptions {
//!     placement: Placement::BottomRight,
//!     background: Background::Light,
//! };
//! let out = composite(&base, &logo, &opts).expect("logo larger than photo");
//! out.save("branded.png").unwrap();
//! ```
//!
//! # Files
//!
//! [`overlay_file`] runs the whole load, composite, save pipeline.
//!
//! ```no_run
//! use std::path::Path;
//! use logo_overlay::{overlay_file, OverlayOptions};
//!
//! overlay_file(
//!     Path::new("photo.jpg"),
//!     Path::new("logo.png"),
//!     Path::new("output.png"),
//!     &OverlayOptions::default(),
//! )
//! .unwrap();
//! ```

#![deny(missing_docs)]

mod compositor;
pub mod error;
mod io;
pub mod mask;
pub mod placement;

pub use compositor::{composite, OverlayOptions};
pub use error::{Error, Result};
pub use io::{load_image, overlay_file, save_image, DEFAULT_OUTPUT};
pub use placement::{Background, Placement, Roi};
