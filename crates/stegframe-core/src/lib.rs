//! # Stegframe Core API
//!
//! Hides a text message or a file in the least significant bits of a PNG image
//! or a 8/16 bit PCM WAV file, optionally encrypted with a password.
//!
//! The hidden data is a self describing [`ContainerFrame`] starting with `STEG`.
//! Images carry one bit in R, G and B of every pixel, row by row, alpha is never
//! touched. Audio carries one bit per sample.
//!
//! # Usage Examples
//!
//! ## Hide and unveil in memory
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use image::{DynamicImage, ImageOutputFormat, RgbImage};
//! use stegframe_core::{hide, unveil, CodecOptions, PngPixelCodec, Secret};
//!
//! let mut carrier = Cursor::new(Vec::new());
//! DynamicImage::ImageRgb8(RgbImage::new(10, 10))
//!     .write_to(&mut carrier, ImageOutputFormat::Png)
//!     .expect("Failed to create carrier image");
//!
//! let options = CodecOptions::default();
//! let hidden = hide(carrier.get_ref(), Secret::text("hello"), None, &options, &PngPixelCodec)
//!     .expect("Failed to hide message in image");
//! let unveiled = unveil(&hidden.bytes, None, &options, &PngPixelCodec)
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(unveiled.secret, Secret::text("hello"));
//! ```
//!
//! ## Hide data inside an image file
//!
//! ```rust,no_run
//! stegframe_core::api::hide::prepare()
//!     .with_file("Cargo.toml")        // will hide this file inside the image
//!     .with_password("SuperSecret42") // will encrypt the data with this password
//!     .with_carrier("carrier-image.png")
//!     .with_output("image-with-a-file-inside.png")
//!     .execute()
//!     .expect("Failed to hide file in image");
//! ```
//!
//! ## Unveil data from an image file
//!
//! ```rust,no_run
//! stegframe_core::api::unveil::prepare()
//!     .from_secret_file("image-with-a-file-inside.png")
//!     .using_password("SuperSecret42")
//!     .into_output_folder("unveiled")
//!     .execute()
//!     .expect("Failed to unveil file from image");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod capacity;
pub mod error;
pub mod frame;
pub mod media;
pub mod pipeline;
pub mod result;
pub mod secret;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::capacity::{estimate, estimate_as, Capacity};
pub use crate::error::{ErrorKind, StegError};
pub use crate::frame::ContainerFrame;
pub use crate::media::image::{PixelCodec, PngPixelCodec, Raster};
pub use crate::media::{CarrierHint, CarrierKind, CodecOptions};
pub use crate::pipeline::{hide, unveil, unveil_raw, HiddenMedia, Unveiled};
pub use crate::result::Result;
pub use crate::secret::Secret;
pub use crate::universal_decoder::UniversalDecoder;
pub use crate::universal_encoder::UniversalEncoder;
