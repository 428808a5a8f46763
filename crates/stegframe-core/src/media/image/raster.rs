use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::io::Reader as ImageReader;
use image::{ColorType, ImageEncoder};
use log::debug;

use crate::result::Result;
use crate::StegError;

/// decoded pixels, RGBA8 in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4));
        if expected != Some(rgba.len()) {
            return Err(StegError::InvalidRaster {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                given: rgba.len(),
            });
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn rgba_mut(&mut self) -> &mut [u8] {
        &mut self.rgba
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }
}

/// Translates compressed image bytes to and from a [`Raster`]
pub trait PixelCodec {
    /// width and height, without decoding the pixels
    fn dimensions(&self, media: &[u8]) -> Result<(u32, u32)>;

    fn decode(&self, media: &[u8]) -> Result<Raster>;

    /// must be lossless, the hidden bits live in the lowest bit of every color
    fn encode(&self, raster: &Raster) -> Result<Vec<u8>>;
}

/// [`PixelCodec`] on top of the `image` crate, writes PNG
#[derive(Debug, Default, Clone, Copy)]
pub struct PngPixelCodec;

impl PixelCodec for PngPixelCodec {
    fn dimensions(&self, media: &[u8]) -> Result<(u32, u32)> {
        ImageReader::new(Cursor::new(media))
            .with_guessed_format()?
            .into_dimensions()
            .map_err(StegError::InvalidImageMedia)
    }

    fn decode(&self, media: &[u8]) -> Result<Raster> {
        let img = image::load_from_memory(media)
            .map_err(StegError::InvalidImageMedia)?
            .to_rgba8();
        debug!("decoded image of {}x{} pixels", img.width(), img.height());

        Raster::new(img.width(), img.height(), img.into_raw())
    }

    fn encode(&self, raster: &Raster) -> Result<Vec<u8>> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(
                raster.rgba(),
                raster.width(),
                raster.height(),
                ColorType::Rgba8,
            )
            .map_err(StegError::ImageEncodingError)?;

        Ok(png)
    }
}
