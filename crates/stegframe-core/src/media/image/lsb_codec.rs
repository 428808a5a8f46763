use std::io::{Read, Write};

use super::Raster;
use crate::media::types::ensure_capacity;
use crate::media::{CarrierKind, LsbCarrier, MediaPrimitive, MediaPrimitiveMut};
use crate::result::Result;
use crate::universal_decoder::UniversalDecoder;
use crate::universal_encoder::UniversalEncoder;

/// color channels carrying data per pixel, alpha is never touched
const CHANNELS_USED: usize = 3;
const CHANNELS: usize = 4;

/// bits an image of the given size can hold, one per R, G and B channel
pub fn capacity_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS_USED
}

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder(input: &Raster) -> Box<dyn Read + '_> {
        Box::new(UniversalDecoder::new(
            input
                .rgba()
                .chunks_exact(CHANNELS)
                .flat_map(|pixel| pixel[..CHANNELS_USED].iter().copied())
                .map(MediaPrimitive::ImageColorChannel),
        ))
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder(carrier: &mut Raster) -> Box<dyn Write + '_> {
        Box::new(UniversalEncoder::new(
            carrier
                .rgba_mut()
                .chunks_exact_mut(CHANNELS)
                .flat_map(|pixel| pixel[..CHANNELS_USED].iter_mut())
                .map(MediaPrimitiveMut::ImageColorChannel),
        ))
    }
}

/// An image carrier, bits go row by row into R, G and B of every pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCarrier {
    raster: Raster,
}

impl ImageCarrier {
    pub fn new(raster: Raster) -> Self {
        Self { raster }
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn into_raster(self) -> Raster {
        self.raster
    }
}

impl LsbCarrier for ImageCarrier {
    fn kind(&self) -> CarrierKind {
        CarrierKind::Image
    }

    fn capacity_bits(&self) -> usize {
        capacity_bits(self.raster.width(), self.raster.height())
    }

    fn hide(&mut self, frame: &[u8]) -> Result<()> {
        ensure_capacity(frame.len(), self.capacity_bits())?;
        LsbCodec::encoder(&mut self.raster).write_all(frame)?;

        Ok(())
    }

    fn decoder(&self) -> Box<dyn Read + '_> {
        LsbCodec::decoder(&self.raster)
    }
}
