//! Pre-flight capacity check without hiding anything.
//!
//! Audio only parses the chunk layout and images only read their dimensions,
//! the formulas are the same the carriers enforce on `hide`.

use std::fmt::{self, Display, Formatter};

use log::debug;
use stegframe_cipher::ENCRYPTION_OVERHEAD;

use crate::frame::HEADER_LEN;
use crate::media::audio::WavLayout;
use crate::media::image::{self, PixelCodec};
use crate::media::CarrierKind;
use crate::result::Result;

/// How much a carrier can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub kind: CarrierKind,
    pub bits: usize,
}

impl Capacity {
    /// whole bytes, a trailing partial byte is unusable
    pub fn bytes(&self) -> usize {
        self.bits / 8
    }

    /// largest secret that still fits, after frame header, file name and cipher overhead
    pub fn max_secret_len(&self, file_name_len: usize, encrypted: bool) -> usize {
        let overhead = if encrypted { ENCRYPTION_OVERHEAD } else { 0 };
        self.bytes()
            .saturating_sub(HEADER_LEN)
            .saturating_sub(file_name_len)
            .saturating_sub(overhead)
    }

    /// true when a frame of `frame_len` bytes can be hidden
    pub fn fits(&self, frame_len: usize) -> bool {
        frame_len
            .checked_mul(8)
            .map_or(false, |bits| bits <= self.bits)
    }
}

impl Display for Capacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let bytes = self.bytes();
        write!(f, "{} bytes (~{} KB)", bytes, (bytes + 512) / 1024)
    }
}

/// detects the carrier kind by signature and computes its capacity
pub fn estimate(media: &[u8], pixels: &dyn PixelCodec) -> Result<Capacity> {
    estimate_as(CarrierKind::detect(media), media, pixels)
}

/// capacity when interpreting the media as the given kind
pub fn estimate_as(kind: CarrierKind, media: &[u8], pixels: &dyn PixelCodec) -> Result<Capacity> {
    let bits = match kind {
        CarrierKind::Audio => WavLayout::parse(media)?.sample_count(),
        CarrierKind::Image => {
            let (width, height) = pixels.dimensions(media)?;
            image::capacity_bits(width, height)
        }
    };
    debug!("{kind} carrier holds {bits} bits");

    Ok(Capacity { kind, bits })
}
