use std::fmt::{self, Display, Formatter};
use std::io::Read;

use enum_dispatch::enum_dispatch;
use log::{debug, error};

use super::audio::AudioCarrier;
use super::image::{ImageCarrier, PixelCodec};
use crate::frame::{FrameHeader, HEADER_LEN};
use crate::result::Result;
use crate::StegError;

/// The two families of carrier media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierKind {
    Image,
    Audio,
}

impl CarrierKind {
    /// `RIFF` signature means audio, everything else is treated as an image
    pub fn detect(media: &[u8]) -> Self {
        if media.starts_with(super::audio::RIFF) {
            CarrierKind::Audio
        } else {
            CarrierKind::Image
        }
    }

    pub fn other(self) -> Self {
        match self {
            CarrierKind::Image => CarrierKind::Audio,
            CarrierKind::Audio => CarrierKind::Image,
        }
    }

    /// file extension of the media written after hiding
    pub fn extension(self) -> &'static str {
        match self {
            CarrierKind::Image => "png",
            CarrierKind::Audio => "wav",
        }
    }
}

impl Display for CarrierKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CarrierKind::Image => write!(f, "image"),
            CarrierKind::Audio => write!(f, "audio"),
        }
    }
}

/// A carrier that stores one bit in the least significant bit of each of its units
#[enum_dispatch]
pub trait LsbCarrier {
    fn kind(&self) -> CarrierKind;

    /// number of bits the carrier can hold
    fn capacity_bits(&self) -> usize;

    /// hides the frame bytes, nothing is touched when they do not fit
    fn hide(&mut self, frame: &[u8]) -> Result<()>;

    /// reader over the bytes formed by the lowest bits of all units, in traversal order
    fn decoder(&self) -> Box<dyn Read + '_>;

    /// all complete bytes the lowest bits form, no interpretation
    fn unveil_raw(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.capacity_bits() / 8);
        self.decoder().read_to_end(&mut buf)?;

        Ok(buf)
    }

    /// the hidden container frame, validated and cut to its declared length
    fn unveil(&self) -> Result<Vec<u8>> {
        read_frame(self.decoder(), self.capacity_bits() / 8)
    }
}

/// a media container for steganography
#[enum_dispatch(LsbCarrier)]
#[derive(Debug, Clone)]
pub enum Carrier {
    Image(ImageCarrier),
    Audio(AudioCarrier),
}

impl Carrier {
    /// interprets the media bytes as the given kind of carrier
    pub fn load(kind: CarrierKind, media: &[u8], pixels: &dyn PixelCodec) -> Result<Self> {
        let carrier: Carrier = match kind {
            CarrierKind::Image => ImageCarrier::new(pixels.decode(media)?).into(),
            CarrierKind::Audio => AudioCarrier::parse(media)?.into(),
        };
        debug!(
            "loaded {} carrier with a capacity of {} bits",
            kind,
            carrier.capacity_bits()
        );

        Ok(carrier)
    }

    /// serializes the carrier, images as PNG and audio as canonical PCM WAV
    pub fn to_bytes(&self, pixels: &dyn PixelCodec) -> Result<Vec<u8>> {
        match self {
            Carrier::Image(image) => pixels.encode(image.raster()).map_err(|e| {
                error!("Error encoding image: {e}");
                e
            }),
            Carrier::Audio(audio) => audio.to_wav_bytes().map_err(|e| {
                error!("Error encoding audio: {e}");
                e
            }),
        }
    }
}

/// fails with `CapacityExceeded` when `frame_len` bytes do not fit into `capacity_bits`
pub(crate) fn ensure_capacity(frame_len: usize, capacity_bits: usize) -> Result<()> {
    let needed_bits = crate::bit_iterator::bits_needed(frame_len);
    if needed_bits > capacity_bits {
        return Err(StegError::CapacityExceeded {
            needed_bits,
            capacity_bits,
        });
    }

    Ok(())
}

/// reads header first and only as much as it declares, never more than `available` bytes
fn read_frame(mut decoder: impl Read, available: usize) -> Result<Vec<u8>> {
    let mut frame = vec![0u8; HEADER_LEN.min(available)];
    decoder.read_exact(&mut frame)?;

    let declared = FrameHeader::parse(&frame)?.frame_len();
    if declared > available as u64 {
        return Err(StegError::IncompleteContainer {
            declared,
            available,
        });
    }
    frame.resize(declared as usize, 0);
    decoder.read_exact(&mut frame[HEADER_LEN..])?;
    debug!("unveiled a container frame of {declared} bytes");

    Ok(frame)
}
