//! Whole hide and unveil runs over carrier bytes.
//!
//! The carrier is always decoded into a private copy, so the bytes the caller
//! passed in are never changed, no matter where an operation fails.

use log::{debug, warn};

use crate::frame::{truncate_frame, ContainerFrame};
use crate::media::image::PixelCodec;
use crate::media::{Carrier, CarrierKind, CodecOptions, LsbCarrier};
use crate::result::Result;
use crate::{ErrorKind, Secret, StegError};

/// The carrier after hiding, serialized again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenMedia {
    pub kind: CarrierKind,
    pub bytes: Vec<u8>,
}

impl HiddenMedia {
    /// `png` or `wav`, matching what `bytes` contains
    pub fn extension(&self) -> &'static str {
        self.kind.extension()
    }
}

/// A secret found inside a carrier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unveiled {
    pub secret: Secret,
    /// true when the secret was stored encrypted
    pub encrypted: bool,
    /// the carrier interpretation that held the secret
    pub kind: CarrierKind,
}

/// hides the secret inside the carrier, encrypted when a non empty password is given
pub fn hide(
    carrier: &[u8],
    secret: Secret,
    password: Option<&str>,
    options: &CodecOptions,
    pixels: &dyn PixelCodec,
) -> Result<HiddenMedia> {
    let password = password.filter(|p| !p.is_empty());
    let kind = options.carrier.resolve(carrier);
    let mut media = Carrier::load(kind, carrier, pixels)?;

    // fail before the expensive key derivation when it cannot fit anyway
    let frame_len = secret.framed_len(password.is_some());
    crate::media::ensure_capacity(frame_len, media.capacity_bits())?;

    let frame = secret.into_frame(password)?.encode()?;
    debug!(
        "hiding a frame of {} bytes in a {} carrier of {} bits",
        frame.len(),
        kind,
        media.capacity_bits()
    );
    media.hide(&frame)?;

    Ok(HiddenMedia {
        kind,
        bytes: media.to_bytes(pixels)?,
    })
}

/// finds and restores the hidden secret
///
/// In `Auto` mode the other carrier kind is tried when the detected one holds no
/// valid container. Password and decryption errors end the search.
pub fn unveil(
    carrier: &[u8],
    password: Option<&str>,
    options: &CodecOptions,
    pixels: &dyn PixelCodec,
) -> Result<Unveiled> {
    let password = password.filter(|p| !p.is_empty());
    let (kind, frame) = find_frame(carrier, options, pixels)?;
    let frame = ContainerFrame::decode(&frame)?;
    let encrypted = frame.is_encrypted();

    Ok(Unveiled {
        secret: Secret::from_frame(frame, password)?,
        encrypted,
        kind,
    })
}

/// the validated frame bytes exactly as hidden, nothing is decrypted
pub fn unveil_raw(
    carrier: &[u8],
    options: &CodecOptions,
    pixels: &dyn PixelCodec,
) -> Result<Vec<u8>> {
    let (_, frame) = find_frame(carrier, options, pixels)?;
    Ok(truncate_frame(&frame)?.to_vec())
}

fn find_frame(
    carrier: &[u8],
    options: &CodecOptions,
    pixels: &dyn PixelCodec,
) -> Result<(CarrierKind, Vec<u8>)> {
    let candidates = options.carrier.candidates(carrier);
    if let &[kind] = candidates.as_slice() {
        return Ok((kind, load_frame(kind, carrier, pixels)?));
    }

    let mut attempts = Vec::with_capacity(candidates.len());
    for kind in candidates {
        match load_frame(kind, carrier, pixels) {
            Ok(frame) => return Ok((kind, frame)),
            Err(e) if is_recoverable(&e) => {
                warn!("no hidden payload found as {kind}: {e}");
                attempts.push((kind, e));
            }
            Err(e) => return Err(e),
        }
    }

    Err(StegError::NoHiddenPayload { attempts })
}

fn load_frame(kind: CarrierKind, carrier: &[u8], pixels: &dyn PixelCodec) -> Result<Vec<u8>> {
    Carrier::load(kind, carrier, pixels)?.unveil()
}

/// another carrier interpretation might still succeed after these
fn is_recoverable(e: &StegError) -> bool {
    matches!(e.kind(), ErrorKind::Validation | ErrorKind::CarrierFormat)
}
