use crate::media::CarrierKind;

/// Which carrier interpretation to use for a given media
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CarrierHint {
    /// detect by signature: `RIFF` is audio, everything else an image.
    /// Unveiling falls back to the other kind when nothing was found.
    #[default]
    Auto,
    Image,
    Audio,
}

impl CarrierHint {
    /// the kind to use for hiding
    pub fn resolve(self, media: &[u8]) -> CarrierKind {
        match self {
            CarrierHint::Auto => CarrierKind::detect(media),
            CarrierHint::Image => CarrierKind::Image,
            CarrierHint::Audio => CarrierKind::Audio,
        }
    }

    /// the kinds to try in order when unveiling
    pub fn candidates(self, media: &[u8]) -> Vec<CarrierKind> {
        match self {
            CarrierHint::Auto => {
                let detected = CarrierKind::detect(media);
                vec![detected, detected.other()]
            }
            forced => vec![forced.resolve(media)],
        }
    }
}

/// Codec configuration for hiding and unveiling
#[derive(Debug, Default, Clone, Copy)]
pub struct CodecOptions {
    pub carrier: CarrierHint,
}

impl CodecOptions {
    pub fn with_carrier(mut self, carrier: CarrierHint) -> Self {
        self.carrier = carrier;
        self
    }
}
