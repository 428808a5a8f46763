use std::io::{Read, Write};

use super::wav::{write_canonical, WavFormat, WavLayout, CANONICAL_HEADER_LEN};
use super::wav_iter::PcmSamples;
use crate::media::types::ensure_capacity;
use crate::media::{CarrierKind, LsbCarrier};
use crate::result::Result;
use crate::universal_decoder::UniversalDecoder;
use crate::universal_encoder::UniversalEncoder;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Audio Decoder that implements Read
    pub fn decoder(input: &PcmSamples) -> Box<dyn Read + '_> {
        Box::new(UniversalDecoder::new(input.iter()))
    }

    /// builds a LSB Audio Encoder that implements Write
    pub fn encoder(input: &mut PcmSamples) -> Box<dyn Write + '_> {
        Box::new(UniversalEncoder::new(input.iter_mut()))
    }
}

/// A PCM audio carrier, one bit per sample in increasing sample order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioCarrier {
    format: WavFormat,
    samples: PcmSamples,
}

impl AudioCarrier {
    pub fn new(format: WavFormat, samples: PcmSamples) -> Self {
        Self { format, samples }
    }

    /// parses a WAV file, 8 bit samples are unsigned and 16 bit samples signed little endian
    pub fn parse(media: &[u8]) -> Result<Self> {
        let layout = WavLayout::parse(media)?;
        let samples = PcmSamples::decode(layout.format.sample_format()?, layout.data(media));

        Ok(Self::new(layout.format, samples))
    }

    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    pub fn samples(&self) -> &PcmSamples {
        &self.samples
    }

    /// canonical 44 byte header followed by the samples, other chunks are not preserved
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>> {
        let mut wav = Vec::with_capacity(CANONICAL_HEADER_LEN + self.samples.data_len());
        write_canonical(&mut wav, &self.format, self.samples.data_len())?;
        self.samples.write_to(&mut wav)?;

        Ok(wav)
    }
}

impl LsbCarrier for AudioCarrier {
    fn kind(&self) -> CarrierKind {
        CarrierKind::Audio
    }

    fn capacity_bits(&self) -> usize {
        self.samples.len()
    }

    fn hide(&mut self, frame: &[u8]) -> Result<()> {
        ensure_capacity(frame.len(), self.capacity_bits())?;
        LsbCodec::encoder(&mut self.samples).write_all(frame)?;

        Ok(())
    }

    fn decoder(&self) -> Box<dyn Read + '_> {
        LsbCodec::decoder(&self.samples)
    }
}
