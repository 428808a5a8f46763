use std::io::Write;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use super::wav::SampleFormat;
use crate::media::{MediaPrimitive, MediaPrimitiveMut};

/// decoded PCM samples, interleaved as in the `data` chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PcmSamples {
    U8(Vec<u8>),
    I16(Vec<i16>),
}

impl PcmSamples {
    /// a trailing partial sample is dropped
    pub fn decode(format: SampleFormat, data: &[u8]) -> Self {
        match format {
            SampleFormat::U8 => PcmSamples::U8(data.to_vec()),
            SampleFormat::I16 => {
                let mut samples = vec![0i16; data.len() / 2];
                LittleEndian::read_i16_into(&data[..samples.len() * 2], &mut samples);
                PcmSamples::I16(samples)
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PcmSamples::U8(s) => s.len(),
            PcmSamples::I16(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// byte length of the encoded samples
    pub fn data_len(&self) -> usize {
        match self {
            PcmSamples::U8(s) => s.len(),
            PcmSamples::I16(s) => s.len() * 2,
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        match self {
            PcmSamples::U8(s) => out.write_all(s),
            PcmSamples::I16(s) => s
                .iter()
                .try_for_each(|sample| out.write_i16::<LittleEndian>(*sample)),
        }
    }

    /// samples in increasing index order
    pub fn iter(&self) -> AudioWavIter<'_> {
        match self {
            PcmSamples::U8(s) => AudioWavIter::U8(s.iter()),
            PcmSamples::I16(s) => AudioWavIter::I16(s.iter()),
        }
    }

    pub fn iter_mut(&mut self) -> AudioWavIterMut<'_> {
        match self {
            PcmSamples::U8(s) => AudioWavIterMut::U8(s.iter_mut()),
            PcmSamples::I16(s) => AudioWavIterMut::I16(s.iter_mut()),
        }
    }
}

/// Audio samples iterator that yields immutable `MediaPrimitive`s
pub enum AudioWavIter<'a> {
    U8(std::slice::Iter<'a, u8>),
    I16(std::slice::Iter<'a, i16>),
}

impl Iterator for AudioWavIter<'_> {
    type Item = MediaPrimitive;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            AudioWavIter::U8(s) => s.next().copied().map(MediaPrimitive::AudioSampleUnsigned),
            AudioWavIter::I16(s) => s.next().copied().map(MediaPrimitive::AudioSample),
        }
    }
}

/// Audio samples iterator that yields mutable `MediaPrimitiveMut`s
pub enum AudioWavIterMut<'a> {
    U8(std::slice::IterMut<'a, u8>),
    I16(std::slice::IterMut<'a, i16>),
}

impl<'a> Iterator for AudioWavIterMut<'a> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            AudioWavIterMut::U8(s) => s.next().map(MediaPrimitiveMut::AudioSampleUnsigned),
            AudioWavIterMut::I16(s) => s.next().map(MediaPrimitiveMut::AudioSample),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::UnveilBit;

    #[test]
    fn should_decode_little_endian_samples() {
        let samples = PcmSamples::decode(SampleFormat::I16, &[0x01, 0x00, 0xff, 0xff, 0x00, 0x80, 0x7f]);

        assert_eq!(samples, PcmSamples::I16(vec![1, -1, i16::MIN]));
        assert_eq!(samples.data_len(), 6);
    }

    #[test]
    fn should_keep_unsigned_samples_as_they_are() {
        let samples = PcmSamples::decode(SampleFormat::U8, &[0x00, 0x80, 0xff]);

        assert_eq!(samples.len(), 3);
        assert_eq!(
            samples.iter().map(|s| s.unveil_bit()).collect::<Vec<_>>(),
            vec![false, false, true]
        );
    }

    #[test]
    fn should_write_what_was_decoded() {
        let data = [0x34, 0x12, 0xcc, 0xfe];
        let mut out = Vec::new();
        PcmSamples::decode(SampleFormat::I16, &data)
            .write_to(&mut out)
            .unwrap();

        assert_eq!(out, data);
    }
}
