//! RIFF/WAVE container handling, only as much as LSB hiding needs:
//! the `fmt ` chunk, the location of the `data` chunk and a canonical header for output.

use std::io::Write;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use log::debug;

use crate::result::Result;
use crate::StegError;

pub const RIFF: &[u8] = b"RIFF";
pub const WAVE: &[u8] = b"WAVE";
const FMT: &[u8] = b"fmt ";
const DATA: &[u8] = b"data";

const RIFF_HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;
const FMT_LEN: usize = 16;
/// length of the header `write_canonical` produces
pub const CANONICAL_HEADER_LEN: usize = RIFF_HEADER_LEN + CHUNK_HEADER_LEN + FMT_LEN + CHUNK_HEADER_LEN;

pub const FORMAT_PCM: u16 = 1;
pub const FORMAT_EXTENSIBLE: u16 = 0xfffe;

/// how the samples in the `data` chunk are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// 8 bit, unsigned
    U8,
    /// 16 bit, signed little endian
    I16,
}

/// the fields of a `fmt ` chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub format_code: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// linear PCM with block align and byte rate derived from the other fields
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        let block_align = channels.saturating_mul(bits_per_sample / 8);
        Self {
            format_code: FORMAT_PCM,
            channels,
            sample_rate,
            byte_rate: sample_rate.saturating_mul(u32::from(block_align)),
            block_align,
            bits_per_sample,
        }
    }

    fn parse(chunk: &[u8]) -> Result<Self> {
        if chunk.len() < FMT_LEN {
            return Err(StegError::MissingChunk("fmt "));
        }

        Ok(Self {
            format_code: LittleEndian::read_u16(&chunk[0..2]),
            channels: LittleEndian::read_u16(&chunk[2..4]),
            sample_rate: LittleEndian::read_u32(&chunk[4..8]),
            byte_rate: LittleEndian::read_u32(&chunk[8..12]),
            block_align: LittleEndian::read_u16(&chunk[12..14]),
            bits_per_sample: LittleEndian::read_u16(&chunk[14..16]),
        })
    }

    /// only 8 and 16 bit linear PCM can carry data
    pub fn sample_format(&self) -> Result<SampleFormat> {
        match (self.format_code, self.bits_per_sample) {
            (FORMAT_PCM | FORMAT_EXTENSIBLE, 8) => Ok(SampleFormat::U8),
            (FORMAT_PCM | FORMAT_EXTENSIBLE, 16) => Ok(SampleFormat::I16),
            (format_code, bits_per_sample) => Err(StegError::UnsupportedFormat {
                format_code,
                bits_per_sample,
            }),
        }
    }
}

/// Where the samples of a WAV file are, found without decoding them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavLayout {
    pub format: WavFormat,
    pub data_offset: usize,
    pub data_len: usize,
}

impl WavLayout {
    /// walks the chunks up to the first `data` chunk, the first `fmt ` chunk wins
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < RIFF_HEADER_LEN || &bytes[0..4] != RIFF || &bytes[8..12] != WAVE {
            return Err(StegError::InvalidSignature);
        }

        let mut format: Option<WavFormat> = None;
        let mut offset = RIFF_HEADER_LEN;
        while offset + CHUNK_HEADER_LEN <= bytes.len() {
            let id = &bytes[offset..offset + 4];
            let size = LittleEndian::read_u32(&bytes[offset + 4..offset + 8]) as usize;
            let body = offset + CHUNK_HEADER_LEN;
            let end = body
                .checked_add(size)
                .filter(|end| *end <= bytes.len())
                .ok_or_else(|| StegError::TruncatedChunk {
                    id: String::from_utf8_lossy(id).into_owned(),
                    offset,
                })?;

            if id == FMT && format.is_none() {
                format = Some(WavFormat::parse(&bytes[body..end])?);
            } else if id == DATA {
                let format = format.ok_or(StegError::MissingChunk("fmt "))?;
                format.sample_format()?;
                debug!(
                    "wav data chunk at {body} with {size} bytes, {} bits per sample",
                    format.bits_per_sample
                );

                return Ok(Self {
                    format,
                    data_offset: body,
                    data_len: size,
                });
            } else {
                debug!(
                    "skipping wav chunk `{}` of {size} bytes",
                    String::from_utf8_lossy(id)
                );
            }

            // chunks are word aligned, odd sizes are followed by a pad byte
            offset = end + (size & 1);
        }

        Err(match format {
            None => StegError::MissingChunk("fmt "),
            Some(_) => StegError::MissingChunk("data"),
        })
    }

    /// number of samples, one carrier bit each
    pub fn sample_count(&self) -> usize {
        self.data_len * 8 / self.format.bits_per_sample as usize
    }

    /// the raw bytes of the `data` chunk
    pub fn data<'b>(&self, bytes: &'b [u8]) -> &'b [u8] {
        &bytes[self.data_offset..self.data_offset + self.data_len]
    }
}

/// writes the minimal 44 byte header: RIFF, WAVE, a 16 byte PCM `fmt ` chunk and the `data` chunk header
pub fn write_canonical<W: Write>(mut out: W, format: &WavFormat, data_len: usize) -> Result<()> {
    let bytes_per_sample = format.bits_per_sample / 8;
    let block_align = format
        .channels
        .checked_mul(bytes_per_sample)
        .ok_or(StegError::AudioEncodingError)?;
    let byte_rate = format
        .sample_rate
        .checked_mul(u32::from(block_align))
        .ok_or(StegError::AudioEncodingError)?;
    let data_len = u32::try_from(data_len).map_err(|_| StegError::AudioEncodingError)?;
    let riff_len = data_len
        .checked_add((CANONICAL_HEADER_LEN - CHUNK_HEADER_LEN) as u32)
        .ok_or(StegError::AudioEncodingError)?;

    out.write_all(RIFF)?;
    out.write_u32::<LittleEndian>(riff_len)?;
    out.write_all(WAVE)?;
    out.write_all(FMT)?;
    out.write_u32::<LittleEndian>(FMT_LEN as u32)?;
    out.write_u16::<LittleEndian>(FORMAT_PCM)?;
    out.write_u16::<LittleEndian>(format.channels)?;
    out.write_u32::<LittleEndian>(format.sample_rate)?;
    out.write_u32::<LittleEndian>(byte_rate)?;
    out.write_u16::<LittleEndian>(block_align)?;
    out.write_u16::<LittleEndian>(format.bits_per_sample)?;
    out.write_all(DATA)?;
    out.write_u32::<LittleEndian>(data_len)?;

    Ok(())
}
