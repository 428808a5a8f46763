//! # Container frame
//!
//! The self describing byte layout that is hidden inside a carrier:
//!
//! ```text
//! 0..3    magic "STEG"
//! 4       flags: bit0 text, bit7 encrypted, bits 1-6 reserved (zero)
//! 5..6    file name length (u16, big endian)
//! 7..10   payload length (u32, big endian)
//! 11..    file name (UTF-8), then payload
//! ```
//!
//! Everything behind the declared payload is carrier noise and gets ignored.

use std::io::Write;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::result::Result;
use crate::StegError;

pub const FRAME_MAGIC: [u8; 4] = *b"STEG";
pub const HEADER_LEN: usize = 11;
pub const MAX_FILE_NAME_LEN: usize = u16::MAX as usize;

pub(crate) const TEXT: u8 = 1 << 0;
pub(crate) const ENCRYPTED: u8 = 1 << 7;

/// the fixed size part of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub flags: u8,
    pub file_name_len: u16,
    pub payload_len: u32,
}

impl FrameHeader {
    /// parses and validates the header at the start of `bytes`, the body is not checked
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() >= FRAME_MAGIC.len() && bytes[..FRAME_MAGIC.len()] != FRAME_MAGIC {
            return Err(StegError::InvalidMagic);
        }
        if bytes.len() < HEADER_LEN {
            return Err(StegError::IncompleteContainer {
                declared: HEADER_LEN as u64,
                available: bytes.len(),
            });
        }

        let mut header = &bytes[FRAME_MAGIC.len()..HEADER_LEN];
        Ok(Self {
            flags: header.read_u8()?,
            file_name_len: header.read_u16::<BigEndian>()?,
            payload_len: header.read_u32::<BigEndian>()?,
        })
    }

    pub fn is_text(&self) -> bool {
        self.flags & TEXT != 0
    }

    pub fn is_encrypted(&self) -> bool {
        self.flags & ENCRYPTED != 0
    }

    /// total bytes of the frame including this header
    pub fn frame_len(&self) -> u64 {
        HEADER_LEN as u64 + u64::from(self.file_name_len) + u64::from(self.payload_len)
    }
}

/// A decoded container frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerFrame {
    is_text: bool,
    encrypted: bool,
    file_name: String,
    payload: Vec<u8>,
}

impl ContainerFrame {
    /// Text frames never carry a file name, a given one is dropped.
    pub fn new<S: Into<String>>(payload: Vec<u8>, is_text: bool, file_name: S, encrypted: bool) -> Self {
        let file_name = if is_text { String::new() } else { file_name.into() };

        Self {
            is_text,
            encrypted,
            file_name,
            payload,
        }
    }

    pub fn text(payload: Vec<u8>, encrypted: bool) -> Self {
        Self::new(payload, true, "", encrypted)
    }

    pub fn file<S: Into<String>>(file_name: S, payload: Vec<u8>, encrypted: bool) -> Self {
        Self::new(payload, false, file_name, encrypted)
    }

    pub fn is_text(&self) -> bool {
        self.is_text
    }

    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    pub fn flags(&self) -> u8 {
        let mut flags = 0;
        if self.is_text {
            flags |= TEXT;
        }
        if self.encrypted {
            flags |= ENCRYPTED;
        }
        flags
    }

    /// number of bytes `encode` produces
    pub fn encoded_len(&self) -> usize {
        encoded_len(self.file_name.len(), self.payload.len())
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let file_name_len = u16::try_from(self.file_name.len())
            .map_err(|_| StegError::FileNameTooLong(self.file_name.len()))?;
        let payload_len = u32::try_from(self.payload.len())
            .map_err(|_| StegError::PayloadTooLarge(self.payload.len()))?;

        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.write_all(&FRAME_MAGIC)?;
        buf.write_u8(self.flags())?;
        buf.write_u16::<BigEndian>(file_name_len)?;
        buf.write_u32::<BigEndian>(payload_len)?;
        buf.write_all(self.file_name.as_bytes())?;
        buf.write_all(&self.payload)?;

        Ok(buf)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let header = FrameHeader::parse(bytes)?;
        let frame = checked_frame(bytes, &header)?;

        let (file_name, payload) = frame[HEADER_LEN..].split_at(header.file_name_len as usize);
        let file_name = std::str::from_utf8(file_name)
            .map_err(|_| StegError::InvalidFileName)?
            .to_owned();

        Ok(Self {
            is_text: header.is_text(),
            encrypted: header.is_encrypted(),
            file_name,
            payload: payload.to_vec(),
        })
    }
}

/// frame size for the given file name and payload sizes
pub fn encoded_len(file_name_len: usize, payload_len: usize) -> usize {
    HEADER_LEN + file_name_len + payload_len
}

/// declared total length of the frame at the start of `bytes`, validated against the available bytes
pub fn frame_len(bytes: &[u8]) -> Result<usize> {
    let header = FrameHeader::parse(bytes)?;
    Ok(checked_frame(bytes, &header)?.len())
}

/// cuts off everything behind the frame
pub fn truncate_frame(bytes: &[u8]) -> Result<&[u8]> {
    let header = FrameHeader::parse(bytes)?;
    checked_frame(bytes, &header)
}

fn checked_frame<'b>(bytes: &'b [u8], header: &FrameHeader) -> Result<&'b [u8]> {
    let declared = header.frame_len();
    if declared > bytes.len() as u64 {
        return Err(StegError::IncompleteContainer {
            declared,
            available: bytes.len(),
        });
    }

    Ok(&bytes[..declared as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_a_text_frame() {
        let frame = ContainerFrame::text(b"hello".to_vec(), false);

        assert_eq!(
            frame.encode().unwrap(),
            b"STEG\x01\x00\x00\x00\x00\x00\x05hello".to_vec()
        );
        assert_eq!(frame.encoded_len(), 16);
    }

    #[test]
    fn should_encode_lengths_big_endian() {
        let frame = ContainerFrame::file("a.bin", vec![7; 0x0102], true);
        let bytes = frame.encode().unwrap();

        assert_eq!(bytes[4], ENCRYPTED);
        assert_eq!(&bytes[5..7], &[0x00, 0x05]);
        assert_eq!(&bytes[7..11], &[0x00, 0x00, 0x01, 0x02]);
        assert_eq!(&bytes[11..16], b"a.bin");
        assert_eq!(bytes.len(), 11 + 5 + 0x0102);
    }

    #[test]
    fn should_decode_what_was_encoded() {
        for frame in [
            ContainerFrame::text("hello wörld".as_bytes().to_vec(), false),
            ContainerFrame::text(Vec::new(), true),
            ContainerFrame::file("secret.txt", b"lorem".to_vec(), false),
            ContainerFrame::file("zürich.bin", vec![0xff; 300], true),
        ] {
            let decoded = ContainerFrame::decode(&frame.encode().unwrap()).unwrap();
            assert_eq!(decoded, frame);
        }
    }

    #[test]
    fn should_drop_the_file_name_of_text_frames() {
        let frame = ContainerFrame::new(b"hi".to_vec(), true, "ignored.txt", false);

        assert_eq!(frame.file_name(), "");
        assert_eq!(frame.encoded_len(), 13);
    }

    #[test]
    fn should_ignore_trailing_carrier_noise() {
        let frame = ContainerFrame::file("f", b"abc".to_vec(), false);
        let mut bytes = frame.encode().unwrap();
        bytes.extend_from_slice(&[0x5a; 40]);

        assert_eq!(ContainerFrame::decode(&bytes).unwrap(), frame);
        assert_eq!(frame_len(&bytes).unwrap(), 15);
        assert_eq!(truncate_frame(&bytes).unwrap(), &bytes[..15]);
    }

    #[test]
    fn should_reject_foreign_magic() {
        let mut bytes = ContainerFrame::text(b"x".to_vec(), false).encode().unwrap();
        bytes[3] = b'X';

        assert!(matches!(
            ContainerFrame::decode(&bytes),
            Err(StegError::InvalidMagic)
        ));
    }

    #[test]
    fn should_reject_a_short_header() {
        assert!(matches!(
            ContainerFrame::decode(b"STEG\x01"),
            Err(StegError::IncompleteContainer {
                declared: 11,
                available: 5
            })
        ));
        assert!(matches!(
            ContainerFrame::decode(b"ST"),
            Err(StegError::IncompleteContainer { .. })
        ));
    }

    #[test]
    fn should_reject_lengths_beyond_the_available_bytes() {
        let bytes = ContainerFrame::file("name", vec![1; 10], false)
            .encode()
            .unwrap();

        assert!(matches!(
            ContainerFrame::decode(&bytes[..bytes.len() - 1]),
            Err(StegError::IncompleteContainer {
                declared: 25,
                available: 24
            })
        ));
    }

    #[test]
    fn should_not_overflow_on_maximum_declared_lengths() {
        let bytes = b"STEG\x00\xff\xff\xff\xff\xff\xff";

        assert!(matches!(
            ContainerFrame::decode(bytes),
            Err(StegError::IncompleteContainer {
                declared: 4_295_032_841,
                available: 11
            })
        ));
    }

    #[test]
    fn should_ignore_reserved_flag_bits() {
        let mut bytes = ContainerFrame::text(b"x".to_vec(), false).encode().unwrap();
        bytes[4] |= 0b0111_1110;

        let frame = ContainerFrame::decode(&bytes).unwrap();
        assert!(frame.is_text());
        assert!(!frame.is_encrypted());
    }

    #[test]
    fn should_reject_invalid_file_names() {
        let bytes = b"STEG\x00\x00\x02\x00\x00\x00\x00\xff\xfe";

        assert!(matches!(
            ContainerFrame::decode(bytes),
            Err(StegError::InvalidFileName)
        ));
    }

    #[test]
    fn should_reject_too_long_file_names() {
        let frame = ContainerFrame::file("a".repeat(MAX_FILE_NAME_LEN + 1), Vec::new(), false);

        assert!(matches!(
            frame.encode(),
            Err(StegError::FileNameTooLong(65536))
        ));
        assert!(ContainerFrame::file("a".repeat(MAX_FILE_NAME_LEN), Vec::new(), false)
            .encode()
            .is_ok());
    }
}
