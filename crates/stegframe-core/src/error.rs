use std::fmt::{self, Display, Formatter};
use std::string::FromUtf8Error;

use thiserror::Error;

pub use stegframe_cipher::CipherError;

use crate::media::CarrierKind;

/// The category an error belongs to, callers branch on this instead of messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// bad magic, truncated or malformed frame, unsupported carrier type
    Validation,
    /// payload does not fit into the carrier
    Capacity,
    /// missing or wrong password, failed authentication, malformed encrypted payload
    Crypto,
    /// missing chunks, unsupported sample format, unreadable image
    CarrierFormat,
    Io,
    /// incomplete use of the builder api
    Usage,
}

#[derive(Error, Debug)]
pub enum StegError {
    /// The first four bytes of the unveiled data are not `STEG`
    #[error("No hidden container found, magic bytes do not match")]
    InvalidMagic,

    /// The container header declares more bytes than the carrier holds
    #[error("Incomplete container: {declared} bytes declared, but only {available} bytes available")]
    IncompleteContainer { declared: u64, available: usize },

    /// Represents an error caused by an invalid filename, for example non UTF-8 bytes
    #[error("A file with an invalid file name was provided")]
    InvalidFileName,

    /// Represents the error of invalid UTF-8 text data found inside of a text only message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    #[error("File name is {0} bytes long, at most 65535 bytes are supported")]
    FileNameTooLong(usize),

    #[error("Payload is {0} bytes long, at most 4294967295 bytes are supported")]
    PayloadTooLarge(usize),

    /// Every carrier interpretation was tried, none contained a container
    #[error("No hidden payload found ({})", Attempts(.attempts))]
    NoHiddenPayload {
        attempts: Vec<(CarrierKind, StegError)>,
    },

    #[error("Capacity exceeded: {needed_bits} bits needed, but the carrier holds only {capacity_bits} bits")]
    CapacityExceeded {
        needed_bits: usize,
        capacity_bits: usize,
    },

    #[error("The hidden payload is encrypted, a password is required")]
    PasswordRequired,

    #[error(transparent)]
    Crypto(#[from] CipherError),

    /// Audio container does not start with `RIFF` .. `WAVE`
    #[error("Audio media is invalid: RIFF/WAVE signature not found")]
    InvalidSignature,

    #[error("Audio media is invalid: `{0}` chunk not found")]
    MissingChunk(&'static str),

    #[error("Audio media is invalid: chunk `{id}` at offset {offset} exceeds the file")]
    TruncatedChunk { id: String, offset: usize },

    #[error("Unsupported audio format: format code {format_code} with {bits_per_sample} bits per sample, only 8 and 16 bit PCM is supported")]
    UnsupportedFormat {
        format_code: u16,
        bits_per_sample: u16,
    },

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia(#[source] image::ImageError),

    #[error("Raster of {width}x{height} needs {expected} RGBA bytes, got {given}")]
    InvalidRaster {
        width: u32,
        height: u32,
        expected: usize,
        given: usize,
    },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError(#[source] image::ImageError),

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message or file to hide")]
    MissingSecret,

    #[error("API Error: Either a message or a file can be hidden, not both")]
    ConflictingSecrets,
}

impl StegError {
    pub fn kind(&self) -> ErrorKind {
        use StegError::*;

        match self {
            InvalidMagic
            | IncompleteContainer { .. }
            | InvalidFileName
            | InvalidTextData(_)
            | FileNameTooLong(_)
            | PayloadTooLarge(_)
            | NoHiddenPayload { .. } => ErrorKind::Validation,
            CapacityExceeded { .. } => ErrorKind::Capacity,
            PasswordRequired | Crypto(_) => ErrorKind::Crypto,
            InvalidSignature
            | MissingChunk(_)
            | TruncatedChunk { .. }
            | UnsupportedFormat { .. }
            | InvalidImageMedia(_)
            | InvalidRaster { .. }
            | ImageEncodingError(_)
            | AudioEncodingError => ErrorKind::CarrierFormat,
            ReadError { .. } | WriteError { .. } | IoError(_) => ErrorKind::Io,
            CarrierNotSet | TargetNotSet | MissingSecret | ConflictingSecrets => ErrorKind::Usage,
        }
    }
}

struct Attempts<'a>(&'a [(CarrierKind, StegError)]);

impl Display for Attempts<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (kind, error)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "as {kind}: {error}")?;
        }
        Ok(())
    }
}
