use std::path::{Path, PathBuf};

use super::shared::{read_file, write_file};
use crate::media::image::PngPixelCodec;
use crate::media::CodecOptions;
use crate::pipeline;
use crate::result::Result;
use crate::StegError;

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

/// Writes the hidden container frame as it is, nothing gets decrypted
#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilRawApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    pub fn into_raw_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// returns the number of bytes written
    pub fn execute(self) -> Result<usize> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegError::CarrierNotSet);
        };
        let Some(output_file) = self.output_file else {
            return Err(StegError::TargetNotSet);
        };

        let frame = pipeline::unveil_raw(&read_file(&secret_media)?, &self.options, &PngPixelCodec)?;
        write_file(&output_file, &frame)?;

        Ok(frame.len())
    }
}
