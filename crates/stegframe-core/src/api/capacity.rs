use std::path::{Path, PathBuf};

use super::shared::read_file;
use crate::capacity::{estimate_as, Capacity};
use crate::media::image::PngPixelCodec;
use crate::media::CodecOptions;
use crate::result::Result;
use crate::StegError;

pub fn prepare() -> CapacityApi {
    CapacityApi::default()
}

/// How much a carrier file can hold, without hiding anything
#[derive(Default, Debug)]
pub struct CapacityApi {
    media: Option<PathBuf>,
    options: CodecOptions,
}

impl CapacityApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn of_carrier(mut self, media: impl AsRef<Path>) -> Self {
        self.media = Some(media.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<Capacity> {
        let Some(media) = self.media else {
            return Err(StegError::CarrierNotSet);
        };
        let media = read_file(&media)?;

        estimate_as(self.options.carrier.resolve(&media), &media, &PngPixelCodec)
    }
}
