use std::path::{Path, PathBuf};

use log::info;

use super::shared::{read_file, sanitize_file_name, write_file, Password};
use crate::media::image::PngPixelCodec;
use crate::media::CodecOptions;
use crate::pipeline::{self, Unveiled};
use crate::result::Result;
use crate::{Secret, StegError};

/// file name unveiled text messages are written to
pub const SECRET_MESSAGE_FILE: &str = "secret-message.txt";

/// file name for hidden files whose stored name is empty or unusable
pub const EXTRACTED_FILE: &str = "extracted.bin";

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the image or audio file that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// This is the folder where the data will be saved to
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    pub fn use_output_folder<A: AsRef<Path>>(mut self, output_folder: Option<A>) -> Self {
        self.output_folder = output_folder.map(|f| f.as_ref().to_path_buf());
        self
    }

    /// Set the password used for decrypting the data
    /// If `None` is passed, no password will be used, encrypted data then fails with `PasswordRequired`
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process, the secret is written to the output folder if one is set
    pub fn execute(self) -> Result<Unveiled> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegError::CarrierNotSet);
        };

        let media = read_file(&secret_media)?;
        let unveiled = pipeline::unveil(
            &media,
            self.password.as_deref(),
            &self.options,
            &PngPixelCodec,
        )?;

        if let Some(output_folder) = self.output_folder {
            let (file_name, data) = match &unveiled.secret {
                Secret::Text(text) => (SECRET_MESSAGE_FILE, text.as_bytes()),
                Secret::File { name, data } => (
                    sanitize_file_name(name).unwrap_or(EXTRACTED_FILE),
                    data.as_slice(),
                ),
            };
            let target_file = output_folder.join(file_name);
            write_file(&target_file, data)?;
            info!("unveiled secret written to {}", target_file.display());
        }

        Ok(unveiled)
    }
}
