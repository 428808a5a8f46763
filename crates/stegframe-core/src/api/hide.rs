use std::path::{Path, PathBuf};

use log::info;

use super::shared::{read_file, sanitize_file_name, write_file, Password};
use crate::media::image::PngPixelCodec;
use crate::media::{CarrierKind, CodecOptions};
use crate::result::Result;
use crate::{pipeline, Secret, StegError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    file: Option<PathBuf>,
    carrier: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// the file to hide, it is stored under its base name
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file<A: AsRef<Path>>(mut self, data_file: Option<A>) -> Self {
        self.file = data_file.map(|f| f.as_ref().to_path_buf());
        self
    }

    /// the image or audio file that carries the secret
    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, no password will be used, leads to no encryption used
    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// hides the secret and writes the carrier to the output, returns the kind of carrier written
    pub fn execute(self) -> Result<CarrierKind> {
        let secret = match (self.message, self.file) {
            (Some(message), None) => Secret::Text(message),
            (None, Some(file)) => {
                let name = sanitize_file_name(&file.to_string_lossy())?.to_string();
                Secret::file(name, read_file(&file)?)
            }
            (Some(_), Some(_)) => return Err(StegError::ConflictingSecrets),
            (None, None) => return Err(StegError::MissingSecret),
        };
        let Some(carrier) = self.carrier else {
            return Err(StegError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegError::TargetNotSet);
        };

        let media = read_file(&carrier)?;
        let hidden = pipeline::hide(
            &media,
            secret,
            self.password.as_deref(),
            &self.options,
            &PngPixelCodec,
        )?;
        write_file(&output, &hidden.bytes)?;
        info!("secret hidden in {} carrier {}", hidden.kind, output.display());

        Ok(hidden.kind)
    }
}
