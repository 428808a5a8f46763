use std::path::PathBuf;

use clap::Args;
use log::info;
use stegframe_core::api::unveil::SECRET_MESSAGE_FILE;
use stegframe_core::{CodecOptions, Secret, StegError, Unveiled};

use crate::cli::ask_for_password;
use crate::CliResult;

/// Unveils a message or a file from PNG images and WAV audio files
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to decrypt the data
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source media that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Final data will be stored in that folder, text is printed when omitted
    #[arg(short = 'o', long = "out", value_name = "output folder")]
    pub output_folder: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let unveiled = match self.unveil(self.password.clone(), options) {
            Err(StegError::PasswordRequired) if self.password.is_none() => {
                info!("the secret is encrypted, asking for the password");
                self.unveil(ask_for_password(), options)?
            }
            result => result?,
        };

        match (&unveiled.secret, &self.output_folder) {
            (Secret::Text(text), None) => println!("{text}"),
            (Secret::File { name, data }, None) => {
                println!(
                    "Found file `{name}` with {} bytes, use --out <folder> to save it",
                    data.len()
                )
            }
            (Secret::Text(_), Some(folder)) => {
                println!("Message saved as {}", folder.join(SECRET_MESSAGE_FILE).display())
            }
            (Secret::File { name, .. }, Some(folder)) => {
                println!("File `{name}` saved to {}", folder.display())
            }
        }

        Ok(())
    }

    fn unveil(&self, password: Option<String>, options: CodecOptions) -> CliResult<Unveiled> {
        stegframe_core::api::unveil::prepare()
            .with_options(options)
            .from_secret_file(&self.media)
            .use_output_folder(self.output_folder.as_ref())
            .using_password(password)
            .execute()
    }
}
