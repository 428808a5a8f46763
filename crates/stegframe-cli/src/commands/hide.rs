use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use stegframe_core::{CarrierKind, CodecOptions, StegError};

use crate::CliResult;

const SIGNATURE_LEN: usize = 4;

/// Hides a message or a file in PNG images and WAV audio files
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the data
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Media file such as PNG image or WAV audio file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final media will be stored as file, defaults to `stego-<media file>`
    #[arg(short = 'o', long = "out", value_name = "output media file")]
    pub write_to_file: Option<PathBuf>,

    /// File to hide in the media
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let output = match self.write_to_file {
            Some(output) => output,
            None => {
                let signature = read_signature(&self.media)?;
                default_output(&self.media, options.carrier.resolve(&signature))
            }
        };

        stegframe_core::api::hide::prepare()
            .with_options(options)
            .with_carrier(&self.media)
            .use_message(self.message)
            .use_file(self.data_file)
            .use_password(self.password)
            .with_output(&output)
            .execute()?;

        println!("Secret hidden in {}", output.display());
        Ok(())
    }
}

/// just enough leading bytes of the media to detect its kind
fn read_signature(media: &Path) -> CliResult<Vec<u8>> {
    let mut signature = Vec::with_capacity(SIGNATURE_LEN);
    File::open(media)
        .and_then(|file| file.take(SIGNATURE_LEN as u64).read_to_end(&mut signature))
        .map_err(|source| StegError::ReadError { source })?;

    Ok(signature)
}

/// `stego-<name>` next to the media, images always get a `.png` suffix since they are written as PNG
fn default_output(media: &Path, kind: CarrierKind) -> PathBuf {
    let name = media
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match kind {
        CarrierKind::Image => format!("stego-{name}.png"),
        CarrierKind::Audio => format!("stego-{name}"),
    };

    media.with_file_name(name)
}
