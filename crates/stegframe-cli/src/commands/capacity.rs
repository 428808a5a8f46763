use std::path::PathBuf;

use clap::Args;
use stegframe_core::CodecOptions;

/// Shows how much data a PNG image or WAV audio file can hold
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Media file such as PNG image or WAV audio file
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> crate::CliResult<()> {
        let capacity = stegframe_core::api::capacity::prepare()
            .with_options(options)
            .of_carrier(&self.media)
            .execute()?;

        println!("{} carrier: {capacity}", capacity.kind);
        println!(
            "  text message: up to {} bytes, {} bytes with password",
            capacity.max_secret_len(0, false),
            capacity.max_secret_len(0, true)
        );
        Ok(())
    }
}
