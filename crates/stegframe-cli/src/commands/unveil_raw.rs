use std::path::PathBuf;

use clap::Args;
use stegframe_core::CodecOptions;

/// Unveils the hidden container as it is, without decrypting it
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source media that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self, options: CodecOptions) -> crate::CliResult<()> {
        let written = stegframe_core::api::unveil_raw::prepare()
            .with_options(options)
            .from_secret_file(self.media)
            .into_raw_file(&self.output_file)
            .execute()?;

        println!("{written} bytes written to {}", self.output_file.display());
        Ok(())
    }
}
