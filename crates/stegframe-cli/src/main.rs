use clap::Parser;
use stegframe_core::CodecOptions;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = stegframe_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = CodecOptions::default().with_carrier(args.carrier.into());

    let result = match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::UnveilRaw(unveil_raw) => unveil_raw.run(options),
        Commands::Capacity(capacity) => capacity.run(options),
    };

    if let Err(e) = &result {
        log::error!("{e}");
    }
    result
}
