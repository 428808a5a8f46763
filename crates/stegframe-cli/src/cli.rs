use clap::{Parser, Subcommand, ValueEnum};
use stegframe_core::CarrierHint;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// How to interpret the media, `auto` detects WAV by its RIFF signature
    #[arg(long, value_enum, default_value_t = CarrierArg::Auto, global = true)]
    pub carrier: CarrierArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Capacity(capacity::CapacityArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarrierArg {
    Auto,
    Image,
    Audio,
}

impl From<CarrierArg> for CarrierHint {
    fn from(carrier: CarrierArg) -> Self {
        match carrier {
            CarrierArg::Auto => CarrierHint::Auto,
            CarrierArg::Image => CarrierHint::Image,
            CarrierArg::Audio => CarrierHint::Audio,
        }
    }
}

/// prompts for a password on the terminal, `None` when nothing was entered
pub fn ask_for_password() -> Option<String> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()
        .ok()
        .filter(|p| !p.is_empty())
}
