pub mod audio;
pub mod codec_options;
pub mod image;
mod primitives;
mod types;

pub use codec_options::*;
pub use primitives::*;
pub use types::*;

pub(crate) use types::ensure_capacity;
