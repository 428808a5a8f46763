//! File based builder api around the [`pipeline`](crate::pipeline)
//!
//! ```rust,no_run
//! stegframe_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_carrier("carrier.png")
//!     .with_password("SuperSecret42")
//!     .with_output("image-with-secret.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```

pub mod capacity;
pub mod hide;
mod shared;
pub mod unveil;
pub mod unveil_raw;

pub use shared::Password;
