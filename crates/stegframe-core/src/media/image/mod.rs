mod lsb_codec;
mod raster;

pub use lsb_codec::{capacity_bits, ImageCarrier, LsbCodec};
pub use raster::{PixelCodec, PngPixelCodec, Raster};
