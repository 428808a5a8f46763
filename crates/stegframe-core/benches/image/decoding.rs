use std::io::Read;

use criterion::{criterion_group, criterion_main, Criterion};
use stegframe_core::media::image::LsbCodec;
use stegframe_core::{hide, CodecOptions, PixelCodec, PngPixelCodec, Secret};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let carrier = image::RgbaImage::from_fn(512, 512, |x, y| {
            image::Rgba([x as u8, y as u8, (x ^ y) as u8, 0xff])
        });
        let mut png = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(carrier)
            .write_to(&mut png, image::ImageOutputFormat::Png)
            .expect("Cannot write carrier image");
        let hidden = hide(
            png.get_ref(),
            Secret::text("Hello World!"),
            None,
            &CodecOptions::default(),
            &PngPixelCodec,
        )
        .expect("Cannot hide secret message");
        let raster = PngPixelCodec
            .decode(&hidden.bytes)
            .expect("Input image is not readable.");
        let mut buf = [0; 23];

        b.iter(|| {
            LsbCodec::decoder(&raster)
                .read_exact(&mut buf)
                .expect("Failed to read 23 bytes");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
