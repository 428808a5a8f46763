use std::io::Write;

use criterion::{criterion_group, criterion_main, Criterion};
use stegframe_core::media::image::LsbCodec;
use stegframe_core::{ContainerFrame, Raster};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut raster = Raster::new(512, 512, vec![0x7f; 512 * 512 * 4])
            .expect("Cannot create raster");
        let secret_message = ContainerFrame::text(b"Hello World!".to_vec(), false)
            .encode()
            .expect("Cannot encode frame");

        b.iter(|| {
            LsbCodec::encoder(&mut raster)
                .write_all(&secret_message[..])
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
