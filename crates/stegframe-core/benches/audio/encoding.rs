use criterion::{criterion_group, criterion_main, Criterion};
use stegframe_core::media::audio::{AudioCarrier, PcmSamples, WavFormat};
use stegframe_core::media::LsbCarrier;
use stegframe_core::ContainerFrame;

pub fn audio_encoding(c: &mut Criterion) {
    c.bench_function("Audio Encoding", |b| {
        let samples = (0..44_100).map(|i| (i % 2000) as i16 - 1000).collect();
        let mut audio = AudioCarrier::new(WavFormat::pcm(1, 44_100, 16), PcmSamples::I16(samples));
        let secret_message = ContainerFrame::text(b"Hello World!".to_vec(), false)
            .encode()
            .expect("Cannot encode frame");

        b.iter(|| {
            audio
                .hide(&secret_message)
                .expect("Cannot write to codec");
        })
    });
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
