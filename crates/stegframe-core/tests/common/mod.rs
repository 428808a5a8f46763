#![allow(dead_code)]

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};

/// PNG with a colorful, half transparent pattern
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 7 + y) as u8,
            (y * 13) as u8,
            (x * y) as u8,
            if (x + y) % 2 == 0 { 0xff } else { 0x80 },
        ])
    });
    let mut png = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut png, ImageOutputFormat::Png)
        .expect("Cannot write png");
    png.into_inner()
}

/// 16 bit PCM with a saw tooth running through negative and positive values
pub fn wav_16bit(channels: u16, samples: usize) -> Vec<u8> {
    wav(channels, 16, |writer| {
        for i in 0..samples {
            writer
                .write_sample((((i * 131) % 60000) as i32 - 30000) as i16)
                .expect("Cannot write sample");
        }
    })
}

/// 8 bit PCM
pub fn wav_8bit(channels: u16, samples: usize) -> Vec<u8> {
    wav(channels, 8, |writer| {
        for i in 0..samples {
            writer
                .write_sample(((i * 3) % 256) as u8 as i8)
                .expect("Cannot write sample");
        }
    })
}

fn wav<F>(channels: u16, bits_per_sample: u16, write: F) -> Vec<u8>
where
    F: FnOnce(&mut WavWriter<&mut Cursor<Vec<u8>>>),
{
    let spec = WavSpec {
        channels,
        sample_rate: 44100,
        bits_per_sample,
        sample_format: SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec).expect("Cannot create writer");
        write(&mut writer);
        writer.finalize().expect("Cannot finalize");
    }
    cursor.into_inner()
}
