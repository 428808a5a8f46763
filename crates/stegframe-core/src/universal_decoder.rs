use std::io::{Read, Result};

use crate::media::{MediaPrimitive, UnveilBit};

/// generic stegano decoder, collects the lowest bit of every carrier unit
///
/// Bits are packed most significant first into bytes, a trailing incomplete byte is dropped.
pub struct UniversalDecoder<I>
where
    I: Iterator<Item = MediaPrimitive>,
{
    carrier: I,
}

impl<I> UniversalDecoder<I>
where
    I: Iterator<Item = MediaPrimitive>,
{
    pub fn new(carrier: I) -> Self {
        Self { carrier }
    }
}

impl<I> Read for UniversalDecoder<I>
where
    I: Iterator<Item = MediaPrimitive>,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        for (i, byte) in buf.iter_mut().enumerate() {
            let mut value = 0u8;
            for n in 0..8 {
                match self.carrier.next() {
                    Some(unit) => value = (value << 1) | u8::from(unit.unveil_bit()),
                    None => {
                        if n > 0 {
                            log::debug!("dropping {n} trailing bits that do not form a byte");
                        }
                        return Ok(i);
                    }
                }
            }
            *byte = value;
        }

        Ok(buf.len())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::media::MediaPrimitiveMut;
    use crate::UniversalEncoder;

    #[test]
    fn should_hide_most_significant_bit_first() {
        let mut carrier = [0u8; 8];
        UniversalEncoder::new(carrier.iter_mut().map(MediaPrimitiveMut::ImageColorChannel))
            .write_all(&[0b1000_0001])
            .expect("Cannot write to carrier");

        assert_eq!(carrier, [1, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn should_round_trip_and_drop_incomplete_bytes() {
        let mut carrier = [0xaa_u8; 20];
        UniversalEncoder::new(carrier.iter_mut().map(MediaPrimitiveMut::ImageColorChannel))
            .write_all(b"He")
            .expect("Cannot write to carrier");

        let mut unveiled = Vec::new();
        UniversalDecoder::new(carrier.iter().copied().map(MediaPrimitive::ImageColorChannel))
            .read_to_end(&mut unveiled)
            .expect("Cannot read from carrier");

        // 20 units hold two complete bytes, the last 4 bits are dropped
        assert_eq!(unveiled, b"He");
        assert_eq!(&carrier[16..], &[0xaa; 4]);
    }

    #[test]
    fn should_fail_writing_beyond_the_carrier() {
        let mut carrier = [0u8; 12];
        let result = UniversalEncoder::new(
            carrier.iter_mut().map(MediaPrimitiveMut::ImageColorChannel),
        )
        .write_all(b"He");

        assert_eq!(
            result.expect_err("carrier is too small").kind(),
            std::io::ErrorKind::WriteZero
        );
    }
}
