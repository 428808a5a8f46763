use std::io::{Result, Write};

use crate::media::{HideBit, MediaPrimitiveMut};
use crate::BitIterator;

/// generic stegano encoder, hides every bit written into the next carrier unit
///
/// Bits are taken most significant first per byte. When the carrier runs out of units
/// the write ends short, `write_all` turns that into an `ErrorKind::WriteZero`.
pub struct UniversalEncoder<'a, I>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
{
    carrier: I,
}

impl<'a, I> UniversalEncoder<'a, I>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
{
    pub fn new(carrier: I) -> Self {
        Self { carrier }
    }
}

impl<'a, I> Write for UniversalEncoder<'a, I>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut bits_written = 0;
        // bits first, so no unit is consumed once the buffer is exhausted
        for (bit, unit) in BitIterator::new(buf).zip(self.carrier.by_ref()) {
            unit.hide_bit(bit);
            bits_written += 1;
        }

        Ok(bits_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
