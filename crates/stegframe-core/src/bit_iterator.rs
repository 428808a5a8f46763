use bitstream_io::{BigEndian, BitRead, BitReader};

/// Iterates over the bits of a byte slice, most significant bit of every byte first.
///
/// This is the bit order of the hidden container on every carrier.
pub struct BitIterator<'a> {
    reader: BitReader<&'a [u8], BigEndian>,
}

impl<'a> BitIterator<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            reader: BitReader::endian(bytes, BigEndian),
        }
    }
}

impl Iterator for BitIterator<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_bit().ok()
    }
}

/// number of carrier units needed to store `bytes` with one bit per unit
pub fn bits_needed(bytes: usize) -> usize {
    bytes * 8
}
