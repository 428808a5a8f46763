/// wrap the low level data types that carries information
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum MediaPrimitive {
    ImageColorChannel(u8),
    AudioSample(i16),
    AudioSampleUnsigned(u8),
}

impl From<u8> for MediaPrimitive {
    fn from(value: u8) -> Self {
        MediaPrimitive::ImageColorChannel(value)
    }
}

impl From<i16> for MediaPrimitive {
    fn from(value: i16) -> Self {
        MediaPrimitive::AudioSample(value)
    }
}

/// mutable primitive for storing stegano data
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    ImageColorChannel(&'a mut u8),
    AudioSample(&'a mut i16),
    AudioSampleUnsigned(&'a mut u8),
}

/// replaces the least significant bit, all higher bits stay as they are
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

/// reads the least significant bit
pub trait UnveilBit {
    fn unveil_bit(&self) -> bool;
}

impl HideBit for MediaPrimitiveMut<'_> {
    fn hide_bit(self, bit: bool) {
        match self {
            MediaPrimitiveMut::ImageColorChannel(c) | MediaPrimitiveMut::AudioSampleUnsigned(c) => {
                *c = (*c & !1) | u8::from(bit);
            }
            MediaPrimitiveMut::AudioSample(s) => {
                *s = (*s & !1) | i16::from(bit);
            }
        }
    }
}

impl UnveilBit for MediaPrimitive {
    fn unveil_bit(&self) -> bool {
        match self {
            MediaPrimitive::ImageColorChannel(c) | MediaPrimitive::AudioSampleUnsigned(c) => {
                c & 1 == 1
            }
            MediaPrimitive::AudioSample(s) => s & 1 == 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_only_touch_the_lowest_bit_of_a_color() {
        let mut color: u8 = 0b1010_1010;
        MediaPrimitiveMut::ImageColorChannel(&mut color).hide_bit(true);
        assert_eq!(color, 0b1010_1011);

        MediaPrimitiveMut::ImageColorChannel(&mut color).hide_bit(false);
        assert_eq!(color, 0b1010_1010);
    }

    #[test]
    fn should_keep_the_sign_of_negative_samples() {
        let mut sample: i16 = -32768;
        MediaPrimitiveMut::AudioSample(&mut sample).hide_bit(true);
        assert_eq!(sample, -32767);

        let mut sample: i16 = -1;
        MediaPrimitiveMut::AudioSample(&mut sample).hide_bit(false);
        assert_eq!(sample, -2);
        assert!(!MediaPrimitive::AudioSample(sample).unveil_bit());
    }

    #[test]
    fn should_unveil_what_was_hidden() {
        for value in [0u8, 1, 127, 128, 254, 255] {
            for bit in [true, false] {
                let mut v = value;
                MediaPrimitiveMut::AudioSampleUnsigned(&mut v).hide_bit(bit);
                assert_eq!(MediaPrimitive::AudioSampleUnsigned(v).unveil_bit(), bit);
                assert_eq!(v >> 1, value >> 1);
            }
        }
    }
}
