mod lsb_codec;
mod wav;
mod wav_iter;

pub use lsb_codec::{AudioCarrier, LsbCodec};
pub use wav::{
    write_canonical, SampleFormat, WavFormat, WavLayout, CANONICAL_HEADER_LEN, FORMAT_EXTENSIBLE,
    FORMAT_PCM, RIFF, WAVE,
};
pub use wav_iter::{AudioWavIter, AudioWavIterMut, PcmSamples};
