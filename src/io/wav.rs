use std::io::{Cursor, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{Result, SynthError};
use crate::signal::PcmBuffer;

fn mono_16bit(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

fn write_samples<W: Write + Seek>(mut writer: WavWriter<W>, pcm: &PcmBuffer) -> Result<()> {
    for &sample in pcm.iter() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Write mono 16-bit PCM to a RIFF/WAVE file at `path`.
pub fn write_wav(path: impl AsRef<Path>, pcm: &PcmBuffer, sample_rate: u32) -> Result<()> {
    let writer = WavWriter::create(path, mono_16bit(sample_rate))?;
    write_samples(writer, pcm)
}

/// Encode mono 16-bit PCM as an in-memory WAV file.
pub fn encode_wav(pcm: &PcmBuffer, sample_rate: u32) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(44 + pcm.len() * 2);
    let writer = WavWriter::new(Cursor::new(&mut bytes), mono_16bit(sample_rate))?;
    write_samples(writer, pcm)?;
    Ok(bytes)
}

/// Read a mono 16-bit WAV file back, returning its samples and sample rate.
pub fn read_wav(path: impl AsRef<Path>) -> Result<(PcmBuffer, u32)> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    if spec.channels != 1 || spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int
    {
        return Err(SynthError::Wav(hound::Error::Unsupported));
    }
    let pcm = reader
        .into_samples::<i16>()
        .collect::<std::result::Result<PcmBuffer, _>>()?;
    Ok((pcm, spec.sample_rate))
}
