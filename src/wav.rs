use std::path::Path;

use hound::{SampleFormat, WavSpec};

use crate::{
    error::{Error, Result},
    pcm::{self, Pcm},
};

/// Reads a 16-bit integer or 32-bit float WAV file, keeping the interleaved
/// layout. Float samples are saturated into 16 bit.
pub fn load(p: impl AsRef<Path>) -> Result<Pcm> {
    let mut reader = hound::WavReader::open(&p)?;
    let spec = reader.spec();
    log::debug!("{}: {:?}", p.as_ref().display(), spec);

    let samples = match spec {
        WavSpec {
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
            ..
        } => reader
            .samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        WavSpec {
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
            ..
        } => {
            let buf = reader
                .samples::<f32>()
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let quantized = pcm::quantize(&buf);
            if quantized.clipped > 0 {
                log::warn!(
                    "{}: {} float samples outside [-1, 1) were clipped",
                    p.as_ref().display(),
                    quantized.clipped
                );
            }
            quantized.samples
        }
        _ => {
            return Err(Error::InvalidInput(format!(
                "unsupported WAV format: {}-bit {:?}",
                spec.bits_per_sample, spec.sample_format
            )))
        }
    };

    Ok(Pcm::new(spec.sample_rate, spec.channels, samples))
}

/// Writes `pcm` as 16-bit integer WAV.
pub fn save(p: impl AsRef<Path>, pcm: &Pcm) -> Result<()> {
    let spec = WavSpec {
        channels: pcm.channels,
        sample_rate: pcm.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(p, spec)?;
    for &x in pcm.samples.iter() {
        writer.write_sample(x)?;
    }
    writer.finalize()?;
    Ok(())
}
