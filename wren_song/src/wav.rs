// Mono 16-bit PCM output via `hound`.
//
// The toolkit never synthesizes samples itself; this writer exists for
// pipelines that already hold a sample buffer (an image trace mapped into
// sample range, for instance) and want it on disk as a .wav.

use crate::RenderError;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;
use tracing::debug;

/// Write `samples` as a mono 16-bit PCM file at `sample_rate` Hz.
pub fn write_samples(samples: &[i16], sample_rate: u32, path: &Path) -> Result<(), RenderError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    debug!(samples = samples.len(), sample_rate, ?path, "wrote wav");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::WavReader;

    #[test]
    fn samples_round_trip_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let samples: Vec<i16> = vec![0, 1000, -1000, i16::MAX, i16::MIN];

        write_samples(&samples, 44_100, &path).unwrap();

        let mut reader = WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.bits_per_sample, 16);

        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }
}
