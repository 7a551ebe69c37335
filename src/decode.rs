//! Audio file → interleaved PCM (symphonia)

use std::path::Path;

use log::{debug, warn};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::default::{get_codecs, get_probe};

use crate::buffer::AudioBuffer;
use crate::error::{EncodeError, Result};

/// Decode the first audio track of a file, keeping its channel layout.
pub fn decode_file(path: &Path) -> Result<AudioBuffer> {
    let src = std::fs::File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let mut probe_result = get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| EncodeError::decode(format!("format probe error: {}", e)))?;

    let track = probe_result
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| EncodeError::decode("no audio track found"))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let mut decoder = get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| EncodeError::decode(format!("decoder creation error: {}", e)))?;

    let sample_rate = codec_params
        .sample_rate
        .ok_or_else(|| EncodeError::decode("missing sample rate"))?;
    let mut channels = codec_params.channels.map(|c| c.count() as u16);
    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match probe_result.format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(e) => return Err(EncodeError::decode(e.to_string())),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(e) => {
                warn!("skipping undecodable packet at ts {}: {}", packet.ts(), e);
                continue;
            }
        };

        let spec = *decoded.spec();
        channels.get_or_insert(spec.channels.count() as u16);
        let mut sample_buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        sample_buffer.copy_interleaved_ref(decoded);
        samples.extend_from_slice(sample_buffer.samples());
    }

    let channels = channels.ok_or_else(|| EncodeError::decode("missing channel count"))?;
    debug!(
        "decoded {:?}: {} samples, {} ch @ {} Hz",
        path,
        samples.len(),
        channels,
        sample_rate
    );
    AudioBuffer::new(samples, channels, sample_rate)
}
