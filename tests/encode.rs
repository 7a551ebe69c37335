use std::io::Cursor;

use wav_encoder::inspect::data_chunk;
use wav_encoder::quantize::dequantize;
use wav_encoder::{AudioBuffer, EncodeError, encode, encode_samples};

fn u16_at(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[test]
fn header_only_file_for_every_layout() {
    for channels in [1u16, 2, 6] {
        for rate in [8000u32, 22050, 44100, 48000, 96000] {
            let bytes = encode_samples(&[], channels, rate).unwrap();
            assert_eq!(bytes.len(), 44);
            assert_eq!(u32_at(&bytes, 4), 36);
            assert_eq!(u32_at(&bytes, 16), 16);
            assert_eq!(u16_at(&bytes, 20), 1);
            assert_eq!(u16_at(&bytes, 22), channels);
            assert_eq!(u32_at(&bytes, 24), rate);
            assert_eq!(u32_at(&bytes, 28), rate * channels as u32 * 2);
            assert_eq!(u16_at(&bytes, 32), channels * 2);
            assert_eq!(u16_at(&bytes, 34), 16);
            assert_eq!(u32_at(&bytes, 40), 0);
        }
    }
}

#[test]
fn round_trip_within_one_step() {
    let samples: Vec<f32> = (0..2000)
        .map(|i| ((i as f32 * 0.37).sin() * 0.999).clamp(-1.0, 1.0))
        .chain([-1.0, 1.0, 0.0])
        .collect();
    let bytes = encode_samples(&samples, 1, 44100).unwrap();

    let data = data_chunk(&bytes).unwrap();
    let decoded: Vec<f32> = data
        .chunks_exact(2)
        .map(|b| dequantize(i16::from_le_bytes([b[0], b[1]])))
        .collect();

    assert_eq!(decoded.len(), samples.len());
    let max_err = samples
        .iter()
        .zip(&decoded)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f32, f32::max);
    // allow for f32 rounding in the check itself
    assert!(max_err <= 1.0 / 32767.0 + 1e-6, "max error {}", max_err);
}

#[test]
fn hound_reads_samples_back() {
    let buffer = AudioBuffer::new(vec![0.0, 0.5, -0.5, 1.0], 2, 32000).unwrap();
    let bytes = encode(&buffer).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    assert_eq!(reader.spec().channels, 2);
    assert_eq!(reader.spec().sample_rate, 32000);
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![0, 16383, -16383, 32767]);
}

#[test]
fn out_of_range_saturates() {
    let clamped = encode_samples(&[1.5, -2.0], 1, 44100).unwrap();
    let reference = encode_samples(&[1.0, -1.0], 1, 44100).unwrap();
    assert_eq!(data_chunk(&clamped), data_chunk(&reference));
    assert_eq!(clamped, reference);
}

#[test]
fn size_law() {
    for (len, channels) in [(0usize, 1u16), (1, 1), (2, 2), (999, 3), (4410, 2)] {
        let samples = vec![0.25f32; len];
        let bytes = encode_samples(&samples, channels, 44100).unwrap();
        assert_eq!(bytes.len(), 44 + len * 2);
    }
}

#[test]
fn sample_rate_is_little_endian() {
    let bytes = encode_samples(&[0.0, 0.1], 1, 44100).unwrap();
    assert_eq!(&bytes[24..28], &[0x44, 0xAC, 0x00, 0x00]);
}

#[test]
fn invalid_parameters() {
    let s = [0.0f32, 0.0];
    assert!(matches!(
        encode_samples(&s, 0, 44100),
        Err(EncodeError::InvalidParameter { .. })
    ));
    assert!(matches!(
        encode_samples(&s, 2, 0),
        Err(EncodeError::InvalidParameter { .. })
    ));
}

#[test]
fn header_fields_that_would_overflow_are_rejected() {
    // block align 40000 * 2 exceeds u16
    assert!(matches!(
        encode_samples(&[], 40000, 8000),
        Err(EncodeError::InvalidParameter { name: "channels", .. })
    ));
    // byte rate 3e9 * 2 * 2 exceeds u32
    assert!(matches!(
        encode_samples(&[], 2, 3_000_000_000),
        Err(EncodeError::InvalidParameter { name: "sample_rate", .. })
    ));
}

#[test]
fn malformed_buffer() {
    assert!(matches!(
        encode_samples(&[0.1, 0.2, 0.3], 2, 44100),
        Err(EncodeError::MalformedBuffer {
            samples: 3,
            channels: 2
        })
    ));
}
