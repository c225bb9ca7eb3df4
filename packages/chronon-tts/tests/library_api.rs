//! Integration tests for the chronon-tts library API

#[test]
fn test_prelude_imports() {
    use chronon_tts::prelude::*;

    let chunks = chunk_text("One.\nTwo.", &ChunkerConfig::default());
    assert_eq!(chunks.len(), 2);

    let request = SynthesisRequest::default();
    assert_eq!(request.voice, "af_heart");
    assert_eq!(SAMPLE_RATE, 24_000);
}

#[test]
fn test_assemble_from_plain_iterator() {
    use chronon_tts::{assemble, SynthesizedChunk};

    let stream = [vec![0.25f32], vec![-0.25, 0.0]]
        .into_iter()
        .enumerate()
        .map(|(i, samples)| {
            Ok::<_, chronon_tts::TtsError>(SynthesizedChunk {
                graphemes: format!("chunk {i}"),
                phonemes: Some("t@st".into()),
                audio: samples.into(),
            })
        });

    let audio = assemble(stream, |_, _| {}).unwrap().unwrap();
    assert_eq!(audio.samples, vec![0.25, -0.25, 0.0]);
}

#[test]
fn test_pcm_decoding_is_public() {
    let samples = chronon_tts::decode_pcm16(&[0x00, 0xC0]).unwrap();
    assert_eq!(samples, vec![-0.5]);
}
