// tests/encode_protocol.rs

//! Tests for the per-pass encoder protocol.

mod common;

use std::fs;

use common::*;
use lba_classic_audio::Error;
use lba_classic_audio::encode::Encoder;

#[test]
fn test_single_pass_encodes_fresh_input() {
    let env = setup_test_env(1);
    let dir = env.root.path();
    let input = dir.join("clip.wav");
    let output = dir.join("clip.ogg");
    fs::write(&input, b"raw audio").unwrap();

    let encoded = env.config.encoder.transcode(&input, &output, None, 1).unwrap();

    assert_eq!(encoded, b"OGGSraw audio");
    // the encoder leaves both files for the caller
    assert!(input.exists());
    assert_eq!(fs::read(&output).unwrap(), encoded);
}

#[test]
fn test_later_passes_reencode_previous_output_via_backup() {
    let env = setup_test_env(3);
    let dir = env.root.path();
    let input = dir.join("clip.wav");
    let output = dir.join("clip.ogg");
    fs::write(&input, b"raw audio").unwrap();

    let encoded = env.config.encoder.transcode(&input, &output, None, 3).unwrap();

    let lines = encoder_log(&env.log);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(&format!("-i {}", input.display())));
    let backup = dir.join("clip.ogg.bak");
    for line in &lines[1..] {
        assert!(line.contains(&format!("-i {}", backup.display())));
    }
    // repeated passes settle on the same bytes and drop their backup
    assert_eq!(encoded, b"OGGSraw audio");
    assert!(!backup.exists());
}

#[test]
fn test_existing_output_is_reencoded_not_replaced() {
    let env = setup_test_env(1);
    let dir = env.root.path();
    let input = dir.join("clip.wav");
    let output = dir.join("clip.ogg");
    fs::write(&input, b"fresh input").unwrap();
    fs::write(&output, b"OGGSprevious run").unwrap();

    let encoded = env.config.encoder.transcode(&input, &output, None, 1).unwrap();

    // the pass read the backup of the old output, not the fresh input
    assert_eq!(encoded, b"OGGSprevious run");
    let lines = encoder_log(&env.log);
    assert!(lines[0].contains(&format!("-i {}", dir.join("clip.ogg.bak").display())));
}

#[test]
fn test_bitrate_flag_only_when_requested() {
    let env = setup_test_env(1);
    let dir = env.root.path();
    let input = dir.join("clip.wav");
    fs::write(&input, b"raw").unwrap();

    let with = dir.join("with.ogg");
    env.config
        .encoder
        .transcode(&input, &with, Some(32), 1)
        .unwrap();
    let without = dir.join("without.ogg");
    env.config
        .encoder
        .transcode(&input, &without, None, 1)
        .unwrap();

    let lines = encoder_log(&env.log);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("-b:a 32k"));
    assert!(!lines[1].contains("-b:a"));
}

#[test]
fn test_failure_reports_output_path_and_stderr() {
    let env = setup_test_env(1);
    let dir = env.root.path();
    let encoder = Encoder::new(write_failing_encoder(dir));
    let input = dir.join("clip.wav");
    let output = dir.join("clip.ogg");
    fs::write(&input, b"raw").unwrap();

    let err = encoder.transcode(&input, &output, None, 1).unwrap_err();
    assert!(matches!(err, Error::Transcode { .. }));
    let message = err.to_string();
    assert!(message.contains("clip.ogg"), "got: {message}");
    assert!(message.contains("simulated encoder crash"), "got: {message}");
}

#[test]
fn test_missing_encoder_binary_is_a_launch_error() {
    let env = setup_test_env(1);
    let dir = env.root.path();
    let encoder = Encoder::new(dir.join("no-such-binary"));
    let input = dir.join("clip.wav");
    fs::write(&input, b"raw").unwrap();

    let err = encoder
        .transcode(&input, &dir.join("clip.ogg"), None, 1)
        .unwrap_err();
    assert!(matches!(err, Error::EncoderLaunch { .. }));
}
