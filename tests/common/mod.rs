// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use lba_classic_audio::Title;
use lba_classic_audio::convert::ConvertConfig;
use lba_classic_audio::encode::Encoder;
use lba_hqr::{Entry, EntryMeta, HiddenEntry, Hqr, PayloadEntry};

/// Marker the stub encoder prepends to everything it "encodes".
pub const STUB_TAG: &[u8] = b"OGGS";

/// A temp workspace with a stub encoder wired into the config.
///
/// Keep the TempDir alive to prevent cleanup. `log` collects one argv line
/// per encoder invocation.
pub struct TestEnv {
    pub root: TempDir,
    pub config: ConvertConfig,
    pub log: PathBuf,
}

pub fn setup_test_env(passes: u32) -> TestEnv {
    let root = tempfile::tempdir().unwrap();
    let log = root.path().join("encoder-argv.log");
    let encoder = write_stub_encoder(root.path(), &log);
    let config = ConvertConfig {
        data_root: root.path().join("data"),
        passes,
        encoder: Encoder::new(encoder),
        scratch_dir: root.path().join("scratch"),
    };
    TestEnv { root, config, log }
}

/// Write a stub encoder honoring the real invocation contract: input named
/// by `-i`, output as the final argument, failure if the output already
/// exists. The transform strips a previous tag and prepends it again, so
/// encoding is deterministic and idempotent across passes and re-runs.
pub fn write_stub_encoder(dir: &Path, log: &Path) -> PathBuf {
    let path = dir.join("stub-encoder.sh");
    let script = format!(
        r#"#!/bin/sh
printf '%s\n' "$*" >> '{log}'
input=
output=
grab=
for arg in "$@"; do
    if [ "$grab" = 1 ]; then input=$arg; grab=; continue; fi
    if [ "$arg" = "-i" ]; then grab=1; fi
    output=$arg
done
[ -n "$input" ] || exit 2
[ -n "$output" ] || exit 2
[ ! -e "$output" ] || exit 3
if [ "$(dd if="$input" bs=4 count=1 2>/dev/null)" = "OGGS" ]; then
    {{ printf 'OGGS'; tail -c +5 "$input"; }} > "$output"
else
    {{ printf 'OGGS'; cat "$input"; }} > "$output"
fi
"#,
        log = log.display()
    );
    fs::write(&path, script).unwrap();
    make_executable(&path);
    path
}

/// Write an encoder that always fails with a message on stderr.
pub fn write_failing_encoder(dir: &Path) -> PathBuf {
    let path = dir.join("failing-encoder.sh");
    fs::write(&path, "#!/bin/sh\necho 'simulated encoder crash' >&2\nexit 1\n").unwrap();
    make_executable(&path);
    path
}

fn make_executable(path: &Path) {
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

pub fn payload(content: &[u8]) -> Entry {
    Entry::Payload(PayloadEntry::new(content.to_vec()))
}

pub fn payload_with_hidden(content: &[u8], hidden: &[&[u8]]) -> Entry {
    let mut entry = PayloadEntry::new(content.to_vec());
    for bytes in hidden {
        entry.hidden.push(HiddenEntry {
            content: bytes.to_vec(),
            meta: EntryMeta::default(),
        });
    }
    Entry::Payload(entry)
}

pub fn virtual_entry(target: usize) -> Entry {
    Entry::Virtual {
        target,
        meta: EntryMeta::default(),
    }
}

fn build_archive(entries: Vec<Entry>) -> Vec<u8> {
    let mut hqr = Hqr::new();
    for entry in entries {
        hqr.push(entry);
    }
    hqr.to_bytes().unwrap()
}

/// Drop a voice archive into the title's Vox directory.
pub fn write_voice_archive(
    config: &ConvertConfig,
    title: Title,
    name: &str,
    entries: Vec<Entry>,
) -> PathBuf {
    let dir = config.vox_dir(title);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, build_archive(entries)).unwrap();
    path
}

/// Drop a SAMPLES.HQR into the title's Common directory.
pub fn write_samples_archive(config: &ConvertConfig, title: Title, entries: Vec<Entry>) -> PathBuf {
    let path = config.samples_path(title);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, build_archive(entries)).unwrap();
    path
}

pub fn read_archive(path: &Path) -> Hqr {
    Hqr::from_bytes(&fs::read(path).unwrap()).unwrap()
}

/// One line per encoder invocation, in call order.
pub fn encoder_log(log: &Path) -> Vec<String> {
    if !log.exists() {
        return Vec::new();
    }
    fs::read_to_string(log)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// What the stub encoder produces for `raw` after the title's header
/// repair, independent of the pass count.
pub fn expected_encoded(title: Title, raw: &[u8]) -> Vec<u8> {
    let mut patched = raw.to_vec();
    title.header_repair().apply(&mut patched);
    let mut out = STUB_TAG.to_vec();
    out.extend_from_slice(&patched);
    out
}
