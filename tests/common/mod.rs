//! Shared test fixtures for the zodiac almanac integration tests.
//!
//! Provides an almanac built from the embedded data with a temporary
//! output directory, seeded random sources, and helpers for writing
//! override data directories.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;
use zodiac_almanac::Almanac;

/// Build an `Almanac` over the embedded data whose wallpapers land in a
/// temporary directory.
///
/// Returns `(Almanac, tempfile::TempDir)`. The caller must keep the `TempDir`
/// alive for the duration of the test.
pub fn almanac() -> (Almanac, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let almanac = Almanac::builder()
        .output_dir(tmp_dir.path())
        .build()
        .unwrap();
    (almanac, tmp_dir)
}

/// Deterministic random source.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// The embedded zodiac table as a mutable JSON value.
pub fn zodiac_json() -> serde_json::Value {
    serde_json::from_str(zodiac_almanac::config::EMBEDDED_ZODIAC).unwrap()
}

/// The embedded text pools as a mutable JSON value.
pub fn texts_json() -> serde_json::Value {
    serde_json::from_str(zodiac_almanac::config::EMBEDDED_TEXTS).unwrap()
}

/// Write `value` as `<dir>/<file_name>`.
pub fn write_json(dir: &Path, file_name: &str, value: &serde_json::Value) {
    fs::write(dir.join(file_name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}
