//! Reference data loading and validation tests.

mod common;

use std::fs;
use zodiac_almanac::{Almanac, AlmanacError, Catalog};

#[test]
fn embedded_catalog_is_valid() {
    let catalog = Catalog::embedded().unwrap();
    assert_eq!(catalog.signs().len(), 12);
    assert!(catalog.sticks().len() >= 10);
    assert!(catalog.data_dir.is_none());
    catalog.validate().unwrap();
}

#[test]
fn data_dir_overrides_single_documents() {
    let tmp = tempfile::tempdir().unwrap();
    let mut zodiac = common::zodiac_json();
    zodiac[4]["rulingPlanet"] = serde_json::json!("Sol");
    common::write_json(tmp.path(), "zodiac.json", &zodiac);

    let almanac = Almanac::builder().data_dir(tmp.path()).build().unwrap();
    assert_eq!(almanac.signs().get("leo").unwrap().ruling_planet, "Sol");
    // sticks.json and texts.json fall back to the embedded copies
    assert!(!almanac.sticks().pool().is_empty());
    assert!(almanac.to_string().contains(&tmp.path().display().to_string()));
}

#[test]
fn gap_in_ranges_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut zodiac = common::zodiac_json();
    // aries ends a day early, leaving 04-19 uncovered
    zodiac[0]["endDay"] = serde_json::json!(18);
    common::write_json(tmp.path(), "zodiac.json", &zodiac);

    let err = Catalog::load(Some(tmp.path().to_path_buf())).err().unwrap();
    match err {
        AlmanacError::InvalidData(msg) => assert!(msg.contains("04-19"), "{}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn overlapping_ranges_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut zodiac = common::zodiac_json();
    zodiac[0]["endDay"] = serde_json::json!(20);
    common::write_json(tmp.path(), "zodiac.json", &zodiac);

    let err = Catalog::load(Some(tmp.path().to_path_buf())).err().unwrap();
    assert!(matches!(err, AlmanacError::InvalidData(_)));
}

#[test]
fn missing_sign_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut zodiac = common::zodiac_json();
    zodiac.as_array_mut().unwrap().pop();
    common::write_json(tmp.path(), "zodiac.json", &zodiac);

    let err = Catalog::load(Some(tmp.path().to_path_buf())).err().unwrap();
    assert!(matches!(err, AlmanacError::InvalidData(_)));
}

#[test]
fn empty_text_pool_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut texts = common::texts_json();
    texts["fortune"]["directions"] = serde_json::json!([]);
    common::write_json(tmp.path(), "texts.json", &texts);

    let err = Catalog::load(Some(tmp.path().to_path_buf())).err().unwrap();
    assert!(matches!(err, AlmanacError::InvalidData(_)));
}

/// Load the embedded texts after `edit` and return the validation message.
fn texts_error(edit: impl FnOnce(&mut serde_json::Value)) -> String {
    let tmp = tempfile::tempdir().unwrap();
    let mut texts = common::texts_json();
    edit(&mut texts);
    common::write_json(tmp.path(), "texts.json", &texts);

    match Catalog::load(Some(tmp.path().to_path_buf())).err().unwrap() {
        AlmanacError::InvalidData(msg) => msg,
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn missing_compatibility_description_is_rejected() {
    let msg = texts_error(|texts| {
        let descriptions = texts["compatibility"]["descriptions"].as_object_mut().unwrap();
        descriptions.remove("poor");
    });
    assert!(msg.contains("Poor"), "{}", msg);
}

#[test]
fn short_bond_pool_is_rejected() {
    let msg = texts_error(|texts| {
        texts["compatibility"]["bonds"]["opposing"] = serde_json::json!(["only one"]);
    });
    assert!(msg.contains("bonds") && msg.contains("opposing"), "{}", msg);
}

#[test]
fn short_conflict_pool_is_rejected() {
    let msg = texts_error(|texts| {
        texts["compatibility"]["conflicts"]["same"] = serde_json::json!(["only one"]);
    });
    assert!(msg.contains("conflicts") && msg.contains("same"), "{}", msg);
}

#[test]
fn short_advice_pool_is_rejected() {
    let msg = texts_error(|texts| {
        texts["compatibility"]["advice"]["neutral"] = serde_json::json!(["only one"]);
    });
    assert!(msg.contains("advice") && msg.contains("neutral"), "{}", msg);
}

#[test]
fn duplicate_stick_ids_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let sticks: serde_json::Value =
        serde_json::from_str(zodiac_almanac::config::EMBEDDED_STICKS).unwrap();
    let first = sticks[0].clone();
    common::write_json(tmp.path(), "sticks.json", &serde_json::json!([first.clone(), first]));

    let err = Catalog::load(Some(tmp.path().to_path_buf())).err().unwrap();
    assert!(matches!(err, AlmanacError::InvalidData(_)));
}

#[test]
fn malformed_json_is_a_json_error() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("sticks.json"), "[{").unwrap();

    let err = Catalog::load(Some(tmp.path().to_path_buf())).err().unwrap();
    assert!(matches!(err, AlmanacError::Json(_)));
}
