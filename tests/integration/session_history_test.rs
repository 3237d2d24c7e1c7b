//! Session and history integration tests
//!
//! These tests cover the per-session lifecycle and the export path a hosting
//! UI uses to offer history for display or download.

use super::{init_test_env, seeded_humanizer};
use tempfile::TempDir;
use text_humanizer::history::{append_jsonl, format_stats, load_jsonl};
use text_humanizer::{Intensity, SessionStore, TransformationRecord};

#[test]
fn test_history_grows_with_non_empty_calls() {
    let mut humanizer = seeded_humanizer(1);
    let inputs = ["First draft.", "", "Second draft!", "", "Third, final draft?"];

    let mut expected = 0;
    for input in inputs {
        humanizer.humanize(input, "Professional", Intensity::default());
        if !input.is_empty() {
            expected += 1;
        }
        assert_eq!(humanizer.history().len(), expected);
    }

    let non_empty: Vec<&str> = inputs.iter().copied().filter(|i| !i.is_empty()).collect();
    for (record, input) in humanizer.history().iter().zip(non_empty) {
        assert_eq!(record.original_length, input.chars().count());
    }
}

#[test]
fn test_record_reflects_output() {
    let mut humanizer = seeded_humanizer(2);
    let output = humanizer.humanize("Moreover, the plan works.", "Technical", Intensity::new(8).unwrap());
    let record = humanizer.history().last().unwrap();

    assert_eq!(record.humanized_length, output.chars().count());
    assert_eq!(record.intensity, 8);
    assert_eq!(record.style, "Technical");
}

#[test]
fn test_export_and_reload_session_history() {
    init_test_env();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("exports").join("history.jsonl");

    let mut store = SessionStore::new();
    let session = store.create_session();
    for intensity in [2, 5, 9] {
        store.humanizer(&session).humanize(
            "AI improves efficiency. However, it has risks.",
            "Casual",
            Intensity::new(intensity).unwrap(),
        );
    }

    let history = store.end_session(&session).unwrap();
    assert_eq!(append_jsonl(&history, &path).unwrap(), 3);

    let reloaded = load_jsonl(&path).unwrap();
    assert_eq!(reloaded, history);

    let intensities: Vec<u8> = reloaded.iter().map(|r| r.intensity).collect();
    assert_eq!(intensities, vec![2, 5, 9]);
}

#[test]
fn test_json_export_is_structured() {
    let mut humanizer = seeded_humanizer(3);
    humanizer.humanize("One. Two. Three.", "Professional", Intensity::default());

    let json = humanizer.history().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &value[0];

    assert!(first["id"].is_string());
    assert!(first["timestamp"].is_string());
    assert_eq!(first["originalLength"], 16);
    assert_eq!(first["style"], "Professional");
    assert_eq!(first["intensity"], 5);
    assert_eq!(first["operations"].as_array().unwrap().len(), 3);

    let parsed: Vec<TransformationRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 1);
}

#[test]
fn test_stats_match_records() {
    let mut humanizer = seeded_humanizer(4);
    for intensity in 1..=10 {
        humanizer.humanize(
            "Furthermore, this works well. Nevertheless, check it!!",
            "Casual",
            Intensity::new(intensity).unwrap(),
        );
    }

    let history = humanizer.history();
    let stats = history.stats();
    let applied: usize = history.iter().map(|r| r.operations.len()).sum();

    assert_eq!(stats.total, 10);
    assert_eq!(stats.total_operations(), applied);
    assert_eq!(stats.intensity_distribution.len(), 10);
    assert_eq!(stats.style_counts["Casual"], 10);
    assert!(format_stats(&stats).starts_with("Calls: 10 | "));
}

#[test]
fn test_sessions_do_not_share_history() {
    init_test_env();
    let mut store = SessionStore::new();
    let first = store.create_session();
    let second = store.create_session();

    store
        .humanizer(&first)
        .humanize("Shared input.", "Professional", Intensity::default());

    assert_eq!(store.humanizer(&second).history().len(), 0);
    assert_eq!(store.get(&first).unwrap().history().len(), 1);
    assert_eq!(store.len(), 2);
}
