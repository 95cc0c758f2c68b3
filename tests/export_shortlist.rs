use std::fs;

use champgen_terminal::export::{export_shortlist_with_progress, ExportFormat};
use champgen_terminal::roster::seed_players;

#[test]
fn json_export_writes_one_entry_per_player() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shortlist.json");
    let players = seed_players();

    let report =
        export_shortlist_with_progress(&path, ExportFormat::Json, &players, |_| {}).unwrap();
    assert_eq!(report.players, players.len());
    assert!(report.errors.is_empty());

    let raw = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), players.len());

    let first = &entries[0];
    assert_eq!(first["name"], "Jude Bellingham");
    assert_eq!(first["position"], "Midfielder");
    assert_eq!(first["club"], "Real Madrid");
    assert_eq!(first["age"], 21);
    assert_eq!(first["current_value"], 180_000_000u64);
    assert_eq!(first["predicted_value"], 220_000_000u64);
    assert_eq!(first["market_status"], "UNDERVALUED");
    assert_eq!(first["risk_level"], "LOW RISK");
    assert_eq!(first["similarity"], 88);
}

#[test]
fn json_export_preserves_shortlist_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shortlist.json");
    let players = seed_players();

    export_shortlist_with_progress(&path, ExportFormat::Json, &players, |_| {}).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn progress_callback_walks_every_player() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shortlist.json");
    let players = seed_players();

    let mut seen = Vec::new();
    export_shortlist_with_progress(&path, ExportFormat::Json, &players, |progress| {
        seen.push((progress.current, progress.message.clone()));
    })
    .unwrap();

    // Initial "preparing" call plus one per player, counts monotonic.
    assert_eq!(seen.len(), players.len() + 1);
    assert_eq!(seen[0].0, 0);
    assert_eq!(seen.last().unwrap().0, players.len());
    assert!(seen.windows(2).all(|pair| pair[0].0 <= pair[1].0));
    assert!(seen[1].1.contains("Jude Bellingham"));
}

#[test]
fn xlsx_export_produces_a_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shortlist.xlsx");
    let players = seed_players();

    let report =
        export_shortlist_with_progress(&path, ExportFormat::Xlsx, &players, |_| {}).unwrap();
    assert_eq!(report.players, players.len());

    let metadata = fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn empty_shortlist_exports_an_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shortlist.json");

    let report = export_shortlist_with_progress(&path, ExportFormat::Json, &[], |_| {}).unwrap();
    assert_eq!(report.players, 0);

    let raw = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(parsed.as_array().unwrap().is_empty());
}
