//! Settings and history files.

use std::fs;

use devsuite_byteconv::config::DEFAULT_HISTORY_LIMIT;
use devsuite_byteconv::{ByteConverter, ConverterConfig, History, HistoryEntry, HexCase, Settings};

#[test]
fn missing_settings_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("nope.json")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn corrupt_settings_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{not json").unwrap();
    assert_eq!(Settings::load(&path).unwrap(), Settings::default());
}

#[test]
fn settings_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = Settings {
        hex_upper_case: false,
        history_limit: 5,
    };
    settings.save(&path).unwrap();
    assert_eq!(Settings::load(&path).unwrap(), settings);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"hexUpperCase\": false"));
}

#[test]
fn browser_settings_document_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{"defaultTool":"numberBase","compactMode":false,"autoCopy":true,"hexUpperCase":false,"jsonIndent":2}"#,
    )
    .unwrap();
    let settings = Settings::load(&path).unwrap();
    assert!(!settings.hex_upper_case);
    assert_eq!(settings.history_limit, DEFAULT_HISTORY_LIMIT);

    let mut conv = ByteConverter::new(ConverterConfig::from(&settings));
    conv.edit_decimal("171").unwrap();
    assert_eq!(conv.views().hex_num, "ab");
    assert_eq!(conv.config().hex_case, HexCase::Lower);
}

#[test]
fn history_persists_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut conv = ByteConverter::default();
    let mut history = History::load(&path, 2).unwrap();
    assert!(history.is_empty());

    for text in ["a", "b", "c"] {
        conv.edit_text(text);
        history.add(conv.save_snapshot().unwrap());
    }
    history.save(&path).unwrap();

    let reloaded = History::load(&path, 2).unwrap();
    assert_eq!(reloaded, history);
    let inputs: Vec<_> = reloaded.items().iter().map(|i| i.entry.input.as_str()).collect();
    assert_eq!(inputs, ["c", "b"]);
    assert!(reloaded.items()[0].timestamp >= reloaded.items()[1].timestamp);
    assert_ne!(reloaded.items()[0].id, reloaded.items()[1].id);
}

#[test]
fn load_applies_smaller_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut history = History::new(10);
    for n in 0..6 {
        history.add(HistoryEntry::new("t", "d", n.to_string(), "o"));
    }
    history.save(&path).unwrap();
    assert_eq!(History::load(&path, 3).unwrap().len(), 3);
}

#[test]
fn corrupt_history_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, "[{]").unwrap();
    let history = History::load(&path, 50).unwrap();
    assert!(history.is_empty());
    assert_eq!(history.limit(), 50);
}

#[test]
fn browser_history_document_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(
        &path,
        r#"[{"id":"1b4e28ba-2fa1-11d2-883f-0016d3cca427","timestamp":1700000000000,"tool":"Number Base","details":"Numeric","input":"Dec: 10","output":"Dec: 10 | Hex: A | Bin: 1010"}]"#,
    )
    .unwrap();
    let history = History::load(&path, 50).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history.items()[0].entry.output, "Dec: 10 | Hex: A | Bin: 1010");
    assert_eq!(history.items()[0].timestamp, 1_700_000_000_000);
}
