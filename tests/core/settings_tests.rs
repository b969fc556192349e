//! Tests for user settings persistence
//!
//! Tests cover:
//! - Default settings values
//! - Serialization/deserialization
//! - Loading from missing or malformed files
//! - Save/load roundtrip

use signal_monitor::settings::UserSettings;
use signal_monitor::state::FontScale;

// ============================================
// Default Settings Tests
// ============================================

#[test]
fn test_settings_default_values() {
    let settings = UserSettings::default();
    assert_eq!(settings.version, 1);
    assert_eq!(settings.font_scale, FontScale::Medium);
    assert!(settings.dark_mode);
    assert_eq!(settings.window_size, [1200.0, 800.0]);
}

#[test]
fn test_settings_path_ends_with_file_name() {
    if let Some(path) = UserSettings::get_settings_path() {
        assert!(path.ends_with("signal-monitor/settings.json"));
    }
}

// ============================================
// Serialization Tests
// ============================================

#[test]
fn test_settings_missing_fields_use_defaults() {
    let settings: UserSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, UserSettings::default());
}

#[test]
fn test_settings_partial_json() {
    let json = r#"{"version": 1, "font_scale": "Large"}"#;
    let settings: UserSettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.font_scale, FontScale::Large);
    assert!(settings.dark_mode, "Missing dark_mode should default to true");
}

// ============================================
// File Tests
// ============================================

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = UserSettings::load_from(&dir.path().join("settings.json"));
    assert_eq!(settings, UserSettings::default());
}

#[test]
fn test_load_malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json").unwrap();
    assert_eq!(UserSettings::load_from(&path), UserSettings::default());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = UserSettings {
        font_scale: FontScale::Small,
        dark_mode: false,
        window_size: [1024.0, 700.0],
        ..UserSettings::default()
    };
    settings.save_to(&path).unwrap();

    assert!(path.exists(), "Save should create missing directories");
    assert_eq!(UserSettings::load_from(&path), settings);
}
