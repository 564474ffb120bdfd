use todocards::config::Config;
use todocards::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert!(config.ui.autofocus_input);
    assert!(!config.ui.enter_multiple_default);
    assert_eq!(config.ui.exit_animation_frames, 3);
    assert_eq!(config.display.icon_theme, IconTheme::Ascii);
    assert_eq!(config.display.date_format, "%Y-%m-%d %H:%M");
    assert!(!config.logging.enabled);
    assert_eq!(config.identity.provider, "memory");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Animation frames out of range should fail
    config.ui.exit_animation_frames = 0;
    assert!(config.validate().is_err());
    config.ui.exit_animation_frames = 31;
    assert!(config.validate().is_err());

    // Reset and test an unknown provider
    config.ui.exit_animation_frames = 3;
    config.identity.provider = "firebase".to_string();
    assert!(config.validate().is_err());

    // Malformed credentials
    config.identity.provider = "memory".to_string();
    config.identity.credentials = "{oops".to_string();
    assert!(config.validate().is_err());

    config.identity.credentials = String::new();
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_date_format_rejected() {
    let mut config = Config::default();
    config.display.date_format = "%Y-%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("exit_animation_frames = 3"));
    assert!(toml_str.contains("icon_theme = \"ascii\""));
    assert!(toml_str.contains("provider = \"memory\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
enter_multiple_default = true

[display]
icon_theme = "unicode"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert!(config.ui.enter_multiple_default);
    assert_eq!(config.display.icon_theme, IconTheme::Unicode);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.exit_animation_frames, 3);
    assert!(!config.display.show_dates);
    assert_eq!(config.identity.provider, "memory");
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.exit_animation_frames, default_config.ui.exit_animation_frames);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.date_format, default_config.display.date_format);
    assert_eq!(config.identity.credentials, default_config.identity.credentials);
}

#[test]
fn test_load_from_file_validates() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("todocards_test_load");
    fs::create_dir_all(&temp_dir).unwrap();

    let good = temp_dir.join("good.toml");
    fs::write(&good, "[ui]\nexit_animation_frames = 5\n").unwrap();
    let config = Config::load_from_file(&good).unwrap();
    assert_eq!(config.ui.exit_animation_frames, 5);

    let bad = temp_dir.join("bad.toml");
    fs::write(&bad, "[ui]\nexit_animation_frames = 99\n").unwrap();
    assert!(Config::load_from_file(&bad).is_err());

    assert!(Config::load_from_file(temp_dir.join("missing.toml")).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("todocards_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# todocards Configuration File"));
    assert!(content.contains("exit_animation_frames = 3"));
    assert!(Config::load_from_file(&config_path).is_ok());

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
