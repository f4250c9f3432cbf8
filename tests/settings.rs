use explorer_verifier::Settings;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

#[test]
fn test_example_settings() {
    let example_settings =
        Settings::new(Some(PathBuf::from("config/base.toml"))).expect("Failed to parse config");
    let default_settings = Settings::default();
    assert_eq!(default_settings, example_settings);
}
