//! Integration test: recorder configuration
//!
//! Run with: cargo test -p vkrecord-core --test config_test

use ash::vk;
use vkrecord_core::*;

#[test]
fn test_empty_config_uses_defaults() {
    let config = RecorderConfig::from_toml("").unwrap();
    assert!(!config.recording.trace_commands);
    assert_eq!(config.recording.contention_warn_ms, 50);
    assert_eq!(config.recording.default_usage, UsageMode::OneTimeSubmit);
}

#[test]
fn test_recording_section() {
    let config = RecorderConfig::from_toml(
        r#"
        [recording]
        trace_commands = true
        contention_warn_ms = 5
        default_usage = "render_pass_continue"
        "#,
    )
    .unwrap();
    assert!(config.recording.trace_commands);
    assert_eq!(config.recording.contention_warn_ms, 5);
    assert_eq!(
        config.recording.default_usage.flags(),
        vk::CommandBufferUsageFlags::RENDER_PASS_CONTINUE
    );
}

#[test]
fn test_usage_flags() {
    assert!(UsageMode::None.flags().is_empty());
    assert_eq!(
        UsageMode::OneTimeSubmit.flags(),
        vk::CommandBufferUsageFlags::ONE_TIME_SUBMIT
    );
    assert_eq!(
        UsageMode::SimultaneousUse.flags(),
        vk::CommandBufferUsageFlags::SIMULTANEOUS_USE
    );
}

#[test]
fn test_invalid_usage_is_rejected() {
    let result = RecorderConfig::from_toml("[recording]\ndefault_usage = \"sometimes\"\n");
    match result {
        Err(CoreError::Config(_)) => {}
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn test_load_from_file_and_missing_file() {
    let path = std::env::temp_dir().join(format!("vkrecord-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[recording]\ncontention_warn_ms = 250\n").unwrap();
    let path_str = path.to_str().unwrap();

    let config = RecorderConfig::load(path_str).unwrap();
    assert_eq!(config.recording.contention_warn_ms, 250);
    std::fs::remove_file(&path).unwrap();

    match RecorderConfig::load(path_str) {
        Err(CoreError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other),
    }
    let fallback = RecorderConfig::load_or_default(path_str);
    assert_eq!(fallback.recording.contention_warn_ms, 50);
}
