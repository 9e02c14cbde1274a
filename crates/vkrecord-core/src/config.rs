use ash::vk;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Top-level recorder configuration, loaded from vkrecord.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecorderConfig {
    #[serde(default)]
    pub recording: RecordingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Emit a trace event for every native call issued during compilation
    #[serde(default)]
    pub trace_commands: bool,
    /// Warn when acquiring a command buffer's recording lock took longer than this
    #[serde(default = "default_contention_warn_ms")]
    pub contention_warn_ms: u64,
    /// Usage flags for sessions started without explicit flags
    #[serde(default)]
    pub default_usage: UsageMode,
}

/// Command buffer usage selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageMode {
    None,
    /// Each recording is submitted once, then re-recorded (default)
    #[default]
    OneTimeSubmit,
    RenderPassContinue,
    SimultaneousUse,
}

impl UsageMode {
    pub fn flags(self) -> vk::CommandBufferUsageFlags {
        match self {
            UsageMode::None => vk::CommandBufferUsageFlags::empty(),
            UsageMode::OneTimeSubmit => vk::CommandBufferUsageFlags::ONE_TIME_SUBMIT,
            UsageMode::RenderPassContinue => vk::CommandBufferUsageFlags::RENDER_PASS_CONTINUE,
            UsageMode::SimultaneousUse => vk::CommandBufferUsageFlags::SIMULTANEOUS_USE,
        }
    }
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            trace_commands: false,
            contention_warn_ms: default_contention_warn_ms(),
            default_usage: UsageMode::default(),
        }
    }
}

impl RecorderConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, CoreError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from file if it exists, otherwise return defaults.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!(path, error = %e, "using default recorder configuration");
                Self::default()
            }
        }
    }
}

fn default_contention_warn_ms() -> u64 {
    50
}
