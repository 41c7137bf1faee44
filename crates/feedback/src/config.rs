use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use counter_core::TargetPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{dispatcher::FeedbackConfig, pattern::VibrationPattern, tone::ToneSpec};

pub const DEFAULT_SETTINGS_FILE: &str = "tap_counter.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_target: u32,
    pub max_target: u32,
    pub pulse_ms: u64,
    pub tap_vibration_ms: u32,
    pub goal_vibration_ms: Vec<u32>,
    pub audio_enabled: bool,
    pub vibration_enabled: bool,
    pub tone_frequency_hz: f32,
    pub tone_duration_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_target: 10,
            max_target: 1000,
            pulse_ms: 180,
            tap_vibration_ms: VibrationPattern::TAP_PULSE_MS,
            goal_vibration_ms: VibrationPattern::GOAL_BURST_MS.to_vec(),
            audio_enabled: true,
            vibration_enabled: true,
            tone_frequency_hz: 800.0,
            tone_duration_ms: 500,
        }
    }
}

impl Settings {
    pub fn target_policy(&self) -> TargetPolicy {
        TargetPolicy::with_max(self.max_target)
    }

    pub fn feedback_config(&self) -> FeedbackConfig {
        let goal_vibration = VibrationPattern::new(self.goal_vibration_ms.clone())
            .unwrap_or_else(|| {
                warn!("goal_vibration_ms is empty; using the default pattern");
                VibrationPattern::goal()
            });

        FeedbackConfig {
            pulse_duration: Duration::from_millis(self.pulse_ms),
            tap_vibration: VibrationPattern::single(self.tap_vibration_ms),
            goal_vibration,
            vibration_enabled: self.vibration_enabled,
            tone: ToneSpec {
                frequency_hz: self.tone_frequency_hz,
                duration: Duration::from_millis(self.tone_duration_ms),
                ..ToneSpec::default()
            },
        }
    }
}

/// Defaults, then `tap_counter.toml` in the working directory if present, then
/// `TAP__*` environment overrides.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(None)
}

/// Like [`load_settings`], but an explicit `path` must exist.
pub fn load_settings_from(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_SETTINGS_FILE);
            if default_path.exists() {
                read_settings_file(default_path)?
            } else {
                Settings::default()
            }
        }
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<Settings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = parsed_env(&lookup, "TAP__DEFAULT_TARGET") {
        settings.default_target = v;
    }
    if let Some(v) = parsed_env(&lookup, "TAP__MAX_TARGET") {
        settings.max_target = v;
    }
    if let Some(v) = parsed_env(&lookup, "TAP__PULSE_MS") {
        settings.pulse_ms = v;
    }
    if let Some(v) = parsed_env(&lookup, "TAP__AUDIO_ENABLED") {
        settings.audio_enabled = v;
    }
    if let Some(v) = parsed_env(&lookup, "TAP__VIBRATION_ENABLED") {
        settings.vibration_enabled = v;
    }
}

fn parsed_env<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "ignoring malformed environment override");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
