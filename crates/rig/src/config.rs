// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rig configuration: output levels and sequencing windows
//!
//! Loaded from TOML; every field has a tuned default so an empty file is a
//! valid config. Levels are signed fractions of full output. Durations
//! accept humantime strings ("1s", "250ms").

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur loading or validating a rig config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax error
    #[error("TOML syntax error: {0}")]
    Parse(#[from] toml::de::Error),

    /// An output level outside the driver range
    #[error("{field} must be within [-1, 1], got {value}")]
    LevelOutOfRange { field: &'static str, value: f64 },

    /// A sequencing window that would never elapse
    #[error("{field} must be nonzero, got {}", humantime::format_duration(*.value))]
    ZeroDuration {
        field: &'static str,
        value: Duration,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RigConfig {
    pub intake: IntakeConfig,
    pub loader: LoaderConfig,
    pub shooter: ShooterConfig,
    pub climber: ClimberConfig,
    pub handoff: HandoffConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    pub level: f64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self { level: 0.45 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Level while pulling a piece in from the ground
    pub intake: f64,
    /// Level while feeding the shooter
    pub feed: f64,
    /// Reverse level for clearing a jam or backfeeding
    pub exhaust: f64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            intake: 0.4,
            feed: 1.0,
            exhaust: -0.4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterConfig {
    pub speaker: f64,
    pub amp: f64,
    pub reverse: f64,
    /// Wheel spin-up window before feeding for a speaker shot
    #[serde(with = "humantime_serde")]
    pub speaker_spin_up: Duration,
    /// Wheel spin-up window before feeding for an amp shot
    #[serde(with = "humantime_serde")]
    pub amp_spin_up: Duration,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self {
            speaker: 1.0,
            amp: 0.35,
            reverse: -0.25,
            speaker_spin_up: Duration::from_secs(1),
            amp_spin_up: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimberConfig {
    pub climb: f64,
    pub dispense: f64,
}

impl Default for ClimberConfig {
    fn default() -> Self {
        Self {
            climb: 0.6,
            dispense: -0.6,
        }
    }
}

/// Windows used when handing a piece between rollers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    /// How long rollers hold zero output before the backfeed
    #[serde(with = "humantime_serde")]
    pub settle: Duration,
    /// Brief reverse pulse so the piece doesn't jam the shooter wheel
    #[serde(with = "humantime_serde")]
    pub backfeed: Duration,
    /// Slack added to autonomous deadlines around a feed
    #[serde(with = "humantime_serde")]
    pub feed_grace: Duration,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(100),
            backfeed: Duration::from_millis(200),
            feed_grace: Duration::from_millis(100),
        }
    }
}

impl RigConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml(content: &str) -> Result<RigConfig, ConfigError> {
        let config: RigConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<RigConfig, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let levels = [
            ("intake.level", self.intake.level),
            ("loader.intake", self.loader.intake),
            ("loader.feed", self.loader.feed),
            ("loader.exhaust", self.loader.exhaust),
            ("shooter.speaker", self.shooter.speaker),
            ("shooter.amp", self.shooter.amp),
            ("shooter.reverse", self.shooter.reverse),
            ("climber.climb", self.climber.climb),
            ("climber.dispense", self.climber.dispense),
        ];
        for (field, value) in levels {
            if !(-1.0..=1.0).contains(&value) {
                return Err(ConfigError::LevelOutOfRange { field, value });
            }
        }

        let windows = [
            ("shooter.speaker_spin_up", self.shooter.speaker_spin_up),
            ("shooter.amp_spin_up", self.shooter.amp_spin_up),
            ("handoff.settle", self.handoff.settle),
            ("handoff.backfeed", self.handoff.backfeed),
            ("handoff.feed_grace", self.handoff.feed_grace),
        ];
        for (field, value) in windows {
            if value.is_zero() {
                return Err(ConfigError::ZeroDuration { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
