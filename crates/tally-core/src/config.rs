use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub driver: DriverConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Locale identifier, e.g. "en_US" or "de-DE"
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Value shown on startup, in cents
    #[serde(default = "default_initial_cents")]
    pub initial_cents: i64,
    /// Roll digits and fade punctuation instead of jumping
    #[serde(default = "default_true")]
    pub animated: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            initial_cents: default_initial_cents(),
            animated: default_true(),
        }
    }
}

/// Easing curve applied to counter transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump at the end of the transition
    None,
    Linear,
    /// Cubic ease-in-ease-out
    EaseInOut,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

impl Default for EasingType {
    fn default() -> Self {
        EasingType::EaseInOut
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Duration of rolls and reveal transitions
    #[serde(default = "default_animation_duration")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Redraw rate while a transition is running
    #[serde(default = "default_animation_fps")]
    pub fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            fps: default_animation_fps(),
        }
    }
}

/// How the driver picks the next value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverMode {
    /// Small steady steps with a random jump every `jump_every` ticks
    #[default]
    Stepped,
    /// A random jump on every tick
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Interval between value updates (0 = driver disabled)
    #[serde(default = "default_interval")]
    pub interval_ms: u64,
    #[serde(default)]
    pub mode: DriverMode,
    /// Increment applied on ordinary ticks in stepped mode
    #[serde(default = "default_step_cents")]
    pub step_cents: i64,
    /// Every n-th tick jumps instead of stepping
    #[serde(default = "default_jump_every")]
    pub jump_every: u32,
    /// Largest absolute random jump
    #[serde(default = "default_max_jump")]
    pub max_jump_cents: i64,
    /// Fixed RNG seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval(),
            mode: DriverMode::default(),
            step_cents: default_step_cents(),
            jump_every: default_jump_every(),
            max_jump_cents: default_max_jump(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Columns between neighbouring elements
    #[serde(default = "default_spacing")]
    pub spacing: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            spacing: default_spacing(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_locale() -> String {
    "en_US".to_string()
}

fn default_initial_cents() -> i64 {
    630_645
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    500
}

fn default_animation_fps() -> u32 {
    60
}

fn default_interval() -> u64 {
    1000
}

fn default_step_cents() -> i64 {
    9
}

fn default_jump_every() -> u32 {
    10
}

fn default_max_jump() -> i64 {
    1_000_000
}

fn default_tick_rate() -> u64 {
    100
}

fn default_spacing() -> u16 {
    1
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/tally/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("tally")
            .join("config.toml")
    }

    /// Log file used while the terminal UI owns the screen
    pub fn log_path() -> PathBuf {
        Self::config_path().with_file_name("tally.log")
    }
}
