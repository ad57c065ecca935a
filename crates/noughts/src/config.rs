//! Game configuration loaded from TOML.

use crate::glyphs::Glyphs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Player;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Glyph strings as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphConfig {
    /// Glyph for player A.
    a: String,
    /// Glyph for player B.
    b: String,
    /// Glyph for an empty cell.
    empty: String,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            a: "×".to_string(),
            b: "○".to_string(),
            empty: " ".to_string(),
        }
    }
}

/// Colour names as written in the config file.
///
/// Accepts anything ratatui's `Color::from_str` does: names such as
/// `"red"`, indexed colours such as `"42"` and hex such as `"#ff8800"`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Colour for player A's marks.
    a: String,
    /// Colour for player B's marks.
    b: String,
    /// Colour for borders and separators.
    frame: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            a: "red".to_string(),
            b: "green".to_string(),
            frame: "gray".to_string(),
        }
    }
}

/// Parsed colours used by the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Colour for player A's marks.
    pub a: Color,
    /// Colour for player B's marks.
    pub b: Color,
    /// Colour for borders and separators.
    pub frame: Color,
}

impl Theme {
    /// Colour for the given player's marks.
    pub fn for_player(&self, player: Player) -> Color {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Pause after a finished game before the board clears.
    reset_delay_ms: u64,

    /// Side the human plays when a session starts.
    human: Player,

    /// Log file written by the terminal UI.
    log_file: PathBuf,

    /// Glyph table.
    glyphs: GlyphConfig,

    /// Colour table.
    theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset_delay_ms: 2000,
            human: Player::B,
            log_file: PathBuf::from("noughts.log"),
            glyphs: GlyphConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file
    /// is an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(reset_delay_ms = config.reset_delay_ms, human = %config.human, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.build_glyphs()?;
        config.build_theme()?;
        Ok(config)
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, reset_delay_ms: Option<u64>, swap_symbols: bool) -> Self {
        if let Some(ms) = reset_delay_ms {
            debug!(ms, "Overriding reset delay");
            self.reset_delay_ms = ms;
        }
        if swap_symbols {
            self.human = self.human.opponent();
            debug!(human = %self.human, "Swapped starting symbols");
        }
        self
    }

    /// Pause after a finished game.
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    /// Builds the validated glyph table.
    pub fn build_glyphs(&self) -> Result<Glyphs, ConfigError> {
        Glyphs::new(&self.glyphs.a, &self.glyphs.b, &self.glyphs.empty)
    }

    /// Parses the colour table.
    pub fn build_theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            a: parse_color("theme.a", &self.theme.a)?,
            b: parse_color("theme.b", &self.theme.b)?,
            frame: parse_color("theme.frame", &self.theme.frame)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid colour for {}: {:?}", key, value)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
