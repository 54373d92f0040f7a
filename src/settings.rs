//! Game settings and preferences
//!
//! Loaded from a JSON file by the runner; the simulation itself only sees the
//! resulting `Settings` value.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::levels::CAMPAIGN;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Spare lives at the start of a game
    pub fn lives(&self) -> i8 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Normal => 3,
            Difficulty::Hard => 1,
        }
    }

    /// Rim positions the ship moves per tick
    pub fn ship_step(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Spare lives; losing one with none left ends the game
    pub lives: i8,
    /// Rim positions per tick (1..=4)
    pub ship_step: u8,
    /// Length of the level-clear flash
    pub flash_ticks: u16,
    /// How long the game over screen stays up
    pub game_over_ticks: u16,
    /// Campaign index to start from
    pub start_level: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(Difficulty::Normal)
    }
}

impl Settings {
    /// Create settings from a difficulty preset
    pub fn from_preset(preset: Difficulty) -> Self {
        Self {
            difficulty: preset,
            lives: preset.lives(),
            ship_step: preset.ship_step(),
            flash_ticks: 50,
            game_over_ticks: 150,
            start_level: 0,
        }
    }

    /// Apply a difficulty preset (updates preset-dependent settings)
    pub fn apply_preset(&mut self, preset: Difficulty) {
        self.difficulty = preset;
        self.lives = preset.lives();
        self.ship_step = preset.ship_step();
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=4).contains(&self.ship_step) {
            return Err(SettingsError::Invalid(format!(
                "ship_step {} is outside 1..=4",
                self.ship_step
            )));
        }
        if self.lives < 0 {
            return Err(SettingsError::Invalid(format!("lives {} is negative", self.lives)));
        }
        if self.start_level >= CAMPAIGN.len() {
            return Err(SettingsError::Invalid(format!(
                "start_level {} is past the last level ({})",
                self.start_level,
                CAMPAIGN.len() - 1
            )));
        }
        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::info!("Using default settings");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
