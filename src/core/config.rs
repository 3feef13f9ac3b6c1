//! Round configuration and difficulty presets.
//!
//! Presentation picks a preset (or builds a config by hand) and hands it to
//! the round constructor. Timings are carried as data only: the engine never
//! waits, presentation runs the clocks and calls back in.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{RoundError, RoundResult};

/// Difficulty levels for the memory-pairs game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// All presets, easiest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Grid and lives for this preset.
    ///
    /// Every level deals the same 3x4 grid; harder levels forgive fewer
    /// mistakes.
    #[must_use]
    pub const fn settings(self) -> PairSettings {
        let lives = match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 9,
            Difficulty::Hard => 8,
            Difficulty::Expert => 7,
        };
        PairSettings {
            lives,
            rows: 3,
            cols: 4,
        }
    }
}

impl FromStr for Difficulty {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            other => Err(RoundError::InvalidConfig(format!("unknown difficulty '{other}'"))),
        }
    }
}

/// Grid layout and lives for a pairs round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSettings {
    pub lives: u32,
    pub rows: usize,
    pub cols: usize,
}

impl PairSettings {
    /// Number of cards the grid holds.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Configuration for a pair-matching round.
///
/// ```
/// use minigame_rounds::core::{Difficulty, PairConfig};
///
/// let config = PairConfig::from_difficulty(Difficulty::Hard).unwrap();
/// assert_eq!(config.pair_count, 6);
/// assert_eq!(config.lives, 8);
///
/// let custom = PairConfig::new(4, 3).with_lives(5);
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConfig {
    /// Pairs dealt; the round holds twice as many cards.
    pub pair_count: usize,
    /// Mismatches allowed before the round is lost.
    pub lives: u32,
}

impl PairConfig {
    /// Create a new pair configuration.
    #[must_use]
    pub const fn new(pair_count: usize, lives: u32) -> Self {
        Self { pair_count, lives }
    }

    /// Build from a difficulty preset.
    ///
    /// Fails if the preset grid has an odd number of cells.
    pub fn from_difficulty(difficulty: Difficulty) -> RoundResult<Self> {
        let settings = difficulty.settings();
        if settings.card_count() % 2 != 0 {
            return Err(RoundError::InvalidConfig(format!(
                "{}x{} grid cannot hold whole pairs",
                settings.rows, settings.cols
            )));
        }
        Ok(Self::new(settings.card_count() / 2, settings.lives))
    }

    /// Set the pair count.
    #[must_use]
    pub const fn with_pairs(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the lives.
    #[must_use]
    pub const fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    /// Check the configuration can produce a playable round.
    pub fn validate(&self) -> RoundResult<()> {
        if self.pair_count == 0 {
            return Err(RoundError::EmptyRound);
        }
        if self.lives == 0 {
            return Err(RoundError::InvalidConfig(
                "a pairs round needs at least one life".to_string(),
            ));
        }
        Ok(())
    }
}

/// Difficulty levels for the "what's missing" game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecallDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl RecallDifficulty {
    /// Preset settings for this level.
    #[must_use]
    pub const fn settings(self) -> RecallSettings {
        match self {
            RecallDifficulty::Easy => RecallSettings::new(3, 5)
                .with_memorize_ms(8_000)
                .with_choose_ms(60_000),
            RecallDifficulty::Medium => RecallSettings::new(5, 8)
                .with_memorize_ms(6_000)
                .with_choose_ms(45_000),
            RecallDifficulty::Hard => RecallSettings::new(7, 10)
                .with_memorize_ms(4_000)
                .with_choose_ms(30_000),
        }
    }
}

impl FromStr for RecallDifficulty {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(RecallDifficulty::Easy),
            "medium" => Ok(RecallDifficulty::Medium),
            "hard" => Ok(RecallDifficulty::Hard),
            other => Err(RoundError::InvalidConfig(format!("unknown difficulty '{other}'"))),
        }
    }
}

/// Settings for a "what's missing" round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallSettings {
    /// Objects shown during the memorize phase.
    pub object_count: usize,
    /// How many objects of the catalog are in play at this level.
    pub available_count: usize,
    /// How long the full set stays on screen.
    pub memorize_ms: u64,
    /// How long the reduced set is shown before choices appear.
    pub reveal_ms: u64,
    /// Time allowed to pick the missing object.
    pub choose_ms: u64,
}

impl RecallSettings {
    /// Create settings with the default timings of the medium preset.
    #[must_use]
    pub const fn new(object_count: usize, available_count: usize) -> Self {
        Self {
            object_count,
            available_count,
            memorize_ms: 6_000,
            reveal_ms: 2_000,
            choose_ms: 45_000,
        }
    }

    #[must_use]
    pub const fn with_memorize_ms(mut self, ms: u64) -> Self {
        self.memorize_ms = ms;
        self
    }

    #[must_use]
    pub const fn with_reveal_ms(mut self, ms: u64) -> Self {
        self.reveal_ms = ms;
        self
    }

    #[must_use]
    pub const fn with_choose_ms(mut self, ms: u64) -> Self {
        self.choose_ms = ms;
        self
    }

    #[must_use]
    pub const fn memorize_time(&self) -> Duration {
        Duration::from_millis(self.memorize_ms)
    }

    #[must_use]
    pub const fn reveal_time(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    #[must_use]
    pub const fn choose_time(&self) -> Duration {
        Duration::from_millis(self.choose_ms)
    }
}

impl Default for RecallSettings {
    fn default() -> Self {
        RecallDifficulty::default().settings()
    }
}
