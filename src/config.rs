//! Game tuning: round length, difficulty tables, spawn bands and particle
//! settings. Everything is in terminal cells; speeds are rows per frame.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{WbResult, WordBuilderError};

pub const DEFAULT_TIME_LIMIT_SECS: f32 = 60.0;
pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const DEFAULT_WORDS_PATH: &str = "words.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Menu hotkey: '1', '2' or '3'.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Difficulty::Easy),
            '2' => Some(Difficulty::Medium),
            '3' => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn hotkey(self) -> char {
        match self {
            Difficulty::Easy => '1',
            Difficulty::Medium => '2',
            Difficulty::Hard => '3',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultyProfile {
    pub min_speed: f32,
    pub max_speed: f32,
    pub letter_count: usize,
    pub bonus_seconds_per_letter: f32,
}

impl DifficultyProfile {
    pub const EASY: Self = Self {
        min_speed: 0.05,
        max_speed: 0.20,
        letter_count: 80,
        bonus_seconds_per_letter: 5.0,
    };
    pub const MEDIUM: Self = Self {
        min_speed: 0.10,
        max_speed: 0.30,
        letter_count: 120,
        bonus_seconds_per_letter: 4.0,
    };
    pub const HARD: Self = Self {
        min_speed: 0.15,
        max_speed: 0.40,
        letter_count: 160,
        bonus_seconds_per_letter: 3.0,
    };

    fn validate(&self, tier: Difficulty) -> WbResult<()> {
        let (min, max) = (self.min_speed, self.max_speed);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(WordBuilderError::Config(format!(
                "{tier}: speed range {min}..{max} is invalid"
            )));
        }
        let bonus = self.bonus_seconds_per_letter;
        if !(bonus.is_finite() && bonus > 0.0) {
            return Err(WordBuilderError::Config(format!(
                "{tier}: bonus_seconds_per_letter {bonus} must be positive"
            )));
        }
        Ok(())
    }
}

/// A tier as written in the config file: any field left out keeps that
/// tier's built-in value.
#[derive(Debug, Deserialize)]
struct ProfileOverride {
    min_speed: Option<f32>,
    max_speed: Option<f32>,
    letter_count: Option<usize>,
    bonus_seconds_per_letter: Option<f32>,
}

impl ProfileOverride {
    fn over(self, base: DifficultyProfile) -> DifficultyProfile {
        DifficultyProfile {
            min_speed: self.min_speed.unwrap_or(base.min_speed),
            max_speed: self.max_speed.unwrap_or(base.max_speed),
            letter_count: self.letter_count.unwrap_or(base.letter_count),
            bonus_seconds_per_letter: self
                .bonus_seconds_per_letter
                .unwrap_or(base.bonus_seconds_per_letter),
        }
    }
}

fn easy_profile<'de, D: Deserializer<'de>>(d: D) -> Result<DifficultyProfile, D::Error> {
    Ok(ProfileOverride::deserialize(d)?.over(DifficultyProfile::EASY))
}

fn medium_profile<'de, D: Deserializer<'de>>(d: D) -> Result<DifficultyProfile, D::Error> {
    Ok(ProfileOverride::deserialize(d)?.over(DifficultyProfile::MEDIUM))
}

fn hard_profile<'de, D: Deserializer<'de>>(d: D) -> Result<DifficultyProfile, D::Error> {
    Ok(ProfileOverride::deserialize(d)?.over(DifficultyProfile::HARD))
}

/// Where letters appear, in rows relative to the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Initial letters start anywhere from this many rows above the top.
    pub preseed_rows: i32,
    pub recycle_min_row: i32,
    pub recycle_max_row: i32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            preseed_rows: 16,
            recycle_min_row: -3,
            recycle_max_row: -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub burst: usize,
    /// Cells per frame, applied to each velocity component.
    pub max_speed: f32,
    pub min_life: u32,
    pub max_life: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            burst: 20,
            max_speed: 0.5,
            min_life: 20,
            max_life: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub time_limit_secs: f32,
    pub frame_rate: u32,
    pub words_path: PathBuf,
    #[serde(deserialize_with = "easy_profile")]
    pub easy: DifficultyProfile,
    #[serde(deserialize_with = "medium_profile")]
    pub medium: DifficultyProfile,
    #[serde(deserialize_with = "hard_profile")]
    pub hard: DifficultyProfile,
    pub spawn: SpawnConfig,
    pub particles: ParticleConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            frame_rate: DEFAULT_FRAME_RATE,
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            easy: DifficultyProfile::EASY,
            medium: DifficultyProfile::MEDIUM,
            hard: DifficultyProfile::HARD,
            spawn: SpawnConfig::default(),
            particles: ParticleConfig::default(),
        }
    }
}

impl GameConfig {
    /// Reads a JSON config; missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> WbResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn profile(&self, difficulty: Difficulty) -> &DifficultyProfile {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn validate(&self) -> WbResult<()> {
        if !(self.time_limit_secs.is_finite() && self.time_limit_secs > 0.0) {
            return Err(WordBuilderError::Config(format!(
                "time_limit_secs {} must be positive and finite",
                self.time_limit_secs
            )));
        }
        if self.frame_rate == 0 {
            return Err(WordBuilderError::Config("frame_rate must be positive".into()));
        }
        for tier in Difficulty::ALL {
            self.profile(tier).validate(tier)?;
        }

        let spawn = &self.spawn;
        if spawn.preseed_rows < 0 {
            return Err(WordBuilderError::Config(
                "spawn.preseed_rows must not be negative".into(),
            ));
        }
        if spawn.recycle_min_row > spawn.recycle_max_row || spawn.recycle_max_row >= 0 {
            return Err(WordBuilderError::Config(format!(
                "spawn recycle band {}..={} must be ordered and above the top edge",
                spawn.recycle_min_row, spawn.recycle_max_row
            )));
        }

        let particles = &self.particles;
        if particles.min_life > particles.max_life
            || !(particles.max_speed.is_finite() && particles.max_speed >= 0.0)
        {
            return Err(WordBuilderError::Config(
                "particle life range or speed is invalid".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn load_json(json: &str) -> WbResult<GameConfig> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        GameConfig::load(file.path())
    }

    #[test]
    fn defaults_validate() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "time_limit_secs": 30.0, "hard": {{ "min_speed": 0.5, "max_speed": 0.9, "letter_count": 10, "bonus_seconds_per_letter": 1.0 }} }}"#
        )
        .unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.time_limit_secs, 30.0);
        assert_eq!(config.hard.letter_count, 10);
        assert_eq!(config.easy, DifficultyProfile::EASY);
        assert_eq!(config.particles.burst, 20);
    }

    #[test]
    fn tier_override_keeps_the_tiers_own_defaults() {
        let config = load_json(r#"{ "hard": { "letter_count": 10 } }"#).unwrap();
        assert_eq!(
            config.hard,
            DifficultyProfile {
                letter_count: 10,
                ..DifficultyProfile::HARD
            }
        );
        assert_eq!(config.easy, DifficultyProfile::EASY);
        assert_eq!(config.medium, DifficultyProfile::MEDIUM);

        let config = load_json(r#"{ "easy": { "bonus_seconds_per_letter": 2.5 } }"#).unwrap();
        assert_eq!(config.easy.bonus_seconds_per_letter, 2.5);
        assert_eq!(config.easy.max_speed, DifficultyProfile::EASY.max_speed);
    }

    #[rstest]
    #[case::time_limit(|c: &mut GameConfig| c.time_limit_secs = f32::INFINITY)]
    #[case::time_limit_nan(|c: &mut GameConfig| c.time_limit_secs = f32::NAN)]
    #[case::min_speed(|c: &mut GameConfig| c.easy.min_speed = f32::NAN)]
    #[case::max_speed(|c: &mut GameConfig| c.medium.max_speed = f32::INFINITY)]
    #[case::both_speeds(|c: &mut GameConfig| {
        c.hard.min_speed = f32::INFINITY;
        c.hard.max_speed = f32::INFINITY;
    })]
    #[case::bonus(|c: &mut GameConfig| c.hard.bonus_seconds_per_letter = f32::INFINITY)]
    #[case::bonus_nan(|c: &mut GameConfig| c.easy.bonus_seconds_per_letter = f32::NAN)]
    #[case::particle_speed(|c: &mut GameConfig| c.particles.max_speed = f32::INFINITY)]
    fn non_finite_values_are_rejected(#[case] tweak: fn(&mut GameConfig)) {
        let mut config = GameConfig::default();
        tweak(&mut config);
        assert!(matches!(config.validate(), Err(WordBuilderError::Config(_))));
    }

    #[test]
    fn overflowing_json_speed_is_rejected() {
        // 1e39 is past f32::MAX and parses to infinity.
        assert!(matches!(
            load_json(r#"{ "hard": { "max_speed": 1e39 } }"#),
            Err(WordBuilderError::Config(_))
        ));
        assert!(matches!(
            load_json(r#"{ "time_limit_secs": 1e39 }"#),
            Err(WordBuilderError::Config(_))
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    fn bonus_time_must_be_positive(#[case] bonus: f32) {
        for tier in Difficulty::ALL {
            let mut config = GameConfig::default();
            match tier {
                Difficulty::Easy => config.easy.bonus_seconds_per_letter = bonus,
                Difficulty::Medium => config.medium.bonus_seconds_per_letter = bonus,
                Difficulty::Hard => config.hard.bonus_seconds_per_letter = bonus,
            }
            assert!(matches!(config.validate(), Err(WordBuilderError::Config(_))), "{tier}");
        }
    }

    #[test]
    fn inverted_speed_range_is_rejected() {
        let mut config = GameConfig::default();
        config.medium.min_speed = 1.0;
        config.medium.max_speed = 0.5;
        assert!(matches!(config.validate(), Err(WordBuilderError::Config(_))));
    }

    #[test]
    fn recycle_band_must_be_above_top() {
        let mut config = GameConfig::default();
        config.spawn.recycle_max_row = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(WordBuilderError::Json(_))
        ));
    }

    #[test]
    fn digits_map_to_tiers() {
        assert_eq!(Difficulty::from_digit('1'), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_digit('3'), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_digit('4'), None);
        for tier in Difficulty::ALL {
            assert_eq!(Difficulty::from_digit(tier.hotkey()), Some(tier));
        }
    }
}
