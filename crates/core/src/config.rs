#![allow(missing_docs)]

//! Layered application configuration.
//!
//! Values come from built-in defaults, then `config.toml` under the user's
//! config directory, then `SPELASPEL__*` environment variables
//! (e.g. `SPELASPEL__TIMING__SETTLE_DELAY_MS=600`).

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::QuizError, mode::GameMode, scoring::DEFAULT_PASS_THRESHOLD};

/// Directory name below the platform config dir.
pub const APP_DIR: &str = "spelaspel";

const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "SPELASPEL";

const DEFAULT_CONFIG: &str = r#"# Spelaspel configuration.

[quiz]
# Percentage at or above which a finished game is celebrated.
pass_threshold = 50
# Games offered in the menus. Drop the minute-hand games for the simpler setup.
enabled_modes = [
  "stora-lilla",
  "stora-lilla-svar",
  "timvisaren",
  "hel-halv",
  "minutvisaren",
  "minutvisaren-hard",
  "tim-och-minutvisaren",
]

[quiz.questions]
letters = 10
clock = 10
hel_halv = 10
minutvisaren = 10
minutvisaren_hard = 10
tim_och_minutvisaren = 10

[timing]
# Pause after a correct answer before the next question appears.
settle_delay_ms = 1000
# Pause before the spoken instructions of a new game.
instruction_delay_ms = 400
"#;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub quiz: QuizSettings,
    pub timing: TimingConfig,
}

/// Settings the session engine reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    pub questions: QuestionCounts,
    pub enabled_modes: Vec<GameMode>,
    pub pass_threshold: u8,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            questions: QuestionCounts::default(),
            enabled_modes: GameMode::ALL.to_vec(),
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}

impl QuizSettings {
    pub fn is_enabled(&self, mode: GameMode) -> bool {
        self.enabled_modes.contains(&mode)
    }

    /// Fail with [`QuizError::ModeDisabled`] unless `mode` is offered.
    pub fn ensure_enabled(&self, mode: GameMode) -> Result<(), QuizError> {
        if self.is_enabled(mode) {
            Ok(())
        } else {
            Err(QuizError::ModeDisabled(mode))
        }
    }

    /// Number of questions in one session of `mode`, at least one.
    pub fn total_questions(&self, mode: GameMode) -> usize {
        self.questions.for_mode(mode).max(1)
    }
}

/// Questions per session, one entry per game family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionCounts {
    pub letters: usize,
    pub clock: usize,
    pub hel_halv: usize,
    pub minutvisaren: usize,
    pub minutvisaren_hard: usize,
    pub tim_och_minutvisaren: usize,
}

impl Default for QuestionCounts {
    fn default() -> Self {
        Self {
            letters: 10,
            clock: 10,
            hel_halv: 10,
            minutvisaren: 10,
            minutvisaren_hard: 10,
            tim_och_minutvisaren: 10,
        }
    }
}

impl QuestionCounts {
    pub fn for_mode(&self, mode: GameMode) -> usize {
        match mode {
            GameMode::LetterCase | GameMode::LetterCaseHard => self.letters,
            GameMode::ClockHour => self.clock,
            GameMode::HalfHour => self.hel_halv,
            GameMode::MinuteHand => self.minutvisaren,
            GameMode::MinuteHandHard => self.minutvisaren_hard,
            GameMode::HourAndMinute => self.tim_och_minutvisaren,
        }
    }
}

/// Host-side delays. The engine itself never waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub settle_delay_ms: u64,
    pub instruction_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 1000,
            instruction_delay_ms: 400,
        }
    }
}

impl TimingConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn instruction_delay(&self) -> Duration {
        Duration::from_millis(self.instruction_delay_ms)
    }
}

impl AppConfig {
    /// Load from the default file location plus environment overrides.
    pub fn load() -> Result<Self, QuizError> {
        Self::load_from(config_path())
    }

    /// Load from `path` (optional on disk) plus environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, QuizError> {
        Self::load_with(path, environment())
    }

    /// Load from `path` layered under an explicit environment source.
    pub fn load_with(path: impl AsRef<Path>, env: Environment) -> Result<Self, QuizError> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()?;
        let config: AppConfig = settings.try_deserialize()?;
        info!(path = %path.display(), modes = config.quiz.enabled_modes.len(), "configuration loaded");
        Ok(config)
    }
}

/// `SPELASPEL__SECTION__KEY` variables; `quiz.enabled_modes` is comma separated.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("quiz.enabled_modes")
        .try_parsing(true)
}

/// Directory holding the config file and the preference file.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Default location of `config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Write the commented default configuration if no file exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = config_path();
    write_default_config(&path)?;
    Ok(path)
}

fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    info!(path = %path.display(), "wrote default configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::Map;
    use tempfile::tempdir;

    fn load_isolated(path: impl AsRef<Path>) -> Result<AppConfig, QuizError> {
        AppConfig::load_with(path, environment().source(Some(Map::new())))
    }

    #[test]
    fn default_file_matches_built_in_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join(CONFIG_FILE);
        write_default_config(&path)?;
        assert!(path.exists());

        let loaded = load_isolated(&path)?;
        assert_eq!(loaded, AppConfig::default());
        Ok(())
    }

    #[test]
    fn reduced_configuration_disables_minute_games() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[quiz]
enabled_modes = ["stora-lilla", "timvisaren", "hel-halv"]

[quiz.questions]
clock = 0
"#,
        )?;
        let loaded = load_isolated(&path)?;
        assert!(loaded.quiz.is_enabled(GameMode::HalfHour));
        assert!(matches!(
            loaded.quiz.ensure_enabled(GameMode::MinuteHand),
            Err(QuizError::ModeDisabled(GameMode::MinuteHand))
        ));
        assert_eq!(loaded.quiz.total_questions(GameMode::ClockHour), 1);
        assert_eq!(loaded.quiz.total_questions(GameMode::LetterCase), 10);
        assert_eq!(loaded.timing, TimingConfig::default());
        Ok(())
    }

    #[test]
    fn missing_file_falls_back_to_defaults() -> Result<()> {
        let dir = tempdir()?;
        let loaded = load_isolated(dir.path().join("absent.toml"))?;
        assert_eq!(loaded.quiz.pass_threshold, 50);
        assert_eq!(loaded.timing.settle_delay(), Duration::from_millis(1000));
        Ok(())
    }

    #[test]
    fn unknown_mode_is_a_config_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[quiz]\nenabled_modes = [\"schack\"]\n")?;
        assert!(matches!(load_isolated(&path), Err(QuizError::Config(_))));
        Ok(())
    }

    #[test]
    fn environment_overrides_the_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        write_default_config(&path)?;
        let vars = Map::from([
            ("SPELASPEL__TIMING__SETTLE_DELAY_MS".to_string(), "600".to_string()),
            ("SPELASPEL__QUIZ__ENABLED_MODES".to_string(), "stora-lilla,hel-halv".to_string()),
            ("SPELASPEL__QUIZ__QUESTIONS__CLOCK".to_string(), "3".to_string()),
        ]);
        let loaded = AppConfig::load_with(&path, environment().source(Some(vars)))?;
        assert_eq!(loaded.timing.settle_delay_ms, 600);
        assert_eq!(
            loaded.quiz.enabled_modes,
            vec![GameMode::LetterCase, GameMode::HalfHour]
        );
        assert_eq!(loaded.quiz.questions.clock, 3);
        assert_eq!(loaded.quiz.questions.letters, 10);
        Ok(())
    }
}
