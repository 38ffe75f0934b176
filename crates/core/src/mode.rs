#![allow(missing_docs)]

//! Game modes and their fixed metadata.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Swedish alphabet used by the letter game.
pub const FULL_ALPHABET: [char; 29] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Å', 'Ä', 'Ö',
];

/// Letters whose lowercase form is easy to confuse with another letter.
pub const HARD_ALPHABET: [char; 16] = [
    'A', 'B', 'D', 'E', 'G', 'I', 'J', 'L', 'N', 'Q', 'R', 'T', 'Y', 'Å', 'Ä', 'Ö',
];

/// Learning area a mode belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    /// Letters.
    Svenska,
    /// Reading the clock.
    Klockan,
}

impl Area {
    pub fn title(self) -> &'static str {
        match self {
            Area::Svenska => "SVENSKA",
            Area::Klockan => "KLOCKAN",
        }
    }
}

/// The quiz variants a session can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GameMode {
    /// Pick the lowercase form of an uppercase letter.
    LetterCase,
    /// Same, restricted to easily confused letters.
    LetterCaseHard,
    /// Read the hour hand.
    ClockHour,
    /// Whole or half hour.
    HalfHour,
    /// Name the minute hand's position.
    MinuteHand,
    /// Minute hand with a distracting hour hand and fading labels.
    MinuteHandHard,
    /// Read both hands as one spoken time.
    HourAndMinute,
}

impl GameMode {
    /// Every mode, in menu order.
    pub const ALL: [GameMode; 7] = [
        GameMode::LetterCase,
        GameMode::LetterCaseHard,
        GameMode::ClockHour,
        GameMode::HalfHour,
        GameMode::MinuteHand,
        GameMode::MinuteHandHard,
        GameMode::HourAndMinute,
    ];

    /// Stable identifier used in configuration files.
    pub fn id(self) -> &'static str {
        match self {
            GameMode::LetterCase => "stora-lilla",
            GameMode::LetterCaseHard => "stora-lilla-svar",
            GameMode::ClockHour => "timvisaren",
            GameMode::HalfHour => "hel-halv",
            GameMode::MinuteHand => "minutvisaren",
            GameMode::MinuteHandHard => "minutvisaren-hard",
            GameMode::HourAndMinute => "tim-och-minutvisaren",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.id() == id)
    }

    pub fn area(self) -> Area {
        match self {
            GameMode::LetterCase | GameMode::LetterCaseHard => Area::Svenska,
            _ => Area::Klockan,
        }
    }

    /// Menu title.
    pub fn title(self) -> &'static str {
        match self {
            GameMode::LetterCase => "STORA & LILLA",
            GameMode::LetterCaseHard => "STORA & LILLA (SVÅR)",
            GameMode::ClockHour => "TIMVISAREN",
            GameMode::HalfHour => "HEL ELLER HALV",
            GameMode::MinuteHand => "MINUTVISAREN",
            GameMode::MinuteHandHard => "MINUTVISAREN (SVÅR)",
            GameMode::HourAndMinute => "TIM- OCH MINUTVISAREN",
        }
    }

    /// Question shown above every prompt of the mode.
    pub fn prompt(self) -> &'static str {
        match self {
            GameMode::LetterCase | GameMode::LetterCaseHard => "TRYCK PÅ LILLA BOKSTAVEN",
            GameMode::ClockHour => "VILKEN TIMME VISAR KLOCKAN?",
            GameMode::HalfHour => "ÄR KLOCKAN HEL ELLER HALV?",
            GameMode::MinuteHand | GameMode::MinuteHandHard => "VAD VISAR MINUTVISAREN?",
            GameMode::HourAndMinute => "HUR MYCKET ÄR KLOCKAN?",
        }
    }

    /// Letters the mode draws from; empty for clock modes.
    pub fn alphabet(self) -> &'static [char] {
        match self {
            GameMode::LetterCase => &FULL_ALPHABET,
            GameMode::LetterCaseHard => &HARD_ALPHABET,
            _ => &[],
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GameMode {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s.trim()).ok_or_else(|| QuizError::UnknownMode(s.to_string()))
    }
}

impl TryFrom<String> for GameMode {
    type Error = QuizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GameMode> for String {
    fn from(value: GameMode) -> Self {
        value.id().to_string()
    }
}
