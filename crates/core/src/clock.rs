#![allow(missing_docs)]

//! Clock model: hand angles and Swedish time phrases.
//!
//! Everything here is a pure function of an hour (1..=12) and a
//! minute-position (1..=12, five minutes per step). Angles are measured in
//! degrees clockwise from twelve o'clock.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Degrees between two neighbouring numerals on the dial.
pub const DEGREES_PER_STEP: f64 = 30.0;

/// Hours as printed on the dial.
pub const HOURS: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Phrase for each minute-position, indexed by `position - 1`.
const MINUTE_LABELS: [&str; 12] = [
    "FEM MINUTER ÖVER",
    "TIO MINUTER ÖVER",
    "KVART ÖVER",
    "TJUGO MINUTER ÖVER",
    "FEM MINUTER I HALV",
    "HALV",
    "FEM MINUTER ÖVER HALV",
    "TJUGO MINUTER I",
    "KVART I",
    "TIO MINUTER I",
    "FEM MINUTER I",
    "HEL",
];

/// A clock-face position for the minute hand, in five-minute steps.
///
/// Position 12 is on the hour, 6 is half past, 3 and 9 are the quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MinutePosition(u8);

impl MinutePosition {
    /// :05
    pub const FIVE_PAST: Self = Self(1);
    /// :15
    pub const QUARTER_PAST: Self = Self(3);
    /// :30
    pub const HALF: Self = Self(6);
    /// :45
    pub const QUARTER_TO: Self = Self(9);
    /// :55
    pub const FIVE_TO: Self = Self(11);
    /// :00
    pub const WHOLE: Self = Self(12);

    /// Validate a raw position.
    pub fn new(value: u8) -> Result<Self, QuizError> {
        if (1..=12).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QuizError::InvalidMinutePosition(value))
        }
    }

    /// Raw position in `1..=12`.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Elapsed fraction of the hour, in `0.0..1.0`.
    pub fn fraction_of_hour(self) -> f64 {
        f64::from(self.0 % 12) / 12.0
    }

    /// Canonical Swedish phrase for the position.
    pub fn label(self) -> &'static str {
        MINUTE_LABELS[usize::from(self.0 - 1)]
    }

    /// Past the half-hour mark, spoken time refers to the approaching hour.
    pub const fn anchors_next_hour(self) -> bool {
        matches!(self.0, 5..=11)
    }
}

impl TryFrom<u8> for MinutePosition {
    type Error = QuizError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MinutePosition> for u8 {
    fn from(value: MinutePosition) -> Self {
        value.0
    }
}

impl fmt::Display for MinutePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Only the whole and the half hour.
pub const WHOLE_AND_HALF: [MinutePosition; 2] = [MinutePosition::WHOLE, MinutePosition::HALF];

/// Whole, half and both quarters.
pub const QUARTERS: [MinutePosition; 4] = [
    MinutePosition::WHOLE,
    MinutePosition::HALF,
    MinutePosition::QUARTER_PAST,
    MinutePosition::QUARTER_TO,
];

/// Every position on the dial.
pub const ALL_POSITIONS: [MinutePosition; 12] = [
    MinutePosition(1),
    MinutePosition(2),
    MinutePosition(3),
    MinutePosition(4),
    MinutePosition(5),
    MinutePosition(6),
    MinutePosition(7),
    MinutePosition(8),
    MinutePosition(9),
    MinutePosition(10),
    MinutePosition(11),
    MinutePosition(12),
];

/// The following dial hour, wrapping 12 to 1.
pub const fn next_hour(hour: u8) -> u8 {
    if hour >= 12 {
        1
    } else {
        hour + 1
    }
}

/// The preceding dial hour, wrapping 1 to 12.
pub const fn previous_hour(hour: u8) -> u8 {
    if hour <= 1 {
        12
    } else {
        hour - 1
    }
}

/// Angle of the hour hand.
///
/// The hand creeps toward the next numeral in proportion to
/// `minute_offset_fraction` (the elapsed part of the hour).
pub fn hour_angle(hour: u8, minute_offset_fraction: f64) -> f64 {
    f64::from(hour % 12) * DEGREES_PER_STEP + minute_offset_fraction * DEGREES_PER_STEP
}

/// Angle of the minute hand.
pub fn minute_angle(position: MinutePosition) -> f64 {
    f64::from(position.get() % 12) * DEGREES_PER_STEP
}

/// Swedish phrase for a minute-position.
pub fn minute_label(position: MinutePosition) -> &'static str {
    position.label()
}

/// Hour named in the spoken time: the next hour once past the half-hour.
pub fn referenced_hour(position: MinutePosition, hour: u8) -> u8 {
    if position.anchors_next_hour() {
        next_hour(hour)
    } else {
        hour
    }
}

/// Combined answer such as `"KVART I 4"`, or the bare hour on the hour.
pub fn format_answer(position: MinutePosition, hour: u8) -> String {
    let resolved = referenced_hour(position, hour);
    if position == MinutePosition::WHOLE {
        resolved.to_string()
    } else {
        format!("{} {}", position.label(), resolved)
    }
}

/// `"HEL 3"` or `"HALV 3"`.
pub fn whole_or_half_label(hour: u8, half: bool) -> String {
    if half {
        format!("HALV {hour}")
    } else {
        format!("HEL {hour}")
    }
}

/// Hour a learner should read off the hour hand.
///
/// At five to the hour the hand sits almost on the next numeral, so that
/// numeral is the expected reading.
pub fn hour_hand_answer(hour: u8, position: Option<MinutePosition>) -> u8 {
    match position {
        Some(MinutePosition::FIVE_TO) => next_hour(hour),
        _ => hour,
    }
}

/// Hand placement for one question. Recomputed per question, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockReading {
    pub hour_angle_degrees: f64,
    pub minute_angle_degrees: f64,
    pub hour_hand_visible: bool,
    pub minute_hand_visible: bool,
}

impl ClockReading {
    /// Hour hand exactly on `hour`, minute hand hidden.
    pub fn hour_only(hour: u8) -> Self {
        Self {
            hour_angle_degrees: hour_angle(hour, 0.0),
            minute_angle_degrees: 0.0,
            hour_hand_visible: true,
            minute_hand_visible: false,
        }
    }

    /// Both hands showing `hour` and `position`.
    pub fn at(hour: u8, position: MinutePosition) -> Self {
        Self {
            hour_angle_degrees: hour_angle(hour, position.fraction_of_hour()),
            minute_angle_degrees: minute_angle(position),
            hour_hand_visible: true,
            minute_hand_visible: true,
        }
    }

    /// Minute hand alone.
    pub fn minute_only(position: MinutePosition) -> Self {
        Self {
            hour_angle_degrees: 0.0,
            minute_angle_degrees: minute_angle(position),
            hour_hand_visible: false,
            minute_hand_visible: true,
        }
    }

    /// Where the hour hand sits relative to the numerals.
    pub fn hour_hand_placement(&self) -> HandPlacement {
        let steps = self.hour_angle_degrees / DEGREES_PER_STEP;
        if (steps - steps.round()).abs() < 1e-9 {
            HandPlacement::On(numeral_for(self.hour_angle_degrees))
        } else {
            let lower = numeral_for(steps.floor() * DEGREES_PER_STEP);
            HandPlacement::Between(lower, next_hour(lower))
        }
    }

    /// Numeral the minute hand points at.
    pub fn minute_numeral(&self) -> u8 {
        numeral_for(self.minute_angle_degrees)
    }
}

/// A hand either rests on a numeral or lies between two neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPlacement {
    On(u8),
    /// Lower numeral first, wrapping 12 to 1.
    Between(u8, u8),
}

fn numeral_for(angle: f64) -> u8 {
    let steps = (angle / DEGREES_PER_STEP).round().rem_euclid(12.0) as u8;
    if steps == 0 {
        12
    } else {
        steps
    }
}
