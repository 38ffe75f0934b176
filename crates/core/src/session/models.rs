use serde::Serialize;

use crate::{
    audio::AudioCue,
    clock::{ClockReading, MinutePosition},
};

/// Placement of the minute hand for clock questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MinuteHand {
    Hidden,
    /// Pointing at twelve.
    OnTheHour,
    /// Five past or five to, chosen at random.
    NearTheHour,
    /// At the drawn minute-position.
    Positioned,
}

/// What the hour hand shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HourHand {
    Hidden,
    /// The hour being asked about.
    Target,
    /// An unrelated random hour, as visual noise.
    Unrelated,
}

/// Whether a whole/half question asks for the half hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HalfHourRule {
    Whole,
    Either,
    Half,
}

/// Difficulty settings for one question index of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionContext {
    pub hour_hand: HourHand,
    pub minute_hand: MinuteHand,
    /// Minute-positions the question may use; empty when not applicable.
    pub allowed_positions: &'static [MinutePosition],
    /// Phrase labels printed around the dial.
    pub labels_visible: bool,
    pub half_hour: HalfHourRule,
    pub tricky_distractor: bool,
}

/// The domain value a question is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Target {
    /// Uppercase letter on display; the answer is its lowercase form.
    Letter(char),
    /// Hour drawn for the dial and the hour expected as answer.
    Hour { shown: u8, answer: u8 },
    WholeOrHalf { shown: u8, answer: u8, half: bool },
    Minute(MinutePosition),
    Time { hour: u8, position: MinutePosition },
}

/// Question content before it is numbered and tagged with its context.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDraft {
    pub target: Target,
    pub correct_answer: String,
    pub options: Vec<String>,
    pub clock: Option<ClockReading>,
}

/// One prompt with its shuffled answer options.
///
/// `options` holds the correct answer exactly once and no duplicates. It
/// normally has four entries; a combined-time question on a tiny tier may
/// have fewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub index: usize,
    pub target: Target,
    pub correct_answer: String,
    pub options: Vec<String>,
    pub clock: Option<ClockReading>,
    pub context: QuestionContext,
}

impl Question {
    pub(crate) fn from_draft(index: usize, context: QuestionContext, draft: QuestionDraft) -> Self {
        Self {
            index,
            target: draft.target,
            correct_answer: draft.correct_answer,
            options: draft.options,
            clock: draft.clock,
            context,
        }
    }

    /// Compare a selection with the answer.
    ///
    /// Hour answers compare numerically; everything else must match the
    /// label exactly, case included.
    pub fn is_correct(&self, selected: &str) -> bool {
        match self.target {
            Target::Hour { answer, .. } => selected.trim().parse::<u8>().ok() == Some(answer),
            _ => selected == self.correct_answer,
        }
    }

    /// Cue naming the prompt aloud, when there is one.
    pub fn prompt_cue(&self) -> Option<AudioCue> {
        match self.target {
            Target::Letter(letter) => Some(AudioCue::Letter(letter)),
            _ => None,
        }
    }
}
