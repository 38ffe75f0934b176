//! Per-mode difficulty schedules.
//!
//! Each mode maps question-index ranges to a [`QuestionContext`]. A tier
//! applies from its `first` index until the next tier begins; the last tier
//! covers every later index.

use crate::{
    clock::{MinutePosition, ALL_POSITIONS, QUARTERS, WHOLE_AND_HALF},
    mode::GameMode,
};

use super::models::{HalfHourRule, HourHand, MinuteHand, QuestionContext};

struct Tier {
    first: usize,
    context: QuestionContext,
}

const NO_POSITIONS: &[MinutePosition] = &[];

const BASE: QuestionContext = QuestionContext {
    hour_hand: HourHand::Hidden,
    minute_hand: MinuteHand::Hidden,
    allowed_positions: NO_POSITIONS,
    labels_visible: false,
    half_hour: HalfHourRule::Whole,
    tricky_distractor: false,
};

const HOUR_HAND_ONLY: QuestionContext = QuestionContext {
    hour_hand: HourHand::Target,
    ..BASE
};

const LETTERS: &[Tier] = &[Tier {
    first: 0,
    context: BASE,
}];

const CLOCK_HOUR: &[Tier] = &[
    Tier {
        first: 0,
        context: HOUR_HAND_ONLY,
    },
    Tier {
        first: 4,
        context: QuestionContext {
            minute_hand: MinuteHand::OnTheHour,
            ..HOUR_HAND_ONLY
        },
    },
    Tier {
        first: 8,
        context: QuestionContext {
            minute_hand: MinuteHand::NearTheHour,
            ..HOUR_HAND_ONLY
        },
    },
];

const HALF_HOUR: &[Tier] = &[
    Tier {
        first: 0,
        context: HOUR_HAND_ONLY,
    },
    Tier {
        first: 2,
        context: QuestionContext {
            minute_hand: MinuteHand::OnTheHour,
            ..HOUR_HAND_ONLY
        },
    },
    Tier {
        first: 4,
        context: QuestionContext {
            minute_hand: MinuteHand::OnTheHour,
            half_hour: HalfHourRule::Either,
            ..HOUR_HAND_ONLY
        },
    },
    Tier {
        first: 8,
        context: QuestionContext {
            minute_hand: MinuteHand::OnTheHour,
            half_hour: HalfHourRule::Half,
            tricky_distractor: true,
            ..HOUR_HAND_ONLY
        },
    },
];

const MINUTE_LABELLED: QuestionContext = QuestionContext {
    minute_hand: MinuteHand::Positioned,
    labels_visible: true,
    ..BASE
};

const MINUTE_HAND: &[Tier] = &[
    Tier {
        first: 0,
        context: QuestionContext {
            allowed_positions: &WHOLE_AND_HALF,
            ..MINUTE_LABELLED
        },
    },
    Tier {
        first: 2,
        context: QuestionContext {
            allowed_positions: &QUARTERS,
            ..MINUTE_LABELLED
        },
    },
    Tier {
        first: 5,
        context: QuestionContext {
            allowed_positions: &ALL_POSITIONS,
            ..MINUTE_LABELLED
        },
    },
];

const MINUTE_WITH_NOISE: QuestionContext = QuestionContext {
    hour_hand: HourHand::Unrelated,
    ..MINUTE_LABELLED
};

const MINUTE_HAND_HARD: &[Tier] = &[
    Tier {
        first: 0,
        context: QuestionContext {
            allowed_positions: &WHOLE_AND_HALF,
            ..MINUTE_WITH_NOISE
        },
    },
    Tier {
        first: 2,
        context: QuestionContext {
            allowed_positions: &ALL_POSITIONS,
            ..MINUTE_WITH_NOISE
        },
    },
    Tier {
        first: 5,
        context: QuestionContext {
            allowed_positions: &QUARTERS,
            labels_visible: false,
            ..MINUTE_WITH_NOISE
        },
    },
    Tier {
        first: 8,
        context: QuestionContext {
            allowed_positions: &ALL_POSITIONS,
            labels_visible: false,
            ..MINUTE_WITH_NOISE
        },
    },
];

const BOTH_HANDS: QuestionContext = QuestionContext {
    hour_hand: HourHand::Target,
    ..MINUTE_LABELLED
};

const HOUR_AND_MINUTE: &[Tier] = &[
    Tier {
        first: 0,
        context: QuestionContext {
            allowed_positions: &WHOLE_AND_HALF,
            ..BOTH_HANDS
        },
    },
    Tier {
        first: 3,
        context: QuestionContext {
            allowed_positions: &QUARTERS,
            ..BOTH_HANDS
        },
    },
    Tier {
        first: 6,
        context: QuestionContext {
            allowed_positions: &ALL_POSITIONS,
            ..BOTH_HANDS
        },
    },
];

fn tiers(mode: GameMode) -> &'static [Tier] {
    match mode {
        GameMode::LetterCase | GameMode::LetterCaseHard => LETTERS,
        GameMode::ClockHour => CLOCK_HOUR,
        GameMode::HalfHour => HALF_HOUR,
        GameMode::MinuteHand => MINUTE_HAND,
        GameMode::MinuteHandHard => MINUTE_HAND_HARD,
        GameMode::HourAndMinute => HOUR_AND_MINUTE,
    }
}

/// Difficulty context for question `index` (0-based) of `mode`.
pub fn context_for(mode: GameMode, index: usize) -> QuestionContext {
    tiers(mode)
        .iter()
        .rev()
        .find(|tier| index >= tier.first)
        .map(|tier| tier.context)
        .unwrap_or(BASE)
}
