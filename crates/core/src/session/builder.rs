//! Question builders, one per game family.
//!
//! Builders take already-drawn targets so the answer rules can be exercised
//! without a running session.

use rand::Rng;

use crate::{
    clock::{self, ClockReading, MinutePosition},
    distractor,
};

use super::models::{QuestionDraft, Target};

/// Uppercase letter prompt, lowercase answers.
pub fn letter_question<R>(letter: char, alphabet: &[char], rng: &mut R) -> QuestionDraft
where
    R: Rng + ?Sized,
{
    let correct_answer = distractor::lowercase(letter);
    let distractors = distractor::letter_distractors(letter, alphabet, rng);
    QuestionDraft {
        target: Target::Letter(letter),
        options: distractor::assemble_options(&correct_answer, distractors, rng),
        correct_answer,
        clock: None,
    }
}

/// Hour-hand question. `minute` is the minute hand placement, if shown.
pub fn hour_question<R>(hour: u8, minute: Option<MinutePosition>, rng: &mut R) -> QuestionDraft
where
    R: Rng + ?Sized,
{
    let answer = clock::hour_hand_answer(hour, minute);
    let reading = match minute {
        Some(position) => ClockReading::at(hour, position),
        None => ClockReading::hour_only(hour),
    };
    let correct_answer = answer.to_string();
    let distractors = distractor::hour_distractors(answer, rng);
    QuestionDraft {
        target: Target::Hour { shown: hour, answer },
        options: distractor::assemble_options(&correct_answer, distractors, rng),
        correct_answer,
        clock: Some(reading),
    }
}

/// `HEL`/`HALV` question for the drawn `hour`.
///
/// A half hour shown after `hour` is named after the coming hour, so
/// hour 3 with `half` set answers `HALV 4`.
pub fn whole_or_half_question<R>(
    hour: u8,
    half: bool,
    minute_hand_visible: bool,
    tricky: bool,
    rng: &mut R,
) -> QuestionDraft
where
    R: Rng + ?Sized,
{
    let answer = if half { clock::next_hour(hour) } else { hour };
    let reading = match (minute_hand_visible, half) {
        (false, _) => ClockReading::hour_only(hour),
        (true, true) => ClockReading::at(hour, MinutePosition::HALF),
        (true, false) => ClockReading::at(hour, MinutePosition::WHOLE),
    };
    let correct_answer = clock::whole_or_half_label(answer, half);
    let distractors = distractor::whole_or_half_distractors(answer, half, tricky, rng);
    QuestionDraft {
        target: Target::WholeOrHalf {
            shown: hour,
            answer,
            half,
        },
        options: distractor::assemble_options(&correct_answer, distractors, rng),
        correct_answer,
        clock: Some(reading),
    }
}

/// Minute phrase question. `hour_hand` places an unrelated hour hand.
pub fn minute_question<R>(
    position: MinutePosition,
    allowed: &[MinutePosition],
    hour_hand: Option<u8>,
    rng: &mut R,
) -> QuestionDraft
where
    R: Rng + ?Sized,
{
    let reading = match hour_hand {
        Some(hour) => ClockReading::at(hour, position),
        None => ClockReading::minute_only(position),
    };
    let correct_answer = position.label().to_string();
    let distractors = distractor::minute_label_distractors(position, allowed, rng);
    QuestionDraft {
        target: Target::Minute(position),
        options: distractor::assemble_options(&correct_answer, distractors, rng),
        correct_answer,
        clock: Some(reading),
    }
}

/// Full time question such as `KVART I 4`.
pub fn time_question<R>(
    position: MinutePosition,
    hour: u8,
    allowed: &[MinutePosition],
    rng: &mut R,
) -> QuestionDraft
where
    R: Rng + ?Sized,
{
    let correct_answer = clock::format_answer(position, hour);
    let distractors = distractor::combined_time_distractors(position, hour, allowed, rng);
    QuestionDraft {
        target: Target::Time { hour, position },
        options: distractor::assemble_options(&correct_answer, distractors, rng),
        correct_answer,
        clock: Some(ClockReading::at(hour, position)),
    }
}
