//! The quiz session state machine.
//!
//! `NotStarted -> InProgress -> Completed`. A correct answer locks the
//! question; the host calls [`QuizSession::settle`] after its feedback delay
//! to move on. Wrong answers never lock and may be retried.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::{
    clock::{MinutePosition, HOURS},
    config::QuizSettings,
    error::QuizError,
    mode::GameMode,
    scoring::SessionResult,
    selector::UsedSet,
};

use super::{
    builder,
    models::{HalfHourRule, HourHand, MinuteHand, Question, QuestionContext, QuestionDraft},
    schedule,
};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress { question_index: usize },
    Completed,
}

/// Result of [`QuizSession::submit_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The selection matched. The session stays locked until
    /// [`QuizSession::settle`], unless it was the final question.
    Correct {
        first_try: bool,
        session_complete: bool,
    },
    /// The selection did not match. `repeated` is set when the same option
    /// had already been rejected for this question.
    Wrong { repeated: bool },
    /// No answer is being accepted right now.
    Ignored,
}

impl AnswerOutcome {
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerOutcome::Correct { .. })
    }

    pub fn session_complete(self) -> bool {
        matches!(
            self,
            AnswerOutcome::Correct {
                session_complete: true,
                ..
            }
        )
    }
}

/// A single play-through of one game mode.
#[derive(Debug)]
pub struct QuizSession<R = StdRng> {
    settings: QuizSettings,
    rng: R,
    phase: SessionPhase,
    mode: Option<GameMode>,
    total_questions: usize,
    correct_first_try: usize,
    used_letters: UsedSet<char>,
    used_hours: UsedSet<u8>,
    used_positions: UsedSet<MinutePosition>,
    current: Option<Question>,
    has_wrong_attempt: bool,
    wrong_answers: Vec<String>,
    awaiting_answer: bool,
}

impl QuizSession<StdRng> {
    /// Session seeded from system entropy.
    pub fn new(settings: QuizSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }
}

impl<R: Rng> QuizSession<R> {
    pub fn with_rng(settings: QuizSettings, rng: R) -> Self {
        Self {
            settings,
            rng,
            phase: SessionPhase::NotStarted,
            mode: None,
            total_questions: 0,
            correct_first_try: 0,
            used_letters: UsedSet::new("letter"),
            used_hours: UsedSet::new("hour"),
            used_positions: UsedSet::new("minute-position"),
            current: None,
            has_wrong_attempt: false,
            wrong_answers: Vec::new(),
            awaiting_answer: false,
        }
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    pub fn correct_first_try(&self) -> usize {
        self.correct_first_try
    }

    pub fn is_awaiting_answer(&self) -> bool {
        self.awaiting_answer
    }

    pub fn has_wrong_attempt(&self) -> bool {
        self.has_wrong_attempt
    }

    /// Options already rejected for the current question, in order.
    pub fn wrong_answers(&self) -> &[String] {
        &self.wrong_answers
    }

    /// Index of the question on display while in progress.
    pub fn question_index(&self) -> Option<usize> {
        match self.phase {
            SessionPhase::InProgress { question_index } => Some(question_index),
            _ => None,
        }
    }

    /// The question last presented.
    ///
    /// After completion this is still the final question, so a host can keep
    /// showing the accepted answer.
    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Begin (or restart) a session of `mode` and present question 0.
    ///
    /// Everything from a previous session is discarded.
    pub fn start(&mut self, mode: GameMode) -> Result<&Question, QuizError> {
        self.settings.ensure_enabled(mode)?;

        self.mode = Some(mode);
        self.total_questions = self.settings.total_questions(mode);
        self.correct_first_try = 0;
        self.used_letters.clear();
        self.used_hours.clear();
        self.used_positions.clear();
        self.current = None;
        self.awaiting_answer = false;
        self.phase = SessionPhase::NotStarted;

        info!(mode = %mode, questions = self.total_questions, "session started");
        self.present(mode, 0)
    }

    /// Evaluate a selected option against the current question.
    pub fn submit_answer(&mut self, selected: &str) -> AnswerOutcome {
        if !self.awaiting_answer {
            debug!(selected, "answer ignored");
            return AnswerOutcome::Ignored;
        }
        let (Some(question), SessionPhase::InProgress { question_index }) =
            (self.current.as_ref(), self.phase)
        else {
            return AnswerOutcome::Ignored;
        };

        if question.is_correct(selected) {
            let first_try = !self.has_wrong_attempt;
            if first_try {
                self.correct_first_try += 1;
            }
            self.awaiting_answer = false;
            let session_complete = question_index + 1 >= self.total_questions;
            debug!(question_index, first_try, "correct answer");
            if session_complete {
                self.complete();
            }
            AnswerOutcome::Correct {
                first_try,
                session_complete,
            }
        } else {
            self.has_wrong_attempt = true;
            let repeated = self.wrong_answers.iter().any(|wrong| wrong == selected);
            if !repeated {
                self.wrong_answers.push(selected.to_string());
            }
            debug!(question_index, selected, repeated, "wrong answer");
            AnswerOutcome::Wrong { repeated }
        }
    }

    /// Advance past an accepted answer.
    ///
    /// Returns the next question, or `None` when there was nothing to settle
    /// (still awaiting an answer, not started, or completed).
    pub fn settle(&mut self) -> Result<Option<&Question>, QuizError> {
        if self.awaiting_answer {
            return Ok(None);
        }
        let (Some(mode), SessionPhase::InProgress { question_index }) = (self.mode, self.phase)
        else {
            return Ok(None);
        };
        let next = question_index + 1;
        if next >= self.total_questions {
            self.complete();
            return Ok(None);
        }
        self.present(mode, next).map(Some)
    }

    /// Score of a completed session.
    pub fn result(&self) -> Option<SessionResult> {
        match self.phase {
            SessionPhase::Completed => Some(SessionResult::new(
                self.correct_first_try,
                self.total_questions,
            )),
            _ => None,
        }
    }

    fn complete(&mut self) {
        self.phase = SessionPhase::Completed;
        self.awaiting_answer = false;
        if let Some(result) = self.result() {
            info!(
                mode = ?self.mode,
                percentage = result.percentage,
                correct_first_try = result.correct_first_try,
                total = result.total_questions,
                "session completed"
            );
        }
    }

    fn present(&mut self, mode: GameMode, index: usize) -> Result<&Question, QuizError> {
        let context = schedule::context_for(mode, index);
        let draft = self.build(mode, &context)?;

        self.phase = SessionPhase::InProgress {
            question_index: index,
        };
        self.has_wrong_attempt = false;
        self.wrong_answers.clear();
        self.awaiting_answer = true;
        debug!(index, answer = %draft.correct_answer, "question presented");
        Ok(&*self
            .current
            .insert(Question::from_draft(index, context, draft)))
    }

    fn build(&mut self, mode: GameMode, context: &QuestionContext) -> Result<QuestionDraft, QuizError> {
        let rng = &mut self.rng;
        let draft = match mode {
            GameMode::LetterCase | GameMode::LetterCaseHard => {
                let alphabet = mode.alphabet();
                let letter = self.used_letters.select_next(alphabet, rng)?;
                builder::letter_question(letter, alphabet, rng)
            }
            GameMode::ClockHour => {
                let hour = self.used_hours.select_next(&HOURS, rng)?;
                let minute = match context.minute_hand {
                    MinuteHand::Hidden => None,
                    MinuteHand::NearTheHour => Some(if rng.gen_bool(0.5) {
                        MinutePosition::FIVE_PAST
                    } else {
                        MinutePosition::FIVE_TO
                    }),
                    MinuteHand::OnTheHour | MinuteHand::Positioned => Some(MinutePosition::WHOLE),
                };
                builder::hour_question(hour, minute, rng)
            }
            GameMode::HalfHour => {
                let hour = self.used_hours.select_next(&HOURS, rng)?;
                let half = match context.half_hour {
                    HalfHourRule::Whole => false,
                    HalfHourRule::Half => true,
                    HalfHourRule::Either => rng.gen_bool(0.5),
                };
                let minute_hand_visible = context.minute_hand != MinuteHand::Hidden;
                builder::whole_or_half_question(
                    hour,
                    half,
                    minute_hand_visible,
                    context.tricky_distractor,
                    rng,
                )
            }
            GameMode::MinuteHand | GameMode::MinuteHandHard => {
                let allowed = context.allowed_positions;
                let position = self.used_positions.select_next(allowed, rng)?;
                let hour_hand = match context.hour_hand {
                    HourHand::Hidden => None,
                    HourHand::Target | HourHand::Unrelated => {
                        Some(HOURS[rng.gen_range(0..HOURS.len())])
                    }
                };
                builder::minute_question(position, allowed, hour_hand, rng)
            }
            GameMode::HourAndMinute => {
                let allowed = context.allowed_positions;
                let position = self.used_positions.select_next(allowed, rng)?;
                let hour = self.used_hours.select_next(&HOURS, rng)?;
                builder::time_question(position, hour, allowed, rng)
            }
        };
        Ok(draft)
    }
}

/// Start a session of `mode` with `settings`.
///
/// Pass a seeded `rng` for reproducible question order.
pub fn start_session(
    mode: GameMode,
    settings: &QuizSettings,
    rng: Option<StdRng>,
) -> Result<QuizSession, QuizError> {
    let rng = rng.unwrap_or_else(StdRng::from_entropy);
    let mut session = QuizSession::with_rng(settings.clone(), rng);
    session.start(mode)?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::{ALL_POSITIONS, QUARTERS, WHOLE_AND_HALF},
        session::models::Target,
    };
    use anyhow::Result;

    fn settings() -> QuizSettings {
        QuizSettings::default()
    }

    fn seeded(mode: GameMode, seed: u64) -> Result<QuizSession> {
        Ok(start_session(mode, &settings(), Some(StdRng::seed_from_u64(seed)))?)
    }

    fn wrong_option(session: &QuizSession) -> String {
        let question = session.current_question().expect("question");
        question
            .options
            .iter()
            .find(|option| !question.is_correct(option))
            .cloned()
            .expect("a wrong option")
    }

    fn answer_correctly(session: &mut QuizSession) -> AnswerOutcome {
        let answer = session
            .current_question()
            .expect("question")
            .correct_answer
            .clone();
        session.submit_answer(&answer)
    }

    /// Play `mode` to the end, answering wrong first on the listed indices.
    fn play(mode: GameMode, seed: u64, wrong_first: &[usize]) -> Result<(QuizSession, Vec<Question>)> {
        let mut session = seeded(mode, seed)?;
        let mut seen = Vec::new();
        loop {
            let question = session.current_question().expect("question").clone();
            if wrong_first.contains(&question.index) {
                let wrong = wrong_option(&session);
                assert_eq!(session.submit_answer(&wrong), AnswerOutcome::Wrong { repeated: false });
            }
            seen.push(question);
            match answer_correctly(&mut session) {
                AnswerOutcome::Correct {
                    session_complete: true,
                    ..
                } => break,
                AnswerOutcome::Correct { .. } => {
                    session.settle()?;
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }
        Ok((session, seen))
    }

    #[test]
    fn every_mode_plays_to_completion() -> Result<()> {
        for mode in GameMode::ALL {
            for seed in 0..5 {
                let (session, questions) = play(mode, seed, &[])?;
                assert_eq!(questions.len(), 10, "{mode}");
                assert_eq!(session.phase(), SessionPhase::Completed);
                let result = session.result().expect("result");
                assert_eq!(result.percentage, 100);

                for question in &questions {
                    let hits = question
                        .options
                        .iter()
                        .filter(|option| **option == question.correct_answer)
                        .count();
                    assert_eq!(hits, 1, "{mode} {question:?}");
                    let mut unique = question.options.clone();
                    unique.sort();
                    unique.dedup();
                    assert_eq!(unique.len(), question.options.len());
                    if mode == GameMode::HourAndMinute {
                        assert!((2..=4).contains(&question.options.len()));
                    } else {
                        assert_eq!(question.options.len(), 4, "{mode} {question:?}");
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn first_try_scoring_ignores_retries() -> Result<()> {
        let (session, _) = play(GameMode::ClockHour, 11, &[0, 2, 4, 6, 8])?;
        let result = session.result().expect("result");
        assert_eq!(result.correct_first_try, 5);
        assert_eq!(result.percentage, 50);
        assert!(result.passed(session.settings().pass_threshold));
        Ok(())
    }

    #[test]
    fn wrong_then_right_is_not_first_try() -> Result<()> {
        let mut session = seeded(GameMode::LetterCase, 2)?;
        let wrong = wrong_option(&session);
        assert_eq!(session.submit_answer(&wrong), AnswerOutcome::Wrong { repeated: false });
        assert_eq!(session.submit_answer(&wrong), AnswerOutcome::Wrong { repeated: true });
        assert_eq!(session.wrong_answers(), &[wrong]);
        assert!(session.is_awaiting_answer());
        assert_eq!(
            answer_correctly(&mut session),
            AnswerOutcome::Correct {
                first_try: false,
                session_complete: false
            }
        );
        assert_eq!(session.correct_first_try(), 0);
        Ok(())
    }

    #[test]
    fn answers_are_ignored_while_locked() -> Result<()> {
        let mut session = seeded(GameMode::HalfHour, 4)?;
        assert!(matches!(answer_correctly(&mut session), AnswerOutcome::Correct { first_try: true, .. }));
        let snapshot = session.current_question().cloned();

        assert_eq!(answer_correctly(&mut session), AnswerOutcome::Ignored);
        let wrong = wrong_option(&session);
        assert_eq!(session.submit_answer(&wrong), AnswerOutcome::Ignored);
        assert_eq!(session.correct_first_try(), 1);
        assert_eq!(session.question_index(), Some(0));
        assert_eq!(session.current_question().cloned(), snapshot);

        let next = session.settle()?.expect("next question").clone();
        assert_eq!(next.index, 1);
        assert!(session.is_awaiting_answer());
        assert!(!session.has_wrong_attempt());
        Ok(())
    }

    #[test]
    fn settle_is_a_no_op_while_awaiting() -> Result<()> {
        let mut session = seeded(GameMode::MinuteHand, 9)?;
        assert!(session.settle()?.is_none());
        assert_eq!(session.question_index(), Some(0));

        let mut idle = QuizSession::with_rng(settings(), StdRng::seed_from_u64(1));
        assert_eq!(idle.phase(), SessionPhase::NotStarted);
        assert_eq!(idle.submit_answer("a"), AnswerOutcome::Ignored);
        assert!(idle.settle()?.is_none());
        assert!(idle.result().is_none());
        Ok(())
    }

    #[test]
    fn completed_session_ignores_input_and_restarts_clean() -> Result<()> {
        let (mut session, _) = play(GameMode::LetterCaseHard, 6, &[1])?;
        assert_eq!(session.result().map(|r| r.percentage), Some(90));
        assert_eq!(session.submit_answer("a"), AnswerOutcome::Ignored);
        assert!(session.settle()?.is_none());

        let first = session.start(GameMode::LetterCaseHard)?.clone();
        assert_eq!(first.index, 0);
        assert_eq!(session.correct_first_try(), 0);
        assert!(session.result().is_none());
        Ok(())
    }

    #[test]
    fn disabled_mode_cannot_start() {
        let mut reduced = settings();
        reduced.enabled_modes = vec![GameMode::LetterCase, GameMode::ClockHour, GameMode::HalfHour];
        let outcome = start_session(GameMode::HourAndMinute, &reduced, None);
        assert!(matches!(outcome, Err(QuizError::ModeDisabled(GameMode::HourAndMinute))));
    }

    #[test]
    fn single_question_session_completes_on_first_correct() -> Result<()> {
        let mut short = settings();
        short.questions.clock = 1;
        let mut session = start_session(GameMode::ClockHour, &short, Some(StdRng::seed_from_u64(0)))?;
        let outcome = answer_correctly(&mut session);
        assert!(outcome.is_correct());
        assert!(outcome.session_complete());
        assert_eq!(
            outcome,
            AnswerOutcome::Correct {
                first_try: true,
                session_complete: true
            }
        );
        assert_eq!(session.result().map(|r| r.percentage), Some(100));
        Ok(())
    }

    #[test]
    fn letters_do_not_repeat_within_a_cycle() -> Result<()> {
        let (_, questions) = play(GameMode::LetterCase, 17, &[])?;
        let mut letters: Vec<char> = questions
            .iter()
            .filter_map(|question| match question.target {
                Target::Letter(letter) => Some(letter),
                _ => None,
            })
            .collect();
        letters.sort();
        letters.dedup();
        assert_eq!(letters.len(), 10);
        Ok(())
    }

    #[test]
    fn hour_game_follows_its_schedule() -> Result<()> {
        for seed in 0..10 {
            let (_, questions) = play(GameMode::ClockHour, seed, &[])?;
            for question in &questions {
                let reading = question.clock.expect("clock reading");
                let Target::Hour { shown, answer } = question.target else {
                    panic!("unexpected target {:?}", question.target);
                };
                match question.index {
                    0..=3 => {
                        assert!(!reading.minute_hand_visible);
                        assert_eq!(shown, answer);
                    }
                    4..=7 => assert_eq!(reading.minute_numeral(), 12),
                    _ => {
                        let minute = reading.minute_numeral();
                        assert!(minute == 1 || minute == 11);
                        if minute == 11 {
                            assert_eq!(answer, crate::clock::next_hour(shown));
                        } else {
                            assert_eq!(answer, shown);
                        }
                    }
                }
                assert_eq!(question.correct_answer, answer.to_string());
            }
        }
        Ok(())
    }

    #[test]
    fn half_hour_game_closes_with_tricky_halves() -> Result<()> {
        for seed in 0..10 {
            let (_, questions) = play(GameMode::HalfHour, seed, &[])?;
            for question in &questions[8..] {
                let Target::WholeOrHalf { shown, answer, half } = question.target else {
                    panic!("unexpected target {:?}", question.target);
                };
                assert!(half);
                assert_eq!(answer, crate::clock::next_hour(shown));
                let trap = format!("HALV {shown}");
                assert!(question.options.contains(&trap), "{question:?}");
            }
            for question in &questions[..2] {
                assert!(!question.clock.expect("clock reading").minute_hand_visible);
                assert!(question.correct_answer.starts_with("HEL "));
            }
        }
        Ok(())
    }

    #[test]
    fn minute_positions_stay_within_their_tier() -> Result<()> {
        for mode in [GameMode::MinuteHand, GameMode::MinuteHandHard, GameMode::HourAndMinute] {
            for seed in 0..10 {
                let (_, questions) = play(mode, seed, &[])?;
                for question in &questions {
                    let position = match question.target {
                        Target::Minute(position) => position,
                        Target::Time { position, .. } => position,
                        other => panic!("unexpected target {other:?}"),
                    };
                    assert!(question.context.allowed_positions.contains(&position));
                }
            }
        }

        let (_, questions) = play(GameMode::MinuteHand, 3, &[])?;
        let opening: Vec<_> = questions[..2]
            .iter()
            .map(|question| question.target)
            .collect();
        assert!(opening.contains(&Target::Minute(WHOLE_AND_HALF[0])));
        assert!(opening.contains(&Target::Minute(WHOLE_AND_HALF[1])));
        assert!(questions[2..5]
            .iter()
            .all(|question| question.context.allowed_positions == &QUARTERS));
        assert!(questions[5..]
            .iter()
            .all(|question| question.context.allowed_positions == &ALL_POSITIONS));
        assert!(questions
            .iter()
            .all(|question| !question.clock.expect("clock reading").hour_hand_visible));
        Ok(())
    }

    #[test]
    fn same_seed_same_questions() -> Result<()> {
        let (_, first) = play(GameMode::HourAndMinute, 42, &[])?;
        let (_, second) = play(GameMode::HourAndMinute, 42, &[])?;
        assert_eq!(first, second);
        Ok(())
    }
}
