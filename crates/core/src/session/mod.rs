#![allow(missing_docs)]

//! Quiz sessions: difficulty schedules, question building and the answer
//! state machine.

pub mod builder;
mod machine;
mod models;
pub mod schedule;

pub use machine::{start_session, AnswerOutcome, QuizSession, SessionPhase};
pub use models::{
    HalfHourRule, HourHand, MinuteHand, Question, QuestionContext, QuestionDraft, Target,
};

/// Session type hosts hold on to.
pub type SessionHandle = QuizSession<rand::rngs::StdRng>;
