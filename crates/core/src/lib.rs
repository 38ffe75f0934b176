#![warn(clippy::all, missing_docs)]

//! Core domain logic for Spelaspel, a quiz game for young learners.
//!
//! This crate hosts the letter and clock quiz engine: clock arithmetic,
//! Swedish time phrases, distractor generation, prompt rotation and the
//! session state machine, plus configuration and preference persistence
//! used by the terminal UI and any future frontends.

pub mod audio;
pub mod clock;
pub mod config;
pub mod distractor;
pub mod error;
pub mod mode;
pub mod preferences;
pub mod scoring;
pub mod selector;
pub mod session;

pub use audio::{AudioCue, CueDispatcher, CuePlayer};
pub use clock::{ClockReading, MinutePosition};
pub use config::{AppConfig, QuizSettings};
pub use error::QuizError;
pub use mode::{Area, GameMode};
pub use preferences::PreferenceStore;
pub use scoring::SessionResult;
pub use session::{start_session, AnswerOutcome, Question, QuizSession, SessionHandle, SessionPhase};
