#![allow(missing_docs)]

//! Audio cue vocabulary and the playback seam.
//!
//! The engine never plays sound itself. Hosts implement [`CuePlayer`] and
//! route cues through a [`CueDispatcher`], which honours the sound preference
//! and treats every playback failure as non-fatal.

use thiserror::Error;
use tracing::debug;

use crate::mode::GameMode;

/// A semantic sound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Correct,
    Wrong,
    /// Spoken instructions played when a game starts.
    Instruction(GameMode),
    /// The name of an uppercase letter.
    Letter(char),
}

impl AudioCue {
    /// Event name such as `instruction-helhalv` or `letter-Å`.
    pub fn event_name(&self) -> String {
        match self {
            AudioCue::Correct => "correct".to_string(),
            AudioCue::Wrong => "wrong".to_string(),
            AudioCue::Instruction(mode) => format!("instruction-{}", instruction_key(*mode)),
            AudioCue::Letter(letter) => format!("letter-{letter}"),
        }
    }

    /// Relative path of the sound file backing the cue.
    pub fn asset_path(&self) -> String {
        match self {
            AudioCue::Correct => "audio/correct.mp3".to_string(),
            AudioCue::Wrong => "audio/wrong.mp3".to_string(),
            AudioCue::Instruction(mode) => {
                let file = match mode {
                    GameMode::LetterCase | GameMode::LetterCaseHard => "tryck_pa_lilla",
                    GameMode::ClockHour => "vilken_timme",
                    GameMode::HalfHour => "helhalv",
                    GameMode::MinuteHand | GameMode::MinuteHandHard => "minutvisaren",
                    GameMode::HourAndMinute => "hurmycketklockan",
                };
                format!("audio/{file}.mp3")
            }
            AudioCue::Letter(letter) => format!("audio/letter-{}.mp3", letter_file_key(*letter)),
        }
    }

    /// Playback volume in `0.0..=1.0`.
    pub fn volume(&self) -> f32 {
        match self {
            AudioCue::Correct => 0.5,
            AudioCue::Wrong => 0.4,
            AudioCue::Instruction(_) | AudioCue::Letter(_) => 0.7,
        }
    }
}

fn instruction_key(mode: GameMode) -> &'static str {
    match mode {
        GameMode::LetterCase | GameMode::LetterCaseHard => "letter",
        GameMode::ClockHour => "clock",
        GameMode::HalfHour => "helhalv",
        GameMode::MinuteHand | GameMode::MinuteHandHard => "minutvisaren",
        GameMode::HourAndMinute => "timochminutvisaren",
    }
}

/// ASCII file-name key for a letter: `Å` becomes `aa`, `Ä` `ae`, `Ö` `oe`.
pub fn letter_file_key(letter: char) -> String {
    letter
        .to_lowercase()
        .map(|ch| match ch {
            'å' => "aa".to_string(),
            'ä' => "ae".to_string(),
            'ö' => "oe".to_string(),
            other => other.to_string(),
        })
        .collect()
}

/// Why a cue could not be played.
#[derive(Debug, Error)]
pub enum CueError {
    #[error("no sound available for {0}")]
    Missing(String),
    #[error("audio output failed: {0}")]
    Output(#[from] std::io::Error),
}

/// Something that can make a cue audible.
pub trait CuePlayer {
    /// Play `cue` at `volume` (`0.0..=1.0`).
    fn play(&self, cue: &AudioCue, volume: f32) -> Result<(), CueError>;
}

/// Routes cues to a player when sound is enabled.
pub struct CueDispatcher<P> {
    player: P,
    enabled: bool,
}

impl<P: CuePlayer> CueDispatcher<P> {
    pub fn new(player: P, enabled: bool) -> Self {
        Self { player, enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Play `cue`; returns whether it was handed to the player successfully.
    pub fn cue(&self, cue: AudioCue) -> bool {
        if !self.enabled {
            return false;
        }
        match self.player.play(&cue, cue.volume()) {
            Ok(()) => true,
            Err(err) => {
                debug!(cue = %cue.event_name(), %err, "cue not played");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        played: RefCell<Vec<(String, f32)>>,
    }

    impl CuePlayer for &Recorder {
        fn play(&self, cue: &AudioCue, volume: f32) -> Result<(), CueError> {
            if let AudioCue::Letter('Q') = cue {
                return Err(CueError::Missing(cue.event_name()));
            }
            self.played.borrow_mut().push((cue.event_name(), volume));
            Ok(())
        }
    }

    #[test]
    fn event_names_match_the_cue_vocabulary() {
        assert_eq!(AudioCue::Correct.event_name(), "correct");
        assert_eq!(
            AudioCue::Instruction(GameMode::HourAndMinute).event_name(),
            "instruction-timochminutvisaren"
        );
        assert_eq!(AudioCue::Letter('B').event_name(), "letter-B");
    }

    #[test]
    fn swedish_letters_map_to_ascii_files() {
        assert_eq!(AudioCue::Letter('Å').asset_path(), "audio/letter-aa.mp3");
        assert_eq!(AudioCue::Letter('Ä').asset_path(), "audio/letter-ae.mp3");
        assert_eq!(AudioCue::Letter('Ö').asset_path(), "audio/letter-oe.mp3");
        assert_eq!(AudioCue::Letter('K').asset_path(), "audio/letter-k.mp3");
        assert_eq!(
            AudioCue::Instruction(GameMode::ClockHour).asset_path(),
            "audio/vilken_timme.mp3"
        );
    }

    #[test]
    fn dispatcher_respects_preference_and_swallows_failures() {
        let recorder = Recorder::default();
        let mut dispatcher = CueDispatcher::new(&recorder, false);
        assert!(!dispatcher.cue(AudioCue::Correct));
        assert!(recorder.played.borrow().is_empty());

        dispatcher.set_enabled(true);
        assert!(dispatcher.cue(AudioCue::Wrong));
        assert!(!dispatcher.cue(AudioCue::Letter('Q')));
        assert_eq!(*recorder.played.borrow(), vec![("wrong".to_string(), 0.4)]);
    }

    #[test]
    fn player_receives_the_cue_volume() {
        let recorder = Recorder::default();
        let dispatcher = CueDispatcher::new(&recorder, true);
        dispatcher.cue(AudioCue::Correct);
        dispatcher.cue(AudioCue::Instruction(GameMode::HalfHour));
        dispatcher.cue(AudioCue::Letter('Ö'));
        let volumes: Vec<f32> = recorder.played.borrow().iter().map(|(_, v)| *v).collect();
        assert_eq!(volumes, vec![0.5, 0.7, 0.7]);
    }
}
