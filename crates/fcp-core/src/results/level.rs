use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    IntoStaticStr,
)]
pub enum LevelEndState {
    #[default]
    Cleared,
    Failed,
    /// Quit or restarted before the end of the song.
    Incomplete,
}

/// Outcome of a finished level, as reported by the game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelCompletion {
    pub end_state: LevelEndState,
    pub full_combo: bool,
    /// Final score with modifiers applied.
    pub modified_score: i32,
    /// Highest score the level allows.
    pub max_score: i32,
    /// Best score stored before this run, if the level was played before.
    pub previous_highscore: Option<i32>,
}

impl LevelCompletion {
    pub fn is_cleared(&self) -> bool {
        self.end_state == LevelEndState::Cleared
    }

    /// Best score after this run has been taken into account. Only cleared
    /// runs can set a highscore.
    pub fn updated_highscore(&self) -> Option<i32> {
        if !self.is_cleared() {
            return self.previous_highscore;
        }
        Some(match self.previous_highscore {
            Some(previous) => previous.max(self.modified_score),
            None => self.modified_score,
        })
    }
}
