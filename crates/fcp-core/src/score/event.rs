use serde::{Deserialize, Serialize};

use super::{ColorType, ScoreManager};

/// Note event reported by the game during a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoteEvent {
    /// A note was cut and its final score is known.
    Cut {
        color: ColorType,
        score: i32,
        multiplier: i32,
    },
    /// A previously reported cut has to be taken back.
    Undo {
        color: ColorType,
        score: i32,
        multiplier: i32,
        #[serde(default)]
        reduce_max: bool,
    },
    /// A note was missed or bad-cut.
    Miss {
        color: ColorType,
        max_score: i32,
        multiplier: i32,
    },
}

impl NoteEvent {
    pub fn apply(&self, manager: &mut ScoreManager) {
        match *self {
            Self::Cut {
                color,
                score,
                multiplier,
            } => manager.add_score(color, score, multiplier),
            Self::Undo {
                color,
                score,
                multiplier,
                reduce_max,
            } => manager.subtract_score(color, score, multiplier, reduce_max),
            Self::Miss {
                color,
                max_score,
                multiplier,
            } => manager.add_missed_max(color, max_score, multiplier),
        }
    }
}
