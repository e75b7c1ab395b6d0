//! Results screen.
//!
//! This module contains the types used once a level has ended:
//! - `LevelCompletion` - outcome reported by the game
//! - `DiffCalculator` - difference against the configured reference
//! - `ResultsTextModel` - percentage/score text pieces
//! - `ResultsController` - assembles the four results text fields

mod controller;
mod diff;
mod level;
mod text;

pub use controller::*;
pub use diff::*;
pub use level::*;
pub use text::*;
