//! Score accumulation.
//!
//! This module contains the session score state and its inputs:
//! - `ScoreManager` - two-lane score accumulator with change notifications
//! - `ColorType` - saber color a note belongs to
//! - `NoteEvent` - cut/undo/miss events reported by the game
//! - rounding and fixed-precision formatting helpers

mod color;
mod event;
mod manager;
pub mod rounding;

pub use color::*;
pub use event::*;
pub use manager::*;
pub use rounding::{MAX_DECIMAL_PRECISION, format_fixed, format_signed, round_to_precision};

/// Decimal precision used when none is configured.
pub const DEFAULT_DECIMAL_PRECISION: u32 = 2;
