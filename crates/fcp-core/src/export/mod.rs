//! Output of counter and results text outside the game.

mod stream;

pub use stream::*;
