//! # fcp-core
//!
//! Full-combo percentage tracking for Beat Saber.
//!
//! This crate provides:
//! - Two-lane (left/right saber) score accumulation with change notifications
//! - Live "percentage of max score" counter text
//! - Full-combo aware results text with differences against a reference score
//! - Configuration and stream-file output

pub mod config;
pub mod counter;
pub mod error;
pub mod export;
pub mod results;
pub mod score;

// Re-export from config module
pub use config::{
    AdvancedResultsConfig, Config, CounterConfig, DiffModel, LabelOption, ResultsConfig,
    ResultsViewMode,
};

// Re-export from counter module
pub use counter::{CounterLayout, LabelLayout, PercentageCounter, TextSink};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from export module
pub use export::{StreamOutput, StreamTextSink};

// Re-export from results module
pub use results::{
    DiffCalculator, LevelCompletion, LevelEndState, ResultsController, ResultsText,
    ResultsTextModel,
};

// Re-export from score module
pub use score::{ColorType, MAX_CUT_RAW_SCORE, NoteEvent, ScoreManager, SubscriptionId};
