use serde::{Deserialize, Serialize};

use crate::score::DEFAULT_DECIMAL_PRECISION;

/// Settings of the live in-game percentage counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub decimal_precision: u32,
    pub enable_label: bool,
    /// Show the label as a separate line above the count instead of as a
    /// prefix.
    pub label_above_count: bool,
    pub label_text_above_count: String,
    pub label_offset_above_count: f32,
    pub label_size_above_count: f32,
    pub label_text_prefix: String,
    pub percentage_size: f32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            decimal_precision: DEFAULT_DECIMAL_PRECISION,
            enable_label: true,
            label_above_count: false,
            label_text_above_count: "FC Percentage".to_string(),
            label_offset_above_count: 0.0,
            label_size_above_count: 0.85,
            label_text_prefix: "FC : ".to_string(),
            percentage_size: 1.0,
        }
    }
}
