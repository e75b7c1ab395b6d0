//! Live full-combo percentage counter.
//!
//! The counter formats the accumulator's percentage as `{prefix}{value}%`
//! and pushes the text into a [`TextSink`] every time the score changes.

use tracing::{error, info};

use crate::config::CounterConfig;
use crate::error::Result;
use crate::score::{ScoreManager, SubscriptionId, format_fixed};

/// Percentage shown before the first note is scored.
const DEFAULT_PERCENTAGE: f64 = 100.0;

/// Font size reduction applied to the count when the label is a prefix.
const PREFIX_LABEL_SIZE_REDUCTION: f32 = 0.15;

/// Destination of rendered counter text (a text component, a file, ...).
pub trait TextSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

impl TextSink for String {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

/// Label drawn as its own line above the count.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub text: String,
    pub offset_y: f32,
    pub size_scale: f32,
}

/// How the counter texts should be laid out by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterLayout {
    pub label: Option<LabelLayout>,
    /// Multiplier for the count's font size.
    pub percentage_size_scale: f32,
}

#[derive(Debug, Clone)]
pub struct PercentageCounter {
    prefix: String,
    decimal_precision: u32,
    layout: CounterLayout,
}

impl PercentageCounter {
    pub fn new(config: &CounterConfig) -> Self {
        let mut prefix = String::new();
        let mut label = None;
        if config.enable_label {
            if config.label_above_count {
                label = Some(LabelLayout {
                    text: config.label_text_above_count.clone(),
                    offset_y: config.label_offset_above_count,
                    size_scale: config.label_size_above_count,
                });
            } else {
                prefix = config.label_text_prefix.clone();
            }
        }

        let mut percentage_size_scale = config.percentage_size;
        if config.enable_label && !config.label_above_count {
            percentage_size_scale -= PREFIX_LABEL_SIZE_REDUCTION;
        }

        Self {
            prefix,
            decimal_precision: config.decimal_precision,
            layout: CounterLayout {
                label,
                percentage_size_scale,
            },
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn layout(&self) -> &CounterLayout {
        &self.layout
    }

    pub fn format_percentage(&self, percentage: f64) -> String {
        format!(
            "{}{}%",
            self.prefix,
            format_fixed(percentage, self.decimal_precision)
        )
    }

    pub fn initial_text(&self) -> String {
        self.format_percentage(DEFAULT_PERCENTAGE)
    }

    pub fn render(&self, manager: &ScoreManager) -> String {
        self.format_percentage(manager.percentage_with_precision(self.decimal_precision))
    }

    /// Write the initial text into `sink`, then keep it updated on every
    /// score change until [`Self::detach`] is called.
    pub fn attach<S>(&self, manager: &mut ScoreManager, mut sink: S) -> SubscriptionId
    where
        S: TextSink + 'static,
    {
        info!("Starting percentage counter");

        if let Err(e) = sink.set_text(&self.initial_text()) {
            error!("Failed to set counter text: {}", e);
        }

        let counter = self.clone();
        manager.subscribe(move |manager| {
            if let Err(e) = sink.set_text(&counter.render(manager)) {
                error!("Failed to set counter text: {}", e);
            }
        })
    }

    pub fn detach(&self, manager: &mut ScoreManager, id: SubscriptionId) -> bool {
        manager.unsubscribe(id)
    }
}
