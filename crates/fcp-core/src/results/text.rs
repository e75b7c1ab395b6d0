use crate::config::ResultsConfig;
use crate::score::{ScoreManager, format_fixed};

use super::{DiffCalculator, LevelCompletion};

/// Builds the individual pieces of results-screen text.
#[derive(Debug, Clone, Copy)]
pub struct ResultsTextModel<'a> {
    manager: &'a ScoreManager,
    config: &'a ResultsConfig,
    diff: DiffCalculator<'a>,
}

impl<'a> ResultsTextModel<'a> {
    pub fn new(
        manager: &'a ScoreManager,
        config: &'a ResultsConfig,
        level: &'a LevelCompletion,
    ) -> Self {
        Self {
            manager,
            config,
            diff: DiffCalculator::from_config(manager, config, level),
        }
    }

    pub fn diff(&self) -> &DiffCalculator<'a> {
        &self.diff
    }

    pub fn has_valid_difference(&self) -> bool {
        self.diff.has_valid_difference()
    }

    pub fn total_percentage_text(&self) -> String {
        format!(
            "{}%",
            format_fixed(
                self.manager
                    .percentage_with_precision(self.config.decimal_precision),
                self.config.decimal_precision
            )
        )
    }

    pub fn split_percentage_text(&self) -> String {
        let precision = self.config.decimal_precision;
        let (a, b) = self.manager.split_percentages(precision);
        self.bracket(format!(
            "{}% {}%",
            format_fixed(a, precision),
            format_fixed(b, precision)
        ))
    }

    pub fn score_text(&self) -> String {
        self.manager.fc_score().to_string()
    }

    pub fn total_percentage_diff_text(&self) -> String {
        match self.diff.percentage_diff() {
            Some(diff) => self.colorize(&self.diff.percentage_diff_text(), diff < 0.0),
            None => String::new(),
        }
    }

    pub fn split_percentage_diff_text(&self) -> String {
        let (Some((a, b)), Some((text_a, text_b))) = (
            self.diff.split_percentage_diffs(),
            self.diff.split_percentage_diff_texts(),
        ) else {
            return String::new();
        };
        self.bracket(format!(
            "{} {}",
            self.colorize(&text_a, a < 0.0),
            self.colorize(&text_b, b < 0.0)
        ))
    }

    pub fn score_diff_text(&self) -> String {
        match self.diff.score_diff() {
            Some(diff) => self.colorize(&self.diff.score_diff_text(), diff < 0),
            None => String::new(),
        }
    }

    fn bracket(&self, text: String) -> String {
        if self.config.advanced.split_percentage_use_brackets {
            format!("({})", text)
        } else {
            text
        }
    }

    /// Wrap in a rich-text color tag when diff colors are enabled.
    fn colorize(&self, text: &str, negative: bool) -> String {
        let advanced = &self.config.advanced;
        if !advanced.enable_diff_colors || text.is_empty() {
            return text.to_string();
        }
        let color = if negative {
            &advanced.negative_diff_color
        } else {
            &advanced.positive_diff_color
        };
        format!("<color={}>{}</color>", color, text)
    }
}
