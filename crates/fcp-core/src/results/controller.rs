use serde::Serialize;
use tracing::debug;

use crate::config::ResultsConfig;
use crate::score::ScoreManager;

use super::{LevelCompletion, ResultsTextModel};

/// The four text fields shown on the results screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultsText {
    pub score: String,
    pub score_diff: String,
    pub percentage: String,
    pub percentage_diff: String,
}

impl ResultsText {
    pub fn is_empty(&self) -> bool {
        self.score.is_empty()
            && self.score_diff.is_empty()
            && self.percentage.is_empty()
            && self.percentage_diff.is_empty()
    }
}

/// Fills the results screen when it is shown.
#[derive(Debug, Clone)]
pub struct ResultsController {
    config: ResultsConfig,
}

impl ResultsController {
    pub fn new(config: ResultsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResultsConfig {
        &self.config
    }

    /// Handle the results view becoming active.
    ///
    /// Text is only produced for cleared levels; anything else clears it.
    pub fn on_activated(
        &self,
        manager: &mut ScoreManager,
        level: Option<&LevelCompletion>,
    ) -> ResultsText {
        let Some(level) = level else {
            debug!("No level completion results, clearing results text");
            return ResultsText::default();
        };

        manager.notify_song_ended(level.modified_score);

        if level.is_cleared() {
            self.build_text(manager, level)
        } else {
            ResultsText::default()
        }
    }

    pub fn build_text(&self, manager: &ScoreManager, level: &LevelCompletion) -> ResultsText {
        let model = ResultsTextModel::new(manager, &self.config, level);
        let (percentage, percentage_diff) = self.percentage_text(&model, level.full_combo);
        let (score, score_diff) = self.score_text(&model, level.full_combo);
        ResultsText {
            score,
            score_diff,
            percentage,
            percentage_diff,
        }
    }

    fn show_difference(&self, model: &ResultsTextModel<'_>) -> bool {
        self.config.enable_score_percentage_difference && model.has_valid_difference()
    }

    fn percentage_text(&self, model: &ResultsTextModel<'_>, full_combo: bool) -> (String, String) {
        let mut text = Vec::new();
        let mut diff = Vec::new();

        if self.config.percentage_total_mode.is_active(full_combo) {
            text.push(model.total_percentage_text());
            if self.show_difference(model) {
                diff.push(model.total_percentage_diff_text());
            }
        }
        if self.config.percentage_split_mode.is_active(full_combo) {
            text.push(model.split_percentage_text());
            if self.show_difference(model) {
                diff.push(model.split_percentage_diff_text());
            }
        }

        let mut text = text.join(" ");
        if !text.is_empty() && self.config.enable_label.percentage_enabled() {
            text.insert_str(0, &self.config.advanced.percentage_prefix_text);
        }

        (text.trim_end().to_string(), diff.join(" ").trim_end().to_string())
    }

    fn score_text(&self, model: &ResultsTextModel<'_>, full_combo: bool) -> (String, String) {
        if !self.config.score_total_mode.is_active(full_combo) {
            return (String::new(), String::new());
        }

        let mut text = model.score_text();
        if self.config.enable_label.score_enabled() {
            text.insert_str(0, &self.config.advanced.score_prefix_text);
        }

        let diff = if self.show_difference(model) {
            model.score_diff_text()
        } else {
            String::new()
        };

        // Trimmed like the percentage pieces; prefix spacing is kept.
        (text.trim_end().to_string(), diff.trim_end().to_string())
    }
}
