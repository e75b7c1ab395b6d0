use crate::config::{DiffModel, ResultsConfig};
use crate::score::{ScoreManager, format_signed, round_to_precision};

use super::LevelCompletion;

/// Compares this run's full-combo values with a reference result.
///
/// The reference depends on the [`DiffModel`]:
/// - `CurrentResultDiff`: the score the run actually got
/// - `OldHighscoreDiff`: the highscore stored before the run
/// - `UpdatedHighscoreDiff`: the highscore after the run was counted
#[derive(Debug, Clone, Copy)]
pub struct DiffCalculator<'a> {
    model: DiffModel,
    manager: &'a ScoreManager,
    config: &'a ResultsConfig,
    level: &'a LevelCompletion,
}

impl<'a> DiffCalculator<'a> {
    pub fn new(
        model: DiffModel,
        manager: &'a ScoreManager,
        config: &'a ResultsConfig,
        level: &'a LevelCompletion,
    ) -> Self {
        Self {
            model,
            manager,
            config,
            level,
        }
    }

    /// Use the model named in `config`, falling back to `OldHighscoreDiff`.
    pub fn from_config(
        manager: &'a ScoreManager,
        config: &'a ResultsConfig,
        level: &'a LevelCompletion,
    ) -> Self {
        Self::new(config.diff_model(), manager, config, level)
    }

    pub fn model(&self) -> DiffModel {
        self.model
    }

    pub fn reference_score(&self) -> Option<i32> {
        match self.model {
            DiffModel::CurrentResultDiff => Some(self.level.modified_score),
            DiffModel::OldHighscoreDiff => self.level.previous_highscore,
            DiffModel::UpdatedHighscoreDiff => self.level.updated_highscore(),
        }
    }

    /// Reference score as a percentage of the level's unmodified maximum.
    ///
    /// Reference scores include modifiers, so they are divided by this run's
    /// modifier multiplier first. That keeps the percentage diff on the same
    /// scale as the displayed percentage, while the score diff stays modified.
    pub fn reference_percentage(&self) -> Option<f64> {
        if self.level.max_score <= 0 {
            return None;
        }
        let score = self.reference_score()? as f64 / self.manager.modifier_multiplier();
        Some(round_to_precision(
            score / self.level.max_score as f64 * 100.0,
            self.config.decimal_precision,
        ))
    }

    /// False when there is nothing to compare against, e.g. the first play
    /// of a level with `OldHighscoreDiff`.
    pub fn has_valid_difference(&self) -> bool {
        self.reference_percentage().is_some()
    }

    pub fn current_percentage(&self) -> f64 {
        self.manager
            .percentage_with_precision(self.config.decimal_precision)
    }

    pub fn current_score(&self) -> i32 {
        self.manager.fc_score()
    }

    pub fn percentage_diff(&self) -> Option<f64> {
        let reference = self.reference_percentage()?;
        Some(self.round(self.current_percentage() - reference))
    }

    /// Per-lane percentage minus the reference percentage.
    pub fn split_percentage_diffs(&self) -> Option<(f64, f64)> {
        let reference = self.reference_percentage()?;
        let (a, b) = self
            .manager
            .split_percentages(self.config.decimal_precision);
        Some((self.round(a - reference), self.round(b - reference)))
    }

    /// Widened to `i64` so extreme references cannot overflow.
    pub fn score_diff(&self) -> Option<i64> {
        if !self.has_valid_difference() {
            return None;
        }
        Some(i64::from(self.current_score()) - i64::from(self.reference_score()?))
    }

    /// Signed percentage difference, e.g. `+2.30%`. Empty without a valid
    /// difference.
    pub fn percentage_diff_text(&self) -> String {
        self.percentage_diff()
            .map(|diff| self.format_percentage_diff(diff))
            .unwrap_or_default()
    }

    pub fn split_percentage_diff_texts(&self) -> Option<(String, String)> {
        let (a, b) = self.split_percentage_diffs()?;
        Some((self.format_percentage_diff(a), self.format_percentage_diff(b)))
    }

    /// Signed score difference, e.g. `-150`. Empty without a valid
    /// difference.
    pub fn score_diff_text(&self) -> String {
        self.score_diff()
            .map(|diff| format_signed(diff as f64, 0))
            .unwrap_or_default()
    }

    fn format_percentage_diff(&self, diff: f64) -> String {
        format!("{}%", format_signed(diff, self.config.decimal_precision))
    }

    fn round(&self, value: f64) -> f64 {
        round_to_precision(value, self.config.decimal_precision)
    }
}
