use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};
use tracing::error;

use crate::score::DEFAULT_DECIMAL_PRECISION;

/// When a results-screen section is shown.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    IntoStaticStr,
)]
pub enum ResultsViewMode {
    #[default]
    On,
    Off,
    /// Hidden when the run was a full combo, since it would only repeat the
    /// game's own score.
    OffWhenFullCombo,
}

impl ResultsViewMode {
    pub fn is_active(&self, full_combo: bool) -> bool {
        match self {
            Self::On => true,
            Self::Off => false,
            Self::OffWhenFullCombo => !full_combo,
        }
    }
}

/// Which results-screen sections get their prefix label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    IntoStaticStr,
)]
pub enum LabelOption {
    BothOff,
    #[default]
    BothOn,
    PercentageOn,
    ScoreOn,
}

impl LabelOption {
    pub fn percentage_enabled(&self) -> bool {
        matches!(self, Self::BothOn | Self::PercentageOn)
    }

    pub fn score_enabled(&self) -> bool {
        matches!(self, Self::BothOn | Self::ScoreOn)
    }
}

/// Reference point a difference is calculated against.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum DiffModel {
    CurrentResultDiff = 0,
    #[default]
    OldHighscoreDiff = 1,
    UpdatedHighscoreDiff = 2,
}

impl DiffModel {
    /// Resolve a configured model name. Unknown names are logged and fall
    /// back to the default model.
    pub fn from_name(name: &str) -> Self {
        match Self::from_str(name.trim()) {
            Ok(model) => model,
            Err(_) => {
                error!(
                    "Unable to get diff calculation model for value {:?}, using {}",
                    name,
                    Self::default().name()
                );
                Self::default()
            }
        }
    }

    /// Resolve a raw enum value, with the same fallback as [`Self::from_name`].
    pub fn from_u8(value: u8) -> Self {
        Self::from_repr(value).unwrap_or_else(|| {
            error!(
                "Unable to get diff calculation model for value {}, using {}",
                value,
                Self::default().name()
            );
            Self::default()
        })
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for DiffModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Text and color overrides for the results screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedResultsConfig {
    pub percentage_prefix_text: String,
    pub score_prefix_text: String,
    pub enable_diff_colors: bool,
    pub positive_diff_color: String,
    pub negative_diff_color: String,
    pub split_percentage_use_brackets: bool,
}

impl Default for AdvancedResultsConfig {
    fn default() -> Self {
        Self {
            percentage_prefix_text: "FC : ".to_string(),
            score_prefix_text: "FC : ".to_string(),
            enable_diff_colors: true,
            positive_diff_color: "#00B300".to_string(),
            negative_diff_color: "#FF0000".to_string(),
            split_percentage_use_brackets: true,
        }
    }
}

/// Settings of the results-screen text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsConfig {
    pub decimal_precision: u32,
    pub percentage_total_mode: ResultsViewMode,
    pub percentage_split_mode: ResultsViewMode,
    pub score_total_mode: ResultsViewMode,
    pub enable_label: LabelOption,
    pub enable_score_percentage_difference: bool,
    /// Kept as text so an unknown value degrades to the default model
    /// instead of failing the whole config.
    pub score_percentage_diff_model: String,
    pub advanced: AdvancedResultsConfig,
}

impl ResultsConfig {
    pub fn diff_model(&self) -> DiffModel {
        DiffModel::from_name(&self.score_percentage_diff_model)
    }
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            decimal_precision: DEFAULT_DECIMAL_PRECISION,
            percentage_total_mode: ResultsViewMode::On,
            percentage_split_mode: ResultsViewMode::Off,
            score_total_mode: ResultsViewMode::On,
            enable_label: LabelOption::BothOn,
            enable_score_percentage_difference: true,
            score_percentage_diff_model: DiffModel::default().name().to_string(),
            advanced: AdvancedResultsConfig::default(),
        }
    }
}
