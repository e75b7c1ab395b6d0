use std::fmt;

use tracing::{debug, warn};

use super::ColorType;
use super::rounding::{format_fixed, percentage_of, round_to_int, round_to_precision};

/// Highest raw score a single cut can award (before the combo multiplier).
pub const MAX_CUT_RAW_SCORE: i32 = 115;

/// Handle returned by [`ScoreManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ScoreListener = Box<dyn FnMut(&ScoreManager)>;

/// Counters saturate at the `i32` bounds instead of overflowing.
fn scaled(value: i32, multiplier: i32) -> i32 {
    value.saturating_mul(multiplier)
}

/// Two-lane score accumulator for one play session.
///
/// Tracks score and maximum achievable score per saber color. All derived
/// values are recomputed from the stored counters on every read.
///
/// `add_score` and `subtract_score` notify subscribers synchronously after
/// mutating; `add_missed_max` does not. Listeners receive the manager by
/// shared reference and cannot mutate it from inside a notification.
pub struct ScoreManager {
    score_a: i32,
    score_b: i32,
    max_score_a: i32,
    max_score_b: i32,
    max_missed_score_a: i32,
    max_missed_score_b: i32,
    song_end_score: Option<i32>,
    decimal_precision: u32,
    listeners: Vec<(SubscriptionId, ScoreListener)>,
    next_subscription: u64,
}

impl ScoreManager {
    pub fn new(decimal_precision: u32) -> Self {
        Self {
            score_a: 0,
            score_b: 0,
            max_score_a: 0,
            max_score_b: 0,
            max_missed_score_a: 0,
            max_missed_score_b: 0,
            song_end_score: None,
            decimal_precision,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Zero every counter. Subscriptions are kept.
    pub fn reset(&mut self) {
        self.score_a = 0;
        self.score_b = 0;
        self.max_score_a = 0;
        self.max_score_b = 0;
        self.max_missed_score_a = 0;
        self.max_missed_score_b = 0;
        self.song_end_score = None;
    }

    pub fn add_score(&mut self, color: ColorType, score: i32, multiplier: i32) {
        match color {
            ColorType::ColorA => {
                self.score_a = self.score_a.saturating_add(scaled(score, multiplier));
                self.max_score_a = self
                    .max_score_a
                    .saturating_add(scaled(MAX_CUT_RAW_SCORE, multiplier));
            }
            ColorType::ColorB => {
                self.score_b = self.score_b.saturating_add(scaled(score, multiplier));
                self.max_score_b = self
                    .max_score_b
                    .saturating_add(scaled(MAX_CUT_RAW_SCORE, multiplier));
            }
            ColorType::None => {
                warn!(
                    "add_score: ignoring score {} (multiplier {}), invalid color {}",
                    score, multiplier, color
                );
            }
        }

        self.notify();
    }

    pub fn subtract_score(
        &mut self,
        color: ColorType,
        score: i32,
        multiplier: i32,
        subtract_from_max_score: bool,
    ) {
        match color {
            ColorType::ColorA => {
                self.score_a = self.score_a.saturating_sub(scaled(score, multiplier));
                if subtract_from_max_score {
                    self.max_score_a = self
                        .max_score_a
                        .saturating_sub(scaled(MAX_CUT_RAW_SCORE, multiplier));
                }
            }
            ColorType::ColorB => {
                self.score_b = self.score_b.saturating_sub(scaled(score, multiplier));
                if subtract_from_max_score {
                    self.max_score_b = self
                        .max_score_b
                        .saturating_sub(scaled(MAX_CUT_RAW_SCORE, multiplier));
                }
            }
            ColorType::None => {
                warn!(
                    "subtract_score: ignoring score {} (multiplier {}), invalid color {}",
                    score, multiplier, color
                );
            }
        }

        self.notify();
    }

    /// Record the max score of a missed note. Only feeds the missed-score
    /// projection, so no notification is sent.
    pub fn add_missed_max(&mut self, color: ColorType, max_missed_score: i32, multiplier: i32) {
        match color {
            ColorType::ColorA => {
                self.max_missed_score_a = self
                    .max_missed_score_a
                    .saturating_add(scaled(max_missed_score, multiplier));
            }
            ColorType::ColorB => {
                self.max_missed_score_b = self
                    .max_missed_score_b
                    .saturating_add(scaled(max_missed_score, multiplier));
            }
            ColorType::None => {
                warn!(
                    "add_missed_max: ignoring missed score {} (multiplier {}), invalid color {}",
                    max_missed_score, multiplier, color
                );
            }
        }
    }

    /// Record the game's final score (with modifiers applied).
    pub fn notify_song_ended(&mut self, modified_score: i32) {
        debug!(
            "Song ended - modifiedScore = {}, scoreTotal = {}",
            modified_score,
            self.score_total()
        );
        self.song_end_score = Some(modified_score);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ScoreManager) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        debug!(
            "Score has updated - currentScore = {}, currentMaxScore = {}",
            self.score_total(),
            self.max_score_total()
        );

        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(&*self);
        }
        self.listeners = listeners;
    }

    pub fn decimal_precision(&self) -> u32 {
        self.decimal_precision
    }

    pub fn score_a(&self) -> i32 {
        self.score_a
    }

    pub fn score_b(&self) -> i32 {
        self.score_b
    }

    pub fn score_total(&self) -> i32 {
        self.score_a.saturating_add(self.score_b)
    }

    pub fn max_score_a(&self) -> i32 {
        self.max_score_a
    }

    pub fn max_score_b(&self) -> i32 {
        self.max_score_b
    }

    pub fn max_score_total(&self) -> i32 {
        self.max_score_a.saturating_add(self.max_score_b)
    }

    pub fn max_missed_score_a(&self) -> i32 {
        self.max_missed_score_a
    }

    pub fn max_missed_score_b(&self) -> i32 {
        self.max_missed_score_b
    }

    pub fn max_missed_score_total(&self) -> i32 {
        self.max_missed_score_a.saturating_add(self.max_missed_score_b)
    }

    /// Percentage of the max score reached, at the configured precision.
    ///
    /// Reads 100% while no note has been scored.
    pub fn percentage(&self) -> f64 {
        self.percentage_with_precision(self.decimal_precision)
    }

    pub fn percentage_with_precision(&self, precision: u32) -> f64 {
        round_to_precision(
            percentage_of(self.score_total() as f64, self.max_score_total() as f64),
            precision,
        )
    }

    /// `percentage()` formatted with exactly the configured number of decimals.
    pub fn percentage_text(&self) -> String {
        format_fixed(self.percentage(), self.decimal_precision)
    }

    /// Per-lane percentages `(ColorA, ColorB)`.
    pub fn split_percentages(&self, precision: u32) -> (f64, f64) {
        (
            round_to_precision(
                percentage_of(self.score_a as f64, self.max_score_a as f64),
                precision,
            ),
            round_to_precision(
                percentage_of(self.score_b as f64, self.max_score_b as f64),
                precision,
            ),
        )
    }

    /// Projected score of the missed notes, assuming they would have been cut
    /// as well as the ones that were scored.
    pub fn missed_score_total(&self) -> i32 {
        let max_score = self.max_score_total();
        let ratio = if max_score == 0 {
            1.0
        } else {
            self.score_total() as f64 / max_score as f64
        };
        round_to_int(ratio * self.max_missed_score_total() as f64)
    }

    pub fn score_total_including_missed(&self) -> i32 {
        self.score_total().saturating_add(self.missed_score_total())
    }

    pub fn song_end_score(&self) -> Option<i32> {
        self.song_end_score
    }

    /// Ratio between the game's final score and the accumulated score.
    ///
    /// 1.0 until the song has ended, and while either score is not positive.
    pub fn modifier_multiplier(&self) -> f64 {
        match self.song_end_score {
            Some(modified) if modified > 0 && self.score_total() > 0 => {
                modified as f64 / self.score_total() as f64
            }
            _ => 1.0,
        }
    }

    /// Full-combo score with the song's modifiers applied.
    pub fn fc_score(&self) -> i32 {
        round_to_int(self.score_total_including_missed() as f64 * self.modifier_multiplier())
    }
}

impl Default for ScoreManager {
    fn default() -> Self {
        Self::new(super::DEFAULT_DECIMAL_PRECISION)
    }
}

impl fmt::Debug for ScoreManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreManager")
            .field("score_a", &self.score_a)
            .field("score_b", &self.score_b)
            .field("max_score_a", &self.max_score_a)
            .field("max_score_b", &self.max_score_b)
            .field("max_missed_score_a", &self.max_missed_score_a)
            .field("max_missed_score_b", &self.max_missed_score_b)
            .field("song_end_score", &self.song_end_score)
            .field("decimal_precision", &self.decimal_precision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
