//! Integration tests for fcp-core
//!
//! These tests drive a whole play session through the public API: note
//! events into the score manager, the live counter, and the results screen.

use std::cell::RefCell;
use std::rc::Rc;

use fcp_core::{
    ColorType, Config, DiffModel, LevelCompletion, LevelEndState, NoteEvent, PercentageCounter,
    ResultsController, ScoreManager, TextSink,
};

#[derive(Clone, Default)]
struct CapturedText(Rc<RefCell<String>>);

impl TextSink for CapturedText {
    fn set_text(&mut self, text: &str) -> fcp_core::Result<()> {
        *self.0.borrow_mut() = text.to_string();
        Ok(())
    }
}

fn cut(color: ColorType, score: i32, multiplier: i32) -> NoteEvent {
    NoteEvent::Cut {
        color,
        score,
        multiplier,
    }
}

fn miss(color: ColorType, multiplier: i32) -> NoteEvent {
    NoteEvent::Miss {
        color,
        max_score: fcp_core::MAX_CUT_RAW_SCORE,
        multiplier,
    }
}

/// Test score accumulation properties
mod accumulation_tests {
    use super::*;

    #[test]
    fn test_score_total_is_sum_of_cuts() {
        let events = [
            (ColorType::ColorA, 110, 1),
            (ColorType::ColorB, 95, 2),
            (ColorType::ColorA, 115, 2),
            (ColorType::ColorB, 80, 4),
            (ColorType::ColorB, 101, 8),
        ];

        let mut manager = ScoreManager::new(2);
        for (color, score, multiplier) in events {
            cut(color, score, multiplier).apply(&mut manager);
        }

        let expected_a: i32 = events
            .iter()
            .filter(|(c, _, _)| *c == ColorType::ColorA)
            .map(|(_, s, m)| s * m)
            .sum();
        let expected_b: i32 = events
            .iter()
            .filter(|(c, _, _)| *c == ColorType::ColorB)
            .map(|(_, s, m)| s * m)
            .sum();

        assert_eq!(manager.score_a(), expected_a);
        assert_eq!(manager.score_b(), expected_b);
        assert_eq!(manager.score_total(), expected_a + expected_b);
        assert_eq!(manager.max_score_total(), 115 * (1 + 2 + 2 + 4 + 8));
    }

    #[test]
    fn test_percentage_tracks_every_mutation() {
        let mut manager = ScoreManager::new(3);
        let events = [
            cut(ColorType::ColorA, 100, 1),
            cut(ColorType::ColorB, 70, 2),
            NoteEvent::Undo {
                color: ColorType::ColorB,
                score: 70,
                multiplier: 2,
                reduce_max: true,
            },
            cut(ColorType::ColorB, 113, 4),
        ];

        for event in &events {
            event.apply(&mut manager);
            let expected = (manager.score_total() as f64 / manager.max_score_total() as f64
                * 100.0
                * 1000.0)
                .round_ties_even()
                / 1000.0;
            assert_eq!(manager.percentage(), expected);
        }
    }

    #[test]
    fn test_two_lane_example_session() {
        let mut manager = ScoreManager::new(2);
        cut(ColorType::ColorA, 100, 1).apply(&mut manager);
        cut(ColorType::ColorB, 50, 2).apply(&mut manager);

        assert_eq!(manager.score_total(), 200);
        assert_eq!(manager.max_score_total(), 345);
        assert_eq!(manager.percentage(), 57.97);

        miss(ColorType::ColorA, 1).apply(&mut manager);
        assert_eq!(manager.missed_score_total(), 67);
        assert_eq!(manager.score_total_including_missed(), 267);
    }
}

/// Test inputs at the edges of the `i32` range
mod extreme_input_tests {
    use super::*;

    #[test]
    fn test_huge_cut_event() {
        let mut manager = ScoreManager::new(2);
        cut(ColorType::ColorA, 1_500_000_000, 2).apply(&mut manager);
        cut(ColorType::ColorB, 1_500_000_000, 2).apply(&mut manager);
        assert_eq!(manager.score_total(), i32::MAX);
        assert!(manager.percentage().is_finite());
    }

    #[test]
    fn test_lane_totals_near_limit() {
        let mut manager = ScoreManager::new(2);
        manager.add_score(ColorType::ColorA, 1_100_000_000, 1);
        manager.add_score(ColorType::ColorB, 1_100_000_000, 1);
        assert_eq!(manager.score_total(), i32::MAX);
    }

    #[test]
    fn test_minimum_highscore_results() {
        let config = Config::parse(
            r#"{"results": {"advanced": {"enable_diff_colors": false}}}"#,
        )
        .unwrap();
        let mut manager = ScoreManager::new(2);
        cut(ColorType::ColorA, 100, 1).apply(&mut manager);

        let level = LevelCompletion {
            end_state: LevelEndState::Cleared,
            full_combo: true,
            modified_score: 100,
            max_score: 115,
            previous_highscore: Some(i32::MIN),
        };
        let results = ResultsController::new(config.results).on_activated(&mut manager, Some(&level));
        assert_eq!(results.score_diff, "+2147483748");
        assert!(results.percentage_diff.starts_with('+'));
    }
}

/// Test a full session with counter and results
mod session_tests {
    use super::*;

    #[test]
    fn test_counter_and_results() {
        let config = Config::parse(
            r#"{
                "counter": {"decimal_precision": 1},
                "results": {
                    "score_percentage_diff_model": "OldHighscoreDiff",
                    "advanced": {"enable_diff_colors": false}
                }
            }"#,
        )
        .unwrap();

        let mut manager = ScoreManager::new(config.counter.decimal_precision);
        let counter = PercentageCounter::new(&config.counter);
        let text = CapturedText::default();
        let id = counter.attach(&mut manager, text.clone());
        assert_eq!(*text.0.borrow(), "FC : 100.0%");

        for event in [
            cut(ColorType::ColorA, 115, 1),
            cut(ColorType::ColorB, 100, 2),
            miss(ColorType::ColorA, 4),
            cut(ColorType::ColorA, 105, 4),
        ] {
            event.apply(&mut manager);
        }
        // 735 / 805
        assert_eq!(*text.0.borrow(), "FC : 91.3%");
        counter.detach(&mut manager, id);

        let level = LevelCompletion {
            end_state: LevelEndState::Cleared,
            full_combo: false,
            modified_score: 735,
            max_score: 1265,
            previous_highscore: Some(1000),
        };
        let controller = ResultsController::new(config.results.clone());
        let results = controller.on_activated(&mut manager, Some(&level));

        // Missed 460 projected at 735/805 => 420, FC score 1155
        assert_eq!(manager.fc_score(), 1155);
        assert_eq!(results.score, "FC : 1155");
        assert_eq!(results.score_diff, "+155");
        // 91.30% vs 1000/1265 = 79.05%
        assert_eq!(results.percentage, "FC : 91.30%");
        assert_eq!(results.percentage_diff, "+12.25%");
    }

    #[test]
    fn test_reset_between_songs() {
        let mut manager = ScoreManager::new(2);
        cut(ColorType::ColorA, 50, 8).apply(&mut manager);
        miss(ColorType::ColorB, 8).apply(&mut manager);
        manager.notify_song_ended(400);

        manager.reset();
        let fresh = ScoreManager::new(2);
        assert_eq!(manager.score_total(), fresh.score_total());
        assert_eq!(manager.max_score_total(), fresh.max_score_total());
        assert_eq!(manager.missed_score_total(), fresh.missed_score_total());
        assert_eq!(manager.percentage_text(), fresh.percentage_text());
        assert_eq!(manager.fc_score(), 0);
    }

    #[test]
    fn test_invalid_color_events() {
        let mut manager = ScoreManager::new(2);
        cut(ColorType::from_i32(-1), 115, 8).apply(&mut manager);
        miss(ColorType::from_i32(3), 8).apply(&mut manager);
        assert_eq!(manager.score_total(), 0);
        assert_eq!(manager.max_score_total(), 0);
        assert_eq!(manager.max_missed_score_total(), 0);
    }

    #[test]
    fn test_modifier_session_diffs_agree() {
        let config = Config::parse(
            r#"{"results": {
                "score_percentage_diff_model": "CurrentResultDiff",
                "advanced": {"enable_diff_colors": false}
            }}"#,
        )
        .unwrap();
        let mut manager = ScoreManager::new(2);
        cut(ColorType::ColorA, 115, 1).apply(&mut manager);
        cut(ColorType::ColorB, 115, 1).apply(&mut manager);

        let level = LevelCompletion {
            end_state: LevelEndState::Cleared,
            full_combo: true,
            modified_score: 253,
            max_score: 230,
            previous_highscore: None,
        };
        let results = ResultsController::new(config.results).on_activated(&mut manager, Some(&level));

        assert_eq!(results.score, "FC : 253");
        assert_eq!(results.score_diff, "+0");
        assert_eq!(results.percentage, "FC : 100.00%");
        assert_eq!(results.percentage_diff, "+0.00%");
    }

    #[test]
    fn test_unknown_diff_model_falls_back() {
        let config = Config::parse(r#"{"results": {"score_percentage_diff_model": "Nope"}}"#)
            .unwrap();
        assert_eq!(config.results.diff_model(), DiffModel::OldHighscoreDiff);
    }
}
