//! Replay command implementation.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fcp_core::{
    Config, LevelCompletion, LevelEndState, NoteEvent, PercentageCounter, ResultsController,
    ResultsText, ScoreManager, StreamOutput, TextSink,
};
use owo_colors::OwoColorize;
use tracing::{info, warn};

pub struct ReplayOptions<'a> {
    pub events: &'a str,
    pub config: Option<&'a str>,
    pub end_state: LevelEndState,
    pub full_combo: bool,
    pub modified_score: Option<i32>,
    pub max_score: Option<i32>,
    pub highscore: Option<i32>,
    pub live: bool,
    pub stream_dir: Option<&'a str>,
}

/// Prints every counter update on its own line.
struct ConsoleSink;

impl TextSink for ConsoleSink {
    fn set_text(&mut self, text: &str) -> fcp_core::Result<()> {
        println!("  {}", text);
        Ok(())
    }
}

/// Run the replay command
pub fn run(options: ReplayOptions<'_>) -> Result<()> {
    let config = load_config(options.config);
    let events = load_events(options.events)?;
    info!("Loaded {} note events", events.len());

    let stream = options
        .stream_dir
        .map(|dir| StreamOutput::new(true, dir));

    let mut manager = ScoreManager::new(config.counter.decimal_precision);
    let counter = PercentageCounter::new(&config.counter);
    if let Some(label) = &counter.layout().label {
        println!("{}", label.text.dimmed());
    }
    if options.live {
        counter.attach(&mut manager, ConsoleSink);
    }
    if let Some(stream) = &stream {
        stream.clear_results()?;
        counter.attach(&mut manager, stream.counter_sink());
    }

    for event in &events {
        event.apply(&mut manager);
    }

    if !options.live {
        println!("  {}", counter.render(&manager));
    }

    let level = LevelCompletion {
        end_state: options.end_state,
        full_combo: options.full_combo,
        modified_score: options.modified_score.unwrap_or(manager.score_total()),
        max_score: options
            .max_score
            .unwrap_or(
                manager
                    .max_score_total()
                    .saturating_add(manager.max_missed_score_total()),
            ),
        previous_highscore: options.highscore,
    };

    let controller = ResultsController::new(config.results.clone());
    let results = controller.on_activated(&mut manager, Some(&level));
    if let Some(stream) = &stream {
        stream.write_results(&results)?;
    }

    // Console output uses terminal colors instead of rich-text tags
    let mut console_config = config.results;
    console_config.advanced.enable_diff_colors = false;
    let console_results = ResultsController::new(console_config).build_text(&manager, &level);
    let console_results = if results.is_empty() {
        ResultsText::default()
    } else {
        console_results
    };

    print!("{}", format_results_console(&manager, &level, &console_results));
    Ok(())
}

fn load_config(path: Option<&str>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    match Config::load(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config from {}: {}, using defaults", path, e);
            Config::default()
        }
    }
}

fn load_events(path: &str) -> Result<Vec<NoteEvent>> {
    let content =
        fs::read_to_string(Path::new(path)).with_context(|| format!("Failed to read {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse note events in {}", path))
}

/// Format the results panel for console display with colored output
fn format_results_console(
    manager: &ScoreManager,
    level: &LevelCompletion,
    results: &ResultsText,
) -> String {
    let mut output = String::new();
    let border = "━".repeat(40);
    let border_dim = border.dimmed();
    let end_state: &'static str = level.end_state.into();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  RESULT : {}{}",
        end_state.bold(),
        if level.full_combo { " (FC)" } else { "" }
    );
    let _ = writeln!(
        output,
        "  SCORE  : {} / {} (missed max {})",
        manager.score_total(),
        manager.max_score_total(),
        manager.max_missed_score_total()
    );
    let _ = writeln!(output, "{}", border_dim);

    if results.is_empty() {
        let _ = writeln!(output, "  {}", "no results text".dimmed());
    } else {
        let _ = writeln!(
            output,
            "  {} {}",
            results.percentage.cyan(),
            color_diff(&results.percentage_diff)
        );
        let _ = writeln!(
            output,
            "  {} {}",
            results.score.cyan(),
            color_diff(&results.score_diff)
        );
    }
    let _ = writeln!(output, "{}", border_dim);

    output
}

fn color_diff(text: &str) -> String {
    if text.starts_with('-') {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}
