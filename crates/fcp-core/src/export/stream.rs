use std::fs;
use std::path::{Path, PathBuf};

use crate::counter::TextSink;
use crate::error::Result;
use crate::results::ResultsText;

pub const COUNTER_FILE: &str = "fcpercentage.txt";
pub const RESULTS_PERCENTAGE_FILE: &str = "results-percentage.txt";
pub const RESULTS_PERCENTAGE_DIFF_FILE: &str = "results-percentage-diff.txt";
pub const RESULTS_SCORE_FILE: &str = "results-score.txt";
pub const RESULTS_SCORE_DIFF_FILE: &str = "results-score-diff.txt";

/// Text files for streaming overlays.
#[derive(Debug, Clone)]
pub struct StreamOutput {
    enabled: bool,
    base_dir: PathBuf,
}

impl StreamOutput {
    pub fn new<P: AsRef<Path>>(enabled: bool, base_dir: P) -> Self {
        Self {
            enabled,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn write_counter(&self, text: &str) -> Result<()> {
        self.write_file(COUNTER_FILE, text)
    }

    pub fn write_results(&self, text: &ResultsText) -> Result<()> {
        self.write_file(RESULTS_PERCENTAGE_FILE, &text.percentage)?;
        self.write_file(RESULTS_PERCENTAGE_DIFF_FILE, &text.percentage_diff)?;
        self.write_file(RESULTS_SCORE_FILE, &text.score)?;
        self.write_file(RESULTS_SCORE_DIFF_FILE, &text.score_diff)?;
        Ok(())
    }

    /// Clear results files, e.g. when a new song starts
    pub fn clear_results(&self) -> Result<()> {
        self.write_results(&ResultsText::default())
    }

    /// Sink that keeps the counter file up to date.
    pub fn counter_sink(&self) -> StreamTextSink {
        StreamTextSink {
            output: self.clone(),
            filename: COUNTER_FILE,
        }
    }

    fn write_file(&self, filename: &str, content: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        fs::write(self.base_dir.join(filename), content)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct StreamTextSink {
    output: StreamOutput,
    filename: &'static str,
}

impl TextSink for StreamTextSink {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.output.write_file(self.filename, text)
    }
}
