//! CLI argument definitions for fcp.

use clap::{Parser, Subcommand, ValueEnum};
use fcp_core::LevelEndState;

#[derive(Parser)]
#[command(name = "fcp")]
#[command(about = "Full combo percentage counter and results text", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay recorded note events and print the counter and results text
    Replay {
        /// JSON file with an array of note events
        #[arg(short, long)]
        events: String,
        /// Config file (JSON)
        #[arg(short, long, env = "FCP_CONFIG")]
        config: Option<String>,
        /// How the level ended
        #[arg(long, value_enum, default_value = "cleared")]
        end_state: EndState,
        /// The run was a full combo
        #[arg(long)]
        full_combo: bool,
        /// Final score with modifiers (default: accumulated score)
        #[arg(long)]
        modified_score: Option<i32>,
        /// Highest score the level allows (default: accumulated max score)
        #[arg(long)]
        max_score: Option<i32>,
        /// Highscore stored before this run
        #[arg(long)]
        highscore: Option<i32>,
        /// Print the counter after every score change
        #[arg(long)]
        live: bool,
        /// Also write counter and results text files into this directory
        #[arg(long, value_name = "DIR")]
        stream_dir: Option<String>,
    },
    /// Write a config file with default values
    InitConfig {
        /// Output file path
        #[arg(short, long, default_value = "fcpercentage.json")]
        output: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EndState {
    Cleared,
    Failed,
    Incomplete,
}

impl From<EndState> for LevelEndState {
    fn from(state: EndState) -> Self {
        match state {
            EndState::Cleared => LevelEndState::Cleared,
            EndState::Failed => LevelEndState::Failed,
            EndState::Incomplete => LevelEndState::Incomplete,
        }
    }
}
