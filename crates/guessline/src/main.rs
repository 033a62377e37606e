use std::path::PathBuf;

use clap::Parser;
use guessline::app::{App, Flags};
use guessline::game::{Difficulty, GameConfig};
use guessline::widgets::guess_line::parse_capacity;
use guessline::{run_with, ProgramOptions};

/// A word-guessing game for the terminal.
#[derive(Debug, Parser)]
#[command(name = "guessline", version, about)]
struct Cli {
    /// Difficulty preset (easy, medium, hard, hackerman). Unknown names fall
    /// back to easy. Omit all options to pick from the in-game menu.
    difficulty: Option<String>,

    /// Word length override. Anything that is not a positive integer falls
    /// back to 5.
    #[arg(long)]
    length: Option<String>,

    /// Attempt count override.
    #[arg(long)]
    tries: Option<usize>,

    /// Append runtime debug output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// The game to start immediately, if any option asked for one.
    fn start_config(&self) -> Option<GameConfig> {
        if self.difficulty.is_none() && self.length.is_none() && self.tries.is_none() {
            return None;
        }
        let base = self
            .difficulty
            .as_deref()
            .map(Difficulty::from_name)
            .unwrap_or(Difficulty::Easy)
            .config();
        Some(GameConfig {
            word_len: self
                .length
                .as_deref()
                .map(parse_capacity)
                .unwrap_or(base.word_len),
            tries: self.tries.unwrap_or(base.tries).max(1),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let options = ProgramOptions {
        title: Some("guessline".into()),
        log_file: cli.log_file.clone(),
        ..ProgramOptions::default()
    };
    run_with::<App>(
        Flags {
            start: cli.start_config(),
        },
        options,
    )
    .await?;
    Ok(())
}
