//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::Player;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against an unbeatable minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "noughts.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Pause after a finished game before the board clears
        #[arg(long)]
        reset_delay_ms: Option<u64>,

        /// Start with the human and computer symbols swapped
        #[arg(long)]
        swap_symbols: bool,
    },

    /// Print the engine's move for a position
    Suggest {
        /// Nine cells, row-major: A/X, B/O, or _ for empty (e.g. "AA_|BB_|___")
        board: String,

        /// Side the engine plays
        #[arg(long, default_value = "B")]
        computer: Player,

        /// Also print the score of every legal move
        #[arg(long)]
        scores: bool,

        /// Print the resulting board as HTML instead of text
        #[arg(long)]
        html: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            reset_delay_ms: None,
            swap_symbols: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_suggest_parses_player() {
        let cli =
            Cli::try_parse_from(["noughts", "suggest", "A________", "--computer", "x", "--scores"])
                .unwrap();
        match cli.command {
            Some(Command::Suggest {
                board,
                computer,
                scores,
                html,
            }) => {
                assert_eq!(board, "A________");
                assert_eq!(computer, Player::A);
                assert!(scores);
                assert!(!html);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_play_overrides() {
        let cli = Cli::try_parse_from([
            "noughts",
            "--config",
            "other.toml",
            "play",
            "--reset-delay-ms",
            "500",
            "--swap-symbols",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert_eq!(
            cli.command,
            Some(Command::Play {
                reset_delay_ms: Some(500),
                swap_symbols: true
            })
        );
    }
}
