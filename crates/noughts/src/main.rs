//! Noughts - play tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Command, Config, render, tui};
use noughts_core::{Board, Position, evaluate, select_move};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play {
            reset_delay_ms,
            swap_symbols,
        } => tui::run_tui(config.with_overrides(reset_delay_ms, swap_symbols)).await,
        Command::Suggest {
            board,
            computer,
            scores,
            html,
        } => run_suggest(&config, &board, computer, scores, html),
    }
}

/// Print the engine's reply to a position given on the command line.
#[instrument(skip(config))]
fn run_suggest(
    config: &Config,
    layout: &str,
    computer: noughts_core::Player,
    show_scores: bool,
    html: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let glyphs = config.build_glyphs()?;
    let board = Board::parse(layout)?;
    let human = computer.opponent();

    if show_scores {
        for (mv, score) in evaluate(&board, computer, human)? {
            println!("{} ({}): {}", mv + 1, describe(mv), score);
        }
    }

    let mv = select_move(&board, computer, human)?;
    info!(mv, "Engine move");
    println!(
        "{} plays {} ({})",
        glyphs.for_player(computer),
        mv + 1,
        describe(mv)
    );

    let after = board.with_mark(computer, mv);
    if html {
        println!("{}", render::html(&after, &glyphs));
    } else {
        println!("{}", render::text(&after, &glyphs));
    }
    Ok(())
}

fn describe(index: usize) -> &'static str {
    Position::from_index(index).map_or("?", Position::label)
}
