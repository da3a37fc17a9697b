//! Strictly Quoridor - terminal front end
//!
//! Interactive play and script replay over the rules engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufReader, Write};
use std::path::Path;
use strictly_quoridor::{GameStatus, Session, SessionConfig, render};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SessionConfig::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { script } => run_replay(config, &script),
    }
}

/// Interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: SessionConfig) -> Result<()> {
    info!("Starting interactive game");
    let show_board = *config.show_board();
    let mut session = Session::new(config).with_prompt(true);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Type 'help' for commands.")?;
    if show_board {
        writeln!(out, "{}", render::render_board(session.game()))?;
    }

    let status = session.run(io::stdin().lock(), &mut out)?;
    writeln!(out)?;
    report(&mut out, &session, status)?;
    Ok(())
}

/// Replay a command script and print the outcome
#[instrument(skip(config))]
fn run_replay(config: SessionConfig, script: &Path) -> Result<()> {
    info!("Replaying script");
    let file = std::fs::File::open(script)
        .with_context(|| format!("Failed to open script {}", script.display()))?;
    let mut session = Session::new(config).with_strict(true);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = session
        .run(BufReader::new(file), &mut out)
        .with_context(|| format!("Replay of {} failed", script.display()))?;

    writeln!(out, "{}", render::render_board(session.game()))?;
    report(&mut out, &session, status)?;
    Ok(())
}

fn report(out: &mut impl Write, session: &Session, status: GameStatus) -> io::Result<()> {
    writeln!(out, "{}", render::render_status(session.game()))?;
    info!(%status, code = status.code(), "Game finished");
    Ok(())
}
