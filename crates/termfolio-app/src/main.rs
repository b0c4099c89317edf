//! termfolio entry point.
//!
//! Hosts one terminal session and one window lifecycle, reads input lines
//! from stdin, and redraws the active screen whenever either publishes a
//! new snapshot. Type `:quit` (or send EOF) to exit.

mod app_state;
mod input;
mod render;

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};

use app_state::AppState;
use render::Renderer;
use termfolio_types::config::TermfolioConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg, TERMFOLIO_CONFIG env var, or defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TERMFOLIO_CONFIG").ok())
    {
        Some(path) => TermfolioConfig::load(&path)
            .with_context(|| format!("failed to load config {path}"))?,
        None => TermfolioConfig::default(),
    };
    log::info!(
        "Starting termfolio (locale {}, aliases {})",
        config.locale,
        if config.spanish_aliases { "on" } else { "off" },
    );

    let stdout = io::stdout();
    let color = stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let mut state = AppState::new(config);
    let renderer = Renderer::new(
        state.config.window_title.clone(),
        state
            .session
            .registry()
            .display_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        color,
    );

    let mut out = stdout.lock();
    draw(&mut out, &renderer, &mut state)?;
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        if input::handle_line(&line, &mut state)? == input::InputResult::Quit {
            break;
        }
        draw(&mut out, &renderer, &mut state)?;
    }

    log::info!("termfolio shut down cleanly");
    Ok(())
}

fn draw(out: &mut impl Write, renderer: &Renderer, state: &mut AppState) -> Result<()> {
    if state.take_dirty() {
        let frame = renderer.frame(state.screen(), &state.session.snapshot());
        write!(out, "{frame}")?;
    }
    for notice in state.take_notices() {
        writeln!(out, "{notice}")?;
    }
    if state.screen().accepts_commands() {
        write!(out, "{}", state.session.prompt())?;
    }
    out.flush()?;
    Ok(())
}
