//! Line input: window buttons, host queries, and terminal commands.
//!
//! Lines starting with `:` stand in for the page's buttons and host
//! affordances. Anything else is typed into the terminal.

use anyhow::Result;
use termfolio_wm::Screen;

use crate::app_state::AppState;

/// Result of handling a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Text for the terminal session.
    Command(String),
    Minimize,
    Maximize,
    Close,
    /// Autocomplete query for a partial command.
    Suggest(String),
    /// Print the session snapshot as JSON.
    Snapshot,
    Quit,
    /// A `:` line nobody understands.
    UnknownMeta(String),
}

pub const META_USAGE: &str =
    "meta commands: :min  :max  :close  :suggest <partial>  :snapshot  :quit";

impl InputAction {
    pub fn parse(line: &str) -> Self {
        let Some(meta) = line.trim().strip_prefix(':') else {
            return InputAction::Command(line.to_string());
        };
        let (name, rest) = meta.split_once(char::is_whitespace).unwrap_or((meta, ""));
        match name.to_ascii_lowercase().as_str() {
            "min" | "minimize" => InputAction::Minimize,
            "max" | "maximize" => InputAction::Maximize,
            "close" => InputAction::Close,
            "suggest" | "tab" => InputAction::Suggest(rest.trim().to_string()),
            "snapshot" => InputAction::Snapshot,
            "quit" | "q" => InputAction::Quit,
            _ => InputAction::UnknownMeta(name.to_string()),
        }
    }
}

/// Apply one input line to the app.
///
/// Terminal commands and suggestions only act while the terminal screen is
/// showing. While minimized the window can still be restored or closed; once
/// closed only `:quit` does anything.
pub fn handle_line(line: &str, state: &mut AppState) -> Result<InputResult> {
    let action = InputAction::parse(line);
    let screen = state.screen();
    match action {
        InputAction::Quit => return Ok(InputResult::Quit),
        InputAction::UnknownMeta(name) => {
            state.notices.push(format!(":{name}: unknown meta command"));
            state.notices.push(META_USAGE.to_string());
        },
        _ if screen == Screen::ClosedNotice => {
            log::debug!("input ignored: window closed");
        },
        InputAction::Minimize => {
            state.window.minimize();
        },
        InputAction::Maximize => {
            state.window.maximize();
        },
        InputAction::Close => {
            state.window.close();
        },
        _ if !screen.accepts_commands() => {
            log::debug!("input ignored: window {}", state.window.state());
        },
        InputAction::Command(text) => {
            state.session.dispatch(&text);
        },
        InputAction::Suggest(partial) => {
            let engine = state.session.suggestions();
            let names: Vec<&str> = engine
                .suggest(&partial)
                .iter()
                .map(|d| d.display_name())
                .collect();
            let notice = match engine.complete(&partial) {
                Some(completion) => format!("{} (tab: {completion})", names.join("  ")),
                None if names.is_empty() => format!("no commands start with {partial:?}"),
                None => names.join("  "),
            };
            state.notices.push(notice);
        },
        InputAction::Snapshot => {
            let json = serde_json::to_string_pretty(&state.session.snapshot())?;
            state.notices.push(json);
        },
    }
    Ok(InputResult::Continue)
}
