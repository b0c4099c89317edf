//! Plain-text frames built from session and window snapshots.

use termfolio_terminal::SessionSnapshot;
use termfolio_types::line::{LineKind, TerminalLine, ViewState};
use termfolio_wm::Screen;

const RESET: &str = "\x1b[0m";

/// Turns snapshots into printable frames.
#[derive(Debug, Clone)]
pub struct Renderer {
    title: String,
    quick_commands: Vec<String>,
    color: bool,
}

impl Renderer {
    pub fn new(title: impl Into<String>, quick_commands: Vec<String>, color: bool) -> Self {
        Self {
            title: title.into(),
            quick_commands,
            color,
        }
    }

    pub fn frame(&self, screen: Screen, session: &SessionSnapshot) -> String {
        match screen {
            Screen::Terminal => self.terminal(session),
            Screen::MinimizedDock => format!("[ {} ] minimized -- :max to restore\n", self.title),
            Screen::ClosedNotice => {
                "The terminal was closed. Restart the program to open it again.\n".to_string()
            },
        }
    }

    fn terminal(&self, session: &SessionSnapshot) -> String {
        let mut out = format!("( x ) ( - ) ( + )  {}\n", self.title);
        out.push_str(&"-".repeat(40));
        out.push('\n');
        for line in &session.lines {
            out.push_str(&self.line(line));
            out.push('\n');
        }
        if session.view == ViewState::Projects {
            out.push_str("\n# Projects\n");
        }
        out.push_str(&"-".repeat(40));
        out.push('\n');
        out.push_str(&format!("Commands: {}\n", self.quick_commands.join(" ")));
        out
    }

    fn line(&self, line: &TerminalLine) -> String {
        if self.color {
            format!("{}{}{RESET}", ansi(line.kind()), line.text())
        } else {
            line.text().to_string()
        }
    }
}

fn ansi(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Command => "\x1b[92m",
        LineKind::Output => "\x1b[37m",
        LineKind::Error => "\x1b[91m",
        LineKind::Info => "\x1b[94m",
        LineKind::Success => "\x1b[32m",
    }
}
