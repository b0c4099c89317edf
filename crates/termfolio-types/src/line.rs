//! Terminal lines and the view selector.
//!
//! A [`TerminalLine`] is immutable once created; the session only ever
//! appends lines or drops the whole buffer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a line should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of a submitted command.
    Command,
    /// Regular command output.
    Output,
    /// Unrecognized input report.
    Error,
    /// Banner, hints and progress notes.
    Info,
    /// Positive confirmation.
    Success,
}

impl LineKind {
    /// Lowercase label used by text renderers and JSON snapshots.
    pub fn label(self) -> &'static str {
        match self {
            LineKind::Command => "command",
            LineKind::Output => "output",
            LineKind::Error => "error",
            LineKind::Info => "info",
            LineKind::Success => "success",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of terminal history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    text: String,
    kind: LineKind,
}

impl TerminalLine {
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Command)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Output)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Error)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Info)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }
}

/// The screen currently selected inside the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Terminal,
    Projects,
    About,
    Contact,
}

impl ViewState {
    pub fn label(self) -> &'static str {
        match self {
            ViewState::Terminal => "terminal",
            ViewState::Projects => "projects",
            ViewState::About => "about",
            ViewState::Contact => "contact",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(TerminalLine::command("$ help").kind(), LineKind::Command);
        assert_eq!(TerminalLine::output("x").kind(), LineKind::Output);
        assert_eq!(TerminalLine::error("x").kind(), LineKind::Error);
        assert_eq!(TerminalLine::info("x").kind(), LineKind::Info);
        assert_eq!(
            TerminalLine::new("ok", LineKind::Success).kind(),
            LineKind::Success
        );
    }

    #[test]
    fn line_keeps_text() {
        let line = TerminalLine::output("  indented");
        assert_eq!(line.text(), "  indented");
    }

    #[test]
    fn view_defaults_to_terminal() {
        assert_eq!(ViewState::default(), ViewState::Terminal);
    }

    #[test]
    fn labels_match_display() {
        for kind in [
            LineKind::Command,
            LineKind::Output,
            LineKind::Error,
            LineKind::Info,
            LineKind::Success,
        ] {
            assert_eq!(kind.to_string(), kind.label());
        }
        for view in [
            ViewState::Terminal,
            ViewState::Projects,
            ViewState::About,
            ViewState::Contact,
        ] {
            assert_eq!(view.to_string(), view.label());
        }
    }

    #[test]
    fn line_serializes_with_lowercase_kind() {
        let json = serde_json::to_string(&TerminalLine::info("hi")).unwrap();
        assert_eq!(json, r#"{"text":"hi","kind":"info"}"#);
    }

    #[test]
    fn view_deserializes_from_lowercase() {
        let view: ViewState = serde_json::from_str(r#""contact""#).unwrap();
        assert_eq!(view, ViewState::Contact);
    }
}
