//! Screen selection derived from the window lifecycle.

use crate::lifecycle::WindowState;

/// The three mutually exclusive screens a renderer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Full terminal: header, buffer, input, quick-command bar.
    Terminal,
    /// Collapsed affordance that restores the window.
    MinimizedDock,
    /// Final notice; nothing restores the window short of a restart.
    ClosedNotice,
}

impl Screen {
    pub fn for_state(state: WindowState) -> Self {
        match state {
            WindowState::Open => Screen::Terminal,
            WindowState::Minimized => Screen::MinimizedDock,
            WindowState::Closed => Screen::ClosedNotice,
        }
    }

    /// Whether input should reach the terminal session.
    pub fn accepts_commands(self) -> bool {
        self == Screen::Terminal
    }
}

impl From<WindowState> for Screen {
    fn from(state: WindowState) -> Self {
        Self::for_state(state)
    }
}
