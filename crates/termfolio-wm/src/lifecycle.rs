//! Open / minimized / closed state machine.
//!
//! Edges:
//!
//! ```text
//! open --minimize--> minimized --maximize--> open
//! open --close--> closed
//! minimized --close--> closed
//! ```
//!
//! `closed` has no outgoing edge. Any call without an edge is a no-op.

use std::fmt;

use serde::Serialize;
use termfolio_types::observer::{Observers, SubscriptionId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Open,
    Minimized,
    Closed,
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowState::Open => f.write_str("open"),
            WindowState::Minimized => f.write_str("minimized"),
            WindowState::Closed => f.write_str("closed"),
        }
    }
}

/// Read-only copy of the lifecycle handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSnapshot {
    pub state: WindowState,
    /// Incremented on every transition.
    pub version: u64,
}

/// The window state machine.
#[derive(Debug, Default)]
pub struct WindowLifecycle {
    state: WindowState,
    version: u64,
    observers: Observers<WindowSnapshot>,
}

impl WindowLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == WindowState::Open
    }

    /// `open -> minimized`. Returns whether the state changed.
    pub fn minimize(&mut self) -> bool {
        self.transition("minimize", |s| match s {
            WindowState::Open => Some(WindowState::Minimized),
            _ => None,
        })
    }

    /// `minimized -> open`. Returns whether the state changed.
    pub fn maximize(&mut self) -> bool {
        self.transition("maximize", |s| match s {
            WindowState::Minimized => Some(WindowState::Open),
            _ => None,
        })
    }

    /// `open | minimized -> closed`. Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        self.transition("close", |s| match s {
            WindowState::Open | WindowState::Minimized => Some(WindowState::Closed),
            WindowState::Closed => None,
        })
    }

    fn transition(&mut self, op: &str, edge: impl FnOnce(WindowState) -> Option<WindowState>) -> bool {
        let Some(next) = edge(self.state) else {
            log::trace!("window {op} ignored in state {}", self.state);
            return false;
        };
        log::debug!("window {op}: {} -> {next}", self.state);
        self.state = next;
        self.version += 1;
        let snapshot = self.snapshot();
        self.observers.publish(&snapshot);
        true
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            state: self.state,
            version: self.version,
        }
    }

    /// Receive a snapshot after every transition.
    pub fn subscribe(&mut self, callback: impl FnMut(&WindowSnapshot) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
