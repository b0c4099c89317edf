use std::cell::Cell;
use std::rc::Rc;

use termfolio_terminal::TerminalSession;
use termfolio_types::config::TermfolioConfig;
use termfolio_wm::{Screen, WindowLifecycle};

/// Everything the binary owns: one session, one window, and a redraw flag.
pub struct AppState {
    pub config: TermfolioConfig,
    pub session: TerminalSession,
    pub window: WindowLifecycle,
    /// Text printed below the next frame (suggestions, snapshots, usage).
    pub notices: Vec<String>,
    dirty: Rc<Cell<bool>>,
}

impl AppState {
    pub fn new(config: TermfolioConfig) -> Self {
        let mut session = TerminalSession::from_config(&config);
        let mut window = WindowLifecycle::new();

        // Start dirty so the first frame is drawn.
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        session.subscribe(move |_| flag.set(true));
        let flag = Rc::clone(&dirty);
        window.subscribe(move |_| flag.set(true));

        Self {
            config,
            session,
            window,
            notices: Vec::new(),
            dirty,
        }
    }

    pub fn screen(&self) -> Screen {
        Screen::for_state(self.window.state())
    }

    /// Whether a frame needs drawing; resets the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}
