//! Window lifecycle for termfolio.
//!
//! The terminal window is open, minimized, or closed. [`WindowLifecycle`]
//! owns that state and ignores calls that do not match a defined edge.
//! [`Screen`] is the presentation derived from it.

mod lifecycle;
mod screen;

/// Open/minimized/closed state machine.
pub use lifecycle::WindowLifecycle;
/// Immutable lifecycle state handed to renderers.
pub use lifecycle::WindowSnapshot;
/// The three lifecycle states.
pub use lifecycle::WindowState;
/// Which of the mutually exclusive screens to show.
pub use screen::Screen;
