//! Command interpreter for termfolio.
//!
//! A static [`CommandRegistry`] maps command names to built-in actions. The
//! [`TerminalSession`] trims each input line, resolves it against the
//! registry, and applies the response to its line buffer and current view.
//! [`SuggestionEngine`] answers prefix queries for autocomplete.

pub mod messages;
mod registry;
mod session;
mod suggest;

/// Localized strings for one locale.
pub use messages::Messages;
/// Built-in behavior identifier.
pub use registry::ActionId;
/// A command name with its action and description.
pub use registry::CommandDescriptor;
/// Ordered table of recognized commands.
pub use registry::CommandRegistry;
/// Result of interpreting one input line.
pub use session::DispatchOutcome;
/// Immutable session state handed to renderers.
pub use session::SessionSnapshot;
/// Line buffer, view, and dispatch.
pub use session::TerminalSession;
/// Prefix suggestions and Tab completion.
pub use suggest::SuggestionEngine;
