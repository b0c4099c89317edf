//! Terminal session: line buffer, current view, and command dispatch.
//!
//! `dispatch` turns one line of raw text into a single atomic update of the
//! buffer/view pair and then publishes one [`SessionSnapshot`].

use serde::Serialize;
use termfolio_types::config::TermfolioConfig;
use termfolio_types::line::{TerminalLine, ViewState};
use termfolio_types::observer::{Observers, SubscriptionId};

use crate::messages::Messages;
use crate::registry::{ActionId, CommandRegistry};
use crate::suggest::SuggestionEngine;

/// Read-only copy of the session state handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub lines: Vec<TerminalLine>,
    pub view: ViewState,
    /// Incremented on every published mutation.
    pub version: u64,
}

/// What a call to [`TerminalSession::dispatch`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Blank input. Nothing changed.
    Ignored,
    /// The buffer was wiped.
    Cleared,
    /// A built-in action ran.
    Executed(ActionId),
    /// Input matched no command; an error and a hint were appended.
    Unrecognized,
}

/// The interpreter: owns the line buffer and the current view.
pub struct TerminalSession {
    registry: CommandRegistry,
    messages: &'static Messages,
    prompt: String,
    lines: Vec<TerminalLine>,
    view: ViewState,
    version: u64,
    observers: Observers<SessionSnapshot>,
}

impl TerminalSession {
    /// Start a session with the three banner lines and the terminal view.
    pub fn new(registry: CommandRegistry, messages: &'static Messages) -> Self {
        let lines = messages.banner.iter().copied().map(TerminalLine::info).collect();
        Self {
            registry,
            messages,
            prompt: "$ ".to_string(),
            lines,
            view: ViewState::Terminal,
            version: 0,
            observers: Observers::new(),
        }
    }

    pub fn from_config(config: &TermfolioConfig) -> Self {
        let registry = CommandRegistry::builtin(config.locale, config.spanish_aliases);
        Self::new(registry, Messages::for_locale(config.locale))
            .with_prompt(config.prompt.clone())
    }

    /// Replace the echo prefix (default `"$ "`).
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Interpret one line of user input.
    ///
    /// Blank input is ignored. `clear` empties the buffer without echoing.
    /// Everything else appends the echo line followed by the response, and
    /// unknown input is reported as an error line plus a hint. The view only
    /// changes when a recognized action selects one.
    pub fn dispatch(&mut self, raw: &str) -> DispatchOutcome {
        let input = raw.trim();
        if input.is_empty() {
            log::trace!("ignoring blank input");
            return DispatchOutcome::Ignored;
        }

        let action = self.registry.lookup(input).map(|d| d.action());
        if action == Some(ActionId::Clear) {
            log::debug!("dispatch {input:?}: clear ({} lines dropped)", self.lines.len());
            self.lines.clear();
            self.commit();
            return DispatchOutcome::Cleared;
        }

        let mut appended = vec![TerminalLine::command(format!("{}{input}", self.prompt))];
        let outcome = match action {
            Some(action) => {
                self.respond(action, &mut appended);
                DispatchOutcome::Executed(action)
            },
            None => {
                appended.push(TerminalLine::error(self.messages.unrecognized_line(input)));
                appended.push(TerminalLine::info(self.messages.hint));
                DispatchOutcome::Unrecognized
            },
        };
        let view = action.and_then(ActionId::view_after).unwrap_or(self.view);
        log::debug!(
            "dispatch {input:?}: {outcome:?}, +{} lines, view {} -> {view}",
            appended.len(),
            self.view,
        );

        self.lines.extend(appended);
        self.view = view;
        self.commit();
        outcome
    }

    /// Empty the buffer from the host side; same effect as the `clear` command.
    pub fn clear_buffer(&mut self) {
        self.lines.clear();
        self.commit();
    }

    fn respond(&self, action: ActionId, out: &mut Vec<TerminalLine>) {
        let m = self.messages;
        match action {
            ActionId::Help => {
                out.push(TerminalLine::output(m.help_header));
                out.extend(self.registry.list_all().iter().map(|d| {
                    TerminalLine::output(format!("  {:<9}- {}", d.display_name(), d.description()))
                }));
            },
            ActionId::ShowProjects => out.push(TerminalLine::info(m.loading_projects)),
            ActionId::ShowAbout => out.extend(m.about.iter().copied().map(TerminalLine::output)),
            ActionId::ShowContact => {
                out.extend(m.contact.iter().copied().map(TerminalLine::output))
            },
            ActionId::GoHome => out.push(TerminalLine::info(m.going_home)),
            // Handled before the echo is built.
            ActionId::Clear => {},
        }
    }

    fn commit(&mut self) {
        self.version += 1;
        if !self.observers.is_empty() {
            let snapshot = self.snapshot();
            self.observers.publish(&snapshot);
        }
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    /// Autocomplete against this session's registry.
    pub fn suggestions(&self) -> SuggestionEngine<'_> {
        SuggestionEngine::new(&self.registry)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            lines: self.lines.clone(),
            view: self.view,
            version: self.version,
        }
    }

    /// Receive a snapshot after every mutating call.
    pub fn subscribe(&mut self, callback: impl FnMut(&SessionSnapshot) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::from_config(&TermfolioConfig::default())
    }
}

impl std::fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSession")
            .field("lines", &self.lines.len())
            .field("view", &self.view)
            .field("version", &self.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use termfolio_types::config::Locale;
    use termfolio_types::line::LineKind;

    fn kinds(lines: &[TerminalLine]) -> Vec<LineKind> {
        lines.iter().map(|l| l.kind()).collect()
    }

    #[test]
    fn starts_with_three_info_lines_on_terminal_view() {
        let s = TerminalSession::default();
        assert_eq!(kinds(s.lines()), vec![LineKind::Info; 3]);
        assert_eq!(s.view(), ViewState::Terminal);
        assert_eq!(s.version(), 0);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut s = TerminalSession::default();
        let before = s.snapshot();
        assert_eq!(s.dispatch(""), DispatchOutcome::Ignored);
        assert_eq!(s.dispatch("   "), DispatchOutcome::Ignored);
        assert_eq!(s.dispatch("\t\n"), DispatchOutcome::Ignored);
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn help_appends_echo_and_one_line_per_command() {
        let mut s = TerminalSession::default();
        let before = s.lines().len();
        assert_eq!(s.dispatch("HELP"), DispatchOutcome::Executed(ActionId::Help));
        let n = 1 + s.registry().len();
        assert_eq!(s.lines().len(), before + 1 + n);
        assert_eq!(s.view(), ViewState::Terminal);

        let added = &s.lines()[before..];
        assert_eq!(added[0], TerminalLine::command("$ HELP"));
        assert_eq!(added[1].text(), "Available commands:");
        assert_eq!(added[2].text(), "  help     - Show this help");
        assert_eq!(added[3].text(), "  projects - Browse my projects");
        assert!(added[1..].iter().all(|l| l.kind() == LineKind::Output));
    }

    #[test]
    fn help_returns_to_terminal_view() {
        let mut s = TerminalSession::default();
        s.dispatch("about");
        s.dispatch("help");
        assert_eq!(s.view(), ViewState::Terminal);
    }

    #[test]
    fn projects_switches_view_and_adds_two_lines() {
        let mut s = TerminalSession::default();
        let before = s.lines().len();
        s.dispatch("projects");
        assert_eq!(s.view(), ViewState::Projects);
        assert_eq!(s.lines().len(), before + 2);
        assert_eq!(kinds(&s.lines()[before..]), vec![LineKind::Command, LineKind::Info]);
    }

    #[test]
    fn about_prints_biography() {
        let mut s = TerminalSession::default();
        let before = s.lines().len();
        s.dispatch("about");
        assert_eq!(s.view(), ViewState::About);
        let added = &s.lines()[before + 1..];
        assert_eq!(added.len(), s.messages().about.len());
        assert!(added.iter().all(|l| l.kind() == LineKind::Output));
    }

    #[test]
    fn contact_prints_contact_block() {
        let mut s = TerminalSession::default();
        let before = s.lines().len();
        s.dispatch("Contact");
        assert_eq!(s.view(), ViewState::Contact);
        assert_eq!(s.lines().len(), before + 1 + s.messages().contact.len());
    }

    #[test]
    fn home_returns_to_terminal_with_info_line() {
        let mut s = TerminalSession::default();
        s.dispatch("projects");
        let before = s.lines().len();
        assert_eq!(s.dispatch("home"), DispatchOutcome::Executed(ActionId::GoHome));
        assert_eq!(s.view(), ViewState::Terminal);
        assert_eq!(kinds(&s.lines()[before..]), vec![LineKind::Command, LineKind::Info]);
    }

    #[test]
    fn clear_empties_buffer_without_echo() {
        let mut s = TerminalSession::default();
        s.dispatch("help");
        assert_eq!(s.dispatch("clear"), DispatchOutcome::Cleared);
        assert!(s.lines().is_empty());
    }

    #[test]
    fn clear_keeps_view() {
        let mut s = TerminalSession::default();
        s.dispatch("contact");
        s.dispatch("CLEAR");
        assert!(s.lines().is_empty());
        assert_eq!(s.view(), ViewState::Contact);
    }

    #[test]
    fn clear_on_empty_buffer() {
        let mut s = TerminalSession::default();
        s.dispatch("clear");
        s.dispatch("clear");
        assert!(s.lines().is_empty());
    }

    #[test]
    fn unrecognized_appends_echo_error_and_hint() {
        let mut s = TerminalSession::default();
        s.dispatch("about");
        let before = s.lines().len();
        assert_eq!(s.dispatch("frobnicate"), DispatchOutcome::Unrecognized);
        let added = &s.lines()[before..];
        assert_eq!(
            kinds(added),
            vec![LineKind::Command, LineKind::Error, LineKind::Info]
        );
        assert!(added[1].text().contains("frobnicate"));
        assert_eq!(added[1].text(), "unrecognized command: frobnicate");
        assert_eq!(s.view(), ViewState::About);
    }

    #[test]
    fn input_is_trimmed_before_echo_and_lookup() {
        let mut s = TerminalSession::default();
        assert_eq!(
            s.dispatch("  projects \n"),
            DispatchOutcome::Executed(ActionId::ShowProjects)
        );
        assert!(s.lines().contains(&TerminalLine::command("$ projects")));
    }

    #[test]
    fn arguments_make_input_unrecognized() {
        let mut s = TerminalSession::default();
        assert_eq!(s.dispatch("help me"), DispatchOutcome::Unrecognized);
    }

    #[test]
    fn existing_lines_are_never_reordered() {
        let mut s = TerminalSession::default();
        s.dispatch("help");
        let prefix = s.lines().to_vec();
        s.dispatch("projects");
        s.dispatch("nope");
        assert_eq!(&s.lines()[..prefix.len()], prefix.as_slice());
    }

    #[test]
    fn spanish_session() {
        let config = TermfolioConfig {
            locale: Locale::Es,
            ..TermfolioConfig::default()
        };
        let mut s = TerminalSession::from_config(&config);
        assert_eq!(s.lines()[0].text(), "Bienvenido a mi Portafolio Terminal 🚀");
        s.dispatch("proyectos");
        assert_eq!(s.view(), ViewState::Projects);
        assert_eq!(s.lines().last().map(|l| l.text()), Some("Cargando proyectos..."));
        s.dispatch("xyz");
        assert_eq!(s.lines()[s.lines().len() - 2].text(), "Comando no reconocido: xyz");
    }

    #[test]
    fn custom_prompt_is_used_for_echo() {
        let mut s = TerminalSession::default().with_prompt("> ");
        s.dispatch("home");
        assert!(s.lines().contains(&TerminalLine::command("> home")));
        assert_eq!(s.prompt(), "> ");
    }

    #[test]
    fn one_snapshot_per_mutation() {
        let snaps = Rc::new(RefCell::new(Vec::new()));
        let mut s = TerminalSession::default();
        let sink = Rc::clone(&snaps);
        s.subscribe(move |snap| sink.borrow_mut().push(snap.clone()));

        s.dispatch("   ");
        s.dispatch("projects");
        s.dispatch("bogus");
        s.dispatch("clear");

        let snaps = snaps.borrow();
        assert_eq!(snaps.len(), 3);
        assert_eq!(snaps[0].view, ViewState::Projects);
        assert_eq!(snaps[0].lines.len(), 5);
        assert_eq!(snaps[1].lines.len(), 8);
        assert!(snaps[2].lines.is_empty());
        let versions: Vec<u64> = snaps.iter().map(|s| s.version).collect();
        assert_eq!(versions, vec![1, 2, 3]);
    }

    #[test]
    fn snapshot_is_complete_when_published() {
        let mut s = TerminalSession::default();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        s.subscribe(move |snap| *sink.borrow_mut() = Some(snap.clone()));
        s.dispatch("projects");
        assert_eq!(seen.borrow().as_ref(), Some(&s.snapshot()));
    }

    #[test]
    fn unsubscribed_observer_gets_nothing() {
        let count = Rc::new(RefCell::new(0));
        let mut s = TerminalSession::default();
        let c = Rc::clone(&count);
        let id = s.subscribe(move |_| *c.borrow_mut() += 1);
        s.dispatch("help");
        assert!(s.unsubscribe(id));
        s.dispatch("help");
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn clear_buffer_matches_clear_command() {
        let mut s = TerminalSession::default();
        s.dispatch("about");
        s.clear_buffer();
        assert!(s.lines().is_empty());
        assert_eq!(s.view(), ViewState::About);
    }

    #[test]
    fn suggestions_use_session_registry() {
        let s = TerminalSession::default();
        let found = s.suggestions().suggest("pro");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].display_name(), "projects");
    }

    #[test]
    fn snapshot_serializes() {
        let s = TerminalSession::default();
        let json = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(json["view"], "terminal");
        assert_eq!(json["lines"][0]["kind"], "info");
        assert_eq!(json["version"], 0);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unknown_input_appends_three_lines(word in "[a-z]{1,12}") {
                let mut s = TerminalSession::default();
                prop_assume!(s.registry().lookup(&word).is_none());
                let before = s.lines().len();
                let view = s.view();
                prop_assert_eq!(s.dispatch(&word), DispatchOutcome::Unrecognized);
                prop_assert_eq!(s.lines().len(), before + 3);
                prop_assert_eq!(s.view(), view);
            }

            #[test]
            fn whitespace_never_mutates(ws in "[ \t\r\n]{0,8}") {
                let mut s = TerminalSession::default();
                let before = s.snapshot();
                prop_assert_eq!(s.dispatch(&ws), DispatchOutcome::Ignored);
                prop_assert_eq!(s.snapshot(), before);
            }
        }
    }
}
