//! Command registry: the static vocabulary of the terminal.
//!
//! Entries keep their construction order. `list_all` and `prefix_search`
//! report that order, never an alphabetical one. Names are compared
//! case-insensitively everywhere.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use termfolio_types::config::Locale;
use termfolio_types::error::{Result, TermfolioError};
use termfolio_types::line::ViewState;

/// Built-in behavior a command name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionId {
    Help,
    ShowProjects,
    ShowAbout,
    ShowContact,
    Clear,
    GoHome,
}

impl ActionId {
    pub const ALL: [ActionId; 6] = [
        ActionId::Help,
        ActionId::ShowProjects,
        ActionId::ShowAbout,
        ActionId::ShowContact,
        ActionId::Clear,
        ActionId::GoHome,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionId::Help => "help",
            ActionId::ShowProjects => "show-projects",
            ActionId::ShowAbout => "show-about",
            ActionId::ShowContact => "show-contact",
            ActionId::Clear => "clear",
            ActionId::GoHome => "go-home",
        }
    }

    /// Parse an identifier such as `show-projects`.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == id)
    }

    /// View selected after the action runs. `None` leaves the view alone.
    pub fn view_after(self) -> Option<ViewState> {
        match self {
            ActionId::Help | ActionId::GoHome => Some(ViewState::Terminal),
            ActionId::ShowProjects => Some(ViewState::Projects),
            ActionId::ShowAbout => Some(ViewState::About),
            ActionId::ShowContact => Some(ViewState::Contact),
            ActionId::Clear => None,
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    display_name: String,
    action: ActionId,
    description: String,
    aliases: Vec<String>,
}

impl CommandDescriptor {
    pub fn new(
        display_name: impl Into<String>,
        action: ActionId,
        description: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            action,
            description: description.into(),
            aliases: Vec::new(),
        }
    }

    /// Add alternative names accepted by [`CommandRegistry::lookup`].
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// The name the user types (and sees in help / suggestions).
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn action(&self) -> ActionId {
        self.action
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn answers_to(&self, folded: &str) -> bool {
        fold(&self.display_name) == folded || self.aliases.iter().any(|a| fold(a) == folded)
    }
}

/// Ordered, immutable table of recognized commands.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    entries: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Build a registry from explicit entries.
    ///
    /// Fails if a name is blank or if two names (display names or aliases)
    /// collide once case is folded.
    pub fn new(entries: Vec<CommandDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            for name in std::iter::once(&entry.display_name).chain(entry.aliases.iter()) {
                if name.trim().is_empty() || name.trim() != name.as_str() {
                    return Err(TermfolioError::Registry(format!(
                        "invalid command name: {name:?}"
                    )));
                }
                if !seen.insert(fold(name)) {
                    return Err(TermfolioError::Registry(format!(
                        "duplicate command: {name}"
                    )));
                }
            }
        }
        Ok(Self { entries })
    }

    /// The built-in vocabulary: help, projects, about, contact, clear, home.
    ///
    /// `spanish_aliases` adds `ayuda`, `proyectos`, `sobre`/`acerca`,
    /// `contacto`, `limpiar` and `inicio`.
    pub fn builtin(locale: Locale, spanish_aliases: bool) -> Self {
        let table: [(&str, ActionId, &[&str]); 6] = [
            ("help", ActionId::Help, &["ayuda"]),
            ("projects", ActionId::ShowProjects, &["proyectos"]),
            ("about", ActionId::ShowAbout, &["sobre", "acerca"]),
            ("contact", ActionId::ShowContact, &["contacto"]),
            ("clear", ActionId::Clear, &["limpiar"]),
            ("home", ActionId::GoHome, &["inicio"]),
        ];
        let entries = table
            .into_iter()
            .map(|(name, action, aliases)| {
                let desc = CommandDescriptor::new(name, action, builtin_description(action, locale));
                if spanish_aliases {
                    desc.with_aliases(aliases.iter().copied())
                } else {
                    desc
                }
            })
            .collect();
        Self { entries }
    }

    /// Case-insensitive exact match against display names and aliases.
    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor> {
        let folded = fold(name);
        self.entries.iter().find(|d| d.answers_to(&folded))
    }

    /// Every entry in registry order.
    pub fn list_all(&self) -> &[CommandDescriptor] {
        &self.entries
    }

    /// Entries whose display name starts with `partial`, ignoring case,
    /// in registry order. An empty `partial` returns every entry.
    pub fn prefix_search(&self, partial: &str) -> Vec<&CommandDescriptor> {
        let folded = fold(partial);
        self.entries
            .iter()
            .filter(|d| fold(&d.display_name).starts_with(&folded))
            .collect()
    }

    /// Display names in registry order, for quick-command buttons.
    pub fn display_names(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.display_name()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin(Locale::En, true)
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

fn builtin_description(action: ActionId, locale: Locale) -> &'static str {
    match (locale, action) {
        (Locale::En, ActionId::Help) => "Show this help",
        (Locale::En, ActionId::ShowProjects) => "Browse my projects",
        (Locale::En, ActionId::ShowAbout) => "Information about me",
        (Locale::En, ActionId::ShowContact) => "How to reach me",
        (Locale::En, ActionId::Clear) => "Clear the terminal",
        (Locale::En, ActionId::GoHome) => "Back to the start",
        (Locale::Es, ActionId::Help) => "Mostrar esta ayuda",
        (Locale::Es, ActionId::ShowProjects) => "Ver mis proyectos",
        (Locale::Es, ActionId::ShowAbout) => "Información sobre mí",
        (Locale::Es, ActionId::ShowContact) => "Cómo contactarme",
        (Locale::Es, ActionId::Clear) => "Limpiar la terminal",
        (Locale::Es, ActionId::GoHome) => "Volver al inicio",
    }
}
