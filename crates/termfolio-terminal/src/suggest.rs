//! Autocomplete over the command registry.

use crate::registry::{CommandDescriptor, CommandRegistry};

/// Prefix suggestions for a partially typed command.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    /// Entries starting with `partial` (case-insensitive), in registry order.
    /// The empty string suggests every command.
    pub fn suggest(&self, partial: &str) -> Vec<&'a CommandDescriptor> {
        self.registry.prefix_search(partial)
    }

    /// Text to put in the input field on Tab.
    ///
    /// Returns the longest common prefix of all suggested display names, or
    /// `None` when nothing matches or the completion would not extend the
    /// input.
    pub fn complete(&self, partial: &str) -> Option<String> {
        let matches = self.suggest(partial);
        let (first, rest) = matches.split_first()?;
        let mut common: Vec<char> = first.display_name().chars().collect();
        for d in rest {
            let shared = common
                .iter()
                .zip(d.display_name().chars())
                .take_while(|(a, b)| a.eq_ignore_ascii_case(b))
                .count();
            common.truncate(shared);
        }
        let completion: String = common.into_iter().collect();
        (completion.chars().count() > partial.chars().count()).then_some(completion)
    }
}
