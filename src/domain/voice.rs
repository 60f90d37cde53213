//! Voice command phrases and the engine's listening model.

use crate::domain::page::PageContext;

/// What a recognised phrase asks the page to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceAction {
    Greet,
    ChangeColor,
    Navigate,
    LookUpTicker,
    LoadBreed,
}

/// A phrase in recognition-engine syntax: literal words, optionally ending in `*name`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandPattern {
    phrase: &'static str,
}

impl CommandPattern {
    pub const fn new(phrase: &'static str) -> Self {
        Self { phrase }
    }

    pub fn phrase(&self) -> &'static str {
        self.phrase
    }

    /// Words before the wildcard, and whether a wildcard exists
    fn split(&self) -> (&'static str, bool) {
        match self.phrase.find('*') {
            Some(star) => (&self.phrase[..star], true),
            None => (self.phrase, false),
        }
    }

    /// Match a whole utterance, ignoring case.
    ///
    /// Returns `None` when the utterance does not match, `Some(None)` for a literal
    /// match and `Some(Some(capture))` when the wildcard captured text. The capture
    /// keeps the utterance's casing.
    pub fn matches(&self, utterance: &str) -> Option<Option<String>> {
        let utterance = utterance.trim();
        let (prefix, wildcard) = self.split();
        if !wildcard {
            return eq_ignore_case(utterance, prefix.trim()).then_some(None);
        }
        let rest = strip_prefix_ignore_case(utterance, prefix)?;
        let capture = rest.trim();
        if capture.is_empty() {
            return None;
        }
        Some(Some(capture.to_string()))
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = rest.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let offset = rest.next().map_or(text.len(), |(index, _)| index);
    Some(&text[offset..])
}

/// A phrase bound to the action it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceCommand {
    pub pattern: CommandPattern,
    pub action: VoiceAction,
}

impl VoiceCommand {
    const fn new(phrase: &'static str, action: VoiceAction) -> Self {
        Self {
            pattern: CommandPattern::new(phrase),
            action,
        }
    }
}

const SHARED_COMMANDS: [VoiceCommand; 3] = [
    VoiceCommand::new("Hello", VoiceAction::Greet),
    VoiceCommand::new("Change the color to *color", VoiceAction::ChangeColor),
    VoiceCommand::new("Navigate to *page", VoiceAction::Navigate),
];

/// Commands registered on `page`: the shared set plus the page's own
pub fn command_table(page: PageContext) -> Vec<VoiceCommand> {
    let mut commands = SHARED_COMMANDS.to_vec();
    match page {
        PageContext::Home => {}
        PageContext::Stocks => {
            commands.push(VoiceCommand::new("Look up *stock", VoiceAction::LookUpTicker));
        }
        PageContext::Dogs => {
            commands.push(VoiceCommand::new("Load Dog Breed *breedName", VoiceAction::LoadBreed));
        }
    }
    commands
}

/// First command in `commands` matching `utterance`, with its capture
pub fn match_utterance(
    commands: &[VoiceCommand],
    utterance: &str,
) -> Option<(VoiceAction, Option<String>)> {
    commands.iter().find_map(|command| {
        command
            .pattern
            .matches(utterance)
            .map(|capture| (command.action, capture))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListeningState {
    #[default]
    Stopped,
    Listening,
}

/// Options passed to the engine's `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenOptions {
    pub auto_restart: bool,
    pub continuous: bool,
}

impl Default for ListenOptions {
    fn default() -> Self {
        Self {
            auto_restart: true,
            continuous: false,
        }
    }
}

/// Callbacks the recognition engine fires besides command matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Candidate phrases, best first
    Result(Vec<String>),
    Error(Option<String>),
    NetworkError,
    PermissionBlocked,
    PermissionDenied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_capture_keeps_casing() {
        let pattern = CommandPattern::new("Look up *stock");
        assert_eq!(pattern.matches("look UP tsla"), Some(Some("tsla".to_string())));
        assert_eq!(pattern.matches("look up"), None);
        assert_eq!(pattern.matches("look at tsla"), None);
    }

    #[test]
    fn literal_requires_whole_phrase() {
        let pattern = CommandPattern::new("Hello");
        assert_eq!(pattern.matches(" hello "), Some(None));
        assert_eq!(pattern.matches("hello there"), None);
    }

    #[test]
    fn page_specific_commands() {
        let stocks = command_table(PageContext::Stocks);
        assert!(stocks.iter().any(|c| c.action == VoiceAction::LookUpTicker));
        assert!(!stocks.iter().any(|c| c.action == VoiceAction::LoadBreed));
        assert_eq!(command_table(PageContext::Home).len(), 3);
        let dogs = command_table(PageContext::Dogs);
        assert_eq!(
            match_utterance(&dogs, "load dog breed Border Collie"),
            Some((VoiceAction::LoadBreed, Some("Border Collie".to_string())))
        );
    }
}
