//! Player input commands.

use natter_core::MAX_RESPONSES;

/// One discrete player or world input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Start an encounter, or move on with the first response.
    Interact,
    /// Pick a response by zero-based index; slot 1 on screen is `Select(0)`.
    Select(usize),
    /// End the running encounter.
    Quit,
    /// An object with this tag entered the player's trigger volume.
    Enter(String),
    /// An object with this tag left the player's trigger volume.
    Exit(String),
}

impl Input {
    /// Parse a typed command.
    ///
    /// Accepts `n`/`interact`, the slot numbers `1`..`3`, `q`/`quit`,
    /// `enter <tag>` and `exit <tag>`.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };

        match (cmd.to_lowercase().as_str(), rest) {
            ("n" | "interact", "") => Some(Self::Interact),
            ("q" | "quit", "") => Some(Self::Quit),
            ("enter", tag) if !tag.is_empty() => Some(Self::Enter(tag.to_string())),
            ("exit", tag) if !tag.is_empty() => Some(Self::Exit(tag.to_string())),
            (slot, "") => slot
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=MAX_RESPONSES).contains(n))
                .map(|n| Self::Select(n - 1)),
            _ => None,
        }
    }

    /// Whether the input moves a conversation along.
    pub fn is_progression(&self) -> bool {
        matches!(self, Self::Interact | Self::Select(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keys() {
        assert_eq!(Input::parse("n"), Some(Input::Interact));
        assert_eq!(Input::parse(" Interact "), Some(Input::Interact));
        assert_eq!(Input::parse("q"), Some(Input::Quit));
        assert_eq!(Input::parse("QUIT"), Some(Input::Quit));
    }

    #[test]
    fn parse_slots() {
        assert_eq!(Input::parse("1"), Some(Input::Select(0)));
        assert_eq!(Input::parse("2"), Some(Input::Select(1)));
        assert_eq!(Input::parse("3"), Some(Input::Select(2)));
        assert_eq!(Input::parse("0"), None);
        assert_eq!(Input::parse("4"), None);
    }

    #[test]
    fn parse_proximity() {
        assert_eq!(
            Input::parse("enter TalkTarget"),
            Some(Input::Enter("TalkTarget".to_string()))
        );
        assert_eq!(
            Input::parse("exit  TalkTarget"),
            Some(Input::Exit("TalkTarget".to_string()))
        );
        assert_eq!(Input::parse("enter"), None);
    }

    #[test]
    fn parse_garbage() {
        assert_eq!(Input::parse(""), None);
        assert_eq!(Input::parse("dance"), None);
        assert_eq!(Input::parse("n now"), None);
    }

    #[test]
    fn progression_inputs() {
        assert!(Input::Interact.is_progression());
        assert!(Input::Select(1).is_progression());
        assert!(!Input::Quit.is_progression());
        assert!(!Input::Enter("TalkTarget".into()).is_progression());
    }
}
