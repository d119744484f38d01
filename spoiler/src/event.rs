/// Input events routed to a spoiler, targeted by element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click on `target`.
    Click { target: Option<String> },
    /// Key press while `target` has focus.
    Key { target: Option<String>, key: Key },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
}

impl Key {
    /// Keys that activate a focused button.
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpoilerEvent {
    Expand,
    Collapse,
}
