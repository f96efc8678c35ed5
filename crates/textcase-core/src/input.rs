use serde::Serialize;

/// The text currently typed into the input box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputHolder {
    text: String,
}

/// Emitted by [`InputHolder::set`] when the stored text actually changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputChange {
    pub previous: String,
    pub current: String,
}

impl InputChange {
    /// True when this change flipped the actions between enabled and disabled.
    pub fn toggled_actions(&self) -> bool {
        self.previous.is_empty() != self.current.is_empty()
    }
}

impl InputHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Returns `None` when `text` equals what is already
    /// held, so callers only notify on real edits.
    pub fn set(&mut self, text: impl Into<String>) -> Option<InputChange> {
        let text = text.into();
        if text == self.text {
            return None;
        }
        let previous = std::mem::replace(&mut self.text, text);
        Some(InputChange {
            previous,
            current: self.text.clone(),
        })
    }

    pub fn clear(&mut self) -> Option<InputChange> {
        self.set(String::new())
    }

    /// Actions are enabled exactly when at least one character is held.
    pub fn actions_enabled(&self) -> bool {
        !self.text.is_empty()
    }
}
