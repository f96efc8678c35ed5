use crate::action::TransformAction;
use crate::error::CoreError;
use crate::input::{InputChange, InputHolder};
use crate::output::{OutputList, OutputState};
use crate::record::TransformRecord;

/// Everything a page holds between reloads: the input text and the cards
/// produced from it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    input: InputHolder,
    outputs: OutputList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    pub fn set_input(&mut self, text: impl Into<String>) -> Option<InputChange> {
        let change = self.input.set(text);
        if let Some(change) = &change {
            tracing::debug!(
                len = change.current.chars().count(),
                toggled = change.toggled_actions(),
                "input changed"
            );
        }
        change
    }

    pub fn actions_enabled(&self) -> bool {
        self.input.actions_enabled()
    }

    /// Every action shares the same guard; the per-action form keeps call
    /// sites readable when rendering buttons.
    pub fn is_enabled(&self, _action: TransformAction) -> bool {
        self.actions_enabled()
    }

    /// Transform the current input with `action` and put the result at the
    /// top of the output list. Rejected while the input is empty.
    pub fn apply(&mut self, action: TransformAction) -> Result<&TransformRecord, CoreError> {
        if !self.is_enabled(action) {
            return Err(CoreError::ActionDisabled(action));
        }

        let record = TransformRecord::new(action, self.input.text());
        tracing::info!(%action, cards = self.outputs.len() + 1, "transform applied");
        Ok(self.outputs.prepend(record))
    }

    pub fn outputs(&self) -> &OutputList {
        &self.outputs
    }

    pub fn state(&self) -> OutputState {
        self.outputs.state()
    }

    /// Back to the state of a freshly loaded page.
    pub fn reset(&mut self) {
        let dropped = self.outputs.len();
        self.input.clear();
        self.outputs.clear();
        tracing::info!(dropped, "session reset");
    }
}
