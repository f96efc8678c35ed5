use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::action::TransformAction;

/// The result of one button click. Built once and never changed; fields are
/// read through accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TransformRecord {
    id: Uuid,
    action: TransformAction,
    action_label: String,
    original_text: String,
    transformed_text: String,
    created_at: jiff::Timestamp,
}

impl TransformRecord {
    /// Run `action` over `original_text` and stamp the result with the
    /// current time.
    pub fn new(action: TransformAction, original_text: impl Into<String>) -> Self {
        Self::at(action, original_text, jiff::Timestamp::now())
    }

    /// Same as [`TransformRecord::new`] with an explicit timestamp.
    pub fn at(
        action: TransformAction,
        original_text: impl Into<String>,
        created_at: jiff::Timestamp,
    ) -> Self {
        let original_text = original_text.into();
        let transformed_text = action.apply(&original_text);
        Self {
            id: Uuid::new_v4(),
            action,
            action_label: action.label().to_string(),
            original_text,
            transformed_text,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn action(&self) -> TransformAction {
        self.action
    }

    pub fn action_label(&self) -> &str {
        &self.action_label
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn transformed_text(&self) -> &str {
        &self.transformed_text
    }

    pub fn created_at(&self) -> jiff::Timestamp {
        self.created_at
    }
}
