use serde::{Deserialize, Serialize};
use specta::Type;

use textcase_core::{OutputState, Session, TransformAction, TransformRecord};

/// What the frontend renders: the input box, the action row, and the
/// output cards newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct SessionView {
    pub input: String,
    /// `"empty"` or `"populated"`.
    pub state: String,
    pub actions: Vec<ActionView>,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct ActionView {
    pub action: String,
    pub label: String,
    pub test_id: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct CardView {
    pub id: String,
    pub action: String,
    pub action_label: String,
    pub title: String,
    pub original_text: String,
    pub transformed_text: String,
    /// RFC 3339, UTC.
    pub created_at: String,
}

impl SessionView {
    pub fn from_session(session: &Session) -> Self {
        let state = match session.state() {
            OutputState::Empty => "empty",
            OutputState::Populated => "populated",
        };

        Self {
            input: session.input().to_string(),
            state: state.to_string(),
            actions: TransformAction::ALL
                .into_iter()
                .map(|action| ActionView::new(action, session.is_enabled(action)))
                .collect(),
            cards: session.outputs().iter().map(CardView::from).collect(),
        }
    }
}

impl ActionView {
    fn new(action: TransformAction, enabled: bool) -> Self {
        Self {
            action: action.as_str().to_string(),
            label: action.label().to_string(),
            test_id: action.test_id().to_string(),
            enabled,
        }
    }
}

impl From<&TransformRecord> for CardView {
    fn from(record: &TransformRecord) -> Self {
        Self {
            id: record.id().to_string(),
            action: record.action().as_str().to_string(),
            action_label: record.action_label().to_string(),
            title: record.action().card_title(),
            original_text: record.original_text().to_string(),
            transformed_text: record.transformed_text().to_string(),
            created_at: record.created_at().to_string(),
        }
    }
}
