use thiserror::Error;

use crate::action::TransformAction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("action disabled: {0} requires non-empty input")]
    ActionDisabled(TransformAction),

    #[error("unknown action: {0}")]
    UnknownAction(String),
}
