use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::transform;

/// One of the four transforms a user can trigger from the action row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TransformAction {
    Lowercase,
    Uppercase,
    CamelCase,
    CapitaliseCase,
}

impl TransformAction {
    /// Button order, left to right.
    pub const ALL: [TransformAction; 4] = [
        TransformAction::Lowercase,
        TransformAction::Uppercase,
        TransformAction::CamelCase,
        TransformAction::CapitaliseCase,
    ];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            TransformAction::Lowercase => "Lowercase",
            TransformAction::Uppercase => "Uppercase",
            TransformAction::CamelCase => "Camel case",
            TransformAction::CapitaliseCase => "Capitalise case",
        }
    }

    /// Stable hook the frontend puts on the button (`data-testid`).
    pub fn test_id(self) -> &'static str {
        match self {
            TransformAction::Lowercase => "lowercase-action",
            TransformAction::Uppercase => "uppercase-action",
            TransformAction::CamelCase => "camelcase-action",
            TransformAction::CapitaliseCase => "capitalisecase-action",
        }
    }

    /// snake_case wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TransformAction::Lowercase => "lowercase",
            TransformAction::Uppercase => "uppercase",
            TransformAction::CamelCase => "camel_case",
            TransformAction::CapitaliseCase => "capitalise_case",
        }
    }

    /// Heading shown on an output card, e.g. "Uppercase Transform".
    pub fn card_title(self) -> String {
        format!("{} Transform", self.label())
    }

    pub fn apply(self, input: &str) -> String {
        match self {
            TransformAction::Lowercase => transform::lowercase(input),
            TransformAction::Uppercase => transform::uppercase(input),
            TransformAction::CamelCase => transform::camel_case(input),
            TransformAction::CapitaliseCase => transform::capitalise_case(input),
        }
    }
}

impl fmt::Display for TransformAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the wire name, the test hook, or the button label, ignoring case.
impl FromStr for TransformAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TransformAction::ALL
            .into_iter()
            .find(|action| {
                [action.as_str(), action.test_id(), action.label()]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| CoreError::UnknownAction(s.to_string()))
    }
}
