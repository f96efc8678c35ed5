use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::record::TransformRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OutputState {
    Empty,
    Populated,
}

/// Output cards, newest first.
///
/// Records only ever enter at the front, so iteration order is creation
/// order descending. There is no per-record removal; [`OutputList::clear`]
/// exists for the page-reload reset only.
#[derive(Debug, Clone, Default)]
pub struct OutputList {
    records: VecDeque<TransformRecord>,
}

impl OutputList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OutputState {
        if self.records.is_empty() {
            OutputState::Empty
        } else {
            OutputState::Populated
        }
    }

    /// Empty → Populated, or Populated → Populated.
    pub fn prepend(&mut self, record: TransformRecord) -> &TransformRecord {
        self.records.push_front(record);
        &self.records[0]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recently added record.
    pub fn latest(&self) -> Option<&TransformRecord> {
        self.records.front()
    }

    /// Index 0 is the newest record.
    pub fn get(&self, index: usize) -> Option<&TransformRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransformRecord> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<'a> IntoIterator for &'a OutputList {
    type Item = &'a TransformRecord;
    type IntoIter = std::collections::vec_deque::Iter<'a, TransformRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
