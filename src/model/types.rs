//! Worker and position records.
//!
//! These mirror the shape of the external data collaborator's tables:
//! workers carry an id, a display name, and a shift label; positions carry
//! an id, a display name, a classifier group, a family tag, and an optional
//! restriction tag. Absence of a restriction tag means no restriction can
//! ever apply to that position.

use serde::{Deserialize, Serialize};

/// A worker available for assignment on the target day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Shift label (e.g. a morning/evening tag used by the caller to
    /// pre-filter the roster).
    pub shift: String,
}

/// A physical position that can be occupied for one hourly slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Unique position identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Classifier group. A worker should stay within one classifier group
    /// for the whole day.
    pub classifier_group: u32,
    /// Family tag. Consecutive slots for the same worker should avoid
    /// repeating the same family.
    pub family: String,
    /// Restriction tag, if any. Workers whose restriction set contains
    /// this tag must not occupy the position.
    pub restriction_tag: Option<String>,
}

impl Worker {
    /// Creates a worker with an empty shift label.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            shift: String::new(),
        }
    }

    /// Sets the shift label.
    pub fn with_shift(mut self, shift: impl Into<String>) -> Self {
        self.shift = shift.into();
        self
    }
}

impl Position {
    /// Creates an unrestricted position.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        classifier_group: u32,
        family: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            classifier_group,
            family: family.into(),
            restriction_tag: None,
        }
    }

    /// Sets the restriction tag.
    pub fn with_restriction_tag(mut self, tag: impl Into<String>) -> Self {
        self.restriction_tag = Some(tag.into());
        self
    }
}
