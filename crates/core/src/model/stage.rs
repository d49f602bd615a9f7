use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::StageId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while validating a stage list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StageError {
    #[error("stage positions must be strictly increasing (position {position} at index {index})")]
    PositionOrder { index: usize, position: u32 },
}

//
// ─── STAGE ────────────────────────────────────────────────────────────────────
//

/// An ordered phase of a project's lifecycle.
///
/// `position` is the ordinal the backend assigns; it defines the total order
/// among the stages of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub name: String,
    pub position: u32,
}

impl Stage {
    #[must_use]
    pub fn new(id: StageId, name: impl Into<String>, position: u32) -> Self {
        Self {
            id,
            name: name.into(),
            position,
        }
    }
}

//
// ─── STAGE LIST ───────────────────────────────────────────────────────────────
//

/// A project's stages in stored order.
///
/// Positions are unique and strictly increasing; `new` rejects anything else
/// so downstream completion math can rely on it. An empty list is valid and
/// renders as a loading/empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Stage>", into = "Vec<Stage>")]
pub struct StageList {
    stages: Vec<Stage>,
}

impl StageList {
    /// Validate and wrap a stage list.
    ///
    /// # Errors
    ///
    /// Returns `StageError::PositionOrder` when positions are not strictly
    /// increasing in stored order.
    pub fn new(stages: Vec<Stage>) -> Result<Self, StageError> {
        for (index, pair) in stages.windows(2).enumerate() {
            if pair[1].position <= pair[0].position {
                return Err(StageError::PositionOrder {
                    index: index + 1,
                    position: pair[1].position,
                });
            }
        }
        Ok(Self { stages })
    }

    /// An empty stage list.
    #[must_use]
    pub fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    /// Index of the first stage the given predicate accepts.
    #[must_use]
    pub fn position_of(&self, mut pred: impl FnMut(&Stage) -> bool) -> Option<usize> {
        self.stages.iter().position(|stage| pred(stage))
    }
}

impl TryFrom<Vec<Stage>> for StageList {
    type Error = StageError;

    fn try_from(stages: Vec<Stage>) -> Result<Self, Self::Error> {
        Self::new(stages)
    }
}

impl From<StageList> for Vec<Stage> {
    fn from(list: StageList) -> Self {
        list.stages
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
