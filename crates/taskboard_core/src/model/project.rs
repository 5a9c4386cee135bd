//! Project domain model.
//!
//! # Responsibility
//! - Define the record tracked by the board store.
//! - Provide the status enum that partitions projects across regions.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `title`, `description` and `people` never change after creation.
//! - `status` is mutated only through the store.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project.
///
/// Its hyphenated text form is the value carried by drag payloads.
pub type ProjectId = Uuid;

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing.
    Active,
    /// Work is complete.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase name used in logs and serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of trackable work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned. Intake keeps this within `1..=5`.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a generated stable ID.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, people)
    }

    /// Creates an active project with a caller-provided ID.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Returns whether this project is in the given status.
    pub fn has_status(&self, status: ProjectStatus) -> bool {
        self.status == status
    }

    /// Human-readable headcount, e.g. `1 person` or `3 persons`.
    ///
    /// Returns `None` for a zero headcount, which intake never produces.
    pub fn people_label(&self) -> Option<String> {
        match self.people {
            0 => None,
            1 => Some("1 person".to_string()),
            n => Some(format!("{n} persons")),
        }
    }
}
