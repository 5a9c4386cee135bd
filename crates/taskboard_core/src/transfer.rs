//! Drag-transfer protocol.
//!
//! # Responsibility
//! - Encode a project ID into a drag payload when a gesture starts.
//! - Decode the ID on drop, rejecting payloads of another kind.
//!
//! # Invariants
//! - One textual channel (`PROJECT_TRANSFER_KIND`) carries the ID text.
//! - Encoded payloads only ever allow the `Move` effect.
//! - Decoding never fails loudly; a bad payload decodes to `None`.

use crate::model::project::ProjectId;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Payload kind under which project IDs travel.
pub const PROJECT_TRANSFER_KIND: &str = "text/plain";

/// Effects a drag source allows the drop target to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
}

/// Transient payload carried by one drag gesture.
///
/// Declared kinds keep the order in which data was first set, so the first
/// kind is the one a drop target inspects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    kinds: Vec<String>,
    data: BTreeMap<String, String>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `kind`, replacing any previous value.
    pub fn set_data(&mut self, kind: &str, value: impl Into<String>) {
        if !self.data.contains_key(kind) {
            self.kinds.push(kind.to_string());
        }
        self.data.insert(kind.to_string(), value.into());
    }

    /// Returns the value for `kind`, or an empty string when absent.
    pub fn get_data(&self, kind: &str) -> &str {
        self.data.get(kind).map(String::as_str).unwrap_or("")
    }

    /// Declared kinds in insertion order.
    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }
}

/// Writes `id` into `transfer` and restricts the gesture to moving.
pub fn encode(id: ProjectId, transfer: &mut DataTransfer) {
    transfer.set_data(PROJECT_TRANSFER_KIND, id.to_string());
    transfer.effect_allowed = DropEffect::Move;
}

/// Returns whether the payload declares the project kind first.
pub fn accepts(transfer: &DataTransfer) -> bool {
    transfer
        .kinds()
        .first()
        .is_some_and(|kind| kind == PROJECT_TRANSFER_KIND)
}

/// Reads the project ID back out of `transfer`.
///
/// Returns `None` for a foreign payload kind, a blank channel, or text that
/// is not a project ID.
pub fn decode(transfer: &DataTransfer) -> Option<ProjectId> {
    if !accepts(transfer) {
        return None;
    }
    let raw = transfer.get_data(PROJECT_TRANSFER_KIND).trim();
    if raw.is_empty() {
        return None;
    }
    Uuid::parse_str(raw).ok()
}

/// Capability of an element that can start a drag gesture.
pub trait DragSource {
    fn drag_start(&self, transfer: &mut DataTransfer);
    fn drag_end(&self, transfer: &DataTransfer);
}

/// Capability of an element that can receive a drop.
pub trait DropTarget {
    type Outcome;

    /// Returns `true` when the payload is accepted and the default rejection
    /// should be suppressed.
    fn drag_over(&self, transfer: &DataTransfer) -> bool;
    fn drop(&self, transfer: &DataTransfer) -> Self::Outcome;
    fn drag_leave(&self);
}
