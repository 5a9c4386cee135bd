//! View controllers bridging the store and a presentation surface.
//!
//! # Responsibility
//! - Turn store snapshots into per-region render calls.
//! - Drive the drag-and-drop state machine of each region.
//! - Validate intake fields before they reach the store.
//!
//! # Invariants
//! - Controllers never mutate projects directly; all changes go through
//!   `ProjectStore`.

pub mod card;
pub mod component;
pub mod intake;
pub mod region;
