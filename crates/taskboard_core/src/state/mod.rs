//! Board state management.
//!
//! # Responsibility
//! - Own every project in one authoritative store.
//! - Publish full snapshots to subscribed views after each mutation.
//!
//! # Invariants
//! - Projects are mutated only through `ProjectStore` methods.
//! - Each state-changing mutation produces exactly one notification pass.

pub mod listeners;
pub mod store;
