//! Board domain model.
//!
//! # Responsibility
//! - Define the canonical project record shared by both board regions.
//! - Keep one project shape for active and finished projections.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Status is the only field that changes after creation.

pub mod project;
