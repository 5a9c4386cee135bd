//! Core state and interaction logic for the project board.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod render;
pub mod state;
pub mod transfer;
pub mod validation;

pub use board::Board;
pub use config::{BoardConfig, ConfigError, IntakeRules};
pub use controller::card::ProjectCard;
pub use controller::component::Component;
pub use controller::intake::{
    IntakeController, IntakeError, IntakeField, RawProjectInput, INVALID_INPUTS_MESSAGE,
};
pub use controller::region::{
    filter_by_status, DragState, DropOutcome, RegionController, RegionKey,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use render::{BoardRenderer, IntakeForm};
pub use state::listeners::{Listener, ListenerRegistry};
pub use state::store::{MoveOutcome, ProjectStore};
pub use transfer::{DataTransfer, DragSource, DropEffect, DropTarget, PROJECT_TRANSFER_KIND};
pub use validation::{coerce_number, validate, Constraint, Validatable, ValidatableValue};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
