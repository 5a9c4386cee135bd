//! Board composition root.
//!
//! # Responsibility
//! - Wire one intake controller and both region controllers to one store.
//! - Offer a whole-gesture helper for moving a project between regions.
//!
//! # Invariants
//! - The active region subscribes before the finished region, so it is
//!   always notified first.

use crate::config::{BoardConfig, ConfigError};
use crate::controller::card::ProjectCard;
use crate::controller::intake::IntakeController;
use crate::controller::region::{DropOutcome, RegionController, RegionKey};
use crate::model::project::ProjectId;
use crate::render::{BoardRenderer, IntakeForm};
use crate::state::store::ProjectStore;
use crate::transfer::{DataTransfer, DragSource, DropTarget};
use log::info;
use std::sync::Arc;

/// A fully wired board.
pub struct Board {
    store: Arc<ProjectStore>,
    intake: IntakeController,
    active: RegionController,
    finished: RegionController,
}

impl Board {
    /// Builds a board over `store`.
    ///
    /// # Errors
    /// Returns `ConfigError` when `config` fails validation.
    pub fn new(
        store: Arc<ProjectStore>,
        renderer: Arc<dyn BoardRenderer>,
        form: Arc<dyn IntakeForm>,
        config: &BoardConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let intake = IntakeController::new(Arc::clone(&store), form, config.intake.clone());
        let active =
            RegionController::new(RegionKey::Active, Arc::clone(&store), Arc::clone(&renderer));
        let finished = RegionController::new(RegionKey::Finished, Arc::clone(&store), renderer);
        info!(
            "event=board_init module=board status=ok listeners={}",
            store.listener_count()
        );

        Ok(Self {
            store,
            intake,
            active,
            finished,
        })
    }

    /// Builds a board over the process-wide store.
    pub fn with_global_store(
        renderer: Arc<dyn BoardRenderer>,
        form: Arc<dyn IntakeForm>,
        config: &BoardConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(ProjectStore::global(), renderer, form, config)
    }

    pub fn store(&self) -> &Arc<ProjectStore> {
        &self.store
    }

    pub fn intake(&self) -> &IntakeController {
        &self.intake
    }

    pub fn region(&self, key: RegionKey) -> &RegionController {
        match key {
            RegionKey::Active => &self.active,
            RegionKey::Finished => &self.finished,
        }
    }

    /// Plays a full drag gesture: pick up the card for `id` from whichever
    /// region shows it, hover over `target`, then drop.
    ///
    /// Returns `DropOutcome::Ignored` when no region shows `id` or the
    /// target refuses the payload.
    pub fn drag_project(&self, id: ProjectId, target: RegionKey) -> DropOutcome {
        let Some(card) = self.find_card(id) else {
            return DropOutcome::Ignored;
        };

        let mut transfer = DataTransfer::new();
        card.drag_start(&mut transfer);
        let target = self.region(target);
        let outcome = if target.drag_over(&transfer) {
            target.drop(&transfer)
        } else {
            target.drag_leave();
            DropOutcome::Ignored
        };
        card.drag_end(&transfer);
        outcome
    }

    fn find_card(&self, id: ProjectId) -> Option<ProjectCard> {
        RegionKey::ALL.iter().find_map(|key| {
            self.region(*key)
                .cards()
                .into_iter()
                .find(|card| card.id() == id)
        })
    }
}
