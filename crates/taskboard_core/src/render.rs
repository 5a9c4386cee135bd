//! Presentation collaborator contracts.
//!
//! The core never draws anything itself. A presentation surface implements
//! these traits and redraws idempotently whenever it is called.

use crate::controller::card::ProjectCard;
use crate::controller::intake::RawProjectInput;
use crate::controller::region::RegionKey;

/// Drawing surface for the two board regions.
pub trait BoardRenderer: Send + Sync {
    /// Called once per region at construction.
    fn render_heading(&self, region: RegionKey, heading: &str, list_id: &str);

    /// Replaces the full card list of `region`. Called once per store
    /// notification per region.
    ///
    /// Runs inside a store notification: may read the store, must not call
    /// `add_project` or `move_project` (the dispatch lock is held and would
    /// deadlock).
    fn render_list(&self, region: RegionKey, cards: &[ProjectCard]);

    /// Toggles the drop affordance of `region`.
    fn set_droppable(&self, region: RegionKey, droppable: bool);
}

/// Text-entry surface backing the intake controller.
pub trait IntakeForm: Send + Sync {
    fn read_inputs(&self) -> RawProjectInput;
    fn clear_inputs(&self);
    /// Shows a blocking notice.
    fn alert(&self, message: &str);
}
