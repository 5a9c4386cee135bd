//! Region controller: one status partition of the board.
//!
//! # Responsibility
//! - Keep a filtered view of the store for one status.
//! - Act as drop target for project drag payloads.
//!
//! # Invariants
//! - The view holds exactly the snapshot projects whose status matches
//!   this region, in store order.
//! - Drag state is `Hovering` only between an accepted `drag_over` and the
//!   following `drag_leave` or `drop`.
//! - A drop that cannot be decoded leaves the store untouched.

use crate::controller::card::ProjectCard;
use crate::controller::component::Component;
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::render::BoardRenderer;
use crate::state::store::{MoveOutcome, ProjectStore};
use crate::transfer::{self, DataTransfer, DropTarget};
use log::{debug, info};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Identifies one of the two board regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionKey {
    Active,
    Finished,
}

impl RegionKey {
    /// Both regions, in board order.
    pub const ALL: [RegionKey; 2] = [RegionKey::Active, RegionKey::Finished];

    /// Status shown by this region and assigned on drop.
    pub fn status(self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.status().as_str()
    }

    /// Section heading, e.g. `ACTIVE PROJECTS`.
    pub fn heading(self) -> String {
        format!("{} PROJECTS", self.as_str().to_uppercase())
    }

    /// Element ID of the region's list, e.g. `active-projects-list`.
    pub fn list_id(self) -> String {
        format!("{}-projects-list", self.as_str())
    }
}

/// Drop affordance state of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Hovering,
}

/// What a drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The payload named a project; the store reported `outcome`.
    Committed { id: ProjectId, outcome: MoveOutcome },
    /// The payload could not be decoded.
    Ignored,
}

#[derive(Debug, Default)]
struct RegionView {
    projects: Vec<Project>,
    drag_state: DragState,
}

/// Keeps projects in `status` order.
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| project.has_status(status))
        .cloned()
        .collect()
}

/// View and drop target for one status partition.
pub struct RegionController {
    key: RegionKey,
    store: Arc<ProjectStore>,
    renderer: Arc<dyn BoardRenderer>,
    view: Arc<Mutex<RegionView>>,
}

impl RegionController {
    /// Creates the controller, subscribes it to `store` and renders its
    /// heading.
    pub fn new(
        key: RegionKey,
        store: Arc<ProjectStore>,
        renderer: Arc<dyn BoardRenderer>,
    ) -> Self {
        let controller = Self {
            key,
            store,
            renderer,
            view: Arc::new(Mutex::new(RegionView::default())),
        };
        controller.configure();
        controller.render_content();
        controller
    }

    pub fn key(&self) -> RegionKey {
        self.key
    }

    /// Projects currently assigned to this region.
    pub fn projects(&self) -> Vec<Project> {
        self.view_guard().projects.clone()
    }

    /// Cards for the projects currently assigned to this region.
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.view_guard()
            .projects
            .iter()
            .map(ProjectCard::new)
            .collect()
    }

    pub fn drag_state(&self) -> DragState {
        self.view_guard().drag_state
    }

    fn view_guard(&self) -> MutexGuard<'_, RegionView> {
        lock_view(&self.view)
    }

    fn settle(&self) {
        let was_hovering = {
            let mut view = self.view_guard();
            let was_hovering = view.drag_state == DragState::Hovering;
            view.drag_state = DragState::Idle;
            was_hovering
        };
        if was_hovering {
            self.renderer.set_droppable(self.key, false);
        }
    }
}

impl Component for RegionController {
    fn configure(&self) {
        let key = self.key;
        let view = Arc::clone(&self.view);
        let renderer = Arc::clone(&self.renderer);

        self.store.add_listener(Arc::new(move |projects: &[Project]| {
            let assigned = filter_by_status(projects, key.status());
            let cards: Vec<ProjectCard> = assigned.iter().map(ProjectCard::new).collect();
            lock_view(&view).projects = assigned;
            debug!(
                "event=region_render module=controller region={} count={}",
                key.as_str(),
                cards.len()
            );
            renderer.render_list(key, &cards);
        }));
    }

    fn render_content(&self) {
        self.renderer
            .render_heading(self.key, &self.key.heading(), &self.key.list_id());
    }
}

impl DropTarget for RegionController {
    type Outcome = DropOutcome;

    fn drag_over(&self, transfer: &DataTransfer) -> bool {
        if !transfer::accepts(transfer) {
            return false;
        }
        let entered = {
            let mut view = self.view_guard();
            let entered = view.drag_state == DragState::Idle;
            view.drag_state = DragState::Hovering;
            entered
        };
        if entered {
            self.renderer.set_droppable(self.key, true);
        }
        true
    }

    fn drop(&self, transfer: &DataTransfer) -> DropOutcome {
        let outcome = match transfer::decode(transfer) {
            Some(id) => {
                let outcome = self.store.move_project(id, self.key.status());
                info!(
                    "event=drop module=controller region={} project_id={} outcome={:?}",
                    self.key.as_str(),
                    id,
                    outcome
                );
                DropOutcome::Committed { id, outcome }
            }
            None => {
                debug!(
                    "event=drop_ignored module=controller region={} reason=undecodable_payload",
                    self.key.as_str()
                );
                DropOutcome::Ignored
            }
        };
        self.settle();
        outcome
    }

    fn drag_leave(&self) {
        self.settle();
    }
}

fn lock_view(view: &Mutex<RegionView>) -> MutexGuard<'_, RegionView> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::{filter_by_status, RegionKey};
    use crate::model::project::{Project, ProjectStatus};

    #[test]
    fn region_key_names_match_list_ids() {
        assert_eq!(RegionKey::Active.heading(), "ACTIVE PROJECTS");
        assert_eq!(RegionKey::Finished.heading(), "FINISHED PROJECTS");
        assert_eq!(RegionKey::Active.list_id(), "active-projects-list");
        assert_eq!(RegionKey::Finished.status(), ProjectStatus::Finished);
    }

    #[test]
    fn filter_partitions_snapshot() {
        let mut done = Project::new("b", "long enough", 2);
        done.status = ProjectStatus::Finished;
        let snapshot = vec![
            Project::new("a", "long enough", 1),
            done,
            Project::new("c", "long enough", 3),
        ];

        let active = filter_by_status(&snapshot, ProjectStatus::Active);
        let finished = filter_by_status(&snapshot, ProjectStatus::Finished);

        assert_eq!(active.len() + finished.len(), snapshot.len());
        assert_eq!(active[0].title, "a");
        assert_eq!(active[1].title, "c");
        assert_eq!(finished[0].title, "b");
    }
}
