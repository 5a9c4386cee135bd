//! Authoritative project store.
//!
//! # Responsibility
//! - Own the ordered project sequence for the whole board.
//! - Apply `create`/`move` mutations and publish full snapshots.
//!
//! # Invariants
//! - Insertion order is display order and never changes.
//! - Listeners observe a snapshot only after the mutation is fully applied.
//! - A move that finds no project, or finds it already in the target status,
//!   notifies nobody.
//! - Mutation + notification pairs are serialized by one dispatch lock.
//!   Listeners may call `snapshot()` but must not mutate the store.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::listeners::{Listener, ListenerRegistry};
use log::{debug, info};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static GLOBAL_STORE: Lazy<Arc<ProjectStore>> = Lazy::new(|| {
    info!("event=store_init module=state status=ok scope=global");
    Arc::new(ProjectStore::new())
});

/// Result of a `move_project` call.
///
/// Only `Moved` triggers a notification; the other variants are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Unchanged,
    NotFound,
}

/// Single owner of all board projects.
#[derive(Default)]
pub struct ProjectStore {
    projects: Mutex<Vec<Project>>,
    listeners: ListenerRegistry<Project>,
    dispatch: Mutex<()>,
}

impl ProjectStore {
    /// Creates an isolated store. Share it with `Arc` across controllers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide store, creating it on first access.
    ///
    /// Repeated calls return the same instance; it is never torn down.
    pub fn global() -> Arc<ProjectStore> {
        Arc::clone(&GLOBAL_STORE)
    }

    /// Registers a listener that receives the full snapshot after each
    /// state-changing mutation.
    pub fn add_listener(&self, listener: Listener<Project>) {
        self.listeners.add(listener);
        debug!(
            "event=listener_added module=state status=ok listeners={}",
            self.listeners.len()
        );
    }

    /// Appends a new active project and notifies listeners.
    ///
    /// Inputs are assumed validated by the caller.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let _dispatch = self.dispatch_guard();
        let project = Project::new(title, description, people);
        let id = project.id;

        let snapshot = {
            let mut projects = self.projects_guard();
            projects.push(project);
            projects.clone()
        };

        info!(
            "event=project_created module=state status=ok project_id={} people={} total={}",
            id,
            people,
            snapshot.len()
        );
        self.listeners.notify(&snapshot);
        id
    }

    /// Moves one project to `new_status`.
    ///
    /// Notifies listeners only when the project exists and its status
    /// actually changes.
    pub fn move_project(&self, id: ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        let _dispatch = self.dispatch_guard();

        let snapshot = {
            let mut projects = self.projects_guard();
            let Some(project) = projects.iter_mut().find(|project| project.id == id) else {
                debug!(
                    "event=move_skipped module=state reason=not_found project_id={} target={}",
                    id, new_status
                );
                return MoveOutcome::NotFound;
            };
            if project.status == new_status {
                debug!(
                    "event=move_skipped module=state reason=unchanged project_id={} target={}",
                    id, new_status
                );
                return MoveOutcome::Unchanged;
            }
            let previous = project.status;
            project.status = new_status;
            info!(
                "event=project_moved module=state status=ok project_id={} from={} to={}",
                id, previous, new_status
            );
            projects.clone()
        };

        self.listeners.notify(&snapshot);
        MoveOutcome::Moved
    }

    /// Returns a copy of the current project sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects_guard().clone()
    }

    /// Looks up one project by ID.
    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.projects_guard()
            .iter()
            .find(|project| project.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.projects_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn projects_guard(&self) -> MutexGuard<'_, Vec<Project>> {
        self.projects.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch_guard(&self) -> MutexGuard<'_, ()> {
        self.dispatch.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
