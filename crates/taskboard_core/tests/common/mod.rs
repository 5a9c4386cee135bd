#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use taskboard_core::{
    Board, BoardConfig, BoardRenderer, IntakeForm, ProjectCard, ProjectId, ProjectStore,
    RawProjectInput, RegionKey,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Heading {
        region: RegionKey,
        heading: String,
        list_id: String,
    },
    List {
        region: RegionKey,
        ids: Vec<ProjectId>,
        titles: Vec<String>,
    },
    Droppable {
        region: RegionKey,
        droppable: bool,
    },
}

#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Every list render for `region`, as ID lists.
    pub fn lists(&self, region: RegionKey) -> Vec<Vec<ProjectId>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RenderEvent::List { region: r, ids, .. } if r == region => Some(ids),
                _ => None,
            })
            .collect()
    }

    pub fn list_render_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, RenderEvent::List { .. }))
            .count()
    }

    pub fn droppable_toggles(&self, region: RegionKey) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RenderEvent::Droppable {
                    region: r,
                    droppable,
                } if r == region => Some(droppable),
                _ => None,
            })
            .collect()
    }
}

impl BoardRenderer for RecordingRenderer {
    fn render_heading(&self, region: RegionKey, heading: &str, list_id: &str) {
        self.events.lock().unwrap().push(RenderEvent::Heading {
            region,
            heading: heading.to_string(),
            list_id: list_id.to_string(),
        });
    }

    fn render_list(&self, region: RegionKey, cards: &[ProjectCard]) {
        self.events.lock().unwrap().push(RenderEvent::List {
            region,
            ids: cards.iter().map(ProjectCard::id).collect(),
            titles: cards.iter().map(|card| card.title().to_string()).collect(),
        });
    }

    fn set_droppable(&self, region: RegionKey, droppable: bool) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::Droppable { region, droppable });
    }
}

#[derive(Default)]
pub struct RecordingForm {
    inputs: Mutex<RawProjectInput>,
    clear_count: Mutex<usize>,
    alerts: Mutex<Vec<String>>,
}

impl RecordingForm {
    pub fn type_inputs(&self, title: &str, description: &str, people: &str) {
        *self.inputs.lock().unwrap() = RawProjectInput::new(title, description, people);
    }

    pub fn current_inputs(&self) -> RawProjectInput {
        self.inputs.lock().unwrap().clone()
    }

    pub fn clear_count(&self) -> usize {
        *self.clear_count.lock().unwrap()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl IntakeForm for RecordingForm {
    fn read_inputs(&self) -> RawProjectInput {
        self.current_inputs()
    }

    fn clear_inputs(&self) {
        *self.inputs.lock().unwrap() = RawProjectInput::default();
        *self.clear_count.lock().unwrap() += 1;
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

pub struct Harness {
    pub board: Board,
    pub renderer: Arc<RecordingRenderer>,
    pub form: Arc<RecordingForm>,
}

pub fn harness() -> Harness {
    harness_with_config(&BoardConfig::default())
}

pub fn harness_with_config(config: &BoardConfig) -> Harness {
    let renderer = Arc::new(RecordingRenderer::default());
    let form = Arc::new(RecordingForm::default());
    let board = Board::new(
        Arc::new(ProjectStore::new()),
        renderer.clone(),
        form.clone(),
        config,
    )
    .expect("config should be valid");
    Harness {
        board,
        renderer,
        form,
    }
}
