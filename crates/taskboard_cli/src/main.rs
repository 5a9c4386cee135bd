//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one scripted board session against a console surface.
//! - Start file logging before the board is wired.
//! - Keep output deterministic apart from generated project IDs.

use std::sync::{Arc, Mutex};
use taskboard_core::{
    Board, BoardConfig, BoardRenderer, IntakeForm, ProjectCard, RawProjectInput, RegionKey,
};

const LOG_DIR_NAME: &str = "taskboard-logs";

struct ConsoleRenderer;

impl BoardRenderer for ConsoleRenderer {
    fn render_heading(&self, region: RegionKey, heading: &str, list_id: &str) {
        println!("[{}] heading={heading:?} list={list_id}", region.as_str());
    }

    fn render_list(&self, region: RegionKey, cards: &[ProjectCard]) {
        println!("[{}] {} project(s)", region.as_str(), cards.len());
        for card in cards {
            println!(
                "  - {} | {} | {}",
                card.title(),
                card.people_heading(),
                card.description()
            );
        }
    }

    fn set_droppable(&self, region: RegionKey, droppable: bool) {
        println!("[{}] droppable={droppable}", region.as_str());
    }
}

#[derive(Default)]
struct ScriptedForm {
    inputs: Mutex<RawProjectInput>,
}

impl ScriptedForm {
    fn type_inputs(&self, title: &str, description: &str, people: &str) {
        if let Ok(mut inputs) = self.inputs.lock() {
            *inputs = RawProjectInput::new(title, description, people);
        }
    }
}

impl IntakeForm for ScriptedForm {
    fn read_inputs(&self) -> RawProjectInput {
        self.inputs
            .lock()
            .map(|inputs| inputs.clone())
            .unwrap_or_default()
    }

    fn clear_inputs(&self) {
        if let Ok(mut inputs) = self.inputs.lock() {
            *inputs = RawProjectInput::default();
        }
    }

    fn alert(&self, message: &str) {
        println!("alert: {message}");
    }
}

fn main() {
    println!("taskboard_core version={}", taskboard_core::core_version());

    let config = BoardConfig::default();
    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    if let Err(err) =
        taskboard_core::init_logging(config.effective_log_level(), &log_dir.to_string_lossy())
    {
        eprintln!("logging setup failed: {err}");
        std::process::exit(1);
    }
    println!("logs={}", log_dir.display());

    let form = Arc::new(ScriptedForm::default());
    let board = match Board::with_global_store(Arc::new(ConsoleRenderer), form.clone(), &config) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("board setup failed: {err}");
            std::process::exit(1);
        }
    };

    form.type_inputs("Fix bug", "abc", "3");
    if let Err(err) = board.intake().submit_form() {
        println!("rejected: {err}");
    }

    form.type_inputs("Fix bug", "reproduce and patch the crash", "3");
    let Ok(id) = board.intake().submit_form() else {
        eprintln!("valid submission was rejected");
        std::process::exit(1);
    };

    let outcome = board.drag_project(id, RegionKey::Finished);
    println!("drop outcome={outcome:?}");
}
