//! Render and drag model for one project inside a region.

use crate::model::project::{Project, ProjectId};
use crate::transfer::{self, DataTransfer, DragSource};
use log::debug;

/// Read-only card shown for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    project: Project,
}

impl ProjectCard {
    pub fn new(project: &Project) -> Self {
        Self {
            project: project.clone(),
        }
    }

    pub fn id(&self) -> ProjectId {
        self.project.id
    }

    /// Element ID for the card, the project ID text.
    pub fn element_id(&self) -> String {
        self.project.id.to_string()
    }

    pub fn title(&self) -> &str {
        &self.project.title
    }

    pub fn description(&self) -> &str {
        &self.project.description
    }

    /// Headcount line, e.g. `2 persons assigned`.
    pub fn people_heading(&self) -> String {
        match self.project.people_label() {
            Some(label) => format!("{label} assigned"),
            None => "nobody assigned".to_string(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }
}

impl DragSource for ProjectCard {
    fn drag_start(&self, transfer: &mut DataTransfer) {
        transfer::encode(self.project.id, transfer);
        debug!(
            "event=drag_start module=controller project_id={}",
            self.project.id
        );
    }

    fn drag_end(&self, _transfer: &DataTransfer) {
        debug!(
            "event=drag_end module=controller project_id={}",
            self.project.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectCard;
    use crate::model::project::Project;
    use crate::transfer::{decode, DataTransfer, DragSource, DropEffect};

    #[test]
    fn people_heading_reads_naturally() {
        let card = ProjectCard::new(&Project::new("t", "long enough", 1));
        assert_eq!(card.people_heading(), "1 person assigned");

        let card = ProjectCard::new(&Project::new("t", "long enough", 3));
        assert_eq!(card.people_heading(), "3 persons assigned");
    }

    #[test]
    fn drag_start_encodes_project_id_for_move() {
        let project = Project::new("t", "long enough", 2);
        let card = ProjectCard::new(&project);
        let mut transfer = DataTransfer::new();

        card.drag_start(&mut transfer);
        card.drag_end(&transfer);

        assert_eq!(transfer.effect_allowed, DropEffect::Move);
        assert_eq!(decode(&transfer), Some(project.id));
        assert_eq!(card.element_id(), project.id.to_string());
    }
}
