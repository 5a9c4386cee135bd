//! Intake controller: validates raw form fields and creates projects.
//!
//! # Responsibility
//! - Build validation rules for title, description and people.
//! - Create a project only when all three fields pass.
//!
//! # Invariants
//! - A rejected submission never touches the store or clears the form.
//! - People count must be a whole number within the configured bounds.

use crate::config::IntakeRules;
use crate::controller::component::Component;
use crate::model::project::ProjectId;
use crate::render::IntakeForm;
use crate::state::store::ProjectStore;
use crate::validation::{coerce_number, failed_constraints, Validatable};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Blocking notice shown when a submission is rejected.
pub const INVALID_INPUTS_MESSAGE: &str = "Invalid inputs";

/// Raw, unvalidated field text as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl RawProjectInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}

/// Intake form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeField {
    Title,
    Description,
    People,
}

impl IntakeField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Submission rejection.
///
/// Besides the required/length/range rules, `people` must also be a whole
/// number, since projects store the headcount as `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    InvalidInputs { fields: Vec<IntakeField> },
}

impl Display for IntakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInputs { fields } => {
                let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
                write!(f, "invalid inputs: {}", names.join(", "))
            }
        }
    }
}

impl Error for IntakeError {}

struct AcceptedInput {
    title: String,
    description: String,
    people: u32,
}

/// Collects form input and commits it to the store.
pub struct IntakeController {
    store: Arc<ProjectStore>,
    form: Arc<dyn IntakeForm>,
    rules: IntakeRules,
}

impl IntakeController {
    pub fn new(store: Arc<ProjectStore>, form: Arc<dyn IntakeForm>, rules: IntakeRules) -> Self {
        let controller = Self { store, form, rules };
        controller.configure();
        controller
    }

    pub fn rules(&self) -> &IntakeRules {
        &self.rules
    }

    /// Reads the current form fields and submits them.
    pub fn submit_form(&self) -> Result<ProjectId, IntakeError> {
        self.submit(self.form.read_inputs())
    }

    /// Validates `input`; on success creates the project and clears the form.
    ///
    /// On failure the form shows `INVALID_INPUTS_MESSAGE` and nothing else
    /// changes.
    pub fn submit(&self, input: RawProjectInput) -> Result<ProjectId, IntakeError> {
        let accepted = match self.gather(input) {
            Ok(accepted) => accepted,
            Err(err) => {
                self.form.alert(INVALID_INPUTS_MESSAGE);
                return Err(err);
            }
        };

        let id = self
            .store
            .add_project(accepted.title, accepted.description, accepted.people);
        self.form.clear_inputs();
        info!("event=intake_accepted module=controller status=ok project_id={id}");
        Ok(id)
    }

    fn gather(&self, input: RawProjectInput) -> Result<AcceptedInput, IntakeError> {
        let people = coerce_number(&input.people);
        let checks = [
            (IntakeField::Title, Validatable::text(input.title.as_str()).required()),
            (
                IntakeField::Description,
                Validatable::text(input.description.as_str())
                    .required()
                    .min_length(self.rules.description_min_length),
            ),
            (
                IntakeField::People,
                Validatable::number(people)
                    .required()
                    .min(f64::from(self.rules.people_min))
                    .max(f64::from(self.rules.people_max)),
            ),
        ];

        let mut fields = Vec::new();
        for (field, rule) in &checks {
            let failed = failed_constraints(rule);
            if !failed.is_empty() {
                let names: Vec<String> = failed.iter().map(ToString::to_string).collect();
                debug!(
                    "event=field_invalid module=controller field={} constraints={}",
                    field.as_str(),
                    names.join(",")
                );
                fields.push(*field);
            }
        }
        if !fields.contains(&IntakeField::People) && people.fract() != 0.0 {
            debug!("event=field_invalid module=controller field=people constraints=whole_number");
            fields.push(IntakeField::People);
        }

        if !fields.is_empty() {
            let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
            warn!(
                "event=intake_rejected module=controller status=rejected fields={}",
                names.join(",")
            );
            return Err(IntakeError::InvalidInputs { fields });
        }

        Ok(AcceptedInput {
            title: input.title,
            description: input.description,
            // Bounds and whole-number checks above keep this lossless.
            people: people as u32,
        })
    }
}

impl Component for IntakeController {
    fn configure(&self) {
        debug!(
            "event=intake_configured module=controller description_min_length={} people_min={} people_max={}",
            self.rules.description_min_length, self.rules.people_min, self.rules.people_max
        );
    }

    fn render_content(&self) {}
}
