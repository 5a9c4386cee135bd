use taskboard_core::{Project, ProjectStatus};
use uuid::Uuid;

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut project = Project::with_id(id, "Fix bug", "desc-long-enough", 3);
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Fix bug");
    assert_eq!(json["description"], "desc-long-enough");
    assert_eq!(json["people"], 3);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn unknown_status_is_rejected() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "x",
        "description": "yyyy",
        "people": 1,
        "status": "archived"
    });
    assert!(serde_json::from_value::<Project>(value).is_err());
}
