use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;
use taskboard_core::{MoveOutcome, Project, ProjectStatus, ProjectStore};
use uuid::Uuid;

fn observed_store() -> (Arc<ProjectStore>, Arc<Mutex<Vec<Vec<Project>>>>) {
    let store = Arc::new(ProjectStore::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.add_listener(Arc::new(move |projects: &[Project]| {
        sink.lock().unwrap().push(projects.to_vec());
    }));
    (store, seen)
}

#[test]
fn every_listener_gets_full_snapshot_after_create() {
    let store = ProjectStore::new();
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));
    for sink in [Arc::clone(&first), Arc::clone(&second)] {
        store.add_listener(Arc::new(move |projects: &[Project]| {
            sink.lock().unwrap().push(projects.len());
        }));
    }

    store.add_project("one", "first project", 1);
    store.add_project("two", "second project", 2);

    assert_eq!(*first.lock().unwrap(), vec![1, 2]);
    assert_eq!(*second.lock().unwrap(), vec![1, 2]);
    assert_eq!(store.listener_count(), 2);
}

#[test]
fn move_snapshot_reflects_new_status() {
    let (store, seen) = observed_store();
    let keep = store.add_project("keep", "stays active", 2);
    let moved = store.add_project("move", "gets finished", 3);

    assert_eq!(
        store.move_project(moved, ProjectStatus::Finished),
        MoveOutcome::Moved
    );

    let seen = seen.lock().unwrap();
    let last = seen.last().unwrap();
    assert_eq!(seen.len(), 3);
    assert_eq!(last.len(), 2);
    assert_eq!(last[0].id, keep);
    assert_eq!(last[0].status, ProjectStatus::Active);
    assert_eq!(last[1].id, moved);
    assert_eq!(last[1].status, ProjectStatus::Finished);
}

#[test]
fn repeated_same_status_moves_notify_once() {
    let (store, seen) = observed_store();
    let id = store.add_project("a", "long enough", 1);
    store.move_project(id, ProjectStatus::Finished);
    let baseline = seen.lock().unwrap().len();

    for _ in 0..5 {
        assert_eq!(
            store.move_project(id, ProjectStatus::Finished),
            MoveOutcome::Unchanged
        );
    }

    assert_eq!(seen.lock().unwrap().len(), baseline);
}

#[test]
fn unknown_id_move_is_silent() {
    let (store, seen) = observed_store();
    store.add_project("a", "long enough", 1);
    let before = store.snapshot();

    assert_eq!(
        store.move_project(Uuid::new_v4(), ProjectStatus::Finished),
        MoveOutcome::NotFound
    );

    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn snapshot_copies_do_not_alias_store() {
    let store = ProjectStore::new();
    let id = store.add_project("a", "long enough", 1);

    let mut copy = store.snapshot();
    copy[0].status = ProjectStatus::Finished;
    copy.clear();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(id).unwrap().status, ProjectStatus::Active);
}

#[test]
fn insertion_order_is_preserved() {
    let store = ProjectStore::new();
    let ids: Vec<_> = (0..10)
        .map(|n| store.add_project(format!("p{n}"), "long enough", 1))
        .collect();
    let stored: Vec<_> = store.snapshot().into_iter().map(|p| p.id).collect();
    assert_eq!(stored, ids);
}

#[test]
fn concurrent_creates_are_serialized() {
    let (store, seen) = observed_store();
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..25)
                    .map(|n| store.add_project(format!("w{worker}-{n}"), "long enough", 1))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: HashSet<_> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(ids.len(), 100);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 100);
    // Serialized dispatch means each pass sees exactly one more project.
    for (index, snapshot) in seen.iter().enumerate() {
        assert_eq!(snapshot.len(), index + 1);
    }
}
