// ../tests/tests.rs
use attribute_tracker::clock::FixedClock;
use attribute_tracker::*;
use std::fs;

fn tracker() -> Tracker {
    Tracker::new(Catalog::default()).with_clock(FixedClock("21:15:02".to_string()))
}

fn snapshot(tracker: &Tracker) -> (u32, u32, u32, u32) {
    let attributes = tracker.attributes();
    (
        attributes.hp,
        attributes.stamina,
        attributes.strength,
        attributes.intelligence,
    )
}

#[test]
fn meditate_then_delete_returns_to_baseline() {
    let mut tracker = tracker();

    assert!(tracker.apply_action("Meditate").unwrap());
    assert_eq!(snapshot(&tracker), (105, 105, 0, 1));
    assert_eq!(
        tracker.logs(),
        &[LogEntry::Action {
            action: "Meditate".to_string(),
            time: "21:15:02".to_string(),
            effects: Effect::new()
                .with(Attribute::Intelligence, 1)
                .with(Attribute::Health, 5)
                .with(Attribute::Stamina, 5),
        }]
    );

    tracker.delete_log_entry(0).unwrap();
    assert_eq!(snapshot(&tracker), (100, 100, 0, 0));
    assert!(tracker.logs().is_empty());
}

#[test]
fn stay_up_late_only_applies_once() {
    let mut tracker = tracker();

    assert!(tracker.apply_action("Stay up late").unwrap());
    assert_eq!(snapshot(&tracker), (50, 50, 0, 0));

    let action = tracker.catalog().action("Stay up late").unwrap().clone();
    assert!(!tracker.can_apply(&action));
    assert!(!tracker.apply_action("Stay up late").unwrap());
    assert_eq!(snapshot(&tracker), (50, 50, 0, 0));
    assert_eq!(tracker.logs().len(), 1);
}

#[test]
fn once_only_gate_ignores_restored_attributes() {
    let mut tracker = tracker();
    tracker.apply_action("Stay up late").unwrap();
    for _ in 0..11 {
        tracker.apply_action("Meditate").unwrap();
    }
    assert!(tracker.attributes().hp > 100);

    let action = tracker.catalog().action("Stay up late").unwrap().clone();
    assert!(!tracker.can_apply(&action));

    tracker.reset_all().unwrap();
    assert!(tracker.can_apply(&action));
}

#[test]
fn drained_attributes_block_actions_that_lower_them() {
    let mut tracker = tracker();
    let sequence = [
        "Scroll the phone",
        "Stay up late",
        "Exercise",
        "Scroll the phone",
        "Meditate",
        "Scroll the phone",
        "Scroll the phone",
    ];
    let scroll = tracker.catalog().action("Scroll the phone").unwrap().clone();
    for _ in 0..30 {
        for name in sequence {
            tracker.apply_action(name).unwrap();
            let attributes = tracker.attributes();
            if attributes.hp == 0 || attributes.stamina == 0 {
                assert!(!tracker.can_apply(&scroll));
            }
        }
        tracker.delete_log_entry(3).unwrap();
    }
    while tracker.apply_action("Scroll the phone").unwrap() {}
    let (hp, stamina, _, _) = snapshot(&tracker);
    assert!(hp == 0 || stamina == 0);

    while !tracker.logs().is_empty() {
        tracker.delete_log_entry(tracker.logs().len() / 2).unwrap();
    }
    // Strength and intelligence only ever rise, so unwinding the log returns them exactly.
    let (_, _, strength, intelligence) = snapshot(&tracker);
    assert_eq!((strength, intelligence), (0, 0));
}

#[test]
fn deleting_a_clamped_entry_restores_the_previous_value() {
    let mut tracker = tracker();
    for _ in 0..19 {
        tracker.apply_action("Scroll the phone").unwrap();
    }
    assert_eq!(tracker.attributes().hp, 5);
    tracker.apply_action("Stay up late").unwrap();
    assert_eq!(tracker.attributes().hp, 0);

    tracker.delete_log_entry(0).unwrap();
    assert_eq!(tracker.attributes().hp, 5);
    assert_eq!(tracker.attributes().stamina, 5);
}

#[test]
fn toggling_twice_restores_tasks_and_log() {
    let mut tracker = tracker();
    tracker.apply_action("Read a page").unwrap();
    let task = tracker.catalog().daily_tasks()[1].clone();
    let before = tracker.state().clone();

    assert!(tracker.toggle_task(&task).unwrap());
    assert!(tracker.is_task_completed(&task));
    assert!(tracker.logs()[0].is_task(&task));

    assert!(!tracker.toggle_task(&task).unwrap());
    assert_eq!(tracker.state(), &before);
}

#[test]
fn reset_always_yields_baseline() {
    let mut tracker = tracker();
    tracker.apply_action("Daily training").unwrap();
    tracker.apply_action("Stay up late").unwrap();
    let task = tracker.catalog().daily_tasks()[0].clone();
    tracker.toggle_task(&task).unwrap();

    tracker.reset_all().unwrap();
    assert_eq!(snapshot(&tracker), (100, 100, 0, 0));
    assert!(tracker.logs().is_empty());
    assert!(tracker.state().daily_tasks_completed.is_empty());
}

#[test]
fn every_change_is_saved_and_reset_erases_the_record() {
    let store = MemoryStore::new("attribute_tracker_data");
    let mut tracker =
        Tracker::load(Catalog::default(), store.clone()).with_clock(FixedClock("08:00:00".into()));
    assert!(store.raw().is_none());

    tracker.apply_action("Practice qigong").unwrap();
    let saved: TrackerState = serde_json::from_str(&store.raw().unwrap()).unwrap();
    assert_eq!(&saved, tracker.state());

    tracker.reset_all().unwrap();
    assert!(store.raw().is_none());
}

#[test]
fn state_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let task = Catalog::default().daily_tasks()[2].clone();

    let mut first = Tracker::load(Catalog::default(), JsonFileStore::new(dir.path(), "tracker"));
    first.apply_action("Recite a full text").unwrap();
    first.apply_action("Exercise").unwrap();
    first.toggle_task(&task).unwrap();
    let expected = first.state().clone();
    drop(first);

    let second = Tracker::load(Catalog::default(), JsonFileStore::new(dir.path(), "tracker"));
    assert_eq!(second.state(), &expected);
    assert!(second.is_task_completed(&task));
}

#[test]
fn persisted_record_uses_the_documented_keys() {
    let mut tracker = tracker();
    tracker.apply_action("Clean up").unwrap();
    let task = tracker.catalog().daily_tasks()[0].clone();
    tracker.toggle_task(&task).unwrap();

    let value = serde_json::to_value(tracker.state()).unwrap();
    assert_eq!(value["attributes"]["hp"], 102);
    assert_eq!(value["logs"][0]["type"], "task");
    assert_eq!(value["logs"][1]["type"], "action");
    assert_eq!(value["logs"][1]["action"], "Clean up");
    assert_eq!(value["logs"][1]["effects"]["stamina"], 2);
    assert_eq!(value["dailyTasksCompleted"][0], task.as_str());
}

#[test]
fn minimal_record_loads_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path(), "attribute_tracker_data");
    fs::write(
        store.path(),
        r#"{
            "attributes": {"hp": 60, "stamina": 80, "strength": 3, "intelligence": 9},
            "logs": [{"action": "Stay up late", "time": "1:02:03 AM", "effects": {"hp": -50, "stamina": -50}}]
        }"#,
    )
    .unwrap();

    let tracker = Tracker::load(Catalog::default(), store);
    assert_eq!(snapshot(&tracker), (60, 80, 3, 9));
    assert!(tracker.state().daily_tasks_completed.is_empty());
    assert!(tracker.logs()[0].is_action("Stay up late"));

    let action = tracker.catalog().action("Stay up late").unwrap().clone();
    assert!(!tracker.can_apply(&action));
}

#[test]
fn corrupt_record_falls_back_to_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path(), "attribute_tracker_data");
    fs::write(store.path(), r#"{"attributes": {"hp": -4}}"#).unwrap();

    let tracker = Tracker::load(Catalog::default(), store.clone());
    assert_eq!(tracker.state(), &TrackerState::default());
    // The unreadable record is left in place until the next change overwrites it.
    assert!(store.path().exists());
}

#[test]
fn record_with_a_nameless_entry_keeps_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path(), "attribute_tracker_data");
    fs::write(
        store.path(),
        r#"{
            "attributes": {"hp": 40, "stamina": 55, "strength": 7, "intelligence": 12},
            "logs": [
                {"time": "9:00:00 PM", "effects": {"hp": -5}},
                {"type": "action", "time": "8:00:00 PM", "action": "Read a page", "effects": {"intelligence": 1}}
            ]
        }"#,
    )
    .unwrap();

    let mut tracker = Tracker::load(Catalog::default(), store.clone());
    assert_eq!(snapshot(&tracker), (40, 55, 7, 12));
    assert_eq!(tracker.logs().len(), 1);
    assert!(tracker.logs()[0].is_action("Read a page"));

    tracker.apply_action("Wake up on time").unwrap();
    let saved: TrackerState = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(saved.attributes.strength, 8);
    assert_eq!(saved.logs.len(), 2);
}

#[test]
fn out_of_range_delete_changes_nothing() {
    let store = MemoryStore::new("key");
    let mut tracker = Tracker::load(Catalog::default(), store.clone());
    tracker.apply_action("Wake up on time").unwrap();
    let saved = store.raw();

    assert!(tracker.delete_log_entry(7).unwrap().is_none());
    assert_eq!(store.raw(), saved);
    assert_eq!(tracker.logs().len(), 1);
}
