use runsheet::core::assembler::assemble_day;
use runsheet::models::NewEvent;
use runsheet::store::ScheduleStore;

fn sample_store() -> (ScheduleStore, i64) {
    let store = ScheduleStore::new();
    let day = store.add_day("Hochzeitstag", None).unwrap();

    store
        .add_event(day.id, NewEvent::new("Party & Tanz", "21:15").end("02:00"))
        .unwrap();
    store
        .add_event(day.id, NewEvent::new("Trauung", "14:00").end("14:45"))
        .unwrap();
    store
        .add_event(day.id, NewEvent::new("Mitternachtssnack", "00:00"))
        .unwrap();
    store
        .add_event(day.id, NewEvent::new("Gratulation", "14:30").end("15:00"))
        .unwrap();

    (store, day.id)
}

#[test]
fn test_view_is_sorted_and_annotated() {
    let (store, day_id) = sample_store();
    let view = assemble_day(&store.day(day_id).unwrap(), true);

    let titles: Vec<&str> = view.events.iter().map(|e| e.event.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Mitternachtssnack", "Trauung", "Gratulation", "Party & Tanz"]
    );

    let by_title = |t: &str| view.events.iter().find(|e| e.event.title == t).unwrap();

    // Durations: overnight span computed through midnight, marker has
    // none.
    assert_eq!(by_title("Party & Tanz").duration_minutes, Some(285));
    assert_eq!(by_title("Trauung").duration_minutes, Some(45));
    assert_eq!(by_title("Mitternachtssnack").duration_minutes, None);

    // Trauung and Gratulation overlap; the others do not.
    assert!(by_title("Trauung").conflict);
    assert!(by_title("Gratulation").conflict);
    assert!(!by_title("Party & Tanz").conflict);
    assert!(!by_title("Mitternachtssnack").conflict);
}

#[test]
fn test_conflict_detection_can_be_skipped() {
    let (store, day_id) = sample_store();
    let view = assemble_day(&store.day(day_id).unwrap(), false);

    assert!(view.events.iter().all(|e| !e.conflict));
    // Durations are still computed.
    assert!(view.events.iter().any(|e| e.duration_minutes.is_some()));
}

#[test]
fn test_assembly_is_idempotent() {
    let (store, day_id) = sample_store();
    let day = store.day(day_id).unwrap();

    let first = assemble_day(&day, true);
    let second = assemble_day(&day, true);

    let key = |v: &runsheet::core::assembler::DayView| -> Vec<(i64, Option<i32>, bool)> {
        v.events
            .iter()
            .map(|e| (e.event.id, e.duration_minutes, e.conflict))
            .collect()
    };
    assert_eq!(key(&first), key(&second));
}

#[test]
fn test_snapshot_does_not_track_later_writes() {
    let (store, day_id) = sample_store();
    let view = assemble_day(&store.day(day_id).unwrap(), true);
    let before = view.events.len();

    store
        .add_event(day_id, NewEvent::new("Feuerwerk", "23:30"))
        .unwrap();

    // The already-produced snapshot is unaffected; a re-assembly sees
    // the new event.
    assert_eq!(view.events.len(), before);
    let fresh = assemble_day(&store.day(day_id).unwrap(), true);
    assert_eq!(fresh.events.len(), before + 1);
}
