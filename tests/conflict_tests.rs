use std::collections::HashSet;

use runsheet::core::conflicts::conflicting_ids;
use runsheet::models::{NewEvent, ScheduleEvent};
use runsheet::store::ScheduleStore;

/// Build one day of events through the store and return them in display
/// order together with the id of each titled entry.
fn day_of(entries: &[(&str, &str, Option<&str>)]) -> Vec<ScheduleEvent> {
    let store = ScheduleStore::new();
    let day = store.add_day("Hochzeitstag", None).unwrap();

    for (title, start, end) in entries {
        let mut input = NewEvent::new(*title, *start);
        input.end_time = end.map(|e| e.to_string());
        store.add_event(day.id, input).unwrap();
    }

    store.list_events(day.id).unwrap()
}

fn id_of(events: &[ScheduleEvent], title: &str) -> i64 {
    events.iter().find(|e| e.title == title).unwrap().id
}

#[test]
fn test_partial_overlap_flags_both_events() {
    let events = day_of(&[
        ("A", "14:00", Some("14:45")),
        ("B", "14:30", Some("15:00")),
    ]);

    let flagged = conflicting_ids(&events);
    let expected: HashSet<i64> = [id_of(&events, "A"), id_of(&events, "B")].into();
    assert_eq!(flagged, expected);
}

#[test]
fn test_back_to_back_events_do_not_conflict() {
    let events = day_of(&[
        ("A", "14:00", Some("14:45")),
        ("B", "14:45", Some("15:00")),
    ]);

    assert!(conflicting_ids(&events).is_empty());
}

#[test]
fn test_containment_conflicts() {
    let events = day_of(&[
        ("Abendessen", "18:00", Some("21:00")),
        ("Rede", "19:00", Some("19:20")),
    ]);

    assert_eq!(conflicting_ids(&events).len(), 2);
}

#[test]
fn test_instant_inside_interval_conflicts() {
    let events = day_of(&[
        ("A", "14:00", Some("16:00")),
        ("B", "15:00", None),
    ]);

    let flagged = conflicting_ids(&events);
    let expected: HashSet<i64> = [id_of(&events, "A"), id_of(&events, "B")].into();
    assert_eq!(flagged, expected);
}

#[test]
fn test_instant_on_boundary_does_not_conflict() {
    // Markers sitting exactly on an interval's start or end are not
    // strictly inside it.
    let events = day_of(&[
        ("A", "14:00", Some("16:00")),
        ("Start", "14:00", None),
        ("Ende", "16:00", None),
    ]);

    assert!(conflicting_ids(&events).is_empty());
}

#[test]
fn test_two_markers_at_the_same_minute_do_not_conflict() {
    let events = day_of(&[("A", "15:00", None), ("B", "15:00", None)]);
    assert!(conflicting_ids(&events).is_empty());
}

#[test]
fn test_overnight_span_conflicts_with_late_evening_event() {
    let events = day_of(&[
        ("Party & Tanz", "21:15", Some("02:00")),
        ("Feuerwerk", "23:30", Some("23:50")),
        ("Mitternachtssnack", "23:45", None),
    ]);

    let flagged = conflicting_ids(&events);
    assert_eq!(flagged.len(), 3, "late events fall inside the party span");
}

#[test]
fn test_overnight_span_does_not_reach_same_day_early_morning() {
    // Comparison happens on the day's own minute axis: the party runs
    // past midnight, but a 01:00 entry on the same day sits at minute
    // 60, hours before the party starts.
    let events = day_of(&[
        ("Party & Tanz", "21:15", Some("02:00")),
        ("Fruehstuecksvorbereitung", "01:00", Some("02:00")),
    ]);

    assert!(conflicting_ids(&events).is_empty());
}

#[test]
fn test_conflict_symmetry() {
    let events = day_of(&[
        ("A", "14:00", Some("15:00")),
        ("B", "14:30", Some("16:00")),
        ("C", "15:30", Some("17:00")),
        ("D", "18:00", Some("19:00")),
    ]);

    let flagged = conflicting_ids(&events);

    // Every flagged event has at least one flagged partner it overlaps.
    for e in events.iter().filter(|e| flagged.contains(&e.id)) {
        let has_partner = events.iter().any(|other| {
            other.id != e.id
                && flagged.contains(&other.id)
                && !conflicting_ids(&[e.clone(), other.clone()]).is_empty()
        });
        assert!(has_partner, "{} flagged without partner", e.title);
    }

    // D stands alone and is not flagged.
    assert!(!flagged.contains(&id_of(&events, "D")));
}

#[test]
fn test_empty_and_single_event_days() {
    assert!(conflicting_ids(&[]).is_empty());

    let events = day_of(&[("A", "14:00", Some("15:00"))]);
    assert!(conflicting_ids(&events).is_empty());
}
