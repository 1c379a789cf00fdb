//! Builds the canonical per-day view consumed by both the screen
//! renderer and the print projector.

use chrono::NaiveDate;

use crate::core::conflicts::conflicting_ids;
use crate::models::{ScheduleDay, ScheduleEvent};
use crate::store::sorted_events;
use crate::utils::time::minutes_diff;

/// One event, annotated for rendering.
#[derive(Debug, Clone)]
pub struct EventView {
    pub event: ScheduleEvent,
    /// Computed span in minutes; `None` when the event has no end time.
    pub duration_minutes: Option<i32>,
    pub conflict: bool,
}

/// Immutable snapshot of one day: events in display order with durations
/// and conflict flags attached. Mutating the store afterwards does not
/// change an already-produced view; re-assemble after any write.
#[derive(Debug, Clone)]
pub struct DayView {
    pub day_id: i64,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub events: Vec<EventView>,
}

/// Assemble the view for one day. Conflict detection runs exactly once
/// per call; with `detect_conflicts` off it is skipped entirely and no
/// event is flagged.
pub fn assemble_day(day: &ScheduleDay, detect_conflicts: bool) -> DayView {
    let events = sorted_events(day);

    let flagged = if detect_conflicts {
        conflicting_ids(&events)
    } else {
        Default::default()
    };

    let events = events
        .into_iter()
        .map(|event| {
            let duration_minutes = event.end_time.as_deref().map(|end| {
                minutes_diff(&event.start_time, end).expect("stored times are valid HH:MM")
            });
            let conflict = flagged.contains(&event.id);

            EventView {
                event,
                duration_minutes,
                conflict,
            }
        })
        .collect();

    DayView {
        day_id: day.id,
        name: day.name.clone(),
        date: day.date,
        events,
    }
}
