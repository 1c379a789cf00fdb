//! Time-overlap detection within one schedule day.
//!
//! Events map to half-open minute intervals `[start, start + duration)`.
//! An event without an end time is an instantaneous marker (duration 0):
//! it conflicts only when it falls strictly inside another event's
//! nonzero interval, and two markers at the same minute never conflict.
//! Overnight spans keep their computed end past 1440 instead of wrapping,
//! so "21:15 – 02:00" still collides with a 23:30 toast on the same day.
//! Days are independent: events on different days are never compared,
//! even when both days carry the same calendar date.

use std::collections::HashSet;

use crate::models::ScheduleEvent;
use crate::utils::time::{minutes_diff, to_minutes};

struct Span {
    id: i64,
    start: i32,
    end: i32,
}

fn span_of(event: &ScheduleEvent) -> Span {
    // Times are validated before they enter the store; a malformed one
    // here is a broken caller, not a user error.
    let start = to_minutes(&event.start_time).expect("stored start_time is valid HH:MM");
    let duration = match &event.end_time {
        Some(end) => minutes_diff(&event.start_time, end).expect("stored end_time is valid HH:MM"),
        None => 0,
    };

    Span {
        id: event.id,
        start,
        end: start + duration,
    }
}

/// Ids of all events that overlap at least one other event in the slice.
///
/// Pairwise scan; a day holds a few dozen events at most. The half-open
/// test keeps back-to-back events (14:00–14:45, 14:45–15:00) out of the
/// result.
pub fn conflicting_ids(events: &[ScheduleEvent]) -> HashSet<i64> {
    let spans: Vec<Span> = events.iter().map(span_of).collect();
    let mut flagged = HashSet::new();

    for (i, a) in spans.iter().enumerate() {
        for b in &spans[i + 1..] {
            if a.start < b.end && b.start < a.end {
                flagged.insert(a.id);
                flagged.insert(b.id);
            }
        }
    }

    flagged
}
