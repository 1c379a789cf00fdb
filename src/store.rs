//! In-memory schedule store: owns the bounded day set and every event in
//! it, and enforces the structural invariants at the write boundary.
//!
//! All mutations take the store lock for their whole read-modify-write,
//! so `sort_order` counters never interleave between concurrent writers.
//! Reads hand out cloned snapshots; a snapshot never changes after the
//! call that produced it. Persistence is the caller's concern: the store
//! serializes to and from [`StoreSnapshot`] and does no I/O itself.

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{DayPatch, EventPatch, NewEvent, ScheduleDay, ScheduleEvent};
use crate::utils::time::to_minutes;

/// A project holds at most this many schedule days. Creation beyond the
/// limit is rejected, never truncated.
pub const MAX_SCHEDULE_DAYS: usize = 3;

/// Serializable store state: the day list plus the id/order counters.
/// Counters are persisted so ids stay stable across CLI invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub days: Vec<ScheduleDay>,
    #[serde(default = "first_id")]
    pub next_day_id: i64,
    #[serde(default = "first_id")]
    pub next_event_id: i64,
    #[serde(default)]
    pub day_seq: i64,
}

fn first_id() -> i64 {
    1
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            days: Vec::new(),
            next_day_id: first_id(),
            next_event_id: first_id(),
            day_seq: 0,
        }
    }
}

pub struct ScheduleStore {
    inner: Mutex<StoreSnapshot>,
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::from_snapshot(StoreSnapshot::default())
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            inner: Mutex::new(snapshot),
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, StoreSnapshot> {
        self.inner.lock().expect("schedule store lock poisoned")
    }

    // ---------------------------
    // Days
    // ---------------------------

    pub fn add_day(&self, name: &str, date: Option<NaiveDate>) -> AppResult<ScheduleDay> {
        let name = normalize_required(name).ok_or(AppError::MissingName)?;

        let mut s = self.lock();

        if s.days.len() >= MAX_SCHEDULE_DAYS {
            return Err(AppError::DayLimitExceeded(MAX_SCHEDULE_DAYS));
        }

        let day = ScheduleDay {
            id: s.next_day_id,
            name,
            date,
            sort_order: s.day_seq,
            events: Vec::new(),
            event_seq: 0,
        };

        s.next_day_id += 1;
        s.day_seq += 1;
        s.days.push(day.clone());

        Ok(day)
    }

    pub fn update_day(&self, id: i64, patch: DayPatch) -> AppResult<ScheduleDay> {
        // Validate before touching anything.
        let name = match patch.name {
            Some(n) => Some(normalize_required(&n).ok_or(AppError::MissingName)?),
            None => None,
        };

        let mut s = self.lock();
        let day = s
            .days
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(AppError::DayNotFound(id))?;

        if let Some(n) = name {
            day.name = n;
        }
        if let Some(d) = patch.date {
            day.date = d;
        }
        if let Some(o) = patch.sort_order {
            day.sort_order = o;
        }

        Ok(day.clone())
    }

    /// Removing a day removes every event it owns.
    pub fn remove_day(&self, id: i64) -> AppResult<()> {
        let mut s = self.lock();
        let before = s.days.len();
        s.days.retain(|d| d.id != id);

        if s.days.len() == before {
            return Err(AppError::DayNotFound(id));
        }
        Ok(())
    }

    pub fn day(&self, id: i64) -> AppResult<ScheduleDay> {
        let s = self.lock();
        s.days
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(AppError::DayNotFound(id))
    }

    /// Days in display order: `sort_order` ascending, creation order for
    /// ties.
    pub fn list_days(&self) -> Vec<ScheduleDay> {
        let mut days = self.lock().days.clone();
        days.sort_by_key(|d| (d.sort_order, d.id));
        days
    }

    pub fn day_count(&self) -> usize {
        self.lock().days.len()
    }

    // ---------------------------
    // Events
    // ---------------------------

    pub fn add_event(&self, day_id: i64, input: NewEvent) -> AppResult<ScheduleEvent> {
        let input = validate_new_event(input)?;

        let mut s = self.lock();
        let idx = s
            .days
            .iter()
            .position(|d| d.id == day_id)
            .ok_or(AppError::DayNotFound(day_id))?;

        let id = s.next_event_id;
        s.next_event_id += 1;

        Ok(insert_event(&mut s.days[idx], id, input))
    }

    /// Append a batch of events in input order. The whole batch is
    /// validated before the first insert, so a bad entry rejects the
    /// call without leaving a half-imported template behind.
    pub fn create_bulk_events(
        &self,
        day_id: i64,
        inputs: Vec<NewEvent>,
    ) -> AppResult<Vec<ScheduleEvent>> {
        let validated: Vec<NewEvent> = inputs
            .into_iter()
            .map(validate_new_event)
            .collect::<AppResult<_>>()?;

        let mut s = self.lock();
        let idx = s
            .days
            .iter()
            .position(|d| d.id == day_id)
            .ok_or(AppError::DayNotFound(day_id))?;

        let mut created = Vec::with_capacity(validated.len());
        for input in validated {
            let id = s.next_event_id;
            s.next_event_id += 1;
            created.push(insert_event(&mut s.days[idx], id, input));
        }

        Ok(created)
    }

    pub fn update_event(&self, id: i64, patch: EventPatch) -> AppResult<ScheduleEvent> {
        // Validate every provided field before mutating. Empty strings
        // clear optional fields; `title` and `start_time` reject them.
        let title = match patch.title {
            Some(t) => Some(normalize_required(&t).ok_or(AppError::MissingTitle)?),
            None => None,
        };
        let start_time = match patch.start_time {
            Some(st) => {
                let st = st.trim().to_string();
                to_minutes(&st)?;
                Some(st)
            }
            None => None,
        };
        let end_time = match patch.end_time {
            Some(change) => {
                let normalized = normalize_optional(change);
                if let Some(e) = &normalized {
                    to_minutes(e)?;
                }
                Some(normalized)
            }
            None => None,
        };

        let mut s = self.lock();
        for day in &mut s.days {
            if let Some(ev) = day.events.iter_mut().find(|e| e.id == id) {
                if let Some(t) = title {
                    ev.title = t;
                }
                if let Some(st) = start_time {
                    ev.start_time = st;
                }
                if let Some(e) = end_time {
                    ev.end_time = e;
                }
                patch_optional(&mut ev.location, patch.location);
                patch_optional(&mut ev.description, patch.description);
                patch_optional(&mut ev.owner, patch.owner);
                patch_optional(&mut ev.visibility, patch.visibility);
                if let Some(o) = patch.sort_order {
                    ev.sort_order = o;
                }
                return Ok(ev.clone());
            }
        }

        Err(AppError::EventNotFound(id))
    }

    /// Removing an event never affects its day or siblings.
    pub fn remove_event(&self, id: i64) -> AppResult<()> {
        let mut s = self.lock();
        for day in &mut s.days {
            let before = day.events.len();
            day.events.retain(|e| e.id != id);
            if day.events.len() < before {
                return Ok(());
            }
        }
        Err(AppError::EventNotFound(id))
    }

    /// The only sanctioned read path for a day's events: always ordered
    /// by `(start_time, sort_order)`, recomputed on every call so the
    /// order cannot drift from the underlying data.
    pub fn list_events(&self, day_id: i64) -> AppResult<Vec<ScheduleEvent>> {
        let s = self.lock();
        let day = s
            .days
            .iter()
            .find(|d| d.id == day_id)
            .ok_or(AppError::DayNotFound(day_id))?;

        Ok(sorted_events(day))
    }
}

/// Display order within one day. Start times were validated on write;
/// a string that somehow bypassed validation sorts first rather than
/// tearing down the whole listing.
pub fn event_sort_key(e: &ScheduleEvent) -> (i32, i64) {
    (to_minutes(&e.start_time).unwrap_or(0), e.sort_order)
}

pub fn sorted_events(day: &ScheduleDay) -> Vec<ScheduleEvent> {
    let mut events = day.events.clone();
    events.sort_by_key(event_sort_key);
    events
}

fn insert_event(day: &mut ScheduleDay, id: i64, input: NewEvent) -> ScheduleEvent {
    let event = ScheduleEvent {
        id,
        day_id: day.id,
        title: input.title,
        start_time: input.start_time,
        end_time: input.end_time,
        location: input.location,
        description: input.description,
        owner: input.owner,
        visibility: input.visibility,
        sort_order: day.event_seq,
    };

    day.event_seq += 1;
    day.events.push(event.clone());
    event
}

fn validate_new_event(input: NewEvent) -> AppResult<NewEvent> {
    let title = normalize_required(&input.title).ok_or(AppError::MissingTitle)?;

    let start_time = input.start_time.trim().to_string();
    to_minutes(&start_time)?;

    let end_time = match normalize_optional(input.end_time) {
        Some(e) => {
            to_minutes(&e)?;
            Some(e)
        }
        None => None,
    };

    Ok(NewEvent {
        title,
        start_time,
        end_time,
        location: normalize_optional(input.location),
        description: normalize_optional(input.description),
        owner: normalize_optional(input.owner),
        visibility: normalize_optional(input.visibility),
    })
}

fn normalize_required(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

fn normalize_optional(v: Option<String>) -> Option<String> {
    v.and_then(|s| normalize_required(&s))
}

fn patch_optional(slot: &mut Option<String>, change: Option<Option<String>>) {
    if let Some(v) = change {
        *slot = normalize_optional(v);
    }
}
