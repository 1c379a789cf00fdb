use serde::{Deserialize, Serialize};

/// One timed entry on a schedule day.
///
/// `start_time`/`end_time` are stored as the exact `HH:MM` strings the
/// user entered. They are validated before they reach this struct and
/// round-trip unchanged through the data file; nothing ever converts them
/// into an absolute instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: i64,
    pub day_id: i64,
    pub title: String,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    pub sort_order: i64,
}

/// Input record for a single event, used by `add_event` and the bulk
/// template import.
#[derive(Debug, Default, Clone)]
pub struct NewEvent {
    pub title: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub visibility: Option<String>,
}

impl NewEvent {
    pub fn new(title: impl Into<String>, start_time: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start_time: start_time.into(),
            ..Self::default()
        }
    }

    pub fn end(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Field-level update for an event.
///
/// Outer `None` = leave the field alone. For optional fields the inner
/// `None` clears the stored value. `title` and `start_time` have no
/// clearing form: an empty replacement is rejected by the store.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    pub title: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub owner: Option<Option<String>>,
    pub visibility: Option<Option<String>>,
    pub sort_order: Option<i64>,
}
