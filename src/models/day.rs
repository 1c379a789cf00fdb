use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::event::ScheduleEvent;

/// A named schedule day ("Hochzeitstag", "Standesamt", ...).
///
/// The day owns its event list; an event never outlives its day. `date`
/// may stay unset while the couple is still planning without a fixed
/// date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub sort_order: i64,
    #[serde(default)]
    pub events: Vec<ScheduleEvent>,
    /// Next event `sort_order` on this day. Monotonic: deletions never
    /// wind it back, so tie-break order stays stable.
    #[serde(default)]
    pub event_seq: i64,
}

/// Field-level update for a day. Outer `None` = keep; `date: Some(None)`
/// clears the calendar date. An empty `name` is rejected by the store.
#[derive(Debug, Default, Clone)]
pub struct DayPatch {
    pub name: Option<String>,
    pub date: Option<Option<NaiveDate>>,
    pub sort_order: Option<i64>,
}
