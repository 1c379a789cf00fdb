pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::display_width;
pub use time::{format_duration, minutes_diff, to_minutes};
