pub mod assembler;
pub mod backup;
pub mod conflicts;
pub mod template;

pub use assembler::{DayView, EventView, assemble_day};
pub use conflicts::conflicting_ids;
