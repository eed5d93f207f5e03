use serde::Serialize;

use super::Event;

pub const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub day_number: u32,
    pub is_current_day: bool,
    pub events: Vec<Event>,
}

/// One row of the month view. Always seven cells, Monday first; `None`
/// marks padding before the 1st or after the last day of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Week {
    pub days: Vec<Option<CalendarDay>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

impl CalendarDay {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}
