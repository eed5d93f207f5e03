use std::{collections::BTreeMap, sync::Arc};

use chrono::{Datelike, NaiveDate};

use crate::{
    config::CalendarConfig,
    domain::{CalendarDay, Event, MonthGrid, Week},
    error::{AppError, Result},
    repository::EventRepository,
};

pub type EventsByDay = BTreeMap<u32, Vec<Event>>;

pub struct CalendarService {
    repo: Arc<dyn EventRepository>,
    window: CalendarConfig,
}

impl CalendarService {
    pub fn new(repo: Arc<dyn EventRepository>, window: CalendarConfig) -> Self {
        Self { repo, window }
    }

    /// Events of one month grouped by day of month. An invalid month is
    /// `BadRequest` before the store is read.
    pub async fn month_events(&self, year: i32, month: u32) -> Result<EventsByDay> {
        days_in_month(year, month)?;
        let events = self.repo.load_events().await?;
        Ok(events_in_month(&events, year, month))
    }

    /// Picks the month to show: the requested `YYYY-MM` if it parses,
    /// otherwise today's month, clamped to the configured window.
    pub fn resolve_month(&self, requested: Option<&str>, today: NaiveDate) -> NaiveDate {
        let first = first_of_month(self.window.first_month);
        let last = first_of_month(self.window.last_month);

        let wanted = requested
            .and_then(parse_month)
            .unwrap_or_else(|| first_of_month(today));

        wanted.clamp(first, last.max(first))
    }
}

/// Groups `events` falling in `year`/`month` by day. Inside a day the
/// events keep the order they had in `events`.
pub fn events_in_month(events: &[Event], year: i32, month: u32) -> EventsByDay {
    let mut by_day = EventsByDay::new();
    for event in events
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
    {
        by_day.entry(event.date.day()).or_default().push(event.clone());
    }
    by_day
}

/// The first `limit` events of the month in date order.
pub fn upcoming_in_month(events_by_day: &EventsByDay, limit: usize) -> Vec<Event> {
    events_by_day
        .values()
        .flatten()
        .take(limit)
        .cloned()
        .collect()
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid month: {}-{:02}", year, month)))?;

    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next_month_first
        .and_then(|d| d.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| AppError::BadRequest(format!("Month out of range: {}-{:02}", first.year(), month)))
}

/// Lays out a month as Monday-first weeks of seven cells. Padding cells
/// before the 1st and after the last day are `None`.
pub fn build_grid(
    year: i32,
    month: u32,
    events_by_day: &EventsByDay,
    today: NaiveDate,
) -> Result<MonthGrid> {
    let day_count = days_in_month(year, month)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid month: {}-{:02}", year, month)))?;

    let leading = first.weekday().num_days_from_monday() as usize;
    let showing_today_month = today.year() == year && today.month() == month;

    let mut cells: Vec<Option<CalendarDay>> = Vec::with_capacity(42);
    cells.resize(leading, None);

    for day in 1..=day_count {
        cells.push(Some(CalendarDay {
            day_number: day,
            is_current_day: showing_today_month && today.day() == day,
            events: events_by_day.get(&day).cloned().unwrap_or_default(),
        }));
    }

    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    let weeks = cells
        .chunks(7)
        .map(|chunk| Week { days: chunk.to_vec() })
        .collect();

    Ok(MonthGrid { year, month, weeks })
}

/// Parses `YYYY-MM` (a trailing `-DD` is accepted and ignored).
pub fn parse_month(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
