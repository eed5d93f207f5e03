use askama::Template;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::{Datelike, Local, Months, NaiveDate};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    domain::{Event, MonthGrid, WEEKDAY_NAMES},
    error::Result,
    service::{build_grid, calendar_service::upcoming_in_month, EventsByDay},
    web::templates::{HtmlTemplate, PageContext},
};

/// How many events the month overview lists when no day is selected.
const UPCOMING_LIMIT: usize = 3;

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsTemplate {
    pub page: PageContext,
    pub month_title: String,
    pub month_param: String,
    pub weekday_names: [&'static str; 7],
    pub grid: MonthGrid,
    pub prev_month: Option<String>,
    pub next_month: Option<String>,
    pub selected_day: Option<SelectedDay>,
    pub upcoming: Vec<EventCard>,
    pub notice: Option<String>,
}

pub struct SelectedDay {
    pub heading: String,
    pub events: Vec<Event>,
}

pub struct EventCard {
    pub date_label: String,
    pub event: Event,
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    /// `YYYY-MM`
    pub month: Option<String>,
    pub day: Option<u32>,
}

// GET /events
pub async fn events_page(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Response> {
    let calendar = &state.service_context.calendar_service;
    let today = Local::now().date_naive();
    let shown = calendar.resolve_month(query.month.as_deref(), today);
    let (year, month) = (shown.year(), shown.month());

    let (by_day, notice) = match calendar.month_events(year, month).await {
        Ok(by_day) => (by_day, None),
        Err(e) => {
            tracing::warn!("Showing empty calendar: {}", e);
            (EventsByDay::new(), Some("Events are unavailable right now.".to_string()))
        }
    };

    let grid = build_grid(year, month, &by_day, today)?;

    let selected_day = query.day.and_then(|day| {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(SelectedDay {
            heading: format!("Events on {}", date.format("%-d %B")),
            events: by_day.get(&day).cloned().unwrap_or_default(),
        })
    });

    let upcoming = upcoming_in_month(&by_day, UPCOMING_LIMIT)
        .into_iter()
        .map(|event| EventCard {
            date_label: event.date.format("%d %b").to_string(),
            event,
        })
        .collect();

    let window = &state.settings.calendar;
    let prev_month = shown
        .checked_sub_months(Months::new(1))
        .filter(|d| *d >= window.first_month.with_day(1).unwrap_or(window.first_month))
        .map(month_param);
    let next_month = shown
        .checked_add_months(Months::new(1))
        .filter(|d| *d <= window.last_month)
        .map(month_param);

    let template = EventsTemplate {
        page: PageContext::new(&state.settings, "Events", "/events"),
        month_title: shown.format("%B %Y").to_string(),
        month_param: month_param(shown),
        weekday_names: WEEKDAY_NAMES,
        grid,
        prev_month,
        next_month,
        selected_day,
        upcoming,
        notice,
    };

    Ok(HtmlTemplate(template).into_response())
}

fn month_param(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
