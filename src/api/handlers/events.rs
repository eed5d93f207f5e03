use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Datelike, Local};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    domain::MonthGrid,
    error::Result,
    service::{build_grid, EventsByDay},
};

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// GET /api/events?year=&month= (defaults to the current month)
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<EventsByDay>> {
    let today = Local::now().date_naive();
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month());

    let by_day = state.service_context.calendar_service.month_events(year, month).await?;
    Ok(Json(by_day))
}

/// GET /api/calendar/:year/:month
pub async fn grid(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthGrid>> {
    let today = Local::now().date_naive();
    let by_day = state.service_context.calendar_service.month_events(year, month).await?;
    Ok(Json(build_grid(year, month, &by_day, today)?))
}
