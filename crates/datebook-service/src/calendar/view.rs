use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use datebook_core::error::CoreError;
use datebook_db::db::Store;

use super::grid::{MonthGrid, build_grid};
use crate::error::ServiceResult;
use crate::event::query::{EventOverview, event_overview};

/// Everything a month page needs: the grid, navigation, and the user's events.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    pub username: String,
    #[serde(flatten)]
    pub grid: MonthGrid,
    pub today: NaiveDate,
    #[serde(flatten)]
    pub overview: EventOverview,
}

/// ## Summary
/// Builds the month view for `owner`. A missing `year` or `month` falls back
/// to the corresponding part of `today`.
///
/// ## Errors
/// Returns `InvalidInput` if the requested year is outside the supported range.
#[tracing::instrument(skip(store))]
pub async fn month_view(
    store: &Store,
    owner: &str,
    year: Option<i32>,
    month: Option<i32>,
    today: NaiveDate,
) -> ServiceResult<MonthView> {
    let month = match month {
        Some(month) => month,
        None => i32::try_from(today.month())
            .map_err(|_e| CoreError::InvariantViolation("month does not fit in i32"))?,
    };
    let grid = build_grid(year.unwrap_or_else(|| today.year()), month)?;
    let overview = event_overview(store, owner).await;

    Ok(MonthView {
        username: owner.to_string(),
        grid,
        today,
        overview,
    })
}
