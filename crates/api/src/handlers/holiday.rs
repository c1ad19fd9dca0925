use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use clinic_core::{
    errors::ClinicError,
    models::holiday::{CreateHolidayRequest, Holiday},
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Inclusive day range used by the listing endpoints.
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRangeQuery {
    pub fn validate(&self) -> Result<(), ClinicError> {
        if self.start > self.end {
            return Err(ClinicError::Validation(format!(
                "Start date {} is after end date {}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

#[axum::debug_handler]
pub async fn create_holiday(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateHolidayRequest>,
) -> Result<Json<Holiday>, AppError> {
    let db_holiday = clinic_db::repositories::holiday::create_holiday(
        &state.db_pool,
        payload.date,
        payload.title.as_deref(),
    )
    .await
    .map_err(ClinicError::Database)?;

    Ok(Json(Holiday::from(db_holiday)))
}

#[axum::debug_handler]
pub async fn list_holidays(
    State(state): State<Arc<ApiState>>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<Vec<Holiday>>, AppError> {
    range.validate()?;

    let holidays = clinic_db::repositories::holiday::list_holidays_in_range(
        &state.db_pool,
        range.start,
        range.end,
    )
    .await
    .map_err(ClinicError::Database)?;

    Ok(Json(holidays.into_iter().map(Holiday::from).collect()))
}

#[axum::debug_handler]
pub async fn delete_holiday(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = clinic_db::repositories::holiday::delete_holiday(&state.db_pool, id)
        .await
        .map_err(ClinicError::Database)?;

    if !deleted {
        return Err(AppError(ClinicError::NotFound(format!(
            "Holiday with ID {} not found",
            id
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}
