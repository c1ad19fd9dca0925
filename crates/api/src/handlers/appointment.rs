//! # Appointment Handlers
//!
//! Listing of generated appointment slots and the endpoint that triggers a
//! generation run.
//!
//! Generation is idempotent: calling it again for the same or an overlapping
//! range only creates the slots that do not exist yet, so schedulers can
//! safely invoke it on a fixed interval.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use clinic_core::{
    errors::ClinicError,
    models::appointment::{Appointment, GenerateAppointmentsRequest, GenerateAppointmentsResponse},
};
use tracing::info;
use uuid::Uuid;

use crate::{handlers::holiday::DateRangeQuery, middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct AppointmentQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub doctor_id: Option<Uuid>,
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    DateRangeQuery {
        start: query.start,
        end: query.end,
    }
    .validate()?;

    let appointments = clinic_db::repositories::appointment::list_appointments_in_range(
        &state.db_pool,
        query.start,
        query.end,
        query.doctor_id,
    )
    .await
    .map_err(ClinicError::Database)?
    .into_iter()
    .map(Appointment::try_from)
    .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(appointments))
}

/// Generates appointment slots for every day in `[start_date, end_date]`.
///
/// # Endpoint
///
/// ```text
/// POST /api/appointments/generate
/// {"start_date": "2024-03-16", "end_date": "2024-04-15"}
/// ```
///
/// A reversed range succeeds with `created_count = 0`. Any database failure
/// rolls back the whole run and is reported as a 500.
#[axum::debug_handler]
pub async fn generate_appointments(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<GenerateAppointmentsRequest>,
) -> Result<Json<GenerateAppointmentsResponse>, AppError> {
    let report =
        clinic_db::generate_appointments(&state.db_pool, payload.start_date, payload.end_date)
            .await?;

    info!(
        "Generated {} appointments between {} and {}",
        report.created_count, payload.start_date, payload.end_date
    );

    Ok(Json(GenerateAppointmentsResponse {
        start_date: payload.start_date,
        end_date: payload.end_date,
        created_count: report.created_count,
    }))
}
