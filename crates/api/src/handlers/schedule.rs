use axum::{extract::{Path, State}, Json};
use std::sync::Arc;
use clinic_core::{
    errors::ClinicError,
    models::schedule::{CreateScheduleRequest, DoctorSchedule},
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<Json<DoctorSchedule>, AppError> {
    // Reject schedules the slot generator cannot carve
    payload.validate()?;

    let db_schedule = clinic_db::repositories::schedule::create_schedule(&state.db_pool, &payload)
        .await
        .map_err(ClinicError::Database)?;

    Ok(Json(DoctorSchedule::try_from(db_schedule)?))
}

#[axum::debug_handler]
pub async fn list_schedules(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<DoctorSchedule>>, AppError> {
    let schedules = clinic_db::repositories::schedule::list_schedules(&state.db_pool)
        .await
        .map_err(ClinicError::Database)?
        .into_iter()
        .map(DoctorSchedule::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(schedules))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DoctorSchedule>, AppError> {
    let db_schedule = clinic_db::repositories::schedule::get_schedule_by_id(&state.db_pool, id)
        .await
        .map_err(ClinicError::Database)?
        .ok_or_else(|| ClinicError::NotFound(format!("Schedule with ID {} not found", id)))?;

    Ok(Json(DoctorSchedule::try_from(db_schedule)?))
}
