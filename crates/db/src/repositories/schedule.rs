use crate::models::DbDoctorSchedule;
use chrono::Utc;
use clinic_core::models::schedule::CreateScheduleRequest;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_schedule(
    pool: &Pool<Postgres>,
    request: &CreateScheduleRequest,
) -> Result<DbDoctorSchedule> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating schedule: id={}, doctor_id={}, day_of_week={}, window={}-{}, count={}",
        id,
        request.doctor_id,
        request.day_of_week,
        request.start_time,
        request.end_time,
        request.count
    );

    let schedule = sqlx::query_as::<_, DbDoctorSchedule>(
        r#"
        INSERT INTO doctor_schedules
            (id, doctor_id, clinic_id, shift_id, service_id, day_of_week, start_time, end_time, count, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, doctor_id, clinic_id, shift_id, service_id, day_of_week, start_time, end_time, count, created_at
        "#,
    )
    .bind(id)
    .bind(request.doctor_id)
    .bind(request.clinic_id)
    .bind(request.shift_id)
    .bind(request.service_id)
    .bind(i16::from(request.day_of_week))
    .bind(request.start_time)
    .bind(request.end_time)
    .bind(request.count)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(schedule)
}

pub async fn get_schedule_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbDoctorSchedule>> {
    let schedule = sqlx::query_as::<_, DbDoctorSchedule>(
        r#"
        SELECT id, doctor_id, clinic_id, shift_id, service_id, day_of_week, start_time, end_time, count, created_at
        FROM doctor_schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

pub async fn list_schedules(pool: &Pool<Postgres>) -> Result<Vec<DbDoctorSchedule>> {
    let schedules = sqlx::query_as::<_, DbDoctorSchedule>(
        r#"
        SELECT id, doctor_id, clinic_id, shift_id, service_id, day_of_week, start_time, end_time, count, created_at
        FROM doctor_schedules
        ORDER BY doctor_id, day_of_week, start_time
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}
