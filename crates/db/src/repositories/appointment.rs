use crate::{
    models::{DbAppointment, DbSlotKey},
    repositories::day_bounds,
};
use chrono::{NaiveDate, Utc};
use clinic_core::models::appointment::NewAppointment;
use eyre::Result;
use sqlx::{Pool, Postgres, Transaction};
use uuid::Uuid;

/// Dedup keys of every appointment on a day in `[start, end]`.
pub async fn get_slot_keys_in_range(
    pool: &Pool<Postgres>,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DbSlotKey>> {
    let (lower, upper) = day_bounds(start, end);

    let keys = sqlx::query_as::<_, DbSlotKey>(
        r#"
        SELECT doctor_schedule_id, appointment_date_time, start_time
        FROM appointments
        WHERE appointment_date_time >= $1 AND appointment_date_time < $2
        "#,
    )
    .bind(lower)
    .bind(upper)
    .fetch_all(pool)
    .await?;

    Ok(keys)
}

pub async fn list_appointments_in_range(
    pool: &Pool<Postgres>,
    start: NaiveDate,
    end: NaiveDate,
    doctor_id: Option<Uuid>,
) -> Result<Vec<DbAppointment>> {
    let (lower, upper) = day_bounds(start, end);

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, doctor_id, doctor_schedule_id, appointment_date_time, expire_date_time,
               start_time, end_time, status, created_at
        FROM appointments
        WHERE appointment_date_time >= $1 AND appointment_date_time < $2
          AND ($3::UUID IS NULL OR doctor_id = $3)
        ORDER BY appointment_date_time ASC, doctor_id
        "#,
    )
    .bind(lower)
    .bind(upper)
    .bind(doctor_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Inserts one appointment inside an open transaction.
pub async fn insert_appointment(
    tx: &mut Transaction<'_, Postgres>,
    appointment: &NewAppointment,
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        INSERT INTO appointments
            (id, doctor_id, doctor_schedule_id, appointment_date_time, expire_date_time,
             start_time, end_time, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(appointment.doctor_id)
    .bind(appointment.doctor_schedule_id)
    .bind(appointment.appointment_date_time)
    .bind(appointment.expire_date_time)
    .bind(appointment.start_time)
    .bind(appointment.end_time)
    .bind(appointment.status.as_str())
    .bind(Utc::now())
    .execute(&mut **tx)
    .await?;

    Ok(result.rows_affected())
}
