use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create doctor_schedules table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS doctor_schedules (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            doctor_id UUID NOT NULL,
            clinic_id UUID NULL,
            shift_id UUID NULL,
            service_id UUID NOT NULL,
            day_of_week SMALLINT NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            count INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_day_of_week CHECK (day_of_week BETWEEN 0 AND 6),
            CONSTRAINT valid_slot_window CHECK (end_time > start_time),
            CONSTRAINT valid_slot_count CHECK (count >= 1)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create holidays table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS holidays (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            date DATE NOT NULL UNIQUE,
            title VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table. A slot is identified by its schedule, day
    // and start time; appointment_date_time carries both of the latter.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            doctor_id UUID NOT NULL,
            doctor_schedule_id UUID NOT NULL REFERENCES doctor_schedules(id),
            appointment_date_time TIMESTAMP NOT NULL,
            expire_date_time TIMESTAMP NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'booked',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_appointment_range CHECK (expire_date_time > appointment_date_time),
            CONSTRAINT unique_schedule_slot UNIQUE (doctor_schedule_id, appointment_date_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_doctor_schedules_doctor_id ON doctor_schedules(doctor_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_doctor_id ON appointments(doctor_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_date_time ON appointments(appointment_date_time);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
