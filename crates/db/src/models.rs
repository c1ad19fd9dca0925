use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clinic_core::{
    calendar::LocalDayOfWeek,
    errors::ClinicError,
    models::{appointment::Appointment, holiday::Holiday, schedule::DoctorSchedule},
    slots::SlotKey,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDoctorSchedule {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub clinic_id: Option<Uuid>,
    pub shift_id: Option<Uuid>,
    pub service_id: Uuid,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub count: i32,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbDoctorSchedule> for DoctorSchedule {
    type Error = ClinicError;

    fn try_from(row: DbDoctorSchedule) -> Result<Self, Self::Error> {
        Ok(DoctorSchedule {
            id: row.id,
            doctor_id: row.doctor_id,
            clinic_id: row.clinic_id,
            shift_id: row.shift_id,
            service_id: row.service_id,
            day_of_week: LocalDayOfWeek::try_from(row.day_of_week)?,
            start_time: row.start_time,
            end_time: row.end_time,
            count: row.count,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbHoliday {
    pub id: Uuid,
    pub date: NaiveDate,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbHoliday> for Holiday {
    fn from(row: DbHoliday) -> Self {
        Holiday {
            id: row.id,
            date: row.date,
            title: row.title,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub doctor_schedule_id: Uuid,
    pub appointment_date_time: NaiveDateTime,
    pub expire_date_time: NaiveDateTime,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = ClinicError;

    fn try_from(row: DbAppointment) -> Result<Self, Self::Error> {
        Ok(Appointment {
            id: row.id,
            doctor_id: row.doctor_id,
            doctor_schedule_id: row.doctor_schedule_id,
            appointment_date_time: row.appointment_date_time,
            expire_date_time: row.expire_date_time,
            start_time: row.start_time,
            end_time: row.end_time,
            status: row.status.parse()?,
            created_at: row.created_at,
        })
    }
}

/// Projection of an appointment onto its dedup key.
#[derive(Debug, Clone, FromRow)]
pub struct DbSlotKey {
    pub doctor_schedule_id: Uuid,
    pub appointment_date_time: NaiveDateTime,
    pub start_time: NaiveTime,
}

impl From<DbSlotKey> for SlotKey {
    fn from(row: DbSlotKey) -> Self {
        SlotKey::new(
            row.doctor_schedule_id,
            row.appointment_date_time.date(),
            row.start_time,
        )
    }
}
