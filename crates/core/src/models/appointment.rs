use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ClinicError;

/// Lifecycle state of an appointment slot.
///
/// Generated slots start out as `Booked`, which here means the slot exists
/// and a patient may claim it. There is no separate "available" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Booked,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "booked",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booked" => Ok(AppointmentStatus::Booked),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            other => Err(ClinicError::Validation(format!(
                "Unknown appointment status: {}",
                other
            ))),
        }
    }
}

/// Persisted appointment slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub doctor_schedule_id: Uuid,
    pub appointment_date_time: NaiveDateTime,
    pub expire_date_time: NaiveDateTime,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Appointment slot produced by a generation run, not yet persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub doctor_id: Uuid,
    pub doctor_schedule_id: Uuid,
    pub appointment_date_time: NaiveDateTime,
    pub expire_date_time: NaiveDateTime,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: AppointmentStatus,
}

impl NewAppointment {
    pub fn date(&self) -> NaiveDate {
        self.appointment_date_time.date()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAppointmentsRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAppointmentsResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_count: usize,
}
