use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    calendar::LocalDayOfWeek,
    errors::{ClinicError, ClinicResult},
};

/// Recurring weekly availability of a doctor.
///
/// The window `[start_time, end_time)` on every `day_of_week` is carved into
/// `count` slots of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorSchedule {
    pub id: Uuid,
    pub doctor_id: Uuid,
    /// `None` means the doctor's private office.
    pub clinic_id: Option<Uuid>,
    pub shift_id: Option<Uuid>,
    pub service_id: Uuid,
    pub day_of_week: LocalDayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub count: i32,
    pub created_at: DateTime<Utc>,
}

impl DoctorSchedule {
    /// True when the schedule can be carved into slots.
    pub fn is_well_formed(&self) -> bool {
        self.count >= 1 && self.end_time > self.start_time
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub doctor_id: Uuid,
    pub clinic_id: Option<Uuid>,
    pub shift_id: Option<Uuid>,
    pub service_id: Uuid,
    pub day_of_week: LocalDayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub count: i32,
}

impl CreateScheduleRequest {
    /// Rejects schedules the slot generator cannot carve.
    pub fn validate(&self) -> ClinicResult<()> {
        if self.count < 1 {
            return Err(ClinicError::Validation(format!(
                "Slot count must be at least 1, got {}",
                self.count
            )));
        }
        if self.end_time <= self.start_time {
            return Err(ClinicError::Validation(format!(
                "End time {} must be after start time {}",
                self.end_time, self.start_time
            )));
        }
        Ok(())
    }
}
