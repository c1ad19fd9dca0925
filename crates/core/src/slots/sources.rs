//! Collaborators of the slot generator.
//!
//! Implementations live in the database crate (PostgreSQL and in-memory).
//! Every method reports failures as `eyre::Result`; the generator turns them
//! into [`ClinicError::Database`](crate::errors::ClinicError::Database).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    models::{appointment::NewAppointment, schedule::DoctorSchedule},
    slots::index::SlotKey,
};

/// Supplies every recurring schedule, in no particular order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn get_all(&self) -> eyre::Result<Vec<DoctorSchedule>>;
}

/// Supplies holiday dates within `[start, end]`, both inclusive.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn get_dates_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> eyre::Result<Vec<NaiveDate>>;
}

/// Supplies the dedup keys of persisted appointments whose
/// `appointment_date_time` falls on any day in `[start, end]`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentSource: Send + Sync {
    async fn get_keys_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> eyre::Result<Vec<SlotKey>>;
}

/// Receives appointments to insert. Staged rows stay invisible to readers
/// until [`UnitOfWork::commit`] succeeds.
pub trait AppointmentSink: Send {
    fn stage_insert(&mut self, appointment: NewAppointment);
}

/// Writes everything staged so far in a single transaction.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Returns the number of affected rows.
    async fn commit(&mut self) -> eyre::Result<u64>;
}
