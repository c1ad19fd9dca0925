//! PostgreSQL implementation of the slot generator's collaborators.

use async_trait::async_trait;
use chrono::NaiveDate;
use clinic_core::{
    models::{appointment::NewAppointment, schedule::DoctorSchedule},
    slots::{
        AppointmentSink, AppointmentSource, HolidaySource, ScheduleSource, SlotGenerator, SlotKey,
        UnitOfWork,
    },
};
use eyre::Result;
use tracing::debug;

use crate::{
    DbPool,
    repositories::{appointment, holiday, schedule},
};

/// Read side of slot generation, backed by a connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// A generator reading schedules, holidays and existing slots from this
    /// store.
    pub fn generator(&self) -> SlotGenerator<'_> {
        SlotGenerator::new(self, self, self)
    }
}

#[async_trait]
impl ScheduleSource for PgStore {
    async fn get_all(&self) -> Result<Vec<DoctorSchedule>> {
        schedule::list_schedules(&self.pool)
            .await?
            .into_iter()
            .map(|row| DoctorSchedule::try_from(row).map_err(eyre::Report::from))
            .collect()
    }
}

#[async_trait]
impl HolidaySource for PgStore {
    async fn get_dates_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
        holiday::get_holiday_dates_in_range(&self.pool, start, end).await
    }
}

#[async_trait]
impl AppointmentSource for PgStore {
    async fn get_keys_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<SlotKey>> {
        let keys = appointment::get_slot_keys_in_range(&self.pool, start, end).await?;
        Ok(keys.into_iter().map(SlotKey::from).collect())
    }
}

/// Buffers generated appointments and writes them in one transaction.
///
/// Nothing touches the database until [`UnitOfWork::commit`]. If any insert
/// fails the transaction is dropped, which rolls it back.
pub struct PgUnitOfWork {
    pool: DbPool,
    staged: Vec<NewAppointment>,
}

impl PgUnitOfWork {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            staged: Vec::new(),
        }
    }

    pub fn staged(&self) -> &[NewAppointment] {
        &self.staged
    }
}

impl AppointmentSink for PgUnitOfWork {
    fn stage_insert(&mut self, appointment: NewAppointment) {
        self.staged.push(appointment);
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn commit(&mut self) -> Result<u64> {
        if self.staged.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut affected = 0;
        for staged in &self.staged {
            affected += appointment::insert_appointment(&mut tx, staged).await?;
        }
        tx.commit().await?;

        debug!(rows = affected, "Committed staged appointments");
        self.staged.clear();
        Ok(affected)
    }
}
