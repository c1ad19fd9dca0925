//! # Slot Generator
//!
//! Materializes bookable appointment slots from recurring doctor schedules.
//!
//! For every schedule and every day in the requested range the generator:
//!
//! 1. skips the day if it is a holiday
//! 2. skips the day if its local weekday differs from the schedule's
//! 3. carves the schedule's window into `count` equal slots
//! 4. stages every slot whose key is not yet in the [`ExistingSlotIndex`]
//!
//! The index is reloaded from storage on every run and updated as slots are
//! staged, so repeated or overlapping runs never create the same slot twice.
//! All staged slots are committed in one unit of work at the end of the run.

use chrono::{Duration, NaiveDate, NaiveTime};
use tracing::{debug, error, info, warn};

use crate::{
    calendar::local_weekday,
    errors::ClinicResult,
    models::appointment::{AppointmentStatus, NewAppointment},
    slots::{
        holiday_set::HolidaySet,
        index::{ExistingSlotIndex, SlotKey},
        sources::{AppointmentSink, AppointmentSource, HolidaySource, ScheduleSource, UnitOfWork},
    },
};

/// Outcome of a successful generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Number of slots staged and committed by this run.
    pub created_count: usize,
    /// Rows reported by the unit of work on commit.
    pub committed_rows: u64,
    pub appointments: Vec<NewAppointment>,
}

/// Splits `[start, end)` into `count` contiguous slots of equal length.
///
/// Offsets are computed from the whole window at microsecond precision, so
/// uneven divisions do not accumulate drift and each slot ends exactly where
/// the next one begins.
pub fn carve_slots(start: NaiveTime, end: NaiveTime, count: u32) -> Vec<(NaiveTime, NaiveTime)> {
    if count == 0 || end <= start {
        return Vec::new();
    }

    let window = i128::from((end - start).num_microseconds().unwrap_or(0));
    let offset = |i: u32| {
        let micros = window * i128::from(i) / i128::from(count);
        start + Duration::microseconds(micros as i64)
    };

    (0..count).map(|i| (offset(i), offset(i + 1))).collect()
}

/// Generates appointment slots from the schedules, holidays and existing
/// appointments supplied by its collaborators.
pub struct SlotGenerator<'a> {
    schedules: &'a dyn ScheduleSource,
    holidays: &'a dyn HolidaySource,
    appointments: &'a dyn AppointmentSource,
}

impl<'a> SlotGenerator<'a> {
    pub fn new(
        schedules: &'a dyn ScheduleSource,
        holidays: &'a dyn HolidaySource,
        appointments: &'a dyn AppointmentSource,
    ) -> Self {
        Self {
            schedules,
            holidays,
            appointments,
        }
    }

    /// Generates slots for every day in `[start, end]` and commits them
    /// through `uow`.
    ///
    /// A reversed range is not an error; it simply produces nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Database`](crate::errors::ClinicError::Database)
    /// when a collaborator fails. Nothing is committed in that case.
    pub async fn generate<W>(
        &self,
        uow: &mut W,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ClinicResult<GenerationReport>
    where
        W: AppointmentSink + UnitOfWork + ?Sized,
    {
        info!(%start, %end, "Generating appointment slots");

        match self.run(uow, start, end).await {
            Ok(report) => {
                info!(
                    %start,
                    %end,
                    created = report.created_count,
                    committed = report.committed_rows,
                    "Appointment slot generation finished"
                );
                Ok(report)
            }
            Err(e) => {
                error!(%start, %end, error = %e, "Appointment slot generation failed");
                Err(e)
            }
        }
    }

    async fn run<W>(
        &self,
        uow: &mut W,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ClinicResult<GenerationReport>
    where
        W: AppointmentSink + UnitOfWork + ?Sized,
    {
        if start > end {
            debug!(%start, %end, "Empty date range, nothing to generate");
            return Ok(GenerationReport::default());
        }

        let schedules = self.schedules.get_all().await?;
        let holidays = HolidaySet::load(self.holidays, start, end).await?;
        let mut index = ExistingSlotIndex::load(self.appointments, start, end).await?;

        debug!(
            schedules = schedules.len(),
            holidays = holidays.len(),
            existing = index.len(),
            "Loaded generation inputs"
        );

        let mut created = Vec::new();

        for schedule in &schedules {
            if !schedule.is_well_formed() {
                warn!(
                    schedule_id = %schedule.id,
                    count = schedule.count,
                    start_time = %schedule.start_time,
                    end_time = %schedule.end_time,
                    "Skipping malformed schedule"
                );
                continue;
            }

            let slots = carve_slots(schedule.start_time, schedule.end_time, schedule.count as u32);

            for day in start.iter_days().take_while(|day| *day <= end) {
                if holidays.contains(day) || local_weekday(day) != schedule.day_of_week {
                    continue;
                }

                for &(slot_start, slot_end) in &slots {
                    if !index.insert(SlotKey::new(schedule.id, day, slot_start)) {
                        continue;
                    }

                    let appointment = NewAppointment {
                        doctor_id: schedule.doctor_id,
                        doctor_schedule_id: schedule.id,
                        appointment_date_time: day.and_time(slot_start),
                        expire_date_time: day.and_time(slot_end),
                        start_time: slot_start,
                        end_time: slot_end,
                        status: AppointmentStatus::Booked,
                    };
                    uow.stage_insert(appointment.clone());
                    created.push(appointment);
                }
            }
        }

        let committed_rows = uow.commit().await?;

        Ok(GenerationReport {
            created_count: created.len(),
            committed_rows,
            appointments: created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        calendar::LocalDayOfWeek,
        errors::ClinicError,
        models::schedule::DoctorSchedule,
        slots::sources::{MockAppointmentSource, MockHolidaySource, MockScheduleSource},
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    mock! {
        pub Store {}

        impl AppointmentSink for Store {
            fn stage_insert(&mut self, appointment: NewAppointment);
        }

        #[async_trait]
        impl UnitOfWork for Store {
            async fn commit(&mut self) -> eyre::Result<u64>;
        }
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // 2024-03-16 is a Saturday
    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
    }

    fn schedule(count: i32, start: NaiveTime, end: NaiveTime) -> DoctorSchedule {
        DoctorSchedule {
            id: Uuid::new_v4(),
            doctor_id: Uuid::new_v4(),
            clinic_id: None,
            shift_id: None,
            service_id: Uuid::new_v4(),
            day_of_week: LocalDayOfWeek::Saturday,
            start_time: start,
            end_time: end,
            count,
            created_at: Utc::now(),
        }
    }

    fn sources(
        schedules: Vec<DoctorSchedule>,
    ) -> (MockScheduleSource, MockHolidaySource, MockAppointmentSource) {
        let mut schedule_source = MockScheduleSource::new();
        schedule_source
            .expect_get_all()
            .returning(move || Ok(schedules.clone()));

        let mut holiday_source = MockHolidaySource::new();
        holiday_source
            .expect_get_dates_in_range()
            .returning(|_, _| Ok(Vec::new()));

        let mut appointment_source = MockAppointmentSource::new();
        appointment_source
            .expect_get_keys_in_range()
            .returning(|_, _| Ok(Vec::new()));

        (schedule_source, holiday_source, appointment_source)
    }

    #[test]
    fn test_carve_slots_even_split() {
        let slots = carve_slots(time(8, 0), time(10, 0), 4);

        assert_eq!(
            slots,
            vec![
                (time(8, 0), time(8, 30)),
                (time(8, 30), time(9, 0)),
                (time(9, 0), time(9, 30)),
                (time(9, 30), time(10, 0)),
            ]
        );
    }

    #[test]
    fn test_carve_slots_fractional_minutes_are_contiguous() {
        let slots = carve_slots(time(9, 0), time(10, 0), 7);

        assert_eq!(slots.len(), 7);
        assert_eq!(slots[0].0, time(9, 0));
        assert_eq!(slots[6].1, time(10, 0));
        for pair in slots.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert_eq!(pair[0].1, pair[1].0);
        }
        // 60 / 7 minutes, kept below minute precision
        assert_eq!(
            slots[1].0,
            time(9, 8) + Duration::microseconds(34_285_714)
        );
    }

    #[test]
    fn test_carve_slots_malformed_window() {
        assert!(carve_slots(time(8, 0), time(10, 0), 0).is_empty());
        assert!(carve_slots(time(10, 0), time(10, 0), 3).is_empty());
        assert!(carve_slots(time(11, 0), time(10, 0), 3).is_empty());
    }

    #[tokio::test]
    async fn test_generate_stages_and_commits_once() {
        let (schedules, holidays, appointments) = sources(vec![schedule(4, time(8, 0), time(10, 0))]);

        let mut store = MockStore::new();
        store.expect_stage_insert().times(4).return_const(());
        store.expect_commit().times(1).returning(|| Ok(4));

        let generator = SlotGenerator::new(&schedules, &holidays, &appointments);
        let report = generator
            .generate(&mut store, saturday(), saturday())
            .await
            .unwrap();

        assert_eq!(report.created_count, 4);
        assert_eq!(report.committed_rows, 4);
        assert!(
            report
                .appointments
                .iter()
                .all(|a| a.status == AppointmentStatus::Booked)
        );
    }

    #[tokio::test]
    async fn test_reversed_range_touches_nothing() {
        let schedules = MockScheduleSource::new();
        let holidays = MockHolidaySource::new();
        let appointments = MockAppointmentSource::new();
        let mut store = MockStore::new();

        let generator = SlotGenerator::new(&schedules, &holidays, &appointments);
        let report = generator
            .generate(&mut store, saturday(), saturday().pred_opt().unwrap())
            .await
            .unwrap();

        assert_eq!(report.created_count, 0);
        assert!(report.appointments.is_empty());
    }

    #[tokio::test]
    async fn test_schedule_source_failure_skips_commit() {
        let mut schedules = MockScheduleSource::new();
        schedules
            .expect_get_all()
            .returning(|| Err(eyre::eyre!("database unavailable")));
        let holidays = MockHolidaySource::new();
        let appointments = MockAppointmentSource::new();

        let mut store = MockStore::new();
        store.expect_stage_insert().never();
        store.expect_commit().never();

        let generator = SlotGenerator::new(&schedules, &holidays, &appointments);
        let result = generator.generate(&mut store, saturday(), saturday()).await;

        match result {
            Err(ClinicError::Database(e)) => assert!(e.to_string().contains("database unavailable")),
            other => panic!("Expected Database error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_commit_failure_is_propagated() {
        let (schedules, holidays, appointments) = sources(vec![schedule(2, time(8, 0), time(9, 0))]);

        let mut store = MockStore::new();
        store.expect_stage_insert().times(2).return_const(());
        store
            .expect_commit()
            .times(1)
            .returning(|| Err(eyre::eyre!("unique constraint violated")));

        let generator = SlotGenerator::new(&schedules, &holidays, &appointments);
        let result = generator.generate(&mut store, saturday(), saturday()).await;

        assert!(matches!(result, Err(ClinicError::Database(_))));
    }

    #[tokio::test]
    async fn test_malformed_schedules_are_skipped() {
        let (schedules, holidays, appointments) = sources(vec![
            schedule(0, time(8, 0), time(10, 0)),
            schedule(3, time(10, 0), time(9, 0)),
            schedule(2, time(14, 0), time(15, 0)),
        ]);

        let mut store = MockStore::new();
        store.expect_stage_insert().times(2).return_const(());
        store.expect_commit().times(1).returning(|| Ok(2));

        let generator = SlotGenerator::new(&schedules, &holidays, &appointments);
        let report = generator
            .generate(&mut store, saturday(), saturday())
            .await
            .unwrap();

        assert_eq!(report.created_count, 2);
        assert_eq!(report.appointments[0].start_time, time(14, 0));
        assert_eq!(report.appointments[1].start_time, time(14, 30));
    }
}
