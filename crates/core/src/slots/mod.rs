//! # Appointment Slot Generation
//!
//! Turns recurring doctor schedules into concrete appointment slots for a
//! range of days.
//!
//! - [`sources`]: collaborator traits the engine reads from and writes to
//! - [`holiday_set`]: days on which nothing is generated
//! - [`index`]: dedup keys of slots that already exist
//! - [`generator`]: the generation run itself

pub mod generator;
pub mod holiday_set;
pub mod index;
pub mod sources;

pub use generator::{GenerationReport, SlotGenerator, carve_slots};
pub use holiday_set::HolidaySet;
pub use index::{ExistingSlotIndex, SlotKey};
pub use sources::{AppointmentSink, AppointmentSource, HolidaySource, ScheduleSource, UnitOfWork};
