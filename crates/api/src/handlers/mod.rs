pub mod appointment;
pub mod holiday;
pub mod schedule;
