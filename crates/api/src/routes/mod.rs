pub mod appointment;
pub mod health;
pub mod holiday;
pub mod schedule;
