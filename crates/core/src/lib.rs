//! # Clinic Core
//!
//! Domain types and the appointment-slot generation engine.
//!
//! Persistence is reached only through the collaborator traits in
//! [`slots::sources`], so the engine runs the same against PostgreSQL or an
//! in-memory store.

pub mod calendar;
pub mod errors;
pub mod models;
pub mod slots;
