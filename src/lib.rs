//! # Timetable Core
//!
//! Conflict-free course timetable generation for a university scheduling
//! system. Given a roster of courses (each owned by a faculty member) and
//! classrooms, the engine assigns every course it can to a non-conflicting
//! (day, time slot, classroom) triple.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Entity identifiers and DTO types shared across the crate
//! - [`models`]: Time slot values, the slot catalog, and roster parsing
//! - [`scheduler`]: The pure scheduling core — conflict predicates and the
//!   greedy-first-fit assignment engine
//! - [`db`]: Repository trait, in-memory backend, and the service layer
//!   that orchestrates a generation run against a store
//! - [`services`]: Roster validation executed before a run
//!
//! ## Generation model
//!
//! A generation run is a full replacement: all previously committed
//! assignments are cleared before the engine places the current roster.
//! The engine itself is a deterministic, synchronous function of its
//! inputs and the catalog; persistence happens only through the
//! [`db::TimetableRepository`] trait.

pub mod api;
pub mod models;
pub mod scheduler;

pub mod db;

pub mod services;
