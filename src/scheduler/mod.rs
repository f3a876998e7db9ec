//! The pure scheduling core.
//!
//! - [`conflicts`]: predicates deciding whether a classroom or faculty
//!   member is busy in a candidate slot, given the committed assignments
//! - [`engine`]: the greedy-first-fit assignment engine
//!
//! Everything here is synchronous and deterministic: the same inputs in
//! the same order produce the same output, with no suspension points and
//! no internal parallelism. Persistence is the caller's concern; see
//! [`crate::db::services::generate_timetable`] for the orchestrated run
//! and its serialization precondition.

pub mod conflicts;
pub mod engine;

pub use conflicts::{classroom_busy, faculty_busy};
pub use engine::{generate, unscheduled_courses};
