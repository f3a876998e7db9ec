//! Conflict predicates over the committed assignment set.
//!
//! Both predicates are pure functions of the assignments committed so far
//! within a generation run. A (slot, classroom) pair is usable for a course
//! iff the classroom is not busy and the course's faculty member is not
//! busy in that slot.

use crate::api::{ClassroomId, FacultyId, NewAssignment};
use crate::models::{BoundaryPolicy, TimeSlot};

/// True if any committed assignment occupies `classroom` in a slot that
/// collides with `slot` under `policy`.
pub fn classroom_busy(
    committed: &[NewAssignment],
    classroom: ClassroomId,
    slot: &TimeSlot,
    policy: BoundaryPolicy,
) -> bool {
    committed
        .iter()
        .any(|a| a.classroom_id == classroom && a.slot.overlaps(slot, policy))
}

/// True if any committed assignment keeps `faculty` occupied in a slot that
/// collides with `slot` under `policy`.
pub fn faculty_busy(
    committed: &[NewAssignment],
    faculty: FacultyId,
    slot: &TimeSlot,
    policy: BoundaryPolicy,
) -> bool {
    committed
        .iter()
        .any(|a| a.faculty_id == faculty && a.slot.overlaps(slot, policy))
}
