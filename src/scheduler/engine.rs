//! Greedy-first-fit assignment engine.
//!
//! # Algorithm
//!
//! Single pass, no backtracking: courses in input order, slots in catalog
//! order, classrooms in input order. The first (slot, classroom) pair where
//! neither the classroom nor the course's faculty member is busy wins; the
//! course is committed and the engine moves on. A course with no compatible
//! pair across the whole catalog is left out of the result — that is a
//! legitimate unscheduled state, not an error.
//!
//! # Complexity
//! O(courses * slots * classrooms) candidate checks, each scanning the
//! committed set. Terminates on all inputs.
//!
//! # Guarantees
//! The result never contains a conflicting pair (same classroom or same
//! faculty, same day, overlapping intervals under the chosen policy), and
//! no course appears more than once. Neither full coverage nor balanced
//! classroom utilization is guaranteed: greedy-first-fit trades optimality
//! for predictability, and downstream behavior depends on that.

use crate::api::{Classroom, Course, CourseId, NewAssignment};
use crate::models::{BoundaryPolicy, SlotCatalog};

use super::conflicts::{classroom_busy, faculty_busy};

/// Produce a conflict-free assignment set for the given roster.
///
/// Pure and deterministic: identical inputs in identical order yield an
/// identical result. The engine assumes referential integrity of
/// `course.faculty_id` — callers reject broken references before running
/// (see [`crate::services::validation::validate_roster`]).
pub fn generate(
    courses: &[Course],
    classrooms: &[Classroom],
    catalog: &SlotCatalog,
    policy: BoundaryPolicy,
) -> Vec<NewAssignment> {
    let mut committed: Vec<NewAssignment> = Vec::with_capacity(courses.len());

    for course in courses {
        'slots: for slot in catalog.iter() {
            // The faculty check does not depend on the classroom choice.
            if faculty_busy(&committed, course.faculty_id, slot, policy) {
                continue;
            }
            for classroom in classrooms {
                if !classroom_busy(&committed, classroom.id, slot, policy) {
                    committed.push(NewAssignment {
                        course_id: course.id,
                        classroom_id: classroom.id,
                        faculty_id: course.faculty_id,
                        slot: *slot,
                    });
                    break 'slots;
                }
            }
        }
    }

    committed
}

/// Courses from the input that received no assignment, in input order.
///
/// Absence from the result set is the engine's way of reporting an
/// unschedulable course; this helper lets callers observe it without
/// treating it as a failure.
pub fn unscheduled_courses(courses: &[Course], assignments: &[NewAssignment]) -> Vec<CourseId> {
    courses
        .iter()
        .map(|c| c.id)
        .filter(|id| !assignments.iter().any(|a| a.course_id == *id))
        .collect()
}
