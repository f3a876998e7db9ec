//! Public API surface for the timetable core.
//!
//! This file consolidates the identifier newtypes and entity DTOs used
//! throughout the crate. All types derive Serialize/Deserialize for JSON
//! serialization.

use serde::{Deserialize, Serialize};

use crate::models::TimeSlot;

/// Faculty identifier (store primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FacultyId(pub i64);

/// Course identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(pub i64);

/// Classroom identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassroomId(pub i64);

/// Committed assignment identifier, generated by the store on commit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssignmentId(pub i64);

impl FacultyId {
    pub fn new(value: i64) -> Self {
        FacultyId(value)
    }
}

impl CourseId {
    pub fn new(value: i64) -> Self {
        CourseId(value)
    }
}

impl ClassroomId {
    pub fn new(value: i64) -> Self {
        ClassroomId(value)
    }
}

impl AssignmentId {
    pub fn new(value: i64) -> Self {
        AssignmentId(value)
    }
}

impl std::fmt::Display for FacultyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ClassroomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A faculty member who owns zero or more courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: FacultyId,
    pub name: String,
    #[serde(default)]
    pub department: String,
}

/// A course taught by exactly one faculty member.
///
/// Immutable for scheduling purposes: the engine reads courses but never
/// mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    #[serde(default)]
    pub department: String,
    pub faculty_id: FacultyId,
}

/// A classroom available for assignment.
///
/// `capacity` is modeled but not consulted by the conflict checks; see the
/// roster validation module for the warning it can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: ClassroomId,
    pub name: String,
    pub capacity: i32,
}

/// An assignment produced by the engine, not yet committed to a store.
///
/// Serializes flat: the slot contributes `day`, `start` and `end` fields
/// alongside the entity references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAssignment {
    pub course_id: CourseId,
    pub classroom_id: ClassroomId,
    pub faculty_id: FacultyId,
    #[serde(flatten)]
    pub slot: TimeSlot,
}

/// A committed timetable entry with a store-generated identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub course_id: CourseId,
    pub classroom_id: ClassroomId,
    pub faculty_id: FacultyId,
    #[serde(flatten)]
    pub slot: TimeSlot,
}

impl Assignment {
    /// Attach a store-generated identity to a draft assignment.
    pub fn from_draft(id: AssignmentId, draft: NewAssignment) -> Self {
        Assignment {
            id,
            course_id: draft.course_id,
            classroom_id: draft.classroom_id,
            faculty_id: draft.faculty_id,
            slot: draft.slot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, TimeSlot};
    use chrono::NaiveTime;

    fn slot() -> TimeSlot {
        TimeSlot::new(
            DayOfWeek::Monday,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn id_newtypes_display_raw_value() {
        assert_eq!(CourseId::new(42).to_string(), "42");
        assert_eq!(AssignmentId::new(7).to_string(), "7");
    }

    #[test]
    fn assignment_serializes_flat() {
        let assignment = Assignment {
            id: AssignmentId(1),
            course_id: CourseId(10),
            classroom_id: ClassroomId(20),
            faculty_id: FacultyId(30),
            slot: slot(),
        };

        let value = serde_json::to_value(&assignment).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["course_id"], 10);
        assert_eq!(value["classroom_id"], 20);
        assert_eq!(value["faculty_id"], 30);
        assert_eq!(value["day"], "Monday");
        assert!(value.get("slot").is_none());
    }

    #[test]
    fn assignment_round_trips_through_json() {
        let assignment = Assignment {
            id: AssignmentId(5),
            course_id: CourseId(1),
            classroom_id: ClassroomId(2),
            faculty_id: FacultyId(3),
            slot: slot(),
        };

        let json = serde_json::to_string(&assignment).unwrap();
        let parsed: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, assignment);
    }

    #[test]
    fn from_draft_preserves_references() {
        let draft = NewAssignment {
            course_id: CourseId(1),
            classroom_id: ClassroomId(2),
            faculty_id: FacultyId(3),
            slot: slot(),
        };

        let committed = Assignment::from_draft(AssignmentId(99), draft.clone());
        assert_eq!(committed.id, AssignmentId(99));
        assert_eq!(committed.course_id, draft.course_id);
        assert_eq!(committed.classroom_id, draft.classroom_id);
        assert_eq!(committed.faculty_id, draft.faculty_id);
        assert_eq!(committed.slot, draft.slot);
    }
}
