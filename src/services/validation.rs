//! Roster validation.
//!
//! Validation runs before a generation and decides whether the engine may
//! run at all. The engine assumes referential integrity of its inputs, so
//! broken references are rejected here, never inside the loop.
//!
//! Validation rules include:
//! - Referential integrity (every course names an existing faculty member)
//! - Duplicate identifier detection across each entity list
//! - Capacity sanity (non-positive classroom capacity)
//!
//! Classroom capacity is deliberately **not** enforced against course
//! sizes: conflict checks ignore capacity, matching the original behavior.
//! A non-positive capacity only produces a warning.

use std::collections::HashSet;

use serde::Serialize;

use crate::api::{Classroom, Course, Faculty};

/// Criticality of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Criticality {
    /// Logged, does not stop a generation run.
    Warning,
    /// Rejects the run before the engine executes.
    Blocking,
}

impl Criticality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::Warning => "warning",
            Criticality::Blocking => "blocking",
        }
    }
}

/// Issue category for grouping validation problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueCategory {
    ReferentialIntegrity,
    DuplicateId,
    Capacity,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::ReferentialIntegrity => "referential_integrity",
            IssueCategory::DuplicateId => "duplicate_id",
            IssueCategory::Capacity => "capacity",
        }
    }
}

/// A single validation issue for a roster entity.
/// Reports serialize for persistence and API surfaces; they are built
/// in-process, never parsed back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub category: IssueCategory,
    pub criticality: Criticality,
    /// Entity kind the issue concerns ("course", "classroom", ...).
    pub entity: &'static str,
    pub entity_id: i64,
    pub description: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}/{}] {} {}: {}",
            self.category.as_str(),
            self.criticality.as_str(),
            self.entity,
            self.entity_id,
            self.description
        )
    }
}

/// Aggregated validation outcome for a roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True if any issue rejects the generation run.
    pub fn is_blocking(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.criticality == Criticality::Blocking)
    }

    pub fn blocking_issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.criticality == Criticality::Blocking)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.criticality == Criticality::Warning)
    }

    fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "no issues");
        }
        let rendered: Vec<String> = self.issues.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", rendered.join("; "))
    }
}

/// Validate a roster before a generation run.
///
/// Returns every issue found; callers decide based on
/// [`ValidationReport::is_blocking`]. Entity order does not affect the
/// outcome.
pub fn validate_roster(
    faculty: &[Faculty],
    courses: &[Course],
    classrooms: &[Classroom],
) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_duplicates(&mut report, "faculty", faculty.iter().map(|f| f.id.0));
    check_duplicates(&mut report, "course", courses.iter().map(|c| c.id.0));
    check_duplicates(&mut report, "classroom", classrooms.iter().map(|c| c.id.0));

    let faculty_ids: HashSet<i64> = faculty.iter().map(|f| f.id.0).collect();
    for course in courses {
        if !faculty_ids.contains(&course.faculty_id.0) {
            report.push(ValidationIssue {
                category: IssueCategory::ReferentialIntegrity,
                criticality: Criticality::Blocking,
                entity: "course",
                entity_id: course.id.0,
                description: format!(
                    "references faculty {} which does not exist",
                    course.faculty_id
                ),
            });
        }
    }

    for classroom in classrooms {
        if classroom.capacity <= 0 {
            report.push(ValidationIssue {
                category: IssueCategory::Capacity,
                criticality: Criticality::Warning,
                entity: "classroom",
                entity_id: classroom.id.0,
                description: format!("non-positive capacity {}", classroom.capacity),
            });
        }
    }

    report
}

fn check_duplicates(
    report: &mut ValidationReport,
    entity: &'static str,
    ids: impl Iterator<Item = i64>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            report.push(ValidationIssue {
                category: IssueCategory::DuplicateId,
                criticality: Criticality::Blocking,
                entity,
                entity_id: id,
                description: "duplicate identifier".to_string(),
            });
        }
    }
}
