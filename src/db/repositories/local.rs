//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository trait
//! suitable for unit testing and local development. All data is stored in
//! memory using Vec structures, providing fast, deterministic, and isolated
//! execution. Insertion order is preserved, which makes it the reference
//! backend for the engine's ordering guarantees.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{Assignment, AssignmentId, Classroom, Course, Faculty, NewAssignment};
use crate::db::repository::{RepositoryError, RepositoryResult, TimetableRepository};

/// In-memory local repository.
///
/// Cloning is cheap and shares the underlying store, mirroring how a pooled
/// connection handle would behave.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    faculty: Vec<Faculty>,
    courses: Vec<Course>,
    classrooms: Vec<Classroom>,
    assignments: Vec<Assignment>,

    // ID counter for committed assignments
    next_assignment_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            faculty: Vec::new(),
            courses: Vec::new(),
            classrooms: Vec::new(),
            assignments: Vec::new(),
            next_assignment_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Seed a faculty member. Insertion order is preserved.
    pub fn add_faculty(&self, faculty: Faculty) {
        self.data.write().faculty.push(faculty);
    }

    /// Seed a course. Insertion order is the engine's iteration order.
    pub fn add_course(&self, course: Course) {
        self.data.write().courses.push(course);
    }

    /// Seed a classroom. Insertion order is the engine's iteration order.
    pub fn add_classroom(&self, classroom: Classroom) {
        self.data.write().classrooms.push(classroom);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository, keeping the health flag.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Number of committed assignments currently stored.
    pub fn assignment_count(&self) -> usize {
        self.data.read().assignments.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Store is not healthy".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimetableRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn load_faculty(&self) -> RepositoryResult<Vec<Faculty>> {
        self.check_health()?;
        Ok(self.data.read().faculty.clone())
    }

    async fn load_courses(&self) -> RepositoryResult<Vec<Course>> {
        self.check_health()?;
        Ok(self.data.read().courses.clone())
    }

    async fn load_classrooms(&self) -> RepositoryResult<Vec<Classroom>> {
        self.check_health()?;
        Ok(self.data.read().classrooms.clone())
    }

    async fn clear_assignments(&self) -> RepositoryResult<u64> {
        self.check_health()?;
        let mut data = self.data.write();
        let removed = data.assignments.len() as u64;
        data.assignments.clear();
        Ok(removed)
    }

    async fn commit_assignment(&self, draft: NewAssignment) -> RepositoryResult<Assignment> {
        self.check_health()?;
        let mut data = self.data.write();
        let id = AssignmentId(data.next_assignment_id);
        data.next_assignment_id += 1;

        let committed = Assignment::from_draft(id, draft);
        data.assignments.push(committed.clone());
        Ok(committed)
    }

    async fn load_assignments(&self) -> RepositoryResult<Vec<Assignment>> {
        self.check_health()?;
        Ok(self.data.read().assignments.clone())
    }
}
