//! Repository trait for abstracting timetable persistence.
//!
//! This trait defines the interface for all store operations the core
//! needs, allowing different implementations (relational store, in-memory
//! mock, etc.) to be swapped via dependency injection.

use async_trait::async_trait;

use crate::api::{Assignment, Classroom, Course, Faculty, NewAssignment};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Data validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::InternalError(s.to_string())
    }
}

/// Repository trait for timetable store operations.
///
/// Implementations can use different backends (relational store, in-memory
/// storage, etc.). Roster entities are loaded in a stable order — load
/// order is the engine's iteration order, so it is part of the contract.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust and allow
/// sharing across threads.
///
/// # Error Handling
/// All methods return `RepositoryResult<T>` which wraps either the expected
/// return type or a `RepositoryError` describing what went wrong.
#[async_trait]
pub trait TimetableRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the store connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Roster Loading ====================

    /// Load all faculty members, in insertion order.
    async fn load_faculty(&self) -> RepositoryResult<Vec<Faculty>>;

    /// Load all courses, in insertion order.
    async fn load_courses(&self) -> RepositoryResult<Vec<Course>>;

    /// Load all classrooms, in insertion order.
    async fn load_classrooms(&self) -> RepositoryResult<Vec<Classroom>>;

    // ==================== Assignment Operations ====================

    /// Delete all committed assignments.
    ///
    /// Idempotent: clearing an empty store succeeds with a count of 0.
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of assignments removed
    /// * `Err(RepositoryError)` - If the operation fails
    async fn clear_assignments(&self) -> RepositoryResult<u64>;

    /// Commit a draft assignment, assigning it a generated identity.
    ///
    /// # Returns
    /// * `Ok(Assignment)` - The committed entry including its new id
    /// * `Err(RepositoryError)` - If the operation fails
    async fn commit_assignment(&self, draft: NewAssignment) -> RepositoryResult<Assignment>;

    /// Load all committed assignments for read-only listing, in id order.
    async fn load_assignments(&self) -> RepositoryResult<Vec<Assignment>>;
}
