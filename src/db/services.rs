//! High-level store service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of [`TimetableRepository`]. The generation run lives
//! here: loading the roster, validating it, replacing the committed
//! assignment set, and persisting what the engine produced.
//!
//! # Concurrency
//!
//! A generation run is a single synchronous computation between store
//! calls, and it is **not safe to run concurrently with itself** against a
//! shared store: two interleaved runs can interleave
//! `clear_assignments`/`commit_assignment` calls and corrupt the result.
//! Callers must serialize generation per scheduling scope (a mutex, a
//! single-writer queue, or a store-level lock); this layer deliberately
//! exposes no locking primitive. Reads ([`list_timetable`]) may run
//! concurrently with each other.

use log::{info, warn};

use crate::api::Assignment;
use crate::models::{BoundaryPolicy, SlotCatalog};
use crate::scheduler::engine::{generate, unscheduled_courses};
use crate::services::validation::{validate_roster, ValidationReport};

use super::repository::{RepositoryError, TimetableRepository};

/// Error type for a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The roster failed validation before the engine ran. The committed
    /// assignment set is left untouched.
    #[error("roster validation failed: {0}")]
    Integrity(ValidationReport),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Run a full timetable generation against the store.
///
/// Orchestrates the complete run:
/// 1. Load faculty, courses and classrooms from the store
/// 2. Validate the roster; blocking issues reject the run before any
///    state is touched (see [`GenerationError::Integrity`])
/// 3. Clear all previously committed assignments — generation replaces,
///    it never increments
/// 4. Run the pure engine over the roster and `catalog`
/// 5. Commit each produced assignment in order
///
/// Unschedulable courses are not errors: they are absent from the result
/// and logged at `warn` level. Retrying with unchanged inputs yields an
/// identical assignment set.
///
/// Callers must not run two generations concurrently against the same
/// store; see the module documentation.
pub async fn generate_timetable<R: TimetableRepository>(
    repo: &R,
    catalog: &SlotCatalog,
    policy: BoundaryPolicy,
) -> Result<Vec<Assignment>, GenerationError> {
    let faculty = repo.load_faculty().await?;
    let courses = repo.load_courses().await?;
    let classrooms = repo.load_classrooms().await?;

    let report = validate_roster(&faculty, &courses, &classrooms);
    for issue in report.warnings() {
        warn!("roster warning: {}", issue);
    }
    if report.is_blocking() {
        return Err(GenerationError::Integrity(report));
    }

    let cleared = repo.clear_assignments().await?;
    info!(
        "generating timetable: {} courses, {} classrooms, {} slots ({} stale assignments cleared)",
        courses.len(),
        classrooms.len(),
        catalog.len(),
        cleared
    );

    let drafts = generate(&courses, &classrooms, catalog, policy);

    let skipped = unscheduled_courses(&courses, &drafts);
    for course_id in &skipped {
        warn!("course {} left unscheduled: no compatible slot/classroom", course_id);
    }

    let mut committed = Vec::with_capacity(drafts.len());
    for draft in drafts {
        committed.push(repo.commit_assignment(draft).await?);
    }

    info!(
        "timetable generated: {} assignments committed, {} courses unscheduled",
        committed.len(),
        skipped.len()
    );
    Ok(committed)
}

/// Load the committed timetable for read-only listing.
pub async fn list_timetable<R: TimetableRepository>(
    repo: &R,
) -> Result<Vec<Assignment>, RepositoryError> {
    repo.load_assignments().await
}
