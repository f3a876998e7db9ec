//! Integration tests for the generation service layer against the
//! in-memory repository.

use chrono::NaiveTime;
use timetable_core::api::{
    Classroom, ClassroomId, Course, CourseId, Faculty, FacultyId, NewAssignment,
};
use timetable_core::db::repositories::LocalRepository;
use timetable_core::db::services::{generate_timetable, list_timetable, GenerationError};
use timetable_core::db::RepositoryError;
use timetable_core::db::TimetableRepository;
use timetable_core::models::{BoundaryPolicy, DayOfWeek, SlotCatalog, TimeSlot};

fn seeded_repo() -> LocalRepository {
    let repo = LocalRepository::new();
    repo.add_faculty(Faculty {
        id: FacultyId(1),
        name: "Dr. Hopper".to_string(),
        department: "CS".to_string(),
    });
    repo.add_faculty(Faculty {
        id: FacultyId(2),
        name: "Dr. Lovelace".to_string(),
        department: "Math".to_string(),
    });
    repo.add_course(Course {
        id: CourseId(1),
        name: "Operating Systems".to_string(),
        department: "CS".to_string(),
        faculty_id: FacultyId(1),
    });
    repo.add_course(Course {
        id: CourseId(2),
        name: "Linear Algebra".to_string(),
        department: "Math".to_string(),
        faculty_id: FacultyId(2),
    });
    repo.add_classroom(Classroom {
        id: ClassroomId(1),
        name: "Room A".to_string(),
        capacity: 40,
    });
    repo
}

fn stale_entry() -> NewAssignment {
    NewAssignment {
        course_id: CourseId(999),
        classroom_id: ClassroomId(999),
        faculty_id: FacultyId(999),
        slot: TimeSlot::new(
            DayOfWeek::Friday,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        ),
    }
}

#[tokio::test]
async fn generation_commits_conflict_free_assignments_with_identities() {
    let repo = seeded_repo();
    let catalog = SlotCatalog::reference();

    let assignments = generate_timetable(&repo, &catalog, BoundaryPolicy::Exclusive)
        .await
        .unwrap();

    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[0].id.0, 1);
    assert_eq!(assignments[1].id.0, 2);
    assert_eq!(assignments[0].course_id, CourseId(1));
    assert_eq!(assignments[1].course_id, CourseId(2));
    // One classroom: the second course is pushed to the next slot.
    assert_ne!(assignments[0].slot, assignments[1].slot);

    let listed = list_timetable(&repo).await.unwrap();
    assert_eq!(listed, assignments);
}

#[tokio::test]
async fn generation_replaces_stale_assignments() {
    let repo = seeded_repo();
    repo.commit_assignment(stale_entry()).await.unwrap();
    assert_eq!(repo.assignment_count(), 1);

    let catalog = SlotCatalog::reference();
    generate_timetable(&repo, &catalog, BoundaryPolicy::Exclusive)
        .await
        .unwrap();

    let listed = list_timetable(&repo).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|a| a.course_id != CourseId(999)));
}

#[tokio::test]
async fn regeneration_with_unchanged_inputs_is_idempotent() {
    let repo = seeded_repo();
    let catalog = SlotCatalog::reference();

    let first = generate_timetable(&repo, &catalog, BoundaryPolicy::Exclusive)
        .await
        .unwrap();
    let second = generate_timetable(&repo, &catalog, BoundaryPolicy::Exclusive)
        .await
        .unwrap();

    // Identities differ across runs (the counter is not reset), but the
    // scheduling outcome is identical.
    let placement =
        |list: &[timetable_core::api::Assignment]| -> Vec<(CourseId, ClassroomId, TimeSlot)> {
            list.iter()
                .map(|a| (a.course_id, a.classroom_id, a.slot))
                .collect()
        };
    assert_eq!(placement(&first), placement(&second));
    assert_eq!(repo.assignment_count(), second.len());
}

#[tokio::test]
async fn broken_faculty_reference_rejects_the_run_before_clearing() {
    let repo = seeded_repo();
    repo.add_course(Course {
        id: CourseId(3),
        name: "Phantom Seminar".to_string(),
        department: "CS".to_string(),
        faculty_id: FacultyId(42),
    });
    let pre_existing = repo.commit_assignment(stale_entry()).await.unwrap();

    let catalog = SlotCatalog::reference();
    let err = generate_timetable(&repo, &catalog, BoundaryPolicy::Exclusive)
        .await
        .unwrap_err();

    match err {
        GenerationError::Integrity(report) => {
            assert!(report.is_blocking());
            assert!(report.to_string().contains("42"));
        }
        other => panic!("expected integrity error, got {:?}", other),
    }

    // The committed set was never touched.
    let listed = list_timetable(&repo).await.unwrap();
    assert_eq!(listed, vec![pre_existing]);
}

#[tokio::test]
async fn capacity_warning_does_not_stop_generation() {
    let repo = seeded_repo();
    repo.add_classroom(Classroom {
        id: ClassroomId(2),
        name: "Broom Closet".to_string(),
        capacity: 0,
    });

    let catalog = SlotCatalog::reference();
    let assignments = generate_timetable(&repo, &catalog, BoundaryPolicy::Exclusive)
        .await
        .unwrap();

    assert_eq!(assignments.len(), 2);
}

#[tokio::test]
async fn unschedulable_courses_are_absent_but_not_errors() {
    let repo = seeded_repo();
    // No classrooms at all.
    let empty = LocalRepository::new();
    for f in repo.load_faculty().await.unwrap() {
        empty.add_faculty(f);
    }
    for c in repo.load_courses().await.unwrap() {
        empty.add_course(c);
    }

    let catalog = SlotCatalog::reference();
    let assignments = generate_timetable(&empty, &catalog, BoundaryPolicy::Exclusive)
        .await
        .unwrap();

    assert!(assignments.is_empty());
    assert!(list_timetable(&empty).await.unwrap().is_empty());
}

#[tokio::test]
async fn unhealthy_store_surfaces_a_repository_error() {
    let repo = seeded_repo();
    repo.set_healthy(false);

    let catalog = SlotCatalog::reference();
    let err = generate_timetable(&repo, &catalog, BoundaryPolicy::Exclusive)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GenerationError::Repository(RepositoryError::ConnectionError(_))
    ));
}

#[tokio::test]
async fn empty_roster_generates_an_empty_timetable() {
    let repo = LocalRepository::new();
    let catalog = SlotCatalog::reference();

    let assignments = generate_timetable(&repo, &catalog, BoundaryPolicy::Inclusive)
        .await
        .unwrap();

    assert!(assignments.is_empty());
}
