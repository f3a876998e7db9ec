//! Example demonstrating a full timetable generation run
//!
//! This example shows how to use the timetable core to:
//! 1. Parse a roster (faculty, courses, classrooms) from JSON
//! 2. Seed an in-memory store
//! 3. Run the generation service against the reference slot catalog
//! 4. Inspect the committed timetable and unscheduled courses
//!
//! To run this example:
//! ```bash
//! cargo run --example generate_timetable
//! ```

use timetable_core::db::repositories::LocalRepository;
use timetable_core::db::services::{generate_timetable, list_timetable};
use timetable_core::models::{parse_roster_json_str, BoundaryPolicy, SlotCatalog};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Timetable Generation ===\n");

    // Step 1: Parse the roster
    println!("1. Parsing roster...");
    let roster = parse_roster_json_str(
        r#"{
            "faculty": [
                {"id": 1, "name": "Dr. Hopper", "department": "CS"},
                {"id": 2, "name": "Dr. Lovelace", "department": "Math"}
            ],
            "courses": [
                {"id": 1, "name": "Operating Systems", "department": "CS", "faculty_id": 1},
                {"id": 2, "name": "Linear Algebra", "department": "Math", "faculty_id": 2},
                {"id": 3, "name": "Compilers", "department": "CS", "faculty_id": 1}
            ],
            "classrooms": [
                {"id": 1, "name": "Room A", "capacity": 40},
                {"id": 2, "name": "Room B", "capacity": 25}
            ]
        }"#,
    )?;
    println!(
        "   {} faculty, {} courses, {} classrooms\n",
        roster.faculty.len(),
        roster.courses.len(),
        roster.classrooms.len()
    );

    // Step 2: Seed the in-memory store
    println!("2. Seeding store...");
    let repo = LocalRepository::new();
    for f in roster.faculty {
        repo.add_faculty(f);
    }
    for c in roster.courses {
        repo.add_course(c);
    }
    for r in roster.classrooms {
        repo.add_classroom(r);
    }

    // Step 3: Generate against the reference catalog
    println!("3. Generating timetable...");
    let catalog = SlotCatalog::reference();
    let assignments = generate_timetable(&repo, &catalog, BoundaryPolicy::default()).await?;
    println!("   {} assignments committed\n", assignments.len());

    // Step 4: Print the committed timetable
    println!("4. Committed timetable:");
    for entry in list_timetable(&repo).await? {
        println!(
            "   #{} course {} -> {} (classroom {}, faculty {})",
            entry.id, entry.course_id, entry.slot, entry.classroom_id, entry.faculty_id
        );
    }

    Ok(())
}
