// ============================================================================
// Roster Parsing Functions
// ============================================================================
//
// File-based and string-based parsing of roster documents: the faculty,
// course and classroom lists that feed a generation run. Loading is
// collaborator work as far as the engine is concerned; this module is the
// loader used by the demo and by tests to seed a store.

use anyhow::{Context, Result};
use std::path::Path;

use crate::api::{Classroom, Course, Faculty};

/// Parsed roster input for a generation run.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub faculty: Vec<Faculty>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub classrooms: Vec<Classroom>,
}

fn validate_input_roster(roster_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(roster_json).context("Invalid roster JSON")?;
    let obj = value
        .as_object()
        .context("Roster JSON must be an object")?;
    if !obj.contains_key("courses") {
        anyhow::bail!("Missing required 'courses' field");
    }
    if !obj.contains_key("classrooms") {
        anyhow::bail!("Missing required 'classrooms' field");
    }
    Ok(())
}

/// Parse a roster from a JSON string.
///
/// The document shape is `{"faculty": [...], "courses": [...],
/// "classrooms": [...]}`; `faculty` may be omitted when only the engine
/// inputs are needed. Entity order is preserved — it is the engine's
/// iteration order.
pub fn parse_roster_json_str(roster_json: &str) -> Result<Roster> {
    validate_input_roster(roster_json)?;

    let roster: Roster = serde_json::from_str(roster_json)
        .context("Failed to deserialize roster JSON using Serde")?;
    Ok(roster)
}

/// Parse a roster from a JSON file on disk.
pub fn parse_roster_file<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read roster file {}", path.as_ref().display()))?;
    parse_roster_json_str(&content)
}
