//! The time slot catalog.
//!
//! An ordered, finite, restartable sequence of candidate slots. The order
//! is the engine's tie-break: slots are tried in catalog order for every
//! course, so reordering the catalog changes which slot a course lands in.
//!
//! The catalog is an explicit configuration value passed into the engine,
//! never module-level state. Deployments supply richer catalogs via
//! [`SlotCatalog::from_file`] without touching the engine.

use std::fs;
use std::path::Path;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::slot::{DayOfWeek, TimeSlot};

/// Error type for catalog configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid time '{0}': expected HH:MM or HH:MM:SS")]
    InvalidTime(String),

    #[error("slot {index} ({day} {start}-{end}): start must be before end")]
    EmptySlot {
        index: usize,
        day: DayOfWeek,
        start: String,
        end: String,
    },
}

/// Catalog configuration file contents.
///
/// ```toml
/// [[slot]]
/// day = "Monday"
/// start = "08:00"
/// end = "10:00"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogConfig {
    #[serde(default)]
    slot: Vec<SlotSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotSettings {
    day: DayOfWeek,
    start: String,
    end: String,
}

fn parse_time(value: &str) -> Result<NaiveTime, CatalogError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| CatalogError::InvalidTime(value.to_string()))
}

/// Ordered, finite, restartable sequence of candidate time slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCatalog {
    slots: Vec<TimeSlot>,
}

impl SlotCatalog {
    /// Build a catalog from an explicit slot list, preserving order.
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        SlotCatalog { slots }
    }

    /// The reference catalog: Monday 08:00-10:00, Monday 10:00-12:00,
    /// Tuesday 08:00-10:00, in that priority order.
    pub fn reference() -> Self {
        let hm = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();
        SlotCatalog::new(vec![
            TimeSlot::new(DayOfWeek::Monday, hm(8, 0), hm(10, 0)),
            TimeSlot::new(DayOfWeek::Monday, hm(10, 0), hm(12, 0)),
            TimeSlot::new(DayOfWeek::Tuesday, hm(8, 0), hm(10, 0)),
        ])
    }

    /// Load a catalog from a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig = toml::from_str(content)?;

        let mut slots = Vec::with_capacity(config.slot.len());
        for (index, entry) in config.slot.iter().enumerate() {
            let start = parse_time(&entry.start)?;
            let end = parse_time(&entry.end)?;
            if start >= end {
                return Err(CatalogError::EmptySlot {
                    index,
                    day: entry.day,
                    start: entry.start.clone(),
                    end: entry.end.clone(),
                });
            }
            slots.push(TimeSlot::new(entry.day, start, end));
        }

        Ok(SlotCatalog::new(slots))
    }

    /// Iterate the slots in priority order. Restartable: callers consume a
    /// fresh iterator per course.
    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter()
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
