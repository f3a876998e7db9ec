//! Time slot value types.
//!
//! A [`TimeSlot`] is a (day, start, end) interval candidate for scheduling.
//! Slots are plain values defined by the catalog; they are never persisted
//! as entities of their own.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Day of the week, serialized as the full English name ("Monday", ...).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boundary rule for the interval-overlap test.
///
/// The reference conflict test compares intervals inclusively, which makes
/// back-to-back slots that touch at a single instant (one ending exactly
/// when the next begins) count as overlapping. Whether that strictness is
/// intended is an open question upstream, so the rule is an explicit
/// parameter rather than a baked-in choice. `Inclusive` is the default and
/// reproduces the reference behavior.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// `start <= other.end && end >= other.start`: touching slots conflict.
    #[default]
    Inclusive,
    /// `start < other.end && end > other.start`: touching slots are free.
    Exclusive,
}

/// A (day, start, end) interval candidate for scheduling.
///
/// `start`/`end` are wall-clock times with minute granularity; the interval
/// never crosses midnight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: DayOfWeek,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(day: DayOfWeek, start: NaiveTime, end: NaiveTime) -> Self {
        TimeSlot { day, start, end }
    }

    /// Whether two slots collide under the given boundary policy.
    ///
    /// Slots on different days never overlap.
    pub fn overlaps(&self, other: &TimeSlot, policy: BoundaryPolicy) -> bool {
        if self.day != other.day {
            return false;
        }
        match policy {
            BoundaryPolicy::Inclusive => self.start <= other.end && self.end >= other.start,
            BoundaryPolicy::Exclusive => self.start < other.end && self.end > other.start,
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
