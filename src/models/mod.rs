//! Value types for the scheduling domain.
//!
//! - [`slot`]: days, time slots and the interval-overlap boundary policy
//! - [`catalog`]: the ordered slot catalog and its TOML configuration
//! - [`parse`]: file/string based roster parsing

pub mod catalog;
pub mod parse;
pub mod slot;

pub use catalog::{CatalogError, SlotCatalog};
pub use parse::{parse_roster_file, parse_roster_json_str, Roster};
pub use slot::{BoundaryPolicy, DayOfWeek, TimeSlot};
