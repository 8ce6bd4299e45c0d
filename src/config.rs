//! Program configuration.
//!
//! Every business rule that used to be a magic number lives here with a
//! documented default: venue start time, transition interval, fallback
//! duration, hall layout, ordering, and the overflow/unmapped policies.
//! Configuration is read from TOML; every key is optional.
//!
//! ```toml
//! start_time = "06:00"
//! interval_minutes = 3
//! day_overflow = "extend"          # extend | wrap | reject
//! unmapped_categories = "drop"     # drop | overflow | reject
//! ordering = "registration"        # registration | category-then-item-type
//!
//! [[halls]]
//! name = "Hall 1"
//! description = "Category A (EYE)"
//! categories = ["Pre-Primary", "Lower Primary"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{ClockTime, RegulationTable, LOWER_PRIMARY, PRE_PRIMARY, PRIMARY};
use crate::scheduler::{HallPartitioner, HallSpec, OrderingKind, DEFAULT_DURATION_MINUTES, INTERVAL_MINUTES};

/// What to do when a venue's program runs past midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOverflow {
    /// Keep counting hours past 24 (`25:30`).
    #[default]
    Extend,
    /// Display times modulo 24 hours (`01:30`).
    Wrap,
    /// Fail planning.
    Reject,
}

/// What to do with registrations whose category no hall hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedPolicy {
    /// Leave them out of the program, logging each one.
    #[default]
    Drop,
    /// Schedule them in the overflow hall.
    Overflow,
    /// Fail planning.
    Reject,
}

/// Program configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// Start time shared by every hall.
    #[serde(default = "default_start_time")]
    pub start_time: ClockTime,
    /// Gap between consecutive performances in a hall (minutes).
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u32,
    /// Slot length for items without a usable duration (minutes).
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,
    #[serde(default)]
    pub day_overflow: DayOverflow,
    #[serde(default)]
    pub unmapped_categories: UnmappedPolicy,
    /// Hall used by [`UnmappedPolicy::Overflow`].
    #[serde(default = "default_overflow_hall")]
    pub overflow_hall: HallSpec,
    #[serde(default)]
    pub ordering: OrderingKind,
    /// Category rank for category-based ordering and item tallies.
    #[serde(default = "default_category_order")]
    pub category_order: Vec<String>,
    #[serde(default = "HallPartitioner::standard_halls")]
    pub halls: Vec<HallSpec>,
    /// Regulation catalog; the built-in catalog when absent.
    #[serde(default)]
    pub regulations: Option<RegulationTable>,
}

fn default_start_time() -> ClockTime {
    ClockTime::from_hm(6, 0)
}

fn default_interval_minutes() -> u32 {
    INTERVAL_MINUTES
}

fn default_duration_minutes() -> u32 {
    DEFAULT_DURATION_MINUTES
}

fn default_overflow_hall() -> HallSpec {
    HallSpec::new("Overflow Hall").with_description("Unassigned categories")
}

fn default_category_order() -> Vec<String> {
    vec![
        PRE_PRIMARY.to_string(),
        LOWER_PRIMARY.to_string(),
        PRIMARY.to_string(),
    ]
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            start_time: default_start_time(),
            interval_minutes: default_interval_minutes(),
            default_duration_minutes: default_duration_minutes(),
            day_overflow: DayOverflow::default(),
            unmapped_categories: UnmappedPolicy::default(),
            overflow_hall: default_overflow_hall(),
            ordering: OrderingKind::default(),
            category_order: default_category_order(),
            halls: HallPartitioner::standard_halls(),
            regulations: None,
        }
    }
}

impl ProgramConfig {
    /// Parses configuration from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The configured regulation catalog, or the built-in one.
    pub fn regulation_table(&self) -> RegulationTable {
        self.regulations
            .clone()
            .unwrap_or_else(RegulationTable::standard)
    }
}
