//! Program scheduling engine.
//!
//! Turns a flat registration set into timed performance slots across
//! parallel halls.
//!
//! # Pipeline
//!
//! ```text
//! registrations ─▶ OrderingPolicy ─▶ HallPartitioner ─┬─▶ ScheduleBuilder (Hall 1) ─▶ ScheduleSummary
//!                                                     └─▶ ScheduleBuilder (Hall 2) ─▶ ScheduleSummary
//! ```
//!
//! Each hall is built independently from a disjoint item subset, so halls
//! share no state during a build.

mod builder;
mod duration;
mod ordering;
mod partition;
mod summary;

pub use builder::{ScheduleBuilder, INTERVAL_MINUTES};
pub use duration::{
    exceeds_max_duration, parse_duration, parse_duration_or, DEFAULT_DURATION_MINUTES,
    MAX_DURATION_MINUTES,
};
pub use ordering::{CategoryThenItemType, OrderingKind, OrderingPolicy, RegistrationOrder};
pub use partition::{HallItems, HallPartitioner, HallSpec, Partition};
pub use summary::{ItemCount, ScheduleSummary};
