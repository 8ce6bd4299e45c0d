//! Event-day program scheduling.
//!
//! Turns a flat set of registered performance items (school, category,
//! item type) into a timed program across parallel halls. Each hall's
//! schedule is a deterministic projection of registration order onto the
//! wall clock: items run back to back, each for its regulated maximum
//! duration, separated by a fixed transition interval.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ClockTime`, `RegisteredItem`,
//!   `RegulationTable`, `ScheduleSlot`, `VenueSchedule`
//! - **`scheduler`**: Ordering, hall partitioning, slot layout, statistics
//! - **`program`**: `ProgramPlanner` and the display-ready `Program`
//! - **`validation`**: Integrity checks (duplicate codes, unhosted categories)
//! - **`codes`**: Item code generation (`SIA-PRI-01`)
//! - **`repository`**: Registration store seam and in-memory store
//! - **`config`**: TOML configuration with documented defaults
//! - **`http`**: Read-only query endpoint (feature `http-server`)
//!
//! # Example
//!
//! ```
//! use event_program::{ProgramConfig, ProgramPlanner, RegisteredItem};
//!
//! let planner = ProgramPlanner::new(ProgramConfig::default()).unwrap();
//! let program = planner
//!     .plan(&[RegisteredItem::new("Play", "SIA-PRI-01", "Primary")])
//!     .unwrap();
//!
//! assert_eq!(program.venues[1].slots[0].start_time, "6:00 AM");
//! assert_eq!(program.venues[1].slots[0].end_time, "6:15 AM");
//! assert_eq!(program.venues[1].total_elapsed, "0h 15m");
//! ```

pub mod codes;
pub mod config;
pub mod error;
pub mod models;
pub mod program;
pub mod repository;
pub mod scheduler;
pub mod validation;

#[cfg(feature = "http-server")]
pub mod http;

pub use config::{DayOverflow, ProgramConfig, UnmappedPolicy};
pub use error::{ProgramError, Result};
pub use models::{ClockTime, RegisteredItem, RegulationTable, ScheduleSlot, VenueSchedule};
pub use program::{Program, ProgramPlanner, SlotView, VenueProgram};
pub use repository::{InMemoryRepository, RegistrationRepository};
