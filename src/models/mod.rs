//! Program domain models.
//!
//! Provides the data types for representing an event-day program: the
//! regulation catalog, registered performances, wall-clock times, and the
//! derived per-venue slots.
//!
//! # Domain Mappings
//!
//! | event-program | Scheduling term |
//! |---------------|-----------------|
//! | RegisteredItem | Job |
//! | Hall (venue) | Machine |
//! | ScheduleSlot | Assignment |
//! | VenueSchedule | Machine timeline |

mod clock;
mod item;
mod regulation;
mod slot;

pub use clock::{format_elapsed, ClockTime, MINUTES_PER_DAY};
pub use item::RegisteredItem;
pub use regulation::{
    CategoryRegulations, ItemRegulation, RegulationTable, LOWER_PRIMARY, PRE_PRIMARY, PRIMARY,
};
pub use slot::{ScheduleSlot, VenueSchedule};
