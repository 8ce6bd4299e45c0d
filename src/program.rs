//! Event-day program planning.
//!
//! [`ProgramPlanner`] runs the full pipeline over a registration snapshot
//! and renders the display-ready [`Program`]. Planning is a pure
//! projection: it reads nothing but its arguments and keeps no state
//! between calls, so repeated calls with the same registrations return the
//! same program.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{DayOverflow, ProgramConfig, UnmappedPolicy};
use crate::error::{ProgramError, Result};
use crate::models::{ClockTime, RegisteredItem, RegulationTable, ScheduleSlot, VenueSchedule};
use crate::repository::RegistrationRepository;
use crate::scheduler::{
    HallItems, HallPartitioner, ItemCount, OrderingPolicy, ScheduleBuilder, ScheduleSummary,
    MAX_DURATION_MINUTES,
};
use crate::validation::validate_regulations;

/// Display-ready program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// One entry per hall, in configuration order.
    pub venues: Vec<VenueProgram>,
    /// Slots across all venues.
    pub total_performances: usize,
    /// Registrations left out because no hall hosts their category.
    pub unscheduled_items: usize,
}

/// One hall's program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueProgram {
    /// Hall name (e.g., "Hall 1").
    pub name: String,
    /// Hall description (e.g., "Category A (EYE)").
    pub description: String,
    /// Category badges, in first-appearance order.
    pub categories: Vec<String>,
    /// Slots in start-time order.
    pub slots: Vec<SlotView>,
    /// Number of slots.
    pub slot_count: usize,
    /// Minutes from the first start to the last end, intervals included.
    pub total_minutes: u32,
    /// Elapsed time as `"Hh Mm"`.
    pub total_elapsed: String,
}

/// One rendered slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    /// 1-based position within the venue.
    pub order: usize,
    /// 12-hour start (`6:00 AM`).
    pub start_time: String,
    /// 12-hour end.
    pub end_time: String,
    /// Regulation code (e.g., "B1"), empty if unresolved.
    pub code: String,
    /// Performance item type.
    pub item: String,
    /// Registration item code.
    pub item_code: String,
    /// Owning school.
    pub school_name: String,
    /// Minutes allocated to the performance.
    pub duration_minutes: u32,
    /// Regulation cast limit, if any.
    pub max_cast: Option<u32>,
    /// School category.
    pub category: String,
}

/// Plans event-day programs from registrations.
///
/// # Example
///
/// ```
/// use event_program::config::ProgramConfig;
/// use event_program::models::RegisteredItem;
/// use event_program::program::ProgramPlanner;
///
/// let planner = ProgramPlanner::new(ProgramConfig::default()).unwrap();
/// let items = vec![
///     RegisteredItem::new("Play", "SIA-PRI-01", "Primary"),
///     RegisteredItem::new("Cultural Creative Dance", "SIA-PRI-02", "Primary"),
///     RegisteredItem::new("Mystery", "RIV-PPR-01", "Pre-Primary"),
/// ];
///
/// let program = planner.plan(&items).unwrap();
/// let hall2 = &program.venues[1];
/// assert_eq!(hall2.slots[1].start_time, "6:18 AM");
/// assert_eq!(hall2.slots[1].end_time, "6:25 AM");
/// assert_eq!(program.venues[0].slots[0].end_time, "6:10 AM");
/// assert_eq!(program.total_performances, 3);
/// ```
#[derive(Debug)]
pub struct ProgramPlanner {
    config: ProgramConfig,
    regulations: RegulationTable,
    partitioner: HallPartitioner,
    builder: ScheduleBuilder,
    ordering: Box<dyn OrderingPolicy>,
}

impl ProgramPlanner {
    /// Creates a planner from configuration.
    ///
    /// Fails if the regulation catalog or hall layout is inconsistent
    /// (duplicate item types, oversized durations, a category hosted by two
    /// halls), or if the interval or default duration exceeds
    /// [`MAX_DURATION_MINUTES`].
    pub fn new(config: ProgramConfig) -> Result<Self> {
        for (key, minutes) in [
            ("interval_minutes", config.interval_minutes),
            ("default_duration_minutes", config.default_duration_minutes),
        ] {
            if minutes > MAX_DURATION_MINUTES {
                return Err(ProgramError::Config(format!(
                    "{key} = {minutes} exceeds the {MAX_DURATION_MINUTES} minute limit"
                )));
            }
        }

        let regulations = config.regulation_table();
        validate_regulations(&regulations)?;

        let mut halls = config.halls.clone();
        if config.unmapped_categories == UnmappedPolicy::Overflow {
            if halls.iter().any(|h| h.name == config.overflow_hall.name) {
                return Err(ProgramError::Config(format!(
                    "overflow hall '{}' clashes with a configured hall",
                    config.overflow_hall.name
                )));
            }
            // Routed explicitly by the planner, never by category.
            let mut overflow = config.overflow_hall.clone();
            overflow.categories.clear();
            halls.push(overflow);
        }
        let partitioner = HallPartitioner::new(halls)?;

        let builder = ScheduleBuilder::new()
            .with_interval(config.interval_minutes)
            .with_default_duration(config.default_duration_minutes);
        let ordering = config.ordering.policy(&config.category_order);

        Ok(Self {
            config,
            regulations,
            partitioner,
            builder,
            ordering,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// The active regulation catalog.
    pub fn regulations(&self) -> &RegulationTable {
        &self.regulations
    }

    /// Lays out per-hall schedules (times in 24-hour form, not wrapped).
    ///
    /// Returns the schedules and the number of registrations left out.
    pub fn schedule_halls(&self, items: &[RegisteredItem]) -> Result<(Vec<VenueSchedule>, usize)> {
        let ordered = self.ordering.arrange(items);
        let mut partition = self.partitioner.partition(&ordered);
        let mut unscheduled = 0;

        if !partition.unmapped.is_empty() {
            match self.config.unmapped_categories {
                UnmappedPolicy::Reject => {
                    return Err(ProgramError::UnmappedCategories(
                        partition.unmapped_categories(),
                    ));
                }
                UnmappedPolicy::Drop => {
                    for item in &partition.unmapped {
                        warn!(
                            item_code = %item.item_code,
                            category = %item.category,
                            "no hall hosts category, item left out of program"
                        );
                    }
                    unscheduled = partition.unmapped.len();
                }
                UnmappedPolicy::Overflow => {
                    for item in &partition.unmapped {
                        warn!(
                            item_code = %item.item_code,
                            category = %item.category,
                            hall = %self.config.overflow_hall.name,
                            "no hall hosts category, item routed to overflow hall"
                        );
                    }
                    let overflow = partition
                        .halls
                        .iter_mut()
                        .find(|h| h.hall.name == self.config.overflow_hall.name);
                    if let Some(overflow) = overflow {
                        overflow.items.append(&mut partition.unmapped);
                    }
                }
            }
        }

        let venues = partition
            .halls
            .iter()
            .map(|hall| self.build_hall(hall))
            .collect::<Result<Vec<_>>>()?;
        Ok((venues, unscheduled))
    }

    fn build_hall(&self, hall: &HallItems) -> Result<VenueSchedule> {
        let slots = self
            .builder
            .build(&hall.items, &self.regulations, self.config.start_time);
        debug!(hall = %hall.hall.name, slots = slots.len(), "hall scheduled");

        if self.config.day_overflow == DayOverflow::Reject {
            if let Some(last) = slots.last().filter(|s| s.end_time.is_past_midnight()) {
                return Err(ProgramError::DayOverflow {
                    venue: hall.hall.name.clone(),
                    end: last.end_time.to_string(),
                });
            }
        }

        Ok(VenueSchedule::new(&hall.hall.name, &hall.hall.description).with_slots(slots))
    }

    /// Plans the display-ready program for a registration snapshot.
    pub fn plan(&self, items: &[RegisteredItem]) -> Result<Program> {
        let (venues, unscheduled_items) = self.schedule_halls(items)?;
        let venues: Vec<VenueProgram> = venues.iter().map(|v| self.present(v)).collect();
        let total_performances = venues.iter().map(|v| v.slot_count).sum();

        info!(
            venues = venues.len(),
            performances = total_performances,
            unscheduled = unscheduled_items,
            "program planned"
        );

        Ok(Program {
            venues,
            total_performances,
            unscheduled_items,
        })
    }

    /// Plans the sample program: every catalog entry once, in catalog order.
    pub fn plan_catalog(&self) -> Result<Program> {
        self.plan(&self.regulations.catalog_items())
    }

    /// Registrations per `(category, item type)`.
    pub fn item_counts(&self, items: &[RegisteredItem]) -> Vec<ItemCount> {
        ItemCount::tally(items, &self.config.category_order)
    }

    /// Reads the current registrations and plans the program.
    pub async fn plan_from<R>(&self, repository: &R) -> Result<Program>
    where
        R: RegistrationRepository + ?Sized,
    {
        let items = repository.registered_items().await?;
        self.plan(&items)
    }

    /// Renders one venue for display.
    pub fn present(&self, venue: &VenueSchedule) -> VenueProgram {
        let summary = ScheduleSummary::calculate(&venue.slots);
        VenueProgram {
            name: venue.name.clone(),
            description: venue.description.clone(),
            categories: venue.categories().into_iter().map(String::from).collect(),
            slots: venue
                .slots
                .iter()
                .enumerate()
                .map(|(idx, slot)| self.present_slot(idx + 1, slot))
                .collect(),
            slot_count: summary.count,
            total_minutes: summary.total_minutes,
            total_elapsed: summary.total_elapsed(),
        }
    }

    fn present_slot(&self, order: usize, slot: &ScheduleSlot) -> SlotView {
        SlotView {
            order,
            start_time: self.display_time(slot.start_time),
            end_time: self.display_time(slot.end_time),
            code: slot.code.clone(),
            item: slot.item.clone(),
            item_code: slot.item_code.clone(),
            school_name: slot.school_name.clone(),
            duration_minutes: slot.duration_minutes,
            max_cast: slot.max_cast,
            category: slot.category.clone(),
        }
    }

    fn display_time(&self, time: ClockTime) -> String {
        match self.config.day_overflow {
            DayOverflow::Wrap => time.wrapped().to_12h(),
            DayOverflow::Extend | DayOverflow::Reject => time.to_12h(),
        }
    }
}
