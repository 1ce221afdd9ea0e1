//! Dashboard view model.
//!
//! `Dashboard` owns every piece of user-facing state: the primary year, the
//! optional compare year, the stats loaded for each, the view mode and the
//! export orientation. It performs no I/O. Transitions that need data return
//! a [`FetchTicket`]; the driver runs the fetch however it likes (a spawned
//! task, a Dioxus future, a joined pair) and hands the outcome back through
//! [`Dashboard::apply`].
//!
//! Each slot counts the fetches it has started. A ticket only lands if its
//! generation and year still match the slot, so a slow response for a year
//! the user already moved away from is dropped instead of overwriting newer
//! state.

use crate::chart::Orientation;
use crate::error::{GwError, Result};
use crate::models::YearStats;
use crate::years::{YearRange, DEFAULT_PRIMARY_YEAR};
use log::{debug, error, info};
use std::fmt;
use std::str::FromStr;

/// One of the two independent fetch/display targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Primary,
    Compare,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Primary => f.write_str("primary"),
            Slot::Compare => f.write_str("compare"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Live bar charts built from fetched stats
    #[default]
    Interactive,
    /// Server-rendered chart images for sharing
    Export,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Interactive => "Interactive",
            ViewMode::Export => "Export",
        }
    }

    /// Footer text shown under the charts.
    pub fn caption(&self) -> &'static str {
        match self {
            ViewMode::Interactive => "Explore and compare gaming years with interactive charts.",
            ViewMode::Export => "Snapshot-ready view. Use high-fidelity images for sharing!",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = GwError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "interactive" => Ok(ViewMode::Interactive),
            "export" => Ok(ViewMode::Export),
            _ => Err(GwError::UnknownViewMode(s.to_string())),
        }
    }
}

/// User intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SelectPrimaryYear(i32),
    /// `None` is the "None" choice of the compare picker
    SelectCompareYear(Option<i32>),
    SetViewMode(ViewMode),
    SetOrientation(Orientation),
}

/// A fetch the driver must perform, tagged with the slot state it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub slot: Slot,
    pub year: i32,
    generation: u64,
}

/// What [`Dashboard::apply`] did with a fetch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Stats replaced
    Updated,
    /// Fetch failed; loading cleared, previous stats kept
    Failed,
    /// Ticket was superseded; nothing changed
    Stale,
}

/// Target year, loaded data and loading flag of one slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotState {
    year: Option<i32>,
    stats: Option<YearStats>,
    loading: bool,
    generation: u64,
}

impl SlotState {
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Last successfully loaded stats, possibly for a previous year.
    pub fn stats(&self) -> Option<&YearStats> {
        self.stats.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn begin(&mut self, slot: Slot, year: i32) -> FetchTicket {
        self.generation += 1;
        self.year = Some(year);
        self.loading = true;
        FetchTicket {
            slot,
            year,
            generation: self.generation,
        }
    }

    fn clear(&mut self) {
        // bumping the generation orphans any fetch still in flight
        self.generation += 1;
        self.year = None;
        self.stats = None;
        self.loading = false;
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && self.year == Some(ticket.year)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    years: YearRange,
    primary: SlotState,
    compare: SlotState,
    view_mode: ViewMode,
    orientation: Orientation,
}

impl Dashboard {
    /// Open on [`DEFAULT_PRIMARY_YEAR`], clamped into `years`.
    pub fn new(years: YearRange) -> Self {
        let primary_year = years.clamp(DEFAULT_PRIMARY_YEAR);
        Self {
            years,
            primary: SlotState {
                year: Some(primary_year),
                ..Default::default()
            },
            compare: SlotState::default(),
            view_mode: ViewMode::default(),
            orientation: Orientation::default(),
        }
    }

    pub fn with_primary_year(years: YearRange, year: i32) -> Result<Self> {
        let mut dashboard = Self::new(years);
        dashboard.primary.year = Some(years.check(year)?);
        Ok(dashboard)
    }

    /// Issue the initial fetch for the primary year.
    pub fn start(&mut self) -> FetchTicket {
        let year = self.primary_year();
        self.primary.begin(Slot::Primary, year)
    }

    pub fn handle(&mut self, event: Event) -> Result<Option<FetchTicket>> {
        match event {
            Event::SelectPrimaryYear(year) => self.select_primary_year(year),
            Event::SelectCompareYear(year) => self.select_compare_year(year),
            Event::SetViewMode(mode) => {
                self.set_view_mode(mode);
                Ok(None)
            }
            Event::SetOrientation(orientation) => {
                self.set_orientation(orientation);
                Ok(None)
            }
        }
    }

    pub fn select_primary_year(&mut self, year: i32) -> Result<Option<FetchTicket>> {
        let year = self.years.check(year)?;
        if self.compare.year == Some(year) {
            info!("Primary year {} was the compare year; clearing comparison", year);
            self.compare.clear();
        }
        if self.primary.year == Some(year) {
            return Ok(None);
        }
        Ok(Some(self.primary.begin(Slot::Primary, year)))
    }

    pub fn select_compare_year(&mut self, year: Option<i32>) -> Result<Option<FetchTicket>> {
        if self.view_mode != ViewMode::Interactive {
            debug!("Ignoring compare selection {:?} in {:?} mode", year, self.view_mode);
            return Ok(None);
        }

        let year = match year {
            Some(y) => Some(self.years.check(y)?),
            None => None,
        };

        match year {
            Some(y) if Some(y) != self.primary.year => {
                if self.compare.year == Some(y) {
                    return Ok(None);
                }
                Ok(Some(self.compare.begin(Slot::Compare, y)))
            }
            _ => {
                self.compare.clear();
                Ok(None)
            }
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Land the outcome of a fetch started by this dashboard.
    ///
    /// Failures are logged and otherwise swallowed: the slot stops loading
    /// and keeps whatever it showed before.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<YearStats>) -> Applied {
        let state = match ticket.slot {
            Slot::Primary => &mut self.primary,
            Slot::Compare => &mut self.compare,
        };

        if !state.is_current(&ticket) {
            debug!(
                "Discarding stale {} response for {} (slot now {:?})",
                ticket.slot, ticket.year, state.year
            );
            return Applied::Stale;
        }

        state.loading = false;
        match result {
            Ok(stats) => {
                state.stats = Some(stats);
                Applied::Updated
            }
            Err(e) => {
                error!("Failed to fetch {} stats for {}: {}", ticket.slot, ticket.year, e);
                Applied::Failed
            }
        }
    }

    pub fn years(&self) -> YearRange {
        self.years
    }

    pub fn primary_year(&self) -> i32 {
        // the primary slot is never cleared
        self.primary.year.unwrap_or_else(|| self.years.clamp(DEFAULT_PRIMARY_YEAR))
    }

    pub fn compare_year(&self) -> Option<i32> {
        self.compare.year
    }

    pub fn slot(&self, slot: Slot) -> &SlotState {
        match slot {
            Slot::Primary => &self.primary,
            Slot::Compare => &self.compare,
        }
    }

    pub fn primary(&self) -> &SlotState {
        &self.primary
    }

    pub fn compare(&self) -> &SlotState {
        &self.compare
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Years the compare picker offers (plus "None").
    pub fn compare_choices(&self) -> Vec<i32> {
        self.years.compare_choices(self.primary_year())
    }
}
