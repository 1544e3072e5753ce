mod error;
mod mutations;
mod warnings;

pub use error::TableError;

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{DayEntries, DayKey, Entry, EventInfo};
use crate::render::{RedrawEvent, RedrawHub, Renderer};

/// Canonical nested day→entry tree plus the machinery to apply
/// server-confirmed mutations and redraw.
///
/// The tree is exclusively owned: one table per page, mutations through
/// `&mut self` only. Drill-down views (`interval`) borrow the table
/// mutably and write through it, so two writers can never coexist.
///
/// Callers invoke the mutation methods only after the server confirmed
/// the edit; no network I/O or retry logic lives here.
pub struct TimeTable {
    data: HashMap<DayKey, DayEntries>,
    event_info: EventInfo,
    warnings: Vec<String>,
    renderer: Arc<dyn Renderer>,
    hub: Arc<RedrawHub>,
}

impl TimeTable {
    pub fn new(
        data: HashMap<DayKey, DayEntries>,
        event_info: EventInfo,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            data,
            event_info,
            warnings: Vec::new(),
            renderer,
            hub: Arc::new(RedrawHub::new()),
        }
    }

    pub fn data(&self) -> &HashMap<DayKey, DayEntries> {
        &self.data
    }

    pub fn day(&self, day: &str) -> Option<&DayEntries> {
        self.data.get(day)
    }

    pub fn entry(&self, day: &str, id: &str) -> Option<&Entry> {
        self.data.get(day)?.get(id)
    }

    pub fn event_info(&self) -> &EventInfo {
        &self.event_info
    }

    /// Auto-operation notices staged by the last successful mutation.
    /// Informational only; never block further interaction.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn dismiss_warnings(&mut self) {
        self.warnings.clear();
    }

    /// Handle for subscribing to redraw completions out of band.
    pub fn redraw_hub(&self) -> Arc<RedrawHub> {
        Arc::clone(&self.hub)
    }

    /// Drill into one slot's children. Errors when the entry is absent or
    /// does not nest.
    pub fn interval(&mut self, day: &str, slot_id: &str) -> Result<IntervalView<'_>, TableError> {
        let entry = self
            .data
            .get(day)
            .and_then(|d| d.get(slot_id))
            .ok_or_else(|| TableError::SlotNotFound {
                day: day.to_string(),
                id: slot_id.to_string(),
            })?;
        if !entry.entry_type.nests() {
            return Err(TableError::NotASlot {
                day: day.to_string(),
                id: slot_id.to_string(),
            });
        }
        Ok(IntervalView {
            table: self,
            day: day.to_string(),
            slot_id: slot_id.to_string(),
        })
    }

    /// Redraw one day and publish completion. The mutation that called us
    /// has already landed, so anything sequenced after the returned future
    /// observes DOM and data in agreement.
    pub(super) async fn redraw_day(&self, day: &DayKey) {
        self.renderer.draw_day(day).await;
        self.hub.send(RedrawEvent::Day(day.clone()));
    }

    pub async fn redraw_all(&self) {
        self.renderer.draw_all_days().await;
        self.hub.send(RedrawEvent::AllDays);
    }

    pub(super) fn day_mut(&mut self, day: &str) -> Result<&mut DayEntries, TableError> {
        self.data
            .get_mut(day)
            .ok_or_else(|| TableError::DayNotFound(day.to_string()))
    }
}

/// Interval view: the drill-down UI mode scoped to one slot's children.
///
/// Holds a mutable borrow of the parent table and mutates the parent's
/// tree directly, so slot-time changes made here are immediately visible
/// to the parent's denormalized slot entry.
pub struct IntervalView<'a> {
    pub(super) table: &'a mut TimeTable,
    pub(super) day: DayKey,
    pub(super) slot_id: String,
}

impl std::fmt::Debug for IntervalView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalView")
            .field("day", &self.day)
            .field("slot_id", &self.slot_id)
            .finish_non_exhaustive()
    }
}

impl IntervalView<'_> {
    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn slot_id(&self) -> &str {
        &self.slot_id
    }

    /// The slot entry this view is scoped to.
    pub fn slot(&self) -> &Entry {
        // Existence checked when the view was created; the borrow on the
        // table guarantees nobody removed it since.
        &self.table.data[&self.day][&self.slot_id]
    }

    pub(super) fn slot_mut(&mut self) -> &mut Entry {
        self.table
            .data
            .get_mut(&self.day)
            .and_then(|d| d.get_mut(&self.slot_id))
            .expect("slot vanished while interval view held the table")
    }
}
