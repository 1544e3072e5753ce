use std::collections::HashMap;

use crate::model::{DateTime, DayPatch, EntryPatch, EntryType, IntervalPatch, SessionInfo};

use super::{warnings, IntervalView, TableError, TimeTable};

impl TimeTable {
    /// Apply a server-confirmed update of one entry.
    ///
    /// The entry may stay top-level, move into or out of a slot's sub-map,
    /// or change id; `old_entry_id` names where it lived before. Children
    /// of a replaced slot survive under the new entry unless the new entry
    /// is itself a full session replacement. Resolves only after the
    /// renderer finished drawing the day.
    pub async fn update_entry(
        &mut self,
        patch: EntryPatch,
        old_entry_id: &str,
    ) -> Result<(), TableError> {
        let staged = warnings::extract(&self.data, &self.event_info, &patch.auto_ops);

        let day = patch.day.clone();
        let day_map = self.day_mut(&day)?;

        // Delete from the old location. A slot's own children must be
        // captured before the overwrite loses them.
        let old_content = match day_map.remove(old_entry_id) {
            Some(mut old) => old.take_children(),
            None => {
                // Not top-level: the entry is moving out of some slot
                let slot = day_map
                    .values_mut()
                    .find(|e| {
                        e.entries
                            .as_ref()
                            .is_some_and(|m| m.contains_key(old_entry_id))
                    })
                    .ok_or_else(|| TableError::EntryNotFound {
                        day: day.clone(),
                        id: old_entry_id.to_string(),
                    })?;
                if let Some(entries) = slot.entries.as_mut() {
                    entries.remove(old_entry_id);
                }
                None
            }
        };

        let mut entry = patch.entry;
        if let Some(children) = old_content
            && entry.entry_type != EntryType::Session
        {
            entry.entries = Some(children);
        }

        // Insert at the new location
        match patch.slot_entry {
            Some(mut slot) => {
                // Payload without a sub-map keeps the slot's prior children
                if slot.entries.is_none()
                    && let Some(prev) = day_map.get(&slot.id)
                {
                    slot.entries = prev.entries.clone();
                }
                slot.entries
                    .get_or_insert_with(HashMap::new)
                    .insert(entry.id.clone(), entry);
                day_map.insert(slot.id.clone(), slot);
            }
            None => {
                day_map.insert(patch.id.clone(), entry);
            }
        }

        self.upsert_session(patch.session);
        self.warnings = staged;
        tracing::debug!("entry {old_entry_id} -> {} updated on {day}", patch.id);

        self.redraw_day(&day).await;
        Ok(())
    }

    /// Wholesale-replace one day's entry set. Ids absent from the incoming
    /// set are gone afterwards — no dangling entries.
    pub async fn update_day(&mut self, patch: DayPatch) -> Result<(), TableError> {
        let day = patch.day.clone();
        self.data.insert(day.clone(), patch.entries);
        self.upsert_session(patch.session);
        self.warnings.clear();
        tracing::debug!("day {day} replaced");

        self.redraw_day(&day).await;
        Ok(())
    }

    /// Keep the denormalized session registry consistent so other days'
    /// rendering picks up title/color changes.
    fn upsert_session(&mut self, session: Option<SessionInfo>) {
        if let Some(session) = session {
            self.event_info
                .sessions
                .insert(session.id.clone(), session);
        }
    }
}

impl IntervalView<'_> {
    /// `update_entry`, addressed inside this slot's sub-map. Contributions
    /// and breaks inside a slot nest no further, so there is no child
    /// content to carry over.
    pub async fn update_entry(
        &mut self,
        patch: EntryPatch,
        old_entry_id: &str,
    ) -> Result<(), TableError> {
        let staged =
            warnings::extract(&self.table.data, &self.table.event_info, &patch.auto_ops);

        let day = self.day.clone();
        let entries = self
            .slot_mut()
            .entries
            .get_or_insert_with(HashMap::new);
        if entries.remove(old_entry_id).is_none() {
            return Err(TableError::EntryNotFound {
                day,
                id: old_entry_id.to_string(),
            });
        }
        entries.insert(patch.entry.id.clone(), patch.entry);

        self.table.upsert_session(patch.session);
        self.table.warnings = staged;

        self.table.redraw_day(&day).await;
        Ok(())
    }

    /// Wholesale-replace this slot's entry set, propagating any slot-time
    /// change in the payload up to the parent's denormalized slot entry.
    pub async fn update_day(&mut self, patch: IntervalPatch) -> Result<(), TableError> {
        let slot = self.slot_mut();
        slot.entries = Some(patch.entries);
        if let Some(start) = patch.start_date {
            slot.start_date = start;
        }
        if let Some(end) = patch.end_date {
            slot.end_date = end;
        }

        self.table.upsert_session(patch.session);
        self.table.warnings.clear();
        let day = self.day.clone();
        tracing::debug!("slot {} on {day} replaced", self.slot_id);

        self.table.redraw_day(&day).await;
        Ok(())
    }

    /// Push new slot start/end times to the parent tree. Writes go through
    /// the parent's entry directly, so no copy can drift.
    pub fn update_times(&mut self, start: DateTime, end: DateTime) {
        let slot = self.slot_mut();
        slot.start_date = start;
        slot.end_date = end;
    }
}
