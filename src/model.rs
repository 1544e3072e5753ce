use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Day key — `YYYYMMDD`, or the literal aggregate key `"all"`.
pub type DayKey = String;

/// The aggregate pseudo-day holding every entry of the event.
pub const ALL_DAYS: &str = "all";

/// One day's entry set, keyed by entry id. Ids are unique within a day.
pub type DayEntries = HashMap<String, Entry>;

/// Server-formatted date/time pair. Both halves are opaque strings; the
/// model never does calendar arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTime {
    pub date: String,
    pub time: String,
}

impl DateTime {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }
}

/// Discriminant of the entry union. Only `Session` and `SessionSlot`
/// nest further entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    Session,
    SessionSlot,
    Contribution,
    Break,
}

impl EntryType {
    /// Whether this entry type carries a nested `entries` sub-map.
    pub fn nests(&self) -> bool {
        matches!(self, EntryType::Session | EntryType::SessionSlot)
    }
}

/// One schedule item in the timetable tree.
///
/// Display metadata the renderer cares about but the model never inspects
/// rides along in `extra`, so a patch round-trip through the model keeps
/// every server-sent field intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub entry_type: EntryType,
    pub start_date: DateTime,
    pub end_date: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Nested entries, present only on slots and full sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<DayEntries>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Entry {
    /// True when this entry is a slot holding (possibly empty) children.
    pub fn is_slot(&self) -> bool {
        self.entry_type == EntryType::SessionSlot
    }

    /// The entry's children, taking ownership. `None` when the entry does
    /// not nest or the sub-map is empty.
    pub(crate) fn take_children(&mut self) -> Option<DayEntries> {
        self.entries.take().filter(|m| !m.is_empty())
    }
}

/// Denormalized session registry record. Rendering of other days reads
/// title/color from here rather than from any one slot entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Event-wide denormalized metadata shared by every day's rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    #[serde(default)]
    pub sessions: HashMap<String, SessionInfo>,
    /// Conference start, consulted by warning suppression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// ── Patch payloads (server → model) ─────────────────────────────

/// Server-confirmed state of one entry after an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    pub day: DayKey,
    /// Key under which the entry lands at the top level of the day.
    pub id: String,
    pub entry: Entry,
    /// When present, `entry` nests under this slot instead of the day map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_entry: Option<Entry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auto_ops: Vec<AutoOp>,
    /// Pre-edit snapshot, echoed by some endpoints. Unused by the patch
    /// logic (the caller names the old id explicitly) but kept so the
    /// payload deserializes losslessly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<Entry>,
}

/// Wholesale replacement of one day's entry set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPatch {
    pub day: DayKey,
    pub entries: DayEntries,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionInfo>,
}

/// Wholesale replacement of one slot's entry set, interval-scoped.
/// Carries the slot's own times when the edit moved them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalPatch {
    pub entries: DayEntries,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime>,
}

// ── Auto-operations ─────────────────────────────────────────────

/// Raw server-reported side-effect adjustment:
/// `[op_kind, target, new_value, old_value, title]`, wire-encoded as a
/// JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoOp(pub String, pub String, pub Value, pub Value, pub String);

impl AutoOp {
    pub fn kind(&self) -> &str {
        &self.0
    }

    /// Target reference, e.g. `SessionSlot:5` or `Conference:1`.
    pub fn target(&self) -> &str {
        &self.1
    }

    pub fn new_value(&self) -> &Value {
        &self.2
    }

    pub fn title(&self) -> &str {
        &self.4
    }

    /// Splits the target into its type tag and bare id.
    pub fn target_parts(&self) -> (TargetKind, &str) {
        match self.1.split_once(':') {
            Some(("Session", id)) => (TargetKind::Session, id),
            Some(("SessionSlot", id)) => (TargetKind::SessionSlot, id),
            Some(("Conference", id)) => (TargetKind::Conference, id),
            Some((_, id)) => (TargetKind::Other, id),
            None => (TargetKind::Other, self.1.as_str()),
        }
    }
}

/// Type tag embedded in an auto-op target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Session,
    SessionSlot,
    Conference,
    Other,
}

/// Op kinds the warning classifier treats specially.
pub const OWNER_START_DATE_EXTENDED: &str = "OWNER_START_DATE_EXTENDED";
pub const OWNER_END_DATE_EXTENDED: &str = "OWNER_END_DATE_EXTENDED";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_round_trips_unknown_fields() {
        let raw = json!({
            "id": "c1",
            "entryType": "Contribution",
            "startDate": {"date": "2025-01-01", "time": "10:00:00"},
            "endDate": {"date": "2025-01-01", "time": "11:00:00"},
            "title": "Opening",
            "presenters": ["a", "b"],
            "room": "Aula"
        });
        let entry: Entry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.entry_type, EntryType::Contribution);
        assert_eq!(entry.extra["room"], json!("Aula"));
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn auto_op_decodes_from_array() {
        let raw = json!([
            "OWNER_END_DATE_EXTENDED",
            "SessionSlot:5",
            "18:00",
            "17:30",
            "Plenary"
        ]);
        let op: AutoOp = serde_json::from_value(raw).unwrap();
        assert_eq!(op.kind(), OWNER_END_DATE_EXTENDED);
        assert_eq!(op.target_parts(), (TargetKind::SessionSlot, "5"));
        assert_eq!(op.new_value(), &json!("18:00"));
        assert_eq!(op.title(), "Plenary");
    }

    #[test]
    fn entry_patch_tolerates_missing_optionals() {
        let raw = json!({
            "day": "20250101",
            "id": "b1",
            "entry": {
                "id": "b1",
                "entryType": "Break",
                "startDate": {"date": "2025-01-01", "time": "12:00:00"},
                "endDate": {"date": "2025-01-01", "time": "13:00:00"}
            }
        });
        let patch: EntryPatch = serde_json::from_value(raw).unwrap();
        assert!(patch.slot_entry.is_none());
        assert!(patch.auto_ops.is_empty());
        assert!(patch.session.is_none());
    }
}
