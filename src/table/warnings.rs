use std::collections::HashMap;

use serde_json::Value;

use crate::model::{
    AutoOp, DayEntries, DayKey, Entry, EventInfo, TargetKind, OWNER_END_DATE_EXTENDED,
    OWNER_START_DATE_EXTENDED,
};

/// Turn raw auto-ops into the rendered, de-duplicated notice list.
///
/// Session-typed start/end extensions are always dropped: a session's own
/// time is derivative of its slots, so surfacing it would mislead. For
/// conference and slot targets the notice only appears when the reported
/// value actually differs from what the tree currently records.
pub(super) fn extract(
    data: &HashMap<DayKey, DayEntries>,
    event_info: &EventInfo,
    auto_ops: &[AutoOp],
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for op in auto_ops {
        let Some(rendered) = classify(data, event_info, op) else {
            tracing::debug!("auto-op suppressed: {} {}", op.kind(), op.target());
            continue;
        };
        if !out.contains(&rendered) {
            out.push(rendered);
        }
    }
    out
}

fn classify(
    data: &HashMap<DayKey, DayEntries>,
    event_info: &EventInfo,
    op: &AutoOp,
) -> Option<String> {
    let extends_start = op.kind() == OWNER_START_DATE_EXTENDED;
    let extends_end = op.kind() == OWNER_END_DATE_EXTENDED;
    if !extends_start && !extends_end {
        // Unclassified adjustment: surface verbatim, nothing to compare
        return Some(format!(
            "'{}' was adjusted ({}: {})",
            op.title(),
            op.kind(),
            render_value(op.new_value())
        ));
    }

    let (target_kind, target_id) = op.target_parts();
    let recorded = match target_kind {
        // Derivative of its slots; never shown
        TargetKind::Session => return None,
        TargetKind::Conference => {
            let dt = if extends_start {
                event_info.start_date.as_ref()
            } else {
                event_info.end_date.as_ref()
            };
            dt.map(|dt| dt.time.clone())
        }
        TargetKind::SessionSlot => find_entry(data, target_id)
            .map(|e| {
                if extends_start {
                    e.start_date.time.clone()
                } else {
                    e.end_date.time.clone()
                }
            }),
        TargetKind::Other => None,
    };

    // A no-op adjustment reported by the server is noise, not news
    let new_value = render_value(op.new_value());
    if recorded.as_deref() == Some(new_value.as_str()) {
        return None;
    }

    let what = if extends_start { "start" } else { "end" };
    let noun = match target_kind {
        TargetKind::Conference => "the event",
        TargetKind::SessionSlot => "session slot",
        _ => "entry",
    };
    Some(format!(
        "The {what} time of {noun} '{}' was moved to {new_value}",
        op.title()
    ))
}

/// Locate a slot entry by bare auto-op id. Slot entries are keyed `s<id>`
/// at the top level of each day; fall back to the raw id for payloads
/// that already carry the prefix.
fn find_entry<'a>(data: &'a HashMap<DayKey, DayEntries>, id: &str) -> Option<&'a Entry> {
    let keyed = format!("s{id}");
    for day in data.values() {
        if let Some(entry) = day.get(&keyed).or_else(|| day.get(id)) {
            return Some(entry);
        }
        for slot in day.values() {
            if let Some(nested) = slot
                .entries
                .as_ref()
                .and_then(|m| m.get(&keyed).or_else(|| m.get(id)))
            {
                return Some(nested);
            }
        }
    }
    None
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
