use crate::model::DayKey;

#[derive(Debug, PartialEq, Eq)]
pub enum TableError {
    DayNotFound(DayKey),
    EntryNotFound { day: DayKey, id: String },
    SlotNotFound { day: DayKey, id: String },
    NotASlot { day: DayKey, id: String },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::DayNotFound(day) => write!(f, "day not found: {day}"),
            TableError::EntryNotFound { day, id } => {
                write!(f, "entry not found on day {day}: {id}")
            }
            TableError::SlotNotFound { day, id } => {
                write!(f, "slot not found on day {day}: {id}")
            }
            TableError::NotASlot { day, id } => {
                write!(f, "entry {id} on day {day} does not nest entries")
            }
        }
    }
}

impl std::error::Error for TableError {}
