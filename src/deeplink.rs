use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Grammar shared with existing deep links: `#<day>`, `#<day>.<slotId>`,
// `#<day>.detailed`, where day is YYYYMMDD or "all". Must stay textually
// stable or old bookmarks break.
static HASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(\d{8}|all)(?:\.((?:s\d+)|detailed))?$").unwrap());

/// Which day a deep link addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayScope {
    Day(String),
    All,
}

/// Optional drill-down inside the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// Interval view scoped to one slot, id like `s12`.
    Slot(String),
    /// Detailed (expanded) day view.
    Detailed,
}

/// Parsed URL-hash address of a timetable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub day: DayScope,
    pub detail: Option<Detail>,
}

impl DeepLink {
    /// Parse a `#...` fragment. Returns `None` for anything outside the
    /// grammar, including trailing garbage.
    pub fn parse(hash: &str) -> Option<Self> {
        let caps = HASH_RE.captures(hash)?;
        let day = match &caps[1] {
            "all" => DayScope::All,
            d => DayScope::Day(d.to_string()),
        };
        let detail = caps.get(2).map(|m| match m.as_str() {
            "detailed" => Detail::Detailed,
            slot => Detail::Slot(slot.to_string()),
        });
        Some(Self { day, detail })
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.day {
            DayScope::Day(d) => write!(f, "#{d}")?,
            DayScope::All => write!(f, "#all")?,
        }
        match &self.detail {
            Some(Detail::Slot(id)) => write!(f, ".{id}"),
            Some(Detail::Detailed) => write!(f, ".detailed"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_day() {
        let link = DeepLink::parse("#20250101").unwrap();
        assert_eq!(link.day, DayScope::Day("20250101".into()));
        assert_eq!(link.detail, None);
    }

    #[test]
    fn day_with_slot() {
        let link = DeepLink::parse("#20250101.s12").unwrap();
        assert_eq!(link.detail, Some(Detail::Slot("s12".into())));
    }

    #[test]
    fn all_detailed() {
        let link = DeepLink::parse("#all.detailed").unwrap();
        assert_eq!(link.day, DayScope::All);
        assert_eq!(link.detail, Some(Detail::Detailed));
    }

    #[test]
    fn rejects_malformed() {
        for bad in [
            "#2025010",        // seven digits
            "#202501011",      // nine digits
            "20250101",        // missing '#'
            "#20250101.x1",    // unknown detail
            "#20250101.s",     // slot with no number
            "#all.s1x",        // trailing garbage
            "#20250101.detailed.s1",
        ] {
            assert!(DeepLink::parse(bad).is_none(), "accepted {bad:?}");
        }
    }

    #[test]
    fn display_round_trips() {
        for text in ["#20250101", "#20250101.s3", "#all", "#all.detailed"] {
            let link = DeepLink::parse(text).unwrap();
            assert_eq!(link.to_string(), text);
        }
    }
}
