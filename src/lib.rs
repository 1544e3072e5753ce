//! Timetable patch/redraw core, extracted as a standalone library.
//!
//! Holds the canonical nested day→entry tree of a conference schedule and
//! applies server-confirmed mutations: single-entry patches that may move
//! an entry into or out of a session slot, wholesale day or slot
//! replacements, and the auto-operation notices the server attaches when
//! an edit cascades (e.g. a slot edit extending its parent's end time).
//! Rendering is an injected async collaborator; every mutation resolves
//! only after the redraw finished, so callers can sequence follow-up UI
//! strictly after the visual state matches the data.
//!
//! Also ships the insertion-ordered selection queue used to re-sequence
//! picked items before bulk insertion, and the URL-hash deep-link grammar
//! for day/interval addressing.

pub mod deeplink;
pub mod model;
pub mod queue;
pub mod render;
pub mod table;

pub use deeplink::{DayScope, DeepLink, Detail};
pub use queue::OrderedQueue;
pub use render::{RedrawEvent, RedrawHub, Renderer};
pub use table::{IntervalView, TableError, TimeTable};
