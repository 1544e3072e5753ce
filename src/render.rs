use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::broadcast;

use crate::model::DayKey;

const CHANNEL_CAPACITY: usize = 64;

/// Opaque rendering collaborator. The table never inspects what a
/// renderer produces; it only awaits completion so callers can sequence
/// follow-up actions (close dialog, scroll to entry) strictly after the
/// visual state matches the data.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn draw_day(&self, day: &str);
    async fn draw_all_days(&self);
}

/// What finished redrawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedrawEvent {
    Day(DayKey),
    AllDays,
}

/// Broadcast hub for redraw-completion notifications, per day plus an
/// any-day channel. Replaces one-shot listeners on a global event name
/// with explicit subscriptions.
pub struct RedrawHub {
    channels: DashMap<DayKey, broadcast::Sender<RedrawEvent>>,
    any: broadcast::Sender<RedrawEvent>,
}

impl RedrawHub {
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
            any: broadcast::channel(CHANNEL_CAPACITY).0,
        }
    }

    /// Subscribe to completions for one day. Creates the channel if needed.
    pub fn subscribe(&self, day: &str) -> broadcast::Receiver<RedrawEvent> {
        let sender = self
            .channels
            .entry(day.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        sender.subscribe()
    }

    /// Subscribe to every completion regardless of day.
    pub fn subscribe_all(&self) -> broadcast::Receiver<RedrawEvent> {
        self.any.subscribe()
    }

    /// Publish a completion. No-op if nobody is listening.
    pub fn send(&self, event: RedrawEvent) {
        if let RedrawEvent::Day(day) = &event
            && let Some(sender) = self.channels.get(day)
        {
            let _ = sender.send(event.clone());
        }
        let _ = self.any.send(event);
    }

    /// Drop a day's channel (e.g. when the day leaves the timetable).
    pub fn remove(&self, day: &str) {
        self.channels.remove(day);
    }
}

impl Default for RedrawHub {
    fn default() -> Self {
        Self::new()
    }
}
