use parking_lot::Mutex;

use crate::realtime::{ChannelKey, EventKind, NotificationPort};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub channel: ChannelKey,
    pub kind: EventKind,
    pub payload: String,
}

/// Port that keeps every publish in order. Nothing is delivered anywhere.
#[derive(Debug, Default)]
pub struct RecordingPort {
    channels: Mutex<Vec<ChannelKey>>,
    events: Mutex<Vec<Published>>,
}

impl RecordingPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channels(&self) -> Vec<ChannelKey> {
        self.channels.lock().clone()
    }

    pub fn events(&self) -> Vec<Published> {
        self.events.lock().clone()
    }

    pub fn events_for(&self, key: &ChannelKey) -> Vec<Published> {
        self.events
            .lock()
            .iter()
            .filter(|e| &e.channel == key)
            .cloned()
            .collect()
    }

    pub fn count(&self, key: &ChannelKey, kind: EventKind) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| &e.channel == key && e.kind == kind)
            .count()
    }

    /// Latest payload of `kind` on `key`, decoded as JSON.
    pub fn last_json(&self, key: &ChannelKey, kind: EventKind) -> Option<serde_json::Value> {
        self.events
            .lock()
            .iter()
            .rev()
            .find(|e| &e.channel == key && e.kind == kind)
            .and_then(|e| serde_json::from_str(&e.payload).ok())
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl NotificationPort for RecordingPort {
    fn create_channel(&self, key: &ChannelKey) {
        let mut channels = self.channels.lock();
        if !channels.contains(key) {
            channels.push(key.clone());
        }
    }

    fn publish(&self, key: &ChannelKey, kind: EventKind, payload: String) {
        self.events.lock().push(Published {
            channel: key.clone(),
            kind,
            payload,
        });
    }
}
