use std::collections::HashMap;

use actix::Recipient;
use dashmap::DashMap;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::realtime::{ChannelEvent, ChannelKey, EventKind, NotificationPort};

#[derive(Default)]
struct Channel {
    subscribers: HashMap<Uuid, Recipient<ChannelEvent>>,
    last_header: Option<ChannelEvent>,
    last_hand: Option<ChannelEvent>,
}

impl Channel {
    fn remember(&mut self, event: &ChannelEvent) {
        match event.kind {
            EventKind::Header => self.last_header = Some(event.clone()),
            EventKind::Hand => self.last_hand = Some(event.clone()),
        }
    }

    fn replay(&self) -> impl Iterator<Item = &ChannelEvent> {
        self.last_header.iter().chain(self.last_hand.iter())
    }
}

/// In-process notification port backing the websocket sessions.
///
/// Channels remember the latest event of each kind, and a session that
/// subscribes late is replayed those first so it never starts from a stale
/// screen. Delivery goes through each session's actor mailbox, which keeps
/// per-subscriber order identical to publish order.
#[derive(Default)]
pub struct ChannelHub {
    channels: DashMap<ChannelKey, Channel>,
}

impl ChannelHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, key: &ChannelKey, recipient: Recipient<ChannelEvent>) -> Uuid {
        let token = Uuid::new_v4();
        let mut channel = self.channels.entry(key.clone()).or_default();
        for event in channel.replay() {
            recipient.do_send(event.clone());
        }
        channel.subscribers.insert(token, recipient);
        debug!(channel = %key, %token, "Subscriber attached");
        token
    }

    pub fn unsubscribe(&self, key: &ChannelKey, token: Uuid) {
        if let Some(mut channel) = self.channels.get_mut(key) {
            channel.subscribers.remove(&token);
            debug!(channel = %key, %token, "Subscriber detached");
        }
    }

    /// Channels opened so far, one per seated player.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn subscriber_count(&self, key: &ChannelKey) -> usize {
        self.channels
            .get(key)
            .map(|channel| channel.subscribers.len())
            .unwrap_or(0)
    }
}

impl NotificationPort for ChannelHub {
    fn create_channel(&self, key: &ChannelKey) {
        self.channels.entry(key.clone()).or_default();
    }

    fn publish(&self, key: &ChannelKey, kind: EventKind, payload: String) {
        let event = ChannelEvent {
            kind,
            payload: payload.into(),
        };
        let mut channel = self.channels.entry(key.clone()).or_default();
        channel.remember(&event);

        let before = channel.subscribers.len();
        channel.subscribers.retain(|_, recipient| recipient.connected());
        if channel.subscribers.len() < before {
            warn!(
                channel = %key,
                dropped = before - channel.subscribers.len(),
                "Dropped disconnected subscribers"
            );
        }
        for recipient in channel.subscribers.values() {
            recipient.do_send(event.clone());
        }
    }
}
