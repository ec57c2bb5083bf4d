//! Session signal backed by the app event channel.

use plantcare_core::SessionSignal;
use tokio::sync::mpsc;
use tracing::warn;

use crate::events::AppEvent;

pub struct ChannelSessionSignal {
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl ChannelSessionSignal {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { event_tx }
    }
}

impl SessionSignal for ChannelSessionSignal {
    fn authenticated(&self, email: &str) {
        if self.event_tx.send(AppEvent::LoginSuccess(email.to_string())).is_err() {
            warn!("Session signal dropped: event receiver closed");
        }
    }
}
