//! Root Application
//!
//! Wires configuration, telemetry, the record store, and both screens'
//! view-models around one event channel.

use std::sync::Arc;

use anyhow::Context;
use plantcare_core::AuthService;
use plantcare_shared::{telemetry::init_telemetry, AppConfig};
use plantcare_storage::LocalStore;
use tokio::sync::mpsc;
use tracing::info;

use crate::events::AppEvent;
use crate::navigation::{Router, Screen};
use crate::session::ChannelSessionSignal;
use crate::viewmodel::{LoginViewModel, RegisterViewModel};

pub struct App {
    pub router: Router,
    /// Email carried by the last session signal
    pub session_email: Option<String>,
    /// Set when a registration just succeeded; the UI clears it after showing it
    pub registration_notice: bool,
    pub login_vm: LoginViewModel<LocalStore>,
    pub register_vm: RegisterViewModel<LocalStore>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    /// Load config, install logging, and open the configured store.
    pub fn bootstrap() -> anyhow::Result<Self> {
        let config = AppConfig::load().context("Failed to load configuration")?;
        init_telemetry(&config.log)?;
        info!("Starting {} ({})", config.app.name, config.app.env);
        Ok(Self::new(LocalStore::from_settings(&config.storage)))
    }

    pub fn new(store: LocalStore) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let session = Arc::new(ChannelSessionSignal::new(event_tx.clone()));
        let auth = Arc::new(AuthService::new(Arc::new(store), session));

        Self {
            router: Router::new(Screen::Login),
            session_email: None,
            registration_notice: false,
            login_vm: LoginViewModel::new(Arc::clone(&auth), event_tx.clone()),
            register_vm: RegisterViewModel::new(auth, event_tx),
            event_rx,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.router.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_email.is_some()
    }

    /// Apply every pending event. Returns how many were handled.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::LoginSuccess(email) => {
                    info!("Session started");
                    self.session_email = Some(email);
                }
                AppEvent::RegisterSuccess => {
                    self.registration_notice = true;
                }
                AppEvent::Navigate(navigation) => {
                    self.router.apply(navigation);
                }
            }
            handled += 1;
        }
        handled
    }
}
