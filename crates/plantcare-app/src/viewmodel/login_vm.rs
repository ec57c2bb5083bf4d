//! Login ViewModel

use std::sync::Arc;

use plantcare_core::{AuthService, LoginForm, RecordStore};
use tokio::sync::mpsc;
use tracing::error;

use crate::events::AppEvent;
use crate::navigation::{Navigation, Screen};

pub struct LoginViewModel<S: RecordStore> {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub is_loading: bool,
    pub show_password: bool,
    auth: Arc<AuthService<S>>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl<S: RecordStore> LoginViewModel<S> {
    pub fn new(auth: Arc<AuthService<S>>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            email: String::with_capacity(100),
            password: String::with_capacity(100),
            error: None,
            is_loading: false,
            show_password: false,
            auth,
            event_tx,
        }
    }

    /// Run the login flow. Returns `true` once the user is signed in.
    pub async fn submit(&mut self) -> bool {
        if self.is_loading {
            return false;
        }

        self.error = None;
        self.is_loading = true;

        let form = LoginForm::new(self.email.clone(), self.password.clone());
        let outcome = self.auth.login(&form).await;
        self.is_loading = false;

        match outcome {
            Ok(_) => {
                self.password.clear();
                let _ = self.event_tx.send(AppEvent::Navigate(Navigation::ReplaceWithHome));
                true
            }
            Err(e) => {
                if !e.is_user_facing() {
                    error!("Login flow failed: {}", e);
                }
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn go_to_register(&self) {
        let _ = self
            .event_tx
            .send(AppEvent::Navigate(Navigation::NavigateTo(Screen::Register)));
    }
}
