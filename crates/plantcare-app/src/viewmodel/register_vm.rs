//! Register ViewModel

use std::sync::Arc;

use plantcare_core::{AuthService, RecordStore, RegistrationForm};
use tokio::sync::mpsc;
use tracing::error;

use crate::events::AppEvent;
use crate::navigation::{Navigation, Screen};

pub struct RegisterViewModel<S: RecordStore> {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub error: Option<String>,
    pub is_loading: bool,
    pub show_password: bool,
    pub show_confirm_password: bool,
    auth: Arc<AuthService<S>>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl<S: RecordStore> RegisterViewModel<S> {
    pub fn new(auth: Arc<AuthService<S>>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            error: None,
            is_loading: false,
            show_password: false,
            show_confirm_password: false,
            auth,
            event_tx,
        }
    }

    fn form(&self) -> RegistrationForm {
        RegistrationForm::new(
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.password.clone(),
            self.confirm_password.clone(),
        )
    }

    /// Run the registration flow. On success the form is cleared and the UI
    /// is sent back to the login screen.
    pub async fn submit(&mut self) -> bool {
        if self.is_loading {
            return false;
        }

        self.error = None;
        self.is_loading = true;

        let outcome = self.auth.register(&self.form()).await;
        self.is_loading = false;

        match outcome {
            Ok(_) => {
                self.password.clear();
                self.confirm_password.clear();
                let _ = self.event_tx.send(AppEvent::RegisterSuccess);
                let _ = self
                    .event_tx
                    .send(AppEvent::Navigate(Navigation::NavigateTo(Screen::Login)));
                true
            }
            Err(e) => {
                if !e.is_user_facing() {
                    error!("Registration flow failed: {}", e);
                }
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_confirm_password_visibility(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }

    pub fn go_to_login(&self) {
        let _ = self
            .event_tx
            .send(AppEvent::Navigate(Navigation::NavigateTo(Screen::Login)));
    }
}
