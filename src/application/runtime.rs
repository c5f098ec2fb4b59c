//! Runtime that owns the application state and drives the ports.

use std::sync::Arc;

use super::commands::Command;
use super::effects::{Effect, Transition};
use super::handlers::{self, age_verification, appointment, HandlerContext};
use super::persistence::{self, DecodeError, LoadReport};
use super::projection::project;
use crate::adapters::clock::SystemClock;
use crate::adapters::features::LoggingRestrictedFeatures;
use crate::adapters::storage::store_from_config;
use crate::config::AppConfig;
use crate::domain::age::AgeVerdict;
use crate::domain::appointment::{list_doctors, Appointment, AppointmentError, AppointmentRequest};
use crate::domain::foundation::{AppointmentId, ValidationError};
use crate::domain::session::SnapshotAnomaly;
use crate::domain::AppState;
use crate::ports::{Clock, KeyValueStore, RestrictedFeatures, View};

/// Problems found in storage while bootstrapping. None of them stop the app.
#[derive(Debug, Default)]
pub struct BootstrapReport {
    pub decode_errors: Vec<DecodeError>,
    pub anomalies: Vec<SnapshotAnomaly>,
}

impl BootstrapReport {
    pub fn is_clean(&self) -> bool {
        self.decode_errors.is_empty() && self.anomalies.is_empty()
    }
}

/// The clinic core for one page load.
///
/// Owns the single [`AppState`]. Commands run one at a time to
/// completion; each one's effects are executed in order before the next
/// command is accepted.
pub struct ClinicApp {
    state: AppState,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    view: Arc<dyn View>,
    features: Arc<dyn RestrictedFeatures>,
}

impl ClinicApp {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        view: Arc<dyn View>,
        features: Arc<dyn RestrictedFeatures>,
    ) -> Self {
        Self {
            state: AppState::new(),
            store,
            clock,
            view,
            features,
        }
    }

    /// Wires the configured store, the system clock, and the logging
    /// restricted-features hook around `view`.
    pub fn from_config(config: &AppConfig, view: Arc<dyn View>) -> Self {
        Self::new(
            store_from_config(&config.storage),
            Arc::new(SystemClock),
            view,
            Arc::new(LoggingRestrictedFeatures::new()),
        )
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Loads persisted state, applies the saved logo, and renders.
    pub fn bootstrap(&mut self) -> BootstrapReport {
        let LoadReport {
            state,
            errors,
            anomalies,
        } = persistence::load(self.store.as_ref());
        self.state = state;

        if let Some(logo) = persistence::load_logo(self.store.as_ref()) {
            self.view.set_logo(&logo);
        }
        self.view.render(&project(&self.state));

        if !errors.is_empty() {
            tracing::warn!(count = errors.len(), "Started with unreadable stored data");
        }
        BootstrapReport {
            decode_errors: errors,
            anomalies,
        }
    }

    /// Processes one command from the page.
    pub fn dispatch(&mut self, command: Command) {
        let span = tracing::debug_span!("command", name = command.name());
        let _enter = span.enter();

        let ctx = self.context();
        let transition = handlers::handle(&self.state, command, &ctx);
        self.apply(transition);
    }

    /// Creates an appointment, with the same effects as a form submission.
    ///
    /// # Errors
    ///
    /// - `AppointmentError::Validation` from request validation; nothing changes
    pub fn create_appointment(
        &mut self,
        request: AppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let ctx = self.context();
        let (transition, created) = appointment::create(&self.state, request, &ctx)?;
        self.apply(transition);
        Ok(created)
    }

    /// Cancels an appointment without asking for confirmation.
    ///
    /// # Errors
    ///
    /// - `AppointmentError::NotFound` if no appointment has that id; nothing changes
    pub fn cancel_appointment(&mut self, id: AppointmentId) -> Result<(), AppointmentError> {
        let transition = appointment::cancel(&self.state, id)?;
        self.apply(transition);
        Ok(())
    }

    /// Runs the age gate for a `YYYY-MM-DD` birthdate.
    ///
    /// # Errors
    ///
    /// - `MissingField` / `InvalidFormat` if the birthdate cannot be parsed
    pub fn verify_age(&mut self, birthdate: &str) -> Result<AgeVerdict, ValidationError> {
        let ctx = self.context();
        let (transition, verdict) = age_verification::verify(&self.state, birthdate, &ctx)?;
        self.apply(transition);
        Ok(verdict)
    }

    pub fn list_doctors(&self, specialty: &str) -> Vec<String> {
        list_doctors(specialty)
    }

    fn context(&self) -> HandlerContext {
        HandlerContext::from_clock(self.clock.as_ref())
    }

    /// Adopts the new state and executes its effects in order. A requested
    /// render happens once, after every other effect.
    fn apply(&mut self, transition: Transition) {
        let Transition { state, effects } = transition;
        self.state = state;

        let mut render = false;
        for effect in effects {
            match effect {
                Effect::PersistSession => {
                    if let Err(e) = persistence::save_session(self.store.as_ref(), &self.state.session) {
                        tracing::error!(error = %e, "Failed to persist session");
                    }
                }
                Effect::PersistAppointments => {
                    if let Err(e) =
                        persistence::save_appointments(self.store.as_ref(), &self.state.appointments)
                    {
                        tracing::error!(error = %e, "Failed to persist appointments");
                    }
                }
                Effect::PersistLogo(url) => {
                    if let Err(e) = persistence::save_logo(self.store.as_ref(), &url) {
                        tracing::error!(error = %e, "Failed to persist logo");
                    }
                }
                Effect::ShowMessage(message) => self.view.show_message(&message),
                Effect::PopulateDoctors(options) => self.view.populate_doctors(&options),
                Effect::SetMinAppointmentDate(date) => self.view.set_min_appointment_date(date),
                Effect::ResetAppointmentForm => self.view.reset_appointment_form(),
                Effect::Navigate(page) => self.view.navigate(page),
                Effect::SetLogo(url) => self.view.set_logo(&url),
                Effect::EnableRestrictedFeatures => self.features.enable(),
                Effect::Render => render = true,
            }
        }

        if render {
            self.view.render(&project(&self.state));
        }
    }
}
