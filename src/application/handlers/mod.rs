//! Command handlers.
//!
//! Handlers are pure: they take the current state and a command and
//! return a [`Transition`]. Each handler module exposes fallible
//! operations; [`handle`] recovers their errors into a message for the
//! visitor and leaves the state untouched.

pub mod age_verification;
pub mod appointment;
pub mod session;

use chrono::NaiveDate;

use super::commands::Command;
use super::effects::Transition;
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::AppState;
use crate::ports::{Clock, DisplayMessage};

/// Time inputs for a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerContext {
    /// Used for appointment ids and `createdAt`.
    pub now: Timestamp,
    /// Visitor's calendar date, used by the age gate and the date picker.
    pub today: NaiveDate,
}

impl HandlerContext {
    pub fn new(now: Timestamp, today: NaiveDate) -> Self {
        Self { now, today }
    }

    /// Reads both values from a clock.
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self {
            now: clock.now(),
            today: clock.today(),
        }
    }
}

/// Processes one command against `state`.
pub fn handle(state: &AppState, command: Command, ctx: &HandlerContext) -> Transition {
    match command {
        Command::LoginSubmitted { email, password } => {
            session::login(state, &email, &password).unwrap_or_else(|e| reject(state, &e))
        }
        Command::LogoutRequested => session::logout(state),
        Command::PasswordRecoveryRequested { email } => session::request_password_recovery(state, &email),
        Command::LogoChanged { url } => session::change_logo(state, &url),
        Command::AgeFormSubmitted { birthdate } => age_verification::verify(state, &birthdate, ctx)
            .map(|(transition, _)| transition)
            .unwrap_or_else(|e| reject(state, &e)),
        Command::AppointmentPageEntered { query } => appointment::enter_page(state, &query, ctx),
        Command::SpecialtyChanged { specialty } => appointment::change_specialty(state, &specialty),
        Command::AppointmentSubmitted(request) => appointment::create(state, request, ctx)
            .map(|(transition, _)| transition)
            .unwrap_or_else(|e| reject(state, &e)),
        Command::CancelRequested { id } => appointment::cancel(state, id).unwrap_or_else(|e| {
            tracing::debug!(%e, "Cancel rejected");
            Transition::rejected(state, DisplayMessage::AppointmentNotFound { id: e.id })
        }),
        Command::QuickRequestSubmitted(form) => {
            appointment::submit_quick_request(state, &form).unwrap_or_else(|e| reject(state, &e))
        }
    }
}

fn reject(state: &AppState, err: &ValidationError) -> Transition {
    tracing::debug!(field = err.field(), code = %err.code(), "Form rejected");
    Transition::rejected(state, DisplayMessage::from_validation(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::effects::Effect;
    use crate::domain::appointment::AppointmentRequest;
    use crate::domain::foundation::AppointmentId;

    fn ctx() -> HandlerContext {
        HandlerContext::new(
            Timestamp::from_unix_millis(1_792_060_200_123).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
        )
    }

    #[test]
    fn validation_errors_become_messages() {
        let state = AppState::new();
        let transition = handle(
            &state,
            Command::AppointmentSubmitted(AppointmentRequest::default()),
            &ctx(),
        );

        assert_eq!(transition.state, state);
        assert_eq!(
            transition.effects,
            vec![Effect::ShowMessage(DisplayMessage::IncompleteForm)]
        );
    }

    #[test]
    fn unknown_cancel_becomes_not_found_message() {
        let state = AppState::new();
        let id = AppointmentId::from_raw(99);
        let transition = handle(&state, Command::CancelRequested { id }, &ctx());

        assert_eq!(transition.state, state);
        assert_eq!(
            transition.effects,
            vec![Effect::ShowMessage(DisplayMessage::AppointmentNotFound { id })]
        );
    }

    #[test]
    fn malformed_birthdate_is_rejected_without_persisting() {
        let state = AppState::new();
        let transition = handle(
            &state,
            Command::AgeFormSubmitted {
                birthdate: "15/10/2000".to_string(),
            },
            &ctx(),
        );

        assert_eq!(transition.state, state);
        assert!(!transition.has_effect(&Effect::PersistSession));
        assert!(matches!(
            transition.messages().next(),
            Some(DisplayMessage::InvalidField { .. })
        ));
    }
}
