//! Simulated login, logout, password recovery, and logo changes.

use crate::application::effects::{Effect, Transition};
use crate::domain::foundation::ValidationError;
use crate::domain::AppState;
use crate::ports::{DisplayMessage, Page};

/// Logs the visitor in with any non-empty credentials.
///
/// # Errors
///
/// - `MissingField` if email or password is empty
pub fn login(state: &AppState, email: &str, password: &str) -> Result<Transition, ValidationError> {
    let mut next = state.clone();
    let user = next.session.login(email, password)?;
    tracing::info!(email = %user.email, "Visitor logged in");

    Ok(Transition::new(next)
        .with(Effect::PersistSession)
        .with(Effect::Render)
        .with(Effect::ShowMessage(DisplayMessage::LoggedIn { email: user.email }))
        .with(Effect::Navigate(Page::Appointments)))
}

pub fn logout(state: &AppState) -> Transition {
    let mut next = state.clone();
    if !next.session.logout() {
        tracing::debug!("Logout requested while already logged out");
    }

    Transition::new(next)
        .with(Effect::PersistSession)
        .with(Effect::Render)
        .with(Effect::ShowMessage(DisplayMessage::LoggedOut))
        .with(Effect::Navigate(Page::Home))
}

/// Acknowledges a recovery request. An empty email means the prompt was
/// dismissed and nothing happens.
pub fn request_password_recovery(state: &AppState, email: &str) -> Transition {
    let email = email.trim();
    let transition = Transition::new(state.clone());
    if email.is_empty() {
        return transition;
    }
    transition.with(Effect::ShowMessage(DisplayMessage::PasswordRecoverySent {
        email: email.to_string(),
    }))
}

/// Replaces the site logo. An empty URL is ignored.
pub fn change_logo(state: &AppState, url: &str) -> Transition {
    let url = url.trim();
    let transition = Transition::new(state.clone());
    if url.is_empty() {
        return transition;
    }
    transition
        .with(Effect::PersistLogo(url.to_string()))
        .with(Effect::SetLogo(url.to_string()))
}
