//! Effects returned by command handlers.
//!
//! Handlers never touch a port. They describe what must happen and the
//! runtime carries it out, in order.

use chrono::NaiveDate;

use crate::domain::AppState;
use crate::ports::{DisplayMessage, DoctorOptions, Page};

/// One instruction for the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the session blob from the new state.
    PersistSession,
    /// Write the appointments blob from the new state.
    PersistAppointments,
    PersistLogo(String),
    ShowMessage(DisplayMessage),
    PopulateDoctors(DoctorOptions),
    SetMinAppointmentDate(NaiveDate),
    ResetAppointmentForm,
    Navigate(Page),
    SetLogo(String),
    EnableRestrictedFeatures,
    /// Re-project the new state onto the View.
    Render,
}

/// Result of handling a command: the next state plus what to do about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    /// State unchanged, a single message for the visitor.
    pub fn rejected(state: &AppState, message: DisplayMessage) -> Self {
        Self::new(state.clone()).with(Effect::ShowMessage(message))
    }

    pub fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn has_effect(&self, effect: &Effect) -> bool {
        self.effects.contains(effect)
    }

    /// Messages among the effects, in order.
    pub fn messages(&self) -> impl Iterator<Item = &DisplayMessage> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::ShowMessage(message) => Some(message),
            _ => None,
        })
    }
}
