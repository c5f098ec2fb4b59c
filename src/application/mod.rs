//! Application layer - Commands, handlers, and the runtime.
//!
//! Handlers are pure functions from state and command to a
//! [`Transition`]. The [`ClinicApp`] runtime owns the state, executes
//! effects against the ports, and re-projects the View.

pub mod commands;
pub mod effects;
pub mod handlers;
pub mod handoff;
pub mod persistence;
pub mod projection;
pub mod runtime;

pub use commands::{Command, QuickRequestForm};
pub use effects::{Effect, Transition};
pub use handlers::{handle, HandlerContext};
pub use handoff::{doctor_options_for, AppointmentPageQuery};
pub use persistence::{DecodeError, LoadReport, APPOINTMENTS_KEY, LOGO_KEY, SESSION_KEY};
pub use projection::{project, EMPTY_LIST_PLACEHOLDER};
pub use runtime::{BootstrapReport, ClinicApp};
