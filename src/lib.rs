//! CAPS Clinic - Core of the CAPS clinic web site
//!
//! Simulated login, an age gate, and appointment requests persisted to an
//! origin-scoped key-value store. The page itself sits behind the
//! [`ports::View`] port; everything else lives here.
//!
//! ```no_run
//! use std::sync::Arc;
//! use caps_clinic::adapters::view::RecordingView;
//! use caps_clinic::application::{ClinicApp, Command};
//! use caps_clinic::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration");
//! caps_clinic::telemetry::init_tracing(&config.logging).expect("tracing");
//!
//! let mut app = ClinicApp::from_config(&config, Arc::new(RecordingView::new()));
//! app.bootstrap();
//! app.dispatch(Command::AgeFormSubmitted { birthdate: "1990-05-20".to_string() });
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
