//! Loading and saving application state through the key-value store.
//!
//! Session flags and appointments live under independent keys and are
//! decoded independently: a corrupt session blob never costs the visitor
//! their appointments, and vice versa.

use thiserror::Error;

use crate::domain::appointment::{Appointment, AppointmentBook};
use crate::domain::foundation::ErrorCode;
use crate::domain::session::{Session, SessionSnapshot, SnapshotAnomaly};
use crate::domain::AppState;
use crate::ports::{KeyValueStore, StoreError};

/// Key of the session blob.
pub const SESSION_KEY: &str = "capsAppState";

/// Key of the appointments blob.
pub const APPOINTMENTS_KEY: &str = "capsAppointments";

/// Key of the logo URL.
pub const LOGO_KEY: &str = "capsLogo";

/// Stored data that was present but could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The blob as a whole is unreadable and was treated as absent.
    #[error("Failed to decode blob '{key}': {source}")]
    Blob {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// One entry of a list blob is unreadable and was skipped.
    #[error("Failed to decode record {index} of blob '{key}': {source}")]
    Record {
        key: &'static str,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub fn key(&self) -> &'static str {
        match self {
            DecodeError::Blob { key, .. } | DecodeError::Record { key, .. } => key,
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::DecodeFailed
    }
}

/// Outcome of [`load`].
///
/// Loading never fails. Blobs that could not be decoded are treated as
/// absent, unreadable appointment records are skipped, and both are
/// reported here.
#[derive(Debug)]
pub struct LoadReport {
    pub state: AppState,
    pub errors: Vec<DecodeError>,
    pub anomalies: Vec<SnapshotAnomaly>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.anomalies.is_empty()
    }
}

/// Rebuilds the application state from the store.
pub fn load(store: &dyn KeyValueStore) -> LoadReport {
    let mut errors = Vec::new();
    let mut anomalies = Vec::new();

    let session = match decode::<SessionSnapshot>(store, SESSION_KEY) {
        Ok(Some(snapshot)) => {
            let (session, anomaly) = snapshot.into_session();
            if let Some(anomaly) = anomaly {
                tracing::warn!(key = SESSION_KEY, %anomaly, "Normalized inconsistent session blob");
                anomalies.push(anomaly);
            }
            session
        }
        Ok(None) => Session::new(),
        Err(err) => {
            errors.push(err);
            Session::new()
        }
    };

    let appointments = match decode::<Vec<serde_json::Value>>(store, APPOINTMENTS_KEY) {
        Ok(Some(records)) => decode_appointments(records, &mut errors),
        Ok(None) => AppointmentBook::new(),
        Err(err) => {
            errors.push(err);
            AppointmentBook::new()
        }
    };

    tracing::debug!(
        logged_in = session.is_logged_in(),
        age_verified = session.age_verified(),
        appointments = appointments.len(),
        decode_errors = errors.len(),
        "Loaded application state"
    );

    LoadReport {
        state: AppState::from_parts(session, appointments),
        errors,
        anomalies,
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &'static str,
) -> Result<Option<T>, DecodeError> {
    let Some(raw) = store.read(key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some).map_err(|source| {
        tracing::warn!(key, error = %source, "Stored blob is corrupt; ignoring it");
        DecodeError::Blob { key, source }
    })
}

/// Decodes each stored appointment on its own so one bad record does not
/// cost the visitor the rest of the list.
fn decode_appointments(
    records: Vec<serde_json::Value>,
    errors: &mut Vec<DecodeError>,
) -> AppointmentBook {
    let appointments = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Appointment>(record) {
            Ok(appointment) => Some(appointment),
            Err(source) => {
                tracing::warn!(
                    key = APPOINTMENTS_KEY,
                    index,
                    error = %source,
                    "Skipping unreadable stored appointment"
                );
                errors.push(DecodeError::Record {
                    key: APPOINTMENTS_KEY,
                    index,
                    source,
                });
                None
            }
        })
        .collect();
    AppointmentBook::from_appointments(appointments)
}

/// Writes the three session fields. Appointments are not included.
pub fn save_session(store: &dyn KeyValueStore, session: &Session) -> Result<(), StoreError> {
    let snapshot = SessionSnapshot::from(session);
    write_json(store, SESSION_KEY, &snapshot)
}

/// Writes the full appointment sequence.
pub fn save_appointments(
    store: &dyn KeyValueStore,
    appointments: &AppointmentBook,
) -> Result<(), StoreError> {
    write_json(store, APPOINTMENTS_KEY, appointments)
}

/// Saved logo URL, if any. Stored as a raw string, not JSON.
pub fn load_logo(store: &dyn KeyValueStore) -> Option<String> {
    store.read(LOGO_KEY).filter(|url| !url.trim().is_empty())
}

pub fn save_logo(store: &dyn KeyValueStore, url: &str) -> Result<(), StoreError> {
    store.write(LOGO_KEY, url)
}

fn write_json<T: serde::Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(value).map_err(|e| StoreError::WriteFailed {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.write(key, &json)
}
