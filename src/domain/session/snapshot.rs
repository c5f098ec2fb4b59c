//! Persisted shape of the session flags.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{LoginState, Session, UserData};

/// Session flags as stored under the session key.
///
/// Every field has a default, so decoding a partial blob overlays the
/// present fields onto the defaults instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionSnapshot {
    pub is_logged_in: bool,
    pub user_data: Option<UserData>,
    pub age_verified: bool,
}

/// Stored flags that disagree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotAnomaly {
    /// `isLoggedIn` was true but no user data was stored.
    LoggedInWithoutUserData,
    /// User data was stored while `isLoggedIn` was false.
    UserDataWithoutLogin,
}

impl fmt::Display for SnapshotAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotAnomaly::LoggedInWithoutUserData => {
                write!(f, "isLoggedIn set without userData; treating visitor as logged out")
            }
            SnapshotAnomaly::UserDataWithoutLogin => {
                write!(f, "userData present while logged out; discarding it")
            }
        }
    }
}

impl SessionSnapshot {
    /// Converts the stored flags into a session.
    ///
    /// Inconsistent flags are normalized to the anonymous state and the
    /// anomaly is returned so the caller can log it.
    pub fn into_session(self) -> (Session, Option<SnapshotAnomaly>) {
        let (login, anomaly) = match (self.is_logged_in, self.user_data) {
            (true, Some(data)) => (LoginState::Authenticated(data), None),
            (true, None) => (
                LoginState::Anonymous,
                Some(SnapshotAnomaly::LoggedInWithoutUserData),
            ),
            (false, Some(_)) => (
                LoginState::Anonymous,
                Some(SnapshotAnomaly::UserDataWithoutLogin),
            ),
            (false, None) => (LoginState::Anonymous, None),
        };
        (Session::reconstitute(login, self.age_verified), anomaly)
    }
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        Self {
            is_logged_in: session.is_logged_in(),
            user_data: session.user_data().cloned(),
            age_verified: session.age_verified(),
        }
    }
}
