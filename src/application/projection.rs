//! Projection of application state onto the View.

use chrono::NaiveDate;

use crate::domain::appointment::Appointment;
use crate::domain::AppState;
use crate::ports::{AppointmentListView, AppointmentRow, Projection, RegionTag, RegionVisibility};

/// Shown in place of the table when there are no appointments.
pub const EMPTY_LIST_PLACEHOLDER: &str = "No appointments requested";

const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Visibility of every tagged region plus the full appointment list.
pub fn project(state: &AppState) -> Projection {
    let logged_in = state.session.is_logged_in();
    let age_verified = state.session.age_verified();

    let regions = RegionTag::all()
        .iter()
        .map(|&tag| RegionVisibility {
            tag,
            visible: match tag {
                RegionTag::LoggedIn => logged_in,
                RegionTag::LoggedOut => !logged_in,
                RegionTag::AgeRestricted => age_verified,
                RegionTag::AgeVerification => !age_verified,
            },
        })
        .collect();

    let appointments = if state.appointments.is_empty() {
        AppointmentListView::Empty {
            placeholder: EMPTY_LIST_PLACEHOLDER,
        }
    } else {
        AppointmentListView::Rows(state.appointments.iter().map(row).collect())
    };

    Projection {
        regions,
        appointments,
    }
}

fn row(appointment: &Appointment) -> AppointmentRow {
    AppointmentRow {
        id: appointment.id(),
        date: format_short_date(appointment.date()),
        time: appointment.time().to_string(),
        doctor: appointment.doctor().to_string(),
        status: appointment.status().to_string(),
    }
}

/// `2026-11-02` becomes `2/11/2026`. Unparseable dates are shown as stored.
pub fn format_short_date(raw: &str) -> String {
    format_date(raw, "%-d/%-m/%Y")
}

/// `2026-11-02` becomes `Monday, November 2, 2026`. Unparseable dates are
/// shown as stored.
pub fn format_long_date(raw: &str) -> String {
    format_date(raw, "%A, %B %-d, %Y")
}

fn format_date(raw: &str, format: &str) -> String {
    match NaiveDate::parse_from_str(raw, STORED_DATE_FORMAT) {
        Ok(date) => date.format(format).to_string(),
        Err(_) => raw.to_string(),
    }
}
