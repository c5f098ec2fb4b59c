//! View port - Boundary to the page that renders state.
//!
//! The core never touches markup. It hands the View a projection of the
//! state plus discrete instructions (messages, doctor options, navigation),
//! and the View turns them into DOM changes.

use chrono::NaiveDate;

use super::DisplayMessage;
use crate::domain::appointment::Specialty;
use crate::domain::foundation::AppointmentId;

/// Page-region tags whose visibility follows the session flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionTag {
    LoggedIn,
    LoggedOut,
    AgeRestricted,
    AgeVerification,
}

impl RegionTag {
    pub fn all() -> &'static [RegionTag] {
        &[
            RegionTag::LoggedIn,
            RegionTag::LoggedOut,
            RegionTag::AgeRestricted,
            RegionTag::AgeVerification,
        ]
    }

    /// Tag value as written in the page markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionTag::LoggedIn => "logged-in",
            RegionTag::LoggedOut => "logged-out",
            RegionTag::AgeRestricted => "age-restricted",
            RegionTag::AgeVerification => "age-verification",
        }
    }
}

/// Whether regions carrying `tag` are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionVisibility {
    pub tag: RegionTag,
    pub visible: bool,
}

/// One row of the appointment table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRow {
    /// Target of the row's cancel button.
    pub id: AppointmentId,
    /// Short display date (`d/m/yyyy`).
    pub date: String,
    pub time: String,
    pub doctor: String,
    /// Badge text.
    pub status: String,
}

/// Rendering of the appointment list. Always a full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentListView {
    Empty { placeholder: &'static str },
    Rows(Vec<AppointmentRow>),
}

/// Everything the View needs to redraw after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub regions: Vec<RegionVisibility>,
    pub appointments: AppointmentListView,
}

impl Projection {
    /// Visibility for a tag; tags not in the projection are hidden.
    pub fn is_visible(&self, tag: RegionTag) -> bool {
        self.regions
            .iter()
            .find(|r| r.tag == tag)
            .map(|r| r.visible)
            .unwrap_or(false)
    }

    pub fn rows(&self) -> &[AppointmentRow] {
        match &self.appointments {
            AppointmentListView::Rows(rows) => rows,
            AppointmentListView::Empty { .. } => &[],
        }
    }
}

/// Doctor select contents, applied as one step.
///
/// Options are always replaced before the selection is applied, so a
/// pre-selected doctor can never refer to an option that does not exist
/// yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorOptions {
    pub specialty: Option<Specialty>,
    pub options: Vec<String>,
    pub selected: Option<String>,
}

/// Pages the core can send the visitor to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Appointments,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Appointments => "turnos.html",
        }
    }
}

/// Port for the page that renders the application.
pub trait View: Send + Sync {
    /// Redraw region visibility and the full appointment list.
    fn render(&self, projection: &Projection);

    /// Show a user-facing message (alert or inline result).
    fn show_message(&self, message: &DisplayMessage);

    /// Replace the doctor options and apply the selection.
    fn populate_doctors(&self, options: &DoctorOptions);

    /// Earliest date the appointment form accepts.
    fn set_min_appointment_date(&self, date: NaiveDate);

    /// Clear the appointment form after a successful request.
    fn reset_appointment_form(&self);

    fn navigate(&self, page: Page);

    fn set_logo(&self, url: &str);
}
