//! Integration tests for the appointment page flow.
//!
//! These tests drive `ClinicApp` the way the page does:
//! 1. Bootstrap from storage
//! 2. Dispatch commands for each user interaction
//! 3. Inspect the store and what the View was told
//!
//! Uses in-memory store, fixed clock, and recording view.

use std::sync::Arc;

use chrono::NaiveDate;

use caps_clinic::adapters::{FixedClock, InMemoryKeyValueStore, LoggingRestrictedFeatures, RecordingView, ViewCall};
use caps_clinic::application::{ClinicApp, Command, QuickRequestForm, APPOINTMENTS_KEY, SESSION_KEY};
use caps_clinic::domain::appointment::{AppointmentRequest, AppointmentStatus, Specialty};
use caps_clinic::domain::foundation::{AppointmentId, Timestamp};
use caps_clinic::ports::{AppointmentListView, DisplayMessage, DoctorOptions, KeyValueStore, Page, RegionTag};

// =============================================================================
// Test Infrastructure
// =============================================================================

const NOW_MILLIS: i64 = 1_792_060_200_123;

struct TestPage {
    app: ClinicApp,
    store: Arc<InMemoryKeyValueStore>,
    view: Arc<RecordingView>,
    clock: Arc<FixedClock>,
    features: Arc<LoggingRestrictedFeatures>,
}

impl TestPage {
    fn open() -> Self {
        Self::open_with(Arc::new(InMemoryKeyValueStore::new()))
    }

    /// Simulates a page load against an existing store.
    fn open_with(store: Arc<InMemoryKeyValueStore>) -> Self {
        let view = Arc::new(RecordingView::new());
        let clock = Arc::new(FixedClock::with_today(
            Timestamp::from_unix_millis(NOW_MILLIS).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
        ));
        let features = Arc::new(LoggingRestrictedFeatures::new());
        let mut app = ClinicApp::new(store.clone(), clock.clone(), view.clone(), features.clone());
        let report = app.bootstrap();
        assert!(report.is_clean(), "unexpected bootstrap problems: {:?}", report);
        view.take_calls();

        Self {
            app,
            store,
            view,
            clock,
            features,
        }
    }

    fn submit(&mut self, request: AppointmentRequest) {
        self.app.dispatch(Command::AppointmentSubmitted(request));
    }

    fn stored_appointments(&self) -> Option<String> {
        self.store.read(APPOINTMENTS_KEY)
    }
}

fn request(doctor: &str, urgent: bool) -> AppointmentRequest {
    AppointmentRequest {
        specialty: "general".to_string(),
        doctor: doctor.to_string(),
        date: "2026-11-02".to_string(),
        time: "09:30".to_string(),
        reason: "Annual checkup".to_string(),
        urgent,
    }
}

// =============================================================================
// Creation
// =============================================================================

#[test]
fn created_appointments_are_appended_with_derived_status() {
    let mut page = TestPage::open();

    page.submit(request("Dr. Juan Pérez", false));
    page.submit(request("Dra. María García", true));

    let appointments: Vec<_> = page.app.state().appointments.iter().cloned().collect();
    assert_eq!(appointments.len(), 2);
    assert_eq!(appointments[0].doctor(), "Dr. Juan Pérez");
    assert_eq!(appointments[0].status(), &AppointmentStatus::Pending);
    assert_eq!(appointments[1].status(), &AppointmentStatus::UrgentUnderReview);

    let stored = page.stored_appointments().unwrap();
    assert!(stored.contains("\"status\":\"Pending\""));
    assert!(stored.contains("\"status\":\"Urgent - Under review\""));
    assert!(stored.contains("\"createdAt\":\"2026-10-15T10:30:00.123Z\""));
}

#[test]
fn ids_stay_unique_within_one_millisecond() {
    let mut page = TestPage::open();

    for _ in 0..25 {
        page.submit(request("Dr. Carlos López", false));
    }

    let ids: Vec<i64> = page
        .app
        .state()
        .appointments
        .iter()
        .map(|a| a.id().as_i64())
        .collect();
    assert_eq!(ids.len(), 25);
    assert_eq!(ids[0], NOW_MILLIS);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn ids_stay_unique_when_clock_goes_backwards() {
    let mut page = TestPage::open();
    page.submit(request("Dr. Carlos López", false));

    page.clock.set(Timestamp::from_unix_millis(NOW_MILLIS - 60_000).unwrap());
    page.submit(request("Dr. Carlos López", false));

    let ids: Vec<i64> = page
        .app
        .state()
        .appointments
        .iter()
        .map(|a| a.id().as_i64())
        .collect();
    assert_eq!(ids, vec![NOW_MILLIS, NOW_MILLIS + 1]);
}

#[test]
fn incomplete_request_changes_nothing() {
    let mut page = TestPage::open();
    page.submit(request("Dr. Juan Pérez", false));
    let before = page.stored_appointments();
    page.view.take_calls();

    for missing in ["specialty", "doctor", "date", "time", "reason"] {
        let mut incomplete = request("Dr. Juan Pérez", false);
        match missing {
            "specialty" => incomplete.specialty.clear(),
            "doctor" => incomplete.doctor = "   ".to_string(),
            "date" => incomplete.date.clear(),
            "time" => incomplete.time.clear(),
            _ => incomplete.reason.clear(),
        }
        page.submit(incomplete);
    }

    assert_eq!(page.app.state().appointments.len(), 1);
    assert_eq!(page.stored_appointments(), before);
    assert_eq!(
        page.view.messages(),
        vec![DisplayMessage::IncompleteForm; 5]
    );
    assert!(page.view.last_projection().is_none());
}

#[test]
fn unknown_specialty_is_rejected_as_invalid() {
    let mut page = TestPage::open();
    page.submit(AppointmentRequest {
        specialty: "cardiology".to_string(),
        ..request("Dr. Juan Pérez", false)
    });

    assert!(page.app.state().appointments.is_empty());
    assert!(matches!(
        page.view.messages().as_slice(),
        [DisplayMessage::InvalidField { field, .. }] if field == "specialty"
    ));
}

#[test]
fn successful_request_shows_receipt_and_resets_form() {
    let mut page = TestPage::open();
    page.submit(request("Dr. Juan Pérez", false));

    let calls = page.view.calls();
    assert!(calls.contains(&ViewCall::ResetAppointmentForm));
    match &page.view.messages()[..] {
        [DisplayMessage::AppointmentRequested(receipt)] => {
            assert_eq!(receipt.doctor, "Dr. Juan Pérez");
            assert_eq!(receipt.date, "Monday, November 2, 2026");
            assert_eq!(receipt.status, "Pending confirmation");
        }
        other => panic!("unexpected messages: {:?}", other),
    }

    let projection = page.view.last_projection().unwrap();
    assert_eq!(projection.rows().len(), 1);
    assert_eq!(projection.rows()[0].date, "2/11/2026");
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn cancel_removes_exactly_one_and_keeps_order() {
    let mut page = TestPage::open();
    for doctor in ["Dr. Juan Pérez", "Dra. María García", "Dr. Carlos López"] {
        page.submit(request(doctor, false));
    }
    let middle = page.app.state().appointments.as_slice()[1].id();

    page.app.dispatch(Command::CancelRequested { id: middle });

    let doctors: Vec<&str> = page
        .app
        .state()
        .appointments
        .iter()
        .map(|a| a.doctor())
        .collect();
    assert_eq!(doctors, vec!["Dr. Juan Pérez", "Dr. Carlos López"]);

    let stored = page.stored_appointments().unwrap();
    assert!(!stored.contains("María García"));
    assert_eq!(
        page.view.messages().last(),
        Some(&DisplayMessage::AppointmentCancelled)
    );
}

#[test]
fn cancel_unknown_id_reports_not_found() {
    let mut page = TestPage::open();
    page.submit(request("Dr. Juan Pérez", false));
    let before = page.stored_appointments();
    page.view.take_calls();

    let unknown = AppointmentId::from_raw(42);
    page.app.dispatch(Command::CancelRequested { id: unknown });

    assert_eq!(page.app.state().appointments.len(), 1);
    assert_eq!(page.stored_appointments(), before);
    assert_eq!(
        page.view.messages(),
        vec![DisplayMessage::AppointmentNotFound { id: unknown }]
    );
}

#[test]
fn cancelling_last_appointment_shows_placeholder() {
    let mut page = TestPage::open();
    let created = page.app.create_appointment(request("Dr. Juan Pérez", false)).unwrap();

    page.app.cancel_appointment(created.id()).unwrap();

    assert_eq!(
        page.view.last_projection().unwrap().appointments,
        AppointmentListView::Empty {
            placeholder: "No appointments requested"
        }
    );
}

// =============================================================================
// Doctor selection and handoff
// =============================================================================

#[test]
fn handoff_populates_and_selects_in_one_step() {
    let mut page = TestPage::open();
    page.app.dispatch(Command::AppointmentPageEntered {
        query: "?especialidad=psychology&medico=Lic.%20Miguel%20Rodr%C3%ADguez".to_string(),
    });

    assert_eq!(
        page.view.calls(),
        vec![
            ViewCall::SetMinAppointmentDate(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()),
            ViewCall::PopulateDoctors(DoctorOptions {
                specialty: Some(Specialty::Psychology),
                options: vec![
                    "Lic. Laura Fernández".to_string(),
                    "Lic. Miguel Rodríguez".to_string(),
                ],
                selected: Some("Lic. Miguel Rodríguez".to_string()),
            }),
        ]
    );
}

#[test]
fn specialty_change_lists_roster() {
    let mut page = TestPage::open();
    page.app.dispatch(Command::SpecialtyChanged {
        specialty: "general".to_string(),
    });

    match &page.view.calls()[..] {
        [ViewCall::PopulateDoctors(options)] => {
            assert_eq!(
                options.options,
                vec!["Dr. Juan Pérez", "Dra. María García", "Dr. Carlos López"]
            );
            assert_eq!(options.selected, None);
        }
        other => panic!("unexpected calls: {:?}", other),
    }
}

#[test]
fn quick_request_sends_visitor_to_appointments_page() {
    let mut page = TestPage::open();
    page.app.dispatch(Command::QuickRequestSubmitted(QuickRequestForm {
        full_name: "Ana Gómez".to_string(),
        id_number: "30111222".to_string(),
        specialty: "nutrition".to_string(),
    }));

    assert!(page.view.calls().contains(&ViewCall::Navigate(Page::Appointments)));
    assert_eq!(page.stored_appointments(), None);
}

// =============================================================================
// Session and age gate
// =============================================================================

#[test]
fn login_and_age_gate_drive_region_visibility() {
    let mut page = TestPage::open();

    page.app.dispatch(Command::LoginSubmitted {
        email: "ana@example.com".to_string(),
        password: "secret".to_string(),
    });
    page.app.dispatch(Command::AgeFormSubmitted {
        birthdate: "2008-10-15".to_string(),
    });

    let projection = page.view.last_projection().unwrap();
    assert!(projection.is_visible(RegionTag::LoggedIn));
    assert!(!projection.is_visible(RegionTag::LoggedOut));
    assert!(projection.is_visible(RegionTag::AgeRestricted));
    assert!(!projection.is_visible(RegionTag::AgeVerification));
    assert_eq!(page.features.activations(), 1);

    page.app.dispatch(Command::LogoutRequested);

    let projection = page.view.last_projection().unwrap();
    assert!(projection.is_visible(RegionTag::LoggedOut));
    assert!(projection.is_visible(RegionTag::AgeRestricted));
    assert_eq!(page.view.calls().last(), Some(&ViewCall::Render(projection)));
}

#[test]
fn one_day_short_of_eighteen_is_denied_and_persisted() {
    let mut page = TestPage::open();
    page.app.dispatch(Command::AgeFormSubmitted {
        birthdate: "2008-10-16".to_string(),
    });

    assert!(!page.app.state().session.age_verified());
    assert_eq!(page.view.messages(), vec![DisplayMessage::AgeDenied]);
    assert_eq!(page.features.activations(), 0);
    assert!(page.store.read(SESSION_KEY).unwrap().contains("\"ageVerified\":false"));
}

#[test]
fn state_survives_reload() {
    let store = Arc::new(InMemoryKeyValueStore::new());
    {
        let mut page = TestPage::open_with(store.clone());
        page.app.dispatch(Command::LoginSubmitted {
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        });
        page.submit(request("Dr. Juan Pérez", true));
        page.app.dispatch(Command::LogoChanged {
            url: "https://example.com/new-logo.png".to_string(),
        });
    }

    let store_for_reload = store.clone();
    let view = Arc::new(RecordingView::new());
    let mut app = ClinicApp::new(
        store_for_reload,
        Arc::new(FixedClock::new(Timestamp::from_unix_millis(NOW_MILLIS).unwrap())),
        view.clone(),
        Arc::new(LoggingRestrictedFeatures::new()),
    );
    app.bootstrap();

    assert!(app.state().session.is_logged_in());
    assert_eq!(app.state().appointments.len(), 1);
    assert_eq!(
        view.calls()[0],
        ViewCall::SetLogo("https://example.com/new-logo.png".to_string())
    );
}
