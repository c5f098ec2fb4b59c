//! Appointment request page: doctor selection, requests, cancellations.

use super::HandlerContext;
use crate::application::commands::QuickRequestForm;
use crate::application::effects::{Effect, Transition};
use crate::application::handoff::{doctor_options_for, AppointmentPageQuery};
use crate::application::projection::format_long_date;
use crate::domain::appointment::{Appointment, AppointmentNotFound, AppointmentRequest};
use crate::domain::foundation::{AppointmentId, ValidationError};
use crate::domain::AppState;
use crate::ports::{AppointmentReceipt, DisplayMessage, Page};

/// Prepares the request form: earliest date is today, and a handed-over
/// specialty fills the doctor select (pre-selecting the handed-over doctor).
pub fn enter_page(state: &AppState, query: &str, ctx: &HandlerContext) -> Transition {
    let transition =
        Transition::new(state.clone()).with(Effect::SetMinAppointmentDate(ctx.today));

    match AppointmentPageQuery::parse(query).doctor_options() {
        Some(options) => {
            tracing::debug!(
                specialty = ?options.specialty,
                selected = ?options.selected,
                "Applying appointment page handoff"
            );
            transition.with(Effect::PopulateDoctors(options))
        }
        None => transition,
    }
}

/// Refills the doctor select for the chosen specialty, with nothing selected.
pub fn change_specialty(state: &AppState, specialty: &str) -> Transition {
    Transition::new(state.clone()).with(Effect::PopulateDoctors(doctor_options_for(specialty)))
}

/// Records a new appointment request.
///
/// # Errors
///
/// - `MissingField` if specialty, doctor, date, time, or reason is empty
/// - `InvalidFormat` if the specialty is unknown
pub fn create(
    state: &AppState,
    request: AppointmentRequest,
    ctx: &HandlerContext,
) -> Result<(Transition, Appointment), ValidationError> {
    let mut next = state.clone();
    let appointment = next.appointments.create(request, ctx.now)?.clone();
    tracing::info!(
        id = %appointment.id(),
        specialty = %appointment.specialty(),
        urgent = appointment.is_urgent(),
        "Appointment requested"
    );

    let receipt = AppointmentReceipt {
        doctor: appointment.doctor().to_string(),
        date: format_long_date(appointment.date()),
        time: appointment.time().to_string(),
        reason: appointment.reason().to_string(),
        status: appointment.status().confirmation_label().to_string(),
    };

    let transition = Transition::new(next)
        .with(Effect::PersistAppointments)
        .with(Effect::ShowMessage(DisplayMessage::AppointmentRequested(receipt)))
        .with(Effect::ResetAppointmentForm)
        .with(Effect::Render);

    Ok((transition, appointment))
}

/// Removes an appointment. Confirmation has already been obtained.
///
/// # Errors
///
/// - `AppointmentNotFound` if no appointment has that id
pub fn cancel(state: &AppState, id: AppointmentId) -> Result<Transition, AppointmentNotFound> {
    let mut next = state.clone();
    let removed = next.appointments.cancel(id)?;
    tracing::info!(id = %removed.id(), "Appointment cancelled");

    Ok(Transition::new(next)
        .with(Effect::PersistAppointments)
        .with(Effect::Render)
        .with(Effect::ShowMessage(DisplayMessage::AppointmentCancelled)))
}

/// Acknowledges the home page quick request and sends the visitor to the
/// full request page. Nothing is stored.
///
/// # Errors
///
/// - `MissingField` for the first empty field
/// - `InvalidFormat` if the specialty is unknown
pub fn submit_quick_request(
    state: &AppState,
    form: &QuickRequestForm,
) -> Result<Transition, ValidationError> {
    let specialty = form.validate()?;

    Ok(Transition::new(state.clone())
        .with(Effect::ShowMessage(DisplayMessage::QuickRequestReceived {
            full_name: form.full_name.trim().to_string(),
            id_number: form.id_number.trim().to_string(),
            specialty: specialty.label().to_string(),
        }))
        .with(Effect::Navigate(Page::Appointments)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::appointment::{AppointmentStatus, Specialty};
    use crate::domain::foundation::Timestamp;
    use crate::ports::DoctorOptions;
    use chrono::NaiveDate;

    fn ctx() -> HandlerContext {
        HandlerContext::new(
            Timestamp::from_unix_millis(1_792_060_200_123).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
        )
    }

    fn request(urgent: bool) -> AppointmentRequest {
        AppointmentRequest {
            specialty: "pediatrics".to_string(),
            doctor: "Dra. Sofía Díaz".to_string(),
            date: "2026-11-02".to_string(),
            time: "09:15".to_string(),
            reason: "Vaccines".to_string(),
            urgent,
        }
    }

    #[test]
    fn page_entry_without_handoff_sets_min_date_only() {
        let transition = enter_page(&AppState::new(), "", &ctx());
        assert_eq!(
            transition.effects,
            vec![Effect::SetMinAppointmentDate(
                NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
            )]
        );
    }

    #[test]
    fn handoff_populates_and_selects_in_one_effect() {
        let transition = enter_page(
            &AppState::new(),
            "especialidad=pediatrics&medico=Dr.%20Javier%20Romero",
            &ctx(),
        );

        assert_eq!(
            transition.effects[1],
            Effect::PopulateDoctors(DoctorOptions {
                specialty: Some(Specialty::Pediatrics),
                options: vec!["Dra. Sofía Díaz".to_string(), "Dr. Javier Romero".to_string()],
                selected: Some("Dr. Javier Romero".to_string()),
            })
        );
    }

    #[test]
    fn specialty_change_repopulates_without_selection() {
        let transition = change_specialty(&AppState::new(), "psychology");
        match &transition.effects[..] {
            [Effect::PopulateDoctors(options)] => {
                assert_eq!(options.options.len(), 2);
                assert_eq!(options.selected, None);
            }
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn create_appends_and_persists() {
        let (transition, appointment) = create(&AppState::new(), request(false), &ctx()).unwrap();

        assert_eq!(transition.state.appointments.len(), 1);
        assert_eq!(appointment.status(), &AppointmentStatus::Pending);
        assert_eq!(appointment.id().as_i64(), 1_792_060_200_123);
        assert_eq!(transition.effects[0], Effect::PersistAppointments);
        assert!(transition.has_effect(&Effect::ResetAppointmentForm));

        let receipt = match transition.messages().next() {
            Some(DisplayMessage::AppointmentRequested(receipt)) => receipt.clone(),
            other => panic!("unexpected message: {:?}", other),
        };
        assert_eq!(receipt.date, "Monday, November 2, 2026");
        assert_eq!(receipt.status, "Pending confirmation");
    }

    #[test]
    fn urgent_request_is_under_review() {
        let (_, appointment) = create(&AppState::new(), request(true), &ctx()).unwrap();
        assert_eq!(appointment.status().as_str(), "Urgent - Under review");
    }

    #[test]
    fn create_with_missing_reason_leaves_state_alone() {
        let state = AppState::new();
        let err = create(
            &state,
            AppointmentRequest {
                reason: String::new(),
                ..request(false)
            },
            &ctx(),
        )
        .unwrap_err();

        assert_eq!(err, ValidationError::missing_field("reason"));
        assert!(state.appointments.is_empty());
    }

    #[test]
    fn cancel_removes_only_the_target() {
        let (first, a) = create(&AppState::new(), request(false), &ctx()).unwrap();
        let (second, b) = create(&first.state, request(true), &ctx()).unwrap();

        let transition = cancel(&second.state, a.id()).unwrap();

        let ids: Vec<_> = transition.state.appointments.iter().map(|x| x.id()).collect();
        assert_eq!(ids, vec![b.id()]);
        assert_eq!(transition.effects[0], Effect::PersistAppointments);
    }

    #[test]
    fn cancel_unknown_id_fails() {
        let id = AppointmentId::from_raw(5);
        assert_eq!(
            cancel(&AppState::new(), id).unwrap_err(),
            AppointmentNotFound { id }
        );
    }

    #[test]
    fn quick_request_navigates_without_storing() {
        let form = QuickRequestForm {
            full_name: "Ana Gómez".to_string(),
            id_number: "30111222".to_string(),
            specialty: "general".to_string(),
        };
        let state = AppState::new();
        let transition = submit_quick_request(&state, &form).unwrap();

        assert_eq!(transition.state, state);
        assert!(transition.has_effect(&Effect::Navigate(Page::Appointments)));
        assert!(!transition.has_effect(&Effect::PersistAppointments));
        assert_eq!(
            transition.messages().next(),
            Some(&DisplayMessage::QuickRequestReceived {
                full_name: "Ana Gómez".to_string(),
                id_number: "30111222".to_string(),
                specialty: "General Medicine".to_string(),
            })
        );
    }
}
