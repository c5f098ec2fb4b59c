//! Recording View Adapter
//!
//! Captures every instruction sent to the View so callers can inspect
//! what a page would have shown.

use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

use crate::ports::{DisplayMessage, DoctorOptions, Page, Projection, View};

/// One instruction received by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Render(Projection),
    ShowMessage(DisplayMessage),
    PopulateDoctors(DoctorOptions),
    SetMinAppointmentDate(NaiveDate),
    ResetAppointmentForm,
    Navigate(Page),
    SetLogo(String),
}

/// View that records instead of rendering.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    calls: Arc<Mutex<Vec<ViewCall>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Drain recorded calls.
    pub fn take_calls(&self) -> Vec<ViewCall> {
        self.calls
            .lock()
            .map(|mut c| std::mem::take(&mut *c))
            .unwrap_or_default()
    }

    /// Most recent projection rendered.
    pub fn last_projection(&self) -> Option<Projection> {
        self.calls().into_iter().rev().find_map(|call| match call {
            ViewCall::Render(projection) => Some(projection),
            _ => None,
        })
    }

    /// Messages shown, oldest first.
    pub fn messages(&self) -> Vec<DisplayMessage> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ViewCall::ShowMessage(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ViewCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl View for RecordingView {
    fn render(&self, projection: &Projection) {
        self.record(ViewCall::Render(projection.clone()));
    }

    fn show_message(&self, message: &DisplayMessage) {
        self.record(ViewCall::ShowMessage(message.clone()));
    }

    fn populate_doctors(&self, options: &DoctorOptions) {
        self.record(ViewCall::PopulateDoctors(options.clone()));
    }

    fn set_min_appointment_date(&self, date: NaiveDate) {
        self.record(ViewCall::SetMinAppointmentDate(date));
    }

    fn reset_appointment_form(&self) {
        self.record(ViewCall::ResetAppointmentForm);
    }

    fn navigate(&self, page: Page) {
        self.record(ViewCall::Navigate(page));
    }

    fn set_logo(&self, url: &str) {
        self.record(ViewCall::SetLogo(url.to_string()));
    }
}
