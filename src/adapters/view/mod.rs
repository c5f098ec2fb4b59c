//! View Adapters
//!
//! - **RecordingView** - Records every instruction (testing, headless runs)

mod recording_view;

pub use recording_view::{RecordingView, ViewCall};
