//! Age gate.

use super::HandlerContext;
use crate::application::effects::{Effect, Transition};
use crate::domain::age::{parse_birthdate, AgeVerdict};
use crate::domain::foundation::ValidationError;
use crate::domain::AppState;
use crate::ports::DisplayMessage;

/// Evaluates a submitted birthdate against `ctx.today`.
///
/// The verdict replaces the age flag either way and the session is
/// persisted. Passing the gate also enables the restricted features.
///
/// # Errors
///
/// - `MissingField` / `InvalidFormat` if the birthdate is not a `YYYY-MM-DD` date
pub fn verify(
    state: &AppState,
    birthdate: &str,
    ctx: &HandlerContext,
) -> Result<(Transition, AgeVerdict), ValidationError> {
    let birthdate = parse_birthdate(birthdate)?;
    let verdict = AgeVerdict::evaluate(birthdate, ctx.today);
    tracing::debug!(age = verdict.age(), verified = verdict.is_verified(), "Age gate evaluated");

    let mut next = state.clone();
    next.session.set_age_verified(verdict.is_verified());

    let transition = if verdict.is_verified() {
        Transition::new(next)
            .with(Effect::ShowMessage(DisplayMessage::AgeGranted))
            .with(Effect::EnableRestrictedFeatures)
    } else {
        Transition::new(next).with(Effect::ShowMessage(DisplayMessage::AgeDenied))
    };

    Ok((
        transition.with(Effect::PersistSession).with(Effect::Render),
        verdict,
    ))
}
