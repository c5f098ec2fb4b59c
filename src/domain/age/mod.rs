//! Age gate.
//!
//! Pure date arithmetic deciding whether a visitor may use age-restricted
//! services.

mod verification;

pub use verification::{compute_age, parse_birthdate, AgeVerdict, MINIMUM_AGE};
