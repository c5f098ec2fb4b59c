//! Restricted features port - Hook fired when the age gate is passed.

/// Port for unlocking functionality reserved for verified adults.
pub trait RestrictedFeatures: Send + Sync {
    /// Called once per successful age verification.
    fn enable(&self);
}
