//! Feature-gated routes.

use crate::Entitlements;

/// Where denied users land unless a route says otherwise.
pub const DEFAULT_FALLBACK: &str = "/app/leads";

/// What a gated route should do on this render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Entitlements are still loading; render nothing and decide later.
    Pending,
    /// Feature is enabled; render the protected content.
    Render,
    /// Feature is off; navigate away, replacing the current history entry
    /// so back-navigation skips the guarded route.
    Redirect { to: String, replace: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGate {
    feature: String,
    fallback: String,
}

impl FeatureGate {
    pub fn new(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Decide for the current entitlement state.
    ///
    /// Pure and idempotent: re-rendering with the same inputs yields the same
    /// outcome, so a repeated redirect is harmless.
    pub fn evaluate(&self, ready: bool, ent: Option<&Entitlements>) -> GateOutcome {
        if !ready {
            return GateOutcome::Pending;
        }

        if ent.is_some_and(|e| e.is_enabled(&self.feature)) {
            GateOutcome::Render
        } else {
            GateOutcome::Redirect {
                to: self.fallback.clone(),
                replace: true,
            }
        }
    }
}
