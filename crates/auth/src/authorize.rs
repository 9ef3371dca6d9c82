use thiserror::Error;

use crate::{Permission, PermissionSet};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// None of the required permissions is granted.
    ///
    /// Deliberately carries no detail: the caller must not learn which codes
    /// would have been accepted.
    #[error("forbidden")]
    Forbidden,
}

/// Route-level permission requirement with OR semantics.
///
/// Fixed when the route is registered; evaluated against a fresh
/// [`PermissionSet`] per request.
///
/// - No IO
/// - No panics
/// - An empty requirement list authorizes everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionGate {
    required: Vec<Permission>,
}

impl PermissionGate {
    pub fn new<I, P>(required: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }

    pub fn required(&self) -> &[Permission] {
        &self.required
    }

    pub fn check(&self, granted: &PermissionSet) -> Result<(), AuthzError> {
        if self.required.is_empty() || granted.intersects(&self.required) {
            Ok(())
        } else {
            tracing::debug!(
                required = ?self.required.iter().map(Permission::as_str).collect::<Vec<_>>(),
                granted = granted.len(),
                "permission gate denied request"
            );
            Err(AuthzError::Forbidden)
        }
    }
}
