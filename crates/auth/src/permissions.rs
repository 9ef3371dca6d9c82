use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Permission code.
///
/// Permissions are modeled as opaque strings (e.g. "leads.read"). Matching is
/// exact; there is no wildcard or prefix expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Permission {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Permission {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Permission codes granted to the current session.
///
/// Built per authorization check and dropped with it; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(HashSet<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, permission: &Permission) -> bool {
        self.0.contains(permission.as_str())
    }

    /// True when at least one of `required` is granted.
    pub fn intersects(&self, required: &[Permission]) -> bool {
        required.iter().any(|p| self.contains(p))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let set: PermissionSet = ["leads.read", "leads.read", "leads.write"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn intersects_is_any_match() {
        let set: PermissionSet = ["b"].into_iter().collect();
        assert!(set.intersects(&[Permission::new("a"), Permission::new("b")]));
        assert!(!set.intersects(&[Permission::new("c")]));
        assert!(!set.intersects(&[]));
    }

    #[test]
    fn matching_is_exact() {
        let set: PermissionSet = ["leads.read"].into_iter().collect();
        assert!(!set.contains(&Permission::new("leads")));
        assert!(!set.contains(&Permission::new("LEADS.READ")));
    }
}
