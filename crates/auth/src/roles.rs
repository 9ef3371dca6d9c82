use serde::{Deserialize, Serialize};

/// Role label copied from the session's `roles` array.
///
/// Only surfaced to handlers through the request context; no permission is
/// derived from it here. Labels are kept verbatim (case and duplicates).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Role {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&str> for Role {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
