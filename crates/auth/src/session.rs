//! Raw session data as handed over by the session store.
//!
//! Sessions are written by several producers (login flow, SSO bridge, admin
//! impersonation) that do not agree on key naming, so the payload stays an
//! untyped JSON object here. Only the lookup helpers below interpret it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::PermissionSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(Map<String, Value>);

impl Session {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wrap any JSON value; anything other than an object is an empty session.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scalar stored under the first of `keys` that is set.
    ///
    /// A key is set when present and not null; later keys are only consulted
    /// for unset ones. The set value then decides alone: non-empty strings
    /// are taken as-is, numbers are stringified, and anything else (empty
    /// string, bool, array, object) resolves to `None`.
    pub fn str_field(&self, keys: &[&str]) -> Option<String> {
        let value = keys
            .iter()
            .find_map(|key| self.0.get(*key).filter(|v| !v.is_null()))?;

        match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// String elements of the array stored under `key`.
    ///
    /// A missing key or a non-array value yields an empty list. Non-string
    /// elements are skipped; order is preserved.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Permission codes granted by this session.
    pub fn permission_set(&self) -> PermissionSet {
        self.string_list("permissions").into_iter().collect()
    }

    /// The `features` object, if the session carries one.
    pub fn features(&self) -> Map<String, Value> {
        match self.0.get("features") {
            Some(Value::Object(features)) => features.clone(),
            _ => Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Permission;

    #[test]
    fn non_object_values_become_empty_sessions() {
        assert!(Session::from_value(json!(null)).is_empty());
        assert!(Session::from_value(json!(["tenant_id"])).is_empty());
        assert!(Session::from_value(json!("tenant")).is_empty());
    }

    #[test]
    fn str_field_falls_through_only_null_and_missing() {
        let s = Session::from_value(json!({ "a": null, "d": 42 }));
        assert_eq!(s.str_field(&["missing", "a", "d"]), Some("42".to_string()));
        assert_eq!(s.str_field(&["a"]), None);
        assert_eq!(s.str_field(&["missing"]), None);
    }

    #[test]
    fn set_but_unusable_value_does_not_fall_through() {
        let s = Session::from_value(json!({
            "empty": "",
            "flag": true,
            "list": ["x"],
            "zero": 0,
            "next": "fallback",
        }));
        assert_eq!(s.str_field(&["empty", "next"]), None);
        assert_eq!(s.str_field(&["flag", "next"]), None);
        assert_eq!(s.str_field(&["list", "next"]), None);
        assert_eq!(s.str_field(&["zero", "next"]), Some("0".to_string()));
    }

    #[test]
    fn string_list_keeps_order_and_drops_non_strings() {
        let s = Session::from_value(json!({ "roles": ["admin", 7, "sales", null, "admin"] }));
        assert_eq!(s.string_list("roles"), vec!["admin", "sales", "admin"]);
    }

    #[test]
    fn string_list_of_scalar_is_empty() {
        let s = Session::from_value(json!({ "roles": "admin" }));
        assert!(s.string_list("roles").is_empty());
    }

    #[test]
    fn permission_set_reads_permissions_key() {
        let s = Session::from_value(json!({ "permissions": ["leads.read"] }));
        let set = s.permission_set();
        assert!(set.contains(&Permission::new("leads.read")));
        assert_eq!(set.len(), 1);

        assert!(Session::default().permission_set().is_empty());
    }

    #[test]
    fn features_defaults_to_empty_object() {
        let s = Session::from_value(json!({ "features": ["x"] }));
        assert!(s.features().is_empty());

        let s = Session::from_value(json!({ "features": { "pipeline": true } }));
        assert_eq!(s.features().get("pipeline"), Some(&json!(true)));
    }
}
