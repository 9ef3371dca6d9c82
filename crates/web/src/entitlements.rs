//! Feature entitlements as served by `GET /entitlements`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Feature flags for the signed-in tenant/user.
///
/// Flag values are kept as raw JSON: some producers write `true`, others
/// `1` or a plan name. Any truthy value enables the feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entitlements {
    #[serde(default)]
    pub features: Map<String, Value>,
}

impl Entitlements {
    pub fn is_enabled(&self, feature: &str) -> bool {
        self.features.get(feature).is_some_and(is_truthy)
    }
}

/// Loose truthiness: `false`, `null`, `0` and `""` are off, everything else
/// (including empty arrays and objects) is on.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
