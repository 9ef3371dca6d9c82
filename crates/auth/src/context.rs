//! Canonical per-request identity context.

use serde::Serialize;

use tenantcrm_core::{CompanyId, TenantId, UserId};

use crate::{Role, Session};

const TENANT_KEYS: &[&str] = &["tenant_id", "tenantId"];
const USER_KEYS: &[&str] = &["user_id", "userId"];
const COMPANY_KEYS: &[&str] = &["company_id"];
const ROLES_KEY: &str = "roles";

/// Tenant/user/company/roles resolved from the session.
///
/// Always fully populated: absent session data shows up as `None` (JSON
/// `null`) or an empty role list, never as a missing field. Serializes with
/// the camelCase field names handlers and clients rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    tenant_id: Option<TenantId>,
    user_id: Option<UserId>,
    company_id: Option<CompanyId>,
    roles: Vec<Role>,
}

impl RequestContext {
    /// Normalize a (possibly absent) session.
    ///
    /// Each identifier prefers its snake_case key, then its camelCase key.
    /// `roles` is read from `roles` only. Never fails.
    pub fn from_session(session: Option<&Session>) -> Self {
        let Some(session) = session else {
            return Self::default();
        };

        Self {
            tenant_id: session
                .str_field(TENANT_KEYS)
                .and_then(|v| TenantId::new(v).ok()),
            user_id: session
                .str_field(USER_KEYS)
                .and_then(|v| UserId::new(v).ok()),
            company_id: session
                .str_field(COMPANY_KEYS)
                .and_then(|v| CompanyId::new(v).ok()),
            roles: session
                .string_list(ROLES_KEY)
                .into_iter()
                .map(Role::from)
                .collect(),
        }
    }

    pub fn tenant_id(&self) -> Option<&TenantId> {
        self.tenant_id.as_ref()
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn company_id(&self) -> Option<&CompanyId> {
        self.company_id.as_ref()
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{Value, json};

    use super::*;

    fn ctx(value: Value) -> RequestContext {
        RequestContext::from_session(Some(&Session::from_value(value)))
    }

    #[test]
    fn absent_session_yields_defaults() {
        let c = RequestContext::from_session(None);
        assert_eq!(c.tenant_id(), None);
        assert_eq!(c.user_id(), None);
        assert_eq!(c.company_id(), None);
        assert!(c.roles().is_empty());
    }

    #[test]
    fn serialized_shape_is_always_complete() {
        let body = serde_json::to_value(RequestContext::from_session(None)).unwrap();
        assert_eq!(
            body,
            json!({ "tenantId": null, "userId": null, "companyId": null, "roles": [] })
        );
    }

    #[test]
    fn camel_case_is_a_fallback() {
        let c = ctx(json!({ "tenantId": "t-1", "userId": 17 }));
        assert_eq!(c.tenant_id().map(TenantId::as_str), Some("t-1"));
        assert_eq!(c.user_id().map(UserId::as_str), Some("17"));
    }

    #[test]
    fn set_snake_case_key_is_never_overridden() {
        let c = ctx(json!({ "tenant_id": "", "tenantId": "t-2", "user_id": false, "userId": "u-2" }));
        assert_eq!(c.tenant_id(), None);
        assert_eq!(c.user_id(), None);

        let c = ctx(json!({ "tenant_id": null, "tenantId": "t-2" }));
        assert_eq!(c.tenant_id().map(TenantId::as_str), Some("t-2"));
    }

    #[test]
    fn company_has_no_camel_case_fallback() {
        let c = ctx(json!({ "companyId": "c-1" }));
        assert_eq!(c.company_id(), None);

        let c = ctx(json!({ "company_id": "c-1" }));
        assert_eq!(c.company_id().map(CompanyId::as_str), Some("c-1"));
    }

    #[test]
    fn malformed_roles_become_empty() {
        for roles in [json!(null), json!("admin"), json!({ "admin": true }), json!(3)] {
            assert!(ctx(json!({ "roles": roles })).roles().is_empty());
        }
        assert!(ctx(json!({ "role": ["admin"] })).roles().is_empty());
    }

    #[test]
    fn roles_keep_session_order() {
        let c = ctx(json!({ "roles": ["sales", "admin"] }));
        assert_eq!(c.roles(), &[Role::from("sales"), Role::from("admin")]);
    }

    fn id() -> impl Strategy<Value = String> {
        "[a-z0-9-]{1,12}"
    }

    /// Any non-null JSON scalar a session producer might write.
    fn set_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            "[a-z0-9-]{0,12}".prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
        ]
    }

    proptest! {
        #[test]
        fn snake_case_wins_over_camel_case(snake in id(), camel in proptest::option::of(id())) {
            let mut fields = serde_json::Map::new();
            fields.insert("tenant_id".into(), json!(snake.clone()));
            fields.insert("user_id".into(), json!(snake.clone()));
            if let Some(camel) = camel {
                fields.insert("tenantId".into(), json!(camel.clone()));
                fields.insert("userId".into(), json!(camel));
            }
            let c = RequestContext::from_session(Some(&Session::new(fields)));
            prop_assert_eq!(c.tenant_id().map(TenantId::as_str), Some(snake.as_str()));
            prop_assert_eq!(c.user_id().map(UserId::as_str), Some(snake.as_str()));
        }

        #[test]
        fn any_set_snake_value_shadows_camel_case(snake in set_value(), camel in id()) {
            let expected = RequestContext::from_session(Some(&Session::from_value(
                json!({ "tenant_id": snake.clone() }),
            )));
            let c = ctx(json!({ "tenant_id": snake, "tenantId": camel }));
            prop_assert_eq!(c.tenant_id(), expected.tenant_id());
        }

        #[test]
        fn camel_case_used_when_snake_absent(camel in id()) {
            let c = ctx(json!({ "tenantId": camel.clone(), "userId": camel.clone() }));
            prop_assert_eq!(c.tenant_id().map(TenantId::as_str), Some(camel.as_str()));
            prop_assert_eq!(c.user_id().map(UserId::as_str), Some(camel.as_str()));
        }

        #[test]
        fn unrelated_keys_leave_fields_null(key in "[a-z]{1,8}", value in id()) {
            prop_assume!(!["roles"].contains(&key.as_str()));
            let c = ctx(json!({ key: value }));
            prop_assert_eq!(c, RequestContext::default());
        }
    }
}
