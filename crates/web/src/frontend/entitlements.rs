use leptos::*;

use crate::Entitlements;
use crate::frontend::api;

/// Entitlement state shared with every [`RequireFeature`](super::RequireFeature).
#[derive(Debug, Clone, Copy)]
pub struct EntitlementsContext {
    pub ready: RwSignal<bool>,
    pub ent: RwSignal<Option<Entitlements>>,
}

impl EntitlementsContext {
    pub fn new() -> Self {
        Self {
            ready: create_rw_signal(false),
            ent: create_rw_signal(None),
        }
    }
}

impl Default for EntitlementsContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch entitlements once and expose them to descendants.
///
/// A failed fetch still flips `ready`, with no entitlements, so gated
/// routes redirect instead of spinning forever.
#[component]
pub fn EntitlementsProvider(children: Children) -> impl IntoView {
    let ctx = EntitlementsContext::new();
    provide_context(ctx);

    spawn_local(async move {
        match api::fetch_entitlements().await {
            Ok(ent) => ctx.ent.set(Some(ent)),
            Err(e) => {
                logging::warn!("{e}");
                ctx.ent.set(None);
            }
        }
        ctx.ready.set(true);
    });

    children()
}
