use leptos::*;
use leptos_router::{NavigateOptions, use_navigate};

use crate::frontend::EntitlementsContext;
use crate::{DEFAULT_FALLBACK, FeatureGate, GateOutcome};

/// Render `children` only when `feature` is enabled for the session.
///
/// Until entitlements are loaded nothing is rendered. Once loaded, a disabled
/// feature replaces the current history entry with `fallback`
/// (default `/app/leads`). Without an [`EntitlementsContext`] the route stays
/// pending.
#[component]
pub fn RequireFeature(
    #[prop(into)] feature: String,
    #[prop(optional, into)] fallback: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let gate = FeatureGate::new(feature)
        .with_fallback(fallback.unwrap_or_else(|| DEFAULT_FALLBACK.to_string()));
    let ctx = use_context::<EntitlementsContext>();

    let outcome = create_memo(move |_| match ctx {
        Some(ctx) => ctx.ent.with(|ent| gate.evaluate(ctx.ready.get(), ent.as_ref())),
        None => GateOutcome::Pending,
    });

    // `replace` is forwarded untouched from `GateOutcome::Redirect`, which
    // `FeatureGate::evaluate` always sets (see guard.rs tests).
    let navigate = use_navigate();
    create_effect(move |_| {
        if let GateOutcome::Redirect { to, replace } = outcome.get() {
            navigate(
                &to,
                NavigateOptions {
                    replace,
                    ..Default::default()
                },
            );
        }
    });

    move || match outcome.get() {
        GateOutcome::Render => children().into_view(),
        GateOutcome::Pending | GateOutcome::Redirect { .. } => ().into_view(),
    }
}
