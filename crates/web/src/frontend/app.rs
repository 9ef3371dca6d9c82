//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use crate::frontend::{EntitlementsProvider, RequireFeature};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <EntitlementsProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/app/leads"/> }/>
                    <Route path="/app/leads" view=LeadsPage/>
                    <Route
                        path="/app/reports"
                        view=|| view! {
                            <RequireFeature feature="reports">
                                <ReportsPage/>
                            </RequireFeature>
                        }
                    />
                </Routes>
            </Router>
        </EntitlementsProvider>
    }
}

#[component]
fn LeadsPage() -> impl IntoView {
    view! {
        <div class="app">
            <header>
                <h1>"Leads"</h1>
                <A href="/app/reports">"Reports"</A>
            </header>
        </div>
    }
}

#[component]
fn ReportsPage() -> impl IntoView {
    view! {
        <div class="app">
            <header>
                <h1>"Reports"</h1>
                <A href="/app/leads">"Back to Leads"</A>
            </header>
        </div>
    }
}
