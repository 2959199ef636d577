use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// `/` and unknown paths go to the dashboard or to the login page.
#[component]
fn RootRedirect() -> impl IntoView {
    let auth = use_auth();
    let target = if auth.is_authenticated() {
        "/admin/dashboard"
    } else {
        "/admin/login"
    };
    view! { <Redirect path=target /> }
}

#[component]
fn GuardedShell(#[prop(optional)] initial_tab: Option<&'static str>) -> impl IntoView {
    view! {
        <RequireAdmin>
            {match initial_tab {
                Some(tab) => view! { <Shell initial_tab=tab /> }.into_any(),
                None => view! { <Shell /> }.into_any(),
            }}
        </RequireAdmin>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <RootRedirect /> }>
                <Route path=path!("/admin/login") view=LoginPage />
                <Route path=path!("/admin/dashboard") view=|| view! { <GuardedShell /> } />
                <Route path=path!("/orders") view=|| view! { <GuardedShell initial_tab="a006_order" /> } />
                <Route path=path!("/products") view=|| view! { <GuardedShell initial_tab="a004_product" /> } />
                <Route path=path!("/") view=RootRedirect />
            </Routes>
        </Router>
    }
}
