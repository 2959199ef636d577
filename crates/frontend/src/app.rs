use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("Admin console using API {}", config.api_base_url);
    provide_context(config);

    provide_context(AppGlobalContext::new());

    // One modal stack for detail/edit dialogs of every screen.
    provide_context(ModalStackService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ModalHost />
        </AuthProvider>
    }
}
