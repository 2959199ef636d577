pub mod global_context;
pub mod sidebar;
pub mod tabs;
pub mod top_header;

use global_context::{use_global_context, AppGlobalContext};
use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Dashboard shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |        Active screen         |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(
    /// Screen to open instead of the one in `?tab=`.
    #[prop(optional)]
    initial_tab: Option<&'static str>,
) -> impl IntoView {
    let ctx: AppGlobalContext = use_global_context();
    ctx.init_router_integration(initial_tab);

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div
                    data-zone="left"
                    class="left"
                    class:left--collapsed=move || !ctx.left_open.get()
                >
                    <Sidebar />
                </div>

                <div class="app-main">
                    <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
                        {move || tabs::render_tab_content(&ctx.active.get())}
                    </div>
                </div>
            </div>
        </div>
    }
}
