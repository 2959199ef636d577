use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_labels::tab_icon_for_key;
use crate::layout::tabs::{tab_label_for_key, TAB_KEYS};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-sidebar__content">
            {TAB_KEYS.into_iter().map(|key| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == key
                        on:click=move |_| ctx.open_tab(key)
                        title=tab_label_for_key(key)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(tab_icon_for_key(key))}
                            <Show when=move || ctx.left_open.get()>
                                <span>{tab_label_for_key(key)}</span>
                            </Show>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
