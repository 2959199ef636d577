use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Overlay plus dialog surface with an optional title bar.
///
/// Closing from the overlay requires both mouse down and mouse up on the
/// overlay itself, so a text selection dragged out of the dialog does not
/// dismiss it.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    #[prop(optional_no_strip)] title: Option<String>,
    #[prop(optional)] z_index: Option<i32>,
    #[prop(optional_no_strip)] modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let pressed_on_overlay = RwSignal::new(false);

    let is_overlay_target = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    // Deferred: the overlay must not be removed during its own click dispatch.
    let close_later = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let surface_class = match modal_class {
        Some(cls) if !cls.is_empty() => format!("modal {}", cls),
        _ => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", z_index)
            on:mousedown=move |ev| pressed_on_overlay.set(is_overlay_target(&ev))
            on:click=move |ev| {
                let close = pressed_on_overlay.get_untracked() && is_overlay_target(&ev);
                pressed_on_overlay.set(false);
                if close {
                    close_later();
                }
            }
        >
            <div class=surface_class on:click=|ev| ev.stop_propagation()>
                {title.map(|t| view! {
                    <div class="modal__header">
                        <h3 class="modal__title">{t}</h3>
                        <button class="modal__close" title="Close" on:click=move |_| close_later()>
                            {icon("x")}
                        </button>
                    </div>
                })}
                <div class="modal__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
