use leptos::prelude::*;

/// Error text above a table or form; the cross clears it.
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <button class="warning-box__close" on:click=move |_| error.set(None)>"×"</button>
                </div>
            }
        })
    }
}

#[component]
pub fn SuccessBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            view! {
                <div class="warning-box warning-box--success">
                    <span class="warning-box__text">{m}</span>
                    <button class="warning-box__close" on:click=move |_| message.set(None)>"×"</button>
                </div>
            }
        })
    }
}
