//! List screen widgets: debounced search box and sortable header cell.

use contracts::shared::list_state::SortState;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::config::use_config;
use crate::shared::icons::icon;

/// Search box that reports its value after a quiet period.
///
/// A pending report is dropped on unmount; Enter and the clear button report
/// immediately.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let delay = use_config().search_debounce_ms;

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let cancel_pending = move || {
        pending.update_value(|slot| {
            if let Some(timeout) = slot.take() {
                timeout.cancel();
            }
        });
    };

    on_cleanup(cancel_pending);

    let schedule = move |text: String| {
        cancel_pending();
        let timeout = Timeout::new(delay, move || on_change.run(text));
        pending.set_value(Some(timeout));
    };

    let submit_now = move || {
        cancel_pending();
        on_change.run(input_value.get_untracked());
    };

    let clear = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                class:search-input__field--active=move || !value.get().trim().is_empty()
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    set_input_value.set(text.clone());
                    schedule(text);
                }
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit_now();
                    }
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Table header cell that toggles the sort on click.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    field: &'static str,
    #[prop(into)] sort: Signal<SortState>,
    on_sort: Callback<String>,
) -> impl IntoView {
    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            on:click=move |_| on_sort.run(field.to_string())
        >
            {label}
            <span class=move || {
                if sort.get().field == field { "sort-indicator sort-indicator--active" } else { "sort-indicator" }
            }>
                {move || sort.get().indicator(field)}
            </span>
        </th>
    }
}
