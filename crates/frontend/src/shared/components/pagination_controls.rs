use crate::shared::icons::icon;
use contracts::shared::pagination::PageWindow;
use leptos::prelude::*;

/// Pager under a table. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] window: Signal<PageWindow>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let summary = move || {
        let w = window.get();
        if w.total == 0 {
            "No records".to_string()
        } else {
            format!("Showing {}-{} of {}", w.first_index() + 1, w.last_index(), w.total)
        }
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{summary}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !window.get().has_prev()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(window.get_untracked().page.saturating_sub(1))
                disabled=move || !window.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let w = window.get();
                    format!("Page {} of {}", w.page, w.total_pages())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(window.get_untracked().page + 1)
                disabled=move || !window.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(window.get_untracked().total_pages())
                disabled=move || !window.get().has_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || window.get().limit.to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || window.get().limit == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
