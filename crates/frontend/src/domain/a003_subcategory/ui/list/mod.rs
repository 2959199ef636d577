use crate::domain::a003_subcategory::ui::details::SubcategoryDetails;
use crate::shared::components::{ActiveBadge, ErrorBanner, PaginationControls, SuccessBanner};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SortableHeaderCell};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_api;
use crate::shared::resource_list::ResourceListVm;
use contracts::domain::a002_category::aggregate::{category_name, Category};
use contracts::domain::a003_subcategory::aggregate::Subcategory;
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn SubcategoryList() -> impl IntoView {
    let config = use_config();
    let modal_stack = use_modal_stack();
    let vm = ResourceListVm::<Subcategory>::new("display_order", config.default_page_size);
    let categories = RwSignal::new(Vec::<Category>::new());
    let category_filter = RwSignal::new(None::<RecordId>);

    vm.load();
    spawn_local(async move {
        match resource_api::fetch_all::<Category>().await {
            Ok(list) => categories.set(list),
            Err(e) => log::warn!("Category filter unavailable: {}", e),
        }
    });

    let open_form = move |initial: Option<Subcategory>| {
        let title = match &initial {
            Some(s) => format!("Edit subcategory: {}", s.name),
            None => "New subcategory".to_string(),
        };
        modal_stack.push(Some(title), Some("subcategory-details-modal"), move |handle| {
            view! {
                <SubcategoryDetails
                    initial=initial.clone()
                    on_saved=Callback::new(move |saved: Subcategory| {
                        handle.close();
                        vm.saved(&saved);
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let page = Memo::new(move |_| {
        let filter = category_filter.get();
        vm.page(|s: &Subcategory| filter.is_none() || s.category_id == filter)
    });
    let sort = Signal::derive(move || vm.list.get().sort);
    let on_sort = Callback::new(move |f| vm.toggle_sort(f));

    view! {
        <div class="content">
            <div class="header">
                <h2>"Subcategories"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_form(None)>
                        {icon("plus")}
                        "New subcategory"
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <ErrorBanner error=vm.error />
            <SuccessBanner message=vm.success />

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || vm.list.get().search)
                    on_change=Callback::new(move |s| vm.set_search(s))
                    placeholder="Search subcategories..."
                />
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        category_filter.set(RecordId::from_form_value(&event_target_value(&ev)));
                        vm.go_to(1);
                    }
                >
                    <option value="">"All categories"</option>
                    {move || categories.get().into_iter().filter_map(|c| {
                        let value = c.id.as_ref()?.to_string();
                        Some(view! { <option value=value>{c.name}</option> })
                    }).collect_view()}
                </select>
            </div>

            <Show when=move || !vm.loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <SortableHeaderCell label="#" field="display_order" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Name" field="name" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Category" field="category" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Status" field="is_active" sort=sort on_sort=on_sort />
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let (rows, _) = page.get();
                                if rows.is_empty() {
                                    return view! {
                                        <tr><td colspan="5" class="table__empty">"No subcategories found"</td></tr>
                                    }.into_any();
                                }
                                rows.into_iter().map(|sub| {
                                    let parent = categories.with(|cats| category_name(cats, sub.category_id.as_ref()));
                                    let for_edit = sub.clone();
                                    let id = sub.id.clone();
                                    let name = sub.name.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{sub.display_order}</td>
                                            <td class="table__cell">{sub.name.clone()}</td>
                                            <td class="table__cell">{parent}</td>
                                            <td class="table__cell"><ActiveBadge active=sub.is_active /></td>
                                            <td class="table__cell table__cell--actions">
                                                <button class="button button--icon" title="Edit" on:click=move |_| open_form(Some(for_edit.clone()))>
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Delete"
                                                    on:click=move |_| {
                                                        if let Some(id) = id.clone() {
                                                            vm.delete(id, name.clone());
                                                        }
                                                    }
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }}
                        </tbody>
                    </table>
                </div>

                <PaginationControls
                    window=Signal::derive(move || page.get().1)
                    on_page_change=Callback::new(move |p| vm.go_to(p))
                    on_page_size_change=Callback::new(move |s| vm.set_page_size(s))
                    page_size_options=config.page_size_options.clone()
                />
            </Show>
        </div>
    }
}
