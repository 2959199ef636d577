use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::shared::components::{ActiveBadge, ErrorBanner, PaginationControls, SuccessBanner};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SortableHeaderCell};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_list::ResourceListVm;
use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let config = use_config();
    let modal_stack = use_modal_stack();
    let vm = ResourceListVm::<Category>::new("display_order", config.default_page_size);
    vm.load();

    let open_form = move |initial: Option<Category>| {
        let title = match &initial {
            Some(c) => format!("Edit category: {}", c.name),
            None => "New category".to_string(),
        };
        modal_stack.push(Some(title), Some("category-details-modal"), move |handle| {
            view! {
                <CategoryDetails
                    initial=initial.clone()
                    on_saved=Callback::new(move |saved: Category| {
                        handle.close();
                        vm.saved(&saved);
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let page = Memo::new(move |_| vm.page(|_: &Category| true));
    let sort = Signal::derive(move || vm.list.get().sort);
    let on_sort = Callback::new(move |f| vm.toggle_sort(f));

    view! {
        <div class="content">
            <div class="header">
                <h2>"Categories"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_form(None)>
                        {icon("plus")}
                        "New category"
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
                    placeholder="Search categories..."
                />
            </div>

            <Show when=move || !vm.loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <SortableHeaderCell label="#" field="display_order" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Name" field="name" sort=sort on_sort=on_sort />
                                <th class="table__header-cell">"Description"</th>
                                <SortableHeaderCell label="Status" field="is_active" sort=sort on_sort=on_sort />
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || page.get().0
                                key=|c| (c.id.clone(), c.name.clone(), c.description.clone(), c.display_order, c.is_active)
                                children=move |category| {
                                    let for_edit = category.clone();
                                    let id = category.id.clone();
                                    let name = category.name.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{category.display_order}</td>
                                            <td class="table__cell">{category.name.clone()}</td>
                                            <td class="table__cell table__cell--muted">{category.description.clone()}</td>
                                            <td class="table__cell"><ActiveBadge active=category.is_active /></td>
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
                                }
                            />
                        </tbody>
                    </table>
                    <Show when=move || page.get().0.is_empty()>
                        <p class="table__empty">"No categories found"</p>
                    </Show>
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
