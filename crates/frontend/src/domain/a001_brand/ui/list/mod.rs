use crate::domain::a001_brand::ui::details::BrandDetails;
use crate::shared::components::{ActiveBadge, ErrorBanner, PaginationControls, SuccessBanner};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SortableHeaderCell};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_list::ResourceListVm;
use contracts::domain::a001_brand::aggregate::Brand;
use leptos::prelude::*;

/// Which rows the active/inactive dropdown lets through.
fn active_filter_matches(filter: &str, brand: &Brand) -> bool {
    match filter {
        "active" => brand.is_active,
        "inactive" => !brand.is_active,
        _ => true,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BrandList() -> impl IntoView {
    let config = use_config();
    let modal_stack = use_modal_stack();
    let vm = ResourceListVm::<Brand>::new("name", config.default_page_size);
    let active_filter = RwSignal::new(String::from("all"));
    vm.load();

    let open_form = move |initial: Option<Brand>| {
        let title = match &initial {
            Some(b) => format!("Edit brand: {}", b.name),
            None => "New brand".to_string(),
        };
        modal_stack.push(Some(title), Some("brand-details-modal"), move |handle| {
            view! {
                <BrandDetails
                    initial=initial.clone()
                    on_saved=Callback::new(move |saved: Brand| {
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
        let filter = active_filter.get();
        vm.page(|b: &Brand| active_filter_matches(&filter, b))
    });
    let sort = Signal::derive(move || vm.list.get().sort);

    view! {
        <div class="content">
            <div class="header">
                <h2>"Brands"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_form(None)>
                        {icon("plus")}
                        "New brand"
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
                    placeholder="Search brands..."
                />
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        active_filter.set(event_target_value(&ev));
                        vm.go_to(1);
                    }
                >
                    <option value="all">"All"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
            </div>

            <Show when=move || !vm.loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <SortableHeaderCell label="Name" field="name" sort=sort on_sort=Callback::new(move |f| vm.toggle_sort(f)) />
                                <th class="table__header-cell">"Website"</th>
                                <SortableHeaderCell label="Categories" field="categories" sort=sort on_sort=Callback::new(move |f| vm.toggle_sort(f)) />
                                <SortableHeaderCell label="Status" field="is_active" sort=sort on_sort=Callback::new(move |f| vm.toggle_sort(f)) />
                                <SortableHeaderCell label="Created" field="created_at" sort=sort on_sort=Callback::new(move |f| vm.toggle_sort(f)) />
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let (rows, _) = page.get();
                                if rows.is_empty() {
                                    return view! {
                                        <tr><td colspan="6" class="table__empty">"No brands found"</td></tr>
                                    }.into_any();
                                }
                                rows.into_iter().map(|brand| {
                                    let for_edit = brand.clone();
                                    let id = brand.id.clone();
                                    let name = brand.name.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <div class="brand-cell">
                                                    {(!brand.logo_url.is_empty()).then(|| view! {
                                                        <img class="brand-cell__logo" src=brand.logo_url.clone() alt="" />
                                                    })}
                                                    <span>{brand.name.clone()}</span>
                                                </div>
                                            </td>
                                            <td class="table__cell">{brand.website_url.clone()}</td>
                                            <td class="table__cell">{brand.category_ids.len()}</td>
                                            <td class="table__cell"><ActiveBadge active=brand.is_active /></td>
                                            <td class="table__cell">{format_optional(brand.created_at.as_deref())}</td>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_filter() {
        let active = Brand::default();
        let inactive = Brand {
            is_active: false,
            ..Brand::default()
        };
        assert!(active_filter_matches("all", &inactive));
        assert!(active_filter_matches("active", &active));
        assert!(!active_filter_matches("active", &inactive));
        assert!(active_filter_matches("inactive", &inactive));
    }
}
