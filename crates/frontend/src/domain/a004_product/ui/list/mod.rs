pub mod state;

use self::state::{create_state, ProductListState};
use crate::domain::a004_product::api::ProductService;
use crate::domain::a004_product::ui::details::ProductDetails;
use crate::shared::components::{ActiveBadge, ErrorBanner, PaginationControls, SuccessBanner};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SortableHeaderCell};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_api;
use crate::shared::resource_list::confirm;
use contracts::domain::a001_brand::aggregate::Brand;
use contracts::domain::a003_subcategory::aggregate::Subcategory;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = use_config();
    let modal_stack = use_modal_stack();
    let state = create_state(config.default_page_size);
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let brands = RwSignal::new(Vec::<Brand>::new());
    let subcategories = RwSignal::new(Vec::<Subcategory>::new());

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            let query = state.with_untracked(|s| s.query());
            match ProductService::new().list(&query).await {
                Ok(paged) => {
                    log::debug!("products page {} -> {} item(s)", query.page, paged.items.len());
                    state.update(|s| {
                        paged.apply_to(&mut s.window);
                        s.items = paged.items;
                    });
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    state.update(|s| {
                        s.items.clear();
                        s.window.reset_empty();
                    });
                    error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    load_items();
    spawn_local(async move {
        if let Ok(list) = resource_api::fetch_all::<Brand>().await {
            brands.set(list);
        }
        if let Ok(list) = resource_api::fetch_all::<Subcategory>().await {
            subcategories.set(list);
        }
    });

    // Any filter change starts over from page one.
    let refilter = move |apply: Box<dyn FnOnce(&mut ProductListState)>| {
        state.update(|s| {
            apply(s);
            s.window.page = 1;
        });
        load_items();
    };

    let open_form = move |id: Option<RecordId>| {
        let title = if id.is_some() { "Edit product" } else { "New product" };
        modal_stack.push(Some(title.to_string()), Some("product-details-modal"), move |handle| {
            view! {
                <ProductDetails
                    id=id.clone()
                    on_saved=Callback::new(move |saved: Product| {
                        handle.close();
                        success.set(Some(format!("Product '{}' saved", saved.name)));
                        load_items();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let delete_product = move |id: RecordId, name: String| {
        if !confirm(&format!("Delete product \"{}\"?", name)) {
            return;
        }
        spawn_local(async move {
            match ProductService::new().delete(&id).await {
                Ok(()) => {
                    success.set(Some(format!("Product '{}' deleted", name)));
                    load_items();
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let sort = Signal::derive(move || state.get().sort);
    let on_sort = Callback::new(move |field: String| {
        state.update(|s| s.sort.toggle(&field));
        load_items();
    });

    view! {
        <div class="content">
            <div class="header">
                <h2>"Products"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_form(None)>
                        {icon("plus")}
                        "New product"
                    </button>
                    <button class="button button--secondary" on:click=move |_| load_items()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <ErrorBanner error=error />
            <SuccessBanner message=success />

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || state.get().search)
                    on_change=Callback::new(move |s: String| refilter(Box::new(move |st| st.search = s)))
                    placeholder="Search by name or SKU..."
                />
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        refilter(Box::new(move |st| st.brand_id = v));
                    }
                >
                    <option value="">"All brands"</option>
                    {move || brands.get().into_iter().filter_map(|b| {
                        let value = b.id.as_ref()?.to_string();
                        Some(view! { <option value=value>{b.name}</option> })
                    }).collect_view()}
                </select>
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        refilter(Box::new(move |st| st.subcategory_id = v));
                    }
                >
                    <option value="">"All subcategories"</option>
                    {move || subcategories.get().into_iter().filter_map(|s| {
                        let value = s.id.as_ref()?.to_string();
                        Some(view! { <option value=value>{s.name}</option> })
                    }).collect_view()}
                </select>
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        refilter(Box::new(move |st| st.active = v));
                    }
                >
                    <option value="">"Any status"</option>
                    <option value="true">"Active"</option>
                    <option value="false">"Inactive"</option>
                </select>
            </div>

            <div class="table-container">
                <Show when=move || loading.get()>
                    <div class="table__loading">"Loading..."</div>
                </Show>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Image"</th>
                            <SortableHeaderCell label="SKU" field="sku" sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Name" field="name" sort=sort on_sort=on_sort />
                            <th class="table__header-cell">"Brand"</th>
                            <SortableHeaderCell label="Price" field="price" sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Stock" field="stock" sort=sort on_sort=on_sort />
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = state.with(|s| s.items.clone());
                            if items.is_empty() && !loading.get() {
                                return view! {
                                    <tr><td colspan="8" class="table__empty">"No products found"</td></tr>
                                }.into_any();
                            }
                            items.into_iter().map(|p| {
                                let thumb = p.primary_image().map(|img| img.image_url.clone());
                                let has_discount = p.effective_price() < p.price;
                                let id = p.id.clone();
                                let id_delete = p.id.clone();
                                let name = p.name.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            {match thumb {
                                                Some(src) => view! { <img class="table__thumb" src=src alt="" /> }.into_any(),
                                                None => view! { <span class="table__thumb table__thumb--empty">{icon("image")}</span> }.into_any(),
                                            }}
                                        </td>
                                        <td class="table__cell table__cell--mono">{p.sku.clone()}</td>
                                        <td class="table__cell">
                                            {p.name.clone()}
                                            {p.is_featured.then(|| view! { <span class="table__flag" title="Featured">{icon("star")}</span> })}
                                        </td>
                                        <td class="table__cell">{p.brand_name.clone().unwrap_or_default()}</td>
                                        <td class="table__cell table__cell--number">
                                            {has_discount.then(|| view! { <s class="price--old">{format_money(p.price)}</s> " " })}
                                            {format_money(p.effective_price())}
                                        </td>
                                        <td class="table__cell table__cell--number">{p.stock_quantity}</td>
                                        <td class="table__cell"><ActiveBadge active=p.is_active /></td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Edit" on:click=move |_| open_form(id.clone())>
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--icon button--danger"
                                                title="Delete"
                                                on:click=move |_| {
                                                    if let Some(id) = id_delete.clone() {
                                                        delete_product(id, name.clone());
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
                window=Signal::derive(move || state.get().window)
                on_page_change=Callback::new(move |p: usize| {
                    state.update(|s| s.window.go_to(p));
                    load_items();
                })
                on_page_size_change=Callback::new(move |size: usize| {
                    state.update(|s| s.window.set_limit(size));
                    load_items();
                })
                page_size_options=config.page_size_options.clone()
            />
        </div>
    }
}
