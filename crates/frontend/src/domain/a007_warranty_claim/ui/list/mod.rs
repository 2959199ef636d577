pub mod state;

use self::state::{create_state, ClaimListState};
use crate::domain::a007_warranty_claim::api;
use crate::domain::a007_warranty_claim::ui::details::ClaimDetails;
use crate::domain::a007_warranty_claim::ui::edit::ClaimEditForm;
use crate::domain::a007_warranty_claim::ui::stats::ClaimStatsCards;
use crate::domain::a007_warranty_claim::ui::status::ClaimStatusForm;
use crate::shared::components::{ErrorBanner, PaginationControls, StatusBadge, SuccessBanner};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_optional;
use crate::shared::download::open_html_in_new_window;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_list::confirm;
use contracts::domain::a007_warranty_claim::aggregate::WarrantyClaim;
use contracts::domain::a007_warranty_claim::status::ClaimStatus;
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn WarrantyClaimList() -> impl IntoView {
    let config = use_config();
    let modal_stack = use_modal_stack();
    let state = create_state(config.default_page_size);
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let stats_refresh = RwSignal::new(0u32);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            let query = state.with_untracked(|s| s.query());
            match api::list(&query).await {
                Ok(paged) => {
                    log::debug!("claims page {} -> {} item(s)", query.page, paged.items.len());
                    state.update(|s| {
                        paged.apply_to(&mut s.window);
                        s.items = paged.items;
                    });
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load warranty claims: {}", e);
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

    let reload_all = move || {
        load_items();
        stats_refresh.update(|n| *n += 1);
    };

    load_items();

    let refilter = move |apply: Box<dyn FnOnce(&mut ClaimListState)>| {
        state.update(|s| {
            apply(s);
            s.window.page = 1;
        });
        load_items();
    };

    let clear_filters = move |_| {
        refilter(Box::new(|s| s.filters = Default::default()));
    };

    let on_claim_saved = move |saved: WarrantyClaim| {
        success.set(Some(format!("Claim {} updated", saved.claim_number)));
        reload_all();
    };

    let open_details = move |claim: WarrantyClaim| {
        let Some(id) = claim.id.clone() else { return };
        let title = format!("Warranty claim {}", claim.claim_number);
        modal_stack.push(Some(title), Some("claim-details-modal"), move |_handle| {
            view! {
                <ClaimDetails id=id.clone() on_changed=Some(Callback::new(on_claim_saved)) />
            }
            .into_any()
        });
    };

    let open_edit = move |claim: WarrantyClaim| {
        let title = format!("Edit claim {}", claim.claim_number);
        modal_stack.push(Some(title), Some("claim-edit-modal"), move |handle| {
            view! {
                <ClaimEditForm
                    claim=claim.clone()
                    on_saved=Callback::new(move |saved: WarrantyClaim| {
                        handle.close();
                        on_claim_saved(saved);
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let open_status = move |claim: WarrantyClaim| {
        let title = format!("Update status: {}", claim.claim_number);
        modal_stack.push(Some(title), Some("claim-status-modal"), move |handle| {
            view! {
                <ClaimStatusForm
                    claim=claim.clone()
                    on_saved=Callback::new(move |saved: WarrantyClaim| {
                        handle.close();
                        on_claim_saved(saved);
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let print_claim = move |id: RecordId| {
        spawn_local(async move {
            let result = match api::print_html(&id).await {
                Ok(html) => open_html_in_new_window(&html),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                error.set(Some(format!("Print failed: {}", e)));
            }
        });
    };

    // The row disappears at once and is put back if the request fails.
    let delete_claim = move |id: RecordId, number: String| {
        if !confirm(&format!("Delete warranty claim {}?", number)) {
            return;
        }
        let Some((index, removed)) = state.try_update(|s| s.take_item(&id)).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    success.set(Some(format!("Claim {} deleted", number)));
                    stats_refresh.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("Failed to delete claim {}: {}", id, e);
                    state.update(|s| s.restore_item(index, removed));
                    error.set(Some(format!("Could not delete claim {}: {}", number, e)));
                }
            }
        });
    };

    let filters = move || state.with(|s| s.filters.clone());

    view! {
        <div class="content">
            <div class="header">
                <h2>"Warranty claims"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| reload_all()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <ClaimStatsCards refresh=Signal::derive(move || stats_refresh.get()) />

            <ErrorBanner error=error />
            <SuccessBanner message=success />

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || state.get().filters.search)
                    on_change=Callback::new(move |s: String| refilter(Box::new(move |st| st.filters.search = s)))
                    placeholder="Claim number, customer, email..."
                />
                <select
                    class="filter-panel__select"
                    prop:value=move || filters().status
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        refilter(Box::new(move |st| st.filters.status = v));
                    }
                >
                    <option value="">"All statuses"</option>
                    {ClaimStatus::ALL.iter().map(|s| view! {
                        <option value=s.as_str().to_string()>{s.label().to_string()}</option>
                    }).collect_view()}
                </select>
                <input
                    type="text"
                    class="filter-panel__input"
                    placeholder="Claim type"
                    prop:value=move || filters().claim_type
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        refilter(Box::new(move |st| st.filters.claim_type = v));
                    }
                />
                <label class="filter-panel__label">
                    "From"
                    <input
                        type="date"
                        prop:value=move || filters().start_date
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            refilter(Box::new(move |st| st.filters.start_date = v));
                        }
                    />
                </label>
                <label class="filter-panel__label">
                    "To"
                    <input
                        type="date"
                        prop:value=move || filters().end_date
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            refilter(Box::new(move |st| st.filters.end_date = v));
                        }
                    />
                </label>
                <Show when=move || state.with(|s| s.has_filters())>
                    <button class="button button--secondary button--small" on:click=clear_filters>
                        {icon("x")}
                        "Clear filters"
                    </button>
                </Show>
            </div>

            <div class="table-container">
                <Show when=move || loading.get()>
                    <div class="table__loading">"Loading..."</div>
                </Show>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Claim #"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Products"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Submitted"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = state.with(|s| s.items.clone());
                            if items.is_empty() && !loading.get() {
                                return view! {
                                    <tr><td colspan="6" class="table__empty">"No warranty claims found"</td></tr>
                                }.into_any();
                            }
                            items.into_iter().map(|c| {
                                let row = StoredValue::new(c.clone());
                                let number = c.claim_number.clone();
                                let id = c.id.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--mono">
                                            <a href="#" on:click=move |ev| {
                                                ev.prevent_default();
                                                open_details(row.get_value());
                                            }>{c.claim_number.clone()}</a>
                                        </td>
                                        <td class="table__cell">
                                            <div>{c.customer.full_name.clone()}</div>
                                            <div class="table__subtext">{c.customer.email.clone()}</div>
                                        </td>
                                        <td class="table__cell">{c.product_summary()}</td>
                                        <td class="table__cell">
                                            <StatusBadge status=c.status.as_str().to_string() label=c.status.label().to_string() />
                                        </td>
                                        <td class="table__cell">{format_optional(c.created_at.as_deref())}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="View" on:click=move |_| open_details(row.get_value())>
                                                {icon("eye")}
                                            </button>
                                            <button class="button button--icon" title="Edit" on:click=move |_| open_edit(row.get_value())>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon" title="Update status" on:click=move |_| open_status(row.get_value())>
                                                {icon("check")}
                                            </button>
                                            {id.map(|id| {
                                                let print_id = id.clone();
                                                view! {
                                                    <button class="button button--icon" title="Print" on:click=move |_| print_claim(print_id.clone())>
                                                        {icon("printer")}
                                                    </button>
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title="Delete"
                                                        on:click=move |_| delete_claim(id.clone(), number.clone())
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                }
                                            })}
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
