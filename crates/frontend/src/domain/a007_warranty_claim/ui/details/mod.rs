mod gallery;

pub use gallery::FaultGallery;

use super::edit::ClaimEditForm;
use super::status::ClaimStatusForm;
use crate::domain::a007_warranty_claim::api;
use crate::shared::api_utils::asset_base;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::format_optional;
use crate::shared::download::open_html_in_new_window;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use contracts::domain::a007_warranty_claim::aggregate::WarrantyClaim;
use contracts::domain::a007_warranty_claim::proof::ProofState;
use contracts::domain::common::{absolutize_url, RecordId};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn text_or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Read-only claim view. Edit and status forms open as modals stacked on top
/// of it; `on_changed` fires after either of them saves.
#[component]
pub fn ClaimDetails(
    id: RecordId,
    #[prop(optional_no_strip)] on_changed: Option<Callback<WarrantyClaim>>,
) -> impl IntoView {
    let modal_stack = use_modal_stack();
    let claim = RwSignal::new(None::<WarrantyClaim>);
    let error = RwSignal::new(None::<String>);
    let printing = RwSignal::new(false);
    let id = StoredValue::new(id);

    spawn_local(async move {
        let id = id.get_value();
        match api::get(&id).await {
            Ok(c) => claim.set(Some(c)),
            Err(e) => {
                log::error!("Failed to load warranty claim {}: {}", id, e);
                error.set(Some(e));
            }
        }
    });

    let apply_saved = move |saved: WarrantyClaim| {
        claim.set(Some(saved.clone()));
        if let Some(cb) = on_changed {
            cb.run(saved);
        }
    };

    let open_edit = move |_| {
        let Some(current) = claim.get_untracked() else { return };
        let title = format!("Edit claim {}", current.claim_number);
        modal_stack.push(Some(title), Some("claim-edit-modal"), move |handle| {
            view! {
                <ClaimEditForm
                    claim=current.clone()
                    on_saved=Callback::new(move |saved: WarrantyClaim| {
                        handle.close();
                        apply_saved(saved);
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let open_status = move |_| {
        let Some(current) = claim.get_untracked() else { return };
        let title = format!("Update status: {}", current.claim_number);
        modal_stack.push(Some(title), Some("claim-status-modal"), move |handle| {
            view! {
                <ClaimStatusForm
                    claim=current.clone()
                    on_saved=Callback::new(move |saved: WarrantyClaim| {
                        handle.close();
                        apply_saved(saved);
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let print = move |_| {
        let id = id.get_value();
        printing.set(true);
        spawn_local(async move {
            let result = match api::print_html(&id).await {
                Ok(html) => open_html_in_new_window(&html),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                error.set(Some(format!("Print failed: {}", e)));
            }
            printing.set(false);
        });
    };

    let images = Signal::derive(move || claim.with(|c| c.as_ref().map(|c| c.fault_images.clone()).unwrap_or_default()));
    let claim_number = Signal::derive(move || claim.with(|c| c.as_ref().map(|c| c.claim_number.clone()).unwrap_or_default()));

    view! {
        <div class="details-container claim-details">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <Show
                when=move || claim.with(|c| c.is_some())
                fallback=move || view! {
                    <Show when=move || error.with(|e| e.is_none())>
                        <div class="loading"><thaw::Spinner /></div>
                    </Show>
                }
            >
                <div class="details-actions">
                    <button class="button button--primary" on:click=open_edit>
                        {icon("edit")} "Edit"
                    </button>
                    <button class="button button--secondary" on:click=open_status>
                        {icon("check")} "Update status"
                    </button>
                    <button class="button button--secondary" disabled=move || printing.get() on:click=print>
                        {icon("printer")} {move || if printing.get() { "Preparing..." } else { "Print" }}
                    </button>
                </div>

                {move || claim.get().map(|c| {
                    let proof = match c.proof.state() {
                        ProofState::Unset => view! { <span>"Not provided"</span> }.into_any(),
                        ProofState::Invoice { number } => {
                            view! { <span>{format!("Invoice {}", text_or_dash(Some(number)))}</span> }.into_any()
                        }
                        ProofState::Upload { path: Some(path) } => {
                            let href = absolutize_url(&asset_base(), path);
                            view! { <a href=href target="_blank" rel="noopener">"View uploaded file"</a> }.into_any()
                        }
                        ProofState::Upload { path: None } => view! { <span>"Upload pending"</span> }.into_any(),
                    };
                    view! {
                        <div class="claim-details__summary">
                            <div>
                                <span class="label">"Claim"</span>
                                <strong>{c.claim_number.clone()}</strong>
                            </div>
                            <div>
                                <span class="label">"Type"</span>
                                {text_or_dash(Some(&c.claim_type))}
                            </div>
                            <div>
                                <span class="label">"Status"</span>
                                <StatusBadge status=c.status.as_str().to_string() label=c.status.label().to_string() />
                            </div>
                            <div>
                                <span class="label">"Submitted"</span>
                                {format_optional(c.created_at.as_deref())}
                            </div>
                        </div>

                        <div class="form-row">
                            <fieldset class="form-fieldset">
                                <legend>"Customer"</legend>
                                <div>{c.customer.full_name.clone()}</div>
                                <div><a href=format!("mailto:{}", c.customer.email)>{c.customer.email.clone()}</a></div>
                                <div>{text_or_dash(Some(&c.customer.phone))}</div>
                                <div class="multiline">{text_or_dash(Some(&c.customer.address))}</div>
                            </fieldset>
                            <fieldset class="form-fieldset">
                                <legend>"Handling"</legend>
                                <div><span class="label">"Assigned to"</span> {text_or_dash(c.assigned_to.as_deref())}</div>
                                <div><span class="label">"Proof of purchase"</span> {proof}</div>
                                <div class="multiline"><span class="label">"Notes"</span> {text_or_dash(c.status_notes.as_deref())}</div>
                            </fieldset>
                        </div>

                        <h4>{format!("Products ({})", c.product_count())}</h4>
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Model"</th>
                                    <th class="table__header-cell">"Serial"</th>
                                    <th class="table__header-cell">"Fault"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {c.products.as_slice().iter().map(|p| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{text_or_dash(Some(&p.model_number))}</td>
                                        <td class="table__cell">{text_or_dash(Some(&p.serial_number))}</td>
                                        <td class="table__cell multiline">{text_or_dash(Some(&p.fault_description))}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                        {c.common_fault_description.clone().filter(|d| !d.trim().is_empty()).map(|d| view! {
                            <div class="form-group">
                                <span class="label">"Common fault"</span>
                                <p class="multiline">{d}</p>
                            </div>
                        })}
                    }
                })}

                <FaultGallery images=images claim_number=claim_number />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_or_dash() {
        assert_eq!(text_or_dash(None), "-");
        assert_eq!(text_or_dash(Some("   ")), "-");
        assert_eq!(text_or_dash(Some(" A1 ")), "A1");
    }
}
