use super::products::ProductsEditor;
use super::view_model::ClaimEditViewModel;
use crate::shared::files::selected_files;
use crate::shared::icons::icon;
use contracts::domain::a007_warranty_claim::aggregate::WarrantyClaim;
use contracts::domain::a007_warranty_claim::proof::{ProofMethod, ProofState};
use leptos::prelude::*;

#[component]
pub fn ClaimEditForm(
    claim: WarrantyClaim,
    on_saved: Callback<WarrantyClaim>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ClaimEditViewModel::new(claim);
    let invalid = move |field: &'static str| vm.invalid_field.get() == Some(field);
    let method = move || vm.form.with(|c| c.proof.method);

    view! {
        <div class="details-container claim-edit">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <fieldset class="form-fieldset">
                <legend>"Customer"</legend>
                <div class="form-row">
                    <div class="form-group" class:form-group--invalid=move || invalid("full_name")>
                        <label for="full_name">"Full name"</label>
                        <input
                            type="text"
                            id="full_name"
                            prop:value=move || vm.form.get().customer.full_name
                            on:input=move |ev| vm.form.update(|c| c.customer.full_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group" class:form-group--invalid=move || invalid("email")>
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || vm.form.get().customer.email
                            on:input=move |ev| vm.form.update(|c| c.customer.email = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="phone">"Phone"</label>
                        <input
                            type="tel"
                            id="phone"
                            prop:value=move || vm.form.get().customer.phone
                            on:input=move |ev| vm.form.update(|c| c.customer.phone = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="claim_type">"Claim type"</label>
                        <input
                            type="text"
                            id="claim_type"
                            prop:value=move || vm.form.get().claim_type
                            on:input=move |ev| vm.form.update(|c| c.claim_type = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="address">"Address"</label>
                    <textarea
                        id="address"
                        rows="2"
                        prop:value=move || vm.form.get().customer.address
                        on:input=move |ev| vm.form.update(|c| c.customer.address = event_target_value(&ev))
                    />
                </div>
            </fieldset>

            <fieldset class="form-fieldset">
                <legend>"Proof of purchase"</legend>
                <div class="form-group form-group--inline">
                    <label>
                        <input
                            type="radio"
                            name="proof_method"
                            prop:checked=move || method() == Some(ProofMethod::Upload)
                            on:change=move |_| vm.switch_proof(ProofMethod::Upload)
                        />
                        " Upload receipt"
                    </label>
                    <label>
                        <input
                            type="radio"
                            name="proof_method"
                            prop:checked=move || method() == Some(ProofMethod::Invoice)
                            on:change=move |_| vm.switch_proof(ProofMethod::Invoice)
                        />
                        " Invoice number"
                    </label>
                </div>
                {move || match method() {
                    Some(ProofMethod::Upload) => {
                        let current = vm.form.with(|c| match c.proof.state() {
                            ProofState::Upload { path: Some(p) } => Some(p.to_string()),
                            _ => None,
                        });
                        view! {
                            <div class="form-group" class:form-group--invalid=move || invalid("proof_file")>
                                {current.map(|p| view! { <p class="hint">{format!("Current file: {}", p)}</p> })}
                                <input
                                    type="file"
                                    accept="image/*,application/pdf"
                                    on:change=move |ev| vm.set_proof_file(selected_files(&ev).into_iter().next())
                                />
                                {move || vm.proof_file_name.get().map(|n| view! { <span class="hint">{format!("Will upload: {}", n)}</span> })}
                            </div>
                        }.into_any()
                    }
                    Some(ProofMethod::Invoice) => view! {
                        <div class="form-group" class:form-group--invalid=move || invalid("invoice_number")>
                            <input
                                type="text"
                                placeholder="Invoice number"
                                prop:value=move || vm.form.with(|c| c.proof.invoice_number.clone().unwrap_or_default())
                                on:input=move |ev| vm.form.update(|c| c.proof.set_invoice_number(event_target_value(&ev)))
                            />
                        </div>
                    }.into_any(),
                    None => view! { <p class="hint">"No proof of purchase provided"</p> }.into_any(),
                }}
            </fieldset>

            <ProductsEditor vm=vm />

            <div class="form-group">
                <label for="common_fault">"Common fault description"</label>
                <textarea
                    id="common_fault"
                    rows="2"
                    prop:value=move || vm.form.with(|c| c.common_fault_description.clone().unwrap_or_default())
                    on:input=move |ev| vm.form.update(|c| c.common_fault_description = Some(event_target_value(&ev)))
                />
            </div>
            <div class="form-group" class:form-group--invalid=move || invalid("status_notes")>
                <label for="status_notes">"Status notes"</label>
                <textarea
                    id="status_notes"
                    rows="3"
                    maxlength="1000"
                    prop:value=move || vm.form.with(|c| c.status_notes.clone().unwrap_or_default())
                    on:input=move |ev| vm.form.update(|c| c.status_notes = Some(event_target_value(&ev)))
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
