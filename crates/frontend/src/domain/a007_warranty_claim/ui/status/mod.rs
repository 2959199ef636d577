use crate::domain::a007_warranty_claim::api;
use crate::shared::icons::icon;
use contracts::domain::a007_warranty_claim::aggregate::WarrantyClaim;
use contracts::domain::a007_warranty_claim::status::{ClaimStatus, StatusUpdateRequest};
use contracts::domain::common::validation::max_chars;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Options for the status select: the statuses reachable from `current`,
/// plus `current` itself, appended when the backend sent a value outside
/// the fixed set.
fn status_options(current: &ClaimStatus) -> Vec<ClaimStatus> {
    let mut options: Vec<ClaimStatus> = ClaimStatus::ALL
        .iter()
        .filter(|s| *s == current || current.can_transition_to(s))
        .cloned()
        .collect();
    if !options.contains(current) {
        options.push(current.clone());
    }
    options
}

#[component]
pub fn ClaimStatusForm(
    claim: WarrantyClaim,
    on_saved: Callback<WarrantyClaim>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let options = status_options(&claim.status);
    let status = RwSignal::new(claim.status.clone());
    let notes = RwSignal::new(claim.status_notes.clone().unwrap_or_default());
    let assigned_to = RwSignal::new(claim.assigned_to.clone().unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let claim = StoredValue::new(claim);

    let save = move |_| {
        let request = StatusUpdateRequest {
            status: status.get_untracked(),
            status_notes: notes.get_untracked(),
            assigned_to: assigned_to.get_untracked(),
        };
        if let Err(e) = max_chars("status_notes", &request.status_notes, 1000, "Status notes") {
            error.set(Some(e.message));
            return;
        }
        let mut updated = claim.get_value();
        let Some(id) = updated.id.clone() else {
            error.set(Some("Claim has no id".into()));
            return;
        };
        saving.set(true);
        spawn_local(async move {
            match api::update_status(&id, &request).await {
                Ok(()) => {
                    updated.status = request.status;
                    updated.status_notes = Some(request.status_notes);
                    updated.assigned_to = Some(request.assigned_to);
                    on_saved.run(updated);
                }
                Err(e) => {
                    log::error!("Failed to update claim status: {}", e);
                    error.set(Some(e));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="details-container claim-status">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="form-group">
                <label for="status">"Status"</label>
                <select id="status" on:change=move |ev| status.set(ClaimStatus::from(event_target_value(&ev)))>
                    {options.into_iter().map(|s| {
                        let value = s.as_str().to_string();
                        let label = s.label().to_string();
                        view! {
                            <option value=value selected=move || status.get() == s>{label}</option>
                        }
                    }).collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for="assigned_to">"Assigned to"</label>
                <input
                    type="text"
                    id="assigned_to"
                    prop:value=move || assigned_to.get()
                    on:input=move |ev| assigned_to.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="notes">"Notes"</label>
                <textarea
                    id="notes"
                    rows="4"
                    maxlength="1000"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                />
                <span class="char-counter">{move || format!("{}/1000", notes.with(|n| n.chars().count()))}</span>
            </div>
            <div class="details-actions">
                <button class="button button--primary" on:click=save disabled=move || saving.get()>
                    {icon("check")}
                    "Update status"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_is_offered() {
        let known = status_options(&ClaimStatus::Sent);
        assert_eq!(known.len(), 5);
        let odd = status_options(&ClaimStatus::from("escalated".to_string()));
        assert_eq!(odd.len(), 6);
        assert_eq!(odd[5].as_str(), "escalated");
    }

    #[test]
    fn test_options_follow_allowed_transitions() {
        let current = ClaimStatus::Completed;
        let options = status_options(&current);
        for status in ClaimStatus::ALL.iter() {
            let offered = options.contains(status);
            assert_eq!(offered, *status == current || current.can_transition_to(status));
        }
        assert!(options.contains(&ClaimStatus::Submitted));
    }
}
