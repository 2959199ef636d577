use crate::domain::a007_warranty_claim::api;
use crate::shared::components::StatCard;
use contracts::domain::a007_warranty_claim::query::{ClaimStats, StatCard as StatCardData};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn icon_for(key: &str) -> &'static str {
    match key {
        "total" | "totalClaims" => "shield",
        k if k.contains("ompleted") => "check",
        k if k.contains("ejected") => "x",
        _ => "file-text",
    }
}

/// Claim counters from `GET /warrantyclaims/dashboard/stats`. Bump
/// `refresh` to reload.
#[component]
pub fn ClaimStatsCards(#[prop(optional, into)] refresh: Option<Signal<u32>>) -> impl IntoView {
    let cards = RwSignal::new(Vec::<StatCardData>::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if let Some(refresh) = refresh {
            refresh.track();
        }
        spawn_local(async move {
            match api::stats().await {
                Ok(stats) => {
                    cards.set(ClaimStats::cards(&stats));
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("Claim stats unavailable: {}", e);
                    error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="stat-cards">
            {move || error.get().map(|e| view! { <p class="hint">{format!("Statistics unavailable: {}", e)}</p> })}
            {move || cards.get().into_iter().map(|card| {
                let value = card.value;
                view! {
                    <StatCard
                        label=card.label.clone()
                        icon_name=icon_for(&card.key)
                        value=Signal::derive(move || Some(value))
                    />
                }
            }).collect_view()}
        </div>
    }
}
