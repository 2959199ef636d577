use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    #[prop(into)] value: Signal<Option<i64>>,
    #[prop(optional, into)] modifier: Option<String>,
) -> impl IntoView {
    let class = match modifier {
        Some(m) => format!("stat-card stat-card--{}", m),
        None => "stat-card".to_string(),
    };

    view! {
        <div class=class>
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(&icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">
                {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())}
            </div>
        </div>
    }
}
