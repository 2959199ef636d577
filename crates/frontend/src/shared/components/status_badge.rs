use leptos::prelude::*;
use thaw::*;

/// Colour family of a status string.
pub fn status_tone(status: &str) -> BadgeColor {
    match status.to_ascii_lowercase().as_str() {
        "delivered" | "completed" | "published" | "active" | "paid" => BadgeColor::Success,
        "shipped" | "sent" | "picked_up" | "processing" => BadgeColor::Informative,
        "pending" | "submitted" | "draft" => BadgeColor::Warning,
        "cancelled" | "rejected" | "failed" | "inactive" => BadgeColor::Danger,
        _ => BadgeColor::Subtle,
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String, #[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let color = status_tone(&status);
    let text = label.unwrap_or(status);
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {text}
        </Badge>
    }
}

#[component]
pub fn ActiveBadge(active: bool) -> impl IntoView {
    let (color, text) = if active {
        (BadgeColor::Success, "Active")
    } else {
        (BadgeColor::Subtle, "Inactive")
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {text}
        </Badge>
    }
}
