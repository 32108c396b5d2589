//! Card for one monitored website on the dashboard.

use leptos::prelude::*;

use crate::net::types::Website;

/// Status card with check and route-discovery actions.
#[component]
pub fn WebsiteCard(
    website: Website,
    on_check: Callback<String>,
    on_discover: Callback<String>,
) -> impl IntoView {
    let status_class = match website.is_up() {
        Some(true) => "website-card__status website-card__status--up",
        Some(false) => "website-card__status website-card__status--down",
        None => "website-card__status website-card__status--pending",
    };
    let status_label = website.status_label().to_owned();
    let display_name = website.display_name().to_owned();
    let uptime = website
        .uptime_percent
        .map(|pct| format!("{pct:.2}% uptime"));
    let checked_at = website.last_checked_at.clone();
    let check_id = website.id.clone();
    let discover_id = website.id.clone();

    view! {
        <div class="website-card">
            <div class="website-card__head">
                <span class="website-card__name">{display_name}</span>
                <span class=status_class>{status_label}</span>
            </div>
            <a class="website-card__url" href=website.url.clone() target="_blank" rel="noopener">
                {website.url.clone()}
            </a>
            <div class="website-card__meta">
                <Show when={
                    let uptime = uptime.clone();
                    move || uptime.is_some()
                }>
                    <span class="website-card__uptime">{uptime.clone().unwrap_or_default()}</span>
                </Show>
                <Show when={
                    let checked_at = checked_at.clone();
                    move || checked_at.is_some()
                }>
                    <span class="website-card__checked">
                        "Last checked " {checked_at.clone().unwrap_or_default()}
                    </span>
                </Show>
            </div>
            <div class="website-card__actions">
                <button class="btn" on:click=move |_| on_check.run(check_id.clone())>
                    "Check now"
                </button>
                <button class="btn" on:click=move |_| on_discover.run(discover_id.clone())>
                    "Discover routes"
                </button>
            </div>
        </div>
    }
}
