//! Dashboard page listing monitored websites with add/check/discover actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The edge gate already keeps
//! anonymous requests out server-side; the client-side redirect covers
//! sign-outs that happen after hydration (including from another tab).

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::website_card::WebsiteCard;
use crate::net::types::Website;
use crate::state::auth::AuthState;
use crate::state::notices::NoticeState;
use crate::util::auth::install_unauth_redirect;

#[cfg(feature = "hydrate")]
const REFRESH_INTERVAL_SECS: u64 = 30;

/// Display order: down first, then unchecked, then up; stable by name inside
/// each group so cards do not jump around between refreshes.
pub(crate) fn order_websites(mut websites: Vec<Website>) -> Vec<Website> {
    fn rank(website: &Website) -> u8 {
        match website.is_up() {
            Some(false) => 0,
            None => 1,
            Some(true) => 2,
        }
    }
    websites.sort_by(|a, b| {
        rank(a)
            .cmp(&rank(b))
            .then_with(|| a.display_name().cmp(b.display_name()))
    });
    websites
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    let websites = RwSignal::new(Vec::<Website>::new());
    let loading = RwSignal::new(true);
    // Bumped whenever a mutation should trigger a refetch.
    let refresh_seq = RwSignal::new(0_u64);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            refresh_seq.track();
            if !auth.get().logged_in {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_websites().await {
                    Ok(list) => {
                        websites.try_update(|current| *current = order_websites(list));
                    }
                    Err(err) => {
                        notices.try_update(|state| {
                            state.push_error(format!("Could not load websites: {err}"));
                        });
                    }
                }
                loading.try_update(|flag| *flag = false);
            });
        });

        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(REFRESH_INTERVAL_SECS))
                    .await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if !auth.get_untracked().logged_in {
                    continue;
                }
                refresh_seq.update(|seq| *seq += 1);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let show_add = RwSignal::new(false);
    let on_add = move |_| show_add.set(true);
    let on_add_cancel = Callback::new(move |()| show_add.set(false));

    let on_check = Callback::new(move |website_id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::trigger_check(&website_id).await {
                    Ok(()) => {
                        notices.try_update(|state| {
                            state.push_success("Check started.");
                        });
                        refresh_seq.try_update(|seq| *seq += 1);
                    }
                    Err(err) => {
                        notices.try_update(|state| {
                            state.push_error(format!("Check failed: {err}"));
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (website_id, notices, refresh_seq);
    });

    let on_discover = Callback::new(move |website_id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::discover_routes(&website_id).await {
                    Ok(()) => {
                        notices.try_update(|state| {
                            state.push_success("Route discovery started.");
                        });
                    }
                    Err(err) => {
                        notices.try_update(|state| {
                            state.push_error(format!("Route discovery failed: {err}"));
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (website_id, notices);
    });

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().logged_in
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Websites"</span>
                    <span class="toolbar__divider" aria-hidden="true"></span>
                    <button class="btn toolbar__add-website" on:click=on_add>
                        "+ Add website"
                    </button>
                </header>

                <div class="dashboard-page__grid">
                    <Show
                        when=move || !loading.get()
                        fallback=move || view! { <p>"Loading websites..."</p> }
                    >
                        <Show
                            when=move || !websites.get().is_empty()
                            fallback=move || {
                                view! {
                                    <p class="dashboard-page__empty">
                                        "No websites yet. Add one to start monitoring."
                                    </p>
                                }
                            }
                        >
                            <div class="dashboard-page__cards">
                                {move || {
                                    websites
                                        .get()
                                        .into_iter()
                                        .map(|website| {
                                            view! {
                                                <WebsiteCard
                                                    website=website
                                                    on_check=on_check
                                                    on_discover=on_discover
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </div>
                <Show when=move || show_add.get()>
                    <AddWebsiteDialog on_cancel=on_add_cancel refresh_seq=refresh_seq />
                </Show>
            </div>
        </Show>
    }
}

/// Modal dialog for registering a new website: verify first, then register.
#[component]
fn AddWebsiteDialog(on_cancel: Callback<()>, refresh_seq: RwSignal<u64>) -> impl IntoView {
    let url = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let notices = expect_context::<RwSignal<NoticeState>>();

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let url_value = url.get().trim().to_owned();
        if url_value.is_empty() {
            info.set("Enter a URL first.".to_owned());
            return;
        }
        let name_value = name.get().trim().to_owned();
        busy.set(true);
        info.set("Verifying...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::verify_website(&url_value).await {
                    info.try_set(err);
                    busy.try_set(false);
                    return;
                }
                let display_name = (!name_value.is_empty()).then_some(name_value);
                match crate::net::api::register_website(&url_value, display_name.as_deref()).await {
                    Ok(()) => {
                        notices.try_update(|state| {
                            state.push_success("Website added.");
                        });
                        refresh_seq.try_update(|seq| *seq += 1);
                        on_cancel.run(());
                    }
                    Err(err) => {
                        info.try_set(err);
                        busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (name_value, notices, refresh_seq);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Website"</h2>
                <label class="dialog__label">
                    "URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://example.com"
                        prop:value=move || url.get()
                        on:input=move |ev| url.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Name (optional)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Production site"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}
