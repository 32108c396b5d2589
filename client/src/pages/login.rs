//! Login page — email + password against the auth provider.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[cfg(feature = "hydrate")]
use crate::session::{self, AuthEvents};

/// Friendly message for an `?error=` marker left by the auth callback.
#[must_use]
pub(crate) fn callback_error_message(code: &str) -> Option<&'static str> {
    match code {
        "missing_code" => Some("Sign-in link was incomplete. Please try again."),
        "callback_failed" => Some("Sign-in could not be completed. Please try again."),
        _ => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let query = use_query_map();
    Effect::new(move || {
        if let Some(message) = query
            .get()
            .get("error")
            .and_then(|code| callback_error_message(&code))
        {
            info.set(message.to_owned());
        }
    });

    #[cfg(feature = "hydrate")]
    let events = expect_context::<AuthEvents>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter your email and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        session::announce(&events, &sessions::AuthEvent::SignedIn(user));
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Err(err) => {
                        info.set(err);
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-links">
                    <a href="/reset-password">"Forgot password?"</a>
                    <a href="/signup">"Need an account? Sign up"</a>
                </div>
            </div>
        </div>
    }
}
