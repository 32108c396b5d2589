//! Signup page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api::SignupOutcome;
#[cfg(feature = "hydrate")]
use crate::session::{self, AuthEvents};

const MIN_PASSWORD_LEN: usize = 8;

/// Validate the signup form before it hits the network.
pub(crate) fn validate_signup(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let events = expect_context::<AuthEvents>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_signup(&email_value, &password_value, &confirm.get()) {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&email_value, &password_value).await {
                    Ok(SignupOutcome::SignedIn(user)) => {
                        session::announce(&events, &sessions::AuthEvent::SignedIn(user));
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Ok(SignupOutcome::ConfirmationRequired) => {
                        info.set("Almost there — check your inbox to confirm your email.".to_owned());
                        busy.set(false);
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
                <h1>"Create your account"</h1>
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
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-links">
                    <a href="/login">"Already have an account? Log in"</a>
                </div>
            </div>
        </div>
    }
}
