//! Top navigation bar, auth-aware.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `AuthState` from context; it never queries the provider itself, so
//! the bar flips between anonymous and signed-in link sets the moment the
//! session synchronizer applies an event — including a sign-out from
//! another tab.

use leptos::prelude::*;

use crate::session::{self, AuthEvents};
use crate::state::auth::AuthState;
use crate::state::notices::NoticeState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let events = expect_context::<AuthEvents>();

    let on_sign_out = move |_| {
        session::sign_out(events.clone(), notices);
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "upwatch"
            </a>
            <nav class="navbar__links">
                <a class="navbar__link" href="/pricing">
                    "Pricing"
                </a>
                <Show
                    when=move || auth.get().logged_in
                    fallback=move || {
                        view! {
                            <a class="navbar__link" href="/login">
                                "Log in"
                            </a>
                            <a class="navbar__link navbar__link--cta" href="/signup">
                                "Sign up"
                            </a>
                        }
                    }
                >
                    <a class="navbar__link" href="/dashboard">
                        "Dashboard"
                    </a>
                    <a class="navbar__link" href="/profile">
                        "Profile"
                    </a>
                    <span class="navbar__email">
                        {move || auth.get().email.unwrap_or_default()}
                    </span>
                    <button class="btn navbar__sign-out" on:click=on_sign_out.clone()>
                        "Sign out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
