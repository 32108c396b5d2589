//! Profile page — account details plus sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use sessions::SessionUser;

use crate::session::{self, AuthEvents};
use crate::state::auth::AuthState;
use crate::state::notices::NoticeState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let events = expect_context::<AuthEvents>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    // Authoritative record from the provider; the cookie copy can lag an
    // email change made elsewhere.
    let account = RwSignal::new(None::<SessionUser>);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Some(user) = crate::net::api::fetch_account().await {
                account.try_set(Some(user));
            }
        });
    }

    let on_sign_out = move |_| {
        session::sign_out(events.clone(), notices);
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().logged_in
            fallback=move || view! { <div class="profile-page"><p>"Loading..."</p></div> }
        >
            <div class="profile-page">
                <h1>"Your account"</h1>
                <dl class="profile-page__details">
                    <dt>"Email"</dt>
                    <dd>
                        {move || {
                            account
                                .get()
                                .map(|user| user.email)
                                .or_else(|| auth.get().email)
                                .unwrap_or_default()
                        }}
                    </dd>
                    <dt>"Account ID"</dt>
                    <dd>{move || account.get().map(|user| user.id).unwrap_or_else(|| "…".to_owned())}</dd>
                </dl>
                <button class="btn btn--danger" on:click=on_sign_out.clone()>
                    "Sign out"
                </button>
            </div>
        </Show>
    }
}
