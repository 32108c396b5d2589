//! Application shell, routes, and session-synchronizer mount point.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the three context values everything else reads: the
//! `AuthState` projection, the notice queue, and the auth event hub. The
//! session synchronizer is installed here, once, so no page can accidentally
//! register a second listener.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::navbar::NavBar;
use crate::components::notice_toast::NoticeToast;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::legal::{PrivacyPage, TermsPage};
use crate::pages::login::LoginPage;
use crate::pages::pricing::PricingPage;
use crate::pages::profile::ProfilePage;
use crate::pages::reset::ResetPasswordPage;
use crate::pages::signup::SignupPage;
use crate::session::{self, AuthEvents};
use crate::state::auth::AuthState;
use crate::state::notices::NoticeState;

/// SSR document shell.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notices = RwSignal::new(NoticeState::default());
    let events = AuthEvents::new();
    provide_context(auth);
    provide_context(notices);
    provide_context(events.clone());

    session::install(auth, &events);

    view! {
        <Stylesheet id="leptos" href="/pkg/upwatch.css" />
        <Title text="upwatch — website uptime monitoring" />
        <Router>
            <NavBar />
            <NoticeToast />
            <main class="app-main">
                <Routes fallback=|| {
                    view! {
                        <div class="not-found">
                            <h1>"404"</h1>
                            <p>"That page does not exist."</p>
                            <a href="/">"Back home"</a>
                        </div>
                    }
                }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/terms") view=TermsPage />
                    <Route path=path!("/privacy") view=PrivacyPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                    <Route path=path!("/reset-password") view=ResetPasswordPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/profile") view=ProfilePage />
                </Routes>
            </main>
        </Router>
    }
}
