//! Terms and privacy pages.

use leptos::prelude::*;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="legal-page">
            <h1>"Terms of Service"</h1>
            <p>
                "upwatch is provided as-is. You are responsible for the websites you register and "
                "must only monitor sites you own or have permission to check."
            </p>
            <p>
                "Accounts that abuse the service to probe third-party infrastructure will be "
                "suspended."
            </p>
        </div>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="legal-page">
            <h1>"Privacy Policy"</h1>
            <p>
                "We store your email address and the URLs you monitor. Check results are retained "
                "for the history views in your dashboard."
            </p>
            <p>"We never sell your data, and you can delete your account at any time."</p>
        </div>
    }
}
