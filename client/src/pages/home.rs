//! Landing page.

use leptos::prelude::*;

const FEATURES: &[(&str, &str)] = &[
    ("Always watching", "Checks from multiple regions around the clock, so you hear about downtime before your users do."),
    ("Instant alerts", "Email and webhook alerts the moment a check fails, with context on what changed."),
    ("Route discovery", "Automatically maps the routes behind your domain and monitors the ones that matter."),
    ("Uptime history", "Response times and incident history kept for every site you monitor."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Know when your site goes down. First."</h1>
                <p class="hero__subtitle">
                    "upwatch monitors your websites around the clock and tells you the moment anything breaks."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/signup">
                        "Start monitoring"
                    </a>
                    <a class="btn" href="/pricing">
                        "See pricing"
                    </a>
                </div>
            </section>
            <section class="features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="features__card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
            <section class="cta">
                <h2>"Five minutes to your first check."</h2>
                <a class="btn btn--primary" href="/signup">
                    "Create an account"
                </a>
            </section>
        </div>
    }
}
