//! Pricing page.

use leptos::prelude::*;

struct Tier {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
}

const TIERS: &[Tier] = &[
    Tier {
        name: "Hobby",
        price: "$0",
        blurb: "For side projects",
        features: &["3 websites", "Checks every 5 minutes", "Email alerts"],
    },
    Tier {
        name: "Pro",
        price: "$12/mo",
        blurb: "For production sites",
        features: &["25 websites", "Checks every 30 seconds", "Route discovery", "Webhook alerts"],
    },
    Tier {
        name: "Team",
        price: "$49/mo",
        blurb: "For whole teams",
        features: &["Unlimited websites", "Checks every 10 seconds", "Priority support"],
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing-page">
            <h1>"Pricing"</h1>
            <div class="pricing-page__tiers">
                {TIERS
                    .iter()
                    .map(|tier| {
                        view! {
                            <div class="pricing-card">
                                <h3>{tier.name}</h3>
                                <p class="pricing-card__price">{tier.price}</p>
                                <p class="pricing-card__blurb">{tier.blurb}</p>
                                <ul>
                                    {tier
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <a class="btn btn--primary" href="/signup">
                                    "Get started"
                                </a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
