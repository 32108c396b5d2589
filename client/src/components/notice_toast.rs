//! Toast host rendering the notice queue.
//!
//! DESIGN
//! ======
//! Notices auto-dismiss after a few seconds in the browser; dismissal is by
//! id, so a manual close racing the timer is harmless.

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, NoticeState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_SECS: u64 = 5;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "hydrate")]
    {
        // Start one timer per notice the host has not seen yet.
        let timed: StoredValue<Option<u64>> = StoredValue::new(None);
        Effect::new(move || {
            let Some(latest) = notices.get().latest_id() else {
                return;
            };
            if timed.get_value().is_some_and(|seen| seen >= latest) {
                return;
            }
            let start = timed.get_value().map_or(0, |seen| seen + 1);
            timed.set_value(Some(latest));
            for id in start..=latest {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(AUTO_DISMISS_SECS))
                        .await;
                    notices.try_update(|state| state.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toasts">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "toast toast--success",
                            NoticeKind::Error => "toast toast--error",
                        };
                        let id = notice.id;
                        view! {
                            <div class=class>
                                <span class="toast__text">{notice.text}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| notices.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
