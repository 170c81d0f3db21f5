//! Dashboard page showing the signed-in user's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the session-gated route. It resolves a [`DashboardPhase`] once on
//! mount and navigates to `/login` whenever the phase becomes `Redirecting`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::dashboard::{DashboardPhase, LOGIN_PATH, email_line, welcome_line};
use crate::state::session::SessionContext;

/// Dashboard page: "Welcome, {name}!" and the account email, or a redirect
/// to `/login` if the stored session is missing or invalid.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let phase = RwSignal::new(DashboardPhase::Loading);
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let session = session.clone();
        // Reads no signals, so it runs once after mount.
        Effect::new(move || {
            let session = session.clone();
            let alive_task = alive_task.clone();
            leptos::task::spawn_local(async move {
                crate::state::dashboard::load_dashboard_while_alive(
                    &session,
                    &crate::net::api::HttpProfileApi,
                    &alive_task,
                    |next| {
                        if next.is_redirecting() {
                            log::info!("no valid session; redirecting to login");
                        }
                        phase.set(next);
                    },
                )
                .await;
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let navigate_login = navigate.clone();
    Effect::new(move || {
        if phase.get().is_redirecting() {
            navigate_login(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        let token = session.token();
        session.clear();
        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = token {
                leptos::task::spawn_local(async move {
                    crate::net::api::logout(&token).await;
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
        phase.set(DashboardPhase::Redirecting);
    };

    view! {
        <div class="dashboard-page">
            {move || match phase.get() {
                DashboardPhase::Authenticated(profile) => {
                    let on_logout = on_logout.clone();
                    view! {
                        <header class="dashboard-page__header toolbar">
                            <a class="btn" href="/">"Draw"</a>
                            <span class="toolbar__spacer"></span>
                            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                                "Logout"
                            </button>
                        </header>
                        <section class="dashboard-page__profile">
                            <h2>{welcome_line(&profile)}</h2>
                            <p>{email_line(&profile)}</p>
                        </section>
                    }
                        .into_any()
                }
                other => view! { <p>{other.status_text().unwrap_or_default()}</p> }.into_any(),
            }}
        </div>
    }
}
