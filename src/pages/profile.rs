//! Profile page: identity plus journal statistics.
//!
//! SYSTEM CONTEXT
//! ==============
//! On entry the stored identity is refreshed from `/api/auth/me`, so a
//! username or email changed elsewhere converges here. The persisted copy
//! is rewritten through `session::update_user`; the token stays untouched.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::DreamStats;
use crate::state::auth::AuthState;
use crate::state::session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let stats = RwSignal::new(None::<DreamStats>);
    let error = RwSignal::new(String::new());

    // One refresh per page entry.
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() || !auth.get().is_authenticated() {
            return;
        }
        loaded.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user().await {
                Ok(user) => session::update_user(auth, user),
                // Not fatal; the stored copy just stays stale.
                Err(e) => leptos::logging::warn!("identity refresh failed: {e}"),
            }
            match crate::net::api::dream_stats().await {
                Ok(loaded_stats) => stats.set(Some(loaded_stats)),
                Err(e) => error.set(format!("Could not load statistics: {e}")),
            }
        });
    });

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <p class="page-redirect">"Redirecting to login..."</p> }
        >
            <div class="profile-page">
                <section class="profile-page__identity">
                    <h1>{move || auth.get().username().to_owned()}</h1>
                    <p class="profile-page__email">
                        {move || auth.get().user.map(|u| u.email).unwrap_or_default()}
                    </p>
                    {move || {
                        auth.get()
                            .user
                            .and_then(|u| u.created_at)
                            .map(|ts| view! { <p class="profile-page__since">{format!("Member since {ts}")}</p> })
                    }}
                </section>
                <section class="profile-page__stats">
                    <h2>"Journal statistics"</h2>
                    <Show when=move || !error.get().is_empty()>
                        <p class="page-error">{move || error.get()}</p>
                    </Show>
                    <Show
                        when=move || stats.get().is_some()
                        fallback=move || {
                            view! {
                                <Show when=move || error.get().is_empty()>
                                    <p>"Loading statistics..."</p>
                                </Show>
                            }
                        }
                    >
                        <ul class="profile-page__stat-list">
                            <li>
                                {move || {
                                    format!(
                                        "Total dreams: {}",
                                        stats.get().map(|s| s.total_dreams).unwrap_or_default()
                                    )
                                }}
                            </li>
                            <li>
                                {move || {
                                    format!(
                                        "Lucid dreams: {}",
                                        stats.get().map(|s| s.lucid_dreams).unwrap_or_default()
                                    )
                                }}
                            </li>
                        </ul>
                        <h3>"Moods"</h3>
                        <ul class="profile-page__mood-list">
                            {move || {
                                stats
                                    .get()
                                    .map(|s| {
                                        s.mood_distribution
                                            .iter()
                                            .map(|(mood, count)| {
                                                view! { <li>{format!("{mood}: {count}")}</li> }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                                    .unwrap_or_default()
                            }}
                        </ul>
                    </Show>
                </section>
            </div>
        </Show>
    }
}
