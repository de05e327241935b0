//! Find page: username live-search across other accounts.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(test)]
#[path = "find_test.rs"]
mod find_test;

use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Server default; the backend caps at 50 regardless.
const FIND_LIMIT: i64 = 10;

/// The server answers queries under two characters with an empty list, so
/// don't bother sending them.
fn normalize_find_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    if query.chars().count() < 2 { None } else { Some(query.to_owned()) }
}

#[component]
pub fn FindPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<User>::new());
    let message = RwSignal::new(String::new());
    // Responses can land out of order while typing; only the latest wins.
    let seq = RwSignal::new(0_u64);

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        query.set(raw.clone());
        let request_seq = seq.get_untracked() + 1;
        seq.set(request_seq);

        let Some(term) = normalize_find_query(&raw) else {
            results.set(Vec::new());
            message.set(String::new());
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::find_users(&term, FIND_LIMIT).await;
            if seq.get_untracked() != request_seq {
                return;
            }
            match outcome {
                Ok(resp) => {
                    message.set(if resp.users.is_empty() {
                        format!("No users matching \"{term}\".")
                    } else {
                        String::new()
                    });
                    results.set(resp.users);
                }
                Err(e) => message.set(format!("Search failed: {e}")),
            }
        });
    };

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <p class="page-redirect">"Redirecting to login..."</p> }
        >
            <div class="find-page">
                <h1>"Find Dreamers"</h1>
                <input
                    class="find-page__input"
                    type="text"
                    placeholder="Search by username (2+ characters)"
                    prop:value=move || query.get()
                    on:input=on_input
                />
                <Show when=move || !message.get().is_empty()>
                    <p class="find-page__message">{move || message.get()}</p>
                </Show>
                <ul class="find-page__results">
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .map(|user| {
                                view! {
                                    <li class="find-page__result">
                                        <span class="find-page__username">{user.username}</span>
                                        <span class="find-page__email">{user.email}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>
        </Show>
    }
}
