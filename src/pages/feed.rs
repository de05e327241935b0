//! Feed page: public dreams from other users, newest first.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dream_card::DreamCard;
use crate::net::types::Dream;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

const FEED_PAGE_SIZE: i64 = 10;

#[component]
pub fn FeedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let dreams = RwSignal::new(Vec::<Dream>::new());
    let page = RwSignal::new(1_i64);
    let total_pages = RwSignal::new(None::<i64>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    // Reload whenever the page number changes.
    Effect::new(move || {
        if !auth.get().is_authenticated() {
            return;
        }
        let current_page = page.get();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_feed(current_page, FEED_PAGE_SIZE).await {
                Ok(batch) => {
                    total_pages.set(batch.pages);
                    dreams.set(batch.dreams);
                    error.set(String::new());
                }
                Err(e) => error.set(format!("Could not load the feed: {e}")),
            }
            loading.set(false);
        });
    });

    let has_prev = move || page.get() > 1;
    let has_next = move || total_pages.get().is_none_or(|total| page.get() < total);

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <p class="page-redirect">"Redirecting to login..."</p> }
        >
            <div class="feed-page">
                <h1>"Dream Feed"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="page-error">{move || error.get()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading the feed..."</p> }
                >
                    <Show when=move || dreams.get().is_empty() && error.get().is_empty()>
                        <p class="feed-page__empty">"Nothing shared yet. Check back later."</p>
                    </Show>
                    <div class="feed-page__cards">
                        {move || {
                            dreams
                                .get()
                                .into_iter()
                                .map(|dream| view! { <DreamCard dream=dream/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
                <div class="feed-page__pager">
                    <button
                        class="btn"
                        disabled=move || !has_prev()
                        on:click=move |_| page.update(|p| *p -= 1)
                    >
                        "Newer"
                    </button>
                    <span class="feed-page__page">{move || format!("Page {}", page.get())}</span>
                    <button
                        class="btn"
                        disabled=move || !has_next()
                        on:click=move |_| page.update(|p| *p += 1)
                    >
                        "Older"
                    </button>
                </div>
            </div>
        </Show>
    }
}
