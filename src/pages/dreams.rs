//! Journal page: the signed-in user's dreams with paging, search, a
//! new-entry dialog, privacy toggling, and delete confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated workhorse route. Every mutation bumps a
//! refresh counter so the listing effect refetches the current page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(test)]
#[path = "dreams_test.rs"]
mod dreams_test;

use crate::components::dream_card::DreamCard;
use crate::net::types::{Dream, NewDream};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

const JOURNAL_PAGE_SIZE: i64 = 10;

const MAX_TITLE_LEN: usize = 200;
const MAX_CONTENT_LEN: usize = 5000;
const MAX_TAG_LEN: usize = 50;

/// Split a comma-separated tag field into clean tags. Empty input means
/// "no tags", not an empty list.
fn parse_tags(raw: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.chars().take(MAX_TAG_LEN).collect::<String>().to_lowercase())
        .collect();
    if tags.is_empty() { None } else { Some(tags) }
}

/// Mood is a single lowercase label; blank means none.
fn normalize_mood(raw: &str) -> Option<String> {
    let mood = raw.trim().to_lowercase();
    if mood.is_empty() { None } else { Some(mood.chars().take(MAX_TAG_LEN).collect()) }
}

/// Field checks mirroring the server's entry schema.
fn validate_new_dream(title: &str, content: &str, date: &str) -> Result<(), &'static str> {
    let title = title.trim();
    if title.is_empty() || title.len() > MAX_TITLE_LEN {
        return Err("Title must be 1-200 characters.");
    }
    let content = content.trim();
    if content.is_empty() || content.len() > MAX_CONTENT_LEN {
        return Err("Content must be 1-5000 characters.");
    }
    if date.trim().is_empty() {
        return Err("Pick the date you dreamed this.");
    }
    Ok(())
}

#[component]
pub fn DreamsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let dreams = RwSignal::new(Vec::<Dream>::new());
    let page = RwSignal::new(1_i64);
    let total_pages = RwSignal::new(None::<i64>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let search_input = RwSignal::new(String::new());
    let applied_search = RwSignal::new(String::new());

    // Bumped by create/delete/toggle to refetch the current page.
    let refresh = RwSignal::new(0_u64);

    Effect::new(move || {
        if !auth.get().is_authenticated() {
            return;
        }
        let current_page = page.get();
        let search = applied_search.get();
        refresh.get();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::list_dreams(current_page, JOURNAL_PAGE_SIZE, &search).await {
                Ok(batch) => {
                    total_pages.set(batch.pages);
                    dreams.set(batch.dreams);
                    error.set(String::new());
                }
                Err(e) => error.set(format!("Could not load your journal: {e}")),
            }
            loading.set(false);
        });
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(1);
        applied_search.set(search_input.get());
    };

    // New-entry dialog state.
    let show_create = RwSignal::new(false);
    let on_create = move |_| show_create.set(true);
    let on_create_cancel = Callback::new(move |()| show_create.set(false));

    // Delete confirmation state.
    let delete_dream_id = RwSignal::new(None::<i64>);
    let on_delete_request = Callback::new(move |id: i64| delete_dream_id.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_dream_id.set(None));

    let on_toggle_privacy = Callback::new(move |id: i64| {
        let Some(currently_private) =
            dreams.get_untracked().iter().find(|d| d.id == id).map(|d| d.is_private)
        else {
            return;
        };
        leptos::task::spawn_local(async move {
            let patch = serde_json::json!({ "is_private": !currently_private });
            match crate::net::api::update_dream(id, &patch).await {
                Ok(_) => refresh.update(|n| *n += 1),
                Err(e) => error.set(format!("Could not update the entry: {e}")),
            }
        });
    });

    let has_prev = move || page.get() > 1;
    let has_next = move || total_pages.get().is_none_or(|total| page.get() < total);

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <p class="page-redirect">"Redirecting to login..."</p> }
        >
            <div class="dreams-page">
                <header class="dreams-page__header">
                    <h1>"My Dreams"</h1>
                    <form class="dreams-page__search" on:submit=on_search>
                        <input
                            class="dreams-page__search-input"
                            type="text"
                            placeholder="Search your journal"
                            prop:value=move || search_input.get()
                            on:input=move |ev| search_input.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit">"Search"</button>
                    </form>
                    <button class="btn btn--primary" on:click=on_create>"+ New Dream"</button>
                </header>

                <Show when=move || !error.get().is_empty()>
                    <p class="page-error">{move || error.get()}</p>
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading your journal..."</p> }
                >
                    <Show when=move || dreams.get().is_empty() && error.get().is_empty()>
                        <p class="dreams-page__empty">"No dreams recorded yet."</p>
                    </Show>
                    <div class="dreams-page__cards">
                        {move || {
                            dreams
                                .get()
                                .into_iter()
                                .map(|dream| {
                                    view! {
                                        <DreamCard
                                            dream=dream
                                            on_delete=on_delete_request
                                            on_toggle_privacy=on_toggle_privacy
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <div class="dreams-page__pager">
                    <button
                        class="btn"
                        disabled=move || !has_prev()
                        on:click=move |_| page.update(|p| *p -= 1)
                    >
                        "Newer"
                    </button>
                    <span class="dreams-page__page">{move || format!("Page {}", page.get())}</span>
                    <button
                        class="btn"
                        disabled=move || !has_next()
                        on:click=move |_| page.update(|p| *p += 1)
                    >
                        "Older"
                    </button>
                </div>

                <Show when=move || show_create.get()>
                    <NewDreamDialog on_cancel=on_create_cancel refresh=refresh/>
                </Show>
                <Show when=move || delete_dream_id.get().is_some()>
                    <DeleteDreamDialog
                        dream_id=delete_dream_id
                        on_cancel=on_delete_cancel
                        refresh=refresh
                    />
                </Show>
            </div>
        </Show>
    }
}

/// Modal dialog for recording a new dream.
#[component]
fn NewDreamDialog(on_cancel: Callback<()>, refresh: RwSignal<u64>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let mood = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let is_lucid = RwSignal::new(false);
    let is_private = RwSignal::new(true);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        if let Err(message) = validate_new_dream(&title.get(), &content.get(), &date.get()) {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        let payload = NewDream {
            title: title.get().trim().to_owned(),
            content: content.get().trim().to_owned(),
            date_dreamed: date.get(),
            mood: normalize_mood(&mood.get()),
            is_lucid: is_lucid.get(),
            is_private: is_private.get(),
            tags: parse_tags(&tags.get()),
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::create_dream(&payload).await {
                Ok(_) => {
                    refresh.update(|n| *n += 1);
                    on_cancel.run(());
                }
                Err(e) => {
                    info.set(format!("Could not save the dream: {e}"));
                    busy.set(false);
                }
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Dream"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "What happened?"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Date dreamed"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Mood"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="calm, anxious, ..."
                        prop:value=move || mood.get()
                        on:input=move |ev| mood.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Tags (comma separated)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="flying, ocean"
                        prop:value=move || tags.get()
                        on:input=move |ev| tags.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || is_lucid.get()
                        on:change=move |_| is_lucid.update(|v| *v = !*v)
                    />
                    "Lucid dream"
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || is_private.get()
                        on:change=move |_| is_private.update(|v| *v = !*v)
                    />
                    "Keep private"
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DeleteDreamDialog(
    dream_id: RwSignal<Option<i64>>,
    on_cancel: Callback<()>,
    refresh: RwSignal<u64>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = dream_id.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            if crate::net::api::delete_dream(id).await.is_ok() {
                refresh.update(|n| *n += 1);
            }
            on_cancel.run(());
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Dream"</h2>
                <p class="dialog__danger">"This will permanently delete this entry."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
