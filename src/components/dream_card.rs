//! Card rendering for a single journal entry, shared by the journal and
//! the public feed.

use leptos::prelude::*;

use crate::net::types::Dream;

/// One dream as a card. The owner's journal passes the edit callbacks;
/// the feed renders read-only.
#[component]
pub fn DreamCard(
    dream: Dream,
    #[prop(optional, into)] on_delete: Option<Callback<i64>>,
    #[prop(optional, into)] on_toggle_privacy: Option<Callback<i64>>,
) -> impl IntoView {
    let id = dream.id;
    let is_lucid = dream.is_lucid;
    let is_private = dream.is_private;
    let tags = dream.tags.clone().unwrap_or_default();

    view! {
        <article class="dream-card">
            <header class="dream-card__header">
                <h3 class="dream-card__title">{dream.title.clone()}</h3>
                <span class="dream-card__date">{dream.date_dreamed.clone()}</span>
            </header>
            <p class="dream-card__content">{dream.content.clone()}</p>
            <div class="dream-card__meta">
                {dream.mood.clone().map(|mood| view! { <span class="dream-card__mood">{mood}</span> })}
                <Show when=move || is_lucid>
                    <span class="dream-card__badge">"lucid"</span>
                </Show>
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="dream-card__tag">{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || on_delete.is_some() || on_toggle_privacy.is_some()>
                <footer class="dream-card__actions">
                    {on_toggle_privacy.map(|cb| {
                        let label = if is_private { "Make public" } else { "Make private" };
                        view! {
                            <button class="btn" on:click=move |_| cb.run(id)>{label}</button>
                        }
                    })}
                    {on_delete.map(|cb| {
                        view! {
                            <button class="btn btn--danger" on:click=move |_| cb.run(id)>
                                "Delete"
                            </button>
                        }
                    })}
                </footer>
            </Show>
        </article>
    }
}
