//! Landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"DreamKeeper"</h1>
                <p class="home-page__tagline">"Keep your dreams. Share the ones worth telling."</p>
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <div class="home-page__actions">
                                <a class="btn btn--primary" href="/login">"Sign in"</a>
                                <a class="btn" href="/register">"Create an account"</a>
                            </div>
                        }
                    }
                >
                    <div class="home-page__actions">
                        <p class="home-page__greeting">
                            {move || format!("Welcome back, {}.", auth.get().username())}
                        </p>
                        <a class="btn btn--primary" href="/dreams">"Open your journal"</a>
                        <a class="btn" href="/feed">"Browse the feed"</a>
                    </div>
                </Show>
            </section>
        </div>
    }
}
