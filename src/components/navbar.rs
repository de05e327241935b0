//! Top navigation bar with route links and the session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session;

/// Navigation bar shown on every page. The router intercepts the anchor
/// clicks, so these links stay client-side.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(auth);
        navigate("/home", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/home">"DreamKeeper"</a>
            <div class="navbar__links">
                <a href="/feed">"Feed"</a>
                <a href="/dreams">"My Dreams"</a>
                <a href="/find">"Find"</a>
                <a href="/pomodoro">"Pomodoro"</a>
            </div>
            <span class="navbar__spacer"></span>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| {
                    view! {
                        <div class="navbar__session">
                            <a class="btn" href="/login">"Login"</a>
                            <a class="btn btn--primary" href="/register">"Register"</a>
                        </div>
                    }
                }
            >
                <div class="navbar__session">
                    <a class="navbar__self" href="/profile">
                        {move || auth.get().username().to_owned()}
                    </a>
                    <button class="btn navbar__logout" on:click=on_logout.clone() title="Logout">
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
