//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    dreams::DreamsPage, feed::FeedPage, find::FindPage, hello_world::HelloWorldPage,
    home::HomePage, login::LoginPage, pomodoro::PomodoroPage, profile::ProfilePage,
    register::RegisterPage, test_page::TestPage,
};
use crate::state::session;

/// Root application component.
///
/// Restores the persisted session before the first route renders, provides
/// it as context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(session::restore());
    provide_context(auth);

    view! {
        <Title text="DreamKeeper"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/home"/> }/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("dreams") view=DreamsPage/>
                    <Route path=StaticSegment("feed") view=FeedPage/>
                    <Route path=StaticSegment("find") view=FindPage/>
                    <Route path=StaticSegment("pomodoro") view=PomodoroPage/>
                    <Route path=StaticSegment("helloworld") view=HelloWorldPage/>
                    <Route path=StaticSegment("test") view=TestPage/>
                </Routes>
            </main>
        </Router>
    }
}
