//! Scratch page kept from the project's first commit.

use leptos::prelude::*;

#[component]
pub fn HelloWorldPage() -> impl IntoView {
    view! {
        <div class="hello-page">
            <h1>"Hello, world!"</h1>
            <p>"If you can read this, the bundle mounted."</p>
        </div>
    }
}
