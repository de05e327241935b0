//! Backend connectivity check, served at `/test`.

use leptos::prelude::*;

use crate::config;

#[component]
pub fn TestPage() -> impl IntoView {
    let status = RwSignal::new("Not checked yet.".to_owned());
    let busy = RwSignal::new(false);

    let on_check = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        status.set("Checking...".to_owned());
        leptos::task::spawn_local(async move {
            match crate::net::api::health().await {
                Ok(resp) => {
                    status.set(format!("Backend at {} reports: {}", config::api_base_url(), resp.status));
                }
                Err(e) => status.set(format!("Backend unreachable: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="test-page">
            <h1>"Connectivity Test"</h1>
            <p class="test-page__target">{format!("API base URL: {}", config::api_base_url())}</p>
            <button class="btn btn--primary" on:click=on_check disabled=move || busy.get()>
                "Ping backend"
            </button>
            <p class="test-page__status">{move || status.get()}</p>
        </div>
    }
}
