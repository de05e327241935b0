//! Registration page. Client-side checks mirror the server's account
//! schema so most rejections never leave the browser.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::state::auth::AuthState;
use crate::state::session;

fn validate_username(raw: &str) -> Result<String, &'static str> {
    let username = raw.trim().to_lowercase();
    if username.len() < 3 || username.len() > 80 {
        return Err("Username must be 3-80 characters.");
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("Username may only contain letters, numbers, and underscores.");
    }
    Ok(username)
}

fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim().to_lowercase();
    if email.len() > 120 {
        return Err("Email address is too long.");
    }
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if valid { Ok(email) } else { Err("Enter a valid email address.") }
}

fn validate_password(raw: &str) -> Result<(), &'static str> {
    if raw.len() < 8 || raw.len() > 128 {
        return Err("Password must be 8-128 characters.");
    }
    let has_lower = raw.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = raw.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = raw.chars().any(|c| c.is_ascii_digit());
    if has_lower && has_upper && has_digit {
        Ok(())
    } else {
        Err("Password needs an uppercase letter, a lowercase letter, and a digit.")
    }
}

fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let username = validate_username(username)?;
    let email = validate_email(email)?;
    validate_password(password)?;
    Ok((username, email, password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, email_value, password_value) =
            match validate_registration(&username.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&username_value, &email_value, &password_value).await {
                Ok(resp) => {
                    // Registration issues a token, so sign straight in.
                    session::login(auth, resp.user, resp.access_token);
                    navigate("/home", NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Registration failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"DreamKeeper"</h1>
                <p class="login-card__subtitle">"Create your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
