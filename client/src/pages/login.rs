//! Login page with email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routing::paths;
use crate::routing::table::Page;
use crate::util::auth::{install_signed_in_redirect, use_auth};

pub(crate) const INVALID_EMAIL: &str = "Enter a valid email address.";
pub(crate) const MISSING_PASSWORD: &str = "Enter your password.";

/// Trim and check an email address: non-empty with an `@` that is neither
/// the first nor the last character.
pub(crate) fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim();
    let at = email.find('@')?;
    (at > 0 && at + 1 < email.len()).then(|| email.to_owned())
}

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = normalize_email(email).ok_or(INVALID_EMAIL)?;
    if password.is_empty() {
        return Err(MISSING_PASSWORD);
    }
    Ok((email, password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    install_signed_in_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Err(msg) => error.set(Some(msg.to_owned())),
            Ok((email_value, password_value)) => {
                busy.set(true);
                error.set(None);
                leptos::task::spawn_local(async move {
                    if let Err(e) = auth.login(email_value, password_value).await {
                        log::warn!("login failed: {e}");
                        error.set(Some(e.user_message()));
                    }
                    busy.set(false);
                });
            }
        }
    };

    view! {
        <Title text=Page::Login.title()/>
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sweet Shop"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-card__switch">
                    "No account yet? "
                    <A href=paths::REGISTER>"Create one"</A>
                </p>
            </form>
        </div>
    }
}
