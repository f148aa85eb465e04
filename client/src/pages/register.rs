//! Registration page: create an account and sign straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::pages::login::{INVALID_EMAIL, normalize_email};
use crate::routing::paths;
use crate::routing::table::Page;
use crate::util::auth::{install_signed_in_redirect, use_auth};

pub(crate) const MIN_PASSWORD_LEN: usize = 6;
pub(crate) const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub(crate) const PASSWORD_MISMATCH: &str = "Passwords do not match.";

/// Validated registration form.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterInput, &'static str> {
    let email = normalize_email(email).ok_or(INVALID_EMAIL)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    let name = name.trim();
    Ok(RegisterInput {
        email,
        password: password.to_owned(),
        name: (!name.is_empty()).then(|| name.to_owned()),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    install_signed_in_redirect(auth, use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = validate_register_input(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );
        match input {
            Err(msg) => error.set(Some(msg.to_owned())),
            Ok(input) => {
                busy.set(true);
                error.set(None);
                leptos::task::spawn_local(async move {
                    if let Err(e) = auth.register(input.email, input.password, input.name).await {
                        log::warn!("registration failed: {e}");
                        error.set(Some(e.user_message()));
                    }
                    busy.set(false);
                });
            }
        }
    };

    view! {
        <Title text=Page::Register.title()/>
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sweet Shop"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Name (optional)"
                    autocomplete="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
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
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Confirm password"
                    autocomplete="new-password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create account" }}
                </button>
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href=paths::LOGIN>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
