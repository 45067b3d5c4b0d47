//! Login page checking the configured demo username and password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{AppConfig, LoginConfig};

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter both username and password";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Check a login attempt against the configured pair. Values are compared verbatim.
///
/// # Errors
///
/// Returns the message to show under the form when either field is empty or
/// the pair does not match.
pub fn validate_login_input(username: &str, password: &str, login: &LoginConfig) -> Result<(), &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    if username == login.username && password == login.password {
        Ok(())
    } else {
        Err(INVALID_CREDENTIALS_MESSAGE)
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    // A form submit covers both the button and Enter in either field.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        match validate_login_input(&username.get(), &password.get(), &config.login) {
            Ok(()) => {
                log::info!("login accepted");
                navigate("/", NavigateOptions::default());
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"🎬 MovieBox"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">"Login"</button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
