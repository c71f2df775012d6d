//! Login and registration page.
//!
//! One component serves both `/login` and `/registration`; the mode follows
//! the current path. Field errors render under their inputs, a message from
//! the backend renders above the submit button, and anything else goes to the
//! global error modal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use accounts::ErrorSlot;
#[cfg(feature = "hydrate")]
use accounts::flow::{AuthFailure, submit_auth};
use accounts::validate::{AuthForm, AuthMode, FieldErrors};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_button::LoadingButton;
#[cfg(feature = "hydrate")]
use crate::net::http::browser_api;
use crate::state::auth::AuthState;
use crate::state::config::ClientConfig;
use crate::util::auth::install_authed_redirect;

/// Route path for each mode.
pub fn path_for(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "/login",
        AuthMode::Registration => "/registration",
    }
}

/// Mode served at `path`; anything but `/registration` is login.
pub fn mode_for_path(path: &str) -> AuthMode {
    if path.trim_end_matches('/') == path_for(AuthMode::Registration) {
        AuthMode::Registration
    } else {
        AuthMode::Login
    }
}

/// Prompt and target of the "switch mode" link.
pub fn switch_link(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::Login => ("No account? Register", path_for(AuthMode::Registration)),
        AuthMode::Registration => ("Already registered? Log in", path_for(AuthMode::Login)),
    }
}

fn heading(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Login",
        AuthMode::Registration => "Registration",
    }
}

fn field_error(
    errors: RwSignal<FieldErrors>,
    pick: fn(&FieldErrors) -> Option<&'static str>,
) -> impl IntoView {
    move || {
        pick(&errors.get()).map(|message| view! { <p class="auth-form__field-error">{message}</p> })
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let errors = expect_context::<RwSignal<ErrorSlot>>();
    let config = expect_context::<ClientConfig>();

    let location = use_location();
    let mode = Memo::new(move |_| mode_for_path(&location.pathname.get()));

    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());
    let server_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    install_authed_redirect(auth, use_navigate());

    Effect::new(move |_| {
        let _ = mode.get();
        server_error.set(None);
        field_errors.set(FieldErrors::default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = AuthForm {
            email: email.get_untracked(),
            name: name.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let mode = mode.get_untracked();
        server_error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = browser_api(&config);
            leptos::task::spawn_local(async move {
                match submit_auth(&api, &form, mode).await {
                    Ok(user) => {
                        field_errors.set(FieldErrors::default());
                        errors.update(ErrorSlot::dismiss);
                        auth.update(|state| state.session.sign_in(user));
                    }
                    Err(AuthFailure::Invalid(invalid)) => field_errors.set(invalid),
                    Err(AuthFailure::Rejected(message)) => server_error.set(Some(message)),
                    Err(AuthFailure::Unexpected(message)) => {
                        errors.update(|slot| slot.raise(message));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, mode, &config, errors);
            busy.set(false);
        }
    };

    let bind = |signal: RwSignal<String>| move |ev: leptos::ev::Event| signal.set(event_target_value(&ev));

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <h1>{move || heading(mode.get())}</h1>

                <label class="auth-form__field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=bind(email)
                    />
                    {field_error(field_errors, |e| e.email)}
                </label>

                <Show when=move || mode.get().is_registration()>
                    <label class="auth-form__field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            autocomplete="name"
                            prop:value=move || name.get()
                            on:input=bind(name)
                        />
                        {field_error(field_errors, |e| e.name)}
                    </label>
                </Show>

                <label class="auth-form__field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=bind(password)
                    />
                    {field_error(field_errors, |e| e.password)}
                </label>

                <Show when=move || mode.get().is_registration()>
                    <label class="auth-form__field">
                        <span>"Confirm password"</span>
                        <input
                            type="password"
                            prop:value=move || confirm_password.get()
                            on:input=bind(confirm_password)
                        />
                        {field_error(field_errors, |e| e.confirm_password)}
                    </label>
                </Show>

                {move || server_error.get().map(|message| view! { <p class="auth-form__error">{message}</p> })}

                <LoadingButton busy=busy label="Submit"/>

                {move || {
                    let (prompt, href) = switch_link(mode.get());
                    view! { <A href=href attr:class="auth-form__switch">{prompt}</A> }
                }}
            </form>
        </div>
    }
}
