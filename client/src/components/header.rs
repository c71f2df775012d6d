//! Top navigation bar.
//!
//! Shows the brand link on every route, plus a logout control when someone
//! is signed in and a login link otherwise.

use accounts::ErrorSlot;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::util::auth::{LOGIN_PATH, USERS_PATH, sign_out};

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let errors = expect_context::<RwSignal<ErrorSlot>>();

    let signed_in = move || auth.get().is_authenticated();
    let on_logout = move |_| sign_out(auth, errors);

    view! {
        <header class="header">
            <A href=USERS_PATH attr:class="header__brand">"User Desk"</A>
            <nav class="header__nav">
                <Show
                    when=signed_in
                    fallback=|| view! { <A href=LOGIN_PATH attr:class="header__link">"Login"</A> }
                >
                    <button class="header__link" on:click=on_logout>"Logout"</button>
                </Show>
            </nav>
        </header>
    }
}
