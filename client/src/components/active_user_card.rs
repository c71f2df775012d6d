//! Card describing the signed-in operator.

use accounts::User;
use accounts::timestamp::format_last_login;
use leptos::prelude::*;

use crate::state::auth::AuthState;

fn badge_class(user: &User) -> &'static str {
    if user.is_blocked() { "badge badge--blocked" } else { "badge badge--active" }
}

#[component]
pub fn ActiveUserCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        auth.get().user().cloned().map(|user| {
            let last_seen = format_last_login(user.last_login.as_deref());
            view! {
                <section class="active-user">
                    <div class="active-user__identity">
                        <span class="active-user__name">{user.name.clone()}</span>
                        <span class="active-user__email">{user.email.clone()}</span>
                    </div>
                    <span class=badge_class(&user)>{user.status_label()}</span>
                    <span class="active-user__seen">"Last seen: " {last_seen}</span>
                </section>
            }
        })
    }
}
