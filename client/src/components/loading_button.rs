//! Submit button that swaps its label for a spinner while busy.

use leptos::prelude::*;

use super::spinner::Spinner;

/// Disabled and spinning while `busy` is set.
#[component]
pub fn LoadingButton(
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] label: String,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| "button button--primary".to_owned());
    view! {
        <button class=class type="submit" disabled=move || busy.get()>
            <Show when=move || busy.get() fallback=move || label.clone()>
                <Spinner small=true/>
            </Show>
        </button>
    }
}
