//! Global error modal bound to the `ErrorSlot` store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the application root. Any flow that raises into the error
//! store surfaces here; closing dismisses the slot.

#[cfg(test)]
#[path = "error_modal_test.rs"]
mod error_modal_test;

use accounts::ErrorSlot;
use leptos::prelude::*;

/// Shown when the slot holds no message text.
pub const FALLBACK_MESSAGE: &str = "Unknown error";

fn display_message(slot: &ErrorSlot) -> String {
    if slot.message().is_empty() {
        FALLBACK_MESSAGE.to_owned()
    } else {
        slot.message().to_owned()
    }
}

#[component]
pub fn ErrorModal() -> impl IntoView {
    let errors = expect_context::<RwSignal<ErrorSlot>>();

    let on_close = move |_| errors.update(ErrorSlot::dismiss);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            errors.update(ErrorSlot::dismiss);
        }
    };

    view! {
        <Show when=move || errors.get().is_visible()>
            <div class="dialog-backdrop" on:click=on_close>
                <div
                    class="dialog dialog--error"
                    role="alertdialog"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2>"Error"</h2>
                    <p class="dialog__message">{move || display_message(&errors.get())}</p>
                    <div class="dialog__actions">
                        <button class="button" on:click=on_close>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
