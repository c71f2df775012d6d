//! User-management table with sorting, multi-select and bulk actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a `UserListModel` signal. The list is fetched once on mount
//! and again after every bulk action; nothing changes optimistically. Fetch
//! outcomes are folded into the model and the global stores in one place
//! ([`settle`]), which also covers forced logout on 401/403 and on an empty
//! list.

#[cfg(test)]
#[path = "user_list_test.rs"]
mod user_list_test;

use accounts::api::BulkAction;
use accounts::flow::{ListOutcome, apply_list_outcome};
#[cfg(feature = "hydrate")]
use accounts::flow::{load_users, run_bulk};
use accounts::roster::{SortField, UserListModel};
use accounts::timestamp::format_last_login;
use accounts::{ErrorSlot, User};
use leptos::prelude::*;

use crate::components::active_user_card::ActiveUserCard;
use crate::components::spinner::Spinner;
#[cfg(feature = "hydrate")]
use crate::net::http::browser_api;
use crate::net::storage::LocalStorageTokens;
use crate::state::auth::AuthState;
use crate::state::config::ClientConfig;

const BULK_ACTIONS: [BulkAction; 3] = [BulkAction::Block, BulkAction::Unblock, BulkAction::Delete];

/// Fold a fetch outcome into the page model and the global stores.
pub fn settle(
    outcome: ListOutcome,
    model: RwSignal<UserListModel>,
    auth: RwSignal<AuthState>,
    errors: RwSignal<ErrorSlot>,
) {
    let mut result = Ok(());
    model.update(|list| {
        auth.update(|state| {
            errors.update(|slot| {
                result = apply_list_outcome(outcome, list, &mut state.session, slot, &LocalStorageTokens);
            });
        });
    });
    if let Err(err) = result {
        errors.update(|slot| slot.raise(err.to_string()));
    }
}

/// Bulk buttons are live whenever something is selected, even while an
/// earlier bulk request is still in flight; the last refetch to land wins.
pub fn bulk_enabled(model: &UserListModel) -> bool {
    model.can_act()
}

fn row_class(user: &User) -> &'static str {
    if user.is_blocked() {
        "user-table__row user-table__row--blocked"
    } else {
        "user-table__row"
    }
}

fn button_class(action: BulkAction) -> &'static str {
    match action {
        BulkAction::Delete => "button button--danger",
        BulkAction::Block | BulkAction::Unblock => "button",
    }
}

fn sort_headers(model: RwSignal<UserListModel>) -> impl IntoView {
    SortField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <th
                    class="user-table__sortable"
                    on:click=move |_| model.update(|list| list.toggle_sort(field))
                >
                    {field.label()}
                    <span class="user-table__arrow">{move || model.get().sort.indicator(field)}</span>
                </th>
            }
        })
        .collect_view()
}

fn user_row(user: User, model: RwSignal<UserListModel>) -> impl IntoView {
    let id = user.id;
    let last_seen = format_last_login(user.last_login.as_deref());
    view! {
        <tr class=row_class(&user)>
            <td>
                <input
                    type="checkbox"
                    prop:checked=move || model.get().selection.contains(id)
                    on:change=move |_| model.update(|list| list.toggle_row(id))
                />
            </td>
            <td>{user.name.clone()}</td>
            <td>{user.email.clone()}</td>
            <td>{last_seen}</td>
            <td>{user.status_label()}</td>
        </tr>
    }
}

#[component]
pub fn UserListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let errors = expect_context::<RwSignal<ErrorSlot>>();
    let config = expect_context::<ClientConfig>();

    let model = RwSignal::new(UserListModel::pending());
    let in_flight = RwSignal::new(0_usize);

    #[cfg(feature = "hydrate")]
    {
        let api = browser_api(&config);
        let policy = config.empty_list_policy;
        leptos::task::spawn_local(async move {
            let outcome = load_users(&api, policy).await;
            settle(outcome, model, auth, errors);
        });
    }

    let run = Callback::new(move |action: BulkAction| {
        let ids = model.get_untracked().selection.ids().to_vec();
        if ids.is_empty() {
            return;
        }
        in_flight.update(|count| *count += 1);

        #[cfg(feature = "hydrate")]
        {
            let api = browser_api(&config);
            let policy = config.empty_list_policy;
            leptos::task::spawn_local(async move {
                let outcome = run_bulk(&api, action, &ids, policy).await;
                settle(outcome, model, auth, errors);
                in_flight.update(|count| *count = count.saturating_sub(1));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (action, &config, auth, errors);
            in_flight.update(|count| *count = count.saturating_sub(1));
        }
    });

    let toolbar = BULK_ACTIONS
        .into_iter()
        .map(|action| {
            view! {
                <button
                    class=button_class(action)
                    disabled=move || !bulk_enabled(&model.get())
                    on:click=move |_| run.run(action)
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="user-list-page">
            <ActiveUserCard/>
            <div class="user-list-page__toolbar">
                {toolbar}
                <Show when=move || (in_flight.get() > 0)>
                    <Spinner small=true/>
                </Show>
            </div>
            <Show when=move || !model.get().loading fallback=|| view! { <Spinner/> }>
                <table class="user-table">
                    <thead>
                        <tr>
                            <th>
                                <input
                                    type="checkbox"
                                    aria-label="Select all"
                                    prop:checked=move || model.get().all_selected()
                                    on:change=move |_| model.update(UserListModel::toggle_all)
                                />
                            </th>
                            {sort_headers(model)}
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            model
                                .get()
                                .sorted()
                                .into_iter()
                                .map(|user| user_row(user, model))
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
