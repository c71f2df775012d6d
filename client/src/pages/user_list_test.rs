use super::*;

fn user(id: i64, blocked: bool) -> User {
    User {
        id,
        name: format!("user{id}"),
        email: format!("user{id}@example.com"),
        last_login: Some("2024-01-02T14:05:00Z".to_owned()),
        block_status: u8::from(blocked),
    }
}

fn signed_in() -> AuthState {
    let mut state = AuthState::resolving();
    state.finish_check(Some(user(1, false)));
    state
}

// =============================================================
// Pure helpers
// =============================================================

#[test]
fn blocked_rows_get_struck_through_class() {
    assert!(row_class(&user(1, true)).contains("--blocked"));
    assert!(!row_class(&user(1, false)).contains("--blocked"));
}

#[test]
fn bulk_buttons_follow_selection_only() {
    let mut model = UserListModel::default();
    model.replace_users(vec![user(1, false), user(2, false)]);
    assert!(!bulk_enabled(&model));
    model.toggle_row(2);
    assert!(bulk_enabled(&model));
}

#[test]
fn only_delete_is_styled_as_danger() {
    assert!(button_class(BulkAction::Delete).contains("danger"));
    assert!(!button_class(BulkAction::Block).contains("danger"));
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_loaded_installs_list_and_clears_selection() {
    let owner = Owner::new();
    owner.with(|| {
        let model = RwSignal::new(UserListModel::pending());
        let auth = RwSignal::new(signed_in());
        let errors = RwSignal::new(ErrorSlot::default());
        model.update(|list| list.toggle_row(9));

        settle(ListOutcome::Loaded(vec![user(1, false), user(2, true)]), model, auth, errors);

        let list = model.get_untracked();
        assert_eq!(list.users().len(), 2);
        assert!(list.selection.is_empty());
        assert!(!list.loading);
        assert!(auth.get_untracked().is_authenticated());
    });
}

#[test]
fn settle_unauthorized_failure_signs_out_and_raises() {
    let owner = Owner::new();
    owner.with(|| {
        let model = RwSignal::new(UserListModel::pending());
        let auth = RwSignal::new(signed_in());
        let errors = RwSignal::new(ErrorSlot::default());

        let outcome = ListOutcome::Failed { message: "Unauthorized".to_owned(), logout: true };
        settle(outcome, model, auth, errors);

        assert!(!auth.get_untracked().is_authenticated());
        assert!(!model.get_untracked().loading);
        let slot = errors.get_untracked();
        assert!(slot.is_visible());
        assert_eq!(slot.message(), "Unauthorized");
    });
}

#[test]
fn settle_emptied_signs_out_without_error() {
    let owner = Owner::new();
    owner.with(|| {
        let model = RwSignal::new(UserListModel::pending());
        let auth = RwSignal::new(signed_in());
        let errors = RwSignal::new(ErrorSlot::default());

        settle(ListOutcome::Emptied, model, auth, errors);

        assert!(!auth.get_untracked().is_authenticated());
        assert!(model.get_untracked().users().is_empty());
        assert!(!errors.get_untracked().is_visible());
    });
}
