use super::*;

fn user(id: UserId, name: &str, email: &str, last_login: Option<&str>) -> User {
    User {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        last_login: last_login.map(ToOwned::to_owned),
        block_status: 0,
    }
}

fn ids(users: &[User]) -> Vec<UserId> {
    users.iter().map(|u| u.id).collect()
}

fn example() -> Vec<User> {
    vec![
        user(1, "B", "b@example.com", Some("2024-01-02")),
        user(2, "A", "a@example.com", Some("2024-01-01")),
    ]
}

fn team() -> Vec<User> {
    vec![
        user(1, "carol", "carol@example.com", Some("2024-03-01T08:00:00Z")),
        user(2, "Alice", "zed@example.com", Some("2024-01-15T08:00:00Z")),
        user(3, "bob", "bob@example.com", Some("2024-02-10T08:00:00Z")),
        user(4, "Dave", "dave@example.com", Some("2023-12-31T23:59:59Z")),
    ]
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn example_sorted_by_name_ascending() {
    let sorted = sort_users(&example(), SortState::new(SortField::Name, SortOrder::Asc));
    let names: Vec<_> = sorted.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn example_sorted_by_last_login_ascending() {
    let sorted = sort_users(&example(), SortState::new(SortField::LastLogin, SortOrder::Asc));
    assert_eq!(ids(&sorted), [2, 1]);
}

#[test]
fn last_login_descending_reverses_ascending() {
    let asc = sort_users(&team(), SortState::new(SortField::LastLogin, SortOrder::Asc));
    let desc = sort_users(&team(), SortState::new(SortField::LastLogin, SortOrder::Desc));
    let mut reversed = ids(&asc);
    reversed.reverse();
    assert_eq!(ids(&desc), reversed);
    assert_eq!(ids(&asc), [4, 2, 3, 1]);
}

#[test]
fn sorting_is_idempotent() {
    for field in SortField::ALL {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let sort = SortState::new(field, order);
            let once = sort_users(&team(), sort);
            let twice = sort_users(&once, sort);
            assert_eq!(once, twice, "{field:?} {order:?}");
        }
    }
}

#[test]
fn text_sort_is_case_insensitive() {
    let sorted = sort_users(&team(), SortState::new(SortField::Name, SortOrder::Asc));
    assert_eq!(ids(&sorted), [2, 3, 1, 4]);
    let by_email = sort_users(&team(), SortState::new(SortField::Email, SortOrder::Desc));
    assert_eq!(ids(&by_email), [2, 4, 1, 3]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let users = vec![
        user(1, "Same", "x@example.com", None),
        user(2, "Same", "y@example.com", None),
        user(3, "Same", "z@example.com", None),
    ];
    for order in [SortOrder::Asc, SortOrder::Desc] {
        let sorted = sort_users(&users, SortState::new(SortField::Name, order));
        assert_eq!(ids(&sorted), [1, 2, 3]);
    }
}

#[test]
fn missing_timestamps_sort_first_when_ascending() {
    let users = vec![
        user(1, "a", "a@x.io", Some("2024-01-01")),
        user(2, "b", "b@x.io", None),
        user(3, "c", "c@x.io", Some("garbage")),
    ];
    let sorted = sort_users(&users, SortState::new(SortField::LastLogin, SortOrder::Asc));
    assert_eq!(ids(&sorted), [2, 3, 1]);
}

// =============================================================
// SortState
// =============================================================

#[test]
fn default_sort_is_last_login_ascending() {
    assert_eq!(SortState::default(), SortState::new(SortField::LastLogin, SortOrder::Asc));
}

#[test]
fn toggle_same_field_flips_order() {
    let mut sort = SortState::default();
    sort.toggle(SortField::LastLogin);
    assert_eq!(sort.order, SortOrder::Desc);
    sort.toggle(SortField::LastLogin);
    assert_eq!(sort.order, SortOrder::Asc);
}

#[test]
fn toggle_new_field_resets_to_ascending() {
    let mut sort = SortState::new(SortField::Name, SortOrder::Desc);
    sort.toggle(SortField::Email);
    assert_eq!(sort, SortState::new(SortField::Email, SortOrder::Asc));
}

#[test]
fn indicator_only_on_active_column() {
    let sort = SortState::new(SortField::Email, SortOrder::Desc);
    assert_eq!(sort.indicator(SortField::Email), "↓");
    assert_eq!(sort.indicator(SortField::Name), "");
    assert_eq!(SortState::default().indicator(SortField::LastLogin), "↑");
}

// =============================================================
// Selection
// =============================================================

#[test]
fn toggle_row_adds_then_removes() {
    let mut selection = Selection::default();
    selection.toggle(3);
    selection.toggle(1);
    assert_eq!(selection.ids(), [3, 1]);
    selection.toggle(3);
    assert_eq!(selection.ids(), [1]);
    assert!(selection.contains(1));
    assert!(!selection.contains(3));
}

#[test]
fn select_all_drops_duplicates() {
    let mut selection = Selection::default();
    selection.select_all([1, 2, 2, 3]);
    assert_eq!(selection.ids(), [1, 2, 3]);
}

#[test]
fn select_all_then_toggle_again_is_empty() {
    let mut model = UserListModel::default();
    model.replace_users(team());
    model.toggle_all();
    assert!(model.all_selected());
    assert_eq!(model.selection.len(), 4);
    model.toggle_all();
    assert!(model.selection.is_empty());
    assert!(!model.all_selected());
}

#[test]
fn all_selected_requires_non_empty_list() {
    let mut model = UserListModel::default();
    assert!(!model.all_selected());
    model.toggle_all();
    assert!(!model.all_selected());
    assert!(model.selection.is_empty());
}

#[test]
fn all_selected_tracks_individual_toggles() {
    let mut model = UserListModel::default();
    model.replace_users(example());
    model.toggle_row(1);
    assert!(!model.all_selected());
    model.toggle_row(2);
    assert!(model.all_selected());
    model.toggle_row(1);
    assert!(!model.all_selected());
}

#[test]
fn partial_selection_toggle_all_selects_everything() {
    let mut model = UserListModel::default();
    model.replace_users(team());
    model.toggle_row(2);
    model.toggle_all();
    assert_eq!(model.selection.ids(), [1, 2, 3, 4]);
}

#[test]
fn replace_users_clears_selection_and_loading() {
    let mut model = UserListModel::pending();
    assert!(model.loading);
    model.replace_users(team());
    model.toggle_all();
    model.replace_users(example());
    assert!(model.selection.is_empty());
    assert!(!model.loading);
    assert!(!model.can_act());
}

#[test]
fn sorted_does_not_reorder_loaded_list() {
    let mut model = UserListModel::default();
    model.replace_users(team());
    model.toggle_sort(SortField::Name);
    let _ = model.sorted();
    assert_eq!(ids(model.users()), [1, 2, 3, 4]);
}
