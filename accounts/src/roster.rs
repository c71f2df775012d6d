//! View model behind the user table: sort state, row selection, loaded list.
//!
//! DESIGN
//! ======
//! The loaded list is never reordered in place; [`UserListModel::sorted`]
//! produces a sorted copy on every render so a refetch can simply replace
//! `users`. Selection keeps insertion order because that order becomes the
//! `id=..&id=..` query of the next bulk call.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use std::cmp::Ordering;

use crate::types::{User, UserId};

/// Column the table is sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    Name,
    Email,
    #[default]
    LastLogin,
}

impl SortField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::LastLogin];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::LastLogin => "Last Seen",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortState {
    #[must_use]
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Header click: same column flips the order, a new column starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.order = self.order.reversed();
        } else {
            self.field = field;
            self.order = SortOrder::Asc;
        }
    }

    /// Arrow to render next to `field`'s header, empty for inactive columns.
    #[must_use]
    pub fn indicator(&self, field: SortField) -> &'static str {
        if self.field == field { self.order.arrow() } else { "" }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare(a: &User, b: &User, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_text(&a.name, &b.name),
        SortField::Email => compare_text(&a.email, &b.email),
        // Missing or unparseable timestamps sort as earliest.
        SortField::LastLogin => a.last_login_at().cmp(&b.last_login_at()),
    }
}

/// Stable sort of `users` by `sort`. Equal keys keep their input order in both
/// directions.
#[must_use]
pub fn sort_users(users: &[User], sort: SortState) -> Vec<User> {
    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Ordered set of checked row ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<UserId>,
}

impl Selection {
    #[must_use]
    pub fn ids(&self) -> &[UserId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: UserId) -> bool {
        self.ids.contains(&id)
    }

    /// Check or uncheck a single row.
    pub fn toggle(&mut self, id: UserId) {
        if let Some(index) = self.ids.iter().position(|&existing| existing == id) {
            self.ids.remove(index);
        } else {
            self.ids.push(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replace the selection with `ids`, dropping duplicates.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = UserId>) {
        self.ids.clear();
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }
}

/// Everything the user table renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserListModel {
    users: Vec<User>,
    pub sort: SortState,
    pub selection: Selection,
    /// True until the first list fetch settles.
    pub loading: bool,
}

impl UserListModel {
    /// Fresh model waiting for its first fetch.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Install a freshly fetched list. The selection is cleared because the
    /// ids it holds may no longer exist.
    pub fn replace_users(&mut self, users: Vec<User>) {
        self.users = users;
        self.selection.clear();
        self.loading = false;
    }

    #[must_use]
    pub fn sorted(&self) -> Vec<User> {
        sort_users(&self.users, self.sort)
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    pub fn toggle_row(&mut self, id: UserId) {
        self.selection.toggle(id);
    }

    /// Header checkbox: clear when everything is checked, else check every
    /// loaded row.
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selection.clear();
        } else {
            self.selection.select_all(self.users.iter().map(|u| u.id));
        }
    }

    /// Header checkbox state, derived from the current list and selection.
    #[must_use]
    pub fn all_selected(&self) -> bool {
        !self.users.is_empty() && self.selection.len() == self.users.len()
    }

    /// Bulk buttons are disabled while nothing is checked.
    #[must_use]
    pub fn can_act(&self) -> bool {
        !self.selection.is_empty()
    }
}
