//! Plain-text output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use accounts::User;
use accounts::timestamp::format_last_login;
use serde_json::Value;

use crate::error::CliError;

const HEADERS: [&str; 5] = ["ID", "NAME", "EMAIL", "LAST SEEN", "STATUS"];

fn cells(user: &User) -> [String; 5] {
    [
        user.id.to_string(),
        user.name.clone(),
        user.email.clone(),
        format_last_login(user.last_login.as_deref()),
        user.status_label().to_owned(),
    ]
}

/// Column-aligned table, one row per user.
pub fn user_table(users: &[User]) -> String {
    if users.is_empty() {
        return "no users".to_owned();
    }
    let rows: Vec<[String; 5]> = users.iter().map(cells).collect();
    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cols: &[&str]| {
        cols.iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };

    let mut out = vec![line(&HEADERS)];
    for row in &rows {
        let cols: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(line(&cols));
    }
    out.join("\n")
}

/// One-line summary of the signed-in user.
pub fn user_summary(user: &User) -> String {
    format!(
        "{} <{}> #{} [{}] last seen {}",
        user.name,
        user.email,
        user.id,
        user.status_label(),
        format_last_login(user.last_login.as_deref())
    )
}

pub fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
