//! Runtime configuration handed from the host to the browser.
//!
//! The host renders each setting as a `<meta>` tag in the SSR shell; the
//! hydrated client reads them back from the document. During SSR the same
//! value is provided as context by the shell itself.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use accounts::flow::EmptyListPolicy;

/// `<meta name=..>` carrying the REST backend base URL.
pub const API_BASE_META: &str = "userdesk-api-base";
/// `<meta name=..>` carrying the empty-list policy (`logout` or `keep`).
pub const EMPTY_LIST_META: &str = "userdesk-empty-list";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every `api/users/*` path is joined onto.
    pub api_base: String,
    pub empty_list_policy: EmptyListPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/".to_owned(),
            empty_list_policy: EmptyListPolicy::Logout,
        }
    }
}

impl ClientConfig {
    /// Build from raw meta values, falling back to defaults for blanks.
    #[must_use]
    pub fn from_meta(api_base: Option<String>, empty_list: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base),
            empty_list_policy: empty_list
                .as_deref()
                .map_or(defaults.empty_list_policy, parse_policy),
        }
    }

    /// Read the meta tags rendered by the host shell.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::from_meta(read_meta(API_BASE_META), read_meta(EMPTY_LIST_META))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Value written into the `EMPTY_LIST_META` tag.
    #[must_use]
    pub fn empty_list_meta_value(&self) -> &'static str {
        match self.empty_list_policy {
            EmptyListPolicy::Logout => "logout",
            EmptyListPolicy::Keep => "keep",
        }
    }
}

fn parse_policy(raw: &str) -> EmptyListPolicy {
    match raw.trim().to_ascii_lowercase().as_str() {
        "keep" => EmptyListPolicy::Keep,
        _ => EmptyListPolicy::Logout,
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?;
    element.get_attribute("content")
}
