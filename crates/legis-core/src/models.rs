use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of characters shown by [`AccessToken::preview`].
const TOKEN_PREVIEW_LEN: usize = 15;

/// Bearer token returned by the OAuth token endpoint.
///
/// The expiry announced by the server is not tracked; callers fetch a new
/// token whenever they do not hold one.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First few characters followed by an ellipsis, for diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use legis_core::AccessToken;
    ///
    /// let token = AccessToken::new("abcdefghijklmnopqrstuvwxyz");
    /// assert_eq!(token.preview(), "abcdefghijklmno...");
    /// ```
    pub fn preview(&self) -> String {
        let head: String = self.0.chars().take(TOKEN_PREVIEW_LEN).collect();
        format!("{}...", head)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Flattened view of one search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    pub title: String,
    pub nature: String,
    pub date: String,
    pub id: Option<String>,
    pub excerpts: Vec<Excerpt>,
}

/// A matching passage inside a search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Excerpt {
    /// Article number, e.g. `"1128"`
    pub article_number: String,
    /// First highlighted value of the extract, empty when none
    pub text: String,
    pub id: String,
}
