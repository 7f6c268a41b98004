// src/models/category.rs

use serde::{Deserialize, Serialize};

/// A vehicle category discovered on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Anchor text, used as the `kind` of every listing in the category
    pub name: String,

    /// `href` exactly as found in the markup
    pub relative_url: String,
}
