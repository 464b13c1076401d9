//! Category identifiers.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The pricing classification of a rented item.
///
/// Identifiers are normalized to SCREAMING_SNAKE_CASE on construction, so
/// `"new release"`, `"new_release"` and `"NEW_RELEASE"` name the same
/// category.
///
/// # Example
///
/// ```
/// use rental_engine::pricing::Category;
///
/// assert_eq!(Category::new("new_release"), Category::NEW_RELEASE);
/// assert_eq!(Category::CLASSIC.as_str(), "CLASSIC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Category(Cow<'static, str>);

impl Category {
    /// Standard pricing for everyday titles.
    pub const REGULAR: Category = Category(Cow::Borrowed("REGULAR"));
    /// Recently released titles.
    pub const NEW_RELEASE: Category = Category(Cow::Borrowed("NEW_RELEASE"));
    /// Children's titles.
    pub const CHILDRENS: Category = Category(Cow::Borrowed("CHILDRENS"));
    /// Classic titles, charged per day with no fixed rental cost.
    pub const CLASSIC: Category = Category(Cow::Borrowed("CLASSIC"));

    /// Creates a category from an identifier, normalizing its spelling.
    pub fn new(id: impl AsRef<str>) -> Self {
        let normalized: String = id
            .as_ref()
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        Category(Cow::Owned(normalized))
    }

    /// Returns the normalized identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Category {
    fn from(id: String) -> Self {
        Category::new(id)
    }
}

impl From<&str> for Category {
    fn from(id: &str) -> Self {
        Category::new(id)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0.into_owned()
    }
}
