//! Case-insensitive substring search shared by the log views

/// Lowercased search box contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchText {
    needle: String,
}

impl SearchText {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Empty search matches everything
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}
