use indexmap::IndexSet;

/// Reasoning tags offered to the user by default.
pub const DEFAULT_REASONING_TAGS: [&str; 8] = [
    "Inflation Concerns",
    "Labor Market Strength",
    "Financial Stability",
    "Economic Growth",
    "Global Risks",
    "Manufacturing Weakness",
    "Housing Market",
    "Consumer Spending",
];

/// Multi-select tag set, independent of any single point.
///
/// Selection order is preserved so submissions list tags the way they were
/// picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    tags: IndexSet<String>,
}

impl AnnotationSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `tag` when absent, removes it when present.
    ///
    /// Returns the new selection state of `tag`.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.tags.shift_remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_owned());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn tags(&self) -> &IndexSet<String> {
        &self.tags
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

impl<T: Into<String>> FromIterator<T> for AnnotationSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}
