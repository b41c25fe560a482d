use std::sync::OnceLock;

use uuid::Uuid;

/// State for one document pass.
///
/// Every lightbox rendered through the same `Session` shares one group
/// identifier, so a page's images form a single gallery. Use a fresh
/// `Session` per document.
#[derive(Debug, Default)]
pub struct Session {
    group: OnceLock<String>,
}

impl Session {
    /// Create a session whose group identifier is generated on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a fixed group identifier.
    ///
    /// Useful for reproducible output, since the generated identifier is random.
    ///
    /// # Example
    ///
    /// ```
    /// use lightbox_tag::Session;
    ///
    /// let session = Session::with_group("holiday");
    /// assert_eq!(session.group(), "holiday");
    /// ```
    #[must_use]
    pub fn with_group(group: impl Into<String>) -> Self {
        Self {
            group: OnceLock::from(group.into()),
        }
    }

    /// The group identifier, generated the first time it is asked for.
    #[must_use]
    pub fn group(&self) -> &str {
        self.group.get_or_init(|| {
            let group = Uuid::new_v4().to_string();
            tracing::debug!(%group, "assigned lightbox group");
            group
        })
    }

    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.group.get().is_some()
    }
}
