//! Caller-owned session state
//!
//! Holds the most recent list of article links so the shell can redisplay
//! it between actions. The pipeline never touches this; the action layer
//! replaces it wholesale after a successful, non-empty fetch.

/// The last article links fetched in this session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSession {
    article_links: Vec<String>,
}

impl ArticleSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn article_links(&self) -> &[String] {
        &self.article_links
    }

    /// Replace the stored links; nothing from the previous list survives
    pub fn replace<I>(&mut self, links: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.article_links = links.into_iter().collect();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.article_links.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.article_links.len()
    }
}
