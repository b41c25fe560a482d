use crate::constants::SYNTAX;

#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("Error processing input. Expected syntax: {}", SYNTAX)]
    Syntax,

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Get advice for this error if available.
    /// Returns helpful information for resolving the error.
    #[must_use]
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::Syntax => Some(
                "The tag needs an image source: a URL starting with http:// or https://, an absolute path starting with '/', or any token containing a '/'",
            ),
            Self::Pattern(_) => None,
        }
    }
}
