//! Parsing of a tag body into [`ParsedFields`].
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::{
    Error,
    constants::{IMAGE_PATTERN, TITLE_ALT_PATTERN},
};

static IMAGE_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(IMAGE_PATTERN));

static TITLE_ALT_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(TITLE_ALT_PATTERN));

fn compiled(
    pattern: &'static LazyLock<Result<Regex, regex::Error>>,
) -> Result<&'static Regex, Error> {
    LazyLock::force(pattern)
        .as_ref()
        .map_err(|e| Error::Pattern(e.clone()))
}

/// Trimmed text of a named group, or `None` when the group did not match or is blank.
fn capture(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name)
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

/// Overwrites `dest` only when `value` is present.
fn merge(dest: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *dest = value;
    }
}

/// The fields recognized in a `{% lightbox ... %}` body.
///
/// Every optional field is either absent or non-empty. `alt` is present
/// exactly when `title` is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParsedFields {
    /// Space-separated class names written before the image source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Image URL or path.
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ParsedFields {
    /// Parse the text between `lightbox` and the closing `%}`.
    ///
    /// Non-numeric widths and heights are not errors; they end up as part of
    /// the title, or are dropped, depending on where the digits stop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] when `markup` holds no token usable as an
    /// image source.
    #[tracing::instrument]
    pub fn parse(markup: &str) -> Result<Self, Error> {
        let Some(caps) = compiled(&IMAGE_RE)?.captures(markup) else {
            tracing::error!(markup, "no image source found in lightbox tag");
            return Err(Error::Syntax);
        };
        let src = capture(&caps, "src").ok_or(Error::Syntax)?;

        let mut fields = Self {
            class: capture(&caps, "class"),
            src,
            width: capture(&caps, "width"),
            height: capture(&caps, "height"),
            title: capture(&caps, "title"),
            alt: None,
        };
        fields.split_title_alt()?;

        tracing::debug!(?fields, "parsed lightbox markup");
        Ok(fields)
    }

    /// Split a `"title" "alt"` pair out of the title, then default `alt` to the title.
    fn split_title_alt(&mut self) -> Result<(), Error> {
        let Some(title) = self.title.as_deref() else {
            return Ok(());
        };

        if let Some(caps) = compiled(&TITLE_ALT_RE)?.captures(title) {
            let quoted_title = capture(&caps, "title");
            let alt = capture(&caps, "alt");
            merge(&mut self.title, quoted_title);
            merge(&mut self.alt, alt);
        }

        if self.alt.is_none() {
            self.alt.clone_from(&self.title);
        }
        Ok(())
    }
}
