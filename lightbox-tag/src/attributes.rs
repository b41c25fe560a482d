//! HTML attributes for the `<a>` wrapper and the `<img>` it holds.
//!
//! Attributes render in a fixed order as `key="value"` pairs separated by a
//! single space. Values are written as-is, without escaping.
use std::fmt;

use crate::{
    ParsedFields,
    constants::{IMAGE_CLASS, LINK_CLASS},
};

fn write_pairs<'a, I>(f: &mut fmt::Formatter<'_>, pairs: I) -> fmt::Result
where
    I: IntoIterator<Item = (&'static str, Option<&'a str>)>,
{
    let mut separator = "";
    for (key, value) in pairs {
        if let Some(value) = value {
            write!(f, "{separator}{key}=\"{value}\"")?;
            separator = " ";
        }
    }
    Ok(())
}

/// Attributes of the `<a>` element.
///
/// Renders as `data-lightbox, href, title, class`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkAttributes<'a> {
    pub data_lightbox: &'a str,
    pub href: &'a str,
    pub title: Option<&'a str>,
    /// User classes, if any, followed by [`LINK_CLASS`].
    pub class: String,
}

impl<'a> LinkAttributes<'a> {
    #[must_use]
    pub fn new(fields: &'a ParsedFields, group: &'a str) -> Self {
        let class = match fields.class.as_deref() {
            Some(user) => format!("{user} {LINK_CLASS}"),
            None => LINK_CLASS.to_string(),
        };
        Self {
            data_lightbox: group,
            href: &fields.src,
            title: fields.title.as_deref(),
            class,
        }
    }
}

impl fmt::Display for LinkAttributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pairs(
            f,
            [
                ("data-lightbox", Some(self.data_lightbox)),
                ("href", Some(self.href)),
                ("title", self.title),
                ("class", Some(self.class.as_str())),
            ],
        )
    }
}

/// Attributes of the `<img>` element.
///
/// Renders as `class, src, width, height, title, alt`. User classes only
/// decorate the link, so `class` is always [`IMAGE_CLASS`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAttributes<'a> {
    pub class: &'static str,
    pub src: &'a str,
    pub width: Option<&'a str>,
    pub height: Option<&'a str>,
    pub title: Option<&'a str>,
    pub alt: Option<&'a str>,
}

impl<'a> ImageAttributes<'a> {
    #[must_use]
    pub fn new(fields: &'a ParsedFields) -> Self {
        Self {
            class: IMAGE_CLASS,
            src: &fields.src,
            width: fields.width.as_deref(),
            height: fields.height.as_deref(),
            title: fields.title.as_deref(),
            alt: fields.alt.as_deref(),
        }
    }
}

impl fmt::Display for ImageAttributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pairs(
            f,
            [
                ("class", Some(self.class)),
                ("src", Some(self.src)),
                ("width", self.width),
                ("height", self.height),
                ("title", self.title),
                ("alt", self.alt),
            ],
        )
    }
}
