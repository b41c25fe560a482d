//! A Liquid-style `{% lightbox %}` tag.
//!
//! The tag turns a compact image description into an image wrapped in a
//! lightbox link:
//!
//! ```text
//! {% lightbox [class name(s)] [http[s]:/]/path/to/image [width [height]] [title text | "title text" ["alt text"]] %}
//! ```
//!
//! The host preprocessor strips the `{% lightbox` and `%}` delimiters and
//! hands the remaining text to [`render`] (or to [`Lightbox`] through the
//! [`Tag`] trait), together with the [`Session`] for the current document.
//! All images rendered through one session share a `data-lightbox` group.
//!
//! # Example
//!
//! ```
//! use lightbox_tag::{Session, render};
//!
//! let session = Session::new();
//! let html = render(
//!     &session,
//!     r#"left half http://site.com/images/ninja.png 150 150 "Ninja Attack!" "Ninja in attack posture""#,
//! )?;
//! assert!(html.starts_with(r#"<a data-lightbox=""#));
//! assert!(html.contains(r#"class="left half example-image-link""#));
//! assert!(html.contains(r#"width="150" height="150" title="Ninja Attack!" alt="Ninja in attack posture""#));
//! # Ok::<(), lightbox_tag::Error>(())
//! ```
mod attributes;
mod constants;
mod error;
mod markup;
mod session;
mod tag;

#[cfg(test)]
mod proptests;

pub use attributes::{ImageAttributes, LinkAttributes};
pub use constants::{IMAGE_CLASS, LINK_CLASS, SYNTAX, TAG_NAME};
pub use error::Error;
pub use markup::ParsedFields;
pub use session::Session;
pub use tag::{Lightbox, Tag, render};
