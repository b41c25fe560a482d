use crate::{
    Error, ImageAttributes, LinkAttributes, ParsedFields, Session, constants::TAG_NAME,
};

/// A tag a host preprocessor can dispatch `{% name ... %}` occurrences to.
pub trait Tag {
    /// Keyword that follows `{%`.
    fn name(&self) -> &'static str;

    /// Render the tag body (the text between the keyword and `%}`) to HTML.
    ///
    /// # Errors
    ///
    /// Returns an error when the body does not follow the tag's syntax.
    fn render(&self, session: &Session, markup: &str) -> Result<String, Error>;
}

/// The `{% lightbox %}` tag.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lightbox;

impl Tag for Lightbox {
    fn name(&self) -> &'static str {
        TAG_NAME
    }

    fn render(&self, session: &Session, markup: &str) -> Result<String, Error> {
        render(session, markup)
    }
}

/// Render a lightbox tag body to `<a ...><img ...></a>`.
///
/// # Example
///
/// ```
/// use lightbox_tag::{Session, render};
///
/// let session = Session::with_group("ninjas");
/// let html = render(&session, "/images/ninja.png Ninja Attack!")?;
/// assert_eq!(
///     html,
///     r#"<a data-lightbox="ninjas" href="/images/ninja.png" title="Ninja Attack!" class="example-image-link"><img class="example-image" src="/images/ninja.png" title="Ninja Attack!" alt="Ninja Attack!"></a>"#
/// );
/// # Ok::<(), lightbox_tag::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] when `markup` contains no image source.
#[tracing::instrument(skip(session))]
pub fn render(session: &Session, markup: &str) -> Result<String, Error> {
    let fields = ParsedFields::parse(markup)?;
    let link = LinkAttributes::new(&fields, session.group());
    let image = ImageAttributes::new(&fields);
    Ok(format!("<a {link}><img {image}></a>"))
}
