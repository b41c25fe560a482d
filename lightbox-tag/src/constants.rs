//! Fixed strings shared by the parser and the renderer.

/// Keyword the host matches in `{% lightbox ... %}`.
pub const TAG_NAME: &str = "lightbox";

/// Documented tag syntax, embedded verbatim in syntax errors.
pub const SYNTAX: &str = r#"{% lightbox [class name(s)] [http[s]:/]/path/to/image [width [height]] [title text | "title text" ["alt text"]] %}"#;

/// Class always carried by the `<a>` wrapper, after any user classes.
pub const LINK_CLASS: &str = "example-image-link";

/// Class always carried by the `<img>` element.
pub const IMAGE_CLASS: &str = "example-image";

/// Tag body: `[classes] src [width [height]] [title]`.
///
/// The `class` group is greedy, so it swallows every token up to the last
/// path-like token that can still serve as `src`.
pub(crate) const IMAGE_PATTERN: &str = r"(?P<class>\S.*\s+)?(?P<src>(?:https?://|/|\S+/)\S+)(?:\s+(?P<width>\d+))?(?:\s+(?P<height>\d+))?(?P<title>\s+.+)?";

/// Quoted `"title" "alt"` pair inside the title group.
pub(crate) const TITLE_ALT_PATTERN: &str =
    r#"(?:"|')(?P<title>[^"']+)?(?:"|')\s+(?:"|')(?P<alt>[^"']+)?(?:"|')"#;
