//! Property-based tests for tag parsing and rendering.
//!
//! Each property holds for any generated tag body, not only the fixtures
//! used by the unit and integration tests.
use proptest::prelude::*;

use crate::{Error, ParsedFields, Session, render};

const PATH: &str = r"(https?://[a-z]{1,8}\.com)?/[a-z]{1,8}/[a-z0-9_-]{1,8}\.(png|jpg)";
const TITLE: &str = r"[A-Za-z!?]{1,10}( [A-Za-z!?]{1,10}){0,3}";
const CLASSES: &str = r"[a-z]{1,8}( [a-z]{1,8}){0,3}";
const PADDING: &str = r"[ \t]{0,3}";
const GAP: &str = r"[ \t]{1,3}";

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    /// Rendering returns a result for any input, never panics.
    #[test]
    fn render_never_panics(input in ".*") {
        let _ = render(&Session::new(), &input);
    }

    /// Without a `/` there is no image source, so the tag is rejected.
    #[test]
    fn missing_source_is_syntax_error(input in r#"[a-zA-Z0-9 .,!?:"'\t-]{0,60}"#) {
        prop_assert!(matches!(ParsedFields::parse(&input), Err(Error::Syntax)));
    }

    /// Field values never carry the whitespace around them.
    #[test]
    fn fields_are_trimmed(
        left in PADDING,
        src in PATH,
        gap in GAP,
        title in TITLE,
        right in PADDING,
    ) {
        let parsed = ParsedFields::parse(&format!("{left}{src}{gap}{title}{right}"))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(parsed.src, src);
        prop_assert_eq!(parsed.title.as_deref(), Some(title.as_str()));
    }

    /// An unquoted title doubles as alt text.
    #[test]
    fn alt_defaults_to_title(src in PATH, title in TITLE) {
        let parsed = ParsedFields::parse(&format!("{src} {title}"))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(parsed.alt, parsed.title);
    }

    /// One session, one group; a new session, a new group.
    #[test]
    fn group_is_per_session(first in PATH, second in PATH) {
        let session = Session::new();
        let attribute = |html: &str| {
            html.split('"').nth(1).map(ToString::to_string)
        };
        let a = render(&session, &first).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let b = render(&session, &second).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let c = render(&Session::new(), &first).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(attribute(&a), Some(session.group().to_string()));
        prop_assert_eq!(attribute(&a), attribute(&b));
        prop_assert_ne!(attribute(&a), attribute(&c));
    }

    /// User classes reach the link but never the image.
    #[test]
    fn image_class_ignores_user_classes(classes in CLASSES, src in PATH, title in TITLE) {
        let html = render(&Session::with_group("g"), &format!("{classes} {src} {title}"))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let expected_link = format!(r#"class="{classes} example-image-link""#);
        let expected_image = format!(r#"<img class="example-image" src="{src}""#);
        prop_assert!(html.contains(&expected_link), "link class missing in {}", html);
        prop_assert!(html.contains(&expected_image), "image class wrong in {}", html);
    }
}
