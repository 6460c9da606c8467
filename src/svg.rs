//! SVG markup helpers for bundled icon assets.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]+>").expect("valid tag pattern"));

static PAINT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+(?:fill|stroke|stroke-width|style|class)\s*=\s*(?:"[^"]*"|'[^']*')"#)
        .expect("valid paint attribute pattern")
});

static SIZE_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+(?:width|height)\s*=\s*(?:"[^"]*"|'[^']*')"#)
        .expect("valid size attribute pattern")
});

static SVG_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<svg(?:[\s/>]|$)").expect("valid root pattern"));

/// Reduce an SVG to an outline icon that inherits its colour from the page.
///
/// `fill`, `stroke`, `stroke-width`, `style` and `class` are removed from
/// every element. The root `<svg>` also loses its `width`/`height` and gets a
/// fixed square size, `fill="none"` and a `currentColor` stroke. Child
/// geometry (including `width`/`height` on shapes) and `viewBox` are kept.
/// Comments, processing instructions and declarations pass through untouched.
pub fn sanitize_to_outline(svg: &str, size: u32) -> String {
    let mut root_seen = false;

    TAG_RE
        .replace_all(svg, |caps: &Captures| {
            let tag = &caps[0];
            if tag.starts_with("<!") || tag.starts_with("<?") || tag.starts_with("</") {
                return tag.to_string();
            }

            let painted = PAINT_ATTR_RE.replace_all(tag, "");
            if root_seen || !SVG_OPEN_RE.is_match(&painted) {
                return painted.into_owned();
            }

            root_seen = true;
            let r#unsized = SIZE_ATTR_RE.replace_all(&painted, "");
            format!(
                r#"<svg width="{size}" height="{size}" fill="none" stroke="currentColor" stroke-width="1.5"{}"#,
                &r#unsized["<svg".len()..]
            )
        })
        .into_owned()
}
