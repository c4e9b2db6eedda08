//! Allow-list HTML sanitizer for script-capable preview surfaces.
//!
//! Input is parsed into a DOM by `ammonia` (html5ever underneath), filtered against
//! fixed tag and attribute allow-lists, and serialized back. Anything not explicitly
//! permitted is removed. Sanitization never fails; the worst case is an empty string.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::collections::HashSet;

use ammonia::{Builder, UrlRelative};
use log::debug;
use once_cell::sync::Lazy;
use url::Url;

/// Structural and formatting tags allowed through.
pub const ALLOWED_TAGS: [&str; 14] = [
    "table", "tbody", "tr", "td", "div", "span", "p", "br", "strong", "b", "em", "i", "a", "img",
];

/// Attributes allowed on any allowed tag.
pub const ALLOWED_ATTRIBUTES: [&str; 10] = [
    "style", "href", "src", "alt", "target", "cellpadding", "cellspacing", "border", "width", "height",
];

/// Tags removed together with everything inside them.
pub const FORBIDDEN_TAGS: [&str; 5] = ["script", "object", "embed", "form", "input"];

/// Event handlers that are never honored.
pub const FORBIDDEN_ATTRIBUTES: [&str; 5] = ["onclick", "onload", "onmouseover", "onfocus", "onblur"];

/// URL schemes permitted in `href` and `src`. Relative URLs pass through.
pub const URL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

// Raw-text containers: unwrapping these would turn their source into visible text.
const DISCARDED_CONTENT_TAGS: [&str; 9] = [
    "style", "iframe", "noscript", "xmp", "noembed", "noframes", "template", "textarea", "title",
];

const UNSAFE_STYLE_FRAGMENTS: [&str; 4] = ["expression(", "javascript:", "vbscript:", "url("];

static POLICY: Lazy<Builder<'static>> = Lazy::new(|| {
    let clean_content: HashSet<&'static str> = FORBIDDEN_TAGS
        .iter()
        .chain(DISCARDED_CONTENT_TAGS.iter())
        .copied()
        .collect();

    let mut builder = Builder::empty();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .clean_content_tags(clean_content)
        .generic_attributes(ALLOWED_ATTRIBUTES.iter().copied().collect())
        .url_schemes(URL_SCHEMES.iter().copied().collect())
        .url_relative(UrlRelative::PassThrough)
        .link_rel(None)
        .strip_comments(true)
        .attribute_filter(filter_attribute);
    builder
});

fn filter_attribute<'u>(_element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    let name = attribute.to_ascii_lowercase();
    if name.starts_with("on") || name.starts_with("data-") || FORBIDDEN_ATTRIBUTES.contains(&name.as_str()) {
        return None;
    }
    if name == "style" {
        let lowered = value.to_ascii_lowercase();
        if UNSAFE_STYLE_FRAGMENTS.iter().any(|frag| lowered.contains(frag)) {
            return None;
        }
    }
    Some(Cow::Borrowed(value))
}

// Tree repair (misnested anchors, stray table content) can reparse differently, so
// cleaning repeats until the serialized output is stable.
const MAX_PASSES: usize = 4;

/// Filters `html` down to the allow-listed subset.
///
/// Idempotent: `sanitize(&sanitize(x)) == sanitize(x)`.
pub fn sanitize(html: &str) -> String {
    let mut cleaned = POLICY.clean(html).to_string();
    let mut passes = 1;
    while passes < MAX_PASSES {
        let next = POLICY.clean(&cleaned).to_string();
        passes += 1;
        if next == cleaned {
            break;
        }
        cleaned = next;
    }
    debug!(
        "Sanitized {} bytes of HTML into {} bytes in {} pass(es).",
        html.len(),
        cleaned.len(),
        passes
    );
    cleaned
}

/// Whether a URL attribute value is kept by the sanitizer.
///
/// Absolute URLs must parse and use an allowed scheme; relative URLs are kept.
pub fn url_passes_policy(value: &str) -> bool {
    match Url::parse(value) {
        Ok(parsed) => URL_SCHEMES.contains(&parsed.scheme()),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}
