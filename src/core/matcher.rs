//! Translation marker matching.
//!
//! Markers are JSX elements such as:
//!
//! ```text
//! <UFTT ttid="greet">Hello</UFTT>
//! <UFTTDiv className="intro">
//!   Welcome back
//! </UFTTDiv>
//! ```
//!
//! The matcher is a textual pattern, not a JSX parser. Known limitations:
//! - Nested markers with the *same* tag name are not balanced: the first
//!   closing tag with that name ends the match.
//! - Attribute values may contain `>` only inside double quotes or inside a
//!   single level of `{...}`.
//! - A self-closing marker (`<UFTT />`) is treated as an opening tag.

use anyhow::{Result, bail};
use regex::{Captures, Regex};

/// Tags recognized when the configuration does not list any.
pub const DEFAULT_TAGS: &[&str] = &["UFTT", "UFTTSpan", "UFTTDiv", "UFTTHtml"];

/// One JSX attribute-region token: a plain character, a quoted string, or a
/// single-level `{...}` expression.
const ATTRIBUTE: &str = r#"(?:[^>"{]|"[^"]*"|\{[^}]*\})"#;

/// A marker occurrence found in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'t> {
    /// Tag name of the marker element.
    pub tag: &'t str,
    /// Value of the `ttid` attribute, if present.
    pub id: Option<&'t str>,
    /// Raw inner content, not yet normalized.
    pub content: &'t str,
    /// Byte offset of the opening `<`.
    pub offset: usize,
}

/// Compiled pattern locating markers for a fixed list of tag names.
#[derive(Debug, Clone)]
pub struct MarkerMatcher {
    tags: Vec<String>,
    regex: Regex,
}

impl MarkerMatcher {
    /// Build a matcher for the given tag names.
    ///
    /// Fails if the list is empty or a name is not a valid JSX element name.
    pub fn new<S: AsRef<str>>(tags: &[S]) -> Result<Self> {
        if tags.is_empty() {
            bail!("No marker tags configured: 'tags' must list at least one tag name");
        }
        let tags: Vec<String> = tags.iter().map(|t| t.as_ref().to_string()).collect();
        for tag in &tags {
            if !is_valid_tag_name(tag) {
                bail!("Invalid marker tag name in 'tags': \"{}\"", tag);
            }
        }

        let pattern = tags
            .iter()
            .enumerate()
            .map(|(index, tag)| tag_alternative(index, tag))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&pattern)?;

        Ok(Self { tags, regex })
    }

    /// Lazily iterate over all markers in `source`, left to right.
    pub fn find_iter<'m, 't>(&'m self, source: &'t str) -> impl Iterator<Item = Marker<'t>> + 'm
    where
        't: 'm,
    {
        self.regex
            .captures_iter(source)
            .filter_map(|caps| self.to_marker(&caps))
    }

    fn to_marker<'t>(&self, caps: &Captures<'t>) -> Option<Marker<'t>> {
        // Each tag alternative contributes exactly two groups: ttid, then content.
        let index = (0..self.tags.len()).find(|i| caps.get(content_group(*i)).is_some())?;
        let whole = caps.get(0)?;
        let content = caps.get(content_group(index))?;
        Some(Marker {
            tag: &whole.as_str()[1..1 + self.tags[index].len()],
            id: caps.get(ttid_group(index)).map(|m| m.as_str()),
            content: content.as_str(),
            offset: whole.start(),
        })
    }
}

fn ttid_group(index: usize) -> usize {
    1 + index * 2
}

fn content_group(index: usize) -> usize {
    2 + index * 2
}

fn tag_alternative(index: usize, tag: &str) -> String {
    let tag = regex::escape(tag);
    format!(
        concat!(
            r#"<{tag}(?:\s(?:{attr}*?\s)?ttid\s*=\s*"(?P<ttid{index}>[^"]*)"{attr}*|\s{attr}*)?>"#,
            r#"(?P<content{index}>(?s:.*?))"#,
            r#"</{tag}(?:\s[^>]*)?>"#,
        ),
        tag = tag,
        attr = ATTRIBUTE,
        index = index,
    )
}

/// JSX element names: identifiers, optionally namespaced or dotted.
fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-' | '.' | ':'))
}
