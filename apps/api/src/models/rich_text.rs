//! Markup-bearing description text.
//!
//! The editor's rich-text widget produces small HTML fragments. They are kept
//! verbatim in the document so persistence stays lossless, and are only ever
//! emitted through [`RichText::to_safe_html`], which keeps a fixed allow-list of
//! attribute-free formatting tags and escapes everything else.

use maud::html;
use serde::{Deserialize, Serialize};

const ALLOWED_TAGS: &[&str] = &["b", "i", "u", "em", "strong", "p", "br", "ul", "ol", "li"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The markup exactly as the editor supplied it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }

    /// Sanitized HTML: allow-listed tags survive without attributes, every
    /// other `<`, `>`, `&` and double quote is escaped.
    pub fn to_safe_html(&self) -> String {
        let src = self.0.as_str();
        let mut out = String::with_capacity(src.len());
        let mut rest = src;

        while let Some(open) = rest.find('<') {
            out.push_str(&escaped(&rest[..open]));
            let after = &rest[open..];
            match after.find('>') {
                Some(close) => {
                    let tag = &after[..=close];
                    match allowed_tag(tag) {
                        Some(normalized) => out.push_str(&normalized),
                        None => out.push_str(&escaped(tag)),
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&escaped(after));
                    rest = "";
                }
            }
        }
        out.push_str(&escaped(rest));
        out
    }

    /// Text with all tags removed and block-level tags turned into spaces.
    /// Used for measuring and for plain-text layouts. A `<` with no closing
    /// `>` after it is ordinary text.
    pub fn plain_text(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(open) = rest.find('<') {
            out.push_str(&rest[..open]);
            let after = &rest[open..];
            match after.find('>') {
                Some(close) => {
                    out.push(' ');
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(after);
                    rest = "";
                }
            }
        }
        out.push_str(rest);

        decode_basic_entities(&out)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&str> for RichText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RichText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

fn escaped(s: &str) -> String {
    html! { (s) }.into_string()
}

/// Returns the canonical, attribute-free form of `tag` if it is allow-listed.
fn allowed_tag(tag: &str) -> Option<String> {
    let inner = tag.trim_start_matches('<').trim_end_matches('>').trim();
    let (closing, inner) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, inner),
    };
    let name: String = inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    if !ALLOWED_TAGS.contains(&name.as_str()) {
        return None;
    }
    if name == "br" {
        return Some("<br>".to_string());
    }
    Some(if closing {
        format!("</{name}>")
    } else {
        format!("<{name}>")
    })
}

fn decode_basic_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through_escaped() {
        let text = RichText::from("Cut costs by 40% & more");
        assert_eq!(text.to_safe_html(), "Cut costs by 40% &amp; more");
    }

    #[test]
    fn test_allowed_tags_keep_but_lose_attributes() {
        let text = RichText::from(r#"<p class="x">Led <strong onclick="evil()">team</strong></p>"#);
        assert_eq!(text.to_safe_html(), "<p>Led <strong>team</strong></p>");
    }

    #[test]
    fn test_script_tags_are_escaped() {
        let text = RichText::from("<script>alert(1)</script>");
        assert_eq!(
            text.to_safe_html(),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_unterminated_tag_is_escaped() {
        let text = RichText::from("a < b");
        assert_eq!(text.to_safe_html(), "a &lt; b");
    }

    #[test]
    fn test_br_is_normalized() {
        let text = RichText::from("one<BR/>two");
        assert_eq!(text.to_safe_html(), "one<br>two");
    }

    #[test]
    fn test_plain_text_strips_markup() {
        let text = RichText::from("<ul><li>Shipped v2</li><li>Hired&nbsp;3</li></ul>");
        assert_eq!(text.plain_text(), "Shipped v2 Hired 3");
    }

    #[test]
    fn test_plain_text_keeps_text_after_bare_angle() {
        let text = RichText::from("Cut p99 latency to <50ms • Led a team of 4 • Shipped v2");
        assert_eq!(
            text.plain_text(),
            "Cut p99 latency to <50ms • Led a team of 4 • Shipped v2"
        );
    }

    #[test]
    fn test_blank_detects_empty_markup() {
        assert!(RichText::from("<p> </p>").is_blank());
        assert!(!RichText::from("<p>x</p>").is_blank());
    }

    #[test]
    fn test_round_trips_verbatim() {
        let text = RichText::from("<p onclick=\"x\">kept as typed</p>");
        let json = serde_json::to_string(&text).unwrap();
        let back: RichText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, text);
        assert_eq!(back.as_str(), "<p onclick=\"x\">kept as typed</p>");
    }
}
