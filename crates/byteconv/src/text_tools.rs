//! URL, HTML and ROT13 text encoders.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::HistoryEntry;

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    Url,
    Html,
    Rot13,
}

impl TextMode {
    pub fn label(self) -> &'static str {
        match self {
            TextMode::Url => "URL",
            TextMode::Html => "HTML",
            TextMode::Rot13 => "ROT13",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Encode,
    Decode,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextToolError {
    #[error("malformed URI sequence")]
    MalformedUri,
}

/// Runs one encoder. ROT13 is its own inverse, so `action` is ignored for it.
pub fn process(mode: TextMode, action: Action, input: &str) -> Result<String, TextToolError> {
    if input.is_empty() {
        return Ok(String::new());
    }
    match (mode, action) {
        (TextMode::Url, Action::Encode) => Ok(url_encode(input)),
        (TextMode::Url, Action::Decode) => url_decode(input),
        (TextMode::Html, Action::Encode) => Ok(html_encode(input)),
        (TextMode::Html, Action::Decode) => Ok(html_decode(input)),
        (TextMode::Rot13, _) => Ok(rot13(input)),
    }
}

/// History entry for a finished encoding; `None` unless both sides are set.
pub fn snapshot(
    tool: &str,
    mode: TextMode,
    action: Action,
    input: &str,
    output: &str,
) -> Option<HistoryEntry> {
    if input.is_empty() || output.is_empty() {
        return None;
    }
    let action = match (mode, action) {
        (TextMode::Rot13, _) | (_, Action::Encode) => "Enc",
        (_, Action::Decode) => "Dec",
    };
    Some(HistoryEntry::new(
        tool,
        format!("{} ({action})", mode.label()),
        input,
        output,
    ))
}

pub fn url_encode(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Form-style decoding: `+` becomes a space before `%XX` escapes are
/// resolved. A `%` not followed by two hex digits, or escapes that do not
/// form UTF-8, are errors.
pub fn url_decode(input: &str) -> Result<String, TextToolError> {
    let input = input.replace('+', " ");
    let bytes = input.as_bytes();
    for (i, _) in input.match_indices('%') {
        let escape = bytes.get(i + 1..i + 3).ok_or(TextToolError::MalformedUri)?;
        if !escape.iter().all(u8::is_ascii_hexdigit) {
            return Err(TextToolError::MalformedUri);
        }
    }
    percent_decode_str(&input)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| TextToolError::MalformedUri)
}

/// Escapes text for use as HTML content: `&`, `<`, `>` and no-break spaces.
pub fn html_encode(input: &str) -> String {
    html_escape::encode_text(input).replace('\u{a0}', "&nbsp;")
}

/// Text content of an HTML fragment: tags are dropped and character
/// references decoded.
pub fn html_decode(input: &str) -> String {
    html_escape::decode_html_entities(&strip_tags(input)).into_owned()
}

fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let opens_tag = tail[1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'));
        match tail.find('>') {
            Some(end) if opens_tag => rest = &tail[end + 1..],
            _ => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn rot13(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encode_matches_uri_component() {
        assert_eq!(url_encode("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(url_encode("-_.!~*'()"), "-_.!~*'()");
    }

    #[test]
    fn url_decode_plus_and_escapes() {
        assert_eq!(url_decode("a+b%20c%C3%A9").unwrap(), "a b cé");
        assert_eq!(url_decode("100%"), Err(TextToolError::MalformedUri));
        assert_eq!(url_decode("%zz"), Err(TextToolError::MalformedUri));
        assert_eq!(url_decode("%C3"), Err(TextToolError::MalformedUri));
    }

    #[test]
    fn html_roundtrip() {
        assert_eq!(html_encode("<a href=\"x\">&</a>"), "&lt;a href=\"x\"&gt;&amp;&lt;/a&gt;");
        assert_eq!(html_encode("a\u{a0}b"), "a&nbsp;b");
        assert_eq!(html_decode("&lt;b&gt; &amp; &#65;&#x42;"), "<b> & AB");
    }

    #[test]
    fn html_decode_drops_markup() {
        assert_eq!(html_decode("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(html_decode("1 < 2"), "1 < 2");
        assert_eq!(html_decode("<!-- c -->x"), "x");
    }

    #[test]
    fn rot13_is_involution() {
        assert_eq!(rot13("Hello, World!"), "Uryyb, Jbeyq!");
        assert_eq!(rot13(&rot13("Zebra 123")), "Zebra 123");
        assert_eq!(process(TextMode::Rot13, Action::Decode, "abc").unwrap(), "nop");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(process(TextMode::Url, Action::Decode, "").unwrap(), "");
    }

    #[test]
    fn snapshot_details() {
        let entry = snapshot("Number Base", TextMode::Url, Action::Decode, "a%20b", "a b").unwrap();
        assert_eq!(entry.details, "URL (Dec)");
        let entry = snapshot("Number Base", TextMode::Rot13, Action::Decode, "a", "n").unwrap();
        assert_eq!(entry.details, "ROT13 (Enc)");
        assert!(snapshot("Number Base", TextMode::Html, Action::Encode, "", "").is_none());
    }
}
