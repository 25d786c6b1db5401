//! Shortcode token scanning.
//!
//! Two scanners over raw chat text:
//!
//! - [`candidates`] finds complete `:name:` spans, left to right, for
//!   replacement in finished messages.
//! - [`active_token`] finds the `:prefix` being typed at a cursor, for live
//!   completion.
//!
//! A name is one or more chars that are neither whitespace nor `:`.

use std::ops::Range;

const DELIMITER: char = ':';

fn is_name_char(c: char) -> bool {
    c != DELIMITER && !c.is_whitespace()
}

/// A `:name:` span found by [`candidates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Byte range of the span, both colons included.
    pub range: Range<usize>,
    /// Text between the colons.
    pub name: &'a str,
}

/// Iterate over the `:name:` spans of `text`.
///
/// Spans never overlap: after a span, scanning resumes right after its
/// closing colon, so that colon is never reused as an opener. A colon that
/// opens nothing (followed by whitespace, another colon, or the end of the
/// text) is skipped.
pub fn candidates(text: &str) -> Candidates<'_> {
    Candidates { text, pos: 0 }
}

/// Iterator returned by [`candidates`].
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    text: &'a str,
    /// Byte offset where the next search starts. Always a char boundary.
    pos: usize,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        while let Some(offset) = text[self.pos..].find(DELIMITER) {
            let open = self.pos + offset;
            let body = open + DELIMITER.len_utf8();
            let body_len = text[body..].find(|c: char| !is_name_char(c)).unwrap_or(text.len() - body);
            let close = body + body_len;

            if body_len > 0 && text[close..].starts_with(DELIMITER) {
                let end = close + DELIMITER.len_utf8();
                self.pos = end;
                return Some(Candidate { range: open..end, name: &text[body..close] });
            }
            self.pos = body;
        }
        self.pos = text.len();
        None
    }
}

/// The `:prefix` being typed at a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToken<'a> {
    /// Char offset of the opening colon.
    pub start: usize,
    /// Char offset of the cursor; the token ends here.
    pub end: usize,
    /// Text between the colon and the cursor, as typed.
    pub prefix: &'a str,
}

/// Detect the shortcode being typed before `cursor`.
///
/// `cursor` counts chars, not bytes. The token starts at the last colon
/// before the cursor and is active only if that colon sits at the start of
/// the text or after whitespace, and at least one name char separates it
/// from the cursor. Returns `None` otherwise, including for a cursor past
/// the end of `text`.
pub fn active_token(text: &str, cursor: usize) -> Option<ActiveToken<'_>> {
    let end = byte_offset(text, cursor)?;
    let before = &text[..end];
    let open = before.rfind(DELIMITER)?;
    let prefix = &before[open + DELIMITER.len_utf8()..];

    if prefix.is_empty() || !prefix.chars().all(is_name_char) {
        return None;
    }
    if !before[..open].chars().next_back().is_none_or(char::is_whitespace) {
        return None;
    }

    Some(ActiveToken { start: before[..open].chars().count(), end: cursor, prefix })
}

/// Byte offset of the char at `cursor`; `text.len()` for the end position.
pub fn byte_offset(text: &str, cursor: usize) -> Option<usize> {
    text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len())).nth(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<&str> {
        candidates(text).map(|c| c.name).collect()
    }

    #[test]
    fn finds_single_span() {
        let found: Vec<_> = candidates("Hi :smile:").collect();
        assert_eq!(found, vec![Candidate { range: 3..10, name: "smile" }]);
    }

    #[test]
    fn no_colons() {
        assert!(names("hello world").is_empty());
        assert!(names("").is_empty());
    }

    #[test]
    fn adjacent_spans() {
        assert_eq!(names(":smile::joy:"), vec!["smile", "joy"]);
    }

    #[test]
    fn closing_colon_is_not_reused() {
        // ":a:" is consumed, "b:" has no opener
        assert_eq!(names(":a:b:"), vec!["a"]);
    }

    #[test]
    fn whitespace_breaks_span() {
        assert!(names("Hi :notareal code:").is_empty());
        assert_eq!(names("a :b c:smile:"), vec!["smile"]);
    }

    #[test]
    fn empty_body_skips_to_next_colon() {
        assert_eq!(names("::smile:"), vec!["smile"]);
    }

    #[test]
    fn unterminated_colon() {
        assert!(names("time is 10:30").is_empty());
        assert!(names("trailing:").is_empty());
        assert_eq!(names(":joy: and :"), vec!["joy"]);
    }

    #[test]
    fn multibyte_text() {
        let found: Vec<_> = candidates("日本 :joy: é").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(&"日本 :joy: é"[found[0].range.clone()], ":joy:");
    }

    #[test]
    fn active_token_at_end() {
        let token = active_token("Hi :happy", 9).expect("active token");
        assert_eq!(token, ActiveToken { start: 3, end: 9, prefix: "happy" });
    }

    #[test]
    fn active_token_mid_text() {
        let token = active_token(":jo rest", 3).expect("active token");
        assert_eq!(token.prefix, "jo");
        assert_eq!(token.start, 0);
    }

    #[test]
    fn active_token_requires_boundary() {
        assert_eq!(active_token("Hi:happy", 8), None);
        assert_eq!(active_token("Hi :smile:", 10), None);
        assert_eq!(active_token(":smile::jo", 10), None);
    }

    #[test]
    fn active_token_requires_name_chars() {
        assert_eq!(active_token("Hi :", 4), None);
        assert_eq!(active_token("Hi :ha ppy", 10), None);
        assert_eq!(active_token("no colon", 8), None);
    }

    #[test]
    fn active_token_cursor_out_of_range() {
        assert_eq!(active_token("Hi :happy", 10), None);
        assert_eq!(active_token("", 1), None);
    }

    #[test]
    fn active_token_counts_chars() {
        let token = active_token("日本 :jo", 6).expect("active token");
        assert_eq!(token.start, 3);
        assert_eq!(token.prefix, "jo");
    }

    #[test]
    fn byte_offsets() {
        assert_eq!(byte_offset("aé", 0), Some(0));
        assert_eq!(byte_offset("aé", 1), Some(1));
        assert_eq!(byte_offset("aé", 2), Some(3));
        assert_eq!(byte_offset("aé", 3), None);
    }
}
