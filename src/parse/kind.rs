//! Classify script lines as marked up `LineKind` objects.
//!
//! Classification is a pure function of the line text. Whether a line is
//! treated as an option additionally depends on the segmenter being inside
//! an options block, so that part of the decision is kept separate in
//! [`line_has_option_shape`] and resolved by the state machine in
//! [`super::segment`].

use crate::consts::{
    CHOICE_KEYWORD, CONTINUATION_KEYWORD, PROMPT_PREFIX, PROMPT_VERBS, SCENE_KEYWORD,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Representation of a classified line of script content.
///
/// Header kinds carry the pieces needed to open a new node: the number or
/// dotted path from the header, and any text trailing the header prefix
/// on the same line.
pub enum LineKind {
    /// `Scene <N>: ...` — opens a scene node. Trailing text stays in the title.
    SceneHeader {
        /// Scene number as written in the header.
        number: String,
    },
    /// `Choice <N>: ...` — opens a choice node.
    ChoiceHeader {
        /// Choice number as written in the header.
        number: String,
        /// Text after the header prefix, to become the first body line.
        rest: String,
    },
    /// `Continuation of Choice <a.b...>: ...` — opens a continuation node.
    ContinuationHeader {
        /// Dotted path as written in the header, e.g. `1.2.2.1`.
        path: String,
        /// Text after the header prefix, to become the first body line.
        rest: String,
    },
    /// `What will you do/answer ...` — begins an options block.
    OptionsPrompt,
    /// Any other line: body text, or an option inside an options block.
    Text,
}

/// Classify a line into a `LineKind` object.
///
/// Headers are checked in priority order: scene, choice, continuation,
/// prompt. Every other line is `Text`. Classification never fails.
pub fn determine_line_kind(line: &str) -> LineKind {
    if let Some((number, _)) = split_header(line, SCENE_KEYWORD, false) {
        LineKind::SceneHeader { number }
    } else if let Some((number, rest)) = split_header(line, CHOICE_KEYWORD, false) {
        LineKind::ChoiceHeader { number, rest }
    } else if let Some((path, rest)) = split_header(line, CONTINUATION_KEYWORD, true) {
        LineKind::ContinuationHeader { path, rest }
    } else if line_is_options_prompt(line) {
        LineKind::OptionsPrompt
    } else {
        LineKind::Text
    }
}

/// Check whether a line inside an options block looks like an option.
///
/// An option either ends with a parenthesized annotation, starts with a
/// numbering prefix (digits and dots followed by `.` or `)`), or contains
/// an opening parenthesis anywhere. Lines which fail all three tests are
/// question preamble or wrapped option text, which the segmenter tells
/// apart by whether any option has been collected yet.
pub fn line_has_option_shape(line: &str) -> bool {
    ends_with_parenthesized_annotation(line)
        || starts_with_numbering_prefix(line)
        || line.contains('(')
}

/// Match a header `<keyword> <address> [: or whitespace] <rest>`.
///
/// The keyword comparison is case insensitive. The address is a run of
/// digits (`dotted` additionally allows dots), followed by an optional run
/// of whitespace and then a mandatory colon or whitespace separator. A bare
/// `Scene 4` at the end of a line is not a header.
fn split_header(line: &str, keyword: &str, dotted: bool) -> Option<(String, String)> {
    let tail = strip_keyword(line, keyword)?;
    let tail = strip_leading_whitespace(tail)?;

    let end = tail
        .find(|c: char| !(c.is_ascii_digit() || (dotted && c == '.')))
        .unwrap_or(tail.len());
    let address = tail.get(..end)?;

    if !address.contains(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let after = tail.get(end..)?;
    let trimmed = after.trim_start();

    let rest = if let Some(stripped) = trimmed.strip_prefix(':') {
        stripped
    } else if after.starts_with(char::is_whitespace) {
        trimmed
    } else {
        return None;
    };

    Some((address.to_string(), rest.trim().to_string()))
}

/// Strip a keyword from the head of a line, comparing case insensitively.
/// Multi-word keywords match any run of whitespace between their words.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let mut tail = line;

    for (i, word) in keyword.split_whitespace().enumerate() {
        if i > 0 {
            tail = strip_leading_whitespace(tail)?;
        }

        let head = tail.get(..word.len())?;

        if !head.eq_ignore_ascii_case(word) {
            return None;
        }

        tail = tail.get(word.len()..)?;
    }

    Some(tail)
}

/// Strip leading whitespace, requiring at least one character of it.
fn strip_leading_whitespace(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();

    if trimmed.len() < text.len() {
        Some(trimmed)
    } else {
        None
    }
}

/// Match the options-prompt line: the prompt prefix followed by one of
/// the prompt verbs. Anything may trail the verb, including nothing.
fn line_is_options_prompt(line: &str) -> bool {
    strip_keyword(line, PROMPT_PREFIX)
        .and_then(strip_leading_whitespace)
        .map(|tail| {
            PROMPT_VERBS.iter().any(|verb| {
                tail.get(..verb.len())
                    .map(|head| head.eq_ignore_ascii_case(verb))
                    .unwrap_or(false)
            })
        })
        .unwrap_or(false)
}

/// Check for a trailing `(...)` annotation: an opening parenthesis followed
/// by at least one character, none of which closes it, then the closing
/// parenthesis at the end of the line (trailing whitespace ignored).
fn ends_with_parenthesized_annotation(line: &str) -> bool {
    let trimmed = line.trim_end();

    trimmed
        .strip_suffix(')')
        .and_then(|inner| inner.rfind('(').map(|i| &inner[i + 1..]))
        .map(|annotation| !annotation.is_empty() && !annotation.contains(')'))
        .unwrap_or(false)
}

/// Check for a leading numbering prefix: a run of digits and dots which,
/// after optional whitespace, is terminated by `.` or `)`. Both `1.` and
/// `1.2)` count; a bare `12` does not.
fn starts_with_numbering_prefix(line: &str) -> bool {
    let end = line
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(line.len());

    if end == 0 {
        return false;
    }

    let prefix = &line[..end];
    let after = line[end..].trim_start();

    after.starts_with(['.', ')']) || (end > 1 && prefix.ends_with('.'))
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn scene_header_parses_to_scene_with_number() {
        assert_eq!(
            determine_line_kind("Scene 1: Morning"),
            LineKind::SceneHeader {
                number: "1".to_string()
            }
        );
    }

    #[test]
    fn scene_keyword_is_case_insensitive() {
        assert_eq!(
            determine_line_kind("SCENE 2: Evening"),
            LineKind::SceneHeader {
                number: "2".to_string()
            }
        );
    }

    #[test]
    fn scene_number_may_be_separated_by_whitespace_instead_of_colon() {
        assert_eq!(
            determine_line_kind("Scene 3 The yard"),
            LineKind::SceneHeader {
                number: "3".to_string()
            }
        );
    }

    #[test]
    fn bare_scene_number_at_end_of_line_is_not_a_header() {
        assert_eq!(determine_line_kind("Scene 4"), LineKind::Text);
    }

    #[test]
    fn scene_without_number_is_not_a_header() {
        assert_eq!(determine_line_kind("Scene : Morning"), LineKind::Text);
        assert_eq!(determine_line_kind("Scenery matters."), LineKind::Text);
    }

    #[test]
    fn choice_header_parses_to_choice_with_number_and_rest() {
        assert_eq!(
            determine_line_kind("Choice 2: go home"),
            LineKind::ChoiceHeader {
                number: "2".to_string(),
                rest: "go home".to_string()
            }
        );
    }

    #[test]
    fn choice_header_with_nothing_after_colon_has_empty_rest() {
        assert_eq!(
            determine_line_kind("Choice 2:"),
            LineKind::ChoiceHeader {
                number: "2".to_string(),
                rest: String::new()
            }
        );
    }

    #[test]
    fn choice_with_dotted_number_is_not_a_header() {
        // Only continuations carry dotted paths.
        assert_eq!(determine_line_kind("Choice 1.2: go"), LineKind::Text);
    }

    #[test]
    fn continuation_header_parses_to_dotted_path_and_rest() {
        assert_eq!(
            determine_line_kind("Continuation of Choice 1.2.2.1: he opens the door."),
            LineKind::ContinuationHeader {
                path: "1.2.2.1".to_string(),
                rest: "he opens the door.".to_string()
            }
        );
    }

    #[test]
    fn continuation_header_is_not_mistaken_for_a_choice_header() {
        match determine_line_kind("Continuation of Choice 3: onwards") {
            LineKind::ContinuationHeader { path, .. } => assert_eq!(&path, "3"),
            other => panic!("expected `LineKind::ContinuationHeader` but got {:?}", other),
        }
    }

    #[test]
    fn prompt_line_parses_to_options_prompt() {
        assert_eq!(determine_line_kind("What will you do?"), LineKind::OptionsPrompt);
        assert_eq!(
            determine_line_kind("What will you answer him?"),
            LineKind::OptionsPrompt
        );
    }

    #[test]
    fn prompt_requires_a_known_verb() {
        assert_eq!(determine_line_kind("What will you say?"), LineKind::Text);
    }

    #[test]
    fn ordinary_content_parses_to_text() {
        assert_eq!(determine_line_kind("He walks away."), LineKind::Text);
    }

    #[test]
    fn lines_with_trailing_annotations_have_option_shape() {
        assert!(line_has_option_shape("Stand up (decisively)"));
        assert!(line_has_option_shape("Stay (lazily)  "));
    }

    #[test]
    fn lines_with_numbering_prefixes_have_option_shape() {
        assert!(line_has_option_shape("1. Go to the window"));
        assert!(line_has_option_shape("1.2) Ask about the exam"));
        assert!(line_has_option_shape("2 ) Wait"));
        assert!(line_has_option_shape("1.2. Leave"));
    }

    #[test]
    fn lines_with_any_parenthesis_have_option_shape() {
        assert!(line_has_option_shape("Take the (only) exit and run"));
    }

    #[test]
    fn plain_lines_do_not_have_option_shape() {
        assert!(!line_has_option_shape("Or will you hesitate?"));
        assert!(!line_has_option_shape("12 students watch you."));
    }
}
