//! Mindmap dialect rules: a `mindmap` header, per-line shape conformance,
//! alphanumeric identifiers on shaped nodes, bounded indentation steps,
//! `fa`/`mdi` icon classes, and bracket-wrapped inline markup.

use mg_core::{RuleViolation, Verdict};

use crate::Rule;
use crate::scan::{idents_before, is_ident_byte};

/// Accepted node shape delimiters, identifier-prefixed:
/// square `ID[..]`, rounded `ID(..)`, circle `ID((..))`, bang `ID))..((`,
/// cloud `ID)..(`, hexagon `ID{{..}}`.
const SHAPE_DELIMITERS: [(&str, &str); 6] = [
    ("[", "]"),
    ("(", ")"),
    ("((", "))"),
    ("))", "(("),
    (")", "("),
    ("{{", "}}"),
];

pub const RULES: &[Rule] = &[
    Rule {
        name: "non-empty",
        check: crate::non_empty,
    },
    Rule {
        name: "header",
        check: header,
    },
    Rule {
        name: "line-shapes",
        check: line_shapes,
    },
    Rule {
        name: "node-ids",
        check: node_ids,
    },
    Rule {
        name: "indentation",
        check: indentation,
    },
    Rule {
        name: "icons",
        check: icons,
    },
    Rule {
        name: "inline-markup",
        check: inline_markup,
    },
];

/// Validate mindmap dialect text.
pub fn validate(input: &str) -> Verdict {
    crate::run_rules(RULES, input)
}

fn header(input: &str) -> Verdict {
    if input.trim().starts_with("mindmap") {
        Ok(())
    } else {
        Err(RuleViolation::MindmapHeader)
    }
}

/// Non-blank lines of the input, untrimmed.
fn content_lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().filter(|line| !line.trim().is_empty())
}

/// Every content line must be an annotation, the header, a shaped node,
/// or plain descriptive text.
fn line_shapes(input: &str) -> Verdict {
    for line in content_lines(input) {
        let trimmed = line.trim();
        if trimmed.starts_with("::icon") || trimmed.starts_with(":::") {
            continue;
        }
        if trimmed == "mindmap" {
            continue;
        }
        if !matches_node_shape(trimmed) && !is_plain_text(trimmed) {
            return Err(RuleViolation::UnrecognizedLine {
                line: trimmed.to_string(),
            });
        }
    }
    Ok(())
}

fn matches_node_shape(line: &str) -> bool {
    SHAPE_DELIMITERS
        .iter()
        .any(|&(open, close)| has_shaped_node(line, open, close))
}

/// An opening delimiter directly after an identifier run, with the
/// closing delimiter anywhere later on the line.
fn has_shaped_node(line: &str, open: &str, close: &str) -> bool {
    let bytes = line.as_bytes();
    for (at, token) in line.match_indices(open) {
        if at == 0 || !is_ident_byte(bytes[at - 1]) {
            continue;
        }
        if line[at + token.len()..].contains(close) {
            return true;
        }
    }
    false
}

/// Letters, digits, whitespace, and the punctuation a plain descriptive
/// node may carry.
fn is_plain_text(line: &str) -> bool {
    !line.is_empty()
        && line.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || c.is_whitespace()
                || matches!(c, '-' | '.' | ',' | '!' | '&' | '(' | ')' | '\'' | ':' | ';')
        })
}

/// Identifiers in front of shape delimiters must be alphanumeric with
/// underscores.
fn node_ids(input: &str) -> Verdict {
    for id in idents_before(input, &[b'[', b'(', b')', b'{']) {
        if !id.bytes().all(is_ident_byte) {
            return Err(RuleViolation::ShapedNodeId { id: id.to_string() });
        }
    }
    Ok(())
}

/// Consecutive content lines may not jump indentation by more than four
/// columns. Two-stage comparison: a jump past the +/-4 window is still
/// accepted when it lands exactly on the previous level or a +2/+4 step.
fn indentation(input: &str) -> Verdict {
    let lines: Vec<&str> = content_lines(input).collect();
    let mut prev_indent = 0usize;
    for (index, line) in lines.iter().enumerate().skip(1) {
        let indent = leading_whitespace(line);
        if indent > prev_indent + 4 || indent + 4 < prev_indent {
            if indent != prev_indent && indent != prev_indent + 2 && indent != prev_indent + 4 {
                return Err(RuleViolation::Indentation { line: index + 1 });
            }
        }
        prev_indent = indent;
    }
    Ok(())
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Every `::icon(..)` annotation must reference an `fa` or `mdi` class.
fn icons(input: &str) -> Verdict {
    let mut cursor = 0;
    while let Some(found) = input[cursor..].find("::icon(") {
        let open = cursor + found + "::icon(".len();
        match icon_body_end(input, open) {
            Some(close) => {
                let body = &input[open..close];
                if !body.contains("fa ") && !body.contains("mdi ") {
                    return Err(RuleViolation::Icon);
                }
                cursor = close + 1;
            }
            None => cursor = cursor + found + 1,
        }
    }
    Ok(())
}

/// First `)` at least one character past the opening paren, on the same
/// line.
fn icon_body_end(input: &str, open: usize) -> Option<usize> {
    for (at, c) in input[open..].char_indices() {
        if c == '\n' || c == '\r' {
            return None;
        }
        if c == ')' && at > 0 {
            return Some(open + at);
        }
    }
    None
}

/// Labels carrying inline markup (`**`, paired `*`, `<br/>`) must still
/// sit inside a matching `[..]` pair.
fn inline_markup(input: &str) -> Verdict {
    for span in markup_spans(input) {
        if !span.starts_with('[') || !span[1..].contains(']') {
            return Err(RuleViolation::InlineMarkup {
                span: span.to_string(),
            });
        }
    }
    Ok(())
}

/// Bracket spans whose body carries inline markup, bounded to one line.
fn markup_spans(input: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some(found) = input[cursor..].find('[') {
        let open = cursor + found;
        match markup_span_end(input, open) {
            Some(close) => {
                spans.push(&input[open..=close]);
                cursor = close + 1;
            }
            None => cursor = open + 1,
        }
    }
    spans
}

fn markup_span_end(input: &str, open: usize) -> Option<usize> {
    let rest = &input[open + 1..];
    let line = &rest[..rest.find('\n').unwrap_or(rest.len())];
    let mut close_from = 0;
    while let Some(found) = line[close_from..].find(']') {
        let close = close_from + found;
        let body = &line[..close];
        if body.matches('*').count() >= 2 || body.contains("<br/>") {
            return Some(open + 1 + close);
        }
        close_from = close + 1;
    }
    None
}
