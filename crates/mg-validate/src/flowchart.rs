//! Flowchart dialect rules: a `flowchart` directive, bracket/brace node
//! shapes only, balanced subgraph blocks, complete style statements, and
//! alphanumeric node identifiers.

use mg_core::{RuleViolation, Verdict};

use crate::Rule;
use crate::scan::{consume_while, idents_before, is_ident_byte};

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
        name: "node-shape",
        check: node_shape,
    },
    Rule {
        name: "subgraph-balance",
        check: balanced_subgraphs,
    },
    Rule {
        name: "style-completeness",
        check: style_completeness,
    },
    Rule {
        name: "node-ids",
        check: node_ids,
    },
];

/// Validate flowchart dialect text.
pub fn validate(input: &str) -> Verdict {
    crate::run_rules(RULES, input)
}

fn header(input: &str) -> Verdict {
    if input.trim().starts_with("flowchart") {
        Ok(())
    } else {
        Err(RuleViolation::FlowchartHeader)
    }
}

/// Reject `ID(Label)` parenthesis nodes. Only `ID[Label]` rectangles and
/// `ID{Label}` diamonds are accepted shapes in this dialect.
fn node_shape(input: &str) -> Verdict {
    let bytes = input.as_bytes();
    for (at, &b) in bytes.iter().enumerate() {
        if b != b'(' || at == 0 || !is_ident_byte(bytes[at - 1]) {
            continue;
        }
        // A label needs at least one character before the closing paren.
        let rest = &bytes[at + 1..];
        if let Some(close) = rest.iter().position(|&c| c == b')')
            && close >= 1
        {
            return Err(RuleViolation::NodeShape);
        }
    }
    Ok(())
}

/// Every `subgraph` block needs a matching `end`. Counts are substring
/// based: `subgraph` followed by whitespace on one side, bare `end`
/// occurrences on the other.
fn balanced_subgraphs(input: &str) -> Verdict {
    let opens = input
        .match_indices("subgraph")
        .filter(|&(at, token)| {
            input[at + token.len()..]
                .chars()
                .next()
                .is_some_and(char::is_whitespace)
        })
        .count();
    let ends = input.matches("end").count();
    if opens == ends {
        Ok(())
    } else {
        Err(RuleViolation::UnbalancedSubgraphs)
    }
}

/// Every `style <id> <props>` statement must carry both a fill and a
/// stroke property.
fn style_completeness(input: &str) -> Verdict {
    let mut cursor = 0;
    while let Some(found) = input[cursor..].find("style") {
        let start = cursor + found;
        match style_statement_end(input, start + "style".len()) {
            Some(end) => {
                let statement = &input[start..end];
                if !statement.contains("fill:") || !statement.contains("stroke:") {
                    return Err(RuleViolation::IncompleteStyle);
                }
                cursor = end;
            }
            None => cursor = start + 1,
        }
    }
    Ok(())
}

/// End offset of a `style` statement starting after the keyword:
/// whitespace, an identifier, whitespace, then properties running to the
/// next `;`, newline, or end of input.
fn style_statement_end(input: &str, from: usize) -> Option<usize> {
    let rest = &input[from..];
    let ws1 = consume_while(rest, char::is_whitespace);
    if ws1 == 0 {
        return None;
    }
    let after_ws1 = &rest[ws1..];
    let ident = consume_while(after_ws1, |c| c.is_ascii_alphanumeric() || c == '_');
    if ident == 0 {
        return None;
    }
    let after_ident = &after_ws1[ident..];
    let ws2 = consume_while(after_ident, char::is_whitespace);
    if ws2 == 0 {
        return None;
    }
    let after_ws2 = &after_ident[ws2..];
    let props = consume_while(after_ws2, |c| c != ';' && c != '\n');
    if props > 0 {
        return Some(from + ws1 + ident + ws2 + props);
    }
    // A whitespace run followed directly by `;`, a newline, or end of
    // input can still close a statement: its trailing non-newline chars
    // count as the property segment.
    let ws_run = &after_ident[..ws2];
    let mut ws_chars = ws_run.chars();
    let lent = ws_chars.next_back();
    if lent.is_some_and(|c| c != '\n') && !ws_chars.as_str().is_empty() {
        return Some(from + ws1 + ident + ws2);
    }
    None
}

/// Identifiers in front of `[` or `{` must be alphanumeric with
/// underscores.
fn node_ids(input: &str) -> Verdict {
    for id in idents_before(input, &[b'[', b'{']) {
        if !id.bytes().all(is_ident_byte) {
            return Err(RuleViolation::NodeId { id: id.to_string() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_flowchart() {
        assert_eq!(validate("flowchart TD\n A[Start] --> B[End]"), Ok(()));
    }

    #[test]
    fn accepts_leading_whitespace_before_header() {
        assert_eq!(validate("  flowchart LR\n A[x] --> B[y]"), Ok(()));
    }

    #[test]
    fn rejects_graph_keyword() {
        assert_eq!(
            validate("graph TD\n A-->B"),
            Err(RuleViolation::FlowchartHeader)
        );
    }

    #[test]
    fn rejects_parenthesis_node_shape() {
        assert_eq!(
            validate("flowchart TD\n A(Label) --> B[Done]"),
            Err(RuleViolation::NodeShape)
        );
    }

    #[test]
    fn rejects_double_paren_circle_shape() {
        assert_eq!(
            validate("flowchart TD\n A((Label)) --> B[Done]"),
            Err(RuleViolation::NodeShape)
        );
    }

    #[test]
    fn empty_parens_are_not_a_labelled_node() {
        // `A()` carries no label, so the shape scan does not fire.
        assert_eq!(validate("flowchart TD\n A() --> B[Done]"), Ok(()));
    }

    #[test]
    fn header_violation_wins_over_node_shape() {
        assert_eq!(
            validate("graph TD\n A(Label)"),
            Err(RuleViolation::FlowchartHeader)
        );
    }

    #[test]
    fn rejects_unterminated_subgraph() {
        assert_eq!(
            validate("flowchart TD\n subgraph grp\n A[x]"),
            Err(RuleViolation::UnbalancedSubgraphs)
        );
    }

    #[test]
    fn accepts_balanced_subgraph() {
        assert_eq!(
            validate("flowchart TD\n subgraph grp\n A[x]\n end"),
            Ok(())
        );
    }

    #[test]
    fn subgraph_balance_counts_bare_end_substrings() {
        // `Send` contains `end`, so the terminator count comes out ahead.
        assert_eq!(
            validate("flowchart TD\n A[Send mail] --> B[Done]"),
            Err(RuleViolation::UnbalancedSubgraphs)
        );
    }

    #[test]
    fn rejects_style_without_stroke() {
        assert_eq!(
            validate("flowchart TD\n A[x]\n style A fill:#fff"),
            Err(RuleViolation::IncompleteStyle)
        );
    }

    #[test]
    fn rejects_style_without_fill() {
        assert_eq!(
            validate("flowchart TD\n A[x]\n style A stroke:#000"),
            Err(RuleViolation::IncompleteStyle)
        );
    }

    #[test]
    fn accepts_style_with_fill_and_stroke() {
        assert_eq!(
            validate("flowchart TD\n A[x]\n style A fill:#fff,stroke:#000"),
            Ok(())
        );
    }

    #[test]
    fn style_statements_split_on_semicolons() {
        let input = "flowchart TD\n A[x]\n style A fill:#fff,stroke:#000; style A fill:#fff";
        assert_eq!(validate(input), Err(RuleViolation::IncompleteStyle));
    }

    #[test]
    fn bare_style_keyword_is_not_a_statement() {
        assert_eq!(validate("flowchart TD\n A[style] --> B[x]"), Ok(()));
    }

    #[test]
    fn accepts_underscore_node_ids() {
        assert_eq!(
            validate("flowchart TD\n Node_1[Start] --> B2{Choice}"),
            Ok(())
        );
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "non-empty",
                "header",
                "node-shape",
                "subgraph-balance",
                "style-completeness",
                "node-ids",
            ]
        );
    }
}
