//! Sequence-diagram dialect rules: a `sequenceDiagram` header, at least
//! one participant declaration, and at least one message arrow.
//!
//! This rule set is intentionally the loosest of the three: it does not
//! check participant-before-use ordering or identifier syntax.

use mg_core::{RuleViolation, Verdict};

use crate::Rule;

/// Accepted message arrow tokens: solid/dashed async, solid/dashed sync.
const MESSAGE_ARROWS: [&str; 4] = ["->>", "-->>", "-)", "--)"];

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
        name: "participants",
        check: participants,
    },
    Rule {
        name: "messages",
        check: messages,
    },
];

/// Validate sequence-diagram dialect text.
pub fn validate(input: &str) -> Verdict {
    crate::run_rules(RULES, input)
}

fn header(input: &str) -> Verdict {
    if input.trim().starts_with("sequenceDiagram") {
        Ok(())
    } else {
        Err(RuleViolation::SequenceHeader)
    }
}

fn participants(input: &str) -> Verdict {
    if input.contains("participant") {
        Ok(())
    } else {
        Err(RuleViolation::MissingParticipants)
    }
}

fn messages(input: &str) -> Verdict {
    if MESSAGE_ARROWS.iter().any(|arrow| input.contains(arrow)) {
        Ok(())
    } else {
        Err(RuleViolation::MissingMessages)
    }
}
