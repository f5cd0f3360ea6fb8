#![forbid(unsafe_code)]

//! Dialect rule sets for AI-generated diagram text.
//!
//! Each dialect exposes an ordered list of named rules. Validation walks the
//! list and stops at the first violated rule; the violation carries the
//! reason string surfaced to the caller. Rules never panic and accept any
//! string input, including empty text and arbitrary Unicode.

pub mod flowchart;
pub mod mindmap;
pub mod sequence;

mod scan;

pub use mg_core::{Dialect, RuleViolation, Verdict};

/// A single named validity predicate over diagram text.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub check: fn(&str) -> Verdict,
}

/// Evaluate `rules` in order; first failure wins.
pub(crate) fn run_rules(rules: &[Rule], input: &str) -> Verdict {
    for rule in rules {
        (rule.check)(input)?;
    }
    Ok(())
}

/// Trimmed-empty check shared by every dialect.
pub(crate) fn non_empty(input: &str) -> Verdict {
    if input.trim().is_empty() {
        Err(RuleViolation::Empty)
    } else {
        Ok(())
    }
}

/// The ordered rule set for `dialect`.
#[must_use]
pub fn rules_for(dialect: Dialect) -> &'static [Rule] {
    match dialect {
        Dialect::Flowchart => flowchart::RULES,
        Dialect::Mindmap => mindmap::RULES,
        Dialect::Sequence => sequence::RULES,
    }
}

/// Validate `input` against the rule set for `dialect`.
pub fn validate(dialect: Dialect, input: &str) -> Verdict {
    run_rules(rules_for(dialect), input)
}
