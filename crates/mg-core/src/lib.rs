#![forbid(unsafe_code)]

//! Core vocabulary for the mermaid-gate validators: the dialect selector,
//! the rejection taxonomy, and the verdict type every validator returns.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the diagram sub-languages accepted by the gate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Dialect {
    Flowchart,
    Mindmap,
    Sequence,
}

impl Dialect {
    pub const ALL: [Self; 3] = [Self::Flowchart, Self::Mindmap, Self::Sequence];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Mindmap => "mindmap",
            Self::Sequence => "sequence",
        }
    }

    /// The mandatory first keyword of a diagram description in this dialect.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Mindmap => "mindmap",
            Self::Sequence => "sequenceDiagram",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown dialect '{0}'; expected flowchart, mindmap, or sequence")]
pub struct ParseDialectError(String);

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "flowchart" => Ok(Self::Flowchart),
            "mindmap" => Ok(Self::Mindmap),
            "sequence" | "sequenceDiagram" => Ok(Self::Sequence),
            other => Err(ParseDialectError(other.to_string())),
        }
    }
}

/// Why a candidate diagram was rejected.
///
/// The `Display` text of each variant is the literal reason string surfaced
/// to callers; downstream error reporting depends on these staying stable.
#[derive(Debug, Clone, Serialize, Deserialize, Error, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Generated code is empty")]
    Empty,

    #[error(
        "Code must start with 'flowchart TD' or 'flowchart LR', not 'graph' or other keywords"
    )]
    FlowchartHeader,

    #[error(
        "Invalid node syntax detected (e.g., ID(Label)). Use ID[Label] for rectangles or ID{{Label}} for diamonds"
    )]
    NodeShape,

    #[error("Mismatched subgraph 'end' statements")]
    UnbalancedSubgraphs,

    #[error(
        "Style statements must include fill and stroke properties (e.g., style ID fill:#color,stroke:#color)"
    )]
    IncompleteStyle,

    #[error("Invalid node ID '{id}'. IDs must be alphanumeric with underscores")]
    NodeId { id: String },

    #[error("Code must start with 'mindmap'")]
    MindmapHeader,

    #[error(
        "Invalid node syntax in line: {line}. Use plain text (e.g., Origins, Binary Cross-Entropy, Two main components: Generator and Discriminator), ID[Label] for squares, ID((Label)) for circles, etc."
    )]
    UnrecognizedLine { line: String },

    #[error("Invalid node ID '{id}'. IDs for shaped nodes must be alphanumeric with underscores")]
    ShapedNodeId { id: String },

    #[error("Inconsistent indentation at line {line}")]
    Indentation { line: usize },

    #[error("Icons must use 'fa' or 'mdi' classes (e.g., ::icon(fa fa-book))")]
    Icon,

    #[error("Invalid markdown syntax in line: {span}. Markdown must be within valid shape delimiters")]
    InlineMarkup { span: String },

    #[error("Code must start with 'sequenceDiagram'")]
    SequenceHeader,

    #[error("No participants defined")]
    MissingParticipants,

    #[error("No messages defined")]
    MissingMessages,
}

impl RuleViolation {
    /// Stable machine-readable code for structured output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Empty => "gate/empty",
            Self::FlowchartHeader => "gate/flowchart/header",
            Self::NodeShape => "gate/flowchart/node-shape",
            Self::UnbalancedSubgraphs => "gate/flowchart/subgraph-balance",
            Self::IncompleteStyle => "gate/flowchart/style",
            Self::NodeId { .. } => "gate/flowchart/node-id",
            Self::MindmapHeader => "gate/mindmap/header",
            Self::UnrecognizedLine { .. } => "gate/mindmap/line-shape",
            Self::ShapedNodeId { .. } => "gate/mindmap/node-id",
            Self::Indentation { .. } => "gate/mindmap/indentation",
            Self::Icon => "gate/mindmap/icon",
            Self::InlineMarkup { .. } => "gate/mindmap/inline-markup",
            Self::SequenceHeader => "gate/sequence/header",
            Self::MissingParticipants => "gate/sequence/participants",
            Self::MissingMessages => "gate/sequence/messages",
        }
    }
}

/// Outcome of one validation call: accepted, or rejected with a reason.
pub type Verdict = Result<(), RuleViolation>;
