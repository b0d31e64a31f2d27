//! Immutable syntax tree for the Lumen language.
//!
//! This crate is the hand-off format between a parser (the producer) and
//! analysis passes (the consumers). It deliberately contains no parsing
//! algorithm; it defines the shapes a parser emits and the operations
//! consumers rely on.
//!
//! # Architecture
//!
//! The tree is typed and closed. Terminals are [`Token`]s; every composite
//! shape is a dedicated struct whose fields mirror its grammar production in
//! source order, grouped into category enums ([`Stat`], [`Expr`],
//! [`PrefixExpr`], [`Args`], [`TableField`]) and the top-level [`Node`]
//! union. [`Element`] is the uniform node-or-token view used by `children()`
//! and traversal.
//!
//! Three properties hold everywhere:
//!
//! - **Immutable and shared.** Nodes are sealed behind `Arc` at construction
//!   and never mutated. A subtree may appear under any number of parents, and
//!   trees move freely across threads.
//! - **Children are computed, not stored.** A node's child sequence is a pure
//!   function of its fields, so structure and fields cannot disagree.
//! - **Construction validates.** Builders reject missing required fields with
//!   [`BuildError::MissingRequiredField`]; paired optional elements are a
//!   single `Option` field, so half-present pairs cannot exist.
//!
//! New trees are derived from old ones through [`to_builder`]: seed a builder
//! from an existing node, replace the fields that change, and build. Unchanged
//! fields keep their `Arc`s, so derivation shares everything it does not
//! touch.
//!
//! [`to_builder`]: Chunk::to_builder

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod macros;

pub mod chunk;
pub mod dump;
pub mod expr;
pub mod func;
pub mod list;
pub mod node;
pub mod stat;
pub mod syntax_kind;
pub mod token;
pub mod traverse;

#[cfg(test)]
mod list_tests;
#[cfg(test)]
mod stat_tests;
#[cfg(test)]
mod traverse_tests;

pub use chunk::{Block, Chunk};
pub use dump::dump;
pub use expr::{
    Args, BinaryExpr, CallExpr, Expr, ExprField, FunctionExpr, IndexExpr, LiteralExpr, MemberExpr,
    NameExpr, NameField, ParenArgs, ParenExpr, PrefixExpr, StringArgs, TableArgs, TableExpr,
    TableField, UnaryExpr, VarargExpr,
};
pub use func::{FunctionBody, FunctionName, ParamList};
pub use list::{ListItem, SeparatedList, SeparatedListElement};
pub use node::{Element, Node, NodeOrToken};
pub use stat::{
    AssignStat, BreakStat, CallStat, DoStat, ElseClause, ElseIfClause, FunctionDeclStat,
    GenericForStat, GotoStat, IfStat, LabelStat, LocalAssignStat, LocalFunctionStat,
    NumericForStat, RepeatStat, ReturnStat, Stat, WhileStat,
};
pub use syntax_kind::SyntaxKind;
pub use token::Token;
pub use traverse::Descendants;

/// Errors reported when sealing a node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A builder was sealed without one of its required fields.
    #[error("missing required field `{field}` when building {kind:?}")]
    MissingRequiredField {
        field: &'static str,
        kind: SyntaxKind,
    },
}
