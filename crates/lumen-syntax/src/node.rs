//! Composite tree elements and the uniform element view.
//!
//! `Node` is the closed union over every composite shape in the grammar;
//! `Element` is the node-or-token view that children and traversal expose.
//! Each shape stores its fields directly and computes its children as a pure
//! function of them, so a `children()` call never fails and never allocates
//! anything but the result vector.

use text_size::TextRange;
use triomphe::Arc;

use crate::chunk::{Block, Chunk};
use crate::expr::{Args, Expr, ExprField, NameField, PrefixExpr, TableField};
use crate::func::{FunctionBody, FunctionName, ParamList};
use crate::list::SeparatedList;
use crate::stat::{ElseClause, ElseIfClause, Stat};
use crate::syntax_kind::SyntaxKind;
use crate::token::Token;
use crate::traverse::Descendants;

/// Either a composite node or a terminal token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeOrToken<N, T> {
    Node(N),
    Token(T),
}

/// The uniform view of one tree element.
pub type Element = NodeOrToken<Node, Arc<Token>>;

/// Every composite shape, discriminated by grammar category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Chunk(Arc<Chunk>),
    Block(Arc<Block>),
    Stat(Stat),
    Expr(Expr),
    Args(Args),
    NameField(Arc<NameField>),
    ExprField(Arc<ExprField>),
    ParamList(Arc<ParamList>),
    FunctionBody(Arc<FunctionBody>),
    FunctionName(Arc<FunctionName>),
    ElseIf(Arc<ElseIfClause>),
    Else(Arc<ElseClause>),
    ExprList(Arc<SeparatedList<Expr>>),
    NameList(Arc<SeparatedList<Arc<Token>>>),
    VarList(Arc<SeparatedList<PrefixExpr>>),
    FieldList(Arc<SeparatedList<TableField>>),
}

impl Node {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Node::Chunk(n) => n.kind(),
            Node::Block(n) => n.kind(),
            Node::Stat(n) => n.kind(),
            Node::Expr(n) => n.kind(),
            Node::Args(n) => n.kind(),
            Node::NameField(n) => n.kind(),
            Node::ExprField(n) => n.kind(),
            Node::ParamList(n) => n.kind(),
            Node::FunctionBody(n) => n.kind(),
            Node::FunctionName(n) => n.kind(),
            Node::ElseIf(n) => n.kind(),
            Node::Else(n) => n.kind(),
            Node::ExprList(n) => n.kind(),
            Node::NameList(n) => n.kind(),
            Node::VarList(n) => n.kind(),
            Node::FieldList(n) => n.kind(),
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Node::Chunk(n) => n.range(),
            Node::Block(n) => n.range(),
            Node::Stat(n) => n.range(),
            Node::Expr(n) => n.range(),
            Node::Args(n) => n.range(),
            Node::NameField(n) => n.range(),
            Node::ExprField(n) => n.range(),
            Node::ParamList(n) => n.range(),
            Node::FunctionBody(n) => n.range(),
            Node::FunctionName(n) => n.range(),
            Node::ElseIf(n) => n.range(),
            Node::Else(n) => n.range(),
            Node::ExprList(n) => n.range(),
            Node::NameList(n) => n.range(),
            Node::VarList(n) => n.range(),
            Node::FieldList(n) => n.range(),
        }
    }

    /// The node's production, left to right, terminals and non-terminals
    /// interleaved in source order.
    pub fn children(&self) -> Vec<Element> {
        match self {
            Node::Chunk(n) => n.children(),
            Node::Block(n) => n.children(),
            Node::Stat(n) => n.children(),
            Node::Expr(n) => n.children(),
            Node::Args(n) => n.children(),
            Node::NameField(n) => n.children(),
            Node::ExprField(n) => n.children(),
            Node::ParamList(n) => n.children(),
            Node::FunctionBody(n) => n.children(),
            Node::FunctionName(n) => n.children(),
            Node::ElseIf(n) => n.children(),
            Node::Else(n) => n.children(),
            Node::ExprList(n) => n.children(),
            Node::NameList(n) => n.children(),
            Node::VarList(n) => n.children(),
            Node::FieldList(n) => n.children(),
        }
    }

    /// True iff the computed child sequence is empty.
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Pre-order walk of the subtree. Includes the node itself iff it is the
    /// `Chunk` root.
    pub fn descendants(&self) -> Descendants {
        Element::Node(self.clone()).descendants()
    }
}

impl Element {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            NodeOrToken::Node(node) => node.kind(),
            NodeOrToken::Token(token) => token.kind(),
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            NodeOrToken::Node(node) => node.range(),
            NodeOrToken::Token(token) => token.range(),
        }
    }

    #[inline]
    pub fn is_token(&self) -> bool {
        matches!(self, NodeOrToken::Token(_))
    }

    /// Terminals are always leaves; composites are leaves iff childless.
    pub fn is_leaf(&self) -> bool {
        match self {
            NodeOrToken::Node(node) => node.is_leaf(),
            NodeOrToken::Token(_) => true,
        }
    }

    /// Children of a composite; empty for a terminal.
    pub fn children(&self) -> Vec<Element> {
        match self {
            NodeOrToken::Node(node) => node.children(),
            NodeOrToken::Token(_) => Vec::new(),
        }
    }

    pub fn descendants(&self) -> Descendants {
        Descendants::new(self)
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Arc<Token>> {
        match self {
            NodeOrToken::Token(token) => Some(token),
            NodeOrToken::Node(_) => None,
        }
    }

    pub fn into_node(self) -> Option<Node> {
        match self {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        }
    }

    pub fn into_token(self) -> Option<Arc<Token>> {
        match self {
            NodeOrToken::Token(token) => Some(token),
            NodeOrToken::Node(_) => None,
        }
    }
}

/// Appends a field's elements to a child sequence, in source order.
///
/// Implemented by every field type a shape can store: terminals, composites,
/// optionals (contributing nothing when absent), pairs, and star lists.
pub trait ChildElements {
    fn collect_into(&self, out: &mut Vec<Element>);
}

impl ChildElements for Arc<Token> {
    fn collect_into(&self, out: &mut Vec<Element>) {
        out.push(Element::Token(self.clone()));
    }
}

impl<T: ChildElements> ChildElements for Option<T> {
    fn collect_into(&self, out: &mut Vec<Element>) {
        if let Some(value) = self {
            value.collect_into(out);
        }
    }
}

impl<A: ChildElements, B: ChildElements> ChildElements for (A, B) {
    fn collect_into(&self, out: &mut Vec<Element>) {
        self.0.collect_into(out);
        self.1.collect_into(out);
    }
}

impl<T: ChildElements> ChildElements for Vec<T> {
    fn collect_into(&self, out: &mut Vec<Element>) {
        for value in self {
            value.collect_into(out);
        }
    }
}

/// Span covered by a child sequence: first start to last end, empty if none.
pub(crate) fn span_of(children: &[Element]) -> TextRange {
    match (children.first(), children.last()) {
        (Some(first), Some(last)) => TextRange::new(first.range().start(), last.range().end()),
        _ => TextRange::default(),
    }
}
