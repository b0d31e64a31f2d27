//! Separated lists: the `item (separator item)*` production.
//!
//! One generic shape serves expression lists, name lists, assignment target
//! lists, table-field lists, and dotted function-name paths. A list's children
//! are flattened: each element contributes its item and then its separator
//! token if present. By convention of the producing grammar rules only the
//! final element omits its separator, but the model does not enforce that;
//! it is a parser-level concern.

use std::fmt;
use std::hash::Hash;

use text_size::TextRange;
use triomphe::Arc;

use crate::node::{ChildElements, Element, Node, span_of};
use crate::syntax_kind::SyntaxKind;
use crate::token::Token;

/// Types that can be the item of a separated list. Fixes the list's node kind
/// per item type.
pub trait ListItem: ChildElements + Clone + fmt::Debug + PartialEq + Eq + Hash {
    const LIST_KIND: SyntaxKind;

    fn list_node(list: Arc<SeparatedList<Self>>) -> Node
    where
        Self: Sized;
}

/// An ordered sequence of items with their separator terminals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeparatedList<T: ListItem> {
    range: TextRange,
    elements: Vec<SeparatedListElement<T>>,
}

impl<T: ListItem> SeparatedList<T> {
    /// Seals a list. Infallible: the element vector is the only field and may
    /// be empty, in which case the list is a leaf composite.
    pub fn new(elements: Vec<SeparatedListElement<T>>) -> Arc<Self> {
        let mut list = Self { range: TextRange::default(), elements };
        list.range = span_of(&list.children());
        Arc::new(list)
    }

    /// Convenience for lists whose elements carry no separators yet, used
    /// when deriving a list from plain items.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Arc<Self> {
        Self::new(items.into_iter().map(|item| SeparatedListElement::new(item, None)).collect())
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        T::LIST_KIND
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn elements(&self) -> &[SeparatedListElement<T>] {
        &self.elements
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.elements.iter().map(SeparatedListElement::item)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Flattened children: `[item1, sep1, item2, sep2, ..., itemN]`.
    pub fn children(&self) -> Vec<Element> {
        let mut out = Vec::new();
        for element in &self.elements {
            element.item.collect_into(&mut out);
            if let Some(separator) = &element.separator {
                out.push(Element::Token(separator.clone()));
            }
        }
        out
    }
}

impl<T: ListItem> ChildElements for Arc<SeparatedList<T>> {
    fn collect_into(&self, out: &mut Vec<Element>) {
        out.push(Element::Node(T::list_node(self.clone())));
    }
}

/// One list element: an item paired with its trailing separator, if any.
///
/// Elements never appear in a parent's child stream themselves; the list
/// flattens them away.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeparatedListElement<T: ListItem> {
    item: T,
    separator: Option<Arc<Token>>,
}

impl<T: ListItem> SeparatedListElement<T> {
    pub fn new(item: T, separator: Option<Arc<Token>>) -> Self {
        Self { item, separator }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        SyntaxKind::ListElement
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn separator(&self) -> Option<&Arc<Token>> {
        self.separator.as_ref()
    }

    /// `[item, separator?]`.
    pub fn children(&self) -> Vec<Element> {
        let mut out = Vec::new();
        self.item.collect_into(&mut out);
        if let Some(separator) = &self.separator {
            out.push(Element::Token(separator.clone()));
        }
        out
    }

    pub fn range(&self) -> TextRange {
        span_of(&self.children())
    }
}

impl ListItem for Arc<Token> {
    const LIST_KIND: SyntaxKind = SyntaxKind::NameList;

    fn list_node(list: Arc<SeparatedList<Self>>) -> Node {
        Node::NameList(list)
    }
}
