//! Pre-order depth-first traversal over the element view.

use std::iter::FusedIterator;

use crate::node::{Element, Node};

/// Pre-order walk of a subtree: each node is yielded before its children,
/// siblings left to right.
///
/// Starting from the `Chunk` root yields the chunk itself first; starting
/// from any other node yields strict descendants only, and starting from a
/// token yields nothing. Every call to [`Element::descendants`] builds a
/// fresh iterator over the same immutable tree, so a walk can be restarted
/// at will and always produces the same sequence.
pub struct Descendants {
    stack: Vec<std::vec::IntoIter<Element>>,
}

impl Descendants {
    pub(crate) fn new(start: &Element) -> Self {
        let seed = match start {
            Element::Node(Node::Chunk(_)) => vec![start.clone()],
            Element::Node(node) => node.children(),
            Element::Token(_) => Vec::new(),
        };
        Self { stack: vec![seed.into_iter()] }
    }
}

impl Iterator for Descendants {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(element) => {
                    let children = element.children();
                    if !children.is_empty() {
                        self.stack.push(children.into_iter());
                    }
                    return Some(element);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for Descendants {}
