//! Debug rendering of trees: an indented outline for snapshots, and a serde
//! view for structured consumers.

use std::fmt::Write as _;

use serde::ser::SerializeStruct;

use crate::node::{Element, NodeOrToken};

/// Renders a subtree as an indented outline, one element per line. Composite
/// lines read `Kind@start..end`; terminal lines append the token text.
pub fn dump(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element, 0);
    out
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    let range = element.range();
    let indent = "  ".repeat(depth);
    match element {
        NodeOrToken::Node(node) => {
            let _ = writeln!(out, "{indent}{:?}@{range:?}", node.kind());
            for child in node.children() {
                write_element(out, &child, depth + 1);
            }
        }
        NodeOrToken::Token(token) => {
            let _ = writeln!(out, "{indent}{:?}@{range:?} {:?}", token.kind(), token.text());
        }
    }
}

impl serde::Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let range = self.range();
        let mut state = serializer.serialize_struct("Element", 4)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("start", &u32::from(range.start()))?;
        state.serialize_field("end", &u32::from(range.end()))?;
        match self {
            NodeOrToken::Node(node) => {
                state.serialize_field("children", &node.children())?;
            }
            NodeOrToken::Token(token) => {
                state.serialize_field("text", token.text())?;
            }
        }
        state.end()
    }
}
