use text_size::{TextRange, TextSize};
use triomphe::Arc;

use crate::{Expr, LiteralExpr, SeparatedList, SeparatedListElement, SyntaxKind, Token};

fn tok(kind: SyntaxKind, offset: u32, text: &str) -> Arc<Token> {
    Token::new(kind, TextSize::new(offset), text)
}

fn number(offset: u32, text: &str) -> Expr {
    Expr::Literal(LiteralExpr::builder().token(tok(SyntaxKind::Number, offset, text)).build().unwrap())
}

/// `1, 2, 3`
fn one_two_three() -> Arc<SeparatedList<Expr>> {
    SeparatedList::new(vec![
        SeparatedListElement::new(number(0, "1"), Some(tok(SyntaxKind::Comma, 1, ","))),
        SeparatedListElement::new(number(3, "2"), Some(tok(SyntaxKind::Comma, 4, ","))),
        SeparatedListElement::new(number(6, "3"), None),
    ])
}

#[test]
fn children_interleave_items_and_separators() {
    let list = one_two_three();
    let kinds: Vec<_> = list.children().iter().map(|child| child.kind()).collect();
    assert_eq!(
        kinds,
        [
            SyntaxKind::LiteralExpr,
            SyntaxKind::Comma,
            SyntaxKind::LiteralExpr,
            SyntaxKind::Comma,
            SyntaxKind::LiteralExpr,
        ]
    );
    assert_eq!(list.len(), 3);
    assert_eq!(list.range(), TextRange::new(0.into(), 7.into()));
}

#[test]
fn empty_list_is_a_leaf() {
    let list: Arc<SeparatedList<Expr>> = SeparatedList::new(Vec::new());
    assert!(list.is_empty());
    assert!(list.children().is_empty());
    assert_eq!(list.range(), TextRange::default());
    assert_eq!(list.kind(), SyntaxKind::ExprList);
}

#[test]
fn list_kind_follows_item_type() {
    let names = SeparatedList::new(vec![SeparatedListElement::new(
        tok(SyntaxKind::Name, 0, "x"),
        None,
    )]);
    assert_eq!(names.kind(), SyntaxKind::NameList);
    assert_eq!(one_two_three().kind(), SyntaxKind::ExprList);
}

#[test]
fn element_children_are_item_then_separator() {
    let with_sep = SeparatedListElement::new(number(0, "1"), Some(tok(SyntaxKind::Comma, 1, ",")));
    assert_eq!(with_sep.kind(), SyntaxKind::ListElement);
    assert_eq!(with_sep.children().len(), 2);
    assert_eq!(with_sep.range(), TextRange::new(0.into(), 2.into()));

    let without = SeparatedListElement::new(number(0, "1"), None);
    assert_eq!(without.children().len(), 1);
    assert!(without.separator().is_none());
}

#[test]
fn from_items_carries_no_separators() {
    let list = SeparatedList::from_items([number(0, "1"), number(2, "2")]);
    assert_eq!(list.len(), 2);
    assert!(list.elements().iter().all(|element| element.separator().is_none()));
    assert_eq!(list.children().len(), 2);
    let items: Vec<_> = list.items().map(Expr::kind).collect();
    assert_eq!(items, [SyntaxKind::LiteralExpr, SyntaxKind::LiteralExpr]);
}
