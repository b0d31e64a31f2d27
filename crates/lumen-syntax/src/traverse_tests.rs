use text_size::TextSize;
use triomphe::Arc;

use crate::{
    Block, Chunk, Element, Expr, LiteralExpr, Node, ReturnStat, SeparatedList,
    SeparatedListElement, Stat, SyntaxKind, Token,
};

fn tok(kind: SyntaxKind, offset: u32, text: &str) -> Arc<Token> {
    Token::new(kind, TextSize::new(offset), text)
}

/// `return 1, 2`
fn root() -> Node {
    let number = |offset, text| {
        Expr::Literal(
            LiteralExpr::builder().token(tok(SyntaxKind::Number, offset, text)).build().unwrap(),
        )
    };
    let values = SeparatedList::new(vec![
        SeparatedListElement::new(number(7, "1"), Some(tok(SyntaxKind::Comma, 8, ","))),
        SeparatedListElement::new(number(10, "2"), None),
    ]);
    let stat = ReturnStat::builder()
        .return_token(tok(SyntaxKind::KwReturn, 0, "return"))
        .values(values)
        .build()
        .unwrap();
    let block = Block::builder().statements(vec![Stat::Return(stat)]).build().unwrap();
    let chunk = Chunk::builder().block(block).eof(tok(SyntaxKind::Eof, 11, "")).build().unwrap();
    Node::Chunk(chunk)
}

#[test]
fn chunk_walk_yields_the_chunk_first() {
    let kinds: Vec<_> = root().descendants().map(|element| element.kind()).collect();
    assert_eq!(
        kinds,
        [
            SyntaxKind::Chunk,
            SyntaxKind::Block,
            SyntaxKind::ReturnStat,
            SyntaxKind::KwReturn,
            SyntaxKind::ExprList,
            SyntaxKind::LiteralExpr,
            SyntaxKind::Number,
            SyntaxKind::Comma,
            SyntaxKind::LiteralExpr,
            SyntaxKind::Number,
            SyntaxKind::Eof,
        ]
    );
    assert_eq!(kinds.iter().filter(|kind| **kind == SyntaxKind::Chunk).count(), 1);
}

#[test]
fn non_root_walk_excludes_the_start_node() {
    let root = root();
    let Node::Chunk(chunk) = &root else { unreachable!() };
    let block = Node::Block(chunk.block().clone());
    let kinds: Vec<_> = block.descendants().map(|element| element.kind()).collect();
    assert_eq!(kinds.first(), Some(&SyntaxKind::ReturnStat));
    assert!(!kinds.contains(&SyntaxKind::Block));
}

#[test]
fn leaf_and_token_walks_are_empty() {
    let empty = Block::builder().statements(Vec::new()).build().unwrap();
    assert_eq!(Node::Block(empty).descendants().count(), 0);

    let token = Element::Token(tok(SyntaxKind::Name, 0, "x"));
    assert_eq!(token.descendants().count(), 0);
}

#[test]
fn walks_restart_from_scratch() {
    let root = root();
    let first: Vec<Element> = root.descendants().collect();
    let second: Vec<Element> = root.descendants().collect();
    assert_eq!(first, second);

    // A partially consumed walk leaves other walks untouched.
    let mut partial = root.descendants();
    partial.next();
    partial.next();
    assert_eq!(root.descendants().count(), first.len());
}

#[test]
fn walk_is_fused() {
    let mut walk = root().descendants();
    assert_eq!(walk.by_ref().count(), 11);
    assert!(walk.next().is_none(), "fused walk must stay exhausted");
}
