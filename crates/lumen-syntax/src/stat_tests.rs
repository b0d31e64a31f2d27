use text_size::TextSize;
use triomphe::Arc;

use crate::{
    Block, BuildError, ElseClause, ElseIfClause, Expr, IfStat, LiteralExpr, LocalAssignStat,
    NumericForStat, ReturnStat, SeparatedList, SeparatedListElement, SyntaxKind, Token,
};

fn tok(kind: SyntaxKind, text: &str) -> Arc<Token> {
    Token::new(kind, TextSize::new(0), text)
}

fn literal(kind: SyntaxKind, text: &str) -> Expr {
    Expr::Literal(LiteralExpr::builder().token(tok(kind, text)).build().unwrap())
}

fn empty_block() -> Arc<Block> {
    Block::builder().statements(Vec::new()).build().unwrap()
}

fn exprs(values: Vec<Expr>) -> Arc<SeparatedList<Expr>> {
    SeparatedList::from_items(values)
}

#[test]
fn return_children_are_keyword_then_values() {
    let stat = ReturnStat::builder()
        .return_token(tok(SyntaxKind::KwReturn, "return"))
        .values(exprs(vec![literal(SyntaxKind::Number, "1")]))
        .build()
        .unwrap();

    let kinds: Vec<_> = stat.children().iter().map(|child| child.kind()).collect();
    assert_eq!(kinds, [SyntaxKind::KwReturn, SyntaxKind::ExprList]);
    assert!(stat.semicolon().is_none());
}

#[test]
fn return_with_semicolon_has_three_children() {
    let stat = ReturnStat::builder()
        .return_token(tok(SyntaxKind::KwReturn, "return"))
        .values(exprs(Vec::new()))
        .semicolon(tok(SyntaxKind::Semicolon, ";"))
        .build()
        .unwrap();
    assert_eq!(stat.children().len(), 3);
}

#[test]
fn minimal_if_has_five_children() {
    let stat = IfStat::builder()
        .if_token(tok(SyntaxKind::KwIf, "if"))
        .condition(literal(SyntaxKind::KwTrue, "true"))
        .then_token(tok(SyntaxKind::KwThen, "then"))
        .body(empty_block())
        .elseifs(Vec::new())
        .end_token(tok(SyntaxKind::KwEnd, "end"))
        .build()
        .unwrap();

    let kinds: Vec<_> = stat.children().iter().map(|child| child.kind()).collect();
    assert_eq!(
        kinds,
        [
            SyntaxKind::KwIf,
            SyntaxKind::LiteralExpr,
            SyntaxKind::KwThen,
            SyntaxKind::Block,
            SyntaxKind::KwEnd,
        ]
    );
}

#[test]
fn if_clauses_come_before_end() {
    let elseif = ElseIfClause::builder()
        .elseif_token(tok(SyntaxKind::KwElseIf, "elseif"))
        .condition(literal(SyntaxKind::KwFalse, "false"))
        .then_token(tok(SyntaxKind::KwThen, "then"))
        .body(empty_block())
        .build()
        .unwrap();
    let else_clause = ElseClause::builder()
        .else_token(tok(SyntaxKind::KwElse, "else"))
        .body(empty_block())
        .build()
        .unwrap();

    let stat = IfStat::builder()
        .if_token(tok(SyntaxKind::KwIf, "if"))
        .condition(literal(SyntaxKind::KwTrue, "true"))
        .then_token(tok(SyntaxKind::KwThen, "then"))
        .body(empty_block())
        .elseifs(vec![elseif])
        .else_clause(else_clause)
        .end_token(tok(SyntaxKind::KwEnd, "end"))
        .build()
        .unwrap();

    let kinds: Vec<_> = stat.children().iter().map(|child| child.kind()).collect();
    assert_eq!(
        kinds,
        [
            SyntaxKind::KwIf,
            SyntaxKind::LiteralExpr,
            SyntaxKind::KwThen,
            SyntaxKind::Block,
            SyntaxKind::ElseIfClause,
            SyntaxKind::ElseClause,
            SyntaxKind::KwEnd,
        ]
    );
}

fn numeric_for(step: Option<(Arc<Token>, Expr)>) -> Arc<NumericForStat> {
    let mut builder = NumericForStat::builder()
        .for_token(tok(SyntaxKind::KwFor, "for"))
        .name(tok(SyntaxKind::Name, "i"))
        .equals(tok(SyntaxKind::Equals, "="))
        .start(literal(SyntaxKind::Number, "1"))
        .comma(tok(SyntaxKind::Comma, ","))
        .limit(literal(SyntaxKind::Number, "10"))
        .do_token(tok(SyntaxKind::KwDo, "do"))
        .body(empty_block())
        .end_token(tok(SyntaxKind::KwEnd, "end"));
    if let Some(step) = step {
        builder = builder.step(step);
    }
    builder.build().unwrap()
}

#[test]
fn numeric_for_step_travels_with_its_comma() {
    assert_eq!(numeric_for(None).children().len(), 9);

    let with_step = numeric_for(Some((
        tok(SyntaxKind::Comma, ","),
        literal(SyntaxKind::Number, "2"),
    )));
    assert_eq!(with_step.children().len(), 11);
    let kinds: Vec<_> = with_step.children().iter().map(|child| child.kind()).collect();
    assert_eq!(kinds[6], SyntaxKind::Comma);
    assert_eq!(kinds[7], SyntaxKind::LiteralExpr);
    assert_eq!(kinds[8], SyntaxKind::KwDo);
}

#[test]
fn local_assign_initializer_travels_with_equals() {
    let names = SeparatedList::from_items([tok(SyntaxKind::Name, "x")]);

    let bare = LocalAssignStat::builder()
        .local_token(tok(SyntaxKind::KwLocal, "local"))
        .names(names.clone())
        .build()
        .unwrap();
    assert_eq!(bare.children().len(), 2);
    assert!(bare.init().is_none());

    let initialized = bare
        .to_builder()
        .init((tok(SyntaxKind::Equals, "="), exprs(vec![literal(SyntaxKind::Number, "1")])))
        .build()
        .unwrap();
    let kinds: Vec<_> = initialized.children().iter().map(|child| child.kind()).collect();
    assert_eq!(
        kinds,
        [
            SyntaxKind::KwLocal,
            SyntaxKind::NameList,
            SyntaxKind::Equals,
            SyntaxKind::ExprList,
        ]
    );
}

#[test]
fn empty_block_is_a_leaf_composite() {
    let block = empty_block();
    assert!(block.statements().is_empty());
    assert!(block.children().is_empty());
}

#[test]
fn block_requires_its_statement_list() {
    let err = Block::builder().build().unwrap_err();
    assert_eq!(
        err,
        BuildError::MissingRequiredField { field: "statements", kind: SyntaxKind::Block }
    );
    assert_eq!(
        err.to_string(),
        "missing required field `statements` when building Block"
    );
}

#[test]
fn builder_reports_the_first_missing_field() {
    let err = ReturnStat::builder()
        .values(exprs(Vec::new()))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::MissingRequiredField { field: "return_token", kind: SyntaxKind::ReturnStat }
    );
}

#[test]
fn derivation_shares_untouched_fields() {
    let original = ReturnStat::builder()
        .return_token(tok(SyntaxKind::KwReturn, "return"))
        .values(exprs(vec![literal(SyntaxKind::Number, "1")]))
        .build()
        .unwrap();

    let derived = original
        .to_builder()
        .semicolon(tok(SyntaxKind::Semicolon, ";"))
        .build()
        .unwrap();

    assert!(!Arc::ptr_eq(&original, &derived));
    assert!(Arc::ptr_eq(original.return_token(), derived.return_token()));
    assert!(Arc::ptr_eq(original.values(), derived.values()));
    assert!(original.semicolon().is_none());
    assert!(derived.semicolon().is_some());
}
