//! Syntax kinds for the Lumen grammar.
//!
//! `SyntaxKind` serves dual roles: token kinds (produced by the tokenizer) and
//! node kinds (produced by the parser). Logos derives token recognition; node
//! kinds lack token/regex attributes and are never emitted by the lexer.
//!
//! The enum is laid out tokens first, then nodes, so classification is a
//! single discriminant comparison.

use logos::Logos;

/// All token and node kinds. Tokens first, then nodes.
/// `#[repr(u16)]` keeps the token/node boundary checkable by discriminant.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[repr(u16)]
pub enum SyntaxKind {
    // --- Keywords. Defined before `Name` so they take precedence. ---
    #[token("and")]
    KwAnd = 0,

    #[token("break")]
    KwBreak,

    #[token("do")]
    KwDo,

    #[token("else")]
    KwElse,

    #[token("elseif")]
    KwElseIf,

    #[token("end")]
    KwEnd,

    #[token("false")]
    KwFalse,

    #[token("for")]
    KwFor,

    #[token("function")]
    KwFunction,

    #[token("goto")]
    KwGoto,

    #[token("if")]
    KwIf,

    #[token("in")]
    KwIn,

    #[token("local")]
    KwLocal,

    #[token("nil")]
    KwNil,

    #[token("not")]
    KwNot,

    #[token("or")]
    KwOr,

    #[token("repeat")]
    KwRepeat,

    #[token("return")]
    KwReturn,

    #[token("then")]
    KwThen,

    #[token("true")]
    KwTrue,

    #[token("until")]
    KwUntil,

    #[token("while")]
    KwWhile,

    // --- Symbols ---
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("^")]
    Caret,

    #[token("#")]
    Hash,

    #[token("==")]
    EqEq,

    #[token("~=")]
    NotEq,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("=")]
    Equals,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(";")]
    Semicolon,

    /// `::` for labels. Defined before `Colon` for correct precedence.
    #[token("::")]
    DoubleColon,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    /// Vararg marker.
    #[token("...")]
    Ellipsis,

    /// Concatenation operator.
    #[token("..")]
    DotDot,

    #[token(".")]
    Dot,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Number,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    String,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"--[^\n]*", allow_greedy = true)]
    Comment,

    /// End-of-input marker; carries empty text.
    Eof,

    // --- Node kinds (non-terminals) ---
    Chunk,
    Block,
    AssignStat,
    LocalAssignStat,
    CallStat,
    DoStat,
    WhileStat,
    RepeatStat,
    IfStat,
    NumericForStat,
    GenericForStat,
    FunctionDeclStat,
    LocalFunctionStat,
    ReturnStat,
    BreakStat,
    GotoStat,
    LabelStat,
    ElseIfClause,
    ElseClause,
    LiteralExpr,
    VarargExpr,
    BinaryExpr,
    UnaryExpr,
    FunctionExpr,
    TableExpr,
    NameExpr,
    ParenExpr,
    IndexExpr,
    MemberExpr,
    CallExpr,
    ParenArgs,
    TableArgs,
    StringArgs,
    NameField,
    ExprField,
    ParamList,
    FunctionBody,
    FunctionName,
    ExprList,
    NameList,
    VarList,
    FieldList,
    ListElement,
}

impl SyntaxKind {
    /// True for terminal kinds (everything before `Chunk`).
    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < (SyntaxKind::Chunk as u16)
    }

    /// True for composite (grammar production) kinds.
    #[inline]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (self as u16) <= (SyntaxKind::KwWhile as u16)
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Comment)
    }
}
