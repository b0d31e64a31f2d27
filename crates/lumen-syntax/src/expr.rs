//! Expression shapes: literals, operators, functions, tables, the
//! prefix-expression/var chain, and call arguments.

use text_size::TextRange;
use triomphe::Arc;

use crate::func::FunctionBody;
use crate::list::{ListItem, SeparatedList};
use crate::macros::{ast_enum, ast_node};
use crate::node::{ChildElements, Element, Node};
use crate::syntax_kind::SyntaxKind;
use crate::token::Token;

ast_node! {
    /// A literal token in expression position: `nil`, `true`, `false`, a
    /// number, or a string.
    pub struct LiteralExpr / LiteralExprBuilder: LiteralExpr {
        required token: Arc<Token>,
    }
}

ast_node! {
    /// `...` in expression position.
    pub struct VarargExpr / VarargExprBuilder: VarargExpr {
        required token: Arc<Token>,
    }
}

ast_node! {
    /// `exp binop exp`.
    pub struct BinaryExpr / BinaryExprBuilder: BinaryExpr {
        required lhs: Expr,
        required op: Arc<Token>,
        required rhs: Expr,
    }
}

ast_node! {
    /// `unop exp`.
    pub struct UnaryExpr / UnaryExprBuilder: UnaryExpr {
        required op: Arc<Token>,
        required operand: Expr,
    }
}

ast_node! {
    /// An anonymous function: `function funcbody`.
    pub struct FunctionExpr / FunctionExprBuilder: FunctionExpr {
        required function_token: Arc<Token>,
        required body: Arc<FunctionBody>,
    }
}

ast_node! {
    /// A table constructor: `'{' fieldlist '}'`.
    pub struct TableExpr / TableExprBuilder: TableExpr {
        required open_brace: Arc<Token>,
        required fields: Arc<SeparatedList<TableField>>,
        required close_brace: Arc<Token>,
    }
}

ast_node! {
    /// A bare name in prefix position.
    pub struct NameExpr / NameExprBuilder: NameExpr {
        required token: Arc<Token>,
    }
}

ast_node! {
    /// `'(' exp ')'`.
    pub struct ParenExpr / ParenExprBuilder: ParenExpr {
        required open_paren: Arc<Token>,
        required expr: Expr,
        required close_paren: Arc<Token>,
    }
}

ast_node! {
    /// `prefixexp '[' exp ']'`.
    pub struct IndexExpr / IndexExprBuilder: IndexExpr {
        required target: PrefixExpr,
        required open_bracket: Arc<Token>,
        required index: Expr,
        required close_bracket: Arc<Token>,
    }
}

ast_node! {
    /// `prefixexp '.' Name`.
    pub struct MemberExpr / MemberExprBuilder: MemberExpr {
        required target: PrefixExpr,
        required dot: Arc<Token>,
        required name: Arc<Token>,
    }
}

ast_node! {
    /// A call: `prefixexp [':' Name] args`. The colon and method name travel
    /// together; plain calls carry neither.
    pub struct CallExpr / CallExprBuilder: CallExpr {
        required target: PrefixExpr,
        optional method: (Arc<Token>, Arc<Token>),
        required args: Args,
    }
}

ast_node! {
    /// `'(' exprlist ')'` argument form.
    pub struct ParenArgs / ParenArgsBuilder: ParenArgs {
        required open_paren: Arc<Token>,
        required values: Arc<SeparatedList<Expr>>,
        required close_paren: Arc<Token>,
    }
}

ast_node! {
    /// A single table constructor as the whole argument list.
    pub struct TableArgs / TableArgsBuilder: TableArgs {
        required table: Arc<TableExpr>,
    }
}

ast_node! {
    /// A single string literal as the whole argument list.
    pub struct StringArgs / StringArgsBuilder: StringArgs {
        required token: Arc<Token>,
    }
}

ast_node! {
    /// `Name '=' exp` inside a table constructor.
    pub struct NameField / NameFieldBuilder: NameField {
        required name: Arc<Token>,
        required equals: Arc<Token>,
        required value: Expr,
    }
}

ast_node! {
    /// `'[' exp ']' '=' exp` inside a table constructor.
    pub struct ExprField / ExprFieldBuilder: ExprField {
        required open_bracket: Arc<Token>,
        required index: Expr,
        required close_bracket: Arc<Token>,
        required equals: Arc<Token>,
        required value: Expr,
    }
}

ast_enum! {
    /// The prefix-expression/var chain: anything that can be indexed, called,
    /// or assigned to.
    pub enum PrefixExpr {
        Name(NameExpr),
        Paren(ParenExpr),
        Index(IndexExpr),
        Member(MemberExpr),
        Call(CallExpr),
    }
}

ast_enum! {
    /// The three call-argument forms.
    pub enum Args {
        Paren(ParenArgs),
        Table(TableArgs),
        String(StringArgs),
    }
}

/// Every expression production.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(Arc<LiteralExpr>),
    Vararg(Arc<VarargExpr>),
    Binary(Arc<BinaryExpr>),
    Unary(Arc<UnaryExpr>),
    Function(Arc<FunctionExpr>),
    Table(Arc<TableExpr>),
    Prefix(PrefixExpr),
}

impl Expr {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Expr::Literal(n) => n.kind(),
            Expr::Vararg(n) => n.kind(),
            Expr::Binary(n) => n.kind(),
            Expr::Unary(n) => n.kind(),
            Expr::Function(n) => n.kind(),
            Expr::Table(n) => n.kind(),
            Expr::Prefix(n) => n.kind(),
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Expr::Literal(n) => n.range(),
            Expr::Vararg(n) => n.range(),
            Expr::Binary(n) => n.range(),
            Expr::Unary(n) => n.range(),
            Expr::Function(n) => n.range(),
            Expr::Table(n) => n.range(),
            Expr::Prefix(n) => n.range(),
        }
    }

    pub fn children(&self) -> Vec<Element> {
        match self {
            Expr::Literal(n) => n.children(),
            Expr::Vararg(n) => n.children(),
            Expr::Binary(n) => n.children(),
            Expr::Unary(n) => n.children(),
            Expr::Function(n) => n.children(),
            Expr::Table(n) => n.children(),
            Expr::Prefix(n) => n.children(),
        }
    }
}

impl ChildElements for Expr {
    fn collect_into(&self, out: &mut Vec<Element>) {
        out.push(Element::Node(Node::from(self.clone())));
    }
}

impl From<Expr> for Node {
    fn from(expr: Expr) -> Self {
        Node::Expr(expr)
    }
}

impl From<PrefixExpr> for Expr {
    fn from(prefix: PrefixExpr) -> Self {
        Expr::Prefix(prefix)
    }
}

impl From<PrefixExpr> for Node {
    fn from(prefix: PrefixExpr) -> Self {
        Node::Expr(Expr::Prefix(prefix))
    }
}

impl From<Args> for Node {
    fn from(args: Args) -> Self {
        Node::Args(args)
    }
}

impl From<Arc<LiteralExpr>> for Expr {
    fn from(node: Arc<LiteralExpr>) -> Self {
        Expr::Literal(node)
    }
}

impl From<Arc<VarargExpr>> for Expr {
    fn from(node: Arc<VarargExpr>) -> Self {
        Expr::Vararg(node)
    }
}

impl From<Arc<BinaryExpr>> for Expr {
    fn from(node: Arc<BinaryExpr>) -> Self {
        Expr::Binary(node)
    }
}

impl From<Arc<UnaryExpr>> for Expr {
    fn from(node: Arc<UnaryExpr>) -> Self {
        Expr::Unary(node)
    }
}

impl From<Arc<FunctionExpr>> for Expr {
    fn from(node: Arc<FunctionExpr>) -> Self {
        Expr::Function(node)
    }
}

impl From<Arc<TableExpr>> for Expr {
    fn from(node: Arc<TableExpr>) -> Self {
        Expr::Table(node)
    }
}

impl From<Arc<LiteralExpr>> for Node {
    fn from(node: Arc<LiteralExpr>) -> Self {
        Node::Expr(Expr::Literal(node))
    }
}

impl From<Arc<VarargExpr>> for Node {
    fn from(node: Arc<VarargExpr>) -> Self {
        Node::Expr(Expr::Vararg(node))
    }
}

impl From<Arc<BinaryExpr>> for Node {
    fn from(node: Arc<BinaryExpr>) -> Self {
        Node::Expr(Expr::Binary(node))
    }
}

impl From<Arc<UnaryExpr>> for Node {
    fn from(node: Arc<UnaryExpr>) -> Self {
        Node::Expr(Expr::Unary(node))
    }
}

impl From<Arc<FunctionExpr>> for Node {
    fn from(node: Arc<FunctionExpr>) -> Self {
        Node::Expr(Expr::Function(node))
    }
}

impl From<Arc<TableExpr>> for Node {
    fn from(node: Arc<TableExpr>) -> Self {
        Node::Expr(Expr::Table(node))
    }
}

/// One table-constructor field. Positional items are plain expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableField {
    Name(Arc<NameField>),
    Expr(Arc<ExprField>),
    Item(Expr),
}

impl TableField {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            TableField::Name(n) => n.kind(),
            TableField::Expr(n) => n.kind(),
            TableField::Item(n) => n.kind(),
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            TableField::Name(n) => n.range(),
            TableField::Expr(n) => n.range(),
            TableField::Item(n) => n.range(),
        }
    }

    pub fn children(&self) -> Vec<Element> {
        match self {
            TableField::Name(n) => n.children(),
            TableField::Expr(n) => n.children(),
            TableField::Item(n) => n.children(),
        }
    }
}

impl ChildElements for TableField {
    fn collect_into(&self, out: &mut Vec<Element>) {
        out.push(Element::Node(Node::from(self.clone())));
    }
}

impl From<TableField> for Node {
    fn from(field: TableField) -> Self {
        match field {
            TableField::Name(n) => Node::NameField(n),
            TableField::Expr(n) => Node::ExprField(n),
            TableField::Item(expr) => Node::Expr(expr),
        }
    }
}

impl From<Arc<NameField>> for TableField {
    fn from(node: Arc<NameField>) -> Self {
        TableField::Name(node)
    }
}

impl From<Arc<ExprField>> for TableField {
    fn from(node: Arc<ExprField>) -> Self {
        TableField::Expr(node)
    }
}

impl From<Arc<NameField>> for Node {
    fn from(node: Arc<NameField>) -> Self {
        Node::NameField(node)
    }
}

impl From<Arc<ExprField>> for Node {
    fn from(node: Arc<ExprField>) -> Self {
        Node::ExprField(node)
    }
}

impl ListItem for Expr {
    const LIST_KIND: SyntaxKind = SyntaxKind::ExprList;

    fn list_node(list: Arc<SeparatedList<Self>>) -> Node {
        Node::ExprList(list)
    }
}

impl ListItem for PrefixExpr {
    const LIST_KIND: SyntaxKind = SyntaxKind::VarList;

    fn list_node(list: Arc<SeparatedList<Self>>) -> Node {
        Node::VarList(list)
    }
}

impl ListItem for TableField {
    const LIST_KIND: SyntaxKind = SyntaxKind::FieldList;

    fn list_node(list: Arc<SeparatedList<Self>>) -> Node {
        Node::FieldList(list)
    }
}
