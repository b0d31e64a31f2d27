//! Statement shapes.
//!
//! Field order in each declaration is the children contract for that
//! production; see the grammar table in the crate docs. Optional elements
//! that travel together (a separator and the thing it introduces) are a
//! single `Option` pair, so a half-present pair cannot be built.

use triomphe::Arc;

use crate::chunk::Block;
use crate::expr::{CallExpr, Expr, PrefixExpr};
use crate::func::{FunctionBody, FunctionName};
use crate::list::SeparatedList;
use crate::macros::{ast_enum, ast_node};
use crate::node::Node;
use crate::token::Token;

ast_node! {
    /// `varlist '=' exprlist`.
    pub struct AssignStat / AssignStatBuilder: AssignStat {
        required targets: Arc<SeparatedList<PrefixExpr>>,
        required equals: Arc<Token>,
        required values: Arc<SeparatedList<Expr>>,
    }
}

ast_node! {
    /// `local namelist ['=' exprlist]`.
    pub struct LocalAssignStat / LocalAssignStatBuilder: LocalAssignStat {
        required local_token: Arc<Token>,
        required names: Arc<SeparatedList<Arc<Token>>>,
        optional init: (Arc<Token>, Arc<SeparatedList<Expr>>),
    }
}

ast_node! {
    /// A function call in statement position.
    pub struct CallStat / CallStatBuilder: CallStat {
        required call: Arc<CallExpr>,
    }
}

ast_node! {
    /// `do block end`.
    pub struct DoStat / DoStatBuilder: DoStat {
        required do_token: Arc<Token>,
        required body: Arc<Block>,
        required end_token: Arc<Token>,
    }
}

ast_node! {
    /// `while exp do block end`.
    pub struct WhileStat / WhileStatBuilder: WhileStat {
        required while_token: Arc<Token>,
        required condition: Expr,
        required do_token: Arc<Token>,
        required body: Arc<Block>,
        required end_token: Arc<Token>,
    }
}

ast_node! {
    /// `repeat block until exp`.
    pub struct RepeatStat / RepeatStatBuilder: RepeatStat {
        required repeat_token: Arc<Token>,
        required body: Arc<Block>,
        required until_token: Arc<Token>,
        required condition: Expr,
    }
}

ast_node! {
    /// `if exp then block {elseif-clause} [else-clause] end`.
    ///
    /// The `end` keyword is the last child, after the clause lists, exactly
    /// as the production declares it.
    pub struct IfStat / IfStatBuilder: IfStat {
        required if_token: Arc<Token>,
        required condition: Expr,
        required then_token: Arc<Token>,
        required body: Arc<Block>,
        required elseifs: Vec<Arc<ElseIfClause>>,
        optional else_clause: Arc<ElseClause>,
        required end_token: Arc<Token>,
    }
}

ast_node! {
    /// `for Name '=' exp ',' exp [',' exp] do block end`.
    pub struct NumericForStat / NumericForStatBuilder: NumericForStat {
        required for_token: Arc<Token>,
        required name: Arc<Token>,
        required equals: Arc<Token>,
        required start: Expr,
        required comma: Arc<Token>,
        required limit: Expr,
        optional step: (Arc<Token>, Expr),
        required do_token: Arc<Token>,
        required body: Arc<Block>,
        required end_token: Arc<Token>,
    }
}

ast_node! {
    /// `for namelist in exprlist do block end`.
    pub struct GenericForStat / GenericForStatBuilder: GenericForStat {
        required for_token: Arc<Token>,
        required names: Arc<SeparatedList<Arc<Token>>>,
        required in_token: Arc<Token>,
        required values: Arc<SeparatedList<Expr>>,
        required do_token: Arc<Token>,
        required body: Arc<Block>,
        required end_token: Arc<Token>,
    }
}

ast_node! {
    /// `function funcname funcbody`.
    pub struct FunctionDeclStat / FunctionDeclStatBuilder: FunctionDeclStat {
        required function_token: Arc<Token>,
        required name: Arc<FunctionName>,
        required body: Arc<FunctionBody>,
    }
}

ast_node! {
    /// `local function Name funcbody`.
    pub struct LocalFunctionStat / LocalFunctionStatBuilder: LocalFunctionStat {
        required local_token: Arc<Token>,
        required function_token: Arc<Token>,
        required name: Arc<Token>,
        required body: Arc<FunctionBody>,
    }
}

ast_node! {
    /// `return exprlist [';']`.
    pub struct ReturnStat / ReturnStatBuilder: ReturnStat {
        required return_token: Arc<Token>,
        required values: Arc<SeparatedList<Expr>>,
        optional semicolon: Arc<Token>,
    }
}

ast_node! {
    /// `break`.
    pub struct BreakStat / BreakStatBuilder: BreakStat {
        required break_token: Arc<Token>,
    }
}

ast_node! {
    /// `goto Name`.
    pub struct GotoStat / GotoStatBuilder: GotoStat {
        required goto_token: Arc<Token>,
        required name: Arc<Token>,
    }
}

ast_node! {
    /// `'::' Name '::'`.
    pub struct LabelStat / LabelStatBuilder: LabelStat {
        required open_colons: Arc<Token>,
        required name: Arc<Token>,
        required close_colons: Arc<Token>,
    }
}

ast_node! {
    /// `elseif exp then block`.
    pub struct ElseIfClause / ElseIfClauseBuilder: ElseIfClause {
        required elseif_token: Arc<Token>,
        required condition: Expr,
        required then_token: Arc<Token>,
        required body: Arc<Block>,
    }
}

ast_node! {
    /// `else block`.
    pub struct ElseClause / ElseClauseBuilder: ElseClause {
        required else_token: Arc<Token>,
        required body: Arc<Block>,
    }
}

ast_enum! {
    /// Every statement production.
    pub enum Stat {
        Assign(AssignStat),
        LocalAssign(LocalAssignStat),
        Call(CallStat),
        Do(DoStat),
        While(WhileStat),
        Repeat(RepeatStat),
        If(IfStat),
        NumericFor(NumericForStat),
        GenericFor(GenericForStat),
        FunctionDecl(FunctionDeclStat),
        LocalFunction(LocalFunctionStat),
        Return(ReturnStat),
        Break(BreakStat),
        Goto(GotoStat),
        Label(LabelStat),
    }
}

impl From<Stat> for Node {
    fn from(stat: Stat) -> Self {
        Node::Stat(stat)
    }
}

impl From<Arc<ElseIfClause>> for Node {
    fn from(node: Arc<ElseIfClause>) -> Self {
        Node::ElseIf(node)
    }
}

impl From<Arc<ElseClause>> for Node {
    fn from(node: Arc<ElseClause>) -> Self {
        Node::Else(node)
    }
}
