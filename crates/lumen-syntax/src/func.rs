//! Function helpers shared by declarations and function expressions.

use triomphe::Arc;

use crate::chunk::Block;
use crate::list::SeparatedList;
use crate::macros::ast_node;
use crate::node::Node;
use crate::token::Token;

ast_node! {
    /// A parameter list. The trailing vararg travels with its comma; a bare
    /// `...` parameter list stores the ellipsis as the only name.
    pub struct ParamList / ParamListBuilder: ParamList {
        required names: Arc<SeparatedList<Arc<Token>>>,
        optional vararg: (Arc<Token>, Arc<Token>),
    }
}

ast_node! {
    /// `'(' parlist ')' block end`, the body shared by every function form.
    pub struct FunctionBody / FunctionBodyBuilder: FunctionBody {
        required open_paren: Arc<Token>,
        required params: Arc<ParamList>,
        required close_paren: Arc<Token>,
        required body: Arc<Block>,
        required end_token: Arc<Token>,
    }
}

ast_node! {
    /// A dotted declaration path, `Name {'.' Name}`, with an optional
    /// trailing `':' Name` method part.
    pub struct FunctionName / FunctionNameBuilder: FunctionName {
        required path: Arc<SeparatedList<Arc<Token>>>,
        optional method: (Arc<Token>, Arc<Token>),
    }
}

impl From<Arc<ParamList>> for Node {
    fn from(node: Arc<ParamList>) -> Self {
        Node::ParamList(node)
    }
}

impl From<Arc<FunctionBody>> for Node {
    fn from(node: Arc<FunctionBody>) -> Self {
        Node::FunctionBody(node)
    }
}

impl From<Arc<FunctionName>> for Node {
    fn from(node: Arc<FunctionName>) -> Self {
        Node::FunctionName(node)
    }
}
