//! The compilation-unit root and statement blocks.

use triomphe::Arc;

use crate::macros::ast_node;
use crate::node::Node;
use crate::stat::Stat;
use crate::token::Token;

ast_node! {
    /// One full compilation unit: a block closed by the end-of-file token.
    /// Exactly one chunk exists per tree, and it is the only element whose
    /// descendants enumeration includes itself.
    pub struct Chunk / ChunkBuilder: Chunk {
        required block: Arc<Block>,
        required eof: Arc<Token>,
    }
}

ast_node! {
    /// A statement sequence. The statement list must be set explicitly, even
    /// when empty; an empty block is a leaf composite.
    pub struct Block / BlockBuilder: Block {
        required statements: Vec<Stat>,
    }
}

impl From<Arc<Chunk>> for Node {
    fn from(node: Arc<Chunk>) -> Self {
        Node::Chunk(node)
    }
}

impl From<Arc<Block>> for Node {
    fn from(node: Arc<Block>) -> Self {
        Node::Block(node)
    }
}
