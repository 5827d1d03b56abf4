use ark_native::Field;

use super::peer_nodes;
use crate::context::Context;
use crate::error::Result;
use crate::node::Node;

peer_nodes! {
    BlockStatement => BlockStatement,
    ExpressionStatement => ExpressionStatement,
    IfStatement => IfStatement,
    ReturnStatement => ReturnStatement,
    TryStatement => TryStatement,
    CatchClause => CatchClause,
}

impl BlockStatement {
    pub fn statements(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Statements)
    }

    pub fn set_statements(&self, cx: &Context, statements: &[Node]) -> Result<()> {
        self.set_children(cx, Field::Statements, statements)
    }
}

impl ExpressionStatement {
    pub fn expression(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Expression)
    }
}

impl IfStatement {
    pub fn test(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Test)
    }

    pub fn consequent(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Consequent)
    }

    pub fn alternate(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Alternate)
    }
}

impl ReturnStatement {
    pub fn argument(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Argument)
    }
}

impl TryStatement {
    pub fn block(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Block)
    }

    pub fn catch_clauses(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::CatchClauses)
    }

    pub fn finalizer(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Finalizer)
    }
}

impl CatchClause {
    pub fn param(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Param)
    }

    pub fn body(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Body)
    }
}
