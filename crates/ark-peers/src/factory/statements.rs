use ark_native::AstNodeType;

use super::{Factory, NodeArgs};
use crate::error::Result;
use crate::node::Node;
use crate::nodes::{
    BlockStatement, CatchClause, ExpressionStatement, IfStatement, ReturnStatement, TryStatement,
};

impl Factory<'_> {
    pub fn create_block_statement(&self, statements: &[Node]) -> Result<BlockStatement> {
        self.create(NodeArgs::new(AstNodeType::BlockStatement).list(statements))
    }

    pub fn update_block_statement(
        &self,
        original: &BlockStatement,
        statements: &[Node],
    ) -> Result<BlockStatement> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::BlockStatement).list(statements),
        )
    }

    pub fn create_expression_statement(&self, expression: &Node) -> Result<ExpressionStatement> {
        self.create(NodeArgs::new(AstNodeType::ExpressionStatement).node(expression))
    }

    pub fn update_expression_statement(
        &self,
        original: &ExpressionStatement,
        expression: &Node,
    ) -> Result<ExpressionStatement> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::ExpressionStatement).node(expression),
        )
    }

    pub fn create_if_statement(
        &self,
        test: &Node,
        consequent: &Node,
        alternate: Option<&Node>,
    ) -> Result<IfStatement> {
        self.create(
            NodeArgs::new(AstNodeType::IfStatement)
                .node(test)
                .node(consequent)
                .opt_node(alternate),
        )
    }

    pub fn update_if_statement(
        &self,
        original: &IfStatement,
        test: &Node,
        consequent: &Node,
        alternate: Option<&Node>,
    ) -> Result<IfStatement> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::IfStatement)
                .node(test)
                .node(consequent)
                .opt_node(alternate),
        )
    }

    pub fn create_return_statement(&self, argument: Option<&Node>) -> Result<ReturnStatement> {
        self.create(NodeArgs::new(AstNodeType::ReturnStatement).opt_node(argument))
    }

    pub fn update_return_statement(
        &self,
        original: &ReturnStatement,
        argument: Option<&Node>,
    ) -> Result<ReturnStatement> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::ReturnStatement).opt_node(argument),
        )
    }

    pub fn create_try_statement(
        &self,
        block: &Node,
        catch_clauses: &[Node],
        finalizer: Option<&Node>,
    ) -> Result<TryStatement> {
        self.create(
            NodeArgs::new(AstNodeType::TryStatement)
                .node(block)
                .list(catch_clauses)
                .opt_node(finalizer),
        )
    }

    pub fn update_try_statement(
        &self,
        original: &TryStatement,
        block: &Node,
        catch_clauses: &[Node],
        finalizer: Option<&Node>,
    ) -> Result<TryStatement> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::TryStatement)
                .node(block)
                .list(catch_clauses)
                .opt_node(finalizer),
        )
    }

    pub fn create_catch_clause(&self, param: Option<&Node>, body: &Node) -> Result<CatchClause> {
        self.create(
            NodeArgs::new(AstNodeType::CatchClause)
                .opt_node(param)
                .node(body),
        )
    }

    pub fn update_catch_clause(
        &self,
        original: &CatchClause,
        param: Option<&Node>,
        body: &Node,
    ) -> Result<CatchClause> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::CatchClause)
                .opt_node(param)
                .node(body),
        )
    }
}
