use ark_native::{AstNodeType, MemberExpressionKind, TokenType};

use super::{Factory, NodeArgs};
use crate::error::Result;
use crate::node::Node;
use crate::nodes::{
    ArrayExpression, ArrowFunctionExpression, AssignmentExpression, BinaryExpression,
    BlockExpression, CallExpression, ConditionalExpression, EtsImportDeclaration,
    EtsNewClassInstanceExpression, FunctionExpression, ImportSpecifier, MemberExpression,
    ObjectExpression, Property, TsAsExpression,
};

impl Factory<'_> {
    pub fn create_call_expression(
        &self,
        callee: &Node,
        arguments: &[Node],
        type_arguments: Option<&Node>,
        optional: bool,
        trailing_comma: bool,
        trailing_block: Option<&Node>,
    ) -> Result<CallExpression> {
        self.create(
            NodeArgs::new(AstNodeType::CallExpression)
                .node(callee)
                .list(arguments)
                .opt_node(type_arguments)
                .bool(optional)
                .bool(trailing_comma)
                .aux_opt_node(trailing_block),
        )
    }

    /// The trailing block is re-attached from `trailing_block`; whether it
    /// starts on a new line is copied from `original`.
    pub fn update_call_expression(
        &self,
        original: &CallExpression,
        callee: &Node,
        arguments: &[Node],
        type_arguments: Option<&Node>,
        optional: bool,
        trailing_comma: bool,
        trailing_block: Option<&Node>,
    ) -> Result<CallExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::CallExpression)
                .node(callee)
                .list(arguments)
                .opt_node(type_arguments)
                .bool(optional)
                .bool(trailing_comma)
                .aux_opt_node(trailing_block),
        )
    }

    pub fn create_function_expression(&self, function: &Node) -> Result<FunctionExpression> {
        self.create(NodeArgs::new(AstNodeType::FunctionExpression).node(function))
    }

    pub fn update_function_expression(
        &self,
        original: &FunctionExpression,
        function: &Node,
    ) -> Result<FunctionExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::FunctionExpression).node(function),
        )
    }

    pub fn create_arrow_function_expression(
        &self,
        function: &Node,
    ) -> Result<ArrowFunctionExpression> {
        self.create(NodeArgs::new(AstNodeType::ArrowFunctionExpression).node(function))
    }

    /// Arrow functions expose no annotation accessor of their own, so their
    /// annotations are never compared and always copied from `original`.
    pub fn update_arrow_function_expression(
        &self,
        original: &ArrowFunctionExpression,
        function: &Node,
    ) -> Result<ArrowFunctionExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::ArrowFunctionExpression).node(function),
        )
    }

    pub fn create_assignment_expression(
        &self,
        left: &Node,
        right: &Node,
        operator: TokenType,
    ) -> Result<AssignmentExpression> {
        self.create(
            NodeArgs::new(AstNodeType::AssignmentExpression)
                .node(left)
                .node(right)
                .int(operator.raw()),
        )
    }

    pub fn update_assignment_expression(
        &self,
        original: &AssignmentExpression,
        left: &Node,
        right: &Node,
        operator: impl Into<i32>,
    ) -> Result<AssignmentExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::AssignmentExpression)
                .node(left)
                .node(right)
                .int(operator.into()),
        )
    }

    pub fn create_ets_new_class_instance_expression(
        &self,
        type_ref: &Node,
        arguments: &[Node],
    ) -> Result<EtsNewClassInstanceExpression> {
        self.create(
            NodeArgs::new(AstNodeType::EtsNewClassInstanceExpression)
                .node(type_ref)
                .list(arguments),
        )
    }

    pub fn update_ets_new_class_instance_expression(
        &self,
        original: &EtsNewClassInstanceExpression,
        type_ref: &Node,
        arguments: &[Node],
    ) -> Result<EtsNewClassInstanceExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::EtsNewClassInstanceExpression)
                .node(type_ref)
                .list(arguments),
        )
    }

    pub fn create_array_expression(&self, elements: &[Node]) -> Result<ArrayExpression> {
        self.create(NodeArgs::new(AstNodeType::ArrayExpression).list(elements))
    }

    pub fn update_array_expression(
        &self,
        original: &ArrayExpression,
        elements: &[Node],
    ) -> Result<ArrayExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::ArrayExpression).list(elements),
        )
    }

    pub fn create_block_expression(&self, statements: &[Node]) -> Result<BlockExpression> {
        self.create(NodeArgs::new(AstNodeType::BlockExpression).list(statements))
    }

    pub fn update_block_expression(
        &self,
        original: &BlockExpression,
        statements: &[Node],
    ) -> Result<BlockExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::BlockExpression).list(statements),
        )
    }

    pub fn create_member_expression(
        &self,
        object: &Node,
        property: &Node,
        kind: MemberExpressionKind,
        computed: bool,
        optional: bool,
    ) -> Result<MemberExpression> {
        self.create(
            NodeArgs::new(AstNodeType::MemberExpression)
                .node(object)
                .node(property)
                .int(kind.raw())
                .bool(computed)
                .bool(optional),
        )
    }

    pub fn update_member_expression(
        &self,
        original: &MemberExpression,
        object: &Node,
        property: &Node,
        kind: impl Into<i32>,
        computed: bool,
        optional: bool,
    ) -> Result<MemberExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::MemberExpression)
                .node(object)
                .node(property)
                .int(kind.into())
                .bool(computed)
                .bool(optional),
        )
    }

    pub fn create_conditional_expression(
        &self,
        test: &Node,
        consequent: &Node,
        alternate: &Node,
    ) -> Result<ConditionalExpression> {
        self.create(
            NodeArgs::new(AstNodeType::ConditionalExpression)
                .node(test)
                .node(consequent)
                .node(alternate),
        )
    }

    pub fn update_conditional_expression(
        &self,
        original: &ConditionalExpression,
        test: &Node,
        consequent: &Node,
        alternate: &Node,
    ) -> Result<ConditionalExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::ConditionalExpression)
                .node(test)
                .node(consequent)
                .node(alternate),
        )
    }

    pub fn create_ts_as_expression(
        &self,
        expr: &Node,
        type_annotation: Option<&Node>,
        is_const: bool,
    ) -> Result<TsAsExpression> {
        self.create(
            NodeArgs::new(AstNodeType::TsAsExpression)
                .node(expr)
                .opt_node(type_annotation)
                .bool(is_const),
        )
    }

    pub fn update_ts_as_expression(
        &self,
        original: &TsAsExpression,
        expr: &Node,
        type_annotation: Option<&Node>,
        is_const: bool,
    ) -> Result<TsAsExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::TsAsExpression)
                .node(expr)
                .opt_node(type_annotation)
                .bool(is_const),
        )
    }

    pub fn create_object_expression(
        &self,
        properties: &[Node],
        trailing_comma: bool,
    ) -> Result<ObjectExpression> {
        self.create(
            NodeArgs::new(AstNodeType::ObjectExpression)
                .list(properties)
                .bool(trailing_comma),
        )
    }

    pub fn update_object_expression(
        &self,
        original: &ObjectExpression,
        properties: &[Node],
        trailing_comma: bool,
    ) -> Result<ObjectExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::ObjectExpression)
                .list(properties)
                .bool(trailing_comma),
        )
    }

    pub fn create_property(&self, key: &Node, value: &Node) -> Result<Property> {
        self.create(NodeArgs::new(AstNodeType::Property).node(key).node(value))
    }

    pub fn update_property(&self, original: &Property, key: &Node, value: &Node) -> Result<Property> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::Property).node(key).node(value),
        )
    }

    pub fn create_binary_expression(
        &self,
        left: &Node,
        right: &Node,
        operator: TokenType,
    ) -> Result<BinaryExpression> {
        self.create(
            NodeArgs::new(AstNodeType::BinaryExpression)
                .node(left)
                .node(right)
                .int(operator.raw()),
        )
    }

    pub fn update_binary_expression(
        &self,
        original: &BinaryExpression,
        left: &Node,
        right: &Node,
        operator: impl Into<i32>,
    ) -> Result<BinaryExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::BinaryExpression)
                .node(left)
                .node(right)
                .int(operator.into()),
        )
    }

    // =========================================================================
    // Imports
    // =========================================================================

    pub fn create_ets_import_declaration(
        &self,
        source: &Node,
        specifiers: &[Node],
        import_kind: i32,
    ) -> Result<EtsImportDeclaration> {
        self.create(
            NodeArgs::new(AstNodeType::EtsImportDeclaration)
                .node(source)
                .list(specifiers)
                .int(import_kind),
        )
    }

    pub fn update_ets_import_declaration(
        &self,
        original: &EtsImportDeclaration,
        source: &Node,
        specifiers: &[Node],
        import_kind: i32,
    ) -> Result<EtsImportDeclaration> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::EtsImportDeclaration)
                .node(source)
                .list(specifiers)
                .int(import_kind),
        )
    }

    pub fn create_import_specifier(
        &self,
        imported: &Node,
        local: Option<&Node>,
    ) -> Result<ImportSpecifier> {
        self.create(
            NodeArgs::new(AstNodeType::ImportSpecifier)
                .node(imported)
                .opt_node(local),
        )
    }

    pub fn update_import_specifier(
        &self,
        original: &ImportSpecifier,
        imported: &Node,
        local: Option<&Node>,
    ) -> Result<ImportSpecifier> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::ImportSpecifier)
                .node(imported)
                .opt_node(local),
        )
    }
}
