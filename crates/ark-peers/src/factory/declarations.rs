//! Declarations. Their modifiers are copied from the original on rebuild.

use ark_native::{AstNodeType, VariableDeclarationKind};

use super::{Factory, NodeArgs};
use crate::error::Result;
use crate::node::Node;
use crate::nodes::{
    ClassDeclaration, EtsStructDeclaration, FunctionDeclaration, TsInterfaceDeclaration,
    VariableDeclaration,
};

impl Factory<'_> {
    pub fn create_function_declaration(
        &self,
        function: &Node,
        annotations: &[Node],
        is_anonymous: bool,
    ) -> Result<FunctionDeclaration> {
        self.create(
            NodeArgs::new(AstNodeType::FunctionDeclaration)
                .node(function)
                .bool(is_anonymous)
                .aux_list(annotations),
        )
    }

    pub fn update_function_declaration(
        &self,
        original: &FunctionDeclaration,
        function: &Node,
        annotations: &[Node],
        is_anonymous: bool,
    ) -> Result<FunctionDeclaration> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::FunctionDeclaration)
                .node(function)
                .bool(is_anonymous)
                .aux_list(annotations),
        )
    }

    pub fn create_class_declaration(&self, definition: &Node) -> Result<ClassDeclaration> {
        self.create(NodeArgs::new(AstNodeType::ClassDeclaration).node(definition))
    }

    pub fn update_class_declaration(
        &self,
        original: &ClassDeclaration,
        definition: &Node,
    ) -> Result<ClassDeclaration> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::ClassDeclaration).node(definition),
        )
    }

    pub fn create_ets_struct_declaration(&self, definition: &Node) -> Result<EtsStructDeclaration> {
        self.create(NodeArgs::new(AstNodeType::EtsStructDeclaration).node(definition))
    }

    pub fn update_ets_struct_declaration(
        &self,
        original: &EtsStructDeclaration,
        definition: &Node,
    ) -> Result<EtsStructDeclaration> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::EtsStructDeclaration).node(definition),
        )
    }

    pub fn create_ts_interface_declaration(
        &self,
        extends: &[Node],
        id: &Node,
        type_params: Option<&Node>,
        body: &Node,
        is_static: bool,
        is_external: bool,
        annotations: &[Node],
    ) -> Result<TsInterfaceDeclaration> {
        self.create(
            NodeArgs::new(AstNodeType::TsInterfaceDeclaration)
                .list(extends)
                .node(id)
                .opt_node(type_params)
                .node(body)
                .bool(is_static)
                .bool(is_external)
                .aux_list(annotations),
        )
    }

    pub fn update_ts_interface_declaration(
        &self,
        original: &TsInterfaceDeclaration,
        extends: &[Node],
        id: &Node,
        type_params: Option<&Node>,
        body: &Node,
        is_static: bool,
        is_external: bool,
        annotations: &[Node],
    ) -> Result<TsInterfaceDeclaration> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::TsInterfaceDeclaration)
                .list(extends)
                .node(id)
                .opt_node(type_params)
                .node(body)
                .bool(is_static)
                .bool(is_external)
                .aux_list(annotations),
        )
    }

    pub fn create_variable_declaration(
        &self,
        kind: VariableDeclarationKind,
        declarators: &[Node],
        annotations: &[Node],
    ) -> Result<VariableDeclaration> {
        self.create(
            NodeArgs::new(AstNodeType::VariableDeclaration)
                .int(kind.raw())
                .list(declarators)
                .aux_list(annotations),
        )
    }

    pub fn update_variable_declaration(
        &self,
        original: &VariableDeclaration,
        kind: impl Into<i32>,
        declarators: &[Node],
        annotations: &[Node],
    ) -> Result<VariableDeclaration> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::VariableDeclaration)
                .int(kind.into())
                .list(declarators)
                .aux_list(annotations),
        )
    }
}
