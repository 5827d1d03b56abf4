use ark_native::{AstNodeType, MethodDefinitionKind, Modifiers, VariableDeclarationKind};

use super::{Factory, NodeArgs};
use crate::error::Result;
use crate::node::Node;
use crate::nodes::{
    ClassDefinition, ClassProperty, EtsParameterExpression, MethodDefinition, ScriptFunction,
    TsInterfaceBody, VariableDeclarator,
};

/// Fields of a class definition, in engine argument order.
#[derive(Clone, Debug, Default)]
pub struct ClassDefinitionParts {
    pub ident: Option<Node>,
    pub type_params: Option<Node>,
    pub super_type_params: Option<Node>,
    pub implements: Vec<Node>,
    pub ctor: Option<Node>,
    pub super_class: Option<Node>,
    pub members: Vec<Node>,
    pub class_modifiers: i32,
    pub modifiers: Modifiers,
    pub annotations: Vec<Node>,
}

impl ClassDefinitionParts {
    fn into_args(self) -> NodeArgs {
        NodeArgs::new(AstNodeType::ClassDefinition)
            .opt_node(self.ident.as_ref())
            .opt_node(self.type_params.as_ref())
            .opt_node(self.super_type_params.as_ref())
            .list(&self.implements)
            .opt_node(self.ctor.as_ref())
            .opt_node(self.super_class.as_ref())
            .list(&self.members)
            .int(self.class_modifiers)
            .int(self.modifiers.bits())
            .aux_list(&self.annotations)
    }
}

/// Fields of a script function, in engine argument order.
#[derive(Clone, Debug, Default)]
pub struct ScriptFunctionParts {
    pub body: Option<Node>,
    pub type_params: Option<Node>,
    pub params: Vec<Node>,
    pub return_type: Option<Node>,
    pub has_receiver: bool,
    pub flags: i32,
    pub modifiers: Modifiers,
    pub annotations: Vec<Node>,
}

impl ScriptFunctionParts {
    fn into_args(self) -> NodeArgs {
        NodeArgs::new(AstNodeType::ScriptFunction)
            .opt_node(self.body.as_ref())
            .opt_node(self.type_params.as_ref())
            .list(&self.params)
            .opt_node(self.return_type.as_ref())
            .bool(self.has_receiver)
            .int(self.flags)
            .int(self.modifiers.bits())
            .aux_list(&self.annotations)
    }
}

impl Factory<'_> {
    pub fn create_class_definition(&self, parts: ClassDefinitionParts) -> Result<ClassDefinition> {
        self.create(parts.into_args())
    }

    pub fn update_class_definition(
        &self,
        original: &ClassDefinition,
        parts: ClassDefinitionParts,
    ) -> Result<ClassDefinition> {
        self.update(original, parts.into_args())
    }

    pub fn create_method_definition(
        &self,
        kind: MethodDefinitionKind,
        key: &Node,
        value: &Node,
        modifiers: Modifiers,
        is_computed: bool,
    ) -> Result<MethodDefinition> {
        self.create(
            NodeArgs::new(AstNodeType::MethodDefinition)
                .int(kind.raw())
                .node(key)
                .node(value)
                .int(modifiers.bits())
                .bool(is_computed),
        )
    }

    /// Overloads and annotations are copied from `original` on rebuild.
    pub fn update_method_definition(
        &self,
        original: &MethodDefinition,
        kind: impl Into<i32>,
        key: &Node,
        value: &Node,
        modifiers: Modifiers,
        is_computed: bool,
    ) -> Result<MethodDefinition> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::MethodDefinition)
                .int(kind.into())
                .node(key)
                .node(value)
                .int(modifiers.bits())
                .bool(is_computed),
        )
    }

    pub fn create_ts_interface_body(&self, members: &[Node]) -> Result<TsInterfaceBody> {
        self.create(NodeArgs::new(AstNodeType::TsInterfaceBody).list(members))
    }

    pub fn update_ts_interface_body(
        &self,
        original: &TsInterfaceBody,
        members: &[Node],
    ) -> Result<TsInterfaceBody> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::TsInterfaceBody).list(members),
        )
    }

    pub fn create_variable_declarator(
        &self,
        flag: VariableDeclarationKind,
        id: &Node,
        init: Option<&Node>,
    ) -> Result<VariableDeclarator> {
        self.create(
            NodeArgs::new(AstNodeType::VariableDeclarator)
                .int(flag.raw())
                .node(id)
                .opt_node(init),
        )
    }

    pub fn update_variable_declarator(
        &self,
        original: &VariableDeclarator,
        flag: impl Into<i32>,
        id: &Node,
        init: Option<&Node>,
    ) -> Result<VariableDeclarator> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::VariableDeclarator)
                .int(flag.into())
                .node(id)
                .opt_node(init),
        )
    }

    pub fn create_script_function(&self, parts: ScriptFunctionParts) -> Result<ScriptFunction> {
        self.create(parts.into_args())
    }

    /// The function's identifier is copied from `original` on rebuild.
    pub fn update_script_function(
        &self,
        original: &ScriptFunction,
        parts: ScriptFunctionParts,
    ) -> Result<ScriptFunction> {
        self.update(original, parts.into_args())
    }

    pub fn create_class_property(
        &self,
        key: &Node,
        value: Option<&Node>,
        type_annotation: Option<&Node>,
        modifiers: Modifiers,
        is_computed: bool,
        annotations: &[Node],
    ) -> Result<ClassProperty> {
        self.create(
            NodeArgs::new(AstNodeType::ClassProperty)
                .node(key)
                .opt_node(value)
                .opt_node(type_annotation)
                .int(modifiers.bits())
                .bool(is_computed)
                .aux_list(annotations),
        )
    }

    pub fn update_class_property(
        &self,
        original: &ClassProperty,
        key: &Node,
        value: Option<&Node>,
        type_annotation: Option<&Node>,
        modifiers: Modifiers,
        is_computed: bool,
        annotations: &[Node],
    ) -> Result<ClassProperty> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::ClassProperty)
                .node(key)
                .opt_node(value)
                .opt_node(type_annotation)
                .int(modifiers.bits())
                .bool(is_computed)
                .aux_list(annotations),
        )
    }

    pub fn create_ets_parameter_expression(
        &self,
        ident: &Node,
        initializer: Option<&Node>,
        annotations: &[Node],
    ) -> Result<EtsParameterExpression> {
        self.create(
            NodeArgs::new(AstNodeType::EtsParameterExpression)
                .node(ident)
                .opt_node(initializer)
                .aux_list(annotations),
        )
    }

    /// The optional marker is copied from `original` on rebuild.
    pub fn update_ets_parameter_expression(
        &self,
        original: &EtsParameterExpression,
        ident: &Node,
        initializer: Option<&Node>,
        annotations: &[Node],
    ) -> Result<EtsParameterExpression> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::EtsParameterExpression)
                .node(ident)
                .opt_node(initializer)
                .aux_list(annotations),
        )
    }
}
