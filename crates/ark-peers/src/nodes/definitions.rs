//! Class and interface bodies, members, functions and parameters.

use ark_native::{Field, MethodDefinitionKind, VariableDeclarationKind};

use super::peer_nodes;
use crate::context::Context;
use crate::error::Result;
use crate::node::Node;

peer_nodes! {
    ClassDefinition => ClassDefinition,
    MethodDefinition => MethodDefinition,
    TsInterfaceBody => TsInterfaceBody,
    VariableDeclarator => VariableDeclarator,
    ScriptFunction => ScriptFunction,
    ClassProperty => ClassProperty,
    EtsParameterExpression => EtsParameterExpression,
}

impl ClassDefinition {
    pub fn ident(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Ident)
    }

    pub fn type_params(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::TypeParams)
    }

    pub fn super_type_params(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::SuperTypeParams)
    }

    pub fn implements(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Implements)
    }

    pub fn ctor(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Ctor)
    }

    pub fn super_class(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::SuperClass)
    }

    pub fn members(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Members)
    }

    /// Raw class-level flags (abstract, final, extern and so on).
    pub fn class_modifiers(&self, cx: &Context) -> Result<i32> {
        self.int(cx, Field::ClassModifiers)
    }
}

impl MethodDefinition {
    pub fn method_kind(&self, cx: &Context) -> Result<MethodDefinitionKind> {
        self.int_as(cx, Field::MethodKind, MethodDefinitionKind::from_raw)
    }

    pub fn method_kind_raw(&self, cx: &Context) -> Result<i32> {
        self.int(cx, Field::MethodKind)
    }

    pub fn key(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Key)
    }

    /// The function expression implementing the method.
    pub fn value(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Value)
    }

    pub fn is_computed(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::IsComputed)
    }

    /// Overload signatures declared alongside this method.
    pub fn overloads(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Overloads)
    }

    pub fn set_overloads(&self, cx: &Context, overloads: &[Node]) -> Result<()> {
        self.set_children(cx, Field::Overloads, overloads)
    }
}

impl TsInterfaceBody {
    pub fn members(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Members)
    }
}

impl VariableDeclarator {
    pub fn declarator_flag(&self, cx: &Context) -> Result<VariableDeclarationKind> {
        self.int_as(cx, Field::DeclaratorFlag, VariableDeclarationKind::from_raw)
    }

    pub fn declarator_flag_raw(&self, cx: &Context) -> Result<i32> {
        self.int(cx, Field::DeclaratorFlag)
    }

    pub fn id(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Id)
    }

    pub fn init(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Init)
    }
}

impl ScriptFunction {
    pub fn body(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Body)
    }

    pub fn type_params(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::TypeParams)
    }

    pub fn params(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Params)
    }

    pub fn return_type(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::ReturnType)
    }

    pub fn has_receiver(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::HasReceiver)
    }

    pub fn flags(&self, cx: &Context) -> Result<i32> {
        self.int(cx, Field::FunctionFlags)
    }

    pub fn ident(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Ident)
    }

    pub fn set_ident(&self, cx: &Context, ident: Option<&Node>) -> Result<()> {
        self.set_child(cx, Field::Ident, ident)
    }
}

impl ClassProperty {
    pub fn key(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Key)
    }

    pub fn value(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Value)
    }

    pub fn type_annotation(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::TypeAnnotation)
    }

    pub fn is_computed(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::IsComputed)
    }
}

impl EtsParameterExpression {
    pub fn ident(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Ident)
    }

    pub fn initializer(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Initializer)
    }

    pub fn is_optional(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::Optional)
    }

    pub fn set_optional(&self, cx: &Context, optional: bool) -> Result<()> {
        self.set_flag(cx, Field::Optional, optional)
    }
}
