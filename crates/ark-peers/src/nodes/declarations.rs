use ark_native::{Field, VariableDeclarationKind};

use super::peer_nodes;
use crate::context::Context;
use crate::error::Result;
use crate::node::Node;

peer_nodes! {
    FunctionDeclaration => FunctionDeclaration,
    ClassDeclaration => ClassDeclaration,
    /// A `struct` declaration; a class declaration in the engine hierarchy.
    EtsStructDeclaration => EtsStructDeclaration,
    TsInterfaceDeclaration => TsInterfaceDeclaration,
    VariableDeclaration => VariableDeclaration,
}

impl FunctionDeclaration {
    /// The `ScriptFunction` holding signature and body.
    pub fn function(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Function)
    }

    pub fn is_anonymous(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::IsAnonymous)
    }
}

impl ClassDeclaration {
    pub fn definition(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Definition)
    }
}

impl EtsStructDeclaration {
    pub fn definition(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Definition)
    }
}

impl TsInterfaceDeclaration {
    pub fn extends(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Extends)
    }

    pub fn id(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Id)
    }

    pub fn type_params(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::TypeParams)
    }

    pub fn body(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Body)
    }

    pub fn is_static(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::IsStatic)
    }

    pub fn is_external(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::IsExternal)
    }
}

impl VariableDeclaration {
    pub fn declaration_kind(&self, cx: &Context) -> Result<VariableDeclarationKind> {
        self.int_as(cx, Field::DeclarationKind, VariableDeclarationKind::from_raw)
    }

    pub fn declaration_kind_raw(&self, cx: &Context) -> Result<i32> {
        self.int(cx, Field::DeclarationKind)
    }

    pub fn declarators(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Declarators)
    }
}
