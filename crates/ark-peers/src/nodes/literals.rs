//! Identifiers, literals and the small type nodes that hang off them.

use ark_native::Field;

use super::peer_nodes;
use crate::context::Context;
use crate::error::Result;
use crate::node::Node;

peer_nodes! {
    Identifier => Identifier,
    StringLiteral => StringLiteral,
    NumberLiteral => NumberLiteral,
    BooleanLiteral => BooleanLiteral,
    NullLiteral => NullLiteral,
    UndefinedLiteral => UndefinedLiteral,
    TemplateElement => TemplateElement,
    TemplateLiteral => TemplateLiteral,
    AnnotationUsage => AnnotationUsage,
    EtsTypeReference => EtsTypeReference,
    TsTypeParameterInstantiation => TsTypeParameterInstantiation,
    TsTypeParameterDeclaration => TsTypeParameterDeclaration,
}

impl Identifier {
    pub fn name(&self, cx: &Context) -> Result<String> {
        self.string(cx, Field::Name)
    }
}

impl StringLiteral {
    pub fn value(&self, cx: &Context) -> Result<String> {
        self.string(cx, Field::StrValue)
    }
}

impl NumberLiteral {
    pub fn value(&self, cx: &Context) -> Result<f64> {
        self.double(cx, Field::NumValue)
    }
}

impl BooleanLiteral {
    pub fn value(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::BoolValue)
    }
}

impl TemplateElement {
    pub fn raw(&self, cx: &Context) -> Result<String> {
        self.string(cx, Field::Raw)
    }

    pub fn cooked(&self, cx: &Context) -> Result<String> {
        self.string(cx, Field::Cooked)
    }
}

impl TemplateLiteral {
    pub fn quasis(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Quasis)
    }

    pub fn expressions(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Expressions)
    }
}

impl AnnotationUsage {
    /// Name of the annotation, usually an identifier.
    pub fn expr(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Expression)
    }

    pub fn properties(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Properties)
    }
}

impl EtsTypeReference {
    pub fn type_name(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::TypeName)
    }
}

impl TsTypeParameterInstantiation {
    pub fn params(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Params)
    }
}

impl TsTypeParameterDeclaration {
    pub fn params(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Params)
    }

    pub fn required_params(&self, cx: &Context) -> Result<i32> {
        self.int(cx, Field::RequiredParams)
    }
}
