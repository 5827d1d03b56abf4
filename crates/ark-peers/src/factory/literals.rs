use ark_native::AstNodeType;

use super::{Factory, NodeArgs};
use crate::error::Result;
use crate::node::Node;
use crate::nodes::{
    AnnotationUsage, BooleanLiteral, EtsTypeReference, Identifier, NullLiteral, NumberLiteral,
    StringLiteral, TemplateElement, TemplateLiteral, TsTypeParameterDeclaration,
    TsTypeParameterInstantiation, UndefinedLiteral,
};

impl Factory<'_> {
    pub fn create_identifier(&self, name: &str) -> Result<Identifier> {
        self.create(NodeArgs::new(AstNodeType::Identifier).str(name))
    }

    pub fn update_identifier(&self, original: &Identifier, name: &str) -> Result<Identifier> {
        self.update(original, NodeArgs::new(AstNodeType::Identifier).str(name))
    }

    pub fn create_string_literal(&self, value: &str) -> Result<StringLiteral> {
        self.create(NodeArgs::new(AstNodeType::StringLiteral).str(value))
    }

    pub fn update_string_literal(
        &self,
        original: &StringLiteral,
        value: &str,
    ) -> Result<StringLiteral> {
        self.update(original, NodeArgs::new(AstNodeType::StringLiteral).str(value))
    }

    pub fn create_number_literal(&self, value: f64) -> Result<NumberLiteral> {
        self.create(NodeArgs::new(AstNodeType::NumberLiteral).double(value))
    }

    pub fn update_number_literal(
        &self,
        original: &NumberLiteral,
        value: f64,
    ) -> Result<NumberLiteral> {
        self.update(original, NodeArgs::new(AstNodeType::NumberLiteral).double(value))
    }

    pub fn create_boolean_literal(&self, value: bool) -> Result<BooleanLiteral> {
        self.create(NodeArgs::new(AstNodeType::BooleanLiteral).bool(value))
    }

    pub fn update_boolean_literal(
        &self,
        original: &BooleanLiteral,
        value: bool,
    ) -> Result<BooleanLiteral> {
        self.update(original, NodeArgs::new(AstNodeType::BooleanLiteral).bool(value))
    }

    pub fn create_null_literal(&self) -> Result<NullLiteral> {
        self.create(NodeArgs::new(AstNodeType::NullLiteral))
    }

    /// A null literal has no fields; this always returns `original`.
    pub fn update_null_literal(&self, original: &NullLiteral) -> Result<NullLiteral> {
        self.update(original, NodeArgs::new(AstNodeType::NullLiteral))
    }

    pub fn create_undefined_literal(&self) -> Result<UndefinedLiteral> {
        self.create(NodeArgs::new(AstNodeType::UndefinedLiteral))
    }

    pub fn update_undefined_literal(&self, original: &UndefinedLiteral) -> Result<UndefinedLiteral> {
        self.update(original, NodeArgs::new(AstNodeType::UndefinedLiteral))
    }

    pub fn create_template_element(&self, raw: &str, cooked: &str) -> Result<TemplateElement> {
        self.create(
            NodeArgs::new(AstNodeType::TemplateElement)
                .str(raw)
                .str(cooked),
        )
    }

    pub fn update_template_element(
        &self,
        original: &TemplateElement,
        raw: &str,
        cooked: &str,
    ) -> Result<TemplateElement> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::TemplateElement)
                .str(raw)
                .str(cooked),
        )
    }

    pub fn create_template_literal(
        &self,
        quasis: &[Node],
        expressions: &[Node],
    ) -> Result<TemplateLiteral> {
        self.create(
            NodeArgs::new(AstNodeType::TemplateLiteral)
                .list(quasis)
                .list(expressions),
        )
    }

    pub fn update_template_literal(
        &self,
        original: &TemplateLiteral,
        quasis: &[Node],
        expressions: &[Node],
    ) -> Result<TemplateLiteral> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::TemplateLiteral)
                .list(quasis)
                .list(expressions),
        )
    }

    pub fn create_annotation_usage(
        &self,
        expr: &Node,
        properties: &[Node],
    ) -> Result<AnnotationUsage> {
        self.create(
            NodeArgs::new(AstNodeType::AnnotationUsage)
                .node(expr)
                .list(properties),
        )
    }

    pub fn update_annotation_usage(
        &self,
        original: &AnnotationUsage,
        expr: &Node,
        properties: &[Node],
    ) -> Result<AnnotationUsage> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::AnnotationUsage)
                .node(expr)
                .list(properties),
        )
    }

    pub fn create_ets_type_reference(&self, type_name: &Node) -> Result<EtsTypeReference> {
        self.create(NodeArgs::new(AstNodeType::EtsTypeReference).node(type_name))
    }

    pub fn update_ets_type_reference(
        &self,
        original: &EtsTypeReference,
        type_name: &Node,
    ) -> Result<EtsTypeReference> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::EtsTypeReference).node(type_name),
        )
    }

    pub fn create_ts_type_parameter_instantiation(
        &self,
        params: &[Node],
    ) -> Result<TsTypeParameterInstantiation> {
        self.create(NodeArgs::new(AstNodeType::TsTypeParameterInstantiation).list(params))
    }

    pub fn update_ts_type_parameter_instantiation(
        &self,
        original: &TsTypeParameterInstantiation,
        params: &[Node],
    ) -> Result<TsTypeParameterInstantiation> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::TsTypeParameterInstantiation).list(params),
        )
    }

    pub fn create_ts_type_parameter_declaration(
        &self,
        params: &[Node],
        required_params: i32,
    ) -> Result<TsTypeParameterDeclaration> {
        self.create(
            NodeArgs::new(AstNodeType::TsTypeParameterDeclaration)
                .list(params)
                .int(required_params),
        )
    }

    pub fn update_ts_type_parameter_declaration(
        &self,
        original: &TsTypeParameterDeclaration,
        params: &[Node],
        required_params: i32,
    ) -> Result<TsTypeParameterDeclaration> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::TsTypeParameterDeclaration)
                .list(params)
                .int(required_params),
        )
    }
}
