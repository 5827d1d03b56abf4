//! Field keys and per-kind node schemas.
//!
//! A schema records three things about a node kind:
//! - `params`: what the engine's create/update entry points take, positionally
//! - `compared_aux`: auxiliary metadata the kind exposes an accessor for; the
//!   host update operation accepts it as an argument, compares it, and
//!   re-applies it with a setter after the engine rebuilds the node
//! - `copied_aux`: auxiliary metadata with no kind-level accessor; never
//!   compared, copied from the original node after every rebuild
//!
//! An engine update never carries auxiliary metadata over to the new node.
//! Auxiliary fields are written onto an existing node, so their shapes are
//! limited to those the engine has setters for ([`AuxShape`]).

use crate::kind::AstNodeType;

/// Key of a node field at the engine boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    // Containers
    Statements,
    Members,
    Elements,
    Properties,
    Declarators,
    Params,
    Arguments,
    Specifiers,
    CatchClauses,
    Extends,
    Implements,
    Quasis,
    Expressions,
    Overloads,
    Annotations,

    // Single children
    Ident,
    Id,
    Key,
    Value,
    Init,
    Initializer,
    Function,
    Definition,
    Body,
    Block,
    Finalizer,
    Param,
    Expression,
    Test,
    Consequent,
    Alternate,
    Argument,
    Callee,
    TypeArguments,
    TypeParams,
    SuperTypeParams,
    SuperClass,
    Ctor,
    ReturnType,
    TypeAnnotation,
    TypeRef,
    TypeName,
    TrailingBlock,
    Left,
    Right,
    Object,
    Property,
    Source,
    Imported,
    Local,

    // Scalars
    Name,
    StrValue,
    NumValue,
    BoolValue,
    Raw,
    Cooked,
    Modifiers,
    ModuleFlags,
    ClassModifiers,
    FunctionFlags,
    DeclarationKind,
    DeclaratorFlag,
    MethodKind,
    MemberKind,
    ImportKind,
    Operator,
    RequiredParams,
    IsAnonymous,
    IsStatic,
    IsExternal,
    IsComputed,
    IsConst,
    HasReceiver,
    Optional,
    Computed,
    TrailingComma,
    TrailingBlockNewLine,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Field::Statements => "statements",
            Field::Members => "members",
            Field::Elements => "elements",
            Field::Properties => "properties",
            Field::Declarators => "declarators",
            Field::Params => "params",
            Field::Arguments => "arguments",
            Field::Specifiers => "specifiers",
            Field::CatchClauses => "catchClauses",
            Field::Extends => "extends",
            Field::Implements => "implements",
            Field::Quasis => "quasis",
            Field::Expressions => "expressions",
            Field::Overloads => "overloads",
            Field::Annotations => "annotations",
            Field::Ident => "ident",
            Field::Id => "id",
            Field::Key => "key",
            Field::Value => "value",
            Field::Init => "init",
            Field::Initializer => "initializer",
            Field::Function => "function",
            Field::Definition => "definition",
            Field::Body => "body",
            Field::Block => "block",
            Field::Finalizer => "finalizer",
            Field::Param => "param",
            Field::Expression => "expression",
            Field::Test => "test",
            Field::Consequent => "consequent",
            Field::Alternate => "alternate",
            Field::Argument => "argument",
            Field::Callee => "callee",
            Field::TypeArguments => "typeArguments",
            Field::TypeParams => "typeParams",
            Field::SuperTypeParams => "superTypeParams",
            Field::SuperClass => "superClass",
            Field::Ctor => "ctor",
            Field::ReturnType => "returnType",
            Field::TypeAnnotation => "typeAnnotation",
            Field::TypeRef => "typeRef",
            Field::TypeName => "typeName",
            Field::TrailingBlock => "trailingBlock",
            Field::Left => "left",
            Field::Right => "right",
            Field::Object => "object",
            Field::Property => "property",
            Field::Source => "source",
            Field::Imported => "imported",
            Field::Local => "local",
            Field::Name => "name",
            Field::StrValue => "str",
            Field::NumValue => "num",
            Field::BoolValue => "bool",
            Field::Raw => "raw",
            Field::Cooked => "cooked",
            Field::Modifiers => "modifiers",
            Field::ModuleFlags => "moduleFlags",
            Field::ClassModifiers => "classModifiers",
            Field::FunctionFlags => "functionFlags",
            Field::DeclarationKind => "declarationKind",
            Field::DeclaratorFlag => "declaratorFlag",
            Field::MethodKind => "methodKind",
            Field::MemberKind => "memberKind",
            Field::ImportKind => "importKind",
            Field::Operator => "operator",
            Field::RequiredParams => "requiredParams",
            Field::IsAnonymous => "isAnonymous",
            Field::IsStatic => "isStatic",
            Field::IsExternal => "isExternal",
            Field::IsComputed => "isComputed",
            Field::IsConst => "isConst",
            Field::HasReceiver => "hasReceiver",
            Field::Optional => "optional",
            Field::Computed => "computed",
            Field::TrailingComma => "trailingComma",
            Field::TrailingBlockNewLine => "trailingBlockNewLine",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Value shape of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Required child node.
    Node,
    /// Child node that may be null.
    OptNode,
    /// Sequence of child nodes.
    List,
    Str,
    Bool,
    Int,
    Double,
}

/// Value shape of an auxiliary field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuxShape {
    Node,
    OptNode,
    List,
    Bool,
    Int,
}

impl From<AuxShape> for Shape {
    fn from(shape: AuxShape) -> Shape {
        match shape {
            AuxShape::Node => Shape::Node,
            AuxShape::OptNode => Shape::OptNode,
            AuxShape::List => Shape::List,
            AuxShape::Bool => Shape::Bool,
            AuxShape::Int => Shape::Int,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    pub field: Field,
    pub shape: Shape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuxParam {
    pub field: Field,
    pub shape: AuxShape,
}

impl AuxParam {
    #[inline]
    pub fn param(self) -> Param {
        Param {
            field: self.field,
            shape: self.shape.into(),
        }
    }
}

/// Static description of one node kind at the engine boundary.
#[derive(Debug)]
pub struct NodeSchema {
    pub params: &'static [Param],
    pub compared_aux: &'static [AuxParam],
    pub copied_aux: &'static [AuxParam],
}

impl NodeSchema {
    /// Shape of `field` if the kind carries it at all.
    pub fn shape_of(&self, field: Field) -> Option<Shape> {
        if let Some(param) = self.params.iter().find(|param| param.field == field) {
            return Some(param.shape);
        }
        self.compared_aux
            .iter()
            .chain(self.copied_aux)
            .find(|aux| aux.field == field)
            .map(|aux| aux.shape.into())
    }

    /// Whether the kind exposes a kind-level accessor for `field`.
    pub fn has_accessor(&self, field: Field) -> bool {
        self.params.iter().any(|param| param.field == field)
            || self.compared_aux.iter().any(|aux| aux.field == field)
    }

    /// Position of `field` in the create/update argument list.
    pub fn param_index(&self, field: Field) -> Option<usize> {
        self.params.iter().position(|param| param.field == field)
    }
}

macro_rules! schema {
    (
        params: [$($pf:ident: $ps:ident),* $(,)?]
        $(, compared: [$($cf:ident: $cs:ident),* $(,)?])?
        $(, copied: [$($xf:ident: $xs:ident),* $(,)?])?
    ) => {
        &NodeSchema {
            params: &[$(Param { field: Field::$pf, shape: Shape::$ps }),*],
            compared_aux: &[$($(AuxParam { field: Field::$cf, shape: AuxShape::$cs }),*)?],
            copied_aux: &[$($(AuxParam { field: Field::$xf, shape: AuxShape::$xs }),*)?],
        }
    };
}

/// Schema of `kind`.
pub const fn schema(kind: AstNodeType) -> &'static NodeSchema {
    match kind {
        AstNodeType::EtsModule => schema! {
            params: [Statements: List, Ident: OptNode, ModuleFlags: Int],
            compared: [Annotations: List]
        },
        AstNodeType::Identifier => schema! { params: [Name: Str] },
        AstNodeType::StringLiteral => schema! { params: [StrValue: Str] },
        AstNodeType::NumberLiteral => schema! { params: [NumValue: Double] },
        AstNodeType::BooleanLiteral => schema! { params: [BoolValue: Bool] },
        AstNodeType::NullLiteral | AstNodeType::UndefinedLiteral => schema! { params: [] },
        AstNodeType::TemplateElement => schema! { params: [Raw: Str, Cooked: Str] },
        AstNodeType::TemplateLiteral => schema! {
            params: [Quasis: List, Expressions: List]
        },
        AstNodeType::AnnotationUsage => schema! {
            params: [Expression: Node, Properties: List]
        },
        AstNodeType::EtsTypeReference => schema! { params: [TypeName: Node] },
        AstNodeType::TsTypeParameterInstantiation => schema! { params: [Params: List] },
        AstNodeType::TsTypeParameterDeclaration => schema! {
            params: [Params: List, RequiredParams: Int]
        },
        AstNodeType::FunctionDeclaration => schema! {
            params: [Function: Node, IsAnonymous: Bool],
            compared: [Annotations: List],
            copied: [Modifiers: Int]
        },
        AstNodeType::ClassDeclaration | AstNodeType::EtsStructDeclaration => schema! {
            params: [Definition: Node],
            compared: [],
            copied: [Modifiers: Int]
        },
        AstNodeType::TsInterfaceDeclaration => schema! {
            params: [
                Extends: List,
                Id: Node,
                TypeParams: OptNode,
                Body: Node,
                IsStatic: Bool,
                IsExternal: Bool,
            ],
            compared: [Annotations: List],
            copied: [Modifiers: Int]
        },
        AstNodeType::VariableDeclaration => schema! {
            params: [DeclarationKind: Int, Declarators: List],
            compared: [Annotations: List],
            copied: [Modifiers: Int]
        },
        AstNodeType::ClassDefinition => schema! {
            params: [
                Ident: OptNode,
                TypeParams: OptNode,
                SuperTypeParams: OptNode,
                Implements: List,
                Ctor: OptNode,
                SuperClass: OptNode,
                Members: List,
                ClassModifiers: Int,
                Modifiers: Int,
            ],
            compared: [Annotations: List]
        },
        AstNodeType::MethodDefinition => schema! {
            params: [MethodKind: Int, Key: Node, Value: Node, Modifiers: Int, IsComputed: Bool],
            compared: [],
            copied: [Overloads: List, Annotations: List]
        },
        AstNodeType::TsInterfaceBody => schema! { params: [Members: List] },
        AstNodeType::VariableDeclarator => schema! {
            params: [DeclaratorFlag: Int, Id: Node, Init: OptNode]
        },
        AstNodeType::ScriptFunction => schema! {
            params: [
                Body: OptNode,
                TypeParams: OptNode,
                Params: List,
                ReturnType: OptNode,
                HasReceiver: Bool,
                FunctionFlags: Int,
                Modifiers: Int,
            ],
            compared: [Annotations: List],
            copied: [Ident: OptNode]
        },
        AstNodeType::ClassProperty => schema! {
            params: [
                Key: Node,
                Value: OptNode,
                TypeAnnotation: OptNode,
                Modifiers: Int,
                IsComputed: Bool,
            ],
            compared: [Annotations: List]
        },
        AstNodeType::EtsParameterExpression => schema! {
            params: [Ident: Node, Initializer: OptNode],
            compared: [Annotations: List],
            copied: [Optional: Bool]
        },
        AstNodeType::BlockStatement | AstNodeType::BlockExpression => schema! {
            params: [Statements: List]
        },
        AstNodeType::ExpressionStatement => schema! { params: [Expression: Node] },
        AstNodeType::IfStatement => schema! {
            params: [Test: Node, Consequent: Node, Alternate: OptNode]
        },
        AstNodeType::ReturnStatement => schema! { params: [Argument: OptNode] },
        AstNodeType::TryStatement => schema! {
            params: [Block: Node, CatchClauses: List, Finalizer: OptNode]
        },
        AstNodeType::CatchClause => schema! { params: [Param: OptNode, Body: Node] },
        AstNodeType::CallExpression => schema! {
            params: [
                Callee: Node,
                Arguments: List,
                TypeArguments: OptNode,
                Optional: Bool,
                TrailingComma: Bool,
            ],
            compared: [TrailingBlock: OptNode],
            copied: [TrailingBlockNewLine: Bool]
        },
        AstNodeType::FunctionExpression => schema! { params: [Function: Node] },
        AstNodeType::ArrowFunctionExpression => schema! {
            params: [Function: Node],
            compared: [],
            copied: [Annotations: List]
        },
        AstNodeType::AssignmentExpression | AstNodeType::BinaryExpression => schema! {
            params: [Left: Node, Right: Node, Operator: Int]
        },
        AstNodeType::EtsNewClassInstanceExpression => schema! {
            params: [TypeRef: Node, Arguments: List]
        },
        AstNodeType::ArrayExpression => schema! { params: [Elements: List] },
        AstNodeType::MemberExpression => schema! {
            params: [
                Object: Node,
                Property: Node,
                MemberKind: Int,
                Computed: Bool,
                Optional: Bool,
            ]
        },
        AstNodeType::ConditionalExpression => schema! {
            params: [Test: Node, Consequent: Node, Alternate: Node]
        },
        AstNodeType::TsAsExpression => schema! {
            params: [Expression: Node, TypeAnnotation: OptNode, IsConst: Bool]
        },
        AstNodeType::ObjectExpression => schema! {
            params: [Properties: List, TrailingComma: Bool]
        },
        AstNodeType::Property => schema! { params: [Key: Node, Value: Node] },
        AstNodeType::EtsImportDeclaration => schema! {
            params: [Source: Node, Specifiers: List, ImportKind: Int]
        },
        AstNodeType::ImportSpecifier => schema! { params: [Imported: Node, Local: OptNode] },
    }
}
