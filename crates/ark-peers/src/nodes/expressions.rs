//! Expressions and import declarations.

use ark_native::{Field, MemberExpressionKind, TokenType};

use super::peer_nodes;
use crate::context::Context;
use crate::error::Result;
use crate::node::{Captured, Node};

peer_nodes! {
    CallExpression => CallExpression,
    FunctionExpression => FunctionExpression,
    ArrowFunctionExpression => ArrowFunctionExpression,
    AssignmentExpression => AssignmentExpression,
    EtsNewClassInstanceExpression => EtsNewClassInstanceExpression,
    ArrayExpression => ArrayExpression,
    BlockExpression => BlockExpression,
    MemberExpression => MemberExpression,
    ConditionalExpression => ConditionalExpression,
    TsAsExpression => TsAsExpression,
    ObjectExpression => ObjectExpression,
    Property => Property,
    BinaryExpression => BinaryExpression,
    EtsImportDeclaration => EtsImportDeclaration,
    ImportSpecifier => ImportSpecifier,
}

impl CallExpression {
    /// Callee as captured when the wrapper was built.
    pub fn callee(&self, cx: &Context) -> Result<Node> {
        match &self.captured {
            Captured::Call { callee, .. } => Ok(callee.clone()),
            Captured::None => self.child(cx, Field::Callee),
        }
    }

    /// Arguments as captured when the wrapper was built.
    pub fn arguments(&self, cx: &Context) -> Result<Vec<Node>> {
        match &self.captured {
            Captured::Call { arguments, .. } => Ok(arguments.to_vec()),
            Captured::None => self.children(cx, Field::Arguments),
        }
    }

    pub fn type_arguments(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::TypeArguments)
    }

    pub fn is_optional(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::Optional)
    }

    pub fn has_trailing_comma(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::TrailingComma)
    }

    /// Block passed after the closing parenthesis, `foo() { ... }`.
    pub fn trailing_block(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::TrailingBlock)
    }

    pub fn set_trailing_block(&self, cx: &Context, block: Option<&Node>) -> Result<()> {
        self.set_child(cx, Field::TrailingBlock, block)
    }

    pub fn is_trailing_block_in_new_line(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::TrailingBlockNewLine)
    }

    pub fn set_trailing_block_in_new_line(&self, cx: &Context, new_line: bool) -> Result<()> {
        self.set_flag(cx, Field::TrailingBlockNewLine, new_line)
    }
}

impl FunctionExpression {
    pub fn function(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Function)
    }
}

impl ArrowFunctionExpression {
    pub fn function(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Function)
    }
}

impl AssignmentExpression {
    pub fn left(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Left)
    }

    pub fn right(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Right)
    }

    pub fn operator(&self, cx: &Context) -> Result<TokenType> {
        self.int_as(cx, Field::Operator, TokenType::from_raw)
    }

    /// The operator as stored by the engine, including tokens [`TokenType`] does not name.
    pub fn operator_raw(&self, cx: &Context) -> Result<i32> {
        self.int(cx, Field::Operator)
    }
}

impl EtsNewClassInstanceExpression {
    pub fn type_ref(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::TypeRef)
    }

    pub fn arguments(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Arguments)
    }
}

impl ArrayExpression {
    pub fn elements(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Elements)
    }
}

impl BlockExpression {
    pub fn statements(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Statements)
    }
}

impl MemberExpression {
    pub fn object(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Object)
    }

    pub fn property(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Property)
    }

    pub fn member_kind(&self, cx: &Context) -> Result<MemberExpressionKind> {
        self.int_as(cx, Field::MemberKind, MemberExpressionKind::from_raw)
    }

    pub fn member_kind_raw(&self, cx: &Context) -> Result<i32> {
        self.int(cx, Field::MemberKind)
    }

    pub fn is_computed(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::Computed)
    }

    pub fn is_optional(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::Optional)
    }
}

impl ConditionalExpression {
    pub fn test(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Test)
    }

    pub fn consequent(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Consequent)
    }

    pub fn alternate(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Alternate)
    }
}

impl TsAsExpression {
    pub fn expr(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Expression)
    }

    pub fn type_annotation(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::TypeAnnotation)
    }

    pub fn is_const(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::IsConst)
    }
}

impl ObjectExpression {
    pub fn properties(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Properties)
    }

    pub fn has_trailing_comma(&self, cx: &Context) -> Result<bool> {
        self.flag(cx, Field::TrailingComma)
    }
}

impl Property {
    pub fn key(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Key)
    }

    pub fn value(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Value)
    }
}

impl BinaryExpression {
    pub fn left(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Left)
    }

    pub fn right(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Right)
    }

    pub fn operator(&self, cx: &Context) -> Result<TokenType> {
        self.int_as(cx, Field::Operator, TokenType::from_raw)
    }

    pub fn operator_raw(&self, cx: &Context) -> Result<i32> {
        self.int(cx, Field::Operator)
    }
}

impl EtsImportDeclaration {
    /// The module specifier string literal.
    pub fn source(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Source)
    }

    pub fn specifiers(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Specifiers)
    }

    /// Raw import kind: 0 for a value import, 1 for `import type`.
    pub fn import_kind(&self, cx: &Context) -> Result<i32> {
        self.int(cx, Field::ImportKind)
    }
}

impl ImportSpecifier {
    pub fn imported(&self, cx: &Context) -> Result<Node> {
        self.child(cx, Field::Imported)
    }

    pub fn local(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Local)
    }
}
