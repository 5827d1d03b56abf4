//! Generic tree rewriter.
//!
//! [`visit_each_child`] applies a transform to the structural children of one
//! node and rebuilds the node through the factory. The transform is never
//! applied to the node itself. Because factory updates return the original
//! node when nothing changed, an identity transform returns the input by
//! identity at every level.
//!
//! Dispatch goes through a fixed precedence table of categories. Category
//! predicates follow the engine class hierarchy, so a kind may satisfy more
//! than one (`ETSModule` is also a block statement); the first matching
//! category in [`PRECEDENCE`] handles it. Auxiliary metadata (annotations,
//! overloads, trailing blocks) is carried over, not visited. Enum-valued
//! scalars are read and passed back as raw engine values, so operators and
//! kinds the typed enums do not name survive a rewrite.

use std::cell::Cell;

use ark_native::AstNodeType;
use tracing::trace;

use crate::context::Context;
use crate::error::Result;
use crate::factory::{ClassDefinitionParts, ScriptFunctionParts};
use crate::node::Node;
use crate::nodes::*;

/// Transform applied to each child.
pub type Transform<'t> = dyn FnMut(&Node) -> Result<Node> + 't;

/// A group of node kinds handled together by the rewriter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    ModuleRoot,
    Declaration,
    Definition,
    Statement,
    OuterExpression,
    InnerExpression,
    TrivialExpression,
    Literal,
}

/// Order in which categories are tried. The first match handles the node.
pub const PRECEDENCE: [Category; 8] = [
    Category::ModuleRoot,
    Category::Declaration,
    Category::Definition,
    Category::Statement,
    Category::OuterExpression,
    Category::InnerExpression,
    Category::TrivialExpression,
    Category::Literal,
];

impl Category {
    /// Whether nodes of `kind` belong to this category.
    pub const fn matches(self, kind: AstNodeType) -> bool {
        use AstNodeType as K;

        match self {
            Category::ModuleRoot => matches!(kind, K::EtsModule),
            Category::Declaration => {
                matches!(
                    kind,
                    K::FunctionDeclaration | K::TsInterfaceDeclaration | K::VariableDeclaration
                ) || kind.is_class_declaration()
            }
            Category::Definition => matches!(
                kind,
                K::ClassDefinition
                    | K::MethodDefinition
                    | K::TsInterfaceBody
                    | K::VariableDeclarator
                    | K::ScriptFunction
                    | K::ClassProperty
                    | K::EtsParameterExpression
            ),
            Category::Statement => {
                kind.is_block_statement()
                    || matches!(
                        kind,
                        K::ExpressionStatement
                            | K::IfStatement
                            | K::ReturnStatement
                            | K::TryStatement
                            | K::CatchClause
                    )
            }
            Category::OuterExpression => matches!(
                kind,
                K::CallExpression
                    | K::FunctionExpression
                    | K::ArrowFunctionExpression
                    | K::AssignmentExpression
                    | K::EtsNewClassInstanceExpression
                    | K::ArrayExpression
                    | K::BlockExpression
            ),
            Category::InnerExpression => matches!(
                kind,
                K::MemberExpression
                    | K::ConditionalExpression
                    | K::TsAsExpression
                    | K::ObjectExpression
                    | K::Property
            ),
            Category::TrivialExpression => matches!(kind, K::BinaryExpression),
            Category::Literal => matches!(kind, K::TemplateLiteral),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::ModuleRoot => "module-root",
            Category::Declaration => "declaration",
            Category::Definition => "definition",
            Category::Statement => "statement",
            Category::OuterExpression => "outer-expression",
            Category::InnerExpression => "inner-expression",
            Category::TrivialExpression => "trivial-expression",
            Category::Literal => "literal",
        }
    }

    fn visit(
        self,
        cx: &Context,
        node: &Node,
        kind: AstNodeType,
        transform: &mut Transform<'_>,
    ) -> Result<Visit> {
        match self {
            Category::ModuleRoot => visit_module_root(cx, node, kind, transform),
            Category::Declaration => visit_declaration(cx, node, kind, transform),
            Category::Definition => visit_definition(cx, node, kind, transform),
            Category::Statement => visit_statement(cx, node, kind, transform),
            Category::OuterExpression => visit_outer_expression(cx, node, kind, transform),
            Category::InnerExpression => visit_inner_expression(cx, node, kind, transform),
            Category::TrivialExpression => visit_trivial_expression(cx, node, kind, transform),
            Category::Literal => visit_literal(cx, node, kind, transform),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one category handler.
#[derive(Debug)]
pub enum Visit {
    Handled(Node),
    NotHandled,
}

/// Per-category counts of handled nodes.
#[derive(Debug, Default)]
pub struct VisitStats {
    hits: [Cell<usize>; PRECEDENCE.len()],
    fallbacks: Cell<usize>,
}

impl VisitStats {
    pub fn new() -> VisitStats {
        VisitStats::default()
    }

    pub fn hits(&self, category: Category) -> usize {
        self.hits[category as usize].get()
    }

    /// Nodes no category handled.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks.get()
    }

    pub fn total(&self) -> usize {
        self.hits.iter().map(Cell::get).sum::<usize>() + self.fallbacks.get()
    }

    fn record(&self, category: Category) {
        let counter = &self.hits[category as usize];
        counter.set(counter.get() + 1);
    }
}

/// Apply `transform` to every structural child of `node` and rebuild it.
pub fn visit_each_child(
    cx: &Context,
    node: &Node,
    transform: &mut Transform<'_>,
) -> Result<Node> {
    visit_each_child_with_stats(cx, node, transform, &VisitStats::new())
}

/// [`visit_each_child`], counting which category handled `node`.
pub fn visit_each_child_with_stats(
    cx: &Context,
    node: &Node,
    transform: &mut Transform<'_>,
    stats: &VisitStats,
) -> Result<Node> {
    if let Some(kind) = node.ast_type() {
        for category in PRECEDENCE {
            if !category.matches(kind) {
                continue;
            }
            if let Visit::Handled(result) = category.visit(cx, node, kind, transform)? {
                stats.record(category);
                return Ok(result);
            }
        }
    }
    stats.fallbacks.set(stats.fallbacks.get() + 1);
    visit_fallback(cx, node, transform)
}

// =============================================================================
// Child helpers
// =============================================================================

fn visit_node(node: &Node, transform: &mut Transform<'_>) -> Result<Node> {
    transform(node)
}

fn visit_opt(node: Option<Node>, transform: &mut Transform<'_>) -> Result<Option<Node>> {
    node.map(|node| transform(&node)).transpose()
}

fn visit_list(nodes: &[Node], transform: &mut Transform<'_>) -> Result<Vec<Node>> {
    nodes.iter().map(|node| transform(node)).collect()
}

fn handled<T: Into<Node>>(node: T) -> Result<Visit> {
    Ok(Visit::Handled(node.into()))
}

// =============================================================================
// Category handlers
// =============================================================================

fn visit_module_root(
    cx: &Context,
    node: &Node,
    kind: AstNodeType,
    t: &mut Transform<'_>,
) -> Result<Visit> {
    match kind {
        AstNodeType::EtsModule => visit_module(cx, node, t),
        _ => Ok(Visit::NotHandled),
    }
}

fn visit_module(cx: &Context, node: &Node, t: &mut Transform<'_>) -> Result<Visit> {
    let module = EtsModule::from_node(node.clone())?;
    let statements = visit_list(&module.statements(cx)?, t)?;
    handled(cx.factory().update_ets_module(
        &module,
        &statements,
        module.ident(cx)?.as_ref(),
        module.flags(cx)?,
        &module.annotations(cx)?,
    )?)
}

fn visit_declaration(
    cx: &Context,
    node: &Node,
    kind: AstNodeType,
    t: &mut Transform<'_>,
) -> Result<Visit> {
    let factory = cx.factory();
    match kind {
        AstNodeType::FunctionDeclaration => {
            let decl = FunctionDeclaration::from_node(node.clone())?;
            let function = visit_node(&decl.function(cx)?, t)?;
            handled(factory.update_function_declaration(
                &decl,
                &function,
                &decl.annotations(cx)?,
                decl.is_anonymous(cx)?,
            )?)
        }
        AstNodeType::ClassDeclaration => {
            let decl = ClassDeclaration::from_node(node.clone())?;
            let definition = visit_node(&decl.definition(cx)?, t)?;
            handled(factory.update_class_declaration(&decl, &definition)?)
        }
        AstNodeType::EtsStructDeclaration => {
            let decl = EtsStructDeclaration::from_node(node.clone())?;
            let definition = visit_node(&decl.definition(cx)?, t)?;
            handled(factory.update_ets_struct_declaration(&decl, &definition)?)
        }
        AstNodeType::TsInterfaceDeclaration => {
            let decl = TsInterfaceDeclaration::from_node(node.clone())?;
            let extends = visit_list(&decl.extends(cx)?, t)?;
            let id = visit_node(&decl.id(cx)?, t)?;
            let type_params = visit_opt(decl.type_params(cx)?, t)?;
            let body = visit_node(&decl.body(cx)?, t)?;
            handled(factory.update_ts_interface_declaration(
                &decl,
                &extends,
                &id,
                type_params.as_ref(),
                &body,
                decl.is_static(cx)?,
                decl.is_external(cx)?,
                &decl.annotations(cx)?,
            )?)
        }
        AstNodeType::VariableDeclaration => {
            let decl = VariableDeclaration::from_node(node.clone())?;
            let declarators = visit_list(&decl.declarators(cx)?, t)?;
            handled(factory.update_variable_declaration(
                &decl,
                decl.declaration_kind_raw(cx)?,
                &declarators,
                &decl.annotations(cx)?,
            )?)
        }
        _ => Ok(Visit::NotHandled),
    }
}

fn visit_definition(
    cx: &Context,
    node: &Node,
    kind: AstNodeType,
    t: &mut Transform<'_>,
) -> Result<Visit> {
    let factory = cx.factory();
    match kind {
        AstNodeType::ClassDefinition => {
            let def = ClassDefinition::from_node(node.clone())?;
            let parts = ClassDefinitionParts {
                ident: visit_opt(def.ident(cx)?, t)?,
                type_params: visit_opt(def.type_params(cx)?, t)?,
                super_type_params: visit_opt(def.super_type_params(cx)?, t)?,
                implements: visit_list(&def.implements(cx)?, t)?,
                ctor: visit_opt(def.ctor(cx)?, t)?,
                super_class: visit_opt(def.super_class(cx)?, t)?,
                members: visit_list(&def.members(cx)?, t)?,
                class_modifiers: def.class_modifiers(cx)?,
                modifiers: def.modifiers(cx)?,
                annotations: def.annotations(cx)?,
            };
            handled(factory.update_class_definition(&def, parts)?)
        }
        AstNodeType::MethodDefinition => {
            let method = MethodDefinition::from_node(node.clone())?;
            let key = visit_node(&method.key(cx)?, t)?;
            let value = visit_node(&method.value(cx)?, t)?;
            handled(factory.update_method_definition(
                &method,
                method.method_kind_raw(cx)?,
                &key,
                &value,
                method.modifiers(cx)?,
                method.is_computed(cx)?,
            )?)
        }
        AstNodeType::TsInterfaceBody => {
            let body = TsInterfaceBody::from_node(node.clone())?;
            let members = visit_list(&body.members(cx)?, t)?;
            handled(factory.update_ts_interface_body(&body, &members)?)
        }
        AstNodeType::VariableDeclarator => {
            let declarator = VariableDeclarator::from_node(node.clone())?;
            let id = visit_node(&declarator.id(cx)?, t)?;
            let init = visit_opt(declarator.init(cx)?, t)?;
            handled(factory.update_variable_declarator(
                &declarator,
                declarator.declarator_flag_raw(cx)?,
                &id,
                init.as_ref(),
            )?)
        }
        AstNodeType::ScriptFunction => {
            let function = ScriptFunction::from_node(node.clone())?;
            let parts = ScriptFunctionParts {
                body: visit_opt(function.body(cx)?, t)?,
                type_params: visit_opt(function.type_params(cx)?, t)?,
                params: visit_list(&function.params(cx)?, t)?,
                return_type: visit_opt(function.return_type(cx)?, t)?,
                has_receiver: function.has_receiver(cx)?,
                flags: function.flags(cx)?,
                modifiers: function.modifiers(cx)?,
                annotations: function.annotations(cx)?,
            };
            handled(factory.update_script_function(&function, parts)?)
        }
        AstNodeType::ClassProperty => {
            let property = ClassProperty::from_node(node.clone())?;
            let key = visit_node(&property.key(cx)?, t)?;
            let value = visit_opt(property.value(cx)?, t)?;
            let type_annotation = visit_opt(property.type_annotation(cx)?, t)?;
            handled(factory.update_class_property(
                &property,
                &key,
                value.as_ref(),
                type_annotation.as_ref(),
                property.modifiers(cx)?,
                property.is_computed(cx)?,
                &property.annotations(cx)?,
            )?)
        }
        AstNodeType::EtsParameterExpression => {
            let param = EtsParameterExpression::from_node(node.clone())?;
            let ident = visit_node(&param.ident(cx)?, t)?;
            let initializer = visit_opt(param.initializer(cx)?, t)?;
            handled(factory.update_ets_parameter_expression(
                &param,
                &ident,
                initializer.as_ref(),
                &param.annotations(cx)?,
            )?)
        }
        _ => Ok(Visit::NotHandled),
    }
}

fn visit_statement(
    cx: &Context,
    node: &Node,
    kind: AstNodeType,
    t: &mut Transform<'_>,
) -> Result<Visit> {
    let factory = cx.factory();
    match kind {
        // A block statement in the engine, rebuilt through its own update.
        AstNodeType::EtsModule => visit_module(cx, node, t),
        AstNodeType::BlockStatement => {
            let block = BlockStatement::from_node(node.clone())?;
            let statements = visit_list(&block.statements(cx)?, t)?;
            handled(factory.update_block_statement(&block, &statements)?)
        }
        AstNodeType::ExpressionStatement => {
            let stmt = ExpressionStatement::from_node(node.clone())?;
            let expression = visit_node(&stmt.expression(cx)?, t)?;
            handled(factory.update_expression_statement(&stmt, &expression)?)
        }
        AstNodeType::IfStatement => {
            let stmt = IfStatement::from_node(node.clone())?;
            let test = visit_node(&stmt.test(cx)?, t)?;
            let consequent = visit_node(&stmt.consequent(cx)?, t)?;
            let alternate = visit_opt(stmt.alternate(cx)?, t)?;
            handled(factory.update_if_statement(&stmt, &test, &consequent, alternate.as_ref())?)
        }
        AstNodeType::ReturnStatement => {
            let stmt = ReturnStatement::from_node(node.clone())?;
            let argument = visit_opt(stmt.argument(cx)?, t)?;
            handled(factory.update_return_statement(&stmt, argument.as_ref())?)
        }
        AstNodeType::TryStatement => {
            let stmt = TryStatement::from_node(node.clone())?;
            let block = visit_node(&stmt.block(cx)?, t)?;
            let catch_clauses = visit_list(&stmt.catch_clauses(cx)?, t)?;
            let finalizer = visit_opt(stmt.finalizer(cx)?, t)?;
            handled(factory.update_try_statement(
                &stmt,
                &block,
                &catch_clauses,
                finalizer.as_ref(),
            )?)
        }
        AstNodeType::CatchClause => {
            let clause = CatchClause::from_node(node.clone())?;
            let param = visit_opt(clause.param(cx)?, t)?;
            let body = visit_node(&clause.body(cx)?, t)?;
            handled(factory.update_catch_clause(&clause, param.as_ref(), &body)?)
        }
        _ => Ok(Visit::NotHandled),
    }
}

fn visit_outer_expression(
    cx: &Context,
    node: &Node,
    kind: AstNodeType,
    t: &mut Transform<'_>,
) -> Result<Visit> {
    let factory = cx.factory();
    match kind {
        AstNodeType::CallExpression => {
            let call = CallExpression::from_node(node.clone())?;
            let callee = visit_node(&call.callee(cx)?, t)?;
            let arguments = visit_list(&call.arguments(cx)?, t)?;
            let type_arguments = visit_opt(call.type_arguments(cx)?, t)?;
            handled(factory.update_call_expression(
                &call,
                &callee,
                &arguments,
                type_arguments.as_ref(),
                call.is_optional(cx)?,
                call.has_trailing_comma(cx)?,
                call.trailing_block(cx)?.as_ref(),
            )?)
        }
        AstNodeType::FunctionExpression => {
            let expr = FunctionExpression::from_node(node.clone())?;
            let function = visit_node(&expr.function(cx)?, t)?;
            handled(factory.update_function_expression(&expr, &function)?)
        }
        AstNodeType::ArrowFunctionExpression => {
            let expr = ArrowFunctionExpression::from_node(node.clone())?;
            let function = visit_node(&expr.function(cx)?, t)?;
            handled(factory.update_arrow_function_expression(&expr, &function)?)
        }
        AstNodeType::AssignmentExpression => {
            let expr = AssignmentExpression::from_node(node.clone())?;
            let left = visit_node(&expr.left(cx)?, t)?;
            let right = visit_node(&expr.right(cx)?, t)?;
            handled(factory.update_assignment_expression(
                &expr,
                &left,
                &right,
                expr.operator_raw(cx)?,
            )?)
        }
        AstNodeType::EtsNewClassInstanceExpression => {
            let expr = EtsNewClassInstanceExpression::from_node(node.clone())?;
            let type_ref = visit_node(&expr.type_ref(cx)?, t)?;
            let arguments = visit_list(&expr.arguments(cx)?, t)?;
            handled(factory.update_ets_new_class_instance_expression(&expr, &type_ref, &arguments)?)
        }
        AstNodeType::ArrayExpression => {
            let expr = ArrayExpression::from_node(node.clone())?;
            let elements = visit_list(&expr.elements(cx)?, t)?;
            handled(factory.update_array_expression(&expr, &elements)?)
        }
        AstNodeType::BlockExpression => {
            let expr = BlockExpression::from_node(node.clone())?;
            let statements = visit_list(&expr.statements(cx)?, t)?;
            handled(factory.update_block_expression(&expr, &statements)?)
        }
        _ => Ok(Visit::NotHandled),
    }
}

fn visit_inner_expression(
    cx: &Context,
    node: &Node,
    kind: AstNodeType,
    t: &mut Transform<'_>,
) -> Result<Visit> {
    let factory = cx.factory();
    match kind {
        AstNodeType::MemberExpression => {
            let expr = MemberExpression::from_node(node.clone())?;
            let object = visit_node(&expr.object(cx)?, t)?;
            let property = visit_node(&expr.property(cx)?, t)?;
            handled(factory.update_member_expression(
                &expr,
                &object,
                &property,
                expr.member_kind_raw(cx)?,
                expr.is_computed(cx)?,
                expr.is_optional(cx)?,
            )?)
        }
        AstNodeType::ConditionalExpression => {
            let expr = ConditionalExpression::from_node(node.clone())?;
            let test = visit_node(&expr.test(cx)?, t)?;
            let consequent = visit_node(&expr.consequent(cx)?, t)?;
            let alternate = visit_node(&expr.alternate(cx)?, t)?;
            handled(factory.update_conditional_expression(&expr, &test, &consequent, &alternate)?)
        }
        AstNodeType::TsAsExpression => {
            let expr = TsAsExpression::from_node(node.clone())?;
            let inner = visit_node(&expr.expr(cx)?, t)?;
            let type_annotation = visit_opt(expr.type_annotation(cx)?, t)?;
            handled(factory.update_ts_as_expression(
                &expr,
                &inner,
                type_annotation.as_ref(),
                expr.is_const(cx)?,
            )?)
        }
        AstNodeType::ObjectExpression => {
            let expr = ObjectExpression::from_node(node.clone())?;
            let properties = visit_list(&expr.properties(cx)?, t)?;
            handled(factory.update_object_expression(
                &expr,
                &properties,
                expr.has_trailing_comma(cx)?,
            )?)
        }
        AstNodeType::Property => {
            let property = Property::from_node(node.clone())?;
            let key = visit_node(&property.key(cx)?, t)?;
            let value = visit_node(&property.value(cx)?, t)?;
            handled(factory.update_property(&property, &key, &value)?)
        }
        _ => Ok(Visit::NotHandled),
    }
}

fn visit_trivial_expression(
    cx: &Context,
    node: &Node,
    kind: AstNodeType,
    t: &mut Transform<'_>,
) -> Result<Visit> {
    match kind {
        AstNodeType::BinaryExpression => {
            let expr = BinaryExpression::from_node(node.clone())?;
            let left = visit_node(&expr.left(cx)?, t)?;
            let right = visit_node(&expr.right(cx)?, t)?;
            handled(cx.factory().update_binary_expression(
                &expr,
                &left,
                &right,
                expr.operator_raw(cx)?,
            )?)
        }
        _ => Ok(Visit::NotHandled),
    }
}

fn visit_literal(
    cx: &Context,
    node: &Node,
    kind: AstNodeType,
    t: &mut Transform<'_>,
) -> Result<Visit> {
    match kind {
        AstNodeType::TemplateLiteral => {
            let literal = TemplateLiteral::from_node(node.clone())?;
            let quasis = visit_list(&literal.quasis(cx)?, t)?;
            let expressions = visit_list(&literal.expressions(cx)?, t)?;
            handled(cx.factory().update_template_literal(&literal, &quasis, &expressions)?)
        }
        _ => Ok(Visit::NotHandled),
    }
}

/// Nodes no category handles come back unchanged.
///
/// Import declarations are the exception: their specifiers still go through
/// `transform`, but the results are dropped and the declaration is returned
/// as it was. Specifier replacement therefore never takes effect here.
fn visit_fallback(cx: &Context, node: &Node, t: &mut Transform<'_>) -> Result<Node> {
    if node.is(AstNodeType::EtsImportDeclaration) {
        let import = EtsImportDeclaration::from_node(node.clone())?;
        let specifiers = import.specifiers(cx)?;
        trace!(count = specifiers.len(), "visiting import specifiers");
        visit_list(&specifiers, t)?;
    }
    Ok(node.clone())
}
