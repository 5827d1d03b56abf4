//! Tests for the generic rewriter.
use std::cell::RefCell;
use std::rc::Rc;

use ark_native::schema::schema;
use ark_native::{Field, MemoryEngine, NativeArg, NativeEngine, Shape};
use ark_peers::nodes::{
    BinaryExpression, BlockStatement, CallExpression, EtsImportDeclaration, EtsModule,
    ExpressionStatement, FunctionDeclaration, Identifier, MemberExpression, ScriptFunction,
    VariableDeclaration,
};
use ark_peers::{
    AstNodeType, Category, ClassDefinitionParts, Context, ContextOptions, Error,
    MemberExpressionKind, MethodDefinitionKind, Modifiers, Node, PRECEDENCE, Result,
    ScriptFunctionParts, TokenType, VariableDeclarationKind, VisitStats, same_node,
    visit_each_child, visit_each_child_with_stats,
};

fn setup() -> (Rc<MemoryEngine>, Context) {
    let engine = Rc::new(MemoryEngine::new());
    let cx = Context::create(engine.clone(), ContextOptions::new("main.ets", ""))
        .expect("context should be created");
    (engine, cx)
}

fn identifier(cx: &Context, name: &str) -> Node {
    cx.factory()
        .create_identifier(name)
        .expect("identifier")
        .into_node()
}

/// Rewrite every descendant of `node` with an identity transform.
fn identity(cx: &Context, node: &Node) -> Result<Node> {
    visit_each_child(cx, node, &mut |child: &Node| identity(cx, child))
}

/// Replace every identifier named `from` with a fresh identifier named `to`.
fn rename(cx: &Context, node: &Node, from: &str, to: &str) -> Result<Node> {
    if node.is(AstNodeType::Identifier) {
        let id = Identifier::from_node(node.clone())?;
        if id.name(cx)? == from {
            return Ok(cx.factory().create_identifier(to)?.into_node());
        }
    }
    visit_each_child(cx, node, &mut |child: &Node| rename(cx, child, from, to))
}

/// The program used by most tests:
///
/// ```text
/// function main() { f(a, b) {}; return a + b; }
/// class Widget { render() {} }
/// let v = 1;
/// import { x } from "lib";
/// ```
struct Program {
    module: EtsModule,
    call: CallExpression,
    trailing_block: Node,
    type_arguments: Node,
    class_decl: Node,
}

fn build_program(cx: &Context) -> Program {
    let factory = cx.factory();

    let f = identifier(cx, "f");
    let a = identifier(cx, "a");
    let b = identifier(cx, "b");
    let type_name = identifier(cx, "T");
    let type_ref = factory
        .create_ets_type_reference(&type_name)
        .unwrap()
        .into_node();
    let type_arguments = factory
        .create_ts_type_parameter_instantiation(&[type_ref])
        .unwrap()
        .into_node();
    let trailing_block = factory.create_block_statement(&[]).unwrap().into_node();
    let call = factory
        .create_call_expression(
            &f,
            &[a, b],
            Some(&type_arguments),
            false,
            false,
            Some(&trailing_block),
        )
        .unwrap();
    let call_stmt = factory
        .create_expression_statement(call.as_node())
        .unwrap()
        .into_node();

    let sum = factory
        .create_binary_expression(&identifier(cx, "a"), &identifier(cx, "b"), TokenType::Plus)
        .unwrap()
        .into_node();
    let ret = factory
        .create_return_statement(Some(&sum))
        .unwrap()
        .into_node();
    let body = factory
        .create_block_statement(&[call_stmt, ret])
        .unwrap()
        .into_node();
    let function = factory
        .create_script_function(ScriptFunctionParts {
            body: Some(body),
            ..ScriptFunctionParts::default()
        })
        .unwrap();
    function.set_ident(cx, Some(&identifier(cx, "main"))).unwrap();
    let function_decl = factory
        .create_function_declaration(function.as_node(), &[], false)
        .unwrap()
        .into_node();

    let render_body = factory.create_block_statement(&[]).unwrap().into_node();
    let render = factory
        .create_script_function(ScriptFunctionParts {
            body: Some(render_body),
            ..ScriptFunctionParts::default()
        })
        .unwrap()
        .into_node();
    let render_expr = factory
        .create_function_expression(&render)
        .unwrap()
        .into_node();
    let method = factory
        .create_method_definition(
            MethodDefinitionKind::Method,
            &identifier(cx, "render"),
            &render_expr,
            Modifiers::PUBLIC,
            false,
        )
        .unwrap()
        .into_node();
    let definition = factory
        .create_class_definition(ClassDefinitionParts {
            ident: Some(identifier(cx, "Widget")),
            members: vec![method],
            ..ClassDefinitionParts::default()
        })
        .unwrap()
        .into_node();
    let class_decl = factory
        .create_class_declaration(&definition)
        .unwrap()
        .into_node();

    let one = factory.create_number_literal(1.0).unwrap().into_node();
    let declarator = factory
        .create_variable_declarator(VariableDeclarationKind::Let, &identifier(cx, "v"), Some(&one))
        .unwrap()
        .into_node();
    let var_decl = factory
        .create_variable_declaration(VariableDeclarationKind::Let, &[declarator], &[])
        .unwrap()
        .into_node();

    let import = import_declaration(cx, "x");

    let module = cx.program().unwrap();
    module
        .set_statements(cx, &[function_decl, class_decl.clone(), var_decl, import])
        .unwrap();
    module.set_all_parents(cx).unwrap();

    Program {
        module,
        call,
        trailing_block,
        type_arguments,
        class_decl,
    }
}

fn import_declaration(cx: &Context, name: &str) -> Node {
    let factory = cx.factory();
    let source = factory.create_string_literal("lib").unwrap().into_node();
    let specifier = factory
        .create_import_specifier(&identifier(cx, name), None)
        .unwrap()
        .into_node();
    factory
        .create_ets_import_declaration(&source, &[specifier], 0)
        .unwrap()
        .into_node()
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn identity_transform_returns_the_root() {
    let (engine, cx) = setup();
    let program = build_program(&cx);
    let constructions = engine.stats().constructions();

    let result = identity(&cx, program.module.as_node()).unwrap();

    assert!(same_node(&result, program.module.as_node()));
    assert_eq!(engine.stats().constructions(), constructions);
}

#[test]
fn identity_transform_preserves_every_level() {
    let (engine, cx) = setup();
    let program = build_program(&cx);
    let constructions = engine.stats().constructions();
    let pairs: RefCell<Vec<(Node, Node)>> = RefCell::new(Vec::new());

    fn walk(cx: &Context, node: &Node, pairs: &RefCell<Vec<(Node, Node)>>) -> Result<Node> {
        let result = visit_each_child(cx, node, &mut |child: &Node| walk(cx, child, pairs))?;
        pairs.borrow_mut().push((node.clone(), result.clone()));
        Ok(result)
    }
    walk(&cx, program.module.as_node(), &pairs).unwrap();

    let pairs = pairs.into_inner();
    assert!(pairs.len() > 20);
    for (before, after) in &pairs {
        assert!(same_node(before, after), "{before:?} was rebuilt");
    }
    let kinds: Vec<_> = pairs.iter().filter_map(|(node, _)| node.ast_type()).collect();
    for kind in [
        AstNodeType::EtsModule,
        AstNodeType::FunctionDeclaration,
        AstNodeType::ScriptFunction,
        AstNodeType::BlockStatement,
        AstNodeType::ExpressionStatement,
        AstNodeType::CallExpression,
        AstNodeType::ClassDefinition,
        AstNodeType::MethodDefinition,
        AstNodeType::VariableDeclarator,
    ] {
        assert!(kinds.contains(&kind), "{kind:?} was not visited");
    }
    assert_eq!(engine.stats().constructions(), constructions);
}

#[test]
fn transform_is_not_applied_to_the_node_itself() {
    let (_engine, cx) = setup();
    let x = identifier(&cx, "x");
    let stmt = cx.factory().create_expression_statement(&x).unwrap();
    let mut seen = Vec::new();

    let result = visit_each_child(&cx, stmt.as_node(), &mut |child: &Node| {
        seen.push(child.clone());
        Ok(child.clone())
    })
    .unwrap();

    assert!(same_node(&result, stmt.as_node()));
    assert_eq!(seen.len(), 1);
    assert!(same_node(&seen[0], &x));
}

// =============================================================================
// Structural sharing
// =============================================================================

#[test]
fn replacing_one_argument_keeps_its_siblings() {
    let (_engine, cx) = setup();
    let program = build_program(&cx);
    let call = program.call;
    let callee = call.callee(&cx).unwrap();
    let arguments = call.arguments(&cx).unwrap();
    let replacement = identifier(&cx, "b2");

    let result = visit_each_child(&cx, call.as_node(), &mut |child: &Node| {
        if same_node(child, &arguments[1]) {
            Ok(replacement.clone())
        } else {
            Ok(child.clone())
        }
    })
    .unwrap();

    let rebuilt = CallExpression::from_node(result).unwrap();
    assert_ne!(rebuilt, call);
    assert!(same_node(&rebuilt.callee(&cx).unwrap(), &callee));
    let rebuilt_arguments = rebuilt.arguments(&cx).unwrap();
    assert!(same_node(&rebuilt_arguments[0], &arguments[0]));
    assert!(same_node(&rebuilt_arguments[1], &replacement));
    assert!(same_node(
        &rebuilt.trailing_block(&cx).unwrap().unwrap(),
        &program.trailing_block
    ));
    assert!(same_node(
        &rebuilt.type_arguments(&cx).unwrap().unwrap(),
        &program.type_arguments
    ));

    // The original call is untouched.
    assert!(same_node(&call.arguments(&cx).unwrap()[1], &arguments[1]));
}

#[test]
fn deep_rewrite_rebuilds_only_the_changed_spine() {
    let (_engine, cx) = setup();
    let program = build_program(&cx);
    let before = program.module.statements(&cx).unwrap();

    let result = rename(&cx, program.module.as_node(), "b", "b2").unwrap();

    assert!(!same_node(&result, program.module.as_node()));
    let module = EtsModule::from_node(result).unwrap();
    let after = module.statements(&cx).unwrap();
    assert_eq!(after.len(), before.len());
    assert!(!same_node(&after[0], &before[0]));
    assert!(same_node(&after[1], &program.class_decl));
    assert!(same_node(&after[2], &before[2]));
    assert!(same_node(&after[3], &before[3]));

    let decl = FunctionDeclaration::from_node(after[0].clone()).unwrap();
    let function = ScriptFunction::from_node(decl.function(&cx).unwrap()).unwrap();
    assert_eq!(
        Identifier::from_node(function.ident(&cx).unwrap().unwrap())
            .unwrap()
            .name(&cx)
            .unwrap(),
        "main"
    );
    let body = BlockStatement::from_node(function.body(&cx).unwrap().unwrap()).unwrap();
    let stmt = ExpressionStatement::from_node(body.statements(&cx).unwrap()[0].clone()).unwrap();
    let call = CallExpression::from_node(stmt.expression(&cx).unwrap()).unwrap();
    let second = Identifier::from_node(call.arguments(&cx).unwrap()[1].clone()).unwrap();
    assert_eq!(second.name(&cx).unwrap(), "b2");
    assert!(same_node(
        &call.trailing_block(&cx).unwrap().unwrap(),
        &program.trailing_block
    ));
}

#[test]
fn transform_errors_propagate() {
    let (_engine, cx) = setup();
    let program = build_program(&cx);

    let result = visit_each_child(&cx, program.call.as_node(), &mut |_: &Node| {
        Err(Error::ContextDestroyed)
    });

    assert!(matches!(result, Err(Error::ContextDestroyed)));
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn precedence_order_is_fixed() {
    assert_eq!(
        PRECEDENCE,
        [
            Category::ModuleRoot,
            Category::Declaration,
            Category::Definition,
            Category::Statement,
            Category::OuterExpression,
            Category::InnerExpression,
            Category::TrivialExpression,
            Category::Literal,
        ]
    );
}

#[test]
fn module_root_wins_over_statement() {
    let (_engine, cx) = setup();
    let program = build_program(&cx);
    assert!(Category::ModuleRoot.matches(AstNodeType::EtsModule));
    assert!(Category::Statement.matches(AstNodeType::EtsModule));

    let stats = VisitStats::new();
    let result = visit_each_child_with_stats(
        &cx,
        program.module.as_node(),
        &mut |child: &Node| Ok(child.clone()),
        &stats,
    )
    .unwrap();

    assert!(same_node(&result, program.module.as_node()));
    assert_eq!(stats.hits(Category::ModuleRoot), 1);
    assert_eq!(stats.hits(Category::Statement), 0);
    assert_eq!(stats.total(), 1);
}

#[test]
fn only_the_module_matches_two_categories() {
    for &kind in AstNodeType::ALL {
        let matching = PRECEDENCE
            .iter()
            .filter(|category| category.matches(kind))
            .count();
        if kind == AstNodeType::EtsModule {
            assert_eq!(matching, 2);
        } else {
            assert!(matching <= 1, "{kind:?} matches {matching} categories");
        }
    }
}

#[test]
fn leaves_fall_back_unchanged() {
    let (_engine, cx) = setup();
    let stats = VisitStats::new();
    let leaves = [
        identifier(&cx, "x"),
        cx.factory().create_string_literal("s").unwrap().into_node(),
        cx.factory().create_null_literal().unwrap().into_node(),
    ];

    for leaf in &leaves {
        let result = visit_each_child_with_stats(
            &cx,
            leaf,
            &mut |_: &Node| panic!("leaves have no children"),
            &stats,
        )
        .unwrap();
        assert!(same_node(&result, leaf));
    }
    assert_eq!(stats.fallbacks(), leaves.len());
}

#[test]
fn unsupported_nodes_fall_back_unchanged() {
    let (engine, cx) = setup();
    let raw = engine.create_raw_node(cx.peer().unwrap(), 4_242);
    let node = cx.materialize(raw).unwrap();
    let stats = VisitStats::new();
    let mut calls = 0;

    let result = visit_each_child_with_stats(
        &cx,
        &node,
        &mut |child: &Node| {
            calls += 1;
            Ok(child.clone())
        },
        &stats,
    )
    .unwrap();

    assert!(same_node(&result, &node));
    assert_eq!(calls, 0);
    assert_eq!(stats.fallbacks(), 1);
}

#[test]
fn import_specifiers_are_visited_but_replacements_are_dropped() {
    let (engine, cx) = setup();
    let import = import_declaration(&cx, "x");
    let specifiers = EtsImportDeclaration::from_node(import.clone())
        .unwrap()
        .specifiers(&cx)
        .unwrap();
    let stats = VisitStats::new();
    let mut seen = Vec::new();
    let constructions = engine.stats().constructions();

    let result = visit_each_child_with_stats(
        &cx,
        &import,
        &mut |child: &Node| {
            seen.push(child.clone());
            Ok(cx.factory().create_null_literal()?.into_node())
        },
        &stats,
    )
    .unwrap();

    assert!(same_node(&result, &import));
    assert_eq!(seen.len(), 1);
    assert!(same_node(&seen[0], &specifiers[0]));
    assert_eq!(stats.fallbacks(), 1);
    // The transform built a replacement; the declaration itself was not rebuilt.
    assert_eq!(engine.stats().constructions(), constructions + 1);
    let kept = EtsImportDeclaration::from_node(result)
        .unwrap()
        .specifiers(&cx)
        .unwrap();
    assert!(same_node(&kept[0], &specifiers[0]));
}

/// Build a node of `kind` whose required children are identifiers and whose
/// other fields hold defaults.
// =============================================================================
// Engine values the typed enums do not name
// =============================================================================

/// `a <op 40> b`, an operator token with no `TokenType` variant.
fn unnamed_operator(engine: &MemoryEngine, cx: &Context) -> BinaryExpression {
    let a = identifier(cx, "a");
    let b = identifier(cx, "b");
    let expr = cx
        .factory()
        .create_binary_expression(&a, &b, TokenType::Plus)
        .unwrap();
    engine.set_int(cx.peer().unwrap(), expr.peer(), Field::Operator, 40);
    expr
}

#[test]
fn identity_keeps_operators_without_a_token_name() {
    let (engine, cx) = setup();
    let expr = unnamed_operator(&engine, &cx);
    assert!(expr.operator(&cx).is_err());

    let constructions = engine.stats().constructions();
    let result = visit_each_child(&cx, expr.as_node(), &mut |child: &Node| Ok(child.clone()))
        .unwrap();

    assert!(same_node(&result, expr.as_node()));
    assert_eq!(engine.stats().constructions(), constructions);
}

#[test]
fn rebuild_carries_unnamed_operator_through() {
    let (engine, cx) = setup();
    let expr = unnamed_operator(&engine, &cx);

    let result = rename(&cx, expr.as_node(), "a", "c").unwrap();

    assert!(!same_node(&result, expr.as_node()));
    let rebuilt = BinaryExpression::from_node(result).unwrap();
    assert_eq!(rebuilt.operator_raw(&cx).unwrap(), 40);
    assert_eq!(
        Identifier::from_node(rebuilt.left(&cx).unwrap())
            .unwrap()
            .name(&cx)
            .unwrap(),
        "c"
    );
    assert_eq!(expr.operator_raw(&cx).unwrap(), 40);
}

#[test]
fn identity_keeps_unnamed_member_and_declaration_kinds() {
    let (engine, cx) = setup();
    let context = cx.peer().unwrap();
    let factory = cx.factory();

    let member = factory
        .create_member_expression(
            &identifier(&cx, "o"),
            &identifier(&cx, "p"),
            MemberExpressionKind::PropertyAccess,
            false,
            false,
        )
        .unwrap();
    engine.set_int(context, member.peer(), Field::MemberKind, 77);

    let declarator = factory
        .create_variable_declarator(VariableDeclarationKind::Let, &identifier(&cx, "v"), None)
        .unwrap()
        .into_node();
    let declaration: VariableDeclaration = factory
        .create_variable_declaration(VariableDeclarationKind::Let, &[declarator], &[])
        .unwrap();
    engine.set_int(context, declaration.peer(), Field::DeclarationKind, 99);
    assert!(member.member_kind(&cx).is_err());
    assert!(declaration.declaration_kind(&cx).is_err());

    let module = cx.program().unwrap();
    let statement = factory.create_expression_statement(member.as_node()).unwrap();
    module
        .set_statements(&cx, &[statement.into_node(), declaration.clone().into_node()])
        .unwrap();
    let root = module.into_node();

    let constructions = engine.stats().constructions();
    assert!(same_node(&identity(&cx, &root).unwrap(), &root));
    assert_eq!(engine.stats().constructions(), constructions);

    let renamed = rename(&cx, &root, "p", "q").unwrap();
    let statements = EtsModule::from_node(renamed).unwrap().statements(&cx).unwrap();
    let rebuilt = ExpressionStatement::from_node(statements[0].clone())
        .unwrap()
        .expression(&cx)
        .unwrap();
    let rebuilt = MemberExpression::from_node(rebuilt).unwrap();
    assert!(!same_node(rebuilt.as_node(), member.as_node()));
    assert_eq!(rebuilt.member_kind_raw(&cx).unwrap(), 77);
    assert!(same_node(&statements[1], declaration.as_node()));
}

fn placeholder(engine: &MemoryEngine, cx: &Context, kind: AstNodeType) -> Node {
    let context = cx.peer().unwrap();
    let filler = identifier(cx, "p").peer();
    let args: Vec<NativeArg> = schema(kind)
        .params
        .iter()
        .map(|param| match param.shape {
            Shape::Node => NativeArg::Node(filler),
            Shape::OptNode => NativeArg::Node(ark_peers::NativePtr::NULL),
            Shape::List => NativeArg::Array(engine.pack_array(&[], 0)),
            Shape::Str => NativeArg::Str(engine.pack_string("")),
            Shape::Bool => NativeArg::Bool(false),
            Shape::Int => NativeArg::Int(0),
            Shape::Double => NativeArg::Double(0.0),
        })
        .collect();
    let peer = engine.create_node(context, kind, &args);
    cx.materialize(peer).unwrap()
}

#[test]
fn every_categorized_kind_is_handled() {
    let (engine, cx) = setup();

    for &kind in AstNodeType::ALL {
        let Some(category) = PRECEDENCE.into_iter().find(|c| c.matches(kind)) else {
            continue;
        };
        let node = placeholder(&engine, &cx, kind);
        let constructions = engine.stats().constructions();
        let stats = VisitStats::new();

        let result = visit_each_child_with_stats(
            &cx,
            &node,
            &mut |child: &Node| Ok(child.clone()),
            &stats,
        )
        .unwrap();

        assert!(same_node(&result, &node), "{kind:?} was rebuilt");
        assert_eq!(stats.hits(category), 1, "{kind:?} not handled by {category}");
        assert_eq!(stats.fallbacks(), 0, "{kind:?} fell back");
        assert_eq!(engine.stats().constructions(), constructions);
    }
}
