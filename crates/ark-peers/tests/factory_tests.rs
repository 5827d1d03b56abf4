//! Tests for node construction, no-op updates and the attach steps.
use std::rc::Rc;

use ark_native::MemoryEngine;
use ark_peers::nodes::{CallExpression, Identifier, ScriptFunction};
use ark_peers::{
    Context, ContextOptions, MethodDefinitionKind, Modifiers, Node, ScriptFunctionParts,
    VariableDeclarationKind, same_node, same_node_list,
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

fn annotation(cx: &Context, name: &str) -> Node {
    let expr = identifier(cx, name);
    cx.factory()
        .create_annotation_usage(&expr, &[])
        .expect("annotation")
        .into_node()
}

fn script_function(cx: &Context, statements: &[Node]) -> ScriptFunction {
    let body = cx
        .factory()
        .create_block_statement(statements)
        .expect("body")
        .into_node();
    cx.factory()
        .create_script_function(ScriptFunctionParts {
            body: Some(body),
            ..ScriptFunctionParts::default()
        })
        .expect("script function")
}

struct CallFixture {
    f: Node,
    a: Node,
    b: Node,
    block: Node,
    call: CallExpression,
}

fn call_fixture(cx: &Context) -> CallFixture {
    let f = identifier(cx, "f");
    let a = identifier(cx, "a");
    let b = identifier(cx, "b");
    let block = cx
        .factory()
        .create_block_statement(&[])
        .unwrap()
        .into_node();
    let call = cx
        .factory()
        .create_call_expression(&f, &[a.clone(), b.clone()], None, false, false, Some(&block))
        .unwrap();
    CallFixture {
        f,
        a,
        b,
        block,
        call,
    }
}

// =============================================================================
// Create
// =============================================================================

#[test]
fn create_stores_params_and_compared_aux() {
    let (engine, cx) = setup();
    let CallFixture { f, a, b, block, call } = call_fixture(&cx);

    assert!(same_node(&call.callee(&cx).unwrap(), &f));
    assert!(same_node_list(&call.arguments(&cx).unwrap(), &[a, b]));
    assert!(call.type_arguments(&cx).unwrap().is_none());
    assert!(same_node(&call.trailing_block(&cx).unwrap().unwrap(), &block));
    assert_eq!(engine.stats().creates(), 5);
}

#[test]
fn create_applies_annotations() {
    let (_engine, cx) = setup();
    let function = script_function(&cx, &[]);
    let entry = annotation(&cx, "Entry");

    let decl = cx
        .factory()
        .create_function_declaration(function.as_node(), &[entry.clone()], false)
        .unwrap();

    assert!(same_node_list(&decl.annotations(&cx).unwrap(), &[entry]));
    assert!(same_node(&decl.function(&cx).unwrap(), function.as_node()));
}

// =============================================================================
// No-op updates
// =============================================================================

#[test]
fn unchanged_update_returns_the_original() {
    let (engine, cx) = setup();
    let CallFixture { f, a, b, block, call } = call_fixture(&cx);
    let constructions = engine.stats().constructions();

    let same = cx
        .factory()
        .update_call_expression(&call, &f, &[a, b], None, false, false, Some(&block))
        .unwrap();

    assert_eq!(same, call);
    assert_eq!(engine.stats().constructions(), constructions);
}

#[test]
fn unchanged_scalar_updates_return_the_original() {
    let (engine, cx) = setup();
    let factory = cx.factory();
    let id = factory.create_identifier("x").unwrap();
    let nan = factory.create_number_literal(f64::NAN).unwrap();
    let flag = factory.create_boolean_literal(true).unwrap();
    let constructions = engine.stats().constructions();

    assert_eq!(factory.update_identifier(&id, "x").unwrap(), id);
    assert_eq!(factory.update_number_literal(&nan, f64::NAN).unwrap(), nan);
    assert_eq!(factory.update_boolean_literal(&flag, true).unwrap(), flag);
    assert_eq!(engine.stats().constructions(), constructions);
}

#[test]
fn changed_scalar_rebuilds() {
    let (engine, cx) = setup();
    let factory = cx.factory();
    let id = factory.create_identifier("x").unwrap();

    let renamed = factory.update_identifier(&id, "y").unwrap();

    assert_ne!(renamed, id);
    assert_eq!(renamed.name(&cx).unwrap(), "y");
    assert_eq!(id.name(&cx).unwrap(), "x");
    assert_eq!(engine.stats().updates(), 1);
}

#[test]
fn changed_child_rebuilds_and_leaves_the_original_alone() {
    let (engine, cx) = setup();
    let CallFixture { f, a, b, block, call } = call_fixture(&cx);
    let c = identifier(&cx, "c");

    let updated = cx
        .factory()
        .update_call_expression(&call, &f, &[a.clone(), c.clone()], None, false, false, Some(&block))
        .unwrap();

    assert_ne!(updated, call);
    assert_ne!(updated.peer(), call.peer());
    assert!(same_node_list(&updated.arguments(&cx).unwrap(), &[a.clone(), c]));
    assert!(same_node_list(&call.arguments(&cx).unwrap(), &[a, b]));
    assert_eq!(engine.stats().updates(), 1);
}

#[test]
fn reordered_list_rebuilds() {
    let (engine, cx) = setup();
    let CallFixture { f, a, b, block, call } = call_fixture(&cx);

    let updated = cx
        .factory()
        .update_call_expression(&call, &f, &[b, a], None, false, false, Some(&block))
        .unwrap();

    assert_ne!(updated, call);
    assert_eq!(engine.stats().updates(), 1);
}

#[test]
fn changed_annotations_alone_rebuild() {
    let (engine, cx) = setup();
    let function = script_function(&cx, &[]);
    let first = annotation(&cx, "First");
    let second = annotation(&cx, "Second");
    let decl = cx
        .factory()
        .create_function_declaration(function.as_node(), &[first], false)
        .unwrap();

    let updated = cx
        .factory()
        .update_function_declaration(&decl, function.as_node(), &[second.clone()], false)
        .unwrap();

    assert_ne!(updated, decl);
    assert!(same_node_list(&updated.annotations(&cx).unwrap(), &[second]));
    assert_eq!(engine.stats().updates(), 1);
}

// =============================================================================
// Attach steps
// =============================================================================

#[test]
fn function_declaration_keeps_annotations_and_modifiers() {
    let (_engine, cx) = setup();
    let function = script_function(&cx, &[]);
    let entry = annotation(&cx, "Entry");
    let decl = cx
        .factory()
        .create_function_declaration(function.as_node(), &[entry.clone()], false)
        .unwrap();
    decl.set_modifiers(&cx, Modifiers::EXPORT | Modifiers::DECLARE)
        .unwrap();

    let replacement = script_function(&cx, &[]);
    let updated = cx
        .factory()
        .update_function_declaration(&decl, replacement.as_node(), &[entry.clone()], false)
        .unwrap();

    assert_ne!(updated, decl);
    assert!(same_node(&updated.function(&cx).unwrap(), replacement.as_node()));
    assert!(same_node_list(&updated.annotations(&cx).unwrap(), &[entry]));
    assert_eq!(
        updated.modifiers(&cx).unwrap(),
        Modifiers::EXPORT | Modifiers::DECLARE
    );
}

#[test]
fn method_definition_keeps_overloads_and_annotations() {
    let (_engine, cx) = setup();
    let factory = cx.factory();
    let key = identifier(&cx, "run");
    let value = factory
        .create_function_expression(script_function(&cx, &[]).as_node())
        .unwrap()
        .into_node();
    let modifiers = Modifiers::PUBLIC | Modifiers::STATIC;
    let method = factory
        .create_method_definition(MethodDefinitionKind::Method, &key, &value, modifiers, false)
        .unwrap();
    let overloads = vec![identifier(&cx, "o1"), identifier(&cx, "o2")];
    let annotations = vec![annotation(&cx, "Memo")];
    method.set_overloads(&cx, &overloads).unwrap();
    method.set_annotations(&cx, &annotations).unwrap();

    let renamed = identifier(&cx, "start");
    let updated = factory
        .update_method_definition(
            &method,
            MethodDefinitionKind::Method,
            &renamed,
            &value,
            modifiers,
            false,
        )
        .unwrap();

    assert_ne!(updated, method);
    assert!(same_node(&updated.key(&cx).unwrap(), &renamed));
    assert!(same_node_list(&updated.overloads(&cx).unwrap(), &overloads));
    assert!(same_node_list(&updated.annotations(&cx).unwrap(), &annotations));
    assert_eq!(updated.modifiers(&cx).unwrap(), modifiers);
    assert_eq!(
        updated.method_kind(&cx).unwrap(),
        MethodDefinitionKind::Method
    );
}

#[test]
fn arrow_function_annotations_are_copied() {
    let (_engine, cx) = setup();
    let factory = cx.factory();
    let arrow = factory
        .create_arrow_function_expression(script_function(&cx, &[]).as_node())
        .unwrap();
    let annotations = vec![annotation(&cx, "Builder")];
    arrow.set_annotations(&cx, &annotations).unwrap();

    let replacement = script_function(&cx, &[]);
    let updated = factory
        .update_arrow_function_expression(&arrow, replacement.as_node())
        .unwrap();

    assert_ne!(updated, arrow);
    assert!(same_node(&updated.function(&cx).unwrap(), replacement.as_node()));
    assert!(same_node_list(&updated.annotations(&cx).unwrap(), &annotations));
}

#[test]
fn call_trailing_block_is_reattached() {
    let (_engine, cx) = setup();
    let CallFixture { f, a, block, call, .. } = call_fixture(&cx);
    call.set_trailing_block_in_new_line(&cx, true).unwrap();

    let updated = cx
        .factory()
        .update_call_expression(&call, &f, &[a], None, false, false, Some(&block))
        .unwrap();

    assert_ne!(updated, call);
    assert!(same_node(&updated.trailing_block(&cx).unwrap().unwrap(), &block));
    assert!(updated.is_trailing_block_in_new_line(&cx).unwrap());
}

#[test]
fn changed_trailing_block_alone_rebuilds() {
    let (engine, cx) = setup();
    let CallFixture { f, a, b, call, .. } = call_fixture(&cx);
    let other = cx
        .factory()
        .create_block_statement(&[])
        .unwrap()
        .into_node();

    let updated = cx
        .factory()
        .update_call_expression(&call, &f, &[a, b], None, false, false, Some(&other))
        .unwrap();

    assert_ne!(updated, call);
    assert!(same_node(&updated.trailing_block(&cx).unwrap().unwrap(), &other));
    assert_eq!(engine.stats().updates(), 1);

    let dropped = cx
        .factory()
        .update_call_expression(
            &updated,
            &updated.callee(&cx).unwrap(),
            &updated.arguments(&cx).unwrap(),
            None,
            false,
            false,
            None,
        )
        .unwrap();
    assert!(dropped.trailing_block(&cx).unwrap().is_none());
}

#[test]
fn script_function_ident_is_copied() {
    let (_engine, cx) = setup();
    let function = script_function(&cx, &[]);
    let name = identifier(&cx, "main");
    function.set_ident(&cx, Some(&name)).unwrap();

    let stmt = cx
        .factory()
        .create_return_statement(None)
        .unwrap()
        .into_node();
    let body = cx
        .factory()
        .create_block_statement(&[stmt])
        .unwrap()
        .into_node();
    let updated = cx
        .factory()
        .update_script_function(
            &function,
            ScriptFunctionParts {
                body: Some(body),
                ..ScriptFunctionParts::default()
            },
        )
        .unwrap();

    assert_ne!(updated, function);
    assert!(same_node(&updated.ident(&cx).unwrap().unwrap(), &name));
}

#[test]
fn parameter_optional_marker_is_copied() {
    let (_engine, cx) = setup();
    let factory = cx.factory();
    let ident = identifier(&cx, "p");
    let param = factory
        .create_ets_parameter_expression(&ident, None, &[])
        .unwrap();
    param.set_optional(&cx, true).unwrap();

    let init = factory.create_number_literal(1.0).unwrap().into_node();
    let updated = factory
        .update_ets_parameter_expression(&param, &ident, Some(&init), &[])
        .unwrap();

    assert_ne!(updated, param);
    assert!(updated.is_optional(&cx).unwrap());
    assert!(same_node(&updated.initializer(&cx).unwrap().unwrap(), &init));
}

#[test]
fn declaration_modifiers_are_copied() {
    let (_engine, cx) = setup();
    let factory = cx.factory();
    let id = identifier(&cx, "v");
    let declarator = factory
        .create_variable_declarator(VariableDeclarationKind::Let, &id, None)
        .unwrap()
        .into_node();
    let decl = factory
        .create_variable_declaration(VariableDeclarationKind::Let, &[declarator], &[])
        .unwrap();
    decl.set_modifiers(&cx, Modifiers::EXPORT).unwrap();

    let updated = factory
        .update_variable_declaration(&decl, VariableDeclarationKind::Const, &[], &[])
        .unwrap();

    assert_ne!(updated, decl);
    assert_eq!(updated.modifiers(&cx).unwrap(), Modifiers::EXPORT);
    assert_eq!(
        updated.declaration_kind(&cx).unwrap(),
        VariableDeclarationKind::Const
    );
}

#[test]
fn update_keeps_the_original_parent() {
    let (_engine, cx) = setup();
    let x = identifier(&cx, "x");
    let stmt = cx.factory().create_expression_statement(&x).unwrap();
    stmt.set_all_parents(&cx).unwrap();
    let id = Identifier::from_node(x).unwrap();

    let renamed = cx.factory().update_identifier(&id, "y").unwrap();

    let parent = renamed.parent(&cx).unwrap().unwrap();
    assert!(same_node(&parent, stmt.as_node()));
}
