//! Tests for compilation context lifecycle and options.
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use ark_native::MemoryEngine;
use ark_peers::{Context, ContextOptions, ContextState, Error, same_node};

fn setup_with(options: ContextOptions) -> (Rc<MemoryEngine>, Context) {
    let engine = Rc::new(MemoryEngine::new());
    let cx = Context::create(engine.clone(), options).expect("context should be created");
    (engine, cx)
}

fn setup() -> (Rc<MemoryEngine>, Context) {
    setup_with(ContextOptions::new("main.ets", "let x = 1"))
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn create_registers_the_file_with_the_engine() {
    let (engine, cx) = setup();
    assert_eq!(engine.live_contexts(), 1);
    assert_eq!(
        engine.file_name(cx.peer().unwrap()).as_deref(),
        Some("main.ets")
    );
    assert_eq!(cx.state().unwrap(), ContextState::New);
    assert!(!cx.is_destroyed());
}

#[test]
fn proceed_advances_the_engine_state() {
    let (engine, cx) = setup();
    cx.proceed_to_state(ContextState::Parsed).unwrap();
    assert_eq!(cx.state().unwrap(), ContextState::Parsed);

    cx.proceed_to_state(ContextState::Checked).unwrap();
    assert_eq!(cx.state().unwrap(), ContextState::Checked);
    assert_eq!(engine.stats().proceeds(), 2);
}

#[test]
fn proceed_clears_the_cache() {
    let (_engine, cx) = setup();
    let before = cx.program().unwrap();
    let epoch = cx.epoch();

    cx.proceed_to_state(ContextState::Parsed).unwrap();

    assert!(cx.cache().is_empty());
    assert!(cx.epoch() > epoch);
    let after = cx.program().unwrap();
    assert_eq!(before.peer(), after.peer());
    assert!(!same_node(before.as_node(), after.as_node()));
}

#[test]
fn engine_error_destroys_the_context() {
    let (engine, cx) = setup();
    engine.fail_at(ContextState::Checked, "type error in main.ets");
    cx.program().unwrap();

    let err = cx.proceed_to_state(ContextState::Checked).unwrap_err();

    assert!(matches!(
        err,
        Error::Engine { state: ContextState::Checked, ref message }
            if message == "type error in main.ets"
    ));
    assert_eq!(
        err.to_string(),
        "failed to proceed to checked: type error in main.ets"
    );
    assert!(cx.is_destroyed());
    assert!(cx.cache().is_empty());
    assert_eq!(engine.live_contexts(), 0);
}

#[test]
fn destroyed_context_rejects_further_calls() {
    let (engine, cx) = setup();
    engine.fail_at(ContextState::Parsed, "syntax error");
    assert!(cx.proceed_to_state(ContextState::Parsed).is_err());

    assert!(matches!(cx.peer(), Err(Error::ContextDestroyed)));
    assert!(matches!(cx.program(), Err(Error::ContextDestroyed)));
    assert!(matches!(
        cx.proceed_to_state(ContextState::Checked),
        Err(Error::ContextDestroyed)
    ));
    assert!(matches!(
        cx.factory().create_identifier("x"),
        Err(Error::ContextDestroyed)
    ));
}

#[test]
fn forced_proceed_keeps_the_context_alive() {
    let (engine, cx) = setup();
    engine.fail_at(ContextState::Checked, "type error");
    cx.program().unwrap();

    cx.proceed_to_state_with(ContextState::Checked, true).unwrap();

    assert!(!cx.is_destroyed());
    assert_eq!(cx.state().unwrap(), ContextState::Error);
    assert!(cx.cache().is_empty());
    assert_eq!(engine.live_contexts(), 1);
    assert!(cx.program().is_ok());
}

#[test]
fn force_option_applies_to_proceed() {
    let mut options = ContextOptions::new("main.ets", "");
    options.force = true;
    let (engine, cx) = setup_with(options);
    engine.fail_at(ContextState::Bound, "unresolved import");

    cx.proceed_to_state(ContextState::Bound).unwrap();

    assert!(!cx.is_destroyed());
    assert_eq!(cx.state().unwrap(), ContextState::Error);
}

#[test]
fn destroy_is_idempotent() {
    let (engine, cx) = setup();
    cx.destroy();
    cx.destroy();
    assert!(cx.is_destroyed());
    assert_eq!(engine.live_contexts(), 0);
}

#[test]
fn dropping_the_context_destroys_it() {
    let engine = Rc::new(MemoryEngine::new());
    {
        let _cx = Context::create(engine.clone(), ContextOptions::new("main.ets", "")).unwrap();
        assert_eq!(engine.live_contexts(), 1);
    }
    assert_eq!(engine.live_contexts(), 0);
}

#[test]
fn node_requests_reach_the_engine() {
    let (engine, cx) = setup();
    let program = cx.program().unwrap();

    program.mark_for_recheck(&cx).unwrap();

    assert_eq!(
        engine.recheck_requests(cx.peer().unwrap()),
        vec![program.peer()]
    );
    assert_eq!(engine.stats().rechecks(), 1);
}

#[test]
fn string_marshalling_round_trips_through_the_engine() {
    let (_engine, cx) = setup();
    let packed = cx.pack_str("héllo");
    assert_eq!(cx.unpack_str(packed), "héllo");
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn engine_args_follow_the_config_layout() {
    let mut options = ContextOptions::new("src/main.ets", "");
    assert_eq!(options.engine_args(), vec!["_", "src/main.ets"]);

    options.arktsconfig = Some(PathBuf::from("arktsconfig.json"));
    options.extra_args = vec!["--ets-module".to_string()];
    assert_eq!(
        options.engine_args(),
        vec![
            "_",
            "--arktsconfig",
            "arktsconfig.json",
            "--ets-module",
            "src/main.ets"
        ]
    );
}

#[test]
fn options_parse_from_camel_case_json() {
    let options = ContextOptions::from_json_str(
        r#"{
            "fileName": "a.ets",
            "source": "let a = 1",
            "arktsconfig": "cfg/arktsconfig.json",
            "extraArgs": ["--opt-level=2"],
            "force": true
        }"#,
    )
    .unwrap();

    assert_eq!(options.file_name, "a.ets");
    assert_eq!(options.source, "let a = 1");
    assert_eq!(
        options.arktsconfig,
        Some(PathBuf::from("cfg/arktsconfig.json"))
    );
    assert_eq!(options.extra_args, vec!["--opt-level=2"]);
    assert!(options.force);
}

#[test]
fn missing_option_fields_take_defaults() {
    let options = ContextOptions::from_json_str(r#"{ "fileName": "b.ets" }"#).unwrap();
    assert_eq!(options, ContextOptions::new("b.ets", ""));
}

#[test]
fn malformed_options_are_config_errors() {
    let err = ContextOptions::from_json_str("{ fileName: }").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration:"));
}

#[test]
fn options_load_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "fileName": "disk.ets", "source": "x" }}"#).unwrap();

    let options = ContextOptions::from_path(file.path()).unwrap();
    assert_eq!(options, ContextOptions::new("disk.ets", "x"));
}

#[test]
fn missing_options_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContextOptions::from_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

