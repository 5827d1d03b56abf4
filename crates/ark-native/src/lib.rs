//! Foreign compiler engine boundary for the ark-peers AST layer.
//!
//! The compiler engine owns every AST node. This crate describes the narrow,
//! handle-based surface the host layer is allowed to use:
//! - Opaque handles (`NativePtr`, `NativeString`, `NativeArray`)
//! - Node kind tags (`AstNodeType`) and field keys (`Field`)
//! - Per-kind node schemas (`NodeSchema`) describing create/update arguments
//! - The boundary trait itself (`NativeEngine`)
//! - Engine enums and modifier flags
//! - An in-memory engine (`MemoryEngine`) used by tests and tooling

// Opaque identity handles
pub mod handle;
pub use handle::{NativeArg, NativeArray, NativePtr, NativeString};

// Node kind tags
pub mod kind;
pub use kind::AstNodeType;

// Field keys and per-kind schemas
pub mod schema;
pub use schema::{AuxParam, AuxShape, Field, NodeSchema, Param, Shape};

// Engine enums and modifier flags
pub mod enums;
pub use enums::{
    ContextState, MemberExpressionKind, MethodDefinitionKind, Modifiers, TokenType,
    VariableDeclarationKind,
};

// The boundary trait
pub mod engine;
pub use engine::NativeEngine;

// In-memory engine
pub mod memory;
pub use memory::{EngineStats, MemoryEngine};
