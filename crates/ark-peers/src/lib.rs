//! Identity-stable, typed view over an AST owned by a foreign compiler engine.
//!
//! The engine is reached through [`ark_native::NativeEngine`]. On top of it
//! this crate provides:
//! - A compilation [`Context`] passed explicitly to every operation
//! - A node identity cache: one wrapper per engine handle per epoch
//! - A registry turning engine kind tags into wrappers, with an
//!   `Unsupported` fallback for unknown tags
//! - Typed wrappers for every supported kind ([`nodes`])
//! - A [`Factory`] whose updates share structure with the original tree
//! - A generic rewriter, [`visit_each_child`]

// Errors
pub mod error;
pub use error::{Error, Result};

// Configuration
pub mod config;
pub use config::ContextOptions;

// Node wrappers
pub mod node;
pub use node::{AstNode, Node, NodeKind, same_node, same_node_list, same_opt_node};

pub mod nodes;
pub use nodes::PeerNode;

// Identity cache and registry
pub mod cache;
pub use cache::NodeCache;
mod marshal;
mod registry;

// Compilation context
pub mod context;
pub use context::Context;

// Construction
pub mod factory;
pub use factory::{ClassDefinitionParts, Factory, ScriptFunctionParts};

// Rewriting
pub mod visitor;
pub use visitor::{
    Category, PRECEDENCE, Transform, Visit, VisitStats, visit_each_child,
    visit_each_child_with_stats,
};

pub use ark_native::{
    AstNodeType, ContextState, MemberExpressionKind, MethodDefinitionKind, Modifiers,
    NativeEngine, NativePtr, TokenType, VariableDeclarationKind,
};
