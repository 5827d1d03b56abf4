//! The foreign engine boundary.
//!
//! Every node-level call takes the compilation context handle explicitly.
//! Arguments are never converted implicitly: strings and node sequences go
//! through the marshalling calls first. Marshalling buffers belong to the
//! interop layer rather than to a compilation, so those calls are context-free.

use crate::enums::ContextState;
use crate::handle::{NativeArg, NativeArray, NativePtr, NativeString};
use crate::kind::AstNodeType;
use crate::schema::Field;

/// Calls the host layer may make into the compiler engine.
///
/// Implementations are single-threaded and use interior mutability; the
/// engine is a shared mutable resource reached through `&self`.
pub trait NativeEngine {
    // =========================================================================
    // Context lifecycle
    // =========================================================================

    fn create_config(&self, args: &[NativeString]) -> NativePtr;

    fn destroy_config(&self, config: NativePtr);

    fn create_context(
        &self,
        config: NativePtr,
        source: NativeString,
        file_name: NativeString,
    ) -> NativePtr;

    fn destroy_context(&self, context: NativePtr);

    fn context_state(&self, context: NativePtr) -> ContextState;

    /// Advance `context` to `state`. Failures are reported through
    /// [`NativeEngine::context_state`] afterwards, never through the return.
    fn proceed_to_state(&self, context: NativePtr, state: ContextState);

    fn context_error_message(&self, context: NativePtr) -> NativeString;

    /// Root node of the program held by `context`.
    fn program_root(&self, context: NativePtr) -> NativePtr;

    // =========================================================================
    // Handle introspection
    // =========================================================================

    /// Raw kind tag of `node`. Unknown tags are legal.
    fn node_type(&self, context: NativePtr, node: NativePtr) -> u32;

    fn node_parent(&self, context: NativePtr, node: NativePtr) -> NativePtr;

    fn get_node(&self, context: NativePtr, node: NativePtr, field: Field) -> NativePtr;

    fn get_nodes(&self, context: NativePtr, node: NativePtr, field: Field) -> NativeArray;

    fn get_string(&self, context: NativePtr, node: NativePtr, field: Field) -> NativeString;

    fn get_bool(&self, context: NativePtr, node: NativePtr, field: Field) -> bool;

    fn get_int(&self, context: NativePtr, node: NativePtr, field: Field) -> i32;

    fn get_double(&self, context: NativePtr, node: NativePtr, field: Field) -> f64;

    // =========================================================================
    // Handle construction
    // =========================================================================

    /// Construct a node from positional arguments ordered as the kind's
    /// schema `params`.
    fn create_node(&self, context: NativePtr, kind: AstNodeType, args: &[NativeArg]) -> NativePtr;

    /// Construct a replacement for `original`. Auxiliary metadata of
    /// `original` is not transferred.
    fn update_node(
        &self,
        context: NativePtr,
        original: NativePtr,
        kind: AstNodeType,
        args: &[NativeArg],
    ) -> NativePtr;

    // =========================================================================
    // Mutation
    // =========================================================================

    fn set_node(&self, context: NativePtr, node: NativePtr, field: Field, value: NativePtr);

    fn set_nodes(&self, context: NativePtr, node: NativePtr, field: Field, value: NativeArray);

    fn set_bool(&self, context: NativePtr, node: NativePtr, field: Field, value: bool);

    fn set_int(&self, context: NativePtr, node: NativePtr, field: Field, value: i32);

    // =========================================================================
    // Tree maintenance
    // =========================================================================

    /// Recompute parent links for the subtree rooted at `node`.
    fn set_parent_recursive(&self, context: NativePtr, node: NativePtr);

    /// Schedule the subtree rooted at `node` for re-binding and re-checking.
    fn mark_for_recheck(&self, context: NativePtr, node: NativePtr);

    // =========================================================================
    // Marshalling
    // =========================================================================

    fn pack_string(&self, value: &str) -> NativeString;

    fn unpack_string(&self, value: NativeString) -> String;

    /// Pack the first `count` handles of `items`.
    fn pack_array(&self, items: &[NativePtr], count: u32) -> NativeArray;

    fn unpack_array(&self, array: NativeArray) -> Vec<NativePtr>;
}
