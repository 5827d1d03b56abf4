//! Create and update operations for every node kind.
//!
//! Every `update_*` compares the proposed fields against the original node
//! first. When nothing differs the original wrapper is returned and the
//! engine is not called, so unchanged subtrees keep their identity all the
//! way up. When something differs the engine rebuilds the node and the
//! attach steps restore the auxiliary metadata an engine update
//! drops.
//!
//! Arguments are collected in `NodeArgs` in the order of the kind's
//! schema: positional `params` first, then `compared_aux`.

mod attach;
mod declarations;
mod definitions;
mod expressions;
mod literals;
mod statements;

pub use definitions::{ClassDefinitionParts, ScriptFunctionParts};

use ark_native::schema::schema;
use ark_native::{AstNodeType, AuxParam, Field, NativeArg, NativePtr, Param, Shape};
use smallvec::SmallVec;
use tracing::trace;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::nodes::{EtsModule, PeerNode};

/// One argument value, shaped like a schema field.
#[derive(Clone, Debug)]
pub(crate) enum ArgValue {
    /// Required or optional child.
    Node(Option<Node>),
    List(Vec<Node>),
    Str(String),
    Bool(bool),
    Int(i32),
    Double(f64),
}

/// A compared auxiliary argument. Compared metadata is always a child or a
/// list of children.
#[derive(Clone, Debug)]
pub(crate) enum AuxValue {
    Node(Option<Node>),
    List(Vec<Node>),
}

/// Arguments of one create or update call.
#[derive(Debug)]
pub(crate) struct NodeArgs {
    kind: AstNodeType,
    params: SmallVec<[ArgValue; 8]>,
    aux: SmallVec<[AuxValue; 2]>,
}

impl NodeArgs {
    pub(crate) fn new(kind: AstNodeType) -> NodeArgs {
        NodeArgs {
            kind,
            params: SmallVec::new(),
            aux: SmallVec::new(),
        }
    }

    pub(crate) fn node(mut self, node: &Node) -> NodeArgs {
        self.params.push(ArgValue::Node(Some(node.clone())));
        self
    }

    pub(crate) fn opt_node(mut self, node: Option<&Node>) -> NodeArgs {
        self.params.push(ArgValue::Node(node.cloned()));
        self
    }

    pub(crate) fn list(mut self, nodes: &[Node]) -> NodeArgs {
        self.params.push(ArgValue::List(nodes.to_vec()));
        self
    }

    pub(crate) fn str(mut self, value: &str) -> NodeArgs {
        self.params.push(ArgValue::Str(value.to_owned()));
        self
    }

    pub(crate) fn bool(mut self, value: bool) -> NodeArgs {
        self.params.push(ArgValue::Bool(value));
        self
    }

    pub(crate) fn int(mut self, value: i32) -> NodeArgs {
        self.params.push(ArgValue::Int(value));
        self
    }

    pub(crate) fn double(mut self, value: f64) -> NodeArgs {
        self.params.push(ArgValue::Double(value));
        self
    }

    pub(crate) fn aux_list(mut self, nodes: &[Node]) -> NodeArgs {
        self.aux.push(AuxValue::List(nodes.to_vec()));
        self
    }

    pub(crate) fn aux_opt_node(mut self, node: Option<&Node>) -> NodeArgs {
        self.aux.push(AuxValue::Node(node.cloned()));
        self
    }
}

/// Node construction for one context. Obtained from [`Context::factory`].
#[derive(Clone, Copy)]
pub struct Factory<'cx> {
    cx: &'cx Context,
}

impl<'cx> Factory<'cx> {
    pub(crate) fn new(cx: &'cx Context) -> Factory<'cx> {
        Factory { cx }
    }

    pub fn context(&self) -> &'cx Context {
        self.cx
    }

    /// Construct a fresh node, then apply the compared auxiliary arguments.
    pub(crate) fn create<T: PeerNode>(&self, args: NodeArgs) -> Result<T> {
        debug_assert_eq!(args.kind, T::KIND);
        let cx = self.cx;
        let native = self.marshal(&args);
        let peer = cx.engine().create_node(cx.peer()?, args.kind, &native);
        let node = self.wrap(peer, args.kind)?;
        attach::apply_compared(cx, &node, schema(args.kind).compared_aux, &args.aux)?;
        T::from_node(node)
    }

    /// Return `original` if every argument equals its current value,
    /// otherwise rebuild it and run the attach steps.
    pub(crate) fn update<T: PeerNode>(&self, original: &T, args: NodeArgs) -> Result<T> {
        debug_assert_eq!(args.kind, T::KIND);
        let cx = self.cx;
        let schema = schema(args.kind);
        let node = original.as_node();

        if self.all_equal(node, schema.params, &args.params)?
            && self.all_aux_equal(node, schema.compared_aux, &args.aux)?
        {
            return Ok(original.clone());
        }

        let native = self.marshal(&args);
        let peer = cx
            .engine()
            .update_node(cx.peer()?, node.peer(), args.kind, &native);
        let updated = self.wrap(peer, args.kind)?;
        trace!(kind = args.kind.name(), from = ?node.peer(), to = ?peer, "node rebuilt");

        attach::apply_compared(cx, &updated, schema.compared_aux, &args.aux)?;
        attach::copy_from_original(cx, &updated, node, schema.copied_aux)?;
        T::from_node(updated)
    }

    fn wrap(&self, peer: NativePtr, kind: AstNodeType) -> Result<Node> {
        if peer.is_null() {
            return Err(Error::null_handle(kind.name()));
        }
        self.cx.materialize(peer)
    }

    fn all_equal(&self, original: &Node, params: &[Param], values: &[ArgValue]) -> Result<bool> {
        debug_assert_eq!(params.len(), values.len());
        for (param, value) in params.iter().zip(values) {
            if !self.field_equals(original, *param, value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn all_aux_equal(
        &self,
        original: &Node,
        params: &[AuxParam],
        values: &[AuxValue],
    ) -> Result<bool> {
        debug_assert_eq!(params.len(), values.len());
        for (param, value) in params.iter().zip(values) {
            let equal = match value {
                AuxValue::Node(node) => self.node_equals(original, param.field, node.as_ref())?,
                AuxValue::List(nodes) => self.list_equals(original, param.field, nodes)?,
            };
            if !equal {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Handle equality for children, value equality for scalars.
    fn field_equals(&self, original: &Node, param: Param, value: &ArgValue) -> Result<bool> {
        let cx = self.cx;
        let engine = cx.engine();
        let (context, peer, field) = (cx.peer()?, original.peer(), param.field);
        let equal = match (param.shape, value) {
            (Shape::Node | Shape::OptNode, ArgValue::Node(node)) => {
                self.node_equals(original, field, node.as_ref())?
            }
            (Shape::List, ArgValue::List(nodes)) => self.list_equals(original, field, nodes)?,
            (Shape::Str, ArgValue::Str(value)) => {
                engine.unpack_string(engine.get_string(context, peer, field)) == *value
            }
            (Shape::Bool, ArgValue::Bool(value)) => engine.get_bool(context, peer, field) == *value,
            (Shape::Int, ArgValue::Int(value)) => engine.get_int(context, peer, field) == *value,
            (Shape::Double, ArgValue::Double(value)) => {
                engine.get_double(context, peer, field).to_bits() == value.to_bits()
            }
            _ => false,
        };
        Ok(equal)
    }

    fn node_equals(&self, original: &Node, field: Field, node: Option<&Node>) -> Result<bool> {
        let cx = self.cx;
        let current = cx.engine().get_node(cx.peer()?, original.peer(), field);
        Ok(current == Context::pack_opt(node))
    }

    fn list_equals(&self, original: &Node, field: Field, nodes: &[Node]) -> Result<bool> {
        let cx = self.cx;
        let engine = cx.engine();
        let current = engine.unpack_array(engine.get_nodes(cx.peer()?, original.peer(), field));
        Ok(current.len() == nodes.len() && current.iter().zip(nodes).all(|(a, b)| *a == b.peer()))
    }

    fn marshal(&self, args: &NodeArgs) -> SmallVec<[NativeArg; 8]> {
        let cx = self.cx;
        args.params
            .iter()
            .map(|value| match value {
                ArgValue::Node(node) => NativeArg::Node(Context::pack_opt(node.as_ref())),
                ArgValue::List(nodes) => NativeArg::Array(cx.pack_nodes(nodes)),
                ArgValue::Str(value) => NativeArg::Str(cx.pack_str(value)),
                ArgValue::Bool(value) => NativeArg::Bool(*value),
                ArgValue::Int(value) => NativeArg::Int(*value),
                ArgValue::Double(value) => NativeArg::Double(*value),
            })
            .collect()
    }

    // =========================================================================
    // Module
    // =========================================================================

    pub fn create_ets_module(
        &self,
        statements: &[Node],
        ident: Option<&Node>,
        flags: i32,
        annotations: &[Node],
    ) -> Result<EtsModule> {
        self.create(
            NodeArgs::new(AstNodeType::EtsModule)
                .list(statements)
                .opt_node(ident)
                .int(flags)
                .aux_list(annotations),
        )
    }

    pub fn update_ets_module(
        &self,
        original: &EtsModule,
        statements: &[Node],
        ident: Option<&Node>,
        flags: i32,
        annotations: &[Node],
    ) -> Result<EtsModule> {
        self.update(
            original,
            NodeArgs::new(AstNodeType::EtsModule)
                .list(statements)
                .opt_node(ident)
                .int(flags)
                .aux_list(annotations),
        )
    }
}
