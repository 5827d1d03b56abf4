//! The wrapper every engine node materializes into.
//!
//! An `AstNode` is a read/write view: it records the handle, the kind tag
//! validated at construction, the epoch it was built in, and a few fields
//! captured eagerly for hot kinds. Everything else is read through the engine
//! on each call. Wrappers are shared as [`Node`] (`Rc<AstNode>`); identity of
//! the `Rc` is identity of the engine node within an epoch.

use std::fmt;
use std::rc::Rc;

use ark_native::{AstNodeType, Field, Modifiers, NativePtr};
use smallvec::SmallVec;

use crate::context::Context;
use crate::error::{Error, Result};

pub type Node = Rc<AstNode>;

/// `true` if both wrappers are the same instance.
#[inline]
pub fn same_node(a: &Node, b: &Node) -> bool {
    Rc::ptr_eq(a, b)
}

/// `true` if both optional wrappers are absent or the same instance.
#[inline]
pub fn same_opt_node(a: Option<&Node>, b: Option<&Node>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

/// `true` if both lists hold the same instances in the same order.
pub fn same_node_list(a: &[Node], b: &[Node]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| Rc::ptr_eq(a, b))
}

/// Kind of a materialized node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Known(AstNodeType),
    /// The engine reported a tag this layer does not model.
    Unsupported { tag: u32 },
}

impl NodeKind {
    pub fn from_tag(tag: u32) -> NodeKind {
        match AstNodeType::from_tag(tag) {
            Some(kind) => NodeKind::Known(kind),
            None => NodeKind::Unsupported { tag },
        }
    }

    #[inline]
    pub fn ast_type(self) -> Option<AstNodeType> {
        match self {
            NodeKind::Known(kind) => Some(kind),
            NodeKind::Unsupported { .. } => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Known(kind) => f.write_str(kind.name()),
            NodeKind::Unsupported { tag } => write!(f, "Unsupported({tag})"),
        }
    }
}

/// Fields read once when the wrapper is built.
#[derive(Debug)]
pub(crate) enum Captured {
    None,
    Call {
        callee: Node,
        arguments: SmallVec<[Node; 4]>,
    },
}

pub struct AstNode {
    peer: NativePtr,
    kind: NodeKind,
    epoch: u64,
    pub(crate) captured: Captured,
}

impl AstNode {
    pub(crate) fn new(peer: NativePtr, kind: NodeKind, epoch: u64, captured: Captured) -> AstNode {
        AstNode {
            peer,
            kind,
            epoch,
            captured,
        }
    }

    #[inline]
    pub fn peer(&self) -> NativePtr {
        self.peer
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn ast_type(&self) -> Option<AstNodeType> {
        self.kind.ast_type()
    }

    #[inline]
    pub fn is(&self, kind: AstNodeType) -> bool {
        self.kind == NodeKind::Known(kind)
    }

    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind, NodeKind::Unsupported { .. })
    }

    /// Cache epoch the wrapper was built in.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub(crate) fn expect_kind(&self, expected: AstNodeType) -> Result<()> {
        if self.is(expected) {
            Ok(())
        } else {
            Err(Error::InvalidHandle {
                expected: expected.name(),
                found: self.kind.to_string(),
            })
        }
    }

    // =========================================================================
    // Generic accessors
    // =========================================================================

    pub fn parent(&self, cx: &Context) -> Result<Option<Node>> {
        let parent = cx.engine().node_parent(cx.peer()?, self.peer);
        cx.materialize_opt(parent)
    }

    pub fn modifiers(&self, cx: &Context) -> Result<Modifiers> {
        let raw = self.int(cx, Field::Modifiers)?;
        Ok(Modifiers::from_bits_retain(raw))
    }

    pub fn set_modifiers(&self, cx: &Context, modifiers: Modifiers) -> Result<()> {
        self.set_int(cx, Field::Modifiers, modifiers.bits())
    }

    /// Annotations through the node-level getter, available on every kind.
    pub fn annotations(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Annotations)
    }

    pub fn set_annotations(&self, cx: &Context, annotations: &[Node]) -> Result<()> {
        self.set_children(cx, Field::Annotations, annotations)
    }

    /// Recompute parent links below this node.
    pub fn set_all_parents(&self, cx: &Context) -> Result<()> {
        cx.engine().set_parent_recursive(cx.peer()?, self.peer);
        Ok(())
    }

    /// Schedule this subtree for re-binding and re-checking.
    pub fn mark_for_recheck(&self, cx: &Context) -> Result<()> {
        cx.engine().mark_for_recheck(cx.peer()?, self.peer);
        Ok(())
    }

    // =========================================================================
    // Field reads
    // =========================================================================

    pub(crate) fn child(&self, cx: &Context, field: Field) -> Result<Node> {
        let child = cx.engine().get_node(cx.peer()?, self.peer, field);
        if child.is_null() {
            return Err(Error::null_handle(field.name()));
        }
        cx.materialize(child)
    }

    pub(crate) fn child_opt(&self, cx: &Context, field: Field) -> Result<Option<Node>> {
        let child = cx.engine().get_node(cx.peer()?, self.peer, field);
        cx.materialize_opt(child)
    }

    pub(crate) fn children(&self, cx: &Context, field: Field) -> Result<Vec<Node>> {
        let array = cx.engine().get_nodes(cx.peer()?, self.peer, field);
        cx.materialize_array(array)
    }

    pub(crate) fn string(&self, cx: &Context, field: Field) -> Result<String> {
        let value = cx.engine().get_string(cx.peer()?, self.peer, field);
        Ok(cx.unpack_str(value))
    }

    pub(crate) fn flag(&self, cx: &Context, field: Field) -> Result<bool> {
        Ok(cx.engine().get_bool(cx.peer()?, self.peer, field))
    }

    pub(crate) fn int(&self, cx: &Context, field: Field) -> Result<i32> {
        Ok(cx.engine().get_int(cx.peer()?, self.peer, field))
    }

    pub(crate) fn double(&self, cx: &Context, field: Field) -> Result<f64> {
        Ok(cx.engine().get_double(cx.peer()?, self.peer, field))
    }

    /// Read an integer field through a `from_raw` conversion.
    pub(crate) fn int_as<T>(
        &self,
        cx: &Context,
        field: Field,
        from_raw: fn(i32) -> Option<T>,
    ) -> Result<T> {
        let value = self.int(cx, field)?;
        from_raw(value).ok_or(Error::UnexpectedValue { field, value })
    }

    // =========================================================================
    // Field writes
    // =========================================================================

    pub(crate) fn set_child(&self, cx: &Context, field: Field, value: Option<&Node>) -> Result<()> {
        let value = value.map_or(NativePtr::NULL, |node| node.peer());
        cx.engine().set_node(cx.peer()?, self.peer, field, value);
        Ok(())
    }

    pub(crate) fn set_children(&self, cx: &Context, field: Field, value: &[Node]) -> Result<()> {
        let array = cx.pack_nodes(value);
        cx.engine().set_nodes(cx.peer()?, self.peer, field, array);
        Ok(())
    }

    pub(crate) fn set_flag(&self, cx: &Context, field: Field, value: bool) -> Result<()> {
        cx.engine().set_bool(cx.peer()?, self.peer, field, value);
        Ok(())
    }

    pub(crate) fn set_int(&self, cx: &Context, field: Field, value: i32) -> Result<()> {
        cx.engine().set_int(cx.peer()?, self.peer, field, value);
        Ok(())
    }
}

impl fmt::Debug for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstNode")
            .field("kind", &self.kind)
            .field("peer", &self.peer)
            .field("epoch", &self.epoch)
            .finish()
    }
}
