//! Typed node wrappers.
//!
//! Each wrapper is a newtype over the shared [`Node`] that has been checked
//! to be of one kind. Cloning a wrapper clones the `Rc`, so identity is
//! preserved; comparing two wrappers compares identity.

use ark_native::{AstNodeType, NativePtr};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::node::Node;

/// A wrapper checked to be of kind [`PeerNode::KIND`].
pub trait PeerNode: Clone + Into<Node> {
    const KIND: AstNodeType;

    fn from_node(node: Node) -> Result<Self>;

    fn as_node(&self) -> &Node;

    fn from_peer(cx: &Context, peer: NativePtr) -> Result<Self> {
        if peer.is_null() {
            return Err(Error::null_handle(Self::KIND.name()));
        }
        Self::from_node(cx.materialize(peer)?)
    }
}

macro_rules! peer_nodes {
    ($($(#[$meta:meta])* $name:ident => $kind:ident,)*) => {$(
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name(crate::node::Node);

        impl $name {
            pub fn from_node(node: crate::node::Node) -> crate::error::Result<$name> {
                node.expect_kind(ark_native::AstNodeType::$kind)?;
                Ok($name(node))
            }

            pub fn from_peer(
                cx: &crate::context::Context,
                peer: ark_native::NativePtr,
            ) -> crate::error::Result<$name> {
                <$name as crate::nodes::PeerNode>::from_peer(cx, peer)
            }

            #[inline]
            pub fn as_node(&self) -> &crate::node::Node {
                &self.0
            }

            #[inline]
            pub fn into_node(self) -> crate::node::Node {
                self.0
            }
        }

        impl crate::nodes::PeerNode for $name {
            const KIND: ark_native::AstNodeType = ark_native::AstNodeType::$kind;

            fn from_node(node: crate::node::Node) -> crate::error::Result<$name> {
                $name::from_node(node)
            }

            fn as_node(&self) -> &crate::node::Node {
                &self.0
            }
        }

        impl TryFrom<crate::node::Node> for $name {
            type Error = crate::error::Error;

            fn try_from(node: crate::node::Node) -> crate::error::Result<$name> {
                $name::from_node(node)
            }
        }

        impl From<$name> for crate::node::Node {
            fn from(node: $name) -> crate::node::Node {
                node.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = crate::node::AstNode;

            fn deref(&self) -> &crate::node::AstNode {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &$name) -> bool {
                std::rc::Rc::ptr_eq(&self.0, &other.0)
            }
        }

        impl Eq for $name {}
    )*};
}

pub(crate) use peer_nodes;

mod declarations;
mod definitions;
mod expressions;
mod literals;
mod module;
mod statements;

pub use declarations::*;
pub use definitions::*;
pub use expressions::*;
pub use literals::*;
pub use module::*;
pub use statements::*;
