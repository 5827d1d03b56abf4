//! Packing host values into engine buffers and back.

use ark_native::{NativeArray, NativePtr, NativeString};

use crate::context::Context;
use crate::node::Node;

impl Context {
    pub fn pack_str(&self, value: &str) -> NativeString {
        self.engine().pack_string(value)
    }

    pub fn unpack_str(&self, value: NativeString) -> String {
        self.engine().unpack_string(value)
    }

    /// Pack node handles in order, with an explicit element count.
    pub fn pack_nodes(&self, nodes: &[Node]) -> NativeArray {
        let peers: Vec<NativePtr> = nodes.iter().map(|node| node.peer()).collect();
        self.engine().pack_array(&peers, peers.len() as u32)
    }

    pub(crate) fn pack_opt(node: Option<&Node>) -> NativePtr {
        node.map_or(NativePtr::NULL, |node| node.peer())
    }
}
