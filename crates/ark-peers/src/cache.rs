//! Node identity cache.
//!
//! One wrapper per handle per epoch. Lookups never hold the interior borrow
//! while a wrapper is being built, because building one may materialize its
//! children (captured fields) through the same cache.

use std::cell::RefCell;

use ark_native::NativePtr;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::{Error, Result};
use crate::node::Node;

#[derive(Debug, Default)]
pub struct NodeCache {
    nodes: RefCell<FxHashMap<NativePtr, Node>>,
}

impl NodeCache {
    pub fn new() -> NodeCache {
        NodeCache::default()
    }

    /// Return the wrapper cached for `peer`, or build and cache one.
    ///
    /// `create` is not called when `peer` is already cached.
    pub fn get_or_create<F>(&self, peer: NativePtr, create: F) -> Result<Node>
    where
        F: FnOnce(NativePtr) -> Result<Node>,
    {
        if peer.is_null() {
            return Err(Error::null_handle("node"));
        }
        if let Some(node) = self.get(peer) {
            return Ok(node);
        }

        let node = create(peer)?;
        let mut nodes = self.nodes.borrow_mut();
        // A recursive materialization may have cached the handle meanwhile.
        Ok(nodes.entry(peer).or_insert(node).clone())
    }

    pub fn get(&self, peer: NativePtr) -> Option<Node> {
        self.nodes.borrow().get(&peer).cloned()
    }

    pub fn contains(&self, peer: NativePtr) -> bool {
        self.nodes.borrow().contains_key(&peer)
    }

    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Drop every cached wrapper.
    pub fn clear(&self) {
        let mut nodes = self.nodes.borrow_mut();
        trace!(evicted = nodes.len(), "clearing node cache");
        nodes.clear();
    }
}
