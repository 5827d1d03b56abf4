//! In-memory implementation of the engine boundary.
//!
//! `MemoryEngine` keeps every node in an arena of field slots. It performs no
//! parsing or checking: a fresh context holds an empty `ETSModule`, and trees
//! are built through `create_node`. Like the real engine, `update_node` only
//! stores the positional params; auxiliary metadata stays on the original.
//!
//! Every boundary call is counted in [`EngineStats`], which is what tests use
//! to observe structural sharing (no construction calls) and cache behavior
//! (no repeated kind queries).

use std::cell::{Cell, RefCell};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::engine::NativeEngine;
use crate::enums::ContextState;
use crate::handle::{NativeArg, NativeArray, NativePtr, NativeString};
use crate::kind::AstNodeType;
use crate::schema::{Field, Shape, schema};

const TAG_SHIFT: u32 = 48;
const INDEX_MASK: u64 = (1 << TAG_SHIFT) - 1;
const CONFIG_TAG: u64 = 1;
const CONTEXT_TAG: u64 = 2;
const NODE_TAG: u64 = 3;
const STRING_TAG: u64 = 4;
const ARRAY_TAG: u64 = 5;

#[inline]
fn encode(tag: u64, index: usize) -> u64 {
    (tag << TAG_SHIFT) | index as u64
}

#[inline]
fn decode(tag: u64, raw: u64) -> Option<usize> {
    if raw >> TAG_SHIFT == tag {
        Some((raw & INDEX_MASK) as usize)
    } else {
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Slot {
    Node(NativePtr),
    List(Vec<NativePtr>),
    Str(String),
    Bool(bool),
    Int(i32),
    Double(f64),
}

#[derive(Debug)]
struct MemNode {
    tag: u32,
    parent: NativePtr,
    slots: FxHashMap<Field, Slot>,
}

impl MemNode {
    fn children(&self) -> Vec<NativePtr> {
        let mut children = Vec::new();
        for slot in self.slots.values() {
            match slot {
                Slot::Node(child) if child.is_some() => children.push(*child),
                Slot::List(list) => children.extend(list.iter().copied().filter(|c| c.is_some())),
                _ => {}
            }
        }
        children
    }
}

#[derive(Debug)]
struct MemContext {
    state: ContextState,
    error: Option<String>,
    program: NativePtr,
    file_name: String,
    rechecks: Vec<NativePtr>,
}

#[derive(Debug, Default)]
struct Store {
    configs: Vec<Option<Vec<String>>>,
    contexts: Vec<Option<MemContext>>,
    nodes: Vec<MemNode>,
    strings: Vec<String>,
    arrays: Vec<Vec<NativePtr>>,
}

impl Store {
    fn context(&self, context: NativePtr) -> Option<&MemContext> {
        let index = decode(CONTEXT_TAG, context.into_raw())?;
        self.contexts.get(index)?.as_ref()
    }

    fn context_mut(&mut self, context: NativePtr) -> Option<&mut MemContext> {
        let index = decode(CONTEXT_TAG, context.into_raw())?;
        self.contexts.get_mut(index)?.as_mut()
    }

    fn node(&self, node: NativePtr) -> Option<&MemNode> {
        let index = decode(NODE_TAG, node.into_raw())?;
        self.nodes.get(index)
    }

    fn node_mut(&mut self, node: NativePtr) -> Option<&mut MemNode> {
        let index = decode(NODE_TAG, node.into_raw())?;
        self.nodes.get_mut(index)
    }

    fn slot(&self, node: NativePtr, field: Field) -> Option<&Slot> {
        self.node(node)?.slots.get(&field)
    }

    fn alloc_node(&mut self, tag: u32, slots: FxHashMap<Field, Slot>) -> NativePtr {
        let index = self.nodes.len();
        self.nodes.push(MemNode {
            tag,
            parent: NativePtr::NULL,
            slots,
        });
        let ptr = NativePtr::from_raw(encode(NODE_TAG, index));
        self.adopt_children(ptr);
        ptr
    }

    /// Point the parent link of every direct child of `node` at `node`.
    fn adopt_children(&mut self, node: NativePtr) {
        let children = match self.node(node) {
            Some(mem) => mem.children(),
            None => return,
        };
        for child in children {
            if let Some(child) = self.node_mut(child) {
                child.parent = node;
            }
        }
    }

    fn string(&self, value: NativeString) -> Option<&str> {
        let index = decode(STRING_TAG, value.into_raw())?;
        self.strings.get(index).map(String::as_str)
    }

    fn push_string(&mut self, value: String) -> NativeString {
        let index = self.strings.len();
        self.strings.push(value);
        NativeString::from_raw(encode(STRING_TAG, index))
    }

    fn array(&self, array: NativeArray) -> Option<&[NativePtr]> {
        let index = decode(ARRAY_TAG, array.into_raw())?;
        self.arrays.get(index).map(Vec::as_slice)
    }

    fn push_array(&mut self, items: Vec<NativePtr>) -> NativeArray {
        let index = self.arrays.len();
        self.arrays.push(items);
        NativeArray::from_raw(encode(ARRAY_TAG, index))
    }

    /// Decode positional arguments against the kind's schema.
    fn decode_args(
        &self,
        kind: AstNodeType,
        args: &[NativeArg],
    ) -> Option<FxHashMap<Field, Slot>> {
        let params = schema(kind).params;
        if params.len() != args.len() {
            warn!(
                kind = kind.name(),
                expected = params.len(),
                got = args.len(),
                "argument count mismatch"
            );
            return None;
        }

        let mut slots = FxHashMap::default();
        for (param, arg) in params.iter().zip(args) {
            let slot = match (param.shape, arg) {
                (Shape::Node | Shape::OptNode, NativeArg::Node(ptr)) => Slot::Node(*ptr),
                (Shape::List, NativeArg::Array(array)) => Slot::List(self.array(*array)?.to_vec()),
                (Shape::Str, NativeArg::Str(value)) => Slot::Str(self.string(*value)?.to_owned()),
                (Shape::Bool, NativeArg::Bool(value)) => Slot::Bool(*value),
                (Shape::Int, NativeArg::Int(value)) => Slot::Int(*value),
                (Shape::Double, NativeArg::Double(value)) => Slot::Double(*value),
                _ => {
                    warn!(
                        kind = kind.name(),
                        field = param.field.name(),
                        ?arg,
                        "argument shape mismatch"
                    );
                    return None;
                }
            };
            slots.insert(param.field, slot);
        }
        Some(slots)
    }
}

/// Counters for every call made into a [`MemoryEngine`].
#[derive(Debug, Default)]
pub struct EngineStats {
    creates: Cell<usize>,
    updates: Cell<usize>,
    kind_queries: Cell<usize>,
    reads: Cell<usize>,
    writes: Cell<usize>,
    proceeds: Cell<usize>,
    rechecks: Cell<usize>,
}

impl EngineStats {
    #[inline]
    fn bump(counter: &Cell<usize>) {
        counter.set(counter.get() + 1);
    }

    pub fn creates(&self) -> usize {
        self.creates.get()
    }

    pub fn updates(&self) -> usize {
        self.updates.get()
    }

    /// Create and update calls together.
    pub fn constructions(&self) -> usize {
        self.creates.get() + self.updates.get()
    }

    pub fn kind_queries(&self) -> usize {
        self.kind_queries.get()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn proceeds(&self) -> usize {
        self.proceeds.get()
    }

    pub fn rechecks(&self) -> usize {
        self.rechecks.get()
    }

    pub fn reset(&self) {
        for counter in [
            &self.creates,
            &self.updates,
            &self.kind_queries,
            &self.reads,
            &self.writes,
            &self.proceeds,
            &self.rechecks,
        ] {
            counter.set(0);
        }
    }
}

/// Engine that keeps the whole AST in host memory.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    store: RefCell<Store>,
    stats: EngineStats,
    failure: RefCell<Option<(ContextState, String)>>,
}

impl MemoryEngine {
    pub fn new() -> MemoryEngine {
        MemoryEngine::default()
    }

    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    /// Make any advance that reaches `state` fail with `message`.
    pub fn fail_at(&self, state: ContextState, message: impl Into<String>) {
        *self.failure.borrow_mut() = Some((state, message.into()));
    }

    pub fn clear_failure(&self) {
        *self.failure.borrow_mut() = None;
    }

    /// Replace the program root of `context`.
    pub fn set_program(&self, context: NativePtr, root: NativePtr) {
        if let Some(ctx) = self.store.borrow_mut().context_mut(context) {
            ctx.program = root;
        }
    }

    /// Allocate a node with an arbitrary kind tag and no fields.
    pub fn create_raw_node(&self, context: NativePtr, tag: u32) -> NativePtr {
        let mut store = self.store.borrow_mut();
        if store.context(context).is_none() {
            return NativePtr::NULL;
        }
        store.alloc_node(tag, FxHashMap::default())
    }

    /// Subtrees scheduled for re-checking in `context`, in request order.
    pub fn recheck_requests(&self, context: NativePtr) -> Vec<NativePtr> {
        self.store
            .borrow()
            .context(context)
            .map(|ctx| ctx.rechecks.clone())
            .unwrap_or_default()
    }

    /// Number of contexts created and not yet destroyed.
    pub fn live_contexts(&self) -> usize {
        self.store.borrow().contexts.iter().flatten().count()
    }

    pub fn node_count(&self) -> usize {
        self.store.borrow().nodes.len()
    }

    /// File name the context was created for.
    pub fn file_name(&self, context: NativePtr) -> Option<String> {
        self.store
            .borrow()
            .context(context)
            .map(|ctx| ctx.file_name.clone())
    }

    /// Arguments the config was created with.
    pub fn config_args(&self, config: NativePtr) -> Option<Vec<String>> {
        let store = self.store.borrow();
        let index = decode(CONFIG_TAG, config.into_raw())?;
        store.configs.get(index)?.clone()
    }
}

impl NativeEngine for MemoryEngine {
    fn create_config(&self, args: &[NativeString]) -> NativePtr {
        let mut store = self.store.borrow_mut();
        let args = args
            .iter()
            .map(|arg| store.string(*arg).unwrap_or_default().to_owned())
            .collect();
        let index = store.configs.len();
        store.configs.push(Some(args));
        NativePtr::from_raw(encode(CONFIG_TAG, index))
    }

    fn destroy_config(&self, config: NativePtr) {
        let mut store = self.store.borrow_mut();
        if let Some(index) = decode(CONFIG_TAG, config.into_raw())
            && let Some(slot) = store.configs.get_mut(index)
        {
            *slot = None;
        }
    }

    fn create_context(
        &self,
        config: NativePtr,
        _source: NativeString,
        file_name: NativeString,
    ) -> NativePtr {
        let mut store = self.store.borrow_mut();
        let config_alive = decode(CONFIG_TAG, config.into_raw())
            .and_then(|index| store.configs.get(index))
            .is_some_and(Option::is_some);
        if !config_alive {
            return NativePtr::NULL;
        }

        let file_name = store.string(file_name).unwrap_or_default().to_owned();
        let mut slots = FxHashMap::default();
        slots.insert(Field::Statements, Slot::List(Vec::new()));
        slots.insert(Field::Ident, Slot::Node(NativePtr::NULL));
        slots.insert(Field::ModuleFlags, Slot::Int(0));
        let program = store.alloc_node(AstNodeType::EtsModule.tag(), slots);

        let index = store.contexts.len();
        store.contexts.push(Some(MemContext {
            state: ContextState::New,
            error: None,
            program,
            file_name,
            rechecks: Vec::new(),
        }));
        let context = NativePtr::from_raw(encode(CONTEXT_TAG, index));
        debug!(?context, "memory engine context created");
        context
    }

    fn destroy_context(&self, context: NativePtr) {
        let mut store = self.store.borrow_mut();
        if let Some(index) = decode(CONTEXT_TAG, context.into_raw())
            && let Some(slot) = store.contexts.get_mut(index)
        {
            *slot = None;
            debug!(?context, "memory engine context destroyed");
        }
    }

    fn context_state(&self, context: NativePtr) -> ContextState {
        self.store
            .borrow()
            .context(context)
            .map_or(ContextState::Error, |ctx| ctx.state)
    }

    fn proceed_to_state(&self, context: NativePtr, state: ContextState) {
        EngineStats::bump(&self.stats.proceeds);
        let failure = self.failure.borrow().clone();
        let mut store = self.store.borrow_mut();
        let Some(ctx) = store.context_mut(context) else {
            return;
        };
        if ctx.state.is_error() || state <= ctx.state {
            return;
        }
        match failure {
            Some((fail_state, message)) if state >= fail_state => {
                ctx.state = ContextState::Error;
                ctx.error = Some(message);
            }
            _ => ctx.state = state,
        }
    }

    fn context_error_message(&self, context: NativePtr) -> NativeString {
        let mut store = self.store.borrow_mut();
        let message = store
            .context(context)
            .and_then(|ctx| ctx.error.clone())
            .unwrap_or_default();
        store.push_string(message)
    }

    fn program_root(&self, context: NativePtr) -> NativePtr {
        self.store
            .borrow()
            .context(context)
            .map_or(NativePtr::NULL, |ctx| ctx.program)
    }

    fn node_type(&self, _context: NativePtr, node: NativePtr) -> u32 {
        EngineStats::bump(&self.stats.kind_queries);
        self.store.borrow().node(node).map_or(0, |mem| mem.tag)
    }

    fn node_parent(&self, _context: NativePtr, node: NativePtr) -> NativePtr {
        EngineStats::bump(&self.stats.reads);
        self.store
            .borrow()
            .node(node)
            .map_or(NativePtr::NULL, |mem| mem.parent)
    }

    fn get_node(&self, _context: NativePtr, node: NativePtr, field: Field) -> NativePtr {
        EngineStats::bump(&self.stats.reads);
        match self.store.borrow().slot(node, field) {
            Some(Slot::Node(child)) => *child,
            _ => NativePtr::NULL,
        }
    }

    fn get_nodes(&self, _context: NativePtr, node: NativePtr, field: Field) -> NativeArray {
        EngineStats::bump(&self.stats.reads);
        let mut store = self.store.borrow_mut();
        let items = match store.slot(node, field) {
            Some(Slot::List(list)) => list.clone(),
            _ => Vec::new(),
        };
        store.push_array(items)
    }

    fn get_string(&self, _context: NativePtr, node: NativePtr, field: Field) -> NativeString {
        EngineStats::bump(&self.stats.reads);
        let mut store = self.store.borrow_mut();
        let value = match store.slot(node, field) {
            Some(Slot::Str(value)) => value.clone(),
            _ => String::new(),
        };
        store.push_string(value)
    }

    fn get_bool(&self, _context: NativePtr, node: NativePtr, field: Field) -> bool {
        EngineStats::bump(&self.stats.reads);
        matches!(self.store.borrow().slot(node, field), Some(Slot::Bool(true)))
    }

    fn get_int(&self, _context: NativePtr, node: NativePtr, field: Field) -> i32 {
        EngineStats::bump(&self.stats.reads);
        match self.store.borrow().slot(node, field) {
            Some(Slot::Int(value)) => *value,
            _ => 0,
        }
    }

    fn get_double(&self, _context: NativePtr, node: NativePtr, field: Field) -> f64 {
        EngineStats::bump(&self.stats.reads);
        match self.store.borrow().slot(node, field) {
            Some(Slot::Double(value)) => *value,
            _ => 0.0,
        }
    }

    fn create_node(&self, context: NativePtr, kind: AstNodeType, args: &[NativeArg]) -> NativePtr {
        EngineStats::bump(&self.stats.creates);
        let mut store = self.store.borrow_mut();
        if store.context(context).is_none() {
            return NativePtr::NULL;
        }
        let Some(slots) = store.decode_args(kind, args) else {
            return NativePtr::NULL;
        };
        store.alloc_node(kind.tag(), slots)
    }

    fn update_node(
        &self,
        context: NativePtr,
        original: NativePtr,
        kind: AstNodeType,
        args: &[NativeArg],
    ) -> NativePtr {
        EngineStats::bump(&self.stats.updates);
        let mut store = self.store.borrow_mut();
        if store.context(context).is_none() {
            return NativePtr::NULL;
        }
        let Some(parent) = store.node(original).map(|mem| mem.parent) else {
            return NativePtr::NULL;
        };
        let Some(slots) = store.decode_args(kind, args) else {
            return NativePtr::NULL;
        };
        let updated = store.alloc_node(kind.tag(), slots);
        if let Some(mem) = store.node_mut(updated) {
            mem.parent = parent;
        }
        updated
    }

    fn set_node(&self, _context: NativePtr, node: NativePtr, field: Field, value: NativePtr) {
        EngineStats::bump(&self.stats.writes);
        let mut store = self.store.borrow_mut();
        if let Some(mem) = store.node_mut(node) {
            mem.slots.insert(field, Slot::Node(value));
            store.adopt_children(node);
        }
    }

    fn set_nodes(&self, _context: NativePtr, node: NativePtr, field: Field, value: NativeArray) {
        EngineStats::bump(&self.stats.writes);
        let mut store = self.store.borrow_mut();
        let Some(items) = store.array(value).map(<[NativePtr]>::to_vec) else {
            return;
        };
        if let Some(mem) = store.node_mut(node) {
            mem.slots.insert(field, Slot::List(items));
            store.adopt_children(node);
        }
    }

    fn set_bool(&self, _context: NativePtr, node: NativePtr, field: Field, value: bool) {
        EngineStats::bump(&self.stats.writes);
        if let Some(mem) = self.store.borrow_mut().node_mut(node) {
            mem.slots.insert(field, Slot::Bool(value));
        }
    }

    fn set_int(&self, _context: NativePtr, node: NativePtr, field: Field, value: i32) {
        EngineStats::bump(&self.stats.writes);
        if let Some(mem) = self.store.borrow_mut().node_mut(node) {
            mem.slots.insert(field, Slot::Int(value));
        }
    }

    fn set_parent_recursive(&self, _context: NativePtr, node: NativePtr) {
        let mut store = self.store.borrow_mut();
        let mut pending = vec![node];
        while let Some(current) = pending.pop() {
            let children = match store.node(current) {
                Some(mem) => mem.children(),
                None => continue,
            };
            store.adopt_children(current);
            pending.extend(children);
        }
    }

    fn mark_for_recheck(&self, context: NativePtr, node: NativePtr) {
        EngineStats::bump(&self.stats.rechecks);
        if let Some(ctx) = self.store.borrow_mut().context_mut(context) {
            ctx.rechecks.push(node);
        }
    }

    fn pack_string(&self, value: &str) -> NativeString {
        self.store.borrow_mut().push_string(value.to_owned())
    }

    fn unpack_string(&self, value: NativeString) -> String {
        self.store
            .borrow()
            .string(value)
            .unwrap_or_default()
            .to_owned()
    }

    fn pack_array(&self, items: &[NativePtr], count: u32) -> NativeArray {
        let count = (count as usize).min(items.len());
        self.store.borrow_mut().push_array(items[..count].to_vec())
    }

    fn unpack_array(&self, array: NativeArray) -> Vec<NativePtr> {
        self.store
            .borrow()
            .array(array)
            .map(<[NativePtr]>::to_vec)
            .unwrap_or_default()
    }
}
