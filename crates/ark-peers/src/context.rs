//! Compilation context.
//!
//! A `Context` owns one engine compilation and everything derived from it:
//! the config and context handles, the node cache, and the cache epoch. It is
//! passed explicitly to every accessor, factory call, and visitor. Nothing in
//! this crate keeps a global "current" context.

use std::cell::Cell;
use std::rc::Rc;

use ark_native::{ContextState, NativeEngine, NativePtr};
use tracing::{debug, warn};

use crate::cache::NodeCache;
use crate::config::ContextOptions;
use crate::error::{Error, Result};
use crate::factory::Factory;
use crate::node::AstNode;
use crate::nodes::EtsModule;

pub struct Context {
    engine: Rc<dyn NativeEngine>,
    options: ContextOptions,
    config: Cell<NativePtr>,
    peer: Cell<NativePtr>,
    cache: NodeCache,
    epoch: Cell<u64>,
}

impl Context {
    /// Create an engine config and compilation context for `options`.
    pub fn create(engine: Rc<dyn NativeEngine>, options: ContextOptions) -> Result<Context> {
        let args: Vec<_> = options
            .engine_args()
            .iter()
            .map(|arg| engine.pack_string(arg))
            .collect();
        let config = engine.create_config(&args);
        if config.is_null() {
            return Err(Error::null_handle("config"));
        }

        let source = engine.pack_string(&options.source);
        let file_name = engine.pack_string(&options.file_name);
        let peer = engine.create_context(config, source, file_name);
        if peer.is_null() {
            engine.destroy_config(config);
            return Err(Error::null_handle("context"));
        }

        debug!(file = %options.file_name, ?peer, "compilation context created");
        Ok(Context {
            engine,
            options,
            config: Cell::new(config),
            peer: Cell::new(peer),
            cache: NodeCache::new(),
            epoch: Cell::new(0),
        })
    }

    #[inline]
    pub fn engine(&self) -> &dyn NativeEngine {
        &*self.engine
    }

    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Engine handle of the compilation.
    #[inline]
    pub fn peer(&self) -> Result<NativePtr> {
        let peer = self.peer.get();
        if peer.is_null() {
            Err(Error::ContextDestroyed)
        } else {
            Ok(peer)
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.peer.get().is_null()
    }

    pub fn state(&self) -> Result<ContextState> {
        Ok(self.engine.context_state(self.peer()?))
    }

    pub fn cache(&self) -> &NodeCache {
        &self.cache
    }

    /// Current cache epoch. Bumped every time the cache is cleared.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    /// `true` if `node` was materialized after the last cache clear.
    pub fn is_current(&self, node: &AstNode) -> bool {
        node.epoch() == self.epoch.get()
    }

    /// Drop all cached wrappers and start a new epoch.
    ///
    /// Wrappers held from earlier epochs still read through the engine but no
    /// longer share identity with freshly materialized ones.
    pub fn clear_cache(&self) {
        self.cache.clear();
        self.epoch.set(self.epoch.get() + 1);
    }

    /// Advance the compilation, honoring [`ContextOptions::force`].
    pub fn proceed_to_state(&self, state: ContextState) -> Result<()> {
        self.proceed_to_state_with(state, self.options.force)
    }

    /// Advance the compilation to `state`.
    ///
    /// The cache is cleared before advancing and again if the engine ends up
    /// in its error state. Unless `force` is set, an error state tears the
    /// context down and is returned as [`Error::Engine`].
    pub fn proceed_to_state_with(&self, state: ContextState, force: bool) -> Result<()> {
        let peer = self.peer()?;
        debug!(%state, "proceeding to state");
        self.clear_cache();
        self.engine.proceed_to_state(peer, state);

        if !self.engine.context_state(peer).is_error() {
            return Ok(());
        }
        self.clear_cache();
        let message = self
            .engine
            .unpack_string(self.engine.context_error_message(peer));
        if force {
            warn!(%state, %message, "engine reported an error; continuing");
            return Ok(());
        }
        self.destroy();
        Err(Error::Engine { state, message })
    }

    /// Root of the program held by the compilation.
    pub fn program(&self) -> Result<EtsModule> {
        let root = self.engine.program_root(self.peer()?);
        EtsModule::from_peer(self, root)
    }

    pub fn factory(&self) -> Factory<'_> {
        Factory::new(self)
    }

    /// Release the engine context and config. Idempotent.
    pub fn destroy(&self) {
        let peer = self.peer.replace(NativePtr::NULL);
        if peer.is_some() {
            self.cache.clear();
            self.engine.destroy_context(peer);
            debug!(?peer, "compilation context destroyed");
        }
        let config = self.config.replace(NativePtr::NULL);
        if config.is_some() {
            self.engine.destroy_config(config);
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.destroy();
    }
}
