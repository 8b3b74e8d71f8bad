//! The process-wide router.
//!
//! # Responsibilities
//! - Own the one route table for the process
//! - Register controllers (via the scanner) and single routes
//! - Resolve requests against the current table
//!
//! # Design Decisions
//! - Lazily built on first `instance()` call, never torn down
//! - Table published through `ArcSwap`: resolutions read a snapshot without locking
//! - Writers serialize on a mutex and publish a whole new table, so a batch lands at once
//! - Not `Clone`; serde impls exist only to refuse
//!
//! The router cannot be duplicated:
//!
//! ```compile_fail
//! use verb_router::Router;
//!
//! let copy: Router = Router::instance().clone();
//! ```

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use arc_swap::ArcSwap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::observability::metrics;
use crate::routing::dispatch::dispatch;
use crate::routing::error::RouterResult;
use crate::routing::handler::{Controller, ControllerType, Handler};
use crate::routing::method::HttpMethod;
use crate::routing::registry::RouteTable;
use crate::routing::scanner::{scan_all, ScannedRoute};

/// Message returned when something tries to serialize the router.
pub const SERIALIZE_VIOLATION: &str = "Router is a singleton; serialization is not permitted";

/// Message returned when something tries to deserialize a router.
pub const DESERIALIZE_VIOLATION: &str = "Router is a singleton; it cannot be deserialized";

static INSTANCE: OnceLock<Router> = OnceLock::new();

/// Resolves requests to registered handlers.
pub struct Router {
    routes: ArcSwap<RouteTable>,
    write_lock: Mutex<()>,
}

impl Router {
    fn new() -> Self {
        Self {
            routes: ArcSwap::from_pointee(RouteTable::new()),
            write_lock: Mutex::new(()),
        }
    }

    /// The router for this process, built on first call.
    pub fn instance() -> &'static Router {
        INSTANCE.get_or_init(|| {
            tracing::debug!("Router initialized");
            Router::new()
        })
    }

    /// Register every route declared on `T`.
    pub fn register<T: Controller + Default>(&self) -> RouterResult<&Self> {
        self.register_all(&[ControllerType::of::<T>()])
    }

    /// Register a batch of controllers. Nothing is committed if any of them fails discovery.
    pub fn register_all(&self, controllers: &[ControllerType]) -> RouterResult<&Self> {
        let scanned = match scan_all(controllers) {
            Ok(scanned) => scanned,
            Err(e) => {
                tracing::error!(error = %e, "Route registration aborted");
                return Err(e);
            }
        };

        let count = scanned.len();
        let added = self.commit(scanned);

        for controller in controllers {
            tracing::info!(controller = controller.name(), "Controller registered");
        }
        tracing::info!(routes = count, added, "Routes registered");
        Ok(self)
    }

    /// Bind one route directly. Overwrites any handler already at `(method, path)`.
    pub fn add_route(&self, method: HttpMethod, path: impl Into<String>, handler: Handler) -> &Self {
        self.commit(vec![ScannedRoute {
            method,
            path: path.into(),
            handler,
        }]);
        self
    }

    pub fn get(&self, path: impl Into<String>, handler: Handler) -> &Self {
        self.add_route(HttpMethod::Get, path, handler)
    }

    pub fn post(&self, path: impl Into<String>, handler: Handler) -> &Self {
        self.add_route(HttpMethod::Post, path, handler)
    }

    pub fn put(&self, path: impl Into<String>, handler: Handler) -> &Self {
        self.add_route(HttpMethod::Put, path, handler)
    }

    pub fn head(&self, path: impl Into<String>, handler: Handler) -> &Self {
        self.add_route(HttpMethod::Head, path, handler)
    }

    pub fn delete(&self, path: impl Into<String>, handler: Handler) -> &Self {
        self.add_route(HttpMethod::Delete, path, handler)
    }

    /// Resolve a request and run its handler.
    pub fn resolve(&self, method: &str, uri: &str) -> RouterResult<Value> {
        let table = self.routes.load();
        let result = dispatch(&table, method, uri);
        metrics::record_resolution(match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        });
        result
    }

    /// Snapshot of the current route table.
    pub fn routes(&self) -> Arc<RouteTable> {
        self.routes.load_full()
    }

    /// Publish `scanned` as one new table. Returns how many routes were new.
    fn commit(&self, scanned: Vec<ScannedRoute>) -> usize {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut table = RouteTable::clone(&self.routes.load());
        let mut added = 0;
        for route in scanned {
            let ScannedRoute {
                method,
                path,
                handler,
            } = route;
            let new_target = handler.to_string();
            if let Some(old) = table.insert(method, path.clone(), handler) {
                tracing::warn!(
                    method = %method,
                    path = %path,
                    replaced = %old,
                    with = %new_target,
                    "Route overwritten"
                );
                metrics::record_replaced(method.as_str());
            } else {
                added += 1;
            }
        }
        self.routes.store(Arc::new(table));
        metrics::record_registered(added);
        added
    }
}

impl Serialize for Router {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom(SERIALIZE_VIOLATION))
    }
}

impl<'de> Deserialize<'de> for Router {
    fn deserialize<D: Deserializer<'de>>(_deserializer: D) -> Result<Self, D::Error> {
        Err(serde::de::Error::custom(DESERIALIZE_VIOLATION))
    }
}
