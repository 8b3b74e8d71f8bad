//! Route table storage.
//!
//! # Responsibilities
//! - Map (method, path) to a handler
//! - Provide the single insertion primitive used by every registration path
//!
//! # Design Decisions
//! - Two-level map: method bucket, then exact path
//! - Buckets are created on first insert for a method
//! - Last insert for a (method, path) wins; the replaced handler is returned to the caller

use std::collections::HashMap;

use crate::routing::handler::Handler;
use crate::routing::method::HttpMethod;

/// In-memory mapping of methods and paths to handlers.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    buckets: HashMap<HttpMethod, HashMap<String, Handler>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite one route. Returns the handler previously bound there.
    pub fn insert(
        &mut self,
        method: HttpMethod,
        path: impl Into<String>,
        handler: Handler,
    ) -> Option<Handler> {
        self.buckets
            .entry(method)
            .or_default()
            .insert(path.into(), handler)
    }

    /// Exact lookup. A missing bucket and a missing path look the same.
    pub fn lookup(&self, method: HttpMethod, path: &str) -> Option<&Handler> {
        self.buckets.get(&method).and_then(|bucket| bucket.get(path))
    }

    /// Number of registered routes across all methods.
    pub fn len(&self) -> usize {
        self.buckets.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a bucket exists for `method`.
    #[cfg(test)]
    fn has_bucket(&self, method: HttpMethod) -> bool {
        self.buckets.contains_key(&method)
    }

    /// Every route, sorted by method then path.
    pub fn entries(&self) -> Vec<(HttpMethod, &str, &Handler)> {
        let mut entries: Vec<_> = self
            .buckets
            .iter()
            .flat_map(|(method, bucket)| {
                bucket
                    .iter()
                    .map(move |(path, handler)| (*method, path.as_str(), handler))
            })
            .collect();
        entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        entries
    }
}
