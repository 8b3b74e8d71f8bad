//! Route descriptors attached to controller methods.

use serde::Serialize;

use crate::routing::error::DiscoveryError;
use crate::routing::method::HttpMethod;

/// An immutable (verb, path) pair declared on a handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteDescriptor {
    pub method: HttpMethod,
    pub path: String,
}

impl RouteDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn head(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Head, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }
}

/// One descriptor bound to the name of the controller method it decorates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRoute {
    pub method_name: &'static str,
    pub descriptor: RouteDescriptor,
}

impl MethodRoute {
    /// Build a route from an explicit verb.
    pub fn new(method_name: &'static str, descriptor: RouteDescriptor) -> Self {
        Self {
            method_name,
            descriptor,
        }
    }

    /// Build a route from the generic form, where the verb is a free string.
    ///
    /// `None` means GET. The verb is checked here so a bad declaration fails
    /// discovery instead of producing a route nobody can reach.
    pub fn generic(
        method_name: &'static str,
        path: &str,
        verb: Option<&str>,
    ) -> Result<Self, DiscoveryError> {
        let method = match verb {
            None => HttpMethod::Get,
            Some(v) => v.parse().map_err(|_| DiscoveryError::UnknownVerb {
                method: method_name.to_string(),
                verb: v.to_string(),
            })?,
        };
        Ok(Self::new(method_name, RouteDescriptor::new(method, path)))
    }

    /// Reject a declared path that can never be looked up.
    ///
    /// Request paths are cut at the first `?`, so a declared path containing
    /// one is unreachable. Any other string is matched exactly as written.
    pub fn validate(&self) -> Result<(), DiscoveryError> {
        let path = &self.descriptor.path;
        if path.contains('?') {
            return Err(DiscoveryError::MalformedPath {
                method: self.method_name.to_string(),
                path: path.clone(),
                reason: "path must not contain a query string",
            });
        }
        Ok(())
    }
}
