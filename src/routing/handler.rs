//! Handler references and the controller capability.
//!
//! # Responsibilities
//! - Describe a controller's routes without instantiating it
//! - Reference either a bare closure or a (controller, method) pair
//!
//! # Design Decisions
//! - Controllers are type-erased into `ControllerType` at registration time
//! - Instances are built lazily at dispatch, one per request
//! - Method lookup is by name so a stale route surfaces at dispatch, not at compile time

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::routing::descriptor::MethodRoute;
use crate::routing::error::DiscoveryError;
use crate::routing::query::QueryParams;

/// Error returned by a handler body.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of a handler invocation.
pub type HandlerResult = Result<Value, HandlerError>;

/// Signature of a bare handler closure.
pub type HandlerFn = dyn Fn(&QueryParams) -> HandlerResult + Send + Sync;

/// A type whose methods can be bound to routes.
///
/// Usually implemented through [`controller_routes!`](crate::controller_routes).
pub trait Controller: Send + 'static {
    /// List every route declared on this type's methods.
    fn describe_routes() -> Result<Vec<MethodRoute>, DiscoveryError>
    where
        Self: Sized;

    /// Call the method named `method`. Returns `None` if no such method exists.
    fn invoke(&mut self, method: &str, params: &QueryParams) -> Option<HandlerResult>;
}

/// Type-erased reference to a controller type.
#[derive(Clone, Copy)]
pub struct ControllerType {
    name: &'static str,
    describe: fn() -> Result<Vec<MethodRoute>, DiscoveryError>,
    construct: fn() -> Box<dyn Controller>,
}

impl ControllerType {
    pub fn of<T: Controller + Default>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            describe: T::describe_routes,
            construct: construct_default::<T>,
        }
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn describe(&self) -> Result<Vec<MethodRoute>, DiscoveryError> {
        (self.describe)()
    }

    /// Build a fresh instance through the type's default constructor.
    pub(crate) fn instantiate(&self) -> Box<dyn Controller> {
        (self.construct)()
    }
}

fn construct_default<T: Controller + Default>() -> Box<dyn Controller> {
    Box::new(T::default())
}

impl fmt::Debug for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ControllerType").field(&self.name).finish()
    }
}

impl PartialEq for ControllerType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// What a route points at.
#[derive(Clone)]
pub enum Handler {
    /// A closure invoked directly with the query parameters.
    Func(Arc<HandlerFn>),
    /// Instantiate `controller`, then call `method` on the new instance.
    Method {
        controller: ControllerType,
        method: Cow<'static, str>,
    },
}

impl Handler {
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&QueryParams) -> HandlerResult + Send + Sync + 'static,
    {
        Handler::Func(Arc::new(f))
    }

    pub fn method<T: Controller + Default>(method: impl Into<Cow<'static, str>>) -> Self {
        Handler::Method {
            controller: ControllerType::of::<T>(),
            method: method.into(),
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Func(_) => f.write_str("Func(..)"),
            Handler::Method { controller, method } => {
                write!(f, "Method({}::{})", controller.name(), method)
            }
        }
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Func(_) => f.write_str("<closure>"),
            Handler::Method { controller, method } => {
                write!(f, "{}::{}", controller.name(), method)
            }
        }
    }
}
