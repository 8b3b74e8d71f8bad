//! Route discovery on controller types.
//!
//! # Data Flow
//! ```text
//! ControllerType
//!     → describe_routes() (method name + descriptor list)
//!     → reject paths holding a query string
//!     → (HttpMethod, path, Handler::Method) triples
//! ```

use crate::routing::error::{RouterError, RouterResult};
use crate::routing::handler::{ControllerType, Handler};
use crate::routing::method::HttpMethod;

/// One route produced by scanning a controller.
#[derive(Debug, Clone)]
pub struct ScannedRoute {
    pub method: HttpMethod,
    pub path: String,
    pub handler: Handler,
}

/// Extract every route declared on `controller`.
pub fn scan(controller: &ControllerType) -> RouterResult<Vec<ScannedRoute>> {
    let discovery_failed = |source| RouterError::Discovery {
        controller: controller.name(),
        source,
    };

    let declared = controller.describe().map_err(discovery_failed)?;
    let mut routes = Vec::with_capacity(declared.len());
    for route in declared {
        route.validate().map_err(discovery_failed)?;
        routes.push(ScannedRoute {
            method: route.descriptor.method,
            path: route.descriptor.path,
            handler: Handler::Method {
                controller: *controller,
                method: route.method_name.into(),
            },
        });
    }

    tracing::debug!(
        controller = controller.name(),
        routes = routes.len(),
        "Scanned controller"
    );
    Ok(routes)
}

/// Scan a batch of controllers. The first failure discards the whole batch.
pub fn scan_all(controllers: &[ControllerType]) -> RouterResult<Vec<ScannedRoute>> {
    let mut routes = Vec::new();
    for controller in controllers {
        routes.extend(scan(controller)?);
    }
    Ok(routes)
}
