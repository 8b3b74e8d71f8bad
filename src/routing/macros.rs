//! Declarative route tables for controllers.

/// Implement [`Controller`](crate::routing::Controller) from a route table.
///
/// Each entry names a method on the controller followed by the routes bound
/// to it. A method may carry any number of routes, or none. The bound
/// methods must have the signature
/// `fn(&mut self, &QueryParams) -> HandlerResult`.
///
/// Route forms:
/// - `get(path)`, `post(path)`, `put(path)`, `head(path)`, `delete(path)`
/// - `route(path)` binds GET
/// - `route(path, verb)` takes the verb as a string, checked at discovery
///
/// ```
/// use verb_router::controller_routes;
/// use verb_router::routing::{Controller, HandlerResult, QueryParams};
///
/// #[derive(Default)]
/// struct Health;
///
/// impl Health {
///     fn check(&mut self, _params: &QueryParams) -> HandlerResult {
///         Ok("ok".into())
///     }
/// }
///
/// controller_routes! {
///     Health {
///         check => [get("/health"), head("/health")],
///     }
/// }
///
/// assert_eq!(Health::describe_routes().unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! controller_routes {
    (@route $name:ident, get($path:expr)) => {
        $crate::controller_routes!(@fixed $name, get, $path)
    };
    (@route $name:ident, post($path:expr)) => {
        $crate::controller_routes!(@fixed $name, post, $path)
    };
    (@route $name:ident, put($path:expr)) => {
        $crate::controller_routes!(@fixed $name, put, $path)
    };
    (@route $name:ident, head($path:expr)) => {
        $crate::controller_routes!(@fixed $name, head, $path)
    };
    (@route $name:ident, delete($path:expr)) => {
        $crate::controller_routes!(@fixed $name, delete, $path)
    };
    (@route $name:ident, route($path:expr)) => {
        $crate::routing::MethodRoute::generic(::std::stringify!($name), $path, ::std::option::Option::None)
    };
    (@route $name:ident, route($path:expr, $verb:expr)) => {
        $crate::routing::MethodRoute::generic(::std::stringify!($name), $path, ::std::option::Option::Some($verb))
    };

    (@fixed $name:ident, $ctor:ident, $path:expr) => {
        ::std::result::Result::<_, $crate::routing::DiscoveryError>::Ok(
            $crate::routing::MethodRoute::new(
                ::std::stringify!($name),
                $crate::routing::RouteDescriptor::$ctor($path),
            ),
        )
    };

    (
        $controller:ty {
            $( $method:ident => [ $( $verb:ident ( $( $arg:expr ),+ ) ),* $(,)? ] ),* $(,)?
        }
    ) => {
        impl $crate::routing::Controller for $controller {
            fn describe_routes() -> ::std::result::Result<
                ::std::vec::Vec<$crate::routing::MethodRoute>,
                $crate::routing::DiscoveryError,
            > {
                #[allow(unused_mut)]
                let mut routes = ::std::vec::Vec::new();
                $( $(
                    routes.push($crate::controller_routes!(@route $method, $verb( $( $arg ),+ ))?);
                )* )*
                ::std::result::Result::Ok(routes)
            }

            fn invoke(
                &mut self,
                method: &str,
                params: &$crate::routing::QueryParams,
            ) -> ::std::option::Option<$crate::routing::HandlerResult> {
                match method {
                    $( ::std::stringify!($method) => ::std::option::Option::Some(self.$method(params)), )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}
