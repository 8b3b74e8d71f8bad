//! Shared controllers for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use verb_router::controller_routes;
use verb_router::routing::{
    Controller, DiscoveryError, HandlerResult, MethodRoute, QueryParams, RouteDescriptor,
};

/// Mirrors the demonstration user controller.
#[derive(Default)]
pub struct Users {
    served: u32,
}

impl Users {
    fn user_get(&mut self, params: &QueryParams) -> HandlerResult {
        self.served += 1;
        Ok(json!({ "handler": "user_get", "served": self.served, "params": params }))
    }

    fn user_write(&mut self, params: &QueryParams) -> HandlerResult {
        Ok(json!({ "handler": "user_write", "params": params }))
    }
}

controller_routes! {
    Users {
        user_get => [get("/RestfullAPI/user-get"), get("/user-get")],
        user_write => [post("/users/write"), put("/users/write"), route("/users/write", "delete")],
    }
}

/// Replaces `/users/write` for POST.
#[derive(Default)]
pub struct UsersV2;

impl UsersV2 {
    fn write(&mut self, _params: &QueryParams) -> HandlerResult {
        Ok(json!({ "handler": "v2" }))
    }
}

controller_routes! {
    UsersV2 {
        write => [post("/v2/write"), post("/overwrite/target")],
    }
}

/// Controller registered only in the batch-abort test.
#[derive(Default)]
pub struct Orphan;

impl Orphan {
    fn show(&mut self, _params: &QueryParams) -> HandlerResult {
        Ok(Value::Null)
    }
}

controller_routes! {
    Orphan {
        show => [get("/orphan/show")],
    }
}

/// Declares a route whose verb does not exist.
#[derive(Default)]
pub struct Malformed;

impl Controller for Malformed {
    fn describe_routes() -> Result<Vec<MethodRoute>, DiscoveryError> {
        Ok(vec![
            MethodRoute::new("ok", RouteDescriptor::get("/malformed/ok")),
            MethodRoute::generic("bad", "/malformed/bad", Some("patch"))?,
        ])
    }

    fn invoke(&mut self, _method: &str, _params: &QueryParams) -> Option<HandlerResult> {
        Some(Ok(Value::Null))
    }
}

/// Routes to a method name that `invoke` does not know.
#[derive(Default)]
pub struct Stale;

impl Controller for Stale {
    fn describe_routes() -> Result<Vec<MethodRoute>, DiscoveryError> {
        Ok(vec![MethodRoute::new("renamed", RouteDescriptor::get("/stale"))])
    }

    fn invoke(&mut self, _method: &str, _params: &QueryParams) -> Option<HandlerResult> {
        None
    }
}

/// Declares paths without a leading slash, and the empty path.
#[derive(Default)]
pub struct Relative;

impl Relative {
    fn show(&mut self, _params: &QueryParams) -> HandlerResult {
        Ok(json!("relative"))
    }
}

controller_routes! {
    Relative {
        show => [get("relative/users"), get("")],
    }
}

/// First of two controllers registered in separate calls.
#[derive(Default)]
pub struct Accounts;

impl Accounts {
    fn list(&mut self, _params: &QueryParams) -> HandlerResult {
        Ok(json!("accounts"))
    }
}

controller_routes! {
    Accounts {
        list => [get("/accounts")],
    }
}

/// Second of two controllers registered in separate calls.
#[derive(Default)]
pub struct Invoices;

impl Invoices {
    fn list(&mut self, _params: &QueryParams) -> HandlerResult {
        Ok(json!("invoices"))
    }
}

controller_routes! {
    Invoices {
        list => [get("/invoices"), delete("/invoices")],
    }
}
