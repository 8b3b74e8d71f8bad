//! User endpoints.

use serde_json::{json, Value};

use crate::controller_routes;
use crate::routing::{HandlerResult, QueryParams};

/// Demonstration controller answering the `/RestfullAPI/user-get` family of routes.
#[derive(Debug, Default)]
pub struct User;

impl User {
    /// Echo the received query parameters.
    pub fn user_get(&mut self, params: &QueryParams) -> HandlerResult {
        Ok(json!({ "params": params }))
    }

    pub fn user_post(&mut self, _params: &QueryParams) -> HandlerResult {
        Ok(Value::Null)
    }

    pub fn user_put(&mut self, _params: &QueryParams) -> HandlerResult {
        Ok(Value::Null)
    }

    pub fn user_delete(&mut self, _params: &QueryParams) -> HandlerResult {
        Ok(Value::Null)
    }
}

controller_routes! {
    User {
        user_get => [get("/RestfullAPI/user-get")],
        user_post => [post("/user-post")],
        user_put => [put("/user-put")],
        user_delete => [delete("/user-delete")],
    }
}
