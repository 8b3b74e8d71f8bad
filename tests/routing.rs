//! End-to-end tests against the process-wide router.
//!
//! Tests in this file share one router, so each uses its own paths.

use std::sync::Arc;
use std::thread;

use serde_json::json;
use verb_router::routing::{ControllerType, Handler, HttpMethod, Router, RouterError};

mod common;

use common::{Accounts, Invoices, Malformed, Orphan, Relative, Stale, Users, UsersV2};

#[test]
fn test_instance_is_shared() {
    let a = Router::instance();
    let b = Router::instance();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_instance_race_builds_one_router() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| Router::instance() as *const Router as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(addrs[0], Router::instance() as *const Router as usize);
}

#[test]
fn test_end_to_end_user_get() {
    let router = Router::instance().register::<Users>().unwrap();

    let value = router
        .resolve("GET", "/RestfullAPI/user-get?name=Alice")
        .unwrap();
    assert_eq!(value["handler"], "user_get");
    assert_eq!(value["params"], json!({ "name": ["Alice"] }));

    let value = Router::instance()
        .resolve("get", "/RestfullAPI/user-get")
        .unwrap();
    assert_eq!(value["handler"], "user_get");
    assert_eq!(value["params"], json!({}));
}

#[test]
fn test_query_string_delivered_as_params() {
    let router = Router::instance().register::<Users>().unwrap();
    let value = router.resolve("GET", "/user-get?id=5").unwrap();
    assert_eq!(value["params"], json!({ "id": ["5"] }));
}

#[test]
fn test_fresh_controller_per_request() {
    let router = Router::instance().register::<Users>().unwrap();
    for _ in 0..3 {
        assert_eq!(router.resolve("GET", "/user-get").unwrap()["served"], 1);
    }
}

#[test]
fn test_multiple_descriptors_on_one_method() {
    let router = Router::instance().register::<Users>().unwrap();
    for verb in ["POST", "PUT", "DELETE"] {
        let value = router.resolve(verb, "/users/write?v=1").unwrap();
        assert_eq!(value["handler"], "user_write", "{verb}");
    }
    assert!(router.resolve("GET", "/users/write").unwrap_err().is_not_found());
}

#[test]
fn test_unregistered_path_not_found() {
    let err = Router::instance()
        .resolve("GET", "/does-not-exist")
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_unknown_verb_distinct_from_not_found() {
    Router::instance().register::<Users>().unwrap();
    let err = Router::instance().resolve("PATCH", "/user-get").unwrap_err();
    assert!(matches!(err, RouterError::UnsupportedMethod(ref m) if m == "PATCH"));
}

#[test]
fn test_last_registration_wins() {
    let router = Router::instance();
    router.post("/overwrite/target", Handler::func(|_| Ok(json!("closure"))));
    assert_eq!(router.resolve("POST", "/overwrite/target").unwrap(), "closure");

    router.register::<UsersV2>().unwrap();
    assert_eq!(
        router.resolve("POST", "/overwrite/target").unwrap()["handler"],
        "v2"
    );
}

#[test]
fn test_registrations_accumulate() {
    let router = Router::instance();
    router.add_route(HttpMethod::Head, "/accumulate/one", Handler::func(|_| Ok(json!(1))));
    router.add_route(HttpMethod::Head, "/accumulate/two", Handler::func(|_| Ok(json!(2))));

    let routes = Router::instance().routes();
    assert!(routes.lookup(HttpMethod::Head, "/accumulate/one").is_some());
    assert!(routes.lookup(HttpMethod::Head, "/accumulate/two").is_some());
    assert_eq!(router.resolve("head", "/accumulate/one").unwrap(), 1);
}

#[test]
fn test_controller_registrations_accumulate() {
    let router = Router::instance();
    router.register::<Accounts>().unwrap();
    router.register::<Invoices>().unwrap();

    assert_eq!(router.resolve("GET", "/accounts").unwrap(), "accounts");
    assert_eq!(router.resolve("GET", "/invoices").unwrap(), "invoices");
    assert_eq!(router.resolve("DELETE", "/invoices").unwrap(), "invoices");
}

#[test]
fn test_declared_paths_match_exactly_as_written() {
    let router = Router::instance().register::<Relative>().unwrap();

    assert_eq!(router.resolve("GET", "relative/users").unwrap(), "relative");
    assert_eq!(router.resolve("GET", "?a=1").unwrap(), "relative");
    assert!(router.resolve("GET", "/relative/users").unwrap_err().is_not_found());

    router.get("relative/direct", Handler::func(|_| Ok(json!("direct"))));
    assert_eq!(router.resolve("GET", "relative/direct").unwrap(), "direct");
}

#[test]
fn test_discovery_failure_aborts_whole_batch() {
    let router = Router::instance();
    let batch = [ControllerType::of::<Orphan>(), ControllerType::of::<Malformed>()];

    let err = router.register_all(&batch).err().unwrap();
    match err {
        RouterError::Discovery { controller, .. } => assert!(controller.ends_with("Malformed")),
        other => panic!("unexpected error {other:?}"),
    }

    let routes = router.routes();
    assert!(routes.lookup(HttpMethod::Get, "/orphan/show").is_none());
    assert!(routes.lookup(HttpMethod::Get, "/malformed/ok").is_none());
}

#[test]
fn test_unreachable_method_is_not_found() {
    let router = Router::instance().register::<Stale>().unwrap();
    assert!(router.resolve("GET", "/stale").unwrap_err().is_not_found());
}

#[test]
fn test_router_cannot_be_serialized() {
    assert!(serde_json::to_value(Router::instance()).is_err());
    assert!(serde_json::from_str::<Router>("null").is_err());
}

#[test]
fn test_concurrent_resolution_during_registration() {
    let router = Router::instance();
    router.get("/concurrent/base", Handler::func(|_| Ok(json!("base"))));

    let counter = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let counter = counter.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    let value = Router::instance().resolve("GET", "/concurrent/base").unwrap();
                    assert_eq!(value, "base");
                    counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                }
            })
        })
        .collect();

    for i in 0..50 {
        router.put(format!("/concurrent/{i}"), Handler::func(move |_| Ok(json!(i))));
    }
    for r in readers {
        r.join().unwrap();
    }

    assert_eq!(counter.load(std::sync::atomic::Ordering::Relaxed), 800);
    assert_eq!(router.resolve("PUT", "/concurrent/49").unwrap(), 49);
}
