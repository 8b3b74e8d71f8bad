//! Router metrics.
//!
//! # Metrics
//! - `router_routes_registered_total` (counter): routes added at a new (method, path)
//! - `router_routes_replaced_total` (counter): registrations that overwrote a route
//! - `router_resolutions_total` (counter): resolutions by outcome
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; no exporter is installed here
//! - Outcome labels mirror `RouterError::kind`

use metrics::counter;

/// Record routes added at a (method, path) that was previously free.
pub fn record_registered(count: usize) {
    counter!("router_routes_registered_total").increment(count as u64);
}

/// Record a registration that replaced an existing route.
pub fn record_replaced(method: &'static str) {
    counter!("router_routes_replaced_total", "method" => method).increment(1);
}

/// Record one resolution outcome (`ok` or an error kind).
pub fn record_resolution(outcome: &'static str) {
    counter!("router_resolutions_total", "outcome" => outcome).increment(1);
}
