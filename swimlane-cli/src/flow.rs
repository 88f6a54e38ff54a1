//! The address-lookup interaction flow rendered by this binary
//!
//! Lanes and steps are static input data: the order of the list is the
//! order the diagram renders, top to bottom.

use swimlane_core::{Lane, Step};

pub fn lanes() -> Vec<Lane> {
    vec![
        Lane::new("frontend", "Frontend", 0.10),
        Lane::new("edge", "Cloudflare Edge", 0.37),
        Lane::new("worker", "Worker (Edge)", 0.65),
        Lane::new("os-places", "OS Places API", 0.90),
    ]
}

pub fn steps() -> Vec<Step> {
    vec![
        Step::arrow(
            "frontend",
            "edge",
            "GET /api/address-lookup?pc=CB97XU&dataset=LPI&maxresults=100",
        ),
        // Security stack at the edge, before Access
        Step::annotation(
            "edge",
            "WAF / Bot evaluation Skip via custom rule when CF-Access headers present",
        ),
        Step::arrow("edge", "frontend", "If blocked → 403 Cloudflare challenge page"),
        Step::annotation(
            "edge",
            "Access policy: Action = Service Auth Validate CF-Access-Client-Id/Secret (service token)",
        ),
        Step::arrow("edge", "frontend", "If missing/invalid → 302 to /cdn-cgi/access/login"),
        Step::arrow(
            "edge",
            "worker",
            "Service Auth OK → Route match /api/address-lookup/* (invoke Worker)",
        ),
        // Worker flow
        Step::arrow("frontend", "worker", "OPTIONS preflight (CORS) → 204 No Content"),
        Step::annotation(
            "worker",
            "Validate OS_PLACES_KEY • Parse + normalise postcode • Strict regex validation",
        ),
        Step::annotation(
            "worker",
            "Build cache key (pc/dataset/max + allow-list hash) Canonicalise path with trailing '/'",
        ),
        Step::arrow("worker", "edge", "Edge cache lookup (caches.default.match)"),
        Step::arrow(
            "edge",
            "frontend",
            "If HIT → 200 JSON (filtered) Headers: x-edge-cache: HIT, x-allowlist-hash, server-timing",
        ),
        Step::annotation(
            "worker",
            "MISS → Build OS URL fq: LOGICAL_STATUS_CODE:1; LPI_LOGICAL_STATUS_CODE:1 postal=1 → POSTAL_ADDRESS_CODE:(D L)",
        ),
        Step::arrow("worker", "os-places", "GET /search/places/v1/postcode"),
        Step::arrow("os-places", "worker", "200 OK → Full JSON payload"),
        Step::annotation(
            "worker",
            "Filter allow-list (CLASSIFICATION_CODE) Project to Slim (LPI/DPA) • Add LSB_PROPERTY_TYPE",
        ),
        Step::arrow("worker", "edge", "Store at edge (caches.default.put)"),
        Step::arrow(
            "edge",
            "frontend",
            "200 JSON (filtered, slim) Headers: x-edge-cache: MISS; cache-control: s-maxage; server-timing",
        ),
        // Error paths: upstream auth failures and timeouts
        Step::arrow("os-places", "worker", "401/403 (auth error)"),
        Step::arrow("worker", "edge", "Try STALE from edge cache"),
        Step::arrow("edge", "frontend", "Serve STALE 200 or 502 os_auth_failed"),
        Step::arrow("worker", "os-places", "Timeout/Other error on fetch"),
        Step::arrow("worker", "edge", "Try STALE from edge cache"),
        Step::arrow("edge", "frontend", "Serve STALE 200 or 504 os_timeout"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_references_a_known_lane() {
        let ids: Vec<String> = lanes().into_iter().map(|lane| lane.id).collect();
        for step in steps() {
            match step {
                Step::Arrow { from, to, .. } => {
                    assert!(ids.contains(&from), "unknown lane {from}");
                    assert!(ids.contains(&to), "unknown lane {to}");
                }
                Step::Annotation { lane, .. } => {
                    assert!(ids.contains(&lane), "unknown lane {lane}");
                }
            }
        }
    }

    #[test]
    fn flow_fits_the_default_slot_grid() {
        // 24 slots at the default margins/spacing; the flow has 23 steps.
        assert!(steps().len() <= 24);
    }
}
