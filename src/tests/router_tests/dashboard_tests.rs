use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_bare_db, init_test_db};

const SMALL_FIXTURE: &str = "
    INSERT INTO cities (city_id, name) VALUES (1, 'Boston'), (2, 'Seattle');
    INSERT INTO neighborhoods (neighborhood_id, city_id, name)
        VALUES (1, 1, 'Back Bay'), (2, 2, 'Fremont');
    INSERT INTO listings (listing_id) VALUES (1), (2), (3);
    INSERT INTO listings_location (listing_id, neighborhood_id)
        VALUES (1, 1), (2, 1), (3, 2);
";

#[test]
fn home_renders_metrics_and_chart() {
    let t = init_test_db("dash_home");
    t.seed(SMALL_FIXTURE);

    let mut resp = handle(get("/"), &t.db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Unique Areas"));
    assert!(body.contains("Neighborhoods"));
    assert!(body.contains("Listings"));
    assert!(body.contains("Listings by City"));
    assert!(body.contains("<svg"));
    assert!(body.contains("Boston"));
    assert!(body.contains("Seattle"));
}

#[test]
fn home_renders_on_empty_store() {
    let t = init_test_db("dash_empty");

    let mut resp = handle(get("/"), &t.db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Listings by City"));
    assert!(body.contains("<svg"));
    // Zero rows means zero bars, not an error.
    assert!(!body.contains("<rect"));
    assert!(!body.contains("Chart unavailable"));
}

#[test]
fn home_renders_placeholders_when_schema_is_missing() {
    let t = init_bare_db("dash_no_schema");

    let mut resp = handle(get("/"), &t.db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    // Every metric degrades on its own; the page itself still renders.
    assert!(body.contains("N/A"));
    assert!(body.contains("Chart unavailable"));
}

#[test]
fn listings_metric_is_abbreviated() {
    let t = init_test_db("dash_millify");

    let mut fixture = String::from("INSERT INTO listings (listing_id) VALUES (1)");
    for id in 2..=1200 {
        fixture.push_str(&format!(", ({id})"));
    }
    fixture.push(';');
    t.seed(&fixture);

    let mut resp = handle(get("/"), &t.db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("1.2K"), "listings metric was not abbreviated");
}

#[test]
fn city_selector_reflects_the_query_parameter() {
    let t = init_test_db("dash_selector");

    let mut resp = handle(get("/?city=Boston"), &t.db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("value=\"Boston\" selected"));

    // Form-encoded spaces decode before the lookup.
    let mut resp = handle(get("/?city=New+Orleans"), &t.db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("value=\"New Orleans\" selected"));

    // Unknown cities fall back to the sentinel.
    let mut resp = handle(get("/?city=Atlantis"), &t.db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("value=\"All Cities\" selected"));
}

#[test]
fn unknown_paths_are_not_found() {
    let t = init_test_db("dash_not_found");

    let err = handle(get("/nope"), &t.db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(error_to_response(err).status(), 404);
}
