use crate::router::handle;
use crate::tests::utils::{body_string, get, init_bare_db, init_test_db};
use serde_json::Value;

#[test]
fn stats_returns_every_aggregate() {
    let t = init_test_db("api_stats");
    t.seed(
        "
        INSERT INTO cities (city_id, name) VALUES (1, 'A'), (2, 'B');
        INSERT INTO neighborhoods (neighborhood_id, city_id, name) VALUES (1, 1, 'n1');
        INSERT INTO listings (listing_id) VALUES (1), (2), (3);
        INSERT INTO listings_location (listing_id, neighborhood_id) VALUES (1, 1), (2, 1), (3, 1);
        INSERT INTO amenities (amenity_id, name) VALUES (1, 'Wifi');
        ",
    );

    let mut resp = handle(get("/api/stats"), &t.db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let v: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(v["listings"], 3);
    assert_eq!(v["amenities"], 1);
    assert_eq!(v["cities"], 2);
    assert_eq!(v["neighborhoods"], 1);
    assert_eq!(v["listings_by_city"][0]["city"], "A");
    assert_eq!(v["listings_by_city"][0]["listings"], 3);
}

#[test]
fn stats_nulls_only_what_failed() {
    let t = init_bare_db("api_no_schema");

    let mut resp = handle(get("/api/stats"), &t.db).unwrap();
    assert_eq!(resp.status(), 200);

    let v: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert!(v["listings"].is_null());
    assert!(v["listings_by_city"].is_null());
}
