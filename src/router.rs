use crate::db::{aggregates, Database};
use crate::domain::metrics::DatasetStats;
use crate::domain::selection::CitySelection;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates::pages::{home_page, HomeVm};
use astra::Request;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let params = parse_query(&req);
            let selection = CitySelection::from_query(params.get("city").map(String::as_str));
            dashboard(db, selection)
        }
        ("GET", "/api/stats") => api_stats(db),
        _ => Err(ServerError::NotFound),
    }
}

/// One page load runs the aggregates in sequence. Each result stays
/// separate so a failed query only blanks its own metric.
fn dashboard(db: &Database, selection: CitySelection) -> ResultResp {
    let listings_count = aggregates::count_listings(db);
    let cities_count = aggregates::count_cities(db);
    let neighborhoods_count = aggregates::count_neighborhoods(db);
    let listings_by_city = aggregates::listings_by_city(db);

    if let (Ok(total), Ok(rows)) = (&listings_count, &listings_by_city) {
        aggregates::flag_unlocated_listings(db, *total, rows);
    }

    let vm = HomeVm {
        selection,
        cities_count,
        neighborhoods_count,
        listings_count,
        listings_by_city,
    };
    html_response(home_page(&vm))
}

fn api_stats(db: &Database) -> ResultResp {
    let listings = aggregates::count_listings(db).ok();
    let listings_by_city = aggregates::listings_by_city(db).ok();

    if let (Some(total), Some(rows)) = (listings, &listings_by_city) {
        aggregates::flag_unlocated_listings(db, total, rows);
    }

    let stats = DatasetStats {
        listings,
        amenities: aggregates::count_amenities(db).ok(),
        cities: aggregates::count_cities(db).ok(),
        neighborhoods: aggregates::count_neighborhoods(db).ok(),
        listings_by_city,
    };
    json_response(&stats)
}

fn parse_query(req: &astra::Request) -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), decode_component(v));
            }
        }
    }

    map
}

// Just enough form decoding for the selector: '+' and %XX escapes.
fn decode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut bytes = raw.bytes();

    while let Some(b) = bytes.next() {
        match b {
            b'+' => out.push(' '),
            b'%' => {
                let hi = bytes.next();
                let lo = bytes.next();
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        let pair = [hi, lo];
                        let hex = std::str::from_utf8(&pair).ok();
                        match hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                            Some(decoded) => out.push(decoded as char),
                            None => {
                                out.push('%');
                                out.push(hi as char);
                                out.push(lo as char);
                            }
                        }
                    }
                    _ => out.push('%'),
                }
            }
            other => out.push(other as char),
        }
    }

    out
}
