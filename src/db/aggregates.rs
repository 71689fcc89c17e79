//! Read-only aggregate queries over the listings dataset.
//!
//! One named function per aggregate so each can be tested on its own
//! against a fixture database. Every call is a single best-effort
//! query; callers own any retry policy.

use crate::db::connection::Database;
use crate::domain::metrics::CityListingCount;
use crate::errors::{classify_sqlite, ServerError};

const SQL_LISTINGS_BY_CITY: &str = include_str!("../../sql/listings_by_city.sql");

/// Total distinct listing ids.
pub fn count_listings(db: &Database) -> Result<i64, ServerError> {
    scalar_count(db, "SELECT COUNT(DISTINCT listing_id) FROM listings")
}

/// Total distinct amenity ids.
pub fn count_amenities(db: &Database) -> Result<i64, ServerError> {
    scalar_count(db, "SELECT COUNT(DISTINCT amenity_id) FROM amenities")
}

/// Total distinct city ids.
pub fn count_cities(db: &Database) -> Result<i64, ServerError> {
    scalar_count(db, "SELECT COUNT(DISTINCT city_id) FROM cities")
}

/// Total distinct neighborhood ids.
pub fn count_neighborhoods(db: &Database) -> Result<i64, ServerError> {
    scalar_count(db, "SELECT COUNT(DISTINCT neighborhood_id) FROM neighborhoods")
}

/// Listing counts per city, via listings -> location -> neighborhood -> city.
///
/// Inner-join semantics: cities with no listings are omitted, and a
/// listing whose location does not resolve is excluded here even though
/// `count_listings` still counts it. Row order is whatever SQLite
/// produces; sorting belongs to the caller.
pub fn listings_by_city(db: &Database) -> Result<Vec<CityListingCount>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(SQL_LISTINGS_BY_CITY).map_err(classify_sqlite)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(CityListingCount {
                    city: row.get::<_, String>(0)?,
                    listings: row.get::<_, i64>(1)?,
                })
            })
            .map_err(classify_sqlite)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(classify_sqlite)?);
        }
        Ok(out)
    })
}

/// Listings that do not resolve to a city: the location row is missing,
/// or it points at a neighborhood or city that does not exist.
pub fn count_unlocated_listings(db: &Database) -> Result<i64, ServerError> {
    scalar_count(
        db,
        "SELECT COUNT(DISTINCT l.listing_id)
         FROM listings l
         LEFT JOIN listings_location ll ON ll.listing_id = l.listing_id
         LEFT JOIN neighborhoods nb ON nb.neighborhood_id = ll.neighborhood_id
         LEFT JOIN cities c ON c.city_id = nb.city_id
         WHERE c.city_id IS NULL",
    )
}

/// Warn when the per-city rollup drops listings the total count includes.
/// Orphans are documented inner-join behavior, never a silent fix.
pub fn flag_unlocated_listings(db: &Database, total_listings: i64, by_city: &[CityListingCount]) {
    let rolled_up: i64 = by_city.iter().map(|row| row.listings).sum();
    if rolled_up == total_listings {
        return;
    }

    match count_unlocated_listings(db) {
        Ok(orphans) => tracing::warn!(
            total_listings,
            rolled_up,
            orphans,
            "listings without a resolvable city are missing from the rollup"
        ),
        Err(e) => tracing::warn!(
            total_listings,
            rolled_up,
            error = %e,
            "rollup total does not match the listing count"
        ),
    }
}

fn scalar_count(db: &Database, sql: &str) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(sql, [], |row| row.get::<_, i64>(0))
            .map_err(classify_sqlite)
    })
}
