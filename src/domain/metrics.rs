use serde::Serialize;

/// One row of the per-city rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityListingCount {
    pub city: String,
    pub listings: i64,
}

/// Aggregates as served by `GET /api/stats`. Each field is `None` when
/// its query failed, so one broken aggregate nulls only itself.
#[derive(Debug, Serialize)]
pub struct DatasetStats {
    pub listings: Option<i64>,
    pub amenities: Option<i64>,
    pub cities: Option<i64>,
    pub neighborhoods: Option<i64>,
    pub listings_by_city: Option<Vec<CityListingCount>>,
}

/// Human-abbreviated count for metric display: 1200 becomes "1.2K",
/// 1_000_000 becomes "1M". Values under a thousand pass through.
pub fn abbreviate_count(n: i64) -> String {
    const UNITS: &[(i64, &str)] = &[(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for &(scale, suffix) in UNITS {
        if n.abs() >= scale {
            let value = (n as f64 / scale as f64 * 10.0).round() / 10.0;
            return if value == value.trunc() {
                format!("{}{suffix}", value as i64)
            } else {
                format!("{value:.1}{suffix}")
            };
        }
    }
    n.to_string()
}
