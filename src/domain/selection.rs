use crate::cities::CITIES;

/// Sentinel offered ahead of the fixed city list.
pub const ALL_CITIES: &str = "All Cities";

/// The city selector value, carried explicitly from the request into
/// rendering instead of living in ambient session state.
///
/// This is the documented filter hook for the aggregates: today the
/// dashboard's aggregate queries are unconditional over the whole
/// dataset, and the selection only drives which option the selector
/// shows. Filtering, when it lands, takes this value as its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitySelection {
    All,
    City(String),
}

impl CitySelection {
    /// Parse the `?city=` query value. Anything that is not a known
    /// city falls back to `All`; the selector cannot submit a value
    /// outside the fixed list, so an unknown one is just noise.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            None => CitySelection::All,
            Some(value) if value == ALL_CITIES => CitySelection::All,
            Some(value) => {
                if CITIES.contains(&value) {
                    CitySelection::City(value.to_string())
                } else {
                    tracing::debug!(value, "ignoring unknown city selection");
                    CitySelection::All
                }
            }
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CitySelection::All => ALL_CITIES,
            CitySelection::City(name) => name,
        }
    }
}
