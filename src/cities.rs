/// Cities covered by the dataset snapshot. The selector offers these,
/// with the "All Cities" sentinel prepended at render time.
pub const CITIES: &[&str] = &[
    "Asheville",
    "Austin",
    "Boston",
    "Chicago",
    "Denver",
    "Los Angeles",
    "Nashville",
    "New Orleans",
    "Portland",
    "San Diego",
    "San Francisco",
    "Seattle",
];
