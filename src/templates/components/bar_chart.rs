use crate::domain::metrics::CityListingCount;
use maud::{html, Markup};

// Single brand color for every bar.
const BAR_COLOR: &str = "#3c8a5d";
const BAR_OPACITY: &str = "0.7";

const LABEL_W: i64 = 140;
const BAR_AREA_W: i64 = 320;
const VALUE_GUTTER_W: i64 = 48;
const ROW_H: i64 = 24;

/// Horizontal bar chart: city names down the categorical axis, counts
/// along the quantitative axis, no axis titles. Bars are sorted
/// descending by count here; the query makes no ordering promise.
/// An empty result set renders the chart frame with zero bars.
pub fn bar_chart(title: &str, rows: &[CityListingCount]) -> Markup {
    let mut sorted: Vec<&CityListingCount> = rows.iter().collect();
    sorted.sort_by(|a, b| b.listings.cmp(&a.listings).then_with(|| a.city.cmp(&b.city)));

    let max = sorted.first().map(|r| r.listings).unwrap_or(0).max(1);
    let width = LABEL_W + BAR_AREA_W + VALUE_GUTTER_W;
    let height = (sorted.len() as i64 * ROW_H).max(ROW_H);

    html! {
        figure class="chart" {
            figcaption { (title) }
            svg
                xmlns="http://www.w3.org/2000/svg"
                width=(width)
                height=(height)
                viewBox=(format!("0 0 {width} {height}"))
                role="img"
                aria-label=(title)
            {
                @for (i, row) in sorted.iter().enumerate() {
                    @let y = i as i64 * ROW_H;
                    @let bar_w = ((row.listings as f64 / max as f64) * BAR_AREA_W as f64)
                        .round()
                        .max(1.0) as i64;
                    text
                        x=(LABEL_W - 8)
                        y=(y + 16)
                        text-anchor="end"
                        font-size="12"
                    { (row.city) }
                    rect
                        x=(LABEL_W)
                        y=(y + 3)
                        width=(bar_w)
                        height=(ROW_H - 6)
                        fill=(BAR_COLOR)
                        fill-opacity=(BAR_OPACITY)
                    {}
                    text
                        x=(LABEL_W + bar_w + 6)
                        y=(y + 16)
                        font-size="12"
                        fill="#6b7280"
                    { (row.listings) }
                }
            }
        }
    }
}
