use crate::cities::CITIES;
use crate::domain::metrics::{abbreviate_count, CityListingCount};
use crate::domain::selection::{CitySelection, ALL_CITIES};
use crate::errors::ServerError;
use crate::templates::{bar_chart, card, desktop_layout, metric};
use maud::{html, Markup};

/// Everything the home page needs, aggregated per-query so one failed
/// aggregate cannot take the others down with it.
pub struct HomeVm {
    pub selection: CitySelection,
    pub cities_count: Result<i64, ServerError>,
    pub neighborhoods_count: Result<i64, ServerError>,
    pub listings_count: Result<i64, ServerError>,
    pub listings_by_city: Result<Vec<CityListingCount>, ServerError>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Rental Advisor | Home",
        html! {
            main class="container" {
                h1 { "Rental Advisor" }

                (city_selector(&vm.selection))

                div class="columns" {
                    section {
                        p {
                            "Welcome to "
                            strong { "Rental Advisor" }
                            ". This app explores a large set of short-term rental \
                             listings and aims to provide actionable insights for \
                             hosts: explore select cities and find ways to maximize \
                             profitability, ratings, and visibility."
                        }

                        (card("Data Source", html! {
                            p {
                                "Listings data comes from a public scrape of \
                                 short-term rental sites, last updated March 2023. \
                                 Listings with no recent reviews were deemed \
                                 inactive and removed; host and listing ids were \
                                 anonymized and geocoordinates dropped for privacy."
                            }
                        }))

                        (card("Disclaimer", html! {
                            p {
                                "This dashboard is an exploratory tool, not a \
                                 substitute for professional advice or a nuanced \
                                 understanding of individual listings."
                            }
                        }))
                    }

                    section {
                        h3 { "Dataset Overview" }

                        div class="metric-row" {
                            (metric("Unique Areas", vm.cities_count.as_ref().map(|n| n.to_string())))
                            (metric("Neighborhoods", vm.neighborhoods_count.as_ref().map(|n| n.to_string())))
                            (metric("Listings", vm.listings_count.as_ref().map(|n| abbreviate_count(*n))))
                        }

                        @match &vm.listings_by_city {
                            Ok(rows) => {
                                (bar_chart("Listings by City", rows))
                            }
                            Err(e) => {
                                (card("Listings by City", html! {
                                    p class="metric-error" { "Chart unavailable: " (e) }
                                }))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn city_selector(selection: &CitySelection) -> Markup {
    html! {
        form method="get" action="/" {
            label for="city" { "Which city will we explore? " }
            select name="city" id="city" onchange="this.form.submit()" {
                option value=(ALL_CITIES) selected[*selection == CitySelection::All] {
                    (ALL_CITIES)
                }
                @for city in CITIES {
                    option
                        value=(city)
                        selected[selection.label() == *city]
                    { (city) }
                }
            }
        }
    }
}
