use crate::errors::ServerError;
use maud::{html, Markup};

/// A labeled scalar metric. A failed aggregate renders a placeholder in
/// place of its value so the rest of the page is unaffected.
pub fn metric(label: &str, value: Result<String, &ServerError>) -> Markup {
    html! {
        div class="metric" {
            span class="metric-label" { (label) }
            @match value {
                Ok(v) => {
                    span class="metric-value" { (v) }
                }
                Err(e) => {
                    span class="metric-value metric-error" title=(e.to_string()) { "N/A" }
                }
            }
        }
    }
}
