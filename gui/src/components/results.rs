// Material, labor and profit rows
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::state::app_state::ResultRow;

#[component]
pub fn ResultsArea(rows: Vec<ResultRow>, is_empty: bool) -> Element {
    let area_class = if is_empty { "results-area empty" } else { "results-area" };

    rsx! {
        section {
            class: area_class,
            aria_live: "polite",
            for row in rows {
                div {
                    key: "{row.component:?}",
                    class: row.css_class(),
                    span { class: "label", "{row.label}" }
                    span { class: "value", "data-testid": row.test_id, "{row.value}" }
                }
            }
        }
    }
}
