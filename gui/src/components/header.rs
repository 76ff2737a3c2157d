#![allow(non_snake_case)]
use dioxus::prelude::*;

#[component]
pub fn Header(title: String, subtitle: String) -> Element {
    rsx! {
        header {
            class: "card-header",
            h1 { "{title}" }
            p { "{subtitle}" }
        }
    }
}
