#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::CurrencyFormatter;

use crate::components::{Explanation, Header, PriceInput, ResultsArea};
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::{CalculatorPhase, CalculatorState};

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let formatter = use_context::<CurrencyFormatter>();

    let mut calculator = use_signal(CalculatorState::default);
    let rows = use_memo(move || calculator.read().rows(&formatter));

    let theme_style = ThemePalette::for_name(&config.app.theme).css_variables();
    let raw_input = calculator.read().raw_input().to_string();
    let is_empty = calculator.read().phase() == CalculatorPhase::EmptyOrInvalid;

    rsx! {
        div {
            class: "app-root",
            style: "{theme_style}",
            main {
                class: "calculator-card",
                lang: "{config.app.language}",
                Header { title: config.app.title.clone(), subtitle: config.app.subtitle.clone() }
                PriceInput {
                    value: raw_input,
                    on_input: move |raw: String| {
                        calculator.write().set_input(raw);
                    },
                }
                ResultsArea { rows: rows(), is_empty }
                Explanation {}
            }
        }
    }
}
