#![allow(non_snake_case)]
use dioxus::prelude::*;

/// Static description of how the price is split.
#[component]
pub fn Explanation() -> Element {
    rsx! {
        section {
            class: "explanation-area",
            h2 { "Como o Cálculo é Feito?" }
            p { "A calculadora utiliza a seguinte fórmula para decompor o preço de venda:" }
            ul {
                li {
                    strong { "Custo do Material:" }
                    " Representado como "
                    strong { "x" }
                    "."
                }
                li {
                    strong { "Custo da Mão de Obra:" }
                    " Definido como 60% do custo do material ("
                    strong { "0.6x" }
                    ")."
                }
                li {
                    strong { "Lucro:" }
                    " Definido como 3 vezes o custo do material ("
                    strong { "3x" }
                    ")."
                }
            }
            p { "O preço final de venda é a soma de todas essas partes:" }
            div { class: "formula-box", code { "Preço Final = x + 0.6x + 3x" } }
            p { "Simplificando a equação, chegamos a:" }
            div { class: "formula-box", code { "Preço Final = 4.6x" } }
            p {
                "Portanto, para encontrar o valor do "
                strong { "Custo do Material (x)" }
                ", nós invertemos a fórmula:"
            }
            div { class: "formula-box", code { "x = Preço Final / 4.6" } }
        }
    }
}
