// Final sale price field
#![allow(non_snake_case)]
use dioxus::prelude::*;

pub const INPUT_ID: &str = "finalPrice";

#[component]
pub fn PriceInput(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "input-group",
            label { r#for: INPUT_ID, "Preço Final de Venda (R$)" }
            input {
                r#type: "number",
                id: INPUT_ID,
                value: "{value}",
                placeholder: "Ex: 460,00",
                aria_label: "Preço Final de Venda em Reais",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        }
    }
}
