// Calculator state owned by the root component.
//
// Holds the raw text of the price field and the decomposition computed from it.
// The decomposition is cached against the text, so re-renders and repeated
// writes of the same text do not run the formula again.

use engine::{decompose, CurrencyFormatter};
use shared::models::{DecompositionResult, ResultComponent};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorPhase {
    /// Nothing usable typed yet, or the text is not a positive number. All outputs are zero.
    EmptyOrInvalid,
    Valid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub component: ResultComponent,
    pub label: &'static str,
    pub value: String,
    pub test_id: &'static str,
    pub highlighted: bool,
}

impl ResultRow {
    pub fn css_class(&self) -> &'static str {
        if self.highlighted {
            "result-item final-price"
        } else {
            "result-item"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorState {
    raw_input: String,
    result: DecompositionResult,
    recomputations: usize,
}

impl CalculatorState {
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Stores new input text. Returns `false` without recomputing when the text is unchanged.
    pub fn set_input(&mut self, raw: impl Into<String>) -> bool {
        let raw = raw.into();
        if raw == self.raw_input {
            return false;
        }
        self.result = decompose(&raw);
        self.raw_input = raw;
        self.recomputations += 1;
        debug!("Recomputed decomposition #{} for {:?}: {:?}", self.recomputations, self.raw_input, self.result);
        true
    }

    pub fn phase(&self) -> CalculatorPhase {
        if self.result.is_zero() {
            CalculatorPhase::EmptyOrInvalid
        } else {
            CalculatorPhase::Valid
        }
    }

    pub fn rows(&self, formatter: &CurrencyFormatter) -> Vec<ResultRow> {
        ResultComponent::ALL
            .iter()
            .map(|&component| ResultRow {
                component,
                label: component.label(),
                value: formatter.format(component.value_of(&self.result)),
                test_id: test_id(component),
                highlighted: component == ResultComponent::Profit,
            })
            .collect()
    }
}

fn test_id(component: ResultComponent) -> &'static str {
    match component {
        ResultComponent::Material => "custo-material",
        ResultComponent::Labor => "mao-de-obra",
        ResultComponent::Profit => "lucro",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let state = CalculatorState::default();
        assert_eq!(state.raw_input(), "");
        assert_eq!(state.phase(), CalculatorPhase::EmptyOrInvalid);
        assert!(state.result.is_zero());
        assert_eq!(state.recomputations, 0);
    }

    #[test]
    fn test_transitions_between_phases() {
        let mut state = CalculatorState::default();

        state.set_input("460");
        assert_eq!(state.phase(), CalculatorPhase::Valid);
        assert!((state.result.total() - 460.0).abs() < 1e-9);

        state.set_input("abc");
        assert_eq!(state.phase(), CalculatorPhase::EmptyOrInvalid);
        assert!(state.result.is_zero());

        state.set_input("-50");
        assert_eq!(state.phase(), CalculatorPhase::EmptyOrInvalid);

        state.set_input("46");
        assert_eq!(state.phase(), CalculatorPhase::Valid);

        state.set_input("");
        assert_eq!(state.phase(), CalculatorPhase::EmptyOrInvalid);
    }

    #[test]
    fn test_unchanged_input_is_not_recomputed() {
        let mut state = CalculatorState::default();
        assert!(state.set_input("460"));
        let first = state.result;

        assert!(!state.set_input("460"));
        assert!(!state.set_input(String::from("460")));
        assert_eq!(state.recomputations, 1);
        assert_eq!(state.result, first);

        assert!(state.set_input("461"));
        assert_eq!(state.recomputations, 2);
    }

    #[test]
    fn test_clearing_to_empty_on_fresh_state_is_a_no_op() {
        let mut state = CalculatorState::default();
        assert!(!state.set_input(""));
        assert_eq!(state.recomputations, 0);
    }

    #[test]
    fn test_rows_for_valid_price() {
        let mut state = CalculatorState::default();
        state.set_input("460");
        let rows = state.rows(&CurrencyFormatter::brl());

        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["R$\u{a0}100,00", "R$\u{a0}60,00", "R$\u{a0}300,00"]);

        let ids: Vec<&str> = rows.iter().map(|r| r.test_id).collect();
        assert_eq!(ids, vec!["custo-material", "mao-de-obra", "lucro"]);

        assert_eq!(rows[0].label, "Custo do Material");
        assert!(rows[2].highlighted);
        assert!(!rows[0].highlighted && !rows[1].highlighted);
        assert_eq!(rows[2].css_class(), "result-item final-price");
        assert_eq!(rows[0].css_class(), "result-item");
    }

    #[test]
    fn test_rows_for_invalid_price_are_zero() {
        let mut state = CalculatorState::default();
        state.set_input("abc");
        let rows = state.rows(&CurrencyFormatter::brl());
        assert!(rows.iter().all(|r| r.value == "R$\u{a0}0,00"));
    }
}
