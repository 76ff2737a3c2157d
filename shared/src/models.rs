use serde::{Deserialize, Serialize};

/// The three parts a final sale price is split into.
///
/// When built from a valid price the fields sum to that price; every field
/// is zero when the price was missing, malformed or not positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DecompositionResult {
    pub material_cost: f64,
    pub labor_cost: f64,
    pub profit: f64,
}

impl DecompositionResult {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn total(&self) -> f64 {
        self.material_cost + self.labor_cost + self.profit
    }

    pub fn is_zero(&self) -> bool {
        self.material_cost == 0.0 && self.labor_cost == 0.0 && self.profit == 0.0
    }
}

/// One row of the results area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultComponent {
    Material,
    Labor,
    Profit,
}

impl ResultComponent {
    pub const ALL: [ResultComponent; 3] = [
        ResultComponent::Material,
        ResultComponent::Labor,
        ResultComponent::Profit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResultComponent::Material => "Custo do Material",
            ResultComponent::Labor => "Custo da Mão de Obra",
            ResultComponent::Profit => "Lucro Líquido",
        }
    }

    pub fn value_of(&self, result: &DecompositionResult) -> f64 {
        match self {
            ResultComponent::Material => result.material_cost,
            ResultComponent::Labor => result.labor_cost,
            ResultComponent::Profit => result.profit,
        }
    }
}
