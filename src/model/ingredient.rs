use serde::{Deserialize, Serialize};

/// A single ingredient line of a recipe.
///
/// `amount` and `unit` are the recipe's own (imperial or count) measure.
/// Recipes may additionally carry a metric equivalent, used when a card is
/// switched to metric display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_unit: Option<String>,
    /// Only meaningful while a recipe is planned; never set in the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            amount,
            unit: unit.into(),
            metric_amount: None,
            metric_unit: None,
            checked: None,
        }
    }

    /// Attaches a metric equivalent.
    pub fn with_metric(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.metric_amount = Some(amount);
        self.metric_unit = Some(unit.into());
        self
    }

    /// Key used to group ingredients across recipes.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn is_checked(&self) -> bool {
        self.checked.unwrap_or(false)
    }

    /// Returns the amount and unit to show, preferring the metric pair when
    /// `metric` is set and the ingredient has one.
    ///
    /// The amount and the unit fall back independently, so an ingredient with
    /// only a metric amount still shows its base unit.
    pub fn measure(&self, metric: bool) -> (f64, &str) {
        if !metric {
            return (self.amount, &self.unit);
        }
        let amount = self.metric_amount.unwrap_or(self.amount);
        let unit = self.metric_unit.as_deref().unwrap_or(&self.unit);
        (amount, unit)
    }
}
