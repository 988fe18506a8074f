use serde::Serialize;

/// The fixed cost range shown under the shopping list. No pricing data
/// exists, so this never changes.
pub const ESTIMATED_COST: &str = "$45-65";

/// One line of the shopping list: every planned ingredient sharing a name,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidatedIngredient {
    /// Lowercase ingredient name.
    pub key: String,
    /// Name as spelled by the first recipe listing it.
    pub name: String,
    /// Sum of all amounts, in whatever units they were given.
    pub amount: f64,
    /// Unit of the first occurrence.
    pub unit: String,
    /// Contributing recipe names in planning order. A name appears once per
    /// contribution.
    pub recipes: Vec<String>,
    pub checked: bool,
}

impl ConsolidatedIngredient {
    /// "7 cloves Garlic cloves"
    pub fn display_line(&self) -> String {
        format!("{} {} {}", self.amount, self.unit, self.name)
    }

    /// "For: Creamy Mushroom Risotto, Salmon Teriyaki"
    pub fn attribution(&self) -> String {
        format!("For: {}", self.recipes.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ShoppingList {
    pub(crate) items: Vec<ConsolidatedIngredient>,
}

impl ShoppingList {
    pub fn items(&self) -> &[ConsolidatedIngredient] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConsolidatedIngredient> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks an item up by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&ConsolidatedIngredient> {
        let key = name.to_lowercase();
        self.items.iter().find(|item| item.key == key)
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    pub fn estimated_cost(&self) -> &'static str {
        ESTIMATED_COST
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a ConsolidatedIngredient;
    type IntoIter = std::slice::Iter<'a, ConsolidatedIngredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
