//! Meal planning and shopping-list consolidation.
//!
//! The shopping list is never stored. [`Menu::shopping_list`] rebuilds it
//! from the planned recipes on every call, so removing a recipe can never
//! leave stale amounts or attributions behind. The only state that outlives
//! a rebuild is the set of checked items, keyed by lowercase ingredient name.

use crate::model::{Recipe, RecipeId};
use indexmap::IndexMap;
use std::collections::HashSet;

mod model;

pub use model::{ConsolidatedIngredient, ShoppingList, ESTIMATED_COST};

/// Merges same-named ingredients of `recipes` into shopping-list lines.
///
/// Names are compared case-insensitively. The first occurrence of a name
/// fixes the displayed spelling and the unit; later amounts are added as
/// plain numbers, whatever their unit. Lines come out in order of first
/// appearance, walking recipes in the given order and each recipe's
/// ingredients in listed order.
///
/// # Examples
///
/// ```
/// use recipe_book::{consolidate, Difficulty, Ingredient, Recipe};
///
/// let a = Recipe::new("a", "A", Difficulty::Easy)
///     .with_ingredient(Ingredient::new("Garlic cloves", 3.0, "cloves"));
/// let b = Recipe::new("b", "B", Difficulty::Easy)
///     .with_ingredient(Ingredient::new("garlic cloves", 4.0, "cloves"));
///
/// let list = consolidate([&a, &b]);
/// assert_eq!(list.len(), 1);
/// assert_eq!(list[0].name, "Garlic cloves");
/// assert_eq!(list[0].amount, 7.0);
/// assert_eq!(list[0].recipes, vec!["A", "B"]);
/// ```
pub fn consolidate<'a, I>(recipes: I) -> Vec<ConsolidatedIngredient>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut lines: IndexMap<String, ConsolidatedIngredient> = IndexMap::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let key = ingredient.key();
            match lines.get_mut(&key) {
                Some(line) => {
                    line.amount += ingredient.amount;
                    line.recipes.push(recipe.name.clone());
                }
                None => {
                    lines.insert(
                        key.clone(),
                        ConsolidatedIngredient {
                            key,
                            name: ingredient.name.clone(),
                            amount: ingredient.amount,
                            unit: ingredient.unit.clone(),
                            recipes: vec![recipe.name.clone()],
                            checked: false,
                        },
                    );
                }
            }
        }
    }

    lines.into_values().collect()
}

/// The recipes a user plans to cook.
#[derive(Debug, Clone)]
pub struct Menu {
    /// Planned copies of catalog recipes; ingredient check marks live here.
    planned: Vec<Recipe>,
    checked: HashSet<String>,
    keep_checked: bool,
}

impl Default for Menu {
    fn default() -> Self {
        Menu::new(true)
    }
}

impl Menu {
    /// `keep_checked` decides whether shopping-list check marks survive a
    /// menu change. When false every add or remove clears them.
    pub fn new(keep_checked: bool) -> Self {
        Menu {
            planned: Vec::new(),
            checked: HashSet::new(),
            keep_checked,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.planned
    }

    pub fn len(&self) -> usize {
        self.planned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planned.is_empty()
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.planned.iter().any(|recipe| &recipe.id == id)
    }

    /// Plans a copy of `recipe`. Planning the same recipe twice is a no-op.
    pub fn add(&mut self, recipe: &Recipe) -> bool {
        if self.contains(&recipe.id) {
            return false;
        }
        let mut planned = recipe.clone();
        for ingredient in &mut planned.ingredients {
            ingredient.checked = None;
        }
        self.planned.push(planned);
        tracing::debug!("Planned recipe {}", recipe.id);
        self.menu_changed();
        true
    }

    /// Drops a recipe from the plan. Returns false if it was not planned.
    pub fn remove(&mut self, id: &RecipeId) -> bool {
        let before = self.planned.len();
        self.planned.retain(|recipe| &recipe.id != id);
        if self.planned.len() == before {
            return false;
        }
        tracing::debug!("Unplanned recipe {id}");
        self.menu_changed();
        true
    }

    fn menu_changed(&mut self) {
        if !self.keep_checked {
            self.checked.clear();
            return;
        }
        let live: HashSet<String> = self
            .planned
            .iter()
            .flat_map(|recipe| recipe.ingredients.iter().map(|i| i.key()))
            .collect();
        self.checked.retain(|key| live.contains(key));
    }

    /// The consolidated shopping list for the current plan, with check
    /// marks applied.
    pub fn shopping_list(&self) -> ShoppingList {
        let mut items = consolidate(&self.planned);
        for item in &mut items {
            item.checked = self.checked.contains(&item.key);
        }
        ShoppingList { items }
    }

    /// Flips the check mark of a shopping-list line, found by name ignoring
    /// case. Returns the new state, or `None` if no planned recipe uses that
    /// ingredient.
    pub fn toggle_item(&mut self, name: &str) -> Option<bool> {
        let key = name.to_lowercase();
        let planned = self
            .planned
            .iter()
            .any(|recipe| recipe.ingredients.iter().any(|i| i.key() == key));
        if !planned {
            return None;
        }
        if self.checked.remove(&key) {
            Some(false)
        } else {
            self.checked.insert(key);
            Some(true)
        }
    }

    /// Flips the check mark of one ingredient of one planned recipe.
    pub fn toggle_recipe_ingredient(&mut self, id: &RecipeId, index: usize) -> Option<bool> {
        let recipe = self.planned.iter_mut().find(|recipe| &recipe.id == id)?;
        let ingredient = recipe.ingredients.get_mut(index)?;
        let checked = !ingredient.is_checked();
        ingredient.checked = Some(checked);
        Some(checked)
    }
}
