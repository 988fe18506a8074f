//! State behind a recipe card: the flip side, the servings adjuster, the
//! metric toggle and horizontal swipes.
//!
//! Rendering and pointer tracking stay with the host. The host reports the
//! final drag offset and this module decides what the gesture means.

use crate::model::{Ingredient, Recipe, RecipeId};
use serde::{Deserialize, Serialize};

/// What a completed swipe asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeAction {
    /// Swiped left.
    AddToMenu,
    /// Swiped right.
    MarkAsMade,
}

impl SwipeAction {
    /// Interprets a released horizontal drag of `offset` pixels.
    ///
    /// Only drags strictly longer than `threshold` count. A non-finite
    /// offset is never a swipe.
    pub fn classify(offset: f64, threshold: f64) -> Option<SwipeAction> {
        if !offset.is_finite() || offset.abs() <= threshold {
            None
        } else if offset < 0.0 {
            Some(SwipeAction::AddToMenu)
        } else {
            Some(SwipeAction::MarkAsMade)
        }
    }

    /// Action hinted while the card is still being dragged. Hints start at
    /// half the swipe threshold.
    pub fn hint(offset: f64, threshold: f64) -> Option<SwipeAction> {
        Self::classify(offset, threshold / 2.0)
    }
}

#[derive(Debug, Clone)]
pub struct RecipeCard {
    recipe: Recipe,
    servings: u32,
    metric: bool,
    flipped: bool,
}

impl RecipeCard {
    pub fn new(recipe: Recipe) -> Self {
        let servings = recipe.servings.max(1);
        RecipeCard {
            recipe,
            servings,
            metric: false,
            flipped: false,
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// Moves the servings count by `delta`, never below one.
    pub fn adjust_servings(&mut self, delta: i64) -> u32 {
        let servings = i64::from(self.servings)
            .saturating_add(delta)
            .clamp(1, i64::from(u32::MAX));
        self.servings = servings as u32;
        self.servings
    }

    pub fn multiplier(&self) -> f64 {
        f64::from(self.servings) / f64::from(self.recipe.servings.max(1))
    }

    pub fn is_metric(&self) -> bool {
        self.metric
    }

    pub fn toggle_metric(&mut self) -> bool {
        self.metric = !self.metric;
        self.metric
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }

    /// Amount of `ingredient` for the current servings and unit system.
    pub fn adjusted_amount(&self, ingredient: &Ingredient) -> f64 {
        let (amount, _) = ingredient.measure(self.metric);
        amount * self.multiplier()
    }

    pub fn unit<'a>(&self, ingredient: &'a Ingredient) -> &'a str {
        ingredient.measure(self.metric).1
    }

    /// Ingredient lines as shown on the back of the card, amounts with one
    /// decimal: "3.0 cloves Garlic cloves".
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.recipe
            .ingredients
            .iter()
            .map(|ingredient| {
                format!(
                    "{:.1} {} {}",
                    self.adjusted_amount(ingredient),
                    self.unit(ingredient),
                    ingredient.name
                )
            })
            .collect()
    }
}

/// The stack of cards on the home page. Swiping either way moves on to the
/// next card; the last card stays on top.
#[derive(Debug, Clone, Default)]
pub struct CardDeck {
    recipes: Vec<RecipeId>,
    current: usize,
}

impl CardDeck {
    pub fn new(recipes: Vec<RecipeId>) -> Self {
        CardDeck {
            recipes,
            current: 0,
        }
    }

    pub fn current(&self) -> Option<&RecipeId> {
        self.recipes.get(self.current)
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn advance(&mut self) -> Option<&RecipeId> {
        if self.current + 1 < self.recipes.len() {
            self.current += 1;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn risotto() -> Recipe {
        Catalog::bundled().unwrap().all()[0].clone()
    }

    #[test]
    fn test_classify_swipe() {
        assert_eq!(SwipeAction::classify(-150.0, 100.0), Some(SwipeAction::AddToMenu));
        assert_eq!(SwipeAction::classify(101.0, 100.0), Some(SwipeAction::MarkAsMade));
        assert_eq!(SwipeAction::classify(100.0, 100.0), None);
        assert_eq!(SwipeAction::classify(-100.0, 100.0), None);
        assert_eq!(SwipeAction::classify(0.0, 100.0), None);
    }

    #[test]
    fn test_non_finite_offsets_are_not_swipes() {
        assert_eq!(SwipeAction::classify(f64::NAN, 100.0), None);
        assert_eq!(SwipeAction::classify(f64::INFINITY, 100.0), None);
        assert_eq!(SwipeAction::classify(f64::NEG_INFINITY, 100.0), None);
        assert_eq!(SwipeAction::hint(f64::NAN, 100.0), None);
    }

    #[test]
    fn test_swipe_hint() {
        assert_eq!(SwipeAction::hint(-60.0, 100.0), Some(SwipeAction::AddToMenu));
        assert_eq!(SwipeAction::hint(40.0, 100.0), None);
    }

    #[test]
    fn test_servings_never_drop_below_one() {
        let mut card = RecipeCard::new(risotto());
        assert_eq!(card.servings(), 4);
        assert_eq!(card.adjust_servings(-10), 1);
        assert_eq!(card.adjust_servings(-1), 1);
        assert_eq!(card.adjust_servings(7), 8);
        assert_eq!(card.multiplier(), 2.0);
    }

    #[test]
    fn test_servings_saturate_on_extreme_deltas() {
        let mut card = RecipeCard::new(risotto());
        assert_eq!(card.adjust_servings(i64::MAX), u32::MAX);
        assert_eq!(card.adjust_servings(1), u32::MAX);
        assert_eq!(card.adjust_servings(i64::MIN), 1);
        assert_eq!(card.adjust_servings(i64::MIN), 1);
    }

    #[test]
    fn test_adjusted_amounts() {
        let mut card = RecipeCard::new(risotto());
        card.adjust_servings(4);
        let rice = card.recipe().ingredients[0].clone();

        assert_eq!(card.adjusted_amount(&rice), 3.0);
        assert_eq!(card.unit(&rice), "cups");

        assert!(card.toggle_metric());
        assert!(card.is_metric());
        assert_eq!(card.adjusted_amount(&rice), 600.0);
        assert_eq!(card.unit(&rice), "g");
    }

    #[test]
    fn test_ingredient_lines() {
        let mut card = RecipeCard::new(risotto());
        card.adjust_servings(-2);
        let lines = card.ingredient_lines();
        assert_eq!(lines[1], "0.5 lb Mixed mushrooms");
        assert_eq!(lines[7], "1.5 cloves Garlic cloves");
    }

    #[test]
    fn test_flip() {
        let mut card = RecipeCard::new(risotto());
        assert!(!card.is_flipped());
        assert!(card.flip());
        assert!(!card.flip());
    }

    #[test]
    fn test_deck_saturates_at_last_card() {
        let mut deck = CardDeck::new(vec![RecipeId::new("1"), RecipeId::new("2")]);
        assert_eq!(deck.current().unwrap().as_str(), "1");
        assert_eq!(deck.advance().unwrap().as_str(), "2");
        assert_eq!(deck.advance().unwrap().as_str(), "2");
        assert_eq!(deck.index(), 1);

        let mut empty = CardDeck::default();
        assert!(empty.advance().is_none());
    }
}
