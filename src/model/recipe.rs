use super::Ingredient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog recipe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        RecipeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        RecipeId::new(id)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        RecipeId(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// A catalog recipe.
///
/// Everything except `liked` is fixed once the catalog is loaded.
///
/// # Examples
///
/// ```
/// use recipe_book::{Difficulty, Ingredient, Recipe};
///
/// let recipe = Recipe::new("7", "Garlic Toast", Difficulty::Easy)
///     .with_cook_time("10 min")
///     .with_ingredient(Ingredient::new("Garlic cloves", 2.0, "cloves"));
///
/// assert_eq!(recipe.cook_minutes(), Some(10));
/// assert!(recipe.matches("GARLIC"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, alias = "isLiked")]
    pub liked: bool,
    #[serde(default, alias = "isPopular")]
    pub popular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDate>,
}

fn default_servings() -> u32 {
    1
}

impl Recipe {
    pub fn new(id: impl Into<RecipeId>, name: impl Into<String>, difficulty: Difficulty) -> Self {
        Recipe {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            cook_time: String::new(),
            servings: 1,
            difficulty,
            ingredients: Vec::new(),
            liked: false,
            popular: false,
            date_added: None,
        }
    }

    pub fn with_cook_time(mut self, cook_time: impl Into<String>) -> Self {
        self.cook_time = cook_time.into();
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings.max(1);
        self
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_date_added(mut self, date: NaiveDate) -> Self {
        self.date_added = Some(date);
        self
    }

    /// Leading number of the cook-time label, in minutes.
    ///
    /// "25 min" gives 25; a label without leading digits gives `None`.
    pub fn cook_minutes(&self) -> Option<u32> {
        let trimmed = self.cook_time.trim_start();
        let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    /// Case-insensitive match of `query` against the recipe name or any
    /// ingredient name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.name.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_cook_minutes() {
        let recipe = Recipe::new("1", "Risotto", Difficulty::Medium).with_cook_time("35 min");
        assert_eq!(recipe.cook_minutes(), Some(35));

        let recipe = recipe.with_cook_time("about an hour");
        assert_eq!(recipe.cook_minutes(), None);
    }

    #[test]
    fn test_servings_are_clamped() {
        let recipe = Recipe::new("1", "Risotto", Difficulty::Medium).with_servings(0);
        assert_eq!(recipe.servings, 1);
    }

    #[test]
    fn test_matches_name_and_ingredients() {
        let recipe = Recipe::new("2", "Salmon Teriyaki", Difficulty::Medium)
            .with_ingredient(Ingredient::new("Soy sauce", 0.25, "cup"));

        assert!(recipe.matches("teriyaki"));
        assert!(recipe.matches("SOY"));
        assert!(!recipe.matches("garlic"));
    }

    #[test]
    fn test_deserialize_recipe() {
        let yaml = indoc! {r#"
            id: "3"
            name: Classic Chocolate Chip Cookies
            cookTime: 25 min
            servings: 24
            difficulty: Easy
            isLiked: true
            dateAdded: 2024-01-13
            ingredients:
              - { name: Butter, amount: 1, unit: cup }
        "#};

        let recipe: Recipe = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(recipe.id.as_str(), "3");
        assert_eq!(recipe.servings, 24);
        assert!(recipe.liked);
        assert!(!recipe.popular);
        assert_eq!(recipe.date_added, NaiveDate::from_ymd_opt(2024, 1, 13));
        assert_eq!(recipe.ingredients.len(), 1);
    }
}
