//! The recipe catalog.
//!
//! The catalog is a fixed list of recipes loaded once, either from the dataset
//! bundled with the crate or from a YAML file supplied by the host. Order is
//! significant: queries that do not sort return recipes in catalog order.

use crate::model::{Recipe, RecipeId};
use camino::Utf8Path;
use std::collections::HashSet;
use thiserror::Error;

const BUNDLED_RECIPES: &str = include_str!("recipes.yaml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(RecipeId),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Builds a catalog from already constructed recipes.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two recipes share an id.
    pub fn from_recipes(mut recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for recipe in &mut recipes {
            if !seen.insert(recipe.id.clone()) {
                return Err(CatalogError::DuplicateId(recipe.id.clone()));
            }
            if recipe.servings == 0 {
                tracing::warn!("Recipe {} has no servings, using 1", recipe.id);
                recipe.servings = 1;
            }
        }
        Ok(Catalog { recipes })
    }

    /// Parses a YAML sequence of recipes.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_yaml::from_str(yaml)?;
        Self::from_recipes(recipes)
    }

    /// Loads a YAML catalog file.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&content)?;
        tracing::info!("Loaded {} recipes from {path}", catalog.len());
        Ok(catalog)
    }

    /// The six recipes shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUNDLED_RECIPES)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| &recipe.id == id)
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.get(id).is_some()
    }

    /// Most recently added recipes first, at most `limit` of them.
    ///
    /// Recipes without a date sort after all dated ones; ties keep catalog
    /// order.
    pub fn recent(&self, limit: usize) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self.recipes.iter().collect();
        recipes.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        recipes.truncate(limit);
        recipes
    }

    /// Popular recipes in catalog order, at most `limit` of them.
    pub fn popular(&self, limit: usize) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.popular)
            .take(limit)
            .collect()
    }

    pub fn liked(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|recipe| recipe.liked).collect()
    }

    /// Recipes whose name or any ingredient name contains `query`,
    /// ignoring case, in catalog order.
    ///
    /// The empty query is a substring of everything and returns the whole
    /// catalog. Views that want a default listing for an empty box go
    /// through [`RecipeBook::explore`](crate::RecipeBook::explore).
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.matches(query))
            .collect()
    }

    /// Flips the liked flag of a recipe and returns the new value.
    pub fn toggle_like(&mut self, id: &RecipeId) -> Option<bool> {
        let recipe = self.recipes.iter_mut().find(|recipe| &recipe.id == id)?;
        recipe.liked = !recipe.liked;
        tracing::debug!("Recipe {} liked: {}", recipe.id, recipe.liked);
        Some(recipe.liked)
    }
}
