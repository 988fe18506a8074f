//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! The stateful [`RecipeBook`] is wrapped in an object guarded by a mutex;
//! everything it returns is converted to plain records.

use crate::book::{LibraryStats, RecipeBook};
use crate::card::{RecipeCard, SwipeAction};
use crate::catalog::{Catalog, CatalogError};
use crate::config::{Config, ConfigError};
use crate::folder::{Folder, FolderId, FolderStyle};
use crate::import::LinkImportStatus;
use crate::menu::{ConsolidatedIngredient, ShoppingList};
use crate::model::{Difficulty, Ingredient, Recipe, RecipeId};
use camino::Utf8Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeBookError {
    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },
}

impl From<CatalogError> for RecipeBookError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::IoError(e) => RecipeBookError::IoError {
                message: e.to_string(),
            },
            CatalogError::YamlError(e) => RecipeBookError::ParseError {
                message: e.to_string(),
            },
            CatalogError::DuplicateId(id) => RecipeBookError::CatalogError {
                message: format!("Duplicate recipe id: {id}"),
            },
        }
    }
}

impl From<ConfigError> for RecipeBookError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::IoError(e) => RecipeBookError::IoError {
                message: e.to_string(),
            },
            ConfigError::YamlError(e) => RecipeBookError::ParseError {
                message: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiDifficulty {
    Easy,
    Medium,
    Hard,
}

impl From<Difficulty> for FfiDifficulty {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Easy => FfiDifficulty::Easy,
            Difficulty::Medium => FfiDifficulty::Medium,
            Difficulty::Hard => FfiDifficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiFolderStyle {
    Accent,
    Warning,
    Secondary,
    Primary,
}

impl From<FolderStyle> for FfiFolderStyle {
    fn from(s: FolderStyle) -> Self {
        match s {
            FolderStyle::Accent => FfiFolderStyle::Accent,
            FolderStyle::Warning => FfiFolderStyle::Warning,
            FolderStyle::Secondary => FfiFolderStyle::Secondary,
            FolderStyle::Primary => FfiFolderStyle::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiSwipeAction {
    AddToMenu,
    MarkAsMade,
}

impl From<SwipeAction> for FfiSwipeAction {
    fn from(a: SwipeAction) -> Self {
        match a {
            SwipeAction::AddToMenu => FfiSwipeAction::AddToMenu,
            SwipeAction::MarkAsMade => FfiSwipeAction::MarkAsMade,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub metric_amount: Option<f64>,
    pub metric_unit: Option<String>,
    pub checked: bool,
}

impl From<&Ingredient> for FfiIngredient {
    fn from(i: &Ingredient) -> Self {
        FfiIngredient {
            name: i.name.clone(),
            amount: i.amount,
            unit: i.unit.clone(),
            metric_amount: i.metric_amount,
            metric_unit: i.metric_unit.clone(),
            checked: i.is_checked(),
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub id: String,
    pub name: String,
    pub image: String,
    pub cook_time: String,
    pub servings: u32,
    pub difficulty: FfiDifficulty,
    pub ingredients: Vec<FfiIngredient>,
    pub liked: bool,
    pub popular: bool,
    /// ISO date (YYYY-MM-DD) if known
    pub date_added: Option<String>,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            id: r.id.to_string(),
            name: r.name.clone(),
            image: r.image.clone(),
            cook_time: r.cook_time.clone(),
            servings: r.servings,
            difficulty: r.difficulty.into(),
            ingredients: r.ingredients.iter().map(FfiIngredient::from).collect(),
            liked: r.liked,
            popular: r.popular,
            date_added: r.date_added.map(|d| d.to_string()),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFolder {
    pub id: u64,
    pub name: String,
    pub style: FfiFolderStyle,
    /// Member recipe ids in the order they were added
    pub recipe_ids: Vec<String>,
    /// Number of members beyond the three preview images
    pub hidden_count: u32,
}

impl From<&Folder> for FfiFolder {
    fn from(f: &Folder) -> Self {
        let (_, hidden) = f.preview();
        FfiFolder {
            id: f.id().get(),
            name: f.name().to_string(),
            style: f.style().into(),
            recipe_ids: f.recipes().iter().map(|r| r.to_string()).collect(),
            hidden_count: hidden as u32,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiShoppingItem {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub recipes: Vec<String>,
    pub checked: bool,
    /// "7 cloves Garlic cloves"
    pub line: String,
    /// "For: A, B"
    pub attribution: String,
}

impl From<&ConsolidatedIngredient> for FfiShoppingItem {
    fn from(c: &ConsolidatedIngredient) -> Self {
        FfiShoppingItem {
            name: c.name.clone(),
            amount: c.amount,
            unit: c.unit.clone(),
            recipes: c.recipes.clone(),
            checked: c.checked,
            line: c.display_line(),
            attribution: c.attribution(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiShoppingList {
    pub items: Vec<FfiShoppingItem>,
    pub checked_count: u32,
    pub estimated_cost: String,
}

impl From<&ShoppingList> for FfiShoppingList {
    fn from(list: &ShoppingList) -> Self {
        FfiShoppingList {
            items: list.iter().map(FfiShoppingItem::from).collect(),
            checked_count: list.checked_count() as u32,
            estimated_cost: list.estimated_cost().to_string(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLibraryStats {
    pub folders: u32,
    pub recipes_in_folders: u32,
    pub favorites: u32,
}

impl From<LibraryStats> for FfiLibraryStats {
    fn from(s: LibraryStats) -> Self {
        FfiLibraryStats {
            folders: s.folders as u32,
            recipes_in_folders: s.recipes_in_folders as u32,
            favorites: s.favorites as u32,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLinkStatus {
    pub processing: bool,
    pub url: Option<String>,
    /// How long the host waits before calling `complete_link`
    pub delay_ms: u64,
}

/// FFI-safe handle to a recipe card's state.
#[derive(uniffi::Object)]
pub struct FfiRecipeCard {
    inner: Mutex<RecipeCard>,
}

#[uniffi::export]
impl FfiRecipeCard {
    pub fn recipe(&self) -> FfiRecipe {
        FfiRecipe::from(self.card().recipe())
    }

    pub fn servings(&self) -> u32 {
        self.card().servings()
    }

    /// Changes the servings by `delta`, never going below one.
    pub fn adjust_servings(&self, delta: i64) -> u32 {
        self.card().adjust_servings(delta)
    }

    pub fn is_metric(&self) -> bool {
        self.card().is_metric()
    }

    pub fn toggle_metric(&self) -> bool {
        self.card().toggle_metric()
    }

    pub fn is_flipped(&self) -> bool {
        self.card().is_flipped()
    }

    pub fn flip(&self) -> bool {
        self.card().flip()
    }

    /// Ingredient lines for the current servings and unit system.
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.card().ingredient_lines()
    }
}

impl FfiRecipeCard {
    fn card(&self) -> MutexGuard<'_, RecipeCard> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// FFI-safe handle to the application state.
///
/// This is the main type hosts hold on to for the lifetime of the app.
#[derive(uniffi::Object)]
pub struct FfiRecipeBook {
    inner: Mutex<RecipeBook>,
}

#[uniffi::export]
impl FfiRecipeBook {
    /// Returns every recipe in catalog order.
    pub fn all_recipes(&self) -> Vec<FfiRecipe> {
        recipes(self.book().catalog().all().iter())
    }

    pub fn recipe(&self, id: String) -> Option<FfiRecipe> {
        self.book().recipe(&RecipeId::new(id)).map(FfiRecipe::from)
    }

    pub fn recent(&self) -> Vec<FfiRecipe> {
        recipes(self.book().recent())
    }

    pub fn popular(&self) -> Vec<FfiRecipe> {
        recipes(self.book().popular())
    }

    /// Search results for a non-blank query, popular recipes otherwise.
    pub fn explore(&self, query: String) -> Vec<FfiRecipe> {
        recipes(self.book().explore(&query))
    }

    pub fn search(&self, query: String) -> Vec<FfiRecipe> {
        recipes(self.book().search(&query))
    }

    pub fn toggle_like(&self, id: String) -> Option<bool> {
        self.book().toggle_like(&RecipeId::new(id))
    }

    pub fn card(&self, id: String) -> Option<Arc<FfiRecipeCard>> {
        self.book().card(&RecipeId::new(id)).map(|card| {
            Arc::new(FfiRecipeCard {
                inner: Mutex::new(card),
            })
        })
    }

    pub fn folders(&self) -> Vec<FfiFolder> {
        self.book().folders().iter().map(FfiFolder::from).collect()
    }

    /// Returns the new folder id, or `None` for a blank name.
    pub fn create_folder(&self, name: String) -> Option<u64> {
        self.book().create_folder(&name).map(FolderId::get)
    }

    pub fn create_folder_with_recipe(&self, name: String, recipe_id: String) -> Option<u64> {
        self.book()
            .create_folder_with_recipe(&name, &RecipeId::new(recipe_id))
            .map(FolderId::get)
    }

    pub fn rename_folder(&self, folder_id: u64, new_name: String) -> bool {
        self.book().rename_folder(folder_id.into(), &new_name)
    }

    pub fn delete_folder(&self, folder_id: u64) -> bool {
        self.book().delete_folder(folder_id.into())
    }

    /// Returns true if the recipe was added, false if removed, `None` for
    /// an unknown folder or recipe.
    pub fn toggle_membership(&self, folder_id: u64, recipe_id: String) -> Option<bool> {
        self.book()
            .toggle_membership(folder_id.into(), &RecipeId::new(recipe_id))
    }

    pub fn folder_ids_for_recipe(&self, recipe_id: String) -> Vec<u64> {
        self.book()
            .folder_ids_for_recipe(&RecipeId::new(recipe_id))
            .into_iter()
            .map(FolderId::get)
            .collect()
    }

    pub fn select_folder(&self, folder_id: u64) -> bool {
        self.book().select_folder(folder_id.into())
    }

    pub fn close_folder(&self) {
        self.book().close_folder()
    }

    pub fn selected_folder(&self) -> Option<FfiFolder> {
        self.book().selected_folder().map(FfiFolder::from)
    }

    pub fn folder_recipes(&self, folder_id: u64, query: String) -> Vec<FfiRecipe> {
        recipes(self.book().folder_recipes(folder_id.into(), &query))
    }

    pub fn stats(&self) -> FfiLibraryStats {
        self.book().stats().into()
    }

    pub fn planned_recipes(&self) -> Vec<FfiRecipe> {
        recipes(self.book().menu().recipes().iter())
    }

    pub fn add_to_menu(&self, recipe_id: String) -> bool {
        self.book().add_to_menu(&RecipeId::new(recipe_id))
    }

    pub fn remove_from_menu(&self, recipe_id: String) -> bool {
        self.book().remove_from_menu(&RecipeId::new(recipe_id))
    }

    pub fn shopping_list(&self) -> FfiShoppingList {
        FfiShoppingList::from(&self.book().shopping_list())
    }

    pub fn toggle_shopping_item(&self, name: String) -> Option<bool> {
        self.book().toggle_shopping_item(&name)
    }

    pub fn toggle_recipe_ingredient(&self, recipe_id: String, index: u32) -> Option<bool> {
        self.book()
            .toggle_recipe_ingredient(&RecipeId::new(recipe_id), index as usize)
    }

    /// Applies a released horizontal drag on a recipe card.
    pub fn swipe(&self, recipe_id: String, offset: f64) -> Option<FfiSwipeAction> {
        self.book()
            .swipe(&RecipeId::new(recipe_id), offset)
            .map(FfiSwipeAction::from)
    }

    /// Action hinted while a card is dragged `offset` pixels, before release.
    pub fn swipe_hint(&self, offset: f64) -> Option<FfiSwipeAction> {
        self.book().swipe_hint(offset).map(FfiSwipeAction::from)
    }

    /// Applies a released drag on the top card of the home deck.
    pub fn swipe_deck(&self, offset: f64) -> Option<FfiSwipeAction> {
        self.book().swipe_deck(offset).map(FfiSwipeAction::from)
    }

    pub fn deck_current(&self) -> Option<FfiRecipe> {
        let book = self.book();
        let id = book.deck().current()?;
        book.recipe(id).map(FfiRecipe::from)
    }

    pub fn submit_link(&self, url: String) -> bool {
        self.book().submit_link(&url)
    }

    pub fn complete_link(&self) -> Option<String> {
        self.book().complete_link()
    }

    pub fn cancel_link(&self) {
        self.book().cancel_link()
    }

    pub fn link_status(&self) -> FfiLinkStatus {
        let book = self.book();
        let url = match book.link_status() {
            LinkImportStatus::Processing { url } => Some(url.clone()),
            LinkImportStatus::Idle => None,
        };
        FfiLinkStatus {
            processing: url.is_some(),
            url,
            delay_ms: book.link_import().delay().as_millis() as u64,
        }
    }

    /// Returns the shopping list as a JSON string for hosts that render
    /// from JSON.
    pub fn shopping_list_json(&self) -> String {
        serde_json::to_string(&self.book().shopping_list()).unwrap_or_default()
    }
}

impl FfiRecipeBook {
    fn new(book: RecipeBook) -> Self {
        FfiRecipeBook {
            inner: Mutex::new(book),
        }
    }

    fn book(&self) -> MutexGuard<'_, RecipeBook> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn recipes<'a>(iter: impl IntoIterator<Item = &'a Recipe>) -> Vec<FfiRecipe> {
    iter.into_iter().map(FfiRecipe::from).collect()
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Opens a recipe book over the bundled recipes.
///
/// # Arguments
/// * `config_yaml` - Optional YAML configuration; defaults apply when absent
#[uniffi::export]
pub fn open_bundled(config_yaml: Option<String>) -> Result<Arc<FfiRecipeBook>, RecipeBookError> {
    let config = Config::from_yaml_str(config_yaml.as_deref().unwrap_or_default())?;
    let book = RecipeBook::new(Catalog::bundled()?, config);
    Ok(Arc::new(FfiRecipeBook::new(book)))
}

/// Opens a recipe book over a YAML catalog string.
#[uniffi::export]
pub fn open_from_yaml(
    catalog_yaml: String,
    config_yaml: Option<String>,
) -> Result<Arc<FfiRecipeBook>, RecipeBookError> {
    let config = Config::from_yaml_str(config_yaml.as_deref().unwrap_or_default())?;
    let book = RecipeBook::new(Catalog::from_yaml_str(&catalog_yaml)?, config);
    Ok(Arc::new(FfiRecipeBook::new(book)))
}

/// Opens a recipe book from a catalog file and an optional config file.
#[uniffi::export]
pub fn open_from_paths(
    catalog_path: String,
    config_path: Option<String>,
) -> Result<Arc<FfiRecipeBook>, RecipeBookError> {
    let config = match config_path {
        Some(path) => Config::from_path(Utf8Path::new(&path))?,
        None => Config::default(),
    };
    let catalog = Catalog::from_path(Utf8Path::new(&catalog_path))?;
    Ok(Arc::new(FfiRecipeBook::new(RecipeBook::new(catalog, config))))
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
