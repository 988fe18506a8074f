//! The single owner of all application state.
//!
//! Views read through `RecipeBook` and every change goes through one of its
//! methods, which keeps the cross-store rules in one place:
//! - folders only ever reference recipes present in the catalog
//! - deleting the folder being viewed closes that view
//! - the shopping list is rebuilt from the menu on every read

use crate::card::{CardDeck, RecipeCard, SwipeAction};
use crate::catalog::{Catalog, CatalogError};
use crate::config::Config;
use crate::folder::{Folder, FolderId, FolderStore};
use crate::import::{LinkImport, LinkImportStatus};
use crate::menu::{Menu, ShoppingList};
use crate::model::{Recipe, RecipeId};
use serde::Serialize;

/// Numbers shown under the folder grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    pub folders: usize,
    /// Sum of folder sizes.
    pub recipes_in_folders: usize,
    /// Liked recipes in the catalog.
    pub favorites: usize,
}

#[derive(Debug, Clone)]
pub struct RecipeBook {
    config: Config,
    catalog: Catalog,
    folders: FolderStore,
    menu: Menu,
    deck: CardDeck,
    selected_folder: Option<FolderId>,
    link_import: LinkImport,
    made: Vec<RecipeId>,
}

impl RecipeBook {
    /// Starts a book over `catalog` with the starter folders, the first
    /// `config.menu.seed_with_first` recipes planned and the most recent
    /// recipes on the card deck.
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let folders = FolderStore::seeded(&catalog);

        let mut menu = Menu::new(config.menu.keep_checked);
        for recipe in catalog.all().iter().take(config.menu.seed_with_first) {
            menu.add(recipe);
        }

        let deck = CardDeck::new(
            catalog
                .recent(config.catalog.recent_limit)
                .into_iter()
                .map(|recipe| recipe.id.clone())
                .collect(),
        );
        let link_import = LinkImport::new(config.import.delay());

        tracing::info!(
            "Recipe book ready: {} recipes, {} folders, {} planned",
            catalog.len(),
            folders.len(),
            menu.len()
        );

        RecipeBook {
            config,
            catalog,
            folders,
            menu,
            deck,
            selected_folder: None,
            link_import,
            made: Vec::new(),
        }
    }

    /// A book over the bundled recipes with default settings.
    pub fn bundled() -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::bundled()?, Config::default()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recipe(&self, id: &RecipeId) -> Option<&Recipe> {
        self.catalog.get(id)
    }

    pub fn recent(&self) -> Vec<&Recipe> {
        self.catalog.recent(self.config.catalog.recent_limit)
    }

    pub fn popular(&self) -> Vec<&Recipe> {
        self.catalog.popular(self.config.catalog.popular_limit)
    }

    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        self.catalog.search(query)
    }

    /// The explore listing: search results for a non-blank query, popular
    /// recipes otherwise.
    pub fn explore(&self, query: &str) -> Vec<&Recipe> {
        if query.trim().is_empty() {
            self.popular()
        } else {
            self.search(query)
        }
    }

    pub fn toggle_like(&mut self, id: &RecipeId) -> Option<bool> {
        self.catalog.toggle_like(id)
    }

    pub fn card(&self, id: &RecipeId) -> Option<RecipeCard> {
        self.catalog.get(id).cloned().map(RecipeCard::new)
    }

    // ------------------------------------------------------------------
    // Folders
    // ------------------------------------------------------------------

    pub fn folders(&self) -> &[Folder] {
        self.folders.folders()
    }

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.get(id)
    }

    pub fn create_folder(&mut self, name: &str) -> Option<FolderId> {
        self.folders.create_folder(name)
    }

    /// Creates a folder and saves `recipe` into it, as the folder picker does.
    /// Nothing is created if the recipe is unknown or the name blank.
    pub fn create_folder_with_recipe(&mut self, name: &str, recipe: &RecipeId) -> Option<FolderId> {
        if !self.catalog.contains(recipe) {
            return None;
        }
        self.folders.create_folder_with_recipe(name, recipe.clone())
    }

    pub fn rename_folder(&mut self, id: FolderId, new_name: &str) -> bool {
        self.folders.rename_folder(id, new_name)
    }

    /// Deletes a folder, closing it first if it is the one being viewed.
    pub fn delete_folder(&mut self, id: FolderId) -> bool {
        if self.selected_folder == Some(id) {
            self.selected_folder = None;
        }
        self.folders.delete_folder(id)
    }

    /// Toggles `recipe` in a folder. `None` if either the folder or the
    /// recipe is unknown.
    pub fn toggle_membership(&mut self, id: FolderId, recipe: &RecipeId) -> Option<bool> {
        if !self.catalog.contains(recipe) {
            return None;
        }
        self.folders.toggle_membership(id, recipe.clone())
    }

    pub fn folder_ids_for_recipe(&self, recipe: &RecipeId) -> Vec<FolderId> {
        self.folders.folder_ids_for_recipe(recipe)
    }

    /// Opens a folder's detail view. Unknown folders are ignored.
    pub fn select_folder(&mut self, id: FolderId) -> bool {
        if self.folders.get(id).is_none() {
            return false;
        }
        self.selected_folder = Some(id);
        true
    }

    /// Returns to the folder list.
    pub fn close_folder(&mut self) {
        self.selected_folder = None;
    }

    pub fn selected_folder(&self) -> Option<&Folder> {
        self.selected_folder.and_then(|id| self.folders.get(id))
    }

    /// Recipes of a folder whose name contains `query`, ignoring case, in
    /// membership order. A blank query lists the whole folder.
    pub fn folder_recipes(&self, id: FolderId, query: &str) -> Vec<&Recipe> {
        let Some(folder) = self.folders.get(id) else {
            return Vec::new();
        };
        let query = query.trim().to_lowercase();
        folder
            .recipes()
            .iter()
            .filter_map(|recipe| self.catalog.get(recipe))
            .filter(|recipe| query.is_empty() || recipe.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn stats(&self) -> LibraryStats {
        LibraryStats {
            folders: self.folders.len(),
            recipes_in_folders: self.folders.total_memberships(),
            favorites: self.catalog.liked().len(),
        }
    }

    // ------------------------------------------------------------------
    // Menu
    // ------------------------------------------------------------------

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn add_to_menu(&mut self, id: &RecipeId) -> bool {
        match self.catalog.get(id) {
            Some(recipe) => self.menu.add(recipe),
            None => false,
        }
    }

    pub fn remove_from_menu(&mut self, id: &RecipeId) -> bool {
        self.menu.remove(id)
    }

    pub fn shopping_list(&self) -> ShoppingList {
        self.menu.shopping_list()
    }

    pub fn toggle_shopping_item(&mut self, name: &str) -> Option<bool> {
        self.menu.toggle_item(name)
    }

    pub fn toggle_recipe_ingredient(&mut self, id: &RecipeId, index: usize) -> Option<bool> {
        self.menu.toggle_recipe_ingredient(id, index)
    }

    // ------------------------------------------------------------------
    // Swipes
    // ------------------------------------------------------------------

    /// Applies a released drag on the card of `recipe`.
    ///
    /// Left plans the recipe, right records it as made. Short drags do
    /// nothing.
    pub fn swipe(&mut self, recipe: &RecipeId, offset: f64) -> Option<SwipeAction> {
        if !self.catalog.contains(recipe) {
            return None;
        }
        let action = SwipeAction::classify(offset, self.config.card.swipe_threshold)?;
        match action {
            SwipeAction::AddToMenu => {
                self.add_to_menu(recipe);
            }
            SwipeAction::MarkAsMade => {
                tracing::debug!("Marked as made: {recipe}");
                self.made.push(recipe.clone());
            }
        }
        Some(action)
    }

    /// The action a card dragged `offset` pixels is heading for, shown
    /// before the drag is released.
    pub fn swipe_hint(&self, offset: f64) -> Option<SwipeAction> {
        SwipeAction::hint(offset, self.config.card.swipe_threshold)
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    /// Swipes the top card of the home deck and, if the drag counted, moves
    /// on to the next card.
    pub fn swipe_deck(&mut self, offset: f64) -> Option<SwipeAction> {
        let current = self.deck.current()?.clone();
        let action = self.swipe(&current, offset)?;
        self.deck.advance();
        Some(action)
    }

    /// Recipes swiped as made, oldest first.
    pub fn made(&self) -> &[RecipeId] {
        &self.made
    }

    // ------------------------------------------------------------------
    // Link import
    // ------------------------------------------------------------------

    pub fn link_status(&self) -> &LinkImportStatus {
        self.link_import.status()
    }

    pub fn link_import(&self) -> &LinkImport {
        &self.link_import
    }

    pub fn submit_link(&mut self, url: &str) -> bool {
        self.link_import.submit(url)
    }

    pub fn complete_link(&mut self) -> Option<String> {
        self.link_import.complete()
    }

    pub fn cancel_link(&mut self) {
        self.link_import.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn book() -> RecipeBook {
        RecipeBook::bundled().unwrap()
    }

    fn id(id: &str) -> RecipeId {
        RecipeId::new(id)
    }

    #[test]
    fn test_initial_state() {
        let book = book();
        assert_eq!(book.folders().len(), 3);
        assert_eq!(book.menu().len(), 3);
        assert_eq!(book.deck().len(), 6);
        assert_eq!(book.deck().current(), Some(&id("1")));
        assert!(book.selected_folder().is_none());
        assert_eq!(book.shopping_list().len(), 22);
    }

    #[test]
    fn test_config_shapes_initial_state() {
        let config = Config::from_yaml_str(indoc! {r#"
            catalog:
              recent_limit: 2
              popular_limit: 1
            menu:
              seed_with_first: 0
        "#})
        .unwrap();
        let book = RecipeBook::new(Catalog::bundled().unwrap(), config);

        assert!(book.menu().is_empty());
        assert!(book.shopping_list().is_empty());
        assert_eq!(book.deck().len(), 2);
        assert_eq!(book.recent().len(), 2);
        assert_eq!(book.popular().len(), 1);
    }

    #[test]
    fn test_deleting_viewed_folder_closes_it() {
        let mut book = book();
        let folder = book.create_folder("Weeknight").unwrap();
        assert!(book.select_folder(folder));
        assert_eq!(book.selected_folder().unwrap().name(), "Weeknight");

        assert!(book.delete_folder(folder));
        assert!(book.selected_folder().is_none());
        assert!(book.folder(folder).is_none());
    }

    #[test]
    fn test_deleting_other_folder_keeps_view() {
        let mut book = book();
        let viewed = book.create_folder("Viewed").unwrap();
        let other = book.create_folder("Other").unwrap();
        book.select_folder(viewed);

        assert!(book.delete_folder(other));
        assert_eq!(book.selected_folder().unwrap().id(), viewed);
        assert!(!book.delete_folder(other));
    }

    #[test]
    fn test_select_unknown_folder() {
        let mut book = book();
        assert!(!book.select_folder(FolderId::from(99)));
        assert!(book.selected_folder().is_none());
    }

    #[test]
    fn test_membership_requires_catalog_recipe() {
        let mut book = book();
        let folder = book.create_folder("Mine").unwrap();

        assert_eq!(book.toggle_membership(folder, &id("404")), None);
        assert!(book.folder(folder).unwrap().is_empty());
        assert_eq!(book.create_folder_with_recipe("Ghost", &id("404")), None);
        assert_eq!(book.folders().len(), 4);

        assert_eq!(book.toggle_membership(folder, &id("6")), Some(true));
        assert_eq!(
            book.folder_ids_for_recipe(&id("6")),
            vec![FolderId::from(2), folder]
        );
    }

    #[test]
    fn test_folder_recipes_filter_by_name() {
        let book = book();
        let quick = FolderId::from(2);

        let names = |query: &str| -> Vec<String> {
            book.folder_recipes(quick, query)
                .into_iter()
                .map(|r| r.name.clone())
                .collect()
        };
        assert_eq!(names("").len(), 4);
        assert_eq!(names("SALMON"), vec!["Salmon Teriyaki"]);
        // Folder search looks at names only.
        assert!(names("garlic").is_empty());
        assert!(book.folder_recipes(FolderId::from(99), "").is_empty());
    }

    #[test]
    fn test_stats() {
        let mut book = book();
        assert_eq!(
            book.stats(),
            LibraryStats {
                folders: 3,
                recipes_in_folders: 8,
                favorites: 3,
            }
        );

        let folder = book.create_folder_with_recipe("Again", &id("1")).unwrap();
        book.toggle_like(&id("4"));
        let stats = book.stats();
        assert_eq!(stats.folders, 4);
        assert_eq!(stats.recipes_in_folders, 9);
        assert_eq!(stats.favorites, 4);
        assert!(book.folder(folder).unwrap().contains(&id("1")));
    }

    #[test]
    fn test_explore() {
        let book = book();
        assert_eq!(book.explore("").len(), 5);
        assert_eq!(book.explore("  ").len(), 5);
        assert_eq!(book.explore("soy").len(), 2);
    }

    #[test]
    fn test_swipes() {
        let mut book = book();
        let salmon = id("6");

        assert_eq!(book.swipe(&salmon, -40.0), None);
        assert!(!book.menu().contains(&salmon));

        assert_eq!(book.swipe(&salmon, -140.0), Some(SwipeAction::AddToMenu));
        assert!(book.menu().contains(&salmon));

        assert_eq!(book.swipe(&salmon, 140.0), Some(SwipeAction::MarkAsMade));
        assert_eq!(book.made(), &[salmon]);

        assert_eq!(book.swipe(&id("404"), -500.0), None);
    }

    #[test]
    fn test_swipe_hint_uses_configured_threshold() {
        let book = book();
        assert_eq!(book.swipe_hint(-60.0), Some(SwipeAction::AddToMenu));
        assert_eq!(book.swipe_hint(50.0), None);

        let config = Config::from_yaml_str("card:\n  swipe_threshold: 300\n").unwrap();
        let book = RecipeBook::new(Catalog::bundled().unwrap(), config);
        assert_eq!(book.swipe_hint(120.0), None);
        assert_eq!(book.swipe_hint(160.0), Some(SwipeAction::MarkAsMade));
        assert_eq!(book.swipe_hint(f64::NAN), None);
    }

    #[test]
    fn test_nan_drag_leaves_deck_alone() {
        let mut book = book();
        assert_eq!(book.swipe_deck(f64::NAN), None);
        assert_eq!(book.deck().index(), 0);
        assert!(book.made().is_empty());
    }

    #[test]
    fn test_swipe_deck_advances_on_real_swipes_only() {
        let mut book = book();
        assert_eq!(book.swipe_deck(20.0), None);
        assert_eq!(book.deck().index(), 0);

        assert_eq!(book.swipe_deck(200.0), Some(SwipeAction::MarkAsMade));
        assert_eq!(book.deck().current(), Some(&id("2")));
        assert_eq!(book.made(), &[id("1")]);
    }

    #[test]
    fn test_menu_round_trip_through_book() {
        let mut book = book();
        assert!(!book.add_to_menu(&id("404")));
        assert!(book.add_to_menu(&id("6")));
        let garlic = book.shopping_list().get("garlic cloves").unwrap().amount;
        assert_eq!(garlic, 9.0);

        assert!(book.remove_from_menu(&id("6")));
        assert_eq!(
            book.shopping_list().get("garlic cloves").unwrap().amount,
            7.0
        );
    }

    #[test]
    fn test_link_import() {
        let mut book = book();
        assert!(!book.submit_link("  "));
        assert!(book.submit_link("https://instagram.com/p/xyz"));
        assert!(matches!(
            book.link_status(),
            LinkImportStatus::Processing { url } if url == "https://instagram.com/p/xyz"
        ));
        assert_eq!(book.link_import().delay().as_millis(), 2000);
        assert!(book.complete_link().is_some());
        assert_eq!(book.link_status(), &LinkImportStatus::Idle);
    }

    #[test]
    fn test_card_for_recipe() {
        let book = book();
        let card = book.card(&id("3")).unwrap();
        assert_eq!(card.servings(), 24);
        assert!(book.card(&id("404")).is_none());
    }
}
