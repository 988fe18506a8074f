//! User folders and their recipe memberships.
//!
//! A recipe may sit in any number of folders. Folder names are not unique,
//! ids are. Every operation that receives invalid input (a blank name, an
//! unknown id) leaves the store untouched and says so through its return
//! value instead of failing.

use crate::catalog::Catalog;
use crate::model::{Recipe, RecipeId};

mod model;

pub use model::{Folder, FolderId, FolderStyle};

#[derive(Debug, Clone)]
pub struct FolderStore {
    folders: Vec<Folder>,
    next_id: u64,
}

impl Default for FolderStore {
    fn default() -> Self {
        FolderStore::new()
    }
}

impl FolderStore {
    pub fn new() -> Self {
        FolderStore {
            folders: Vec::new(),
            next_id: 1,
        }
    }

    /// A store holding the three starter folders, filled from `catalog`.
    ///
    /// - "Favorites ❤️": liked recipes
    /// - "Quick Meals ⚡": recipes ready in 25 minutes or less
    /// - "Desserts 🍰": recipes whose name mentions cookies or chocolate
    pub fn seeded(catalog: &Catalog) -> Self {
        let mut store = FolderStore::new();
        let starters: [(&str, FolderStyle, fn(&Recipe) -> bool); 3] = [
            ("Favorites ❤️", FolderStyle::Accent, |r| r.liked),
            ("Quick Meals ⚡", FolderStyle::Warning, |r| {
                r.cook_minutes().is_some_and(|minutes| minutes <= 25)
            }),
            ("Desserts 🍰", FolderStyle::Secondary, |r| {
                let name = r.name.to_lowercase();
                name.contains("cookie") || name.contains("chocolate")
            }),
        ];

        for (name, style, belongs) in starters {
            let id = store.allocate(name.to_string(), style);
            for recipe in catalog.all().iter().filter(|r| belongs(r)) {
                store.add_recipe(id, recipe.id.clone());
            }
        }
        store
    }

    fn allocate(&mut self, name: String, style: FolderStyle) -> FolderId {
        let id = FolderId(self.next_id);
        self.next_id += 1;
        self.folders.push(Folder::new(id, name, style));
        id
    }

    /// Creates an empty folder and returns its id.
    ///
    /// Returns `None` without touching the store when `name` is blank.
    pub fn create_folder(&mut self, name: &str) -> Option<FolderId> {
        if name.trim().is_empty() {
            return None;
        }
        let id = self.allocate(name.to_string(), FolderStyle::default());
        tracing::debug!("Created folder {id} ({name})");
        Some(id)
    }

    /// Creates a folder that already holds `recipe`.
    pub fn create_folder_with_recipe(&mut self, name: &str, recipe: RecipeId) -> Option<FolderId> {
        let id = self.create_folder(name)?;
        self.add_recipe(id, recipe);
        Some(id)
    }

    /// Renames a folder in place. Returns false for a blank name or an
    /// unknown folder.
    pub fn rename_folder(&mut self, id: FolderId, new_name: &str) -> bool {
        if new_name.trim().is_empty() {
            return false;
        }
        match self.get_mut(id) {
            Some(folder) => {
                folder.name = new_name.to_string();
                tracing::debug!("Renamed folder {id} to {new_name}");
                true
            }
            None => false,
        }
    }

    /// Removes a folder. Returns false if there was no such folder.
    pub fn delete_folder(&mut self, id: FolderId) -> bool {
        let before = self.folders.len();
        self.folders.retain(|folder| folder.id != id);
        let deleted = self.folders.len() != before;
        if deleted {
            tracing::debug!("Deleted folder {id}");
        }
        deleted
    }

    /// Adds `recipe` to the folder if absent, removes it otherwise.
    ///
    /// Returns `Some(true)` when the recipe was added, `Some(false)` when it
    /// was removed and `None` for an unknown folder.
    pub fn toggle_membership(&mut self, id: FolderId, recipe: RecipeId) -> Option<bool> {
        let folder = self.get_mut(id)?;
        let added = if folder.contains(&recipe) {
            folder.remove(&recipe);
            false
        } else {
            folder.insert(recipe);
            true
        };
        tracing::debug!("Folder {id} membership toggled, added: {added}");
        Some(added)
    }

    /// Adds `recipe` unless it is already a member. Returns true if the
    /// folder changed.
    pub fn add_recipe(&mut self, id: FolderId, recipe: RecipeId) -> bool {
        self.get_mut(id).is_some_and(|folder| folder.insert(recipe))
    }

    /// Removes `recipe` if it is a member. Returns true if the folder changed.
    pub fn remove_recipe(&mut self, id: FolderId, recipe: &RecipeId) -> bool {
        self.get_mut(id).is_some_and(|folder| folder.remove(recipe))
    }

    /// Ids of every folder holding `recipe`, in folder order.
    pub fn folder_ids_for_recipe(&self, recipe: &RecipeId) -> Vec<FolderId> {
        self.folders
            .iter()
            .filter(|folder| folder.contains(recipe))
            .map(|folder| folder.id)
            .collect()
    }

    pub fn get(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id == id)
    }

    fn get_mut(&mut self, id: FolderId) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|folder| folder.id == id)
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Sum of folder sizes; a recipe in two folders counts twice.
    pub fn total_memberships(&self) -> usize {
        self.folders.iter().map(Folder::len).sum()
    }
}
