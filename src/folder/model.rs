use crate::model::RecipeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a folder, unique for the lifetime of its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(pub(crate) u64);

impl FolderId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FolderId {
    fn from(id: u64) -> Self {
        FolderId(id)
    }
}

/// Cosmetic color tag of a folder card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderStyle {
    Accent,
    Warning,
    Secondary,
    #[default]
    Primary,
}

/// A named, user-managed group of recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub(crate) id: FolderId,
    pub(crate) name: String,
    pub(crate) recipes: Vec<RecipeId>,
    pub(crate) style: FolderStyle,
}

impl Folder {
    pub(crate) fn new(id: FolderId, name: String, style: FolderStyle) -> Self {
        Folder {
            id,
            name,
            recipes: Vec::new(),
            style,
        }
    }

    pub fn id(&self) -> FolderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> FolderStyle {
        self.style
    }

    /// Member recipes in the order they were added.
    pub fn recipes(&self) -> &[RecipeId] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn contains(&self, recipe: &RecipeId) -> bool {
        self.recipes.contains(recipe)
    }

    /// The first three members and the number of members not shown.
    pub fn preview(&self) -> (&[RecipeId], usize) {
        const PREVIEW_LEN: usize = 3;
        let shown = self.recipes.len().min(PREVIEW_LEN);
        (&self.recipes[..shown], self.recipes.len() - shown)
    }

    pub(crate) fn insert(&mut self, recipe: RecipeId) -> bool {
        if self.contains(&recipe) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    pub(crate) fn remove(&mut self, recipe: &RecipeId) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|member| member != recipe);
        self.recipes.len() != before
    }
}
