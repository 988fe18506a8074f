pub mod book;
pub mod card;
pub mod catalog;
pub mod config;
pub mod ffi;
pub mod folder;
pub mod import;
pub mod menu;
pub mod model;

pub use book::{LibraryStats, RecipeBook};
pub use card::{CardDeck, RecipeCard, SwipeAction};
pub use catalog::{Catalog, CatalogError};
pub use config::{Config, ConfigError};
pub use folder::{Folder, FolderId, FolderStore, FolderStyle};
pub use import::{LinkImport, LinkImportStatus};
pub use menu::{consolidate, ConsolidatedIngredient, Menu, ShoppingList};
pub use model::*;

uniffi::setup_scaffolding!();
