//! File-backed word lists with atomic replacement.
//!
//! Each category lives behind its own lock and is replaced wholesale on
//! reload. Readers clone the current `Arc` and never observe a partially
//! updated list; a missing or unreadable file falls back to the packaged
//! list for that category, so a provider always has words to offer.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use super::{parse_words, Category, WordSource};

/// Word lists loaded from an optional resources directory.
pub struct WordListProvider {
    resources: Option<PathBuf>,
    adjectives: RwLock<Arc<Vec<String>>>,
    animals: RwLock<Arc<Vec<String>>>,
}

impl WordListProvider {
    /// Provider backed only by the packaged lists.
    pub fn builtin() -> Self {
        Self {
            resources: None,
            adjectives: RwLock::new(Arc::new(parse_words(Category::Adjectives.packaged()))),
            animals: RwLock::new(Arc::new(parse_words(Category::Animals.packaged()))),
        }
    }

    /// Provider backed by `adjectives.txt` / `animals.txt` under `dir`.
    ///
    /// Construction never fails: a file that is missing, unreadable, or has
    /// no usable lines is replaced by the packaged list for that category.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let adjectives = load_category(&dir, Category::Adjectives);
        let animals = load_category(&dir, Category::Animals);
        Self {
            resources: Some(dir),
            adjectives: RwLock::new(Arc::new(adjectives)),
            animals: RwLock::new(Arc::new(animals)),
        }
    }

    /// Directory this provider reads from, if any.
    pub fn resources_dir(&self) -> Option<&Path> {
        self.resources.as_deref()
    }

    /// Re-read both categories from disk and swap them in. No-op for a
    /// builtin provider.
    pub fn reload(&self) {
        self.reload_category(Category::Adjectives);
        self.reload_category(Category::Animals);
    }

    /// Re-read a single category from disk and swap it in.
    pub fn reload_category(&self, category: Category) {
        let Some(dir) = &self.resources else { return };
        let words = load_category(dir, category);
        debug!("swapping in {} {} word(s)", words.len(), category);
        *self.slot(category).write().unwrap_or_else(PoisonError::into_inner) = Arc::new(words);
    }

    fn slot(&self, category: Category) -> &RwLock<Arc<Vec<String>>> {
        match category {
            Category::Adjectives => &self.adjectives,
            Category::Animals => &self.animals,
        }
    }

    fn current(&self, category: Category) -> Arc<Vec<String>> {
        Arc::clone(&self.slot(category).read().unwrap_or_else(PoisonError::into_inner))
    }
}

impl WordSource for WordListProvider {
    fn adjectives(&self) -> Arc<Vec<String>> {
        self.current(Category::Adjectives)
    }

    fn animals(&self) -> Arc<Vec<String>> {
        self.current(Category::Animals)
    }
}

fn load_category(dir: &Path, category: Category) -> Vec<String> {
    let path = dir.join(category.file_name());
    match std::fs::read_to_string(&path) {
        Ok(raw) => {
            let words = parse_words(&raw);
            if words.is_empty() {
                warn!(
                    "{} has no usable lines, using packaged {}",
                    path.display(),
                    category
                );
                parse_words(category.packaged())
            } else {
                debug!("loaded {} {} from {}", words.len(), category, path.display());
                words
            }
        }
        Err(e) => {
            warn!(
                "could not read {} ({}), using packaged {}",
                path.display(),
                e,
                category
            );
            parse_words(category.packaged())
        }
    }
}
