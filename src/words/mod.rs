//! Word lists backing username generation.
//!
//! Two categories of words feed the generator: adjectives and animals. The
//! lists embedded below are compiled into the binary and always available;
//! [`WordListProvider`] layers optional on-disk lists with hot reload on top.

mod provider;
mod watcher;

pub use provider::WordListProvider;
pub use watcher::watch;

use std::fmt;
use std::sync::Arc;

const ADJECTIVES: &str = include_str!("lists/adjectives.txt");
const ANIMALS: &str = include_str!("lists/animals.txt");

/// Word category, used in errors and reload logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Adjectives,
    Animals,
}

impl Category {
    /// File name the provider looks for in a resources directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Category::Adjectives => "adjectives.txt",
            Category::Animals => "animals.txt",
        }
    }

    /// Raw contents of the packaged list for this category.
    pub(crate) fn packaged(self) -> &'static str {
        match self {
            Category::Adjectives => ADJECTIVES,
            Category::Animals => ANIMALS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Adjectives => write!(f, "adjectives"),
            Category::Animals => write!(f, "animals"),
        }
    }
}

/// Immutable snapshot of both word lists.
///
/// Cloning is cheap (two `Arc` bumps). A snapshot taken before a generation
/// call is unaffected by concurrent reloads.
#[derive(Debug, Clone)]
pub struct WordLists {
    pub adjectives: Arc<Vec<String>>,
    pub animals: Arc<Vec<String>>,
}

impl WordLists {
    /// Snapshot built from fixed lists, mainly useful in tests.
    pub fn fixed<S: Into<String>>(adjectives: Vec<S>, animals: Vec<S>) -> Self {
        Self {
            adjectives: Arc::new(adjectives.into_iter().map(Into::into).collect()),
            animals: Arc::new(animals.into_iter().map(Into::into).collect()),
        }
    }
}

/// Source of current word lists.
///
/// Implementations must hand out a non-empty list per category whenever the
/// external backing source is missing or invalid, falling back to the
/// packaged defaults.
pub trait WordSource {
    fn adjectives(&self) -> Arc<Vec<String>>;
    fn animals(&self) -> Arc<Vec<String>>;

    /// Capture both lists at once.
    fn snapshot(&self) -> WordLists {
        WordLists {
            adjectives: self.adjectives(),
            animals: self.animals(),
        }
    }
}

impl WordSource for WordLists {
    fn adjectives(&self) -> Arc<Vec<String>> {
        Arc::clone(&self.adjectives)
    }

    fn animals(&self) -> Arc<Vec<String>> {
        Arc::clone(&self.animals)
    }
}

impl<S: WordSource> WordSource for Arc<S> {
    fn adjectives(&self) -> Arc<Vec<String>> {
        (**self).adjectives()
    }

    fn animals(&self) -> Arc<Vec<String>> {
        (**self).animals()
    }
}

/// Parse a word list: one word per line, trimmed, blank lines skipped.
pub(crate) fn parse_words(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
