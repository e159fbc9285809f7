//! Random human-readable username generation.
//!
//! Usernames are assembled from two word lists (adjectives and animals) with
//! optional transforms: truncation, leetspeak substitution, lowercasing, and
//! a numeric suffix. Word lists can be backed by plain text files that are
//! hot-reloaded when they change on disk; a packaged set is always available
//! as a fallback.
//!
//! ```
//! use crittergen::{GenerationConfig, UsernameGenerator};
//!
//! let generator = UsernameGenerator::with_defaults();
//! let config = GenerationConfig {
//!     separator: "-".to_string(),
//!     to_lower: true,
//!     ..Default::default()
//! };
//! let name = generator.generate(&config).unwrap();
//! assert!(name.contains('-'));
//! ```

pub mod config;
pub mod generator;
pub mod words;

pub use config::{load_config, save_config, AppConfig, GenerationConfig, WatchConfig};
pub use generator::{fancify, fancify_with, generate, FancyOptions, GeneratorError};
pub use words::{Category, WordListProvider, WordLists, WordSource};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rand::RngExt;

/// Username generator bound to a word source.
pub struct UsernameGenerator<S = WordListProvider> {
    source: S,
}

impl UsernameGenerator<WordListProvider> {
    /// Generator backed by the packaged word lists.
    pub fn with_defaults() -> Self {
        Self::new(WordListProvider::builtin())
    }

    /// Generator backed by word-list files under `dir`, falling back to the
    /// packaged lists per category.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(WordListProvider::from_dir(dir))
    }
}

impl UsernameGenerator<Arc<WordListProvider>> {
    /// Generator built from an [`AppConfig`]: file-backed when `resources`
    /// is set, with the polling watcher spawned when watching is enabled.
    ///
    /// Must be called from within a tokio runtime when watching is enabled;
    /// the watcher stops on its own once the generator is dropped.
    pub fn from_config(config: &AppConfig) -> Self {
        let provider = Arc::new(match &config.resources {
            Some(dir) => WordListProvider::from_dir(dir),
            None => WordListProvider::builtin(),
        });
        if config.watch.enabled {
            let _ = words::watch(&provider, Duration::from_secs(config.watch.interval_secs));
        }
        Self::new(provider)
    }
}

impl<S: WordSource> UsernameGenerator<S> {
    /// Wrap an arbitrary word source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying word source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Generate a username with the thread-local RNG.
    pub fn generate(&self, config: &GenerationConfig) -> Result<String, GeneratorError> {
        self.generate_with(config, &mut rand::rng())
    }

    /// Generate a username with a caller-supplied RNG. Deterministic for a
    /// seeded RNG and fixed word lists.
    pub fn generate_with<R: RngExt + ?Sized>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        generator::generate(config, &self.source.snapshot(), rng)
    }
}
