//! Username assembly pipeline.
//!
//! A username is built in a fixed order: adjective draws, the separator
//! literal, animal draws, then the optional transforms (truncation,
//! leetspeak, lowercasing, numeric suffix). The numeric suffix is appended
//! after truncation and may push the result past `max_length`.

mod fancy;

pub use fancy::{fancify, fancify_with, FancyOptions};

use rand::RngExt;
use thiserror::Error;

use crate::config::GenerationConfig;
use crate::words::{Category, WordLists};

/// Errors surfaced by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// A category with a non-zero word count has no words to draw from.
    #[error("the {category} word list is empty")]
    EmptyWordList { category: Category },

    /// The configuration cannot produce a username.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Assemble a username from the given word lists.
///
/// Words are drawn uniformly with replacement. The result is deterministic
/// for a seeded `rng` and fixed lists; randomness is consumed in a fixed
/// order (adjectives, animals, leetspeak, numeric suffix).
pub fn generate<R: RngExt + ?Sized>(
    config: &GenerationConfig,
    words: &WordLists,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    validate(config, words)?;

    let mut username = String::new();
    for _ in 0..config.adjective_count {
        username.push_str(&words.adjectives[rng.random_range(0..words.adjectives.len())]);
    }
    username.push_str(&config.separator);
    for _ in 0..config.animal_count {
        username.push_str(&words.animals[rng.random_range(0..words.animals.len())]);
    }

    if let Some(max) = config.max_length {
        if username.chars().count() > max {
            username = username.chars().take(max).collect();
        }
    }

    if config.fancy {
        username = fancify(&username, rng);
    }

    if config.to_lower {
        username = username.to_lowercase();
    }

    if config.add_numbers {
        let n = rng.random_range(config.min_numbers_value..config.max_numbers_value);
        username.push_str(&n.to_string());
    }

    Ok(username)
}

fn validate(config: &GenerationConfig, words: &WordLists) -> Result<(), GeneratorError> {
    if config.max_length == Some(0) {
        return Err(GeneratorError::InvalidConfiguration {
            message: "max_length must be greater than zero".to_string(),
        });
    }
    if config.add_numbers && config.min_numbers_value >= config.max_numbers_value {
        return Err(GeneratorError::InvalidConfiguration {
            message: format!(
                "numeric suffix range [{}, {}) is empty",
                config.min_numbers_value, config.max_numbers_value
            ),
        });
    }
    if config.adjective_count > 0 && words.adjectives.is_empty() {
        return Err(GeneratorError::EmptyWordList {
            category: Category::Adjectives,
        });
    }
    if config.animal_count > 0 && words.animals.is_empty() {
        return Err(GeneratorError::EmptyWordList {
            category: Category::Animals,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quick_fox() -> WordLists {
        WordLists::fixed(vec!["Quick"], vec!["Fox"])
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn single_word_lists_make_output_deterministic() {
        let config = GenerationConfig {
            separator: "-".to_string(),
            to_lower: true,
            ..Default::default()
        };
        let name = generate(&config, &quick_fox(), &mut rng()).unwrap();
        assert_eq!(name, "quick-fox");
    }

    #[test]
    fn repeated_draws_concatenate_without_separator() {
        let config = GenerationConfig {
            adjective_count: 2,
            ..Default::default()
        };
        let name = generate(&config, &quick_fox(), &mut rng()).unwrap();
        assert_eq!(name, "QuickQuickFox");
    }

    #[test]
    fn assembly_is_picks_plus_separator_plus_picks() {
        let lists = WordLists::fixed(vec!["Bold", "Sly"], vec!["Fox", "Owl", "Lynx"]);
        let config = GenerationConfig {
            adjective_count: 3,
            animal_count: 2,
            separator: "_".to_string(),
            ..Default::default()
        };
        let name = generate(&config, &lists, &mut rng()).unwrap();

        let (adjectives, animals) = name.split_once('_').unwrap();
        let mut rest = adjectives;
        for _ in 0..3 {
            let word = ["Bold", "Sly"]
                .iter()
                .find(|w| rest.starts_with(**w))
                .unwrap();
            rest = &rest[word.len()..];
        }
        assert!(rest.is_empty());

        let mut rest = animals;
        for _ in 0..2 {
            let word = ["Fox", "Owl", "Lynx"]
                .iter()
                .find(|w| rest.starts_with(**w))
                .unwrap();
            rest = &rest[word.len()..];
        }
        assert!(rest.is_empty());
    }

    #[test]
    fn zero_counts_give_just_the_separator() {
        let config = GenerationConfig {
            adjective_count: 0,
            animal_count: 0,
            separator: "-".to_string(),
            ..Default::default()
        };
        let name = generate(&config, &quick_fox(), &mut rng()).unwrap();
        assert_eq!(name, "-");
    }

    #[test]
    fn truncates_to_exactly_max_length() {
        let config = GenerationConfig {
            adjective_count: 2,
            max_length: Some(7),
            ..Default::default()
        };
        let name = generate(&config, &quick_fox(), &mut rng()).unwrap();
        assert_eq!(name, "QuickQu");
    }

    #[test]
    fn short_output_is_not_padded_or_cut() {
        let config = GenerationConfig {
            max_length: Some(100),
            ..Default::default()
        };
        let name = generate(&config, &quick_fox(), &mut rng()).unwrap();
        assert_eq!(name, "QuickFox");
    }

    #[test]
    fn lowercased_output_has_no_uppercase_ascii() {
        let config = GenerationConfig {
            adjective_count: 3,
            animal_count: 3,
            to_lower: true,
            fancy: true,
            add_numbers: true,
            ..Default::default()
        };
        let lists = WordLists::fixed(vec!["Noble", "Sly"], vec!["Ocelot", "Owl"]);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let name = generate(&config, &lists, &mut rng).unwrap();
            assert!(!name.chars().any(|c| c.is_ascii_uppercase()), "{name}");
        }
    }

    #[test]
    fn degenerate_number_range_appends_its_only_value() {
        let config = GenerationConfig {
            add_numbers: true,
            min_numbers_value: 5,
            max_numbers_value: 6,
            ..Default::default()
        };
        let name = generate(&config, &quick_fox(), &mut rng()).unwrap();
        assert_eq!(name, "QuickFox5");
    }

    #[test]
    fn numeric_suffix_may_exceed_max_length() {
        let config = GenerationConfig {
            max_length: Some(4),
            add_numbers: true,
            min_numbers_value: 10,
            max_numbers_value: 11,
            ..Default::default()
        };
        let name = generate(&config, &quick_fox(), &mut rng()).unwrap();
        assert_eq!(name, "Quic10");
    }

    #[test]
    fn empty_required_list_is_an_error() {
        let lists = WordLists::fixed(Vec::<&str>::new(), vec!["Fox"]);
        let err = generate(&GenerationConfig::default(), &lists, &mut rng()).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::EmptyWordList {
                category: Category::Adjectives
            }
        );
    }

    #[test]
    fn empty_unused_list_is_fine() {
        let lists = WordLists::fixed(Vec::<&str>::new(), vec!["Fox"]);
        let config = GenerationConfig {
            adjective_count: 0,
            ..Default::default()
        };
        assert_eq!(generate(&config, &lists, &mut rng()).unwrap(), "Fox");
    }

    #[test]
    fn inverted_number_range_is_rejected() {
        let config = GenerationConfig {
            add_numbers: true,
            min_numbers_value: 10,
            max_numbers_value: 10,
            ..Default::default()
        };
        let err = generate(&config, &quick_fox(), &mut rng()).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfiguration { .. }));
    }

    #[test]
    fn number_range_is_ignored_without_add_numbers() {
        let config = GenerationConfig {
            min_numbers_value: 10,
            max_numbers_value: 10,
            ..Default::default()
        };
        assert!(generate(&config, &quick_fox(), &mut rng()).is_ok());
    }

    #[test]
    fn zero_max_length_is_rejected() {
        let config = GenerationConfig {
            max_length: Some(0),
            ..Default::default()
        };
        let err = generate(&config, &quick_fox(), &mut rng()).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfiguration { .. }));
    }

    #[test]
    fn same_seed_and_lists_give_same_name() {
        let lists = WordLists::fixed(
            vec!["Bold", "Sly", "Keen"],
            vec!["Fox", "Owl", "Lynx"],
        );
        let config = GenerationConfig {
            adjective_count: 2,
            animal_count: 2,
            fancy: true,
            add_numbers: true,
            ..Default::default()
        };
        let a = generate(&config, &lists, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate(&config, &lists, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = GeneratorError::EmptyWordList {
            category: Category::Animals,
        };
        assert_eq!(err.to_string(), "the animals word list is empty");
    }
}
