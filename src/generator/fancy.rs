//! Leetspeak-style transform for generated usernames.
//!
//! Substitutes `o`→`0`, `l`→`1`, `e`→`3`, by default probabilistically:
//! each rule fires with 50% probability and replaces a random number of
//! occurrences, leftmost first. The transform never changes string length.

use rand::RngExt;

/// Substitution rules, applied in order. Each later rule sees the string as
/// mutated by the earlier ones.
const RULES: [(char, char); 3] = [('o', '0'), ('l', '1'), ('e', '3')];

/// Randomization knobs for [`fancify_with`].
#[derive(Debug, Clone, Copy)]
pub struct FancyOptions {
    /// Flip a coin per rule instead of always applying it.
    pub randomize_rules: bool,
    /// Replace a random number of occurrences instead of all of them.
    pub randomize_count: bool,
}

impl Default for FancyOptions {
    fn default() -> Self {
        Self {
            randomize_rules: true,
            randomize_count: true,
        }
    }
}

/// Apply the leetspeak substitutions with the default randomization.
pub fn fancify<R: RngExt + ?Sized>(username: &str, rng: &mut R) -> String {
    fancify_with(username, rng, FancyOptions::default())
}

/// Apply the leetspeak substitutions with explicit randomization knobs.
///
/// With both knobs disabled, every occurrence of every source character is
/// replaced, deterministically. The per-rule coin flip is consumed even when
/// the rule ends up replacing nothing.
pub fn fancify_with<R: RngExt + ?Sized>(
    username: &str,
    rng: &mut R,
    opts: FancyOptions,
) -> String {
    let mut username = username.to_string();
    for (from, to) in RULES {
        let apply = !opts.randomize_rules || rng.random_range(0..100) < 50;
        if !apply {
            continue;
        }
        let occurrences = username.chars().filter(|&c| c == from).count();
        if occurrences == 0 {
            continue;
        }
        let count = if opts.randomize_count {
            rng.random_range(1..=occurrences)
        } else {
            occurrences
        };
        username = replace_leftmost(&username, from, to, count);
    }
    username
}

/// Replace the first `count` occurrences of `from` with `to`.
fn replace_leftmost(s: &str, from: char, to: char, count: usize) -> String {
    let mut remaining = count;
    s.chars()
        .map(|c| {
            if c == from && remaining > 0 {
                remaining -= 1;
                to
            } else {
                c
            }
        })
        .collect()
}
