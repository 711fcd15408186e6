use std::collections::HashSet;

use crate::rules::PhonotacticRules;

/// Decides whether a candidate fake word is plausible as-is or must be
/// replaced. All checks are pure functions over the word, the rules, and
/// the real-word vocabulary.
pub struct Validator<'a> {
    rules: &'a PhonotacticRules,
    real_words: &'a HashSet<String>,
}

impl<'a> Validator<'a> {
    pub fn new(rules: &'a PhonotacticRules, real_words: &'a HashSet<String>) -> Self {
        Self { rules, real_words }
    }

    /// True if the rare-letter fraction strictly exceeds the threshold.
    ///
    /// Panics on an empty word: the fraction is undefined there. The
    /// short-word guard in [`Self::needs_replacement`] keeps this
    /// unreachable in normal operation.
    pub fn too_many_rare_letters(&self, word: &str) -> bool {
        assert!(!word.is_empty(), "rare-letter fraction is undefined for an empty word");
        let rare = word
            .chars()
            .filter(|c| self.rules.rare_letters.contains(c))
            .count();
        rare as f64 / word.len() as f64 > self.rules.max_rare_fraction
    }

    /// True if the word contains any configured cluster, or a Q that is
    /// not immediately followed by U (trailing Q included).
    pub fn has_bad_cluster(&self, word: &str) -> bool {
        if self.rules.clusters.iter().any(|&cluster| word.contains(cluster)) {
            return true;
        }
        let bytes = word.as_bytes();
        bytes
            .iter()
            .enumerate()
            .any(|(i, &b)| b == b'Q' && bytes.get(i + 1) != Some(&b'U'))
    }

    pub fn has_vowel(&self, word: &str) -> bool {
        word.chars().any(|c| self.rules.vowels.contains(&c))
    }

    pub fn is_known_real(&self, word: &str) -> bool {
        self.real_words.contains(word)
    }

    /// The whole acceptance policy: words shorter than the configured
    /// threshold are accepted unmodified; longer words are replaced when
    /// any heuristic flags them or the word turns out to be real.
    pub fn needs_replacement(&self, word: &str) -> bool {
        if word.len() < self.rules.min_check_length {
            return false;
        }
        self.too_many_rare_letters(word)
            || self.has_bad_cluster(word)
            || !self.has_vowel(word)
            || self.is_known_real(word)
    }
}
