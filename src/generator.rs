use rand::Rng;
use rand::seq::SliceRandom;

use crate::rules::PhonotacticRules;

/// Synthesizes random pronounceable-looking words of an exact length.
///
/// The RNG is passed in by the caller so a fixed seed reproduces the same
/// word sequence across runs.
pub struct Generator<'a> {
    rules: &'a PhonotacticRules,
}

impl<'a> Generator<'a> {
    pub fn new(rules: &'a PhonotacticRules) -> Self {
        Self { rules }
    }

    /// Build a fake word of exactly `length` characters, possibly ending
    /// in a common suffix.
    ///
    /// Draw order per call: one suffix, one skeleton pattern, then one
    /// letter per stem slot. The stem is sized to at least 2 characters
    /// even when the suffix alone covers the target; the final truncation
    /// enforces the exact length.
    ///
    /// The result is not guaranteed to survive validation; callers
    /// re-check and retry.
    pub fn synthesize<R: Rng>(&self, length: usize, rng: &mut R) -> String {
        let suffix = *self.rules.suffixes.choose(rng).expect("suffix table is empty");
        let stem_len = length.saturating_sub(suffix.len()).max(2);
        let pattern = *self.rules.patterns.choose(rng).expect("pattern table is empty");

        let mut word = String::with_capacity(stem_len + suffix.len());
        // Cycle the pattern until the stem is full; the cycle may stop
        // mid-pattern.
        'stem: loop {
            for slot in pattern.chars() {
                let pool = if slot == 'V' {
                    self.rules.vowel_pool
                } else {
                    self.rules.consonant_pool
                };
                word.push(*pool.choose(rng).expect("letter pool is empty"));
                if word.len() >= stem_len {
                    break 'stem;
                }
            }
        }
        word.push_str(suffix);
        word.truncate(length);
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_output_length_is_exact() {
        let rules = PhonotacticRules::default();
        let generator = Generator::new(&rules);
        let mut rng = StdRng::seed_from_u64(42);
        for length in 1..=16 {
            for _ in 0..50 {
                let word = generator.synthesize(length, &mut rng);
                assert_eq!(word.len(), length, "wrong length for target {length}");
            }
        }
    }

    #[test]
    fn test_length_one_truncates_stem_floor() {
        // The stem floor of 2 must be cut back down by the truncation
        let rules = PhonotacticRules::default();
        let generator = Generator::new(&rules);
        let mut rng = StdRng::seed_from_u64(7);
        let word = generator.synthesize(1, &mut rng);
        assert_eq!(word.len(), 1);
    }

    #[test]
    fn test_output_is_uppercase_ascii() {
        let rules = PhonotacticRules::default();
        let generator = Generator::new(&rules);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let word = generator.synthesize(8, &mut rng);
            assert!(word.chars().all(|c| c.is_ascii_uppercase()), "non-uppercase in {word}");
        }
    }

    #[test]
    fn test_same_seed_reproduces_sequence() {
        let rules = PhonotacticRules::default();
        let generator = Generator::new(&rules);
        let mut first = StdRng::seed_from_u64(20_251_101);
        let mut second = StdRng::seed_from_u64(20_251_101);
        for length in [4, 5, 6, 9, 12] {
            assert_eq!(
                generator.synthesize(length, &mut first),
                generator.synthesize(length, &mut second)
            );
        }
    }

    #[test]
    fn test_stem_letters_come_from_pools() {
        // With single-letter pools and a single suffix the output is fully
        // determined, so every character can be accounted for.
        let rules = PhonotacticRules {
            suffixes: &["ED"],
            consonant_pool: &['T'],
            vowel_pool: &['A'],
            patterns: &["CV"],
            ..PhonotacticRules::default()
        };
        let generator = Generator::new(&rules);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generator.synthesize(6, &mut rng), "TATAED");
        assert_eq!(generator.synthesize(5, &mut rng), "TATED");
        // Suffix longer than the target: stem floor of 2, then truncation
        assert_eq!(generator.synthesize(2, &mut rng), "TA");
    }
}
