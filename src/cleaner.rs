use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::generator::Generator;
use crate::rules::PhonotacticRules;
use crate::validator::Validator;

/// Run the full cleaning pass: every word the validator rejects is swapped
/// for a generated stand-in of the same length. The output list has the
/// same length and order as the input.
pub fn clean_words<R: Rng>(
    words: &[String],
    real_words: &HashSet<String>,
    rules: &PhonotacticRules,
    rng: &mut R,
) -> Vec<String> {
    let validator = Validator::new(rules, real_words);
    let generator = Generator::new(rules);

    let mut cleaned = Vec::with_capacity(words.len());
    for word in words {
        if !validator.needs_replacement(word) {
            cleaned.push(word.clone());
            continue;
        }
        match replace_word(word, &validator, &generator, rules.retry_budget, rng) {
            Some(replacement) => {
                debug!("replaced {word} with {replacement}");
                cleaned.push(replacement);
            }
            None => {
                // Exhausted the budget; keeping the original is the
                // defined fallback, not an error.
                debug!(
                    "no acceptable replacement for {word} within {} attempts, keeping it",
                    rules.retry_budget
                );
                cleaned.push(word.clone());
            }
        }
    }
    cleaned
}

/// Propose candidates until one is not a real word and contains a vowel,
/// or the budget runs out.
fn replace_word<R: Rng>(
    word: &str,
    validator: &Validator<'_>,
    generator: &Generator<'_>,
    budget: usize,
    rng: &mut R,
) -> Option<String> {
    for _ in 0..budget {
        let candidate = generator.synthesize(word.len(), rng);
        if !validator.is_known_real(&candidate) && validator.has_vowel(&candidate) {
            return Some(candidate);
        }
    }
    None
}
