// Library interface for fake-word-cleaner
// This allows integration tests to access internal modules

pub mod cleaner;
pub mod cli;
pub mod generator;
pub mod rules;
pub mod validator;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use cleaner::clean_words;
pub use generator::Generator;
pub use rules::PhonotacticRules;
pub use validator::Validator;
pub use wordlist::{
    load_candidates_from_file, load_candidates_from_str, load_real_words_from_file,
    load_real_words_from_str, write_cleaned,
};
