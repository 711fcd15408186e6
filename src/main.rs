use fake_word_cleaner::cli::parse_cli;
use fake_word_cleaner::{
    PhonotacticRules, clean_words, load_candidates_from_file, load_real_words_from_file,
    write_cleaned,
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let real_words = match load_real_words_from_file(&cli.real_words_path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load real words from '{}': {e}", cli.real_words_path);
            return;
        }
    };
    info!("loaded {} real words from {}", real_words.len(), cli.real_words_path);

    let candidates = match load_candidates_from_file(&cli.input_path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load fake words from '{}': {e}", cli.input_path);
            return;
        }
    };
    info!("loaded {} candidate fake words from {}", candidates.len(), cli.input_path);

    let rules = PhonotacticRules::default();
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let cleaned = clean_words(&candidates, &real_words, &rules, &mut rng);

    if let Err(e) = write_cleaned(&cli.output_path, &cleaned) {
        eprintln!("Failed to write cleaned list to '{}': {e}", cli.output_path);
        return;
    }
    println!(
        "Cleaned list written to {} with {} words.",
        cli.output_path,
        cleaned.len()
    );
}
