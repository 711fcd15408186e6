use clap::Parser;

/// Fake Word Cleaner CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the whitespace-delimited candidate fake-word file
    #[arg(short = 'i', long = "input", default_value = "fake_words.txt")]
    pub input_path: String,

    /// Path to the real-word vocabulary file
    #[arg(short = 'r', long = "real-words", default_value = "all_real_words.txt")]
    pub real_words_path: String,

    /// Path the cleaned list is written to
    #[arg(short = 'o', long = "output", default_value = "fake_words_cleaned.txt")]
    pub output_path: String,

    /// Seed for the replacement generator; a fixed seed makes runs reproducible
    #[arg(long = "seed", default_value_t = 20_251_101)]
    pub seed: u64,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
