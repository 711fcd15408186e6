use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a real-word vocabulary: any run of alphanumeric characters is a
/// word, normalized to uppercase.
pub fn load_real_words_from_str(data: &str) -> HashSet<String> {
    data.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_uppercase())
        .collect()
}

pub fn load_real_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<HashSet<String>> {
    // Vocabulary files come from scraped sources; tolerate stray bytes.
    let bytes = fs::read(path)?;
    Ok(load_real_words_from_str(&String::from_utf8_lossy(&bytes)))
}

/// Parse the candidate fake-word list, preserving order.
pub fn load_candidates_from_str(data: &str) -> Vec<String> {
    data.split_whitespace()
        .map(|word| word.to_uppercase())
        .collect()
}

pub fn load_candidates_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let data = fs::read_to_string(path)?;
    Ok(load_candidates_from_str(&data))
}

/// Write the cleaned list as a single space-joined blob.
pub fn write_cleaned<P: AsRef<Path>>(path: P, words: &[String]) -> io::Result<()> {
    fs::write(path, words.join(" "))
}
