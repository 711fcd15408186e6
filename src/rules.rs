//! Phonotactic configuration: the letter tables and thresholds shared by
//! the validator and the generator.
//!
//! Everything here is static data, built once and never mutated. The
//! validator reads the cluster/rare/vowel tables; the generator reads the
//! suffix, pool, and skeleton tables.

/// Letter clusters flagged as unpronounceable (matched as substrings).
const UNPRONOUNCEABLE_CLUSTERS: &[&str] = &[
    "QH", "VW", "ZF", "WD", "HP", "CM", "CW", "JJ", "HH", "XX", "ZZ", "VV",
    "QG", "PT", "GM", "KL", "XR", "WX", "MX", "XD", "QX", "QJ", "CQ", "QQ",
    "QN", "QM", "QP", "QV", "QZ", "VX", "XZ", "ZX", "XC", "SX", "DX", "FX",
    "GX", "HX", "JX", "KX", "LX", "NX", "PX", "RX", "TX", "UX", "BZ",
    "TZ", "DZ", "SZ", "FZ", "NZ", "KZ", "ZG", "ZH", "ZN", "ZP", "ZQ",
    "ZR", "ZS", "ZT", "ZW", "ZY", "WQ", "WZ", "WV", "WF", "WL", "WP",
    "WN", "WB", "WHH", "WRR", "WT", "WY", "YQ", "YV", "YF", "YX", "YB", "YC",
    "YH", "YK", "YM", "YN", "YP", "YR", "YT", "YW", "YZ", "RQ", "RQH",
    "LM", "BN", "TL", "LD", "LR", "RTT", "DDH", "GGH", "GQ", "PQ", "QS",
    "JH", "HJ", "GHM", "HNG", "GNH", "NHG", "PHR", "THL", "TLH", "DLH",
    "HRR", "HLL", "LRH", "RLH", "RHN", "HRN", "MRR", "NHH", "LHH", "CHH",
    "QA", "QE", "UQ", "OQ", "QO", "IQ", "AQ", "UWU", "UW", "BW",
];

/// Letters that read as line noise when a word has too many of them.
const RARE_LETTERS: &[char] = &['V', 'X', 'Z', 'J', 'K', 'Q'];

const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U', 'Y'];

/// Common English word endings appended to generated stems.
const SUFFIXES: &[&str] = &[
    "ED", "ER", "EN", "AL", "LY", "ING", "FUL", "OUS", "ISH", "LESS", "MENT", "TION", "TE",
];

const CONSONANT_POOL: &[char] = &[
    'B', 'C', 'D', 'F', 'G', 'H', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'W',
];

const VOWEL_POOL: &[char] = &['A', 'E', 'I', 'O', 'U'];

/// Stem templates: 'C' is a consonant slot, 'V' a vowel slot.
const SKELETON_PATTERNS: &[&str] = &[
    "CVCV", "CVCC", "CVVC", "VCVC", "CVCVC", "CVVCV", "CVCCV",
];

/// Static phonotactic rules consumed by the validator and generator.
///
/// `Default` supplies the reference tables for English-looking decoy
/// words; tests substitute smaller tables via struct update syntax.
#[derive(Debug, Clone)]
pub struct PhonotacticRules {
    /// Clusters that mark a word as unpronounceable (substring match).
    pub clusters: &'static [&'static str],
    /// Rare letters counted toward the rare-letter fraction.
    pub rare_letters: &'static [char],
    /// Vowels, including Y.
    pub vowels: &'static [char],
    /// Suffixes the generator may append to a stem.
    pub suffixes: &'static [&'static str],
    /// Consonants the generator draws from for 'C' slots.
    pub consonant_pool: &'static [char],
    /// Vowels the generator draws from for 'V' slots.
    pub vowel_pool: &'static [char],
    /// Consonant/vowel skeleton patterns for stem construction.
    pub patterns: &'static [&'static str],
    /// Words shorter than this are accepted without inspection.
    pub min_check_length: usize,
    /// Maximum tolerated rare-letter fraction (strictly above is flagged).
    pub max_rare_fraction: f64,
    /// Generation attempts per replacement before falling back.
    pub retry_budget: usize,
}

impl Default for PhonotacticRules {
    fn default() -> Self {
        Self {
            clusters: UNPRONOUNCEABLE_CLUSTERS,
            rare_letters: RARE_LETTERS,
            vowels: VOWELS,
            suffixes: SUFFIXES,
            consonant_pool: CONSONANT_POOL,
            vowel_pool: VOWEL_POOL,
            patterns: SKELETON_PATTERNS,
            min_check_length: 4,
            max_rare_fraction: 0.2,
            retry_budget: 2000,
        }
    }
}
