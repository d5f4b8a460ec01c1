//! Part-of-speech classification for the built-in tagger.
//!
//! Emits CLAWS-style tags. Words are looked up in a closed-class lexicon
//! first (articles, pronouns, auxiliaries, prepositions, ...), then matched
//! against an ordered regex table where the first match wins. Anything left
//! is a singular common noun ([`DEFAULT_TAG`]).
//!
//! Punctuation is deliberately left as the unclassified tag `FU`; the
//! corpus tag normalizer assigns the punctuation tag from the surface text.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Catch-all tag for words no rule classifies.
pub const DEFAULT_TAG: &str = "NN1";

/// Words after which a bare `s` or `'s` is the verb "is".
const VBZ_HOSTS: &[&str] = &["it", "he", "she", "that", "there", "what", "who", "here", "where"];

/// A compiled pattern entry: regex + the tag it maps to.
struct PatternEntry {
    regex: Regex,
    tag: &'static str,
}

/// All compiled patterns, in order. First match wins.
pub(crate) struct CompiledPatterns {
    patterns: Vec<PatternEntry>,
}

impl CompiledPatterns {
    /// Match a word against all patterns, returning the first matching tag.
    /// Returns [`DEFAULT_TAG`] if no pattern matches.
    pub(crate) fn match_token(&self, value: &str) -> &'static str {
        for entry in &self.patterns {
            if entry.regex.is_match(value) {
                return entry.tag;
            }
        }
        DEFAULT_TAG
    }
}

pub(crate) static COMPILED_PATTERNS: LazyLock<CompiledPatterns> = LazyLock::new(|| {
    let patterns = build_pattern_list()
        .into_iter()
        .map(|(regex_str, tag)| PatternEntry {
            regex: Regex::new(regex_str)
                .unwrap_or_else(|e| panic!("Failed to compile regex '{}': {}", regex_str, e)),
            tag,
        })
        .collect();
    CompiledPatterns { patterns }
});

/// Ordered `(regex, tag)` pairs.
fn build_pattern_list() -> Vec<(&'static str, &'static str)> {
    vec![
        // Numbers
        (r"^\d+(?:st|nd|rd|th)$", "MD"),
        (r"^\d[\d,.]*$", "MC"),
        (r"^(?i:one)$", "MC1"),
        (
            r"^(?i:two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|twenty|thirty|forty|fifty|hundred|thousand|million|billion)$",
            "MC",
        ),
        (
            r"^(?i:first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|last|next)$",
            "MD",
        ),
        // Punctuation, corrected downstream
        (r"^[[:punct:]]+$", "FU"),
        // Single letters
        (r"^[A-Za-z]$", "ZZ1"),
        // Proper nouns and acronyms
        (r"^[A-Z]{2,}s?$", "NP1"),
        (r"^[A-Z][a-z]+(?:-[A-Z][a-z]+)*$", "NP1"),
        (r"^(?:[A-Za-z]{1,2}\.)+$", "NP1"),
        // Morphology
        (r"^[A-Za-z]{2,}ly$", "RR"),
        (r"^[A-Za-z]{2,}ing$", "VVG"),
        (r"^[A-Za-z]{2,}ed$", "VVD"),
        (r"^[A-Za-z]{2,}(?:tion|sion|ment|ness|ity|ance|ence|ship|ism)s$", "NN2"),
        (r"^[A-Za-z]{2,}(?:tion|sion|ment|ness|ity|ance|ence|ship|ism)$", "NN1"),
        (r"^[A-Za-z]{2,}(?:ous|ful|ive|able|ible|al|ic|less|ish|ary)$", "JJ"),
        (r"^[A-Za-z]{2,}(?:ize|ise|ify)$", "VV0"),
        (r"^[A-Za-z]+-[A-Za-z]+", "JJ"),
        (r"^[A-Za-z]{2,}[^s]s$", "NN2"),
    ]
}

fn add(map: &mut HashMap<&'static str, &'static str>, tag: &'static str, words: &[&'static str]) {
    for word in words {
        map.insert(*word, tag);
    }
}

/// Closed-class and high-frequency irregular words, keyed by lowercase form.
static CLOSED_CLASS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    add(&mut map, "AT", &["the", "no"]);
    add(&mut map, "AT1", &["a", "an", "every"]);
    add(&mut map, "PPIS1", &["i"]);
    add(&mut map, "PPIO1", &["me"]);
    add(&mut map, "PPIS2", &["we"]);
    add(&mut map, "PPIO2", &["us"]);
    add(&mut map, "PPY", &["you"]);
    add(&mut map, "PPHS1", &["he", "she"]);
    add(&mut map, "PPHO1", &["him", "her"]);
    add(&mut map, "PPH1", &["it"]);
    add(&mut map, "PPHS2", &["they"]);
    add(&mut map, "PPHO2", &["them"]);
    add(&mut map, "APPGE", &["my", "your", "his", "our", "their"]);
    add(&mut map, "PPGE", &["mine", "yours", "hers", "ours", "theirs"]);
    add(&mut map, "PPX1", &["myself", "yourself", "himself", "herself", "itself"]);
    add(&mut map, "PPX2", &["ourselves", "yourselves", "themselves"]);
    add(&mut map, "PN1", &[
        "someone", "somebody", "anyone", "anybody", "everyone", "everybody", "nobody",
        "something", "anything", "everything", "nothing",
    ]);
    add(&mut map, "PNQS", &["who"]);
    add(&mut map, "PNQO", &["whom"]);
    add(&mut map, "DDQGE", &["whose"]);
    add(&mut map, "DDQ", &["which", "what"]);
    add(&mut map, "VBI", &["be"]);
    add(&mut map, "VBM", &["am", "'m"]);
    add(&mut map, "VBZ", &["is"]);
    add(&mut map, "VBR", &["are", "'re"]);
    add(&mut map, "VBDZ", &["was"]);
    add(&mut map, "VBDR", &["were"]);
    add(&mut map, "VBN", &["been"]);
    add(&mut map, "VBG", &["being"]);
    add(&mut map, "VH0", &["have", "'ve"]);
    add(&mut map, "VHZ", &["has"]);
    add(&mut map, "VHD", &["had"]);
    add(&mut map, "VHG", &["having"]);
    add(&mut map, "VD0", &["do"]);
    add(&mut map, "VDZ", &["does"]);
    add(&mut map, "VDD", &["did"]);
    add(&mut map, "VDN", &["done"]);
    add(&mut map, "VDG", &["doing"]);
    add(&mut map, "VM", &[
        "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ca",
        "wo", "'ll", "'d",
    ]);
    add(&mut map, "XX", &["not", "n't"]);
    add(&mut map, "TO", &["to"]);
    add(&mut map, "IO", &["of"]);
    add(&mut map, "IF", &["for"]);
    add(&mut map, "IW", &["with", "without"]);
    add(&mut map, "II", &[
        "in", "on", "at", "by", "from", "into", "onto", "about", "after", "before",
        "between", "through", "under", "over", "during", "within", "against", "among",
        "upon", "across", "toward", "towards", "behind", "beyond",
    ]);
    add(&mut map, "CC", &["and", "or", "nor"]);
    add(&mut map, "CCB", &["but"]);
    add(&mut map, "CS", &[
        "if", "because", "although", "though", "while", "whereas", "unless", "since",
        "until", "whether",
    ]);
    add(&mut map, "CST", &["that"]);
    add(&mut map, "CSN", &["than"]);
    add(&mut map, "CSA", &["as"]);
    add(&mut map, "DD1", &["this", "each", "another"]);
    add(&mut map, "DD2", &["these", "those"]);
    add(&mut map, "DD", &["some", "any"]);
    add(&mut map, "DB", &["all"]);
    add(&mut map, "DB2", &["both"]);
    add(&mut map, "DA1", &["much"]);
    add(&mut map, "DA2", &["many", "few"]);
    add(&mut map, "DAR", &["more"]);
    add(&mut map, "DAT", &["most"]);
    add(&mut map, "DA", &["such"]);
    add(&mut map, "JJ", &["other", "new", "good", "great", "important", "different", "possible"]);
    add(&mut map, "RG", &["very", "too"]);
    add(&mut map, "RR", &[
        "so", "also", "just", "only", "never", "always", "however", "perhaps", "still",
        "even", "again", "often",
    ]);
    add(&mut map, "RT", &["then", "now"]);
    add(&mut map, "RL", &["here"]);
    add(&mut map, "EX", &["there"]);
    add(&mut map, "RRQ", &["when", "where", "why", "how"]);
    add(&mut map, "UH", &["yes", "oh", "hello", "hi", "ok", "okay"]);
    add(&mut map, "VVD", &[
        "went", "saw", "said", "made", "took", "came", "found", "thought", "knew", "got",
        "gave", "told", "felt", "became", "left", "brought", "began", "kept", "held",
        "wrote", "stood", "heard", "meant", "met", "ran", "paid", "sat", "spoke", "led",
        "grew", "lost", "fell", "sent", "built", "understood", "drew", "broke", "spent",
        "rose", "drove", "bought", "wore", "chose", "won",
    ]);
    add(&mut map, "VVN", &[
        "gone", "taken", "given", "known", "seen", "written", "shown", "chosen", "spoken",
        "broken", "forgotten", "driven", "eaten", "fallen", "grown", "thrown", "drawn",
        "hidden", "stolen", "worn", "torn",
    ]);
    add(&mut map, "VVZ", &[
        "seems", "says", "makes", "takes", "shows", "suggests", "appears", "means",
        "gives", "goes", "comes", "knows", "thinks", "looks", "wants", "needs", "uses",
        "finds", "tells", "becomes", "provides", "includes", "remains", "argues",
        "claims", "believes", "requires", "allows",
    ]);
    add(&mut map, "VV0", &[
        "think", "know", "believe", "seem", "say", "make", "take", "see", "go", "come",
        "want", "need", "use", "find", "give", "tell", "suggest", "argue", "claim",
    ]);
    map
});

fn is_sentence_start(previous: Option<&str>) -> bool {
    previous.is_none_or(|p| p.ends_with(['.', '!', '?']))
}

/// Tag one word given the word before it.
pub fn tag_word(word: &str, previous: Option<&str>) -> &'static str {
    let lower = word.to_ascii_lowercase();

    if lower == "s" || lower == "'s" {
        let after_host =
            previous.is_some_and(|p| VBZ_HOSTS.contains(&p.to_ascii_lowercase().as_str()));
        if after_host {
            return "VBZ";
        }
        if lower == "'s" {
            return "GE";
        }
    }

    if let Some(&tag) = CLOSED_CLASS.get(lower.as_str()) {
        return tag;
    }

    // Capitalization carries no information at the start of a sentence
    if is_sentence_start(previous) {
        COMPILED_PATTERNS.match_token(&lower)
    } else {
        COMPILED_PATTERNS.match_token(word)
    }
}

/// Tag a sequence of words.
pub fn tag_words(words: &[&str]) -> Vec<&'static str> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let previous = i.checked_sub(1).map(|j| words[j]);
            tag_word(word, previous)
        })
        .collect()
}
