//! DocuScope-style discourse lexicon.
//!
//! Maps multi-word phrases to rhetorical categories and annotates a token
//! stream with IOB span labels. The lexicon is a YAML document:
//!
//! ```yaml
//! categories:
//!   FirstPerson: [i, we, "in my view"]
//!   Uncertainty: [perhaps, "it seems"]
//! ```
//!
//! Phrases are tokenized like running text and matched case-insensitively,
//! longest match first, scanning left to right without overlaps.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use serde::Deserialize;

use super::Iob;
use super::lexer::tokenize;

const EMBEDDED_LEXICON: &str = include_str!("../../resources/docuscope_lexicon.yaml");

#[derive(Debug, Deserialize)]
struct LexiconFile {
    categories: BTreeMap<String, Vec<String>>,
}

/// Phrase → category lookup table.
#[derive(Debug, Clone, Default)]
pub struct DiscourseLexicon {
    phrases: HashMap<Vec<String>, String>,
    max_phrase_len: usize,
}

impl DiscourseLexicon {
    /// The lexicon shipped with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml_str(EMBEDDED_LEXICON).context("Embedded discourse lexicon is invalid")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse lexicon file: {}", path.display()))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: LexiconFile = serde_yaml::from_str(yaml)?;
        let mut lexicon = Self::default();

        for (category, phrases) in file.categories {
            if category.is_empty() || category.contains(char::is_whitespace) {
                bail!("Invalid category name: '{}'", category);
            }
            for phrase in phrases {
                let key = phrase_key(&phrase);
                if key.is_empty() {
                    bail!("Empty phrase in category '{}'", category);
                }
                if let Some(existing) = lexicon.phrases.get(&key) {
                    warn!(
                        "Phrase '{}' already assigned to '{}', ignoring it for '{}'",
                        phrase, existing, category
                    );
                    continue;
                }
                lexicon.max_phrase_len = lexicon.max_phrase_len.max(key.len());
                lexicon.phrases.insert(key, category.clone());
            }
        }

        debug!(
            "Loaded discourse lexicon: {} phrases in {} categories",
            lexicon.len(),
            lexicon.categories().len()
        );
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Sorted distinct category names.
    pub fn categories(&self) -> Vec<&str> {
        self.phrases
            .values()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Label each word with an IOB marker and span type.
    pub fn annotate(&self, words: &[&str]) -> Vec<(Iob, String)> {
        let lowered: Vec<String> = words.iter().map(|w| w.to_ascii_lowercase()).collect();
        let mut labels = vec![(Iob::O, String::new()); words.len()];
        let mut i = 0;

        while i < lowered.len() {
            let longest = self.max_phrase_len.min(lowered.len() - i);
            let found = (1..=longest)
                .rev()
                .find_map(|len| self.phrases.get(&lowered[i..i + len]).map(|c| (len, c)));

            match found {
                Some((len, category)) => {
                    labels[i] = (Iob::B, category.clone());
                    for label in &mut labels[i + 1..i + len] {
                        *label = (Iob::I, category.clone());
                    }
                    i += len;
                }
                None => i += 1,
            }
        }

        labels
    }
}

fn phrase_key(phrase: &str) -> Vec<String> {
    tokenize(phrase)
        .into_iter()
        .map(|p| p.text.to_ascii_lowercase())
        .collect()
}
