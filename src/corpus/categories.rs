//! Document categories encoded in filenames.
//!
//! A category is the filename prefix before the first underscore, e.g.
//! `acad_01.txt` and `acad_02.txt` both belong to `acad`. Categories are
//! only usable when every document carries one and there are between
//! [`MIN_CATEGORIES`] and [`MAX_CATEGORIES`] distinct values.

use std::collections::BTreeMap;

use super::error::CorpusError;

pub const MIN_CATEGORIES: usize = 2;
pub const MAX_CATEGORIES: usize = 20;

/// Extract one category per document identifier, in the same order.
pub fn extract_categories<S: AsRef<str>>(doc_ids: &[S]) -> Result<Vec<String>, CorpusError> {
    let mut categories = Vec::with_capacity(doc_ids.len());

    for id in doc_ids {
        let id = id.as_ref();
        let Some((prefix, _)) = id.split_once('_') else {
            return Err(CorpusError::MalformedCategoryConvention {
                reason: format!("'{}' has no category prefix", id),
            });
        };
        if prefix.is_empty() {
            return Err(CorpusError::MalformedCategoryConvention {
                reason: format!("'{}' has an empty category prefix", id),
            });
        }
        categories.push(prefix.to_string());
    }

    let distinct = count_categories(&categories).len();
    if !(MIN_CATEGORIES..=MAX_CATEGORIES).contains(&distinct) {
        return Err(CorpusError::MalformedCategoryConvention {
            reason: format!(
                "found {} distinct categories, expected between {} and {}",
                distinct, MIN_CATEGORIES, MAX_CATEGORIES
            ),
        });
    }

    Ok(categories)
}

/// Number of documents per category.
pub fn count_categories<S: AsRef<str>>(categories: &[S]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for category in categories {
        *counts.entry(category.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}
