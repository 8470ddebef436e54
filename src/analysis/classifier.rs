//! Keyword-vote category classification.

use aho_corasick::AhoCorasick;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Classifies task text into a catalog category by keyword votes.
///
/// Each category scores one point per distinct keyword of its list found in
/// the text. The strictly highest score wins; ties go to the category
/// declared first. A text with no hits falls back to the default category.
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    /// Automaton over the distinct keywords of all categories.
    matcher: AhoCorasick,
    /// For each keyword pattern, the categories (by index) that list it.
    owners: Vec<Vec<usize>>,
    category_count: usize,
    default_index: usize,
}

impl CategoryClassifier {
    /// Build the classifier for a checked catalog.
    pub fn new(catalog: &Catalog) -> Result<Self, CatalogError> {
        let mut keywords: Vec<String> = Vec::new();
        let mut owners: Vec<Vec<usize>> = Vec::new();

        for (index, category) in catalog.categories.iter().enumerate() {
            for keyword in &category.keywords {
                let keyword = keyword.to_lowercase();
                match keywords.iter().position(|k| *k == keyword) {
                    Some(pos) => owners[pos].push(index),
                    None => {
                        keywords.push(keyword);
                        owners.push(vec![index]);
                    }
                }
            }
        }

        let matcher = AhoCorasick::new(&keywords)?;

        let default_index = catalog
            .categories
            .iter()
            .position(|c| c.id == catalog.default_category)
            .ok_or_else(|| CatalogError::DefaultCategoryMissing {
                id: catalog.default_category.clone(),
            })?;

        Ok(Self {
            matcher,
            owners,
            category_count: catalog.categories.len(),
            default_index,
        })
    }

    /// Vote counts per category index for lowercased text.
    pub fn scores(&self, text: &str) -> Vec<usize> {
        let mut seen = vec![false; self.owners.len()];
        for mat in self.matcher.find_overlapping_iter(text) {
            seen[mat.pattern().as_usize()] = true;
        }

        let mut scores = vec![0usize; self.category_count];
        for (pattern, hit) in seen.into_iter().enumerate() {
            if hit {
                for &category in &self.owners[pattern] {
                    scores[category] += 1;
                }
            }
        }
        scores
    }

    /// Index of the winning category for lowercased text.
    pub fn classify(&self, text: &str) -> usize {
        let scores = self.scores(text);

        let mut best = self.default_index;
        let mut best_score = 0;
        for (index, &score) in scores.iter().enumerate() {
            if score > best_score {
                best = index;
                best_score = score;
            }
        }

        tracing::debug!(category = best, votes = best_score, "Classified task");
        best
    }
}
