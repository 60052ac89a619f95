use crate::error::{Error, Result};
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Words of two or more Unicode word characters
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).unwrap())
}

/// Split text into lower-cased tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sparse row vector, entries sorted by term index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_counts(counts: HashMap<usize, f64>) -> Self {
        let mut entries: Vec<(usize, f64)> = counts.into_iter().collect();
        entries.sort_by_key(|(term, _)| *term);
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;

        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            match a.cmp(&b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }

    /// Cosine similarity; 0.0 when either vector is zero, clamped to [0, 1]
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(0.0, 1.0)
    }

    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}

/// Fitted document-term matrix
#[derive(Debug, Clone, Default)]
pub struct TfidfMatrix {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    rows: Vec<SparseVector>,
}

impl TfidfMatrix {
    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency of a term, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&i| self.idf[i])
    }

    /// Cosine similarity of one row against every row
    pub fn similarities(&self, index: usize) -> Vec<f64> {
        match self.rows.get(index) {
            Some(target) => self.rows.iter().map(|row| target.cosine(row)).collect(),
            None => Vec::new(),
        }
    }
}

/// TF-IDF vectorizer: raw counts, smoothed idf, L2-normalized rows.
///
/// Holds no fitted state; each call to [`TfidfVectorizer::fit_transform`]
/// returns an independent [`TfidfMatrix`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfVectorizer;

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self
    }

    /// Learn the vocabulary and idf weights from `documents` and return their vectors.
    ///
    /// Fails with [`Error::EmptyVocabulary`] when no document yields a token.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<TfidfMatrix> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut vocabulary = BTreeMap::new();
        for token in tokenized.iter().flatten() {
            vocabulary.entry(token.clone()).or_insert(0);
        }
        if vocabulary.is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        for (i, slot) in vocabulary.values_mut().enumerate() {
            *slot = i;
        }

        let mut doc_freq = vec![0usize; vocabulary.len()];
        let mut counts_per_doc = Vec::with_capacity(tokenized.len());
        for tokens in &tokenized {
            let mut counts: HashMap<usize, f64> = HashMap::new();
            for token in tokens {
                *counts.entry(vocabulary[token]).or_insert(0.0) += 1.0;
            }
            for term in counts.keys() {
                doc_freq[*term] += 1;
            }
            counts_per_doc.push(counts);
        }

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = counts_per_doc
            .into_iter()
            .map(|mut counts| {
                for (term, weight) in counts.iter_mut() {
                    *weight *= idf[*term];
                }
                let mut row = SparseVector::from_counts(counts);
                row.normalize();
                row
            })
            .collect();

        Ok(TfidfMatrix {
            vocabulary,
            idf,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Leche, huevo, AZÚCAR y sal"),
            vec!["leche", "huevo", "azúcar", "sal"]
        );
        // Single characters are not tokens
        assert!(tokenize("a, b ,c").is_empty());
    }

    #[test]
    fn test_smoothed_idf() {
        let docs = ["huevo cebolla", "leche huevo azucar", "huevo leche"];
        let matrix = TfidfVectorizer::new().fit_transform(&docs).unwrap();

        assert_eq!(matrix.vocabulary_size(), 4);
        assert!((matrix.idf("huevo").unwrap() - 1.0).abs() < 1e-12);
        let expected = (4.0f64 / 3.0).ln() + 1.0;
        assert!((matrix.idf("leche").unwrap() - expected).abs() < 1e-12);
        assert!(matrix.idf("sal").is_none());
    }

    #[test]
    fn test_rows_are_unit_length() {
        let docs = ["tomate lechuga", "pollo arroz pollo", ""];
        let matrix = TfidfVectorizer::new().fit_transform(&docs).unwrap();

        assert!((matrix.rows()[0].norm() - 1.0).abs() < 1e-12);
        assert!((matrix.rows()[1].norm() - 1.0).abs() < 1e-12);
        assert!(matrix.rows()[2].is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        let docs = ["", "x, y"];
        let result = TfidfVectorizer::new().fit_transform(&docs);
        assert!(matches!(result, Err(Error::EmptyVocabulary)));
    }

    #[test]
    fn test_cosine_bounds() {
        let docs = ["pan queso", "pan queso", "arroz"];
        let matrix = TfidfVectorizer::new().fit_transform(&docs).unwrap();
        let sims = matrix.similarities(0);

        assert!((sims[0] - 1.0).abs() < 1e-9);
        assert!((sims[1] - 1.0).abs() < 1e-9);
        assert_eq!(sims[2], 0.0);
        assert!(matrix.similarities(10).is_empty());
    }
}
