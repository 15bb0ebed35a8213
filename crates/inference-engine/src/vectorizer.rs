//! Token-count vectorization and tf-idf weighting.
//!
//! The pipeline hands over a space-joined token string; vectorization is a
//! whitespace split counted against a fixed vocabulary. Out-of-vocabulary
//! tokens contribute nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Bag-of-words vectorizer over a fixed vocabulary (token → column index).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>) -> Self {
        Self { vocabulary }
    }

    /// Number of feature columns (one past the highest vocabulary index).
    pub fn dim(&self) -> usize {
        self.vocabulary.values().max().map_or(0, |&i| i + 1)
    }

    /// Count the tokens of a space-joined token string into a dense vector.
    pub fn transform(&self, tokens: &str) -> Vec<f32> {
        let mut counts = vec![0.0f32; self.dim()];
        for token in tokens.split_whitespace() {
            if let Some(&column) = self.vocabulary.get(token) {
                counts[column] += 1.0;
            }
        }
        counts
    }
}

/// Idf scaling plus L2 normalization applied on top of raw counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfTransformer {
    idf: Vec<f32>,
}

impl TfidfTransformer {
    pub fn new(idf: Vec<f32>) -> Self {
        Self { idf }
    }

    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Scale each count by its idf weight, then L2-normalize.
    ///
    /// Columns beyond the idf table's length are left unscaled; the artifact
    /// pair is validated for matching dimensions at load time.
    pub fn transform(&self, counts: &[f32]) -> Vec<f32> {
        let mut weighted: Vec<f32> = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| c * self.idf.get(i).copied().unwrap_or(1.0))
            .collect();

        let norm: f32 = weighted.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut weighted {
                *x /= norm;
            }
        }
        weighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vectorizer() -> CountVectorizer {
        let vocabulary = HashMap::from([
            ("原告".to_string(), 0),
            ("被告".to_string(), 1),
            ("责任".to_string(), 2),
        ]);
        CountVectorizer::new(vocabulary)
    }

    #[test]
    fn counts_known_tokens() {
        let v = vectorizer().transform("原告 责任 原告 ");
        assert_eq!(v, vec![2.0, 0.0, 1.0]);
    }

    #[test]
    fn unknown_tokens_contribute_nothing() {
        let v = vectorizer().transform("无关 词汇 被告");
        assert_eq!(v, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn empty_input_is_zero_vector() {
        assert_eq!(vectorizer().transform(""), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn tfidf_scales_and_normalizes() {
        let t = TfidfTransformer::new(vec![1.0, 2.0]);
        let v = t.transform(&[3.0, 4.0]);
        // [3, 8] normalized.
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
        assert!((v[1] / v[0] - 8.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn tfidf_zero_vector_stays_zero() {
        let t = TfidfTransformer::new(vec![1.0, 2.0]);
        assert_eq!(t.transform(&[0.0, 0.0]), vec![0.0, 0.0]);
    }
}
