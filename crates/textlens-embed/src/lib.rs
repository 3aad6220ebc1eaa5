//! Word-embedding spaces and nearest-neighbor lookup.
//!
//! A space is a plain text file, one `word v1 v2 … vN` row per line (an
//! optional `count dim` header row is tolerated). Spaces live per language
//! as `<tag>.vec` under a caller-chosen directory. A space that cannot be
//! found or read is simply absent: lookups against it return nothing.
//!
//! Neighbors are ranked by cosine distance (1 − cosine similarity),
//! ascending, with the query word itself excluded.

use std::collections::HashMap;
use std::path::Path;

use textlens_types::Alternative;

#[derive(Debug, Clone)]
pub struct EmbeddingSpace {
    words: Vec<String>,
    vectors: Vec<Vec<f32>>,
    index: HashMap<String, usize>,
}

impl EmbeddingSpace {
    /// Load the space for a language tag from `dir`, if one exists.
    pub fn load_for(dir: &Path, tag: &str) -> Option<Self> {
        Self::load(&dir.join(format!("{tag}.vec")))
    }

    /// Load a space from a `.vec` file. Missing or unreadable files and
    /// files without a single valid row all mean "no space".
    pub fn load(path: &Path) -> Option<Self> {
        let raw = std::fs::read_to_string(path).ok()?;
        Self::parse(&raw)
    }

    /// Parse rows, skipping malformed ones; the first valid row fixes the
    /// dimensionality and later rows must match it.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut words = Vec::new();
        let mut vectors: Vec<Vec<f32>> = Vec::new();
        let mut index = HashMap::new();
        let mut dim: Option<usize> = None;

        for (lineno, line) in raw.lines().enumerate() {
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else { continue };

            // word2vec text format starts with a `count dim` header row.
            if lineno == 0 && word.parse::<usize>().is_ok() {
                continue;
            }

            let values: Option<Vec<f32>> = fields.map(|f| f.parse::<f32>().ok()).collect();
            let Some(vector) = values else { continue };
            if vector.is_empty() {
                continue;
            }
            match dim {
                None => dim = Some(vector.len()),
                Some(d) if d != vector.len() => continue,
                Some(_) => {}
            }

            let key = word.to_lowercase();
            if index.contains_key(&key) {
                continue;
            }
            index.insert(key, words.len());
            words.push(word.to_string());
            vectors.push(vector);
        }

        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            vectors,
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&word.to_lowercase())
    }

    /// Up to `limit` nearest neighbors of `word`, closest first. Unknown
    /// words yield an empty list.
    pub fn neighbors(&self, word: &str, limit: usize) -> Vec<Alternative> {
        if limit == 0 {
            return Vec::new();
        }
        let Some(&query) = self.index.get(&word.to_lowercase()) else {
            return Vec::new();
        };
        let query_vec = &self.vectors[query];

        let mut ranked: Vec<(usize, f32)> = (0..self.words.len())
            .filter(|&i| i != query)
            .map(|i| (i, 1.0 - cosine_similarity(query_vec, &self.vectors[i])))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        ranked.truncate(limit);

        ranked
            .into_iter()
            .map(|(i, distance)| Alternative {
                word: self.words[i].clone(),
                distance: f64::from(distance),
            })
            .collect()
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let v = [1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn zero_vector_similarity_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
