//! 单元测试用的小词典与音节切分器。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    dictionary::DictStore, engine::Resyllabifier, error::Error, model::Candidate, model::Token,
};

/// 内存词典，记录后端被访问的次数。
pub struct FixtureStore {
    map: HashMap<String, Vec<Candidate>>,
    mass: u64,
    queries: AtomicUsize,
    batches: AtomicUsize,
}

impl FixtureStore {
    pub fn new(rows: &[(&str, &str, u64)]) -> Self {
        let mut map: HashMap<String, Vec<Candidate>> = HashMap::new();
        let mut words: HashMap<&str, u64> = HashMap::new();
        for &(key, word, freq) in rows {
            map.entry(key.to_string())
                .or_default()
                .push(Candidate::new(word, freq));
            words.insert(word, freq);
        }
        let mass = words.values().map(|f| f + 1).sum();
        Self {
            map,
            mass,
            queries: AtomicUsize::new(0),
            batches: AtomicUsize::new(0),
        }
    }

    pub fn with_mass(mut self, mass: u64) -> Self {
        self.mass = mass;
        self
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn batches(&self) -> usize {
        self.batches.load(Ordering::SeqCst)
    }
}

impl DictStore for FixtureStore {
    fn query(&self, key: &str) -> Result<Vec<Candidate>, Error> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.map.get(key).cloned().unwrap_or_default())
    }

    fn query_batch(&self, keys: &[String]) -> Result<HashMap<String, Vec<Candidate>>, Error> {
        self.batches.fetch_add(1, Ordering::SeqCst);
        Ok(keys
            .iter()
            .filter_map(|k| self.map.get(k).map(|v| (k.clone(), v.clone())))
            .collect())
    }

    fn total_frequency_mass(&self) -> u64 {
        self.mass
    }
}

/// 用固定音节集合做自右向左最长匹配。
pub struct FixedSyllables(pub Vec<&'static str>);

impl Resyllabifier for FixedSyllables {
    fn resyllabify(&self, tokens: &[Token]) -> Option<Vec<String>> {
        let mut out = Vec::new();
        for token in tokens {
            let text = token.text.to_lowercase();
            let mut rest = text.as_str();
            let mut parts = Vec::new();
            while !rest.is_empty() {
                let hit = self
                    .0
                    .iter()
                    .filter(|s| rest.ends_with(**s))
                    .max_by_key(|s| s.len())?;
                parts.push(hit.to_string());
                rest = &rest[..rest.len() - hit.len()];
            }
            parts.reverse();
            out.extend(parts);
        }
        Some(out)
    }
}

/// 永远无法切分。
pub struct NoSyllables;

impl Resyllabifier for NoSyllables {
    fn resyllabify(&self, _tokens: &[Token]) -> Option<Vec<String>> {
        None
    }
}
