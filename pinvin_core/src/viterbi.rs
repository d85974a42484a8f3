//! `viterbi`：在 DAG 上求最大对数概率路径。
//!
//! 边的分数：
//! - 命中：`ln((max_freq + 1) / total_mass)`
//! - 强制边：`ln(1 / total_mass) * (j - i)`，按跨度线性惩罚
//!
//! 从右向左递推，`route[N] = (0, N)`。同一位置按 `(score, end)` 字典序取最大，
//! 分数完全相等时 end 大（跨度长）的边胜出。

use std::cmp::Ordering;

use crate::dag::{Dag, Edge};

/// 路由表中的一项：从该位置走到末尾的最优分数与下一跳。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub score: f64,
    pub next: usize,
}

#[derive(Debug, Clone)]
pub struct Route {
    steps: Vec<Step>,
}

impl Route {
    pub fn calc(dag: &Dag, total_mass: f64) -> Self {
        let n = dag.len();
        let total_mass = total_mass.max(1.0);
        let mut steps = vec![Step { score: 0.0, next: n }; n + 1];

        for i in (0..n).rev() {
            let mut best: Option<Step> = None;
            for edge in dag.edges(i) {
                let cand = Step {
                    score: edge_score(edge, i, total_mass) + steps[edge.end].score,
                    next: edge.end,
                };
                let better = match best {
                    None => true,
                    Some(b) => {
                        (cand.score, cand.next).partial_cmp(&(b.score, b.next))
                            == Some(Ordering::Greater)
                    }
                };
                if better {
                    best = Some(cand);
                }
            }
            // Dag 保证每个位置至少一条边
            if let Some(b) = best {
                steps[i] = b;
            }
        }

        Self { steps }
    }

    pub fn step(&self, i: usize) -> Step {
        self.steps[i]
    }

    /// 路由表长度 N + 1。
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 从 0 出发的最优切分：`[(start, end), ...]`。
    pub fn path(&self) -> Vec<(usize, usize)> {
        let n = self.steps.len().saturating_sub(1);
        let mut out = Vec::new();
        let mut i = 0;
        while i < n {
            let next = self.steps[i].next;
            out.push((i, next));
            i = next;
        }
        out
    }
}

/// 单条边的对数概率。
pub fn edge_score(edge: &Edge, start: usize, total_mass: f64) -> f64 {
    match edge.candidates.as_deref() {
        Some(rows) if !rows.is_empty() => {
            let max_freq = rows.iter().map(|c| c.frequency).max().unwrap_or(0);
            ((max_freq as f64 + 1.0) / total_mass).ln()
        }
        _ => (1.0 / total_mass).ln() * (edge.end - start) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::CachedDictionary;
    use crate::test_support::FixtureStore;
    use crate::tokenizer::tokenize;

    fn route_for(rows: &[(&str, &str, u64)], mass: Option<u64>, line: &str) -> Route {
        let mut store = FixtureStore::new(rows);
        if let Some(m) = mass {
            store = store.with_mass(m);
        }
        let dict = CachedDictionary::new(store);
        let dag = Dag::build(&tokenize(line), &dict).unwrap();
        Route::calc(&dag, dict.total_frequency_mass())
    }

    #[test]
    fn base_case_is_sentinel() {
        let route = route_for(&[("a", "甲", 1)], None, "a");
        assert_eq!(route.len(), 2);
        assert_eq!(route.step(1), Step { score: 0.0, next: 1 });
    }

    #[test]
    fn prefers_whole_word_over_pieces() {
        let route = route_for(
            &[("nyi", "你", 100), ("hau", "好", 100), ("nyihau", "你好", 50)],
            None,
            "nyi hau",
        );
        assert_eq!(route.path(), [(0, 2)]);
    }

    #[test]
    fn prefers_pieces_when_more_likely() {
        // 总量 1000：单字 ln(1/2) * 2 ≈ -1.39，整词 ln(1/1000) ≈ -6.9
        let route = route_for(
            &[("a", "甲", 499), ("b", "乙", 499), ("ab", "甲乙", 0)],
            Some(1000),
            "a b",
        );
        assert_eq!(route.path(), [(0, 1), (1, 2)]);
    }

    #[test]
    fn equal_scores_prefer_longer_span() {
        // 总量为 1、词频为 0：每条命中边分数都是 ln(1) = 0
        let route = route_for(
            &[("a", "甲", 0), ("b", "乙", 0), ("ab", "甲乙", 0)],
            Some(1),
            "a b",
        );
        assert_eq!(route.path(), [(0, 2)]);
        assert_eq!(route.step(0).score, 0.0);
    }

    #[test]
    fn unknown_tokens_are_penalised_per_token() {
        let route = route_for(&[("a", "甲", 9)], Some(100), "x a");
        let unknown = (1.0f64 / 100.0).ln();
        let known = (10.0f64 / 100.0).ln();
        assert_eq!(route.path(), [(0, 1), (1, 2)]);
        assert!((route.step(0).score - (unknown + known)).abs() < 1e-12);
    }

    #[test]
    fn empty_dictionary_stays_finite() {
        let route = route_for(&[], Some(0), "x y");
        assert!(route.step(0).score.is_finite());
        assert_eq!(route.path(), [(0, 1), (1, 2)]);
    }
}
