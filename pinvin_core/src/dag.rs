//! `dag`：以 token 边界为节点的有向无环图。
//!
//! 节点 `i` 到 `j` 的边表示 `tokens[i..j]` 拼接后的编码在词典中有候选。
//! 某个起点没有任何命中时补一条强制边 `i -> i+1`，保证总能走到末尾。

use std::sync::Arc;

use crate::{
    dictionary::{CachedDictionary, DictStore},
    error::Error,
    model::{Candidate, Token},
};

/// 一条出边。
#[derive(Debug, Clone)]
pub struct Edge {
    pub end: usize,
    /// 命中的候选；强制边为 `None`
    pub candidates: Option<Arc<[Candidate]>>,
}

impl Edge {
    pub fn is_matched(&self) -> bool {
        self.candidates.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Dag {
    /// edges[i]：从 i 出发的边，按 end 升序
    edges: Vec<Vec<Edge>>,
}

impl Dag {
    /// O(N²) 次查询；含标点的片段不查词典，标点位置只有强制边。
    ///
    /// 因此词典里含标点的编码（例如 `a-b`）永远不会命中。
    pub fn build<S: DictStore>(tokens: &[Token], dict: &CachedDictionary<S>) -> Result<Self, Error> {
        let n = tokens.len();
        let mut edges: Vec<Vec<Edge>> = Vec::with_capacity(n);

        for i in 0..n {
            let mut out = Vec::new();
            let mut key = String::new();
            for j in (i + 1)..=n {
                let token = &tokens[j - 1];
                if token.is_punctuation {
                    break;
                }
                key.push_str(&token.text.to_lowercase());
                let rows = dict.lookup(&key)?;
                if !rows.is_empty() {
                    out.push(Edge {
                        end: j,
                        candidates: Some(rows),
                    });
                }
            }
            if out.is_empty() {
                out.push(Edge {
                    end: i + 1,
                    candidates: None,
                });
            }
            edges.push(out);
        }

        Ok(Self { edges })
    }

    /// token 数 N（节点为 0..=N）。
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self, start: usize) -> &[Edge] {
        self.edges.get(start).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge(&self, start: usize, end: usize) -> Option<&Edge> {
        self.edges(start).iter().find(|e| e.end == end)
    }
}

/// `tokens` 拼接后的小写编码。
pub fn span_key(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.to_lowercase()).collect()
}

/// DAG 构造时会查询的全部编码（不跨越标点），用于批量预取。
pub fn span_keys(tokens: &[Token]) -> Vec<String> {
    let mut keys = Vec::new();
    for i in 0..tokens.len() {
        let mut key = String::new();
        for token in &tokens[i..] {
            if token.is_punctuation {
                break;
            }
            key.push_str(&token.text.to_lowercase());
            keys.push(key.clone());
        }
    }
    keys
}
