//! `translator`：沿 Viterbi 路由回溯，把 token 序列翻译成输出片段。
//!
//! - 标点原样输出
//! - 命中的片段输出词频最高的候选
//! - 未命中的片段（只会来自强制边）交给 `Resyllabifier` 重新切分后再解一次；
//!   回退最多一层，第二次失败时整次调用返回 `None`

use tracing::debug;

use crate::{
    dag::{Dag, span_key, span_keys},
    dictionary::{CachedDictionary, DictStore},
    engine::Resyllabifier,
    error::Error,
    model::{Token, best_candidate},
    viterbi::Route,
};

/// 递归保护：只允许一层回退重切分。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeDepth {
    Normal,
    InFallback,
}

pub struct Decoder<'a, S, R> {
    pub dict: &'a CachedDictionary<S>,
    pub resyllabifier: &'a R,
    /// 构图前是否批量预取该行所有片段
    pub prefetch: bool,
}

impl<'a, S, R> Decoder<'a, S, R>
where
    S: DictStore,
    R: Resyllabifier,
{
    /// 解码一组 token。
    ///
    /// 返回 `Ok(None)` 只发生在 `InFallback` 层遇到未命中片段时，
    /// 调用方应改为原样输出。
    pub fn decode(&self, tokens: &[Token], depth: DecodeDepth) -> Result<Option<Vec<String>>, Error> {
        if tokens.is_empty() {
            return Ok(Some(Vec::new()));
        }
        if self.prefetch {
            self.dict.prefetch(span_keys(tokens))?;
        }
        let dag = Dag::build(tokens, self.dict)?;
        let route = Route::calc(&dag, self.dict.total_frequency_mass());

        let n = tokens.len();
        let mut out: Vec<String> = Vec::new();
        let mut idx = 0;
        while idx < n {
            if tokens[idx].is_punctuation {
                out.push(tokens[idx].text.clone());
                idx += 1;
                continue;
            }
            let next = route.step(idx).next;
            let span = &tokens[idx..next];
            let best = dag
                .edge(idx, next)
                .and_then(|e| e.candidates.as_deref())
                .and_then(best_candidate);

            match best {
                Some(cand) => out.push(cand.word.clone()),
                None if depth == DecodeDepth::InFallback => {
                    debug!(key = %span_key(span), "回退层仍未命中，放弃");
                    return Ok(None);
                }
                None => out.extend(self.fallback(span)?),
            }
            idx = next;
        }
        Ok(Some(out))
    }

    /// 未命中片段：重切分音节后再解一次，失败则原样输出（以单个空格连接）。
    fn fallback(&self, span: &[Token]) -> Result<Vec<String>, Error> {
        if let Some(syllables) = self.resyllabifier.resyllabify(span) {
            let nested: Vec<Token> = syllables.into_iter().map(Token::literal).collect();
            if let Some(words) = self.decode(&nested, DecodeDepth::InFallback)? {
                debug!(key = %span_key(span), syllables = nested.len(), "重切分成功");
                return Ok(words);
            }
        }
        let raw: Vec<&str> = span.iter().map(|t| t.text.as_str()).collect();
        debug!(raw = %raw.join(" "), "无法翻译，原样输出");
        Ok(vec![raw.join(" ")])
    }
}
