//! 自右向左最长匹配的音节重切分。

use pinvin_core::{Resyllabifier, Token};
use tracing::trace;

use crate::table::{MAX_SYLLABLE_LEN, SyllableTable};

/// 把连写的编码拆回音节：从末尾起取属于音节表的最长后缀，重复直到耗尽。
///
/// 某一步找不到任何 1..=max_len 长度的合法后缀时，该 token 切分失败。
pub struct SyllableSplitter {
    table: &'static SyllableTable,
    max_syllable_len: usize,
}

impl Default for SyllableSplitter {
    fn default() -> Self {
        Self {
            table: SyllableTable::global(),
            max_syllable_len: MAX_SYLLABLE_LEN,
        }
    }
}

impl SyllableSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 限制单个音节的最大长度；0 会回退到 1。
    pub fn max_syllable_len(mut self, n: usize) -> Self {
        self.max_syllable_len = n.max(1);
        self
    }

    pub fn table(&self) -> &SyllableTable {
        self.table
    }

    /// 切分单个字符串（先小写化）；失败返回 `None`。
    pub fn split(&self, text: &str) -> Option<Vec<String>> {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        if chars.is_empty() {
            return None;
        }

        let mut out: Vec<String> = Vec::new();
        let mut end = chars.len();
        while end > 0 {
            let longest = end.min(self.max_syllable_len);
            let found = (1..=longest).rev().find_map(|len| {
                let cand: String = chars[end - len..end].iter().collect();
                self.table.contains(&cand).then_some((len, cand))
            });
            let Some((len, syllable)) = found else {
                trace!(text, remaining = end, "无法切分为音节");
                return None;
            };
            out.push(syllable);
            end -= len;
        }
        out.reverse();
        Some(out)
    }
}

impl Resyllabifier for SyllableSplitter {
    fn resyllabify(&self, tokens: &[Token]) -> Option<Vec<String>> {
        let mut out = Vec::new();
        for token in tokens {
            out.extend(self.split(&token.text)?);
        }
        Some(out)
    }
}
