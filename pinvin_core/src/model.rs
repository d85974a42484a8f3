use serde::{Deserialize, Serialize};

/// 输入行切分后的最小单位。
///
/// 在一行之内按位置标识（DAG 的节点就是 token 边界），生成后不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 标点 token 存的是映射后的全角标点；普通 token 保留原始大小写
    pub text: String,
    pub is_punctuation: bool,
}

impl Token {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_punctuation: false,
        }
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_punctuation: true,
        }
    }
}

/// 词典候选：某个编码下的一个词及其词频。
///
/// 同一编码下的候选保持导入顺序，解码时词频相同取靠前者。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub frequency: u64,
}

impl Candidate {
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// 取词频最高的候选；并列时返回最先出现的那个。
pub fn best_candidate(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.iter().fold(None, |best, c| match best {
        Some(b) if b.frequency >= c.frequency => Some(b),
        _ => Some(c),
    })
}
