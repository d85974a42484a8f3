//! `pinvin_core`：纯逻辑层，不做任何文件 I/O。
//!
//! 把一行无分隔的 pinvin 编码转换成汉字文本：
//! - **tokenizer**：按标点/空白切成 token
//! - **dag**：以 token 边界为节点、词典命中为边构造有向无环图
//! - **viterbi**：自右向左求每个位置到末尾的最优路径
//! - **translator**：沿最优路径回溯出词，未命中时交给 `Resyllabifier` 重新切分
//! - **formatter**：拼接输出，只在相邻拉丁字母/数字之间补空格
//!
//! 词典存储（文件/内存）通过 `dictionary::DictStore` 注入，音节表通过
//! `engine::Resyllabifier` 注入。
pub mod dag;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod model;
pub mod session;
pub mod tokenizer;
pub mod translator;
pub mod viterbi;

pub use dictionary::{CachedDictionary, DictStore};
pub use engine::{Engine, EngineConfig, Resyllabifier};
pub use error::Error;
pub use model::{Candidate, Token};

#[cfg(test)]
pub(crate) mod test_support;
