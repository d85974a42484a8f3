use tracing::debug;

use crate::dictionary::{CachedDictionary, DictStore};
use crate::error::Error;
use crate::formatter::format_output;
use crate::model::Token;
use crate::tokenizer::tokenize;
use crate::translator::{DecodeDepth, Decoder};

/// 纯接口：把无法直接命中的 token 重新切分成合法音节。
///
/// 任意一个 token 无法完整切分时返回 `None`（不使用部分结果）。
/// `pinvin_syllable::SyllableSplitter` 是默认实现。
pub trait Resyllabifier: Send + Sync {
    fn resyllabify(&self, tokens: &[Token]) -> Option<Vec<String>>;
}

/// 引擎配置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// 构图前批量预取一行内所有可能的编码（一次后端往返）
    pub prefetch: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { prefetch: true }
    }
}

/// 引擎：持有带缓存的词典与音节切分器，负责一行输入的完整流水线。
///
/// tokenizer -> dag -> viterbi -> translator（必要时 resyllabify）-> formatter
pub struct Engine<S, R> {
    /// 词典（进程级，缓存只增不减）
    dictionary: CachedDictionary<S>,
    /// 回退时使用的音节切分器
    resyllabifier: R,
    config: EngineConfig,
}

impl<S, R> Engine<S, R>
where
    S: DictStore,
    R: Resyllabifier,
{
    pub fn new(store: S, resyllabifier: R) -> Self {
        Self {
            dictionary: CachedDictionary::new(store),
            resyllabifier,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dictionary(&self) -> &CachedDictionary<S> {
        &self.dictionary
    }

    /// 转换一行输入；空行返回空串。
    pub fn convert(&self, line: &str) -> Result<String, Error> {
        let tokens = tokenize(line);
        let pieces = self.decode_tokens(&tokens)?;
        let text = format_output(&pieces);
        debug!(input = line, output = %text, tokens = tokens.len(), "转换完成");
        Ok(text)
    }

    /// 解码 token 序列为输出片段（未格式化）。
    ///
    /// 顶层解码总会产出结果：未命中的片段已在回退中原样保留。
    pub fn decode_tokens(&self, tokens: &[Token]) -> Result<Vec<String>, Error> {
        let decoder = self.decoder();
        match decoder.decode(tokens, DecodeDepth::Normal)? {
            Some(pieces) => Ok(pieces),
            None => Ok(tokens.iter().map(|t| t.text.clone()).collect()),
        }
    }

    fn decoder(&self) -> Decoder<'_, S, R> {
        Decoder {
            dict: &self.dictionary,
            resyllabifier: &self.resyllabifier,
            prefetch: self.config.prefetch,
        }
    }
}
