use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("访问 {path} 失败：{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TSV 第 {line} 行应有 3 列（key/word/frequency），实际 {fields} 列")]
    Malformed { line: usize, fields: usize },
    #[error("TSV 第 {line} 行词频不是非负整数：{value:?}")]
    BadFrequency { line: usize, value: String },
    #[error("TSV 第 {line} 行编码或词为空")]
    EmptyField { line: usize },
    #[error("快照格式错误：{0}")]
    Snapshot(#[from] bincode::Error),
    #[error("快照版本 {found} 不受支持（期望 {expected}）")]
    Version { found: u32, expected: u32 },
    #[error("写入快照失败：{0}")]
    Persist(#[from] tempfile::PersistError),
}

impl DictError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<DictError> for pinvin_core::Error {
    fn from(e: DictError) -> Self {
        pinvin_core::Error::store(e)
    }
}
