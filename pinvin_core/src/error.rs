/// core 层唯一的错误来源：词典存储不可用。
///
/// 解码本身不会因为输入内容失败（无法匹配的片段原样输出），
/// 只有后端存储出错时才会返回 `Err`，调用方应视为致命错误。
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("词典存储不可用：{0}")]
    Store(String),
}

impl Error {
    pub fn store(msg: impl std::fmt::Display) -> Self {
        Self::Store(msg.to_string())
    }
}
