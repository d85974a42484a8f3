//! pinvin 词典：TSV 导入 + bincode 快照存储。
//!
//! - `tsv`：解析 `key<TAB>word<TAB>frequency`
//! - `store`：`SnapshotStore`，实现 `pinvin_core::DictStore`，可原子地落盘/加载

pub mod error;
pub mod store;
pub mod tsv;

pub use error::DictError;
pub use store::SnapshotStore;
pub use tsv::{Record, normalize_key, parse_tsv, read_tsv};
