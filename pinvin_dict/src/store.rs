use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use pinvin_core::{Candidate, DictStore};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::DictError;
use crate::tsv::{Record, parse_tsv, read_tsv};

const SNAPSHOT_VERSION: u32 = 1;

/// 落盘的完整状态。
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    /// key -> 候选（导入顺序）；(key, word) 唯一
    entries: BTreeMap<String, Vec<Candidate>>,
    /// word -> 最后一次导入的词频，用于计算归一化常数
    word_frequency: BTreeMap<String, u64>,
    /// Σ (frequency + 1)，每次导入后重算
    total_frequency_mass: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            entries: BTreeMap::new(),
            word_frequency: BTreeMap::new(),
            total_frequency_mass: 0,
        }
    }
}

/// 一次导入的结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub inserted: usize,
    pub replaced: usize,
}

/// 词典存储：内存中的 key -> 候选表，可以整体写入/读取 bincode 快照。
///
/// 写盘先写临时文件再 rename，中途失败不会留下半个快照。
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshot: Snapshot,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut store = Self::new();
        store.import(records);
        store
    }

    pub fn from_tsv_str(s: &str) -> Result<Self, DictError> {
        Ok(Self::from_records(parse_tsv(s)?))
    }

    pub fn from_tsv_path(path: impl AsRef<Path>) -> Result<Self, DictError> {
        Ok(Self::from_records(read_tsv(path)?))
    }

    /// 加载已有快照；文件不存在或格式不对都是错误。
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DictError::io(path, e))?;
        let snapshot: Snapshot = bincode::deserialize_from(BufReader::new(file))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(DictError::Version {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        let store = Self { snapshot };
        info!(
            path = %path.display(),
            keys = store.key_count(),
            entries = store.entry_count(),
            mass = store.snapshot.total_frequency_mass,
            "加载词典快照"
        );
        Ok(store)
    }

    /// 快照不存在时返回空词典（用于首次导入）。
    pub fn open_or_new(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self::new())
        }
    }

    /// 原子写入快照。
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DictError> {
        let path = path.as_ref();
        let parent_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir).map_err(|e| DictError::io(parent_dir, e))?;

        let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| DictError::io(parent_dir, e))?;
        {
            let mut writer = BufWriter::new(&temp_file);
            bincode::serialize_into(&mut writer, &self.snapshot)?;
            writer.flush().map_err(|e| DictError::io(temp_file.path(), e))?;
        }
        temp_file.persist(path)?;
        info!(path = %path.display(), keys = self.key_count(), "写入词典快照");
        Ok(())
    }

    /// 合并一批记录：同一 (key, word) 后写覆盖先写（位置不变），然后重算归一化常数。
    pub fn import(&mut self, records: impl IntoIterator<Item = Record>) -> ImportStats {
        let mut stats = ImportStats::default();
        for Record {
            key,
            word,
            frequency,
        } in records
        {
            let list = self.snapshot.entries.entry(key).or_default();
            match list.iter_mut().find(|c| c.word == word) {
                Some(existing) => {
                    existing.frequency = frequency;
                    stats.replaced += 1;
                }
                None => {
                    list.push(Candidate::new(word.clone(), frequency));
                    stats.inserted += 1;
                }
            }
            self.snapshot.word_frequency.insert(word, frequency);
        }
        self.snapshot.total_frequency_mass = self
            .snapshot
            .word_frequency
            .values()
            .fold(0u64, |acc, f| acc.saturating_add(f.saturating_add(1)));
        info!(
            inserted = stats.inserted,
            replaced = stats.replaced,
            mass = self.snapshot.total_frequency_mass,
            "导入词典记录"
        );
        stats
    }

    pub fn get(&self, key: &str) -> &[Candidate] {
        self.snapshot
            .entries
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn key_count(&self) -> usize {
        self.snapshot.entries.len()
    }

    pub fn entry_count(&self) -> usize {
        self.snapshot.entries.values().map(Vec::len).sum()
    }

    pub fn word_count(&self) -> usize {
        self.snapshot.word_frequency.len()
    }
}

impl DictStore for SnapshotStore {
    fn query(&self, key: &str) -> Result<Vec<Candidate>, pinvin_core::Error> {
        Ok(self.get(key).to_vec())
    }

    fn query_batch(
        &self,
        keys: &[String],
    ) -> Result<HashMap<String, Vec<Candidate>>, pinvin_core::Error> {
        Ok(keys
            .iter()
            .filter_map(|k| {
                self.snapshot
                    .entries
                    .get(k)
                    .map(|rows| (k.clone(), rows.clone()))
            })
            .collect())
    }

    fn total_frequency_mass(&self) -> u64 {
        self.snapshot.total_frequency_mass
    }
}
