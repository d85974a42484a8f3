use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::{error::Error, model::Candidate};

/// 词典后端抽象：core 不关心数据来自快照文件、内存还是别的存储。
///
/// 约定：
/// - key 已经小写化、不含空白（例如 `nyihau`）
/// - 返回的候选保持导入顺序
/// - 查询是阻塞调用；出错视为致命（解码无法在没有词典的情况下进行）
pub trait DictStore: Send + Sync {
    /// 精确匹配一个编码。
    fn query(&self, key: &str) -> Result<Vec<Candidate>, Error>;

    /// 一次往返查询多个编码；未命中的 key 可以不出现在结果里。
    fn query_batch(&self, keys: &[String]) -> Result<HashMap<String, Vec<Candidate>>, Error> {
        let mut out = HashMap::with_capacity(keys.len());
        for key in keys {
            let rows = self.query(key)?;
            if !rows.is_empty() {
                out.insert(key.clone(), rows);
            }
        }
        Ok(out)
    }

    /// 归一化常数：Σ 每个不同词的 (frequency + 1)。
    fn total_frequency_mass(&self) -> u64;
}

impl<T: DictStore + ?Sized> DictStore for Arc<T> {
    fn query(&self, key: &str) -> Result<Vec<Candidate>, Error> {
        (**self).query(key)
    }

    fn query_batch(&self, keys: &[String]) -> Result<HashMap<String, Vec<Candidate>>, Error> {
        (**self).query_batch(keys)
    }

    fn total_frequency_mass(&self) -> u64 {
        (**self).total_frequency_mass()
    }
}

/// 带缓存的词典：get-or-populate 语义。
///
/// - 未命中时查询后端并缓存结果（空结果也缓存，避免重复 miss）
/// - 会话内从不淘汰
/// - 多线程并发填充同一个 key 时后写覆盖先写，内容相同，无害
pub struct CachedDictionary<S> {
    store: S,
    total_mass: f64,
    cache: RwLock<HashMap<String, Arc<[Candidate]>>>,
}

impl<S: DictStore> CachedDictionary<S> {
    pub fn new(store: S) -> Self {
        let total_mass = store.total_frequency_mass() as f64;
        Self {
            store,
            total_mass,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 归一化常数（构造时读取一次，会话内只读）。
    pub fn total_frequency_mass(&self) -> f64 {
        self.total_mass
    }

    /// 查询一个编码的全部候选。
    pub fn lookup(&self, key: &str) -> Result<Arc<[Candidate]>, Error> {
        let key = key.to_lowercase();
        if let Some(hit) = self.cache.read().get(&key) {
            return Ok(Arc::clone(hit));
        }
        let rows: Arc<[Candidate]> = self.store.query(&key)?.into();
        self.cache.write().insert(key, Arc::clone(&rows));
        Ok(rows)
    }

    /// 编码是否有候选。
    pub fn contains(&self, key: &str) -> Result<bool, Error> {
        Ok(!self.lookup(key)?.is_empty())
    }

    /// 批量预取：对尚未缓存的 key 发一次批量查询，返回本次实际查询的 key 数。
    pub fn prefetch<I>(&self, keys: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let missing: Vec<String> = {
            let cache = self.cache.read();
            let mut v: Vec<String> = keys
                .into_iter()
                .map(|k| k.to_lowercase())
                .filter(|k| !cache.contains_key(k))
                .collect();
            v.sort_unstable();
            v.dedup();
            v
        };
        if missing.is_empty() {
            return Ok(0);
        }

        let mut found = self.store.query_batch(&missing)?;
        let mut cache = self.cache.write();
        for key in &missing {
            let rows: Arc<[Candidate]> = found.remove(key).unwrap_or_default().into();
            cache.insert(key.clone(), rows);
        }
        debug!(keys = missing.len(), cached = cache.len(), "批量预取词典");
        Ok(missing.len())
    }

    /// 已缓存的 key 数（含空结果）。
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }
}
