//! `Session`：面向上层（CLI）的按行转换会话。
//!
//! `Session` 自身不做转换逻辑，而是：
//! - 持有 `Engine`（词典缓存跨行保留）
//! - 跳过空行
//! - 统计处理/跳过的行数

use crate::{
    dictionary::DictStore,
    engine::{Engine, Resyllabifier},
    error::Error,
};

/// 会话统计。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub converted: usize,
    pub skipped: usize,
}

pub struct Session<S, R> {
    engine: Engine<S, R>,
    stats: SessionStats,
}

impl<S, R> Session<S, R>
where
    S: DictStore,
    R: Resyllabifier,
{
    pub fn new(engine: Engine<S, R>) -> Self {
        Self {
            engine,
            stats: SessionStats::default(),
        }
    }

    pub fn engine(&self) -> &Engine<S, R> {
        &self.engine
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// 转换一行；空行（去掉首尾空白后为空）返回 `None`。
    pub fn convert_line(&mut self, line: &str) -> Result<Option<String>, Error> {
        let line = line.trim();
        if line.is_empty() {
            self.stats.skipped += 1;
            return Ok(None);
        }
        let text = self.engine.convert(line)?;
        self.stats.converted += 1;
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixtureStore, NoSyllables};

    #[test]
    fn skips_blank_lines_and_counts() {
        let engine = Engine::new(FixtureStore::new(&[("hau", "好", 1)]), NoSyllables);
        let mut session = Session::new(engine);
        let lines = ["hau", "", "   ", "hau hau!"];
        let out: Vec<Option<String>> = lines
            .iter()
            .map(|l| session.convert_line(l).unwrap())
            .collect();
        assert_eq!(
            out,
            [Some("好".to_string()), None, None, Some("好好！".to_string())]
        );
        assert_eq!(
            session.stats(),
            SessionStats {
                converted: 2,
                skipped: 2
            }
        );
    }

    #[test]
    fn cache_survives_across_lines() {
        let engine = Engine::new(FixtureStore::new(&[("hau", "好", 1)]), NoSyllables);
        let mut session = Session::new(engine);
        session.convert_line("hau").unwrap();
        let batches = session.engine().dictionary().store().batches();
        session.convert_line("hau").unwrap();
        assert_eq!(session.engine().dictionary().store().batches(), batches);
    }
}
