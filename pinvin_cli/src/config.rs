//! JSON 配置文件；命令行参数优先于这里的值。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 默认快照路径
    pub db: Option<PathBuf>,
    pub prefetch: Option<bool>,
    pub max_syllable_len: Option<usize>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件：{}", path.display()))?;
        Self::parse(&text).with_context(|| format!("配置文件格式错误：{}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.max_syllable_len == Some(0) {
            bail!("max_syllable_len 必须大于 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn reads_all_fields() {
        let c = Config::parse(r#"{"db": "dict.bin", "prefetch": false, "max_syllable_len": 5}"#)
            .unwrap();
        assert_eq!(c.db.as_deref(), Some(Path::new("dict.bin")));
        assert_eq!(c.prefetch, Some(false));
        assert_eq!(c.max_syllable_len, Some(5));
    }

    #[test]
    fn rejects_unknown_and_invalid_fields() {
        assert!(Config::parse(r#"{"dictionary": "x"}"#).is_err());
        assert!(Config::parse(r#"{"max_syllable_len": 0}"#).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("none.json")).unwrap_err();
        assert!(err.to_string().contains("无法读取配置文件"));
    }
}
