use std::{fs, path::Path};

use crate::error::DictError;

/// 一行导入记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub word: String,
    pub frequency: u64,
}

/// 编码归一化：小写、去掉所有空白。
///
/// 生成工具输出的编码按音节以空格分隔（`nyi hau`），解码时 token 是直接拼接的（`nyihau`）。
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// TSV 格式：
///
/// - `key<TAB>word<TAB>frequency`，三列必须齐全
/// - 允许空行与 `#` 开头的注释行
///
/// 任何一行格式错误都让整次导入失败，不返回部分结果。
pub fn parse_tsv(s: &str) -> Result<Vec<Record>, DictError> {
    let mut out = Vec::new();
    for (idx, raw) in s.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(DictError::Malformed {
                line: line_no,
                fields: fields.len(),
            });
        }
        let key = normalize_key(fields[0]);
        let word = fields[1].trim();
        if key.is_empty() || word.is_empty() {
            return Err(DictError::EmptyField { line: line_no });
        }
        let frequency = fields[2]
            .trim()
            .parse::<u64>()
            .map_err(|_| DictError::BadFrequency {
                line: line_no,
                value: fields[2].to_string(),
            })?;
        out.push(Record {
            key,
            word: word.to_string(),
            frequency,
        });
    }
    Ok(out)
}

pub fn read_tsv(path: impl AsRef<Path>) -> Result<Vec<Record>, DictError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| DictError::io(path, e))?;
    parse_tsv(&s)
}
