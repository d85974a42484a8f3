//! 子命令实现

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use pinvin_core::session::{Session, SessionStats};
use pinvin_core::{DictStore, Engine, EngineConfig, Resyllabifier};
use pinvin_dict::{SnapshotStore, normalize_key, read_tsv};
use pinvin_syllable::SyllableSplitter;
use tracing::info;

use crate::args::{Commands, DictSource};
use crate::config::Config;

pub fn execute(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Import { inputs, db } => {
            let db = resolve_db(db, config)?;
            cmd_import(&inputs, &db)
        }
        Commands::Decode {
            source,
            input,
            no_prefetch,
            max_syllable_len,
        } => {
            let store = open_store(&source, config)?;
            let engine_config = EngineConfig {
                prefetch: !no_prefetch && config.prefetch.unwrap_or(true),
            };
            let splitter = splitter(max_syllable_len, config);
            cmd_decode(store, splitter, engine_config, input.as_deref())
        }
        Commands::Lookup { key, source } => {
            let store = open_store(&source, config)?;
            cmd_lookup(&store, &key)
        }
        Commands::Split {
            text,
            max_syllable_len,
        } => cmd_split(&splitter(max_syllable_len, config), &text),
    }
}

fn resolve_db(db: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match db.or_else(|| config.db.clone()) {
        Some(p) => Ok(p),
        None => bail!("未指定快照文件：使用 --db 或在配置文件中设置 db"),
    }
}

fn open_store(source: &DictSource, config: &Config) -> Result<SnapshotStore> {
    if let Some(tsv) = &source.tsv {
        return SnapshotStore::from_tsv_path(tsv)
            .with_context(|| format!("无法加载 TSV 词典：{}", tsv.display()));
    }
    let db = resolve_db(source.db.clone(), config)?;
    SnapshotStore::open(&db).with_context(|| format!("无法打开词典快照：{}", db.display()))
}

fn splitter(max_syllable_len: Option<usize>, config: &Config) -> SyllableSplitter {
    let splitter = SyllableSplitter::new();
    match max_syllable_len.or(config.max_syllable_len) {
        Some(n) => splitter.max_syllable_len(n),
        None => splitter,
    }
}

/// 先解析全部输入文件，任何一个出错都不改动快照。
fn cmd_import(inputs: &[PathBuf], db: &Path) -> Result<()> {
    let mut batches = Vec::with_capacity(inputs.len());
    for path in inputs {
        let records =
            read_tsv(path).with_context(|| format!("导入失败：{}", path.display()))?;
        info!(path = %path.display(), records = records.len(), "解析 TSV");
        batches.push(records);
    }

    let mut store = SnapshotStore::open_or_new(db)
        .with_context(|| format!("无法打开词典快照：{}", db.display()))?;
    let (mut inserted, mut replaced) = (0, 0);
    for records in batches {
        let stats = store.import(records);
        inserted += stats.inserted;
        replaced += stats.replaced;
    }
    store
        .save(db)
        .with_context(|| format!("无法写入词典快照：{}", db.display()))?;

    println!(
        "新增 {inserted} 条，覆盖 {replaced} 条；共 {} 个编码，{} 条候选",
        store.key_count(),
        store.entry_count()
    );
    Ok(())
}

fn cmd_decode<S, R>(
    store: S,
    resyllabifier: R,
    config: EngineConfig,
    input: Option<&Path>,
) -> Result<()>
where
    S: DictStore,
    R: Resyllabifier,
{
    let mut session = Session::new(Engine::new(store, resyllabifier).with_config(config));
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let stats = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("无法打开输入：{}", path.display()))?;
            decode_lines(&mut session, BufReader::new(file), &mut out)?
        }
        None => decode_lines(&mut session, io::stdin().lock(), &mut out)?,
    };
    out.flush()?;
    info!(converted = stats.converted, skipped = stats.skipped, "转换结束");
    Ok(())
}

/// 每个非空输入行输出一行；存储错误直接中止。
pub fn decode_lines<S, R>(
    session: &mut Session<S, R>,
    reader: impl BufRead,
    out: &mut impl Write,
) -> Result<SessionStats>
where
    S: DictStore,
    R: Resyllabifier,
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("读取输入失败")?;
        let converted = session
            .convert_line(&line)
            .with_context(|| format!("第 {} 行转换失败", idx + 1))?;
        if let Some(text) = converted {
            writeln!(out, "{text}")?;
        }
    }
    Ok(session.stats())
}

fn cmd_lookup(store: &SnapshotStore, key: &str) -> Result<()> {
    let key = normalize_key(key);
    let rows = store.get(&key);
    if rows.is_empty() {
        println!("{key}: (无候选)");
        return Ok(());
    }
    for c in rows {
        println!("{}\t{}", c.word, c.frequency);
    }
    Ok(())
}

fn cmd_split(splitter: &SyllableSplitter, text: &str) -> Result<()> {
    let mut parts = Vec::new();
    for word in text.split_whitespace() {
        match splitter.split(word) {
            Some(syllables) => parts.push(syllables.join(" ")),
            None => bail!("无法切分为音节：{word}"),
        }
    }
    println!("{}", parts.join(" | "));
    Ok(())
}
