//! 命令行参数定义

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pinvin")]
#[command(about = "把无分隔的 pinvin 编码转换为汉字文本")]
#[command(version)]
pub struct Cli {
    /// JSON 配置文件
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 导入一个或多个 TSV 词典到快照（不存在则新建）
    Import {
        /// TSV 文件：key<TAB>word<TAB>frequency
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// 快照文件
        #[arg(short, long)]
        db: Option<PathBuf>,
    },

    /// 逐行转换（默认读取标准输入）
    Decode {
        #[command(flatten)]
        source: DictSource,

        /// 输入文件
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 关闭按行批量预取
        #[arg(long)]
        no_prefetch: bool,

        /// 单个音节的最大长度（至少为 1）
        #[arg(short = 'm', long, value_parser = syllable_len_parser())]
        max_syllable_len: Option<usize>,
    },

    /// 查询某个编码的全部候选
    Lookup {
        /// 编码（空白会被忽略）
        key: String,

        #[command(flatten)]
        source: DictSource,
    },

    /// 打印一段连写编码的音节切分
    Split {
        text: String,

        /// 单个音节的最大长度（至少为 1）
        #[arg(short = 'm', long, value_parser = syllable_len_parser())]
        max_syllable_len: Option<usize>,
    },
}

/// 词典来源：快照或 TSV 二选一。
#[derive(Args, Debug, Clone, Default)]
pub struct DictSource {
    /// 快照文件
    #[arg(short, long, conflicts_with = "tsv")]
    pub db: Option<PathBuf>,

    /// 直接加载 TSV 词典（不落盘）
    #[arg(short, long)]
    pub tsv: Option<PathBuf>,
}

fn syllable_len_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..)
}
