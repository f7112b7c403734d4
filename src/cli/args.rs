// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "bard_lines",
    version = crate::VERSION,
    about = "フォルダ内の各戯曲の行数を数え、降順で表示するツール"
)]
pub struct Args {
    /// 戯曲ファイルを読み込むフォルダ
    #[arg(default_value = "plays", value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// 対象とするファイルの拡張子
    #[arg(long, default_value = ".txt")]
    pub ext: String,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// ログを詳細にする（-vv でさらに詳細）
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "ログ")]
    pub verbose: u8,

    /// ログを出力しない
    #[arg(short, long, help_heading = "ログ")]
    pub quiet: bool,
}
