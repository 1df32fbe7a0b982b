use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputMode;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// 設定ファイル
    #[clap(long, short)]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub(crate) enum Command {
    /// ルールオプションを解釈し、表示形式と保存形式を出力
    ///
    /// 例: icmp6match parse -- ! --icmpv6-type echo-request
    Parse {
        /// 名前を使わず数値で表示
        #[clap(long, short)]
        numeric: bool,

        /// 出力する形式
        #[clap(long, value_enum)]
        output: Option<OutputMode>,

        /// バイナリレコードを16進数で出力
        #[clap(long)]
        record: bool,

        /// ルールオプション（`!`, `--icmpv6-type`, `--icmpv6-type-range`）
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// オプションのヘルプとICMPv6タイプ名の一覧を出力
    Types,

    /// 16進数のバイナリレコードを解釈して出力
    Decode {
        /// 名前を使わず数値で表示
        #[clap(long, short)]
        numeric: bool,

        /// 7バイトのレコード（例: "80 00 ff 00 00 00 00"）
        record: String,
    },
}

impl Cli {
    pub(crate) fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
